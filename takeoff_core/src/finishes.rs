//! # Surface Finishes
//!
//! Closed enumerations for floor and wall finishes, plus the single
//! normalization point that turns free-text material strings into them.
//! Room records arrive from the UI and from the room-detection collaborator
//! with human-entered labels ("Cerámica", "parquet flotante", "Gotelé"...),
//! so parsing is case- and accent-insensitive and accepts both Spanish and
//! English synonyms. Unknown labels map to `Other`, never an error:
//! downstream rules simply skip finishes they have no rule for.
//!
//! ## Example
//!
//! ```rust
//! use takeoff_core::finishes::{FloorMaterial, WallMaterial};
//!
//! assert_eq!(FloorMaterial::parse_flexible("Cerámica"), FloorMaterial::Ceramic);
//! assert_eq!(FloorMaterial::parse_flexible("parquet flotante"), FloorMaterial::FloatingParquet);
//! assert_eq!(WallMaterial::parse_flexible("Gotelé"), WallMaterial::Gotele);
//! assert_eq!(WallMaterial::parse_flexible("something odd"), WallMaterial::Other);
//! ```

use serde::{Deserialize, Serialize};

/// Lowercase a label and strip the Spanish accented vowels so matching is
/// insensitive to both case and accents.
pub(crate) fn fold_label(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' | 'ü' => 'u',
            'ñ' => 'n',
            other => other,
        })
        .collect()
}

/// Floor finish of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FloorMaterial {
    /// Ceramic tiling
    Ceramic,
    /// Solid wood flooring
    Wood,
    /// Floating parquet (laminate)
    FloatingParquet,
    /// The existing floor is kept
    NoChange,
    /// Anything the engine has no rule for
    #[default]
    Other,
}

impl FloorMaterial {
    /// All floor material variants for UI selection
    pub const ALL: [FloorMaterial; 5] = [
        FloorMaterial::Ceramic,
        FloorMaterial::Wood,
        FloorMaterial::FloatingParquet,
        FloorMaterial::NoChange,
        FloorMaterial::Other,
    ];

    /// Parse from common string representations (Spanish or English).
    ///
    /// Unknown labels map to `Other`.
    pub fn parse_flexible(s: &str) -> Self {
        match fold_label(s).as_str() {
            "ceramica" | "ceramic" | "ceramico" | "gres" | "tile" => FloorMaterial::Ceramic,
            "madera" | "wood" | "tarima" => FloorMaterial::Wood,
            "parquet flotante" | "parquet" | "floating parquet" | "laminado" | "laminate" => {
                FloorMaterial::FloatingParquet
            }
            "sin cambio" | "sin cambios" | "no change" | "unchanged" | "" => {
                FloorMaterial::NoChange
            }
            _ => FloorMaterial::Other,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FloorMaterial::Ceramic => "Ceramic",
            FloorMaterial::Wood => "Wood",
            FloorMaterial::FloatingParquet => "Floating parquet",
            FloorMaterial::NoChange => "No change",
            FloorMaterial::Other => "Other",
        }
    }

    /// True for timber-based finishes (solid wood or floating parquet)
    pub fn is_wood(&self) -> bool {
        matches!(self, FloorMaterial::Wood | FloorMaterial::FloatingParquet)
    }
}

impl std::fmt::Display for FloorMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Wall finish of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WallMaterial {
    /// Ceramic wall tiling
    Ceramic,
    /// Textured coating (gotelé)
    Gotele,
    /// Wallpaper
    Wallpaper,
    /// Smooth plaster, no paint
    PlasterOnly,
    /// Smooth plaster plus paint
    PlasterAndPaint,
    /// The existing wall finish is kept
    NoChange,
    /// Anything the engine has no rule for
    #[default]
    Other,
}

impl WallMaterial {
    /// All wall material variants for UI selection
    pub const ALL: [WallMaterial; 7] = [
        WallMaterial::Ceramic,
        WallMaterial::Gotele,
        WallMaterial::Wallpaper,
        WallMaterial::PlasterOnly,
        WallMaterial::PlasterAndPaint,
        WallMaterial::NoChange,
        WallMaterial::Other,
    ];

    /// Parse from common string representations (Spanish or English).
    ///
    /// Unknown labels map to `Other`.
    pub fn parse_flexible(s: &str) -> Self {
        match fold_label(s).as_str() {
            "ceramica" | "ceramic" | "azulejo" | "alicatado" | "tile" => WallMaterial::Ceramic,
            "gotele" | "textured" => WallMaterial::Gotele,
            "papel pintado" | "papel" | "wallpaper" => WallMaterial::Wallpaper,
            "enlucido" | "plaster" | "plaster only" => WallMaterial::PlasterOnly,
            "enlucido y pintura" | "plaster and paint" | "paint" | "pintura" => {
                WallMaterial::PlasterAndPaint
            }
            "sin cambio" | "sin cambios" | "no change" | "unchanged" | "" => WallMaterial::NoChange,
            _ => WallMaterial::Other,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            WallMaterial::Ceramic => "Ceramic",
            WallMaterial::Gotele => "Gotele",
            WallMaterial::Wallpaper => "Wallpaper",
            WallMaterial::PlasterOnly => "Plaster only",
            WallMaterial::PlasterAndPaint => "Plaster and paint",
            WallMaterial::NoChange => "No change",
            WallMaterial::Other => "Other",
        }
    }
}

impl std::fmt::Display for WallMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_and_case_folding() {
        assert_eq!(fold_label("  Cerámica "), "ceramica");
        assert_eq!(fold_label("GOTELÉ"), "gotele");
        assert_eq!(fold_label("Enlucido y Pintura"), "enlucido y pintura");
    }

    #[test]
    fn test_floor_material_synonyms() {
        assert_eq!(FloorMaterial::parse_flexible("Cerámica"), FloorMaterial::Ceramic);
        assert_eq!(FloorMaterial::parse_flexible("ceramic"), FloorMaterial::Ceramic);
        assert_eq!(
            FloorMaterial::parse_flexible("Parquet Flotante"),
            FloorMaterial::FloatingParquet
        );
        assert_eq!(FloorMaterial::parse_flexible("sin cambios"), FloorMaterial::NoChange);
    }

    #[test]
    fn test_wall_material_synonyms() {
        assert_eq!(WallMaterial::parse_flexible("Azulejo"), WallMaterial::Ceramic);
        assert_eq!(WallMaterial::parse_flexible("gotelé"), WallMaterial::Gotele);
        assert_eq!(
            WallMaterial::parse_flexible("Enlucido y pintura"),
            WallMaterial::PlasterAndPaint
        );
    }

    #[test]
    fn test_unknown_labels_fall_through_to_other() {
        assert_eq!(FloorMaterial::parse_flexible("moqueta verde"), FloorMaterial::Other);
        assert_eq!(WallMaterial::parse_flexible("corcho"), WallMaterial::Other);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let json = serde_json::to_string(&WallMaterial::PlasterAndPaint).unwrap();
        let roundtrip: WallMaterial = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, WallMaterial::PlasterAndPaint);
    }
}
