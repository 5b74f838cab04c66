//! # Project Configuration
//!
//! Project-wide settings for one phase of the works (demolition or reform),
//! the material-physics constants used by the debris calculator, and the
//! non-room entities the takeoff consumes: wall demolitions, new partitions,
//! wall linings, and the electrical point counts.
//!
//! Every `?? default` fallback the host might otherwise scatter across call
//! sites lives here instead: [`DemolitionSettings::default`] is the single
//! settings-with-defaults resolution point, so downstream formulas can assume
//! fully-populated settings.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::finishes::fold_label;

/// Which phase of the works a [`GlobalConfig`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Demolition,
    Reform,
}

/// Building structure type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StructureType {
    #[default]
    Concrete,
    Wood,
    Mixed,
}

/// Heating system type, current or planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeatingType {
    #[default]
    None,
    Gas,
    Electric,
    Other,
}

impl HeatingType {
    /// Parse from common string representations (Spanish or English).
    ///
    /// Unknown labels map to `Other`.
    pub fn parse_flexible(s: &str) -> Self {
        match fold_label(s).as_str() {
            "" | "ninguna" | "none" | "sin calefaccion" => HeatingType::None,
            "gas" | "gas natural" | "caldera de gas" => HeatingType::Gas,
            "electrica" | "electric" | "electricidad" => HeatingType::Electric,
            _ => HeatingType::Other,
        }
    }
}

/// What happens to the entrance door during the reform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EntranceDoorType {
    /// The existing entrance door is kept
    #[default]
    Keep,
    /// Replace with a standard door
    Standard,
    /// Replace with an armored door
    Armored,
}

/// Which faces of a demolished wall carry tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TileSides {
    #[default]
    One,
    Both,
}

impl TileSides {
    /// Face count as a multiplier
    pub fn count(&self) -> f64 {
        match self {
            TileSides::One => 1.0,
            TileSides::Both => 2.0,
        }
    }
}

/// An existing wall to be demolished. Not tied to any room; the wall height
/// is the phase's standard height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallDemolition {
    pub id: Uuid,
    /// Wall length in metres
    pub length: f64,
    /// Wall thickness in centimetres
    pub thickness_cm: f64,
    pub has_tiles: bool,
    pub tiles_sides: TileSides,
    /// Tile layer thickness in centimetres
    pub tile_thickness_cm: f64,
}

impl Default for WallDemolition {
    fn default() -> Self {
        WallDemolition {
            id: Uuid::new_v4(),
            length: 0.0,
            thickness_cm: 10.0,
            has_tiles: false,
            tiles_sides: TileSides::One,
            tile_thickness_cm: 2.0,
        }
    }
}

/// Partition wall construction system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PartitionKind {
    #[default]
    Brick,
    Plasterboard,
}

/// A wall to be newly built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Partition {
    pub id: Uuid,
    pub kind: PartitionKind,
    pub linear_meters: f64,
    /// Height in metres
    pub height: f64,
}

impl Default for Partition {
    fn default() -> Self {
        Partition {
            id: Uuid::new_v4(),
            kind: PartitionKind::Brick,
            linear_meters: 0.0,
            height: 0.0,
        }
    }
}

impl Partition {
    /// Face area in m2
    pub fn area(&self) -> f64 {
        self.linear_meters * self.height
    }
}

/// A single-sided plasterboard cladding over an existing wall (trasdosado).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallLining {
    pub id: Uuid,
    pub linear_meters: f64,
    /// Height in metres
    pub height: f64,
}

impl Default for WallLining {
    fn default() -> Self {
        WallLining {
            id: Uuid::new_v4(),
            linear_meters: 0.0,
            height: 0.0,
        }
    }
}

impl WallLining {
    /// Face area in m2
    pub fn area(&self) -> f64 {
        self.linear_meters * self.height
    }
}

/// Electrical installation point counts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ElectricalConfig {
    /// Light points
    pub num_points: u32,
    pub num_sockets: u32,
    pub num_tv_points: u32,
    pub num_ac_points: u32,
    /// Replace the distribution panel
    pub has_new_panel: bool,
}

/// Project-wide settings for one phase.
///
/// The demolition-phase config carries the wall-demolition list; the
/// reform-phase config carries the new-partition and wall-lining lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    pub phase: Phase,
    /// Fallback wall/ceiling height in metres
    pub standard_height: f64,
    pub structure_type: StructureType,
    /// Current heating system (demolition side)
    pub heating_type: HeatingType,
    /// Planned heating system (reform side)
    pub reform_heating_type: HeatingType,

    // === Whole-project toggles ===
    pub remove_wooden_floor: bool,
    pub remove_all_ceramic: bool,
    pub all_walls_have_gotele: bool,
    pub lower_all_ceilings: bool,
    pub tile_all_floors: bool,
    pub paint_and_plaster_all: bool,
    pub paint_ceilings: bool,
    pub entrance_door_type: EntranceDoorType,
    pub change_boiler: bool,
    pub remove_water_heater: bool,
    pub install_gas_boiler: bool,
    pub install_gas_connection: bool,
    pub install_water_heater: bool,

    // === Building access, consumed by the debris labor models ===
    /// Storeys above street level
    pub floors: u32,
    pub has_elevator: bool,

    // === Phase-owned entity lists ===
    pub wall_demolitions: Vec<WallDemolition>,
    pub partitions: Vec<Partition>,
    pub wall_linings: Vec<WallLining>,
}

/// Default fallback wall/ceiling height (m)
pub const DEFAULT_STANDARD_HEIGHT_M: f64 = 2.5;

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            phase: Phase::Demolition,
            standard_height: DEFAULT_STANDARD_HEIGHT_M,
            structure_type: StructureType::Concrete,
            heating_type: HeatingType::None,
            reform_heating_type: HeatingType::None,
            remove_wooden_floor: false,
            remove_all_ceramic: false,
            all_walls_have_gotele: false,
            lower_all_ceilings: false,
            tile_all_floors: false,
            paint_and_plaster_all: false,
            paint_ceilings: false,
            entrance_door_type: EntranceDoorType::Keep,
            change_boiler: false,
            remove_water_heater: false,
            install_gas_boiler: false,
            install_gas_connection: false,
            install_water_heater: false,
            floors: 1,
            has_elevator: true,
            wall_demolitions: Vec::new(),
            partitions: Vec::new(),
            wall_linings: Vec::new(),
        }
    }
}

impl GlobalConfig {
    /// Create a demolition-phase config with defaults
    pub fn demolition() -> Self {
        GlobalConfig {
            phase: Phase::Demolition,
            ..GlobalConfig::default()
        }
    }

    /// Create a reform-phase config with defaults
    pub fn reform() -> Self {
        GlobalConfig {
            phase: Phase::Reform,
            ..GlobalConfig::default()
        }
    }
}

// Material thickness defaults (m)
const DEFAULT_FLOOR_TILE_THICKNESS_M: f64 = 0.01;
const DEFAULT_WALL_TILE_THICKNESS_M: f64 = 0.01;
const DEFAULT_MORTAR_BASE_THICKNESS_M: f64 = 0.05;
const DEFAULT_WOODEN_FLOOR_THICKNESS_M: f64 = 0.02;
const DEFAULT_FALSE_CEILING_THICKNESS_M: f64 = 0.015;

// Expansion coefficients: loose rubble volume per solid in-place volume
const DEFAULT_CERAMIC_EXPANSION: f64 = 1.4;
const DEFAULT_MORTAR_EXPANSION: f64 = 1.3;
const DEFAULT_WOODEN_FLOOR_EXPANSION: f64 = 1.2;
const DEFAULT_CEILING_EXPANSION: f64 = 1.3;
const DEFAULT_WALL_EXPANSION: f64 = 1.3;

/// Default skip volume (m3)
const DEFAULT_CONTAINER_SIZE_M3: f64 = 5.0;

/// Material-physics constants for the debris volume math.
///
/// All thicknesses are metres of solid in-place material; expansion
/// coefficients convert solid volume to loose rubble volume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemolitionSettings {
    pub floor_tile_thickness_m: f64,
    pub wall_tile_thickness_m: f64,
    pub ceramic_expansion: f64,
    pub mortar_base_thickness_m: f64,
    pub mortar_expansion: f64,
    pub wooden_floor_thickness_m: f64,
    pub wooden_floor_expansion: f64,
    pub false_ceiling_thickness_m: f64,
    pub ceiling_expansion: f64,
    pub wall_expansion: f64,
    /// Skip volume in m3
    pub container_size_m3: f64,
}

impl Default for DemolitionSettings {
    fn default() -> Self {
        DemolitionSettings {
            floor_tile_thickness_m: DEFAULT_FLOOR_TILE_THICKNESS_M,
            wall_tile_thickness_m: DEFAULT_WALL_TILE_THICKNESS_M,
            ceramic_expansion: DEFAULT_CERAMIC_EXPANSION,
            mortar_base_thickness_m: DEFAULT_MORTAR_BASE_THICKNESS_M,
            mortar_expansion: DEFAULT_MORTAR_EXPANSION,
            wooden_floor_thickness_m: DEFAULT_WOODEN_FLOOR_THICKNESS_M,
            wooden_floor_expansion: DEFAULT_WOODEN_FLOOR_EXPANSION,
            false_ceiling_thickness_m: DEFAULT_FALSE_CEILING_THICKNESS_M,
            ceiling_expansion: DEFAULT_CEILING_EXPANSION,
            wall_expansion: DEFAULT_WALL_EXPANSION,
            container_size_m3: DEFAULT_CONTAINER_SIZE_M3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults_from_empty_json() {
        let settings: DemolitionSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings.floor_tile_thickness_m, 0.01);
        assert_eq!(settings.ceramic_expansion, 1.4);
        assert_eq!(settings.container_size_m3, 5.0);
    }

    #[test]
    fn test_config_defaults_from_empty_json() {
        let config: GlobalConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.phase, Phase::Demolition);
        assert_eq!(config.standard_height, DEFAULT_STANDARD_HEIGHT_M);
        assert!(config.has_elevator);
        assert!(config.wall_demolitions.is_empty());
    }

    #[test]
    fn test_heating_type_synonyms() {
        assert_eq!(HeatingType::parse_flexible("Eléctrica"), HeatingType::Electric);
        assert_eq!(HeatingType::parse_flexible("Gas natural"), HeatingType::Gas);
        assert_eq!(HeatingType::parse_flexible(""), HeatingType::None);
        assert_eq!(HeatingType::parse_flexible("leña"), HeatingType::Other);
    }

    #[test]
    fn test_partition_and_lining_area() {
        let partition = Partition {
            kind: PartitionKind::Plasterboard,
            linear_meters: 10.0,
            height: 2.4,
            ..Partition::default()
        };
        assert!((partition.area() - 24.0).abs() < 1e-9);

        let lining = WallLining {
            linear_meters: 5.0,
            height: 2.5,
            ..WallLining::default()
        };
        assert!((lining.area() - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_tile_sides_multiplier() {
        assert_eq!(TileSides::One.count(), 1.0);
        assert_eq!(TileSides::Both.count(), 2.0);
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let mut config = GlobalConfig::reform();
        config.reform_heating_type = HeatingType::Electric;
        config.partitions.push(Partition {
            kind: PartitionKind::Plasterboard,
            linear_meters: 4.0,
            height: 2.5,
            ..Partition::default()
        });

        let json = serde_json::to_string_pretty(&config).unwrap();
        let roundtrip: GlobalConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, roundtrip);
    }
}
