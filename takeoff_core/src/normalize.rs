//! # Room Normalizer
//!
//! Turns a raw [`RoomInput`] into the canonical [`Room`] shape the
//! calculators consume. This is the only place free text is parsed and the
//! only place competing signals are arbitrated; downstream rules never
//! re-derive geometry or re-parse material strings.
//!
//! ## Height resolution order
//!
//! 1. The room is being ceiling-lowered in this phase: use the new ceiling
//!    height.
//! 2. The current ceiling is a kept lowered ceiling: use its recorded height.
//! 3. A custom per-room height is set: use it.
//! 4. Fall back to the phase's standard height.
//!
//! ## Wall surface resolution order
//!
//! 1. An explicitly measured ceramic-wall area (`tiled_wall_surface_area`).
//! 2. `wall_surface` when the wall material is ceramic.
//! 3. For bathrooms/kitchens flagged for wall-tile removal: `perimeter *
//!    effective height`, estimating a square-room perimeter of
//!    `4 * sqrt(area)` when the perimeter itself is missing.
//! 4. Zero.
//!
//! No branch throws: absent numerics read as zero, absent flags as false, and
//! a room with no usable geometry yields zeros plus a
//! [`ValidationIssue::MissingGeometry`] marker.

use crate::config::{GlobalConfig, Phase};
use crate::errors::ValidationIssue;
use crate::finishes::{FloorMaterial, WallMaterial};
use crate::room::{CeilingStatus, MeasurementMode, Room, RoomInput};

/// Read an optional metric field, clamping negatives to zero and recording
/// the clamp as an issue.
fn metric(
    value: Option<f64>,
    field: &str,
    raw: &RoomInput,
    issues: &mut Vec<ValidationIssue>,
) -> f64 {
    match value {
        Some(v) if v < 0.0 => {
            issues.push(ValidationIssue::NegativeValue {
                room_id: raw.id,
                field: field.to_string(),
            });
            0.0
        }
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Flagged unit count: an explicit count wins, a bare flag means one unit.
fn units(flag: bool, count: u32) -> u32 {
    match (flag, count) {
        (false, _) => 0,
        (true, 0) => 1,
        (true, n) => n,
    }
}

/// Normalize a raw room record against the phase configuration.
///
/// Pure and total: every `RoomInput` produces a `Room`. Data defects are
/// recorded in [`Room::issues`] and zero out the affected contributions
/// instead of failing the batch.
///
/// # Example
///
/// ```rust
/// use takeoff_core::config::GlobalConfig;
/// use takeoff_core::normalize::normalize_room;
/// use takeoff_core::room::{MeasurementMode, RoomInput, RoomType};
///
/// let raw = RoomInput {
///     room_type: RoomType::Bathroom,
///     measurement_mode: MeasurementMode::AreaPerimeter,
///     area: Some(6.0),
///     perimeter: Some(10.0),
///     wall_material: "Cerámica".to_string(),
///     remove_wall_tiles: true,
///     ..RoomInput::default()
/// };
///
/// let config = GlobalConfig {
///     standard_height: 2.6,
///     ..GlobalConfig::demolition()
/// };
///
/// let room = normalize_room(&raw, &config);
/// assert_eq!(room.effective_height, 2.6);
/// assert!((room.tiled_wall_surface - 26.0).abs() < 1e-9);
/// ```
pub fn normalize_room(raw: &RoomInput, config: &GlobalConfig) -> Room {
    let mut issues = Vec::new();

    let width = metric(raw.width, "width", raw, &mut issues);
    let length = metric(raw.length, "length", raw, &mut issues);
    let direct_area = metric(raw.area, "area", raw, &mut issues);
    let direct_perimeter = metric(raw.perimeter, "perimeter", raw, &mut issues);

    // Prefer the declared mode, fall back to the other pair if it happens
    // to be populated, flag the room when neither is usable.
    let (mut area, mut perimeter) = match raw.measurement_mode {
        MeasurementMode::WidthLength if width > 0.0 && length > 0.0 => {
            (width * length, 2.0 * (width + length))
        }
        MeasurementMode::AreaPerimeter if direct_area > 0.0 => (direct_area, direct_perimeter),
        _ if width > 0.0 && length > 0.0 => (width * length, 2.0 * (width + length)),
        _ if direct_area > 0.0 => (direct_area, direct_perimeter),
        _ => {
            issues.push(ValidationIssue::MissingGeometry { room_id: raw.id });
            (0.0, 0.0)
        }
    };
    if area < 0.0 {
        area = 0.0;
    }
    // Square-room estimate when only the area is known
    if perimeter <= 0.0 && area > 0.0 {
        perimeter = 4.0 * area.sqrt();
    }

    let custom_height = metric(raw.custom_height, "custom_height", raw, &mut issues);
    let current_ceiling_height = metric(
        raw.current_ceiling_height,
        "current_ceiling_height",
        raw,
        &mut issues,
    );
    let new_ceiling_height = metric(raw.new_ceiling_height, "new_ceiling_height", raw, &mut issues);

    let lowered_in_this_phase = config.phase == Phase::Reform
        && (raw.lower_ceiling || config.lower_all_ceilings)
        && new_ceiling_height > 0.0;

    let effective_height = if lowered_in_this_phase {
        new_ceiling_height
    } else if raw.current_ceiling_status == CeilingStatus::LoweredKept
        && current_ceiling_height > 0.0
    {
        current_ceiling_height
    } else if custom_height > 0.0 {
        custom_height
    } else {
        config.standard_height
    };

    let floor_material = FloorMaterial::parse_flexible(&raw.floor_material);
    let wall_material = WallMaterial::parse_flexible(&raw.wall_material);

    let tiled_wall_surface_area = metric(
        raw.tiled_wall_surface_area,
        "tiled_wall_surface_area",
        raw,
        &mut issues,
    );
    let wall_surface = metric(raw.wall_surface, "wall_surface", raw, &mut issues);

    let tiled_wall_surface = if tiled_wall_surface_area > 0.0 {
        tiled_wall_surface_area
    } else if wall_surface > 0.0 && wall_material == WallMaterial::Ceramic {
        wall_surface
    } else if raw.room_type.is_wet_room() && raw.remove_wall_tiles {
        perimeter * effective_height
    } else {
        0.0
    };

    let demolition_radiators = if raw.remove_radiators {
        (raw.radiators.len() as u32).max(1)
    } else {
        0
    };

    let reform_radiator_units = if raw.heating_elements > 0 {
        raw.heating_elements
    } else if !raw.radiators.is_empty() {
        raw.radiators.len() as u32
    } else if raw.has_radiator {
        1
    } else {
        0
    };

    Room {
        id: raw.id,
        room_type: raw.room_type,
        custom_type_label: raw.custom_type_label.clone(),
        number_within_type: raw.number_within_type,
        area,
        perimeter,
        effective_height,
        tiled_wall_surface,
        floor_material,
        wall_material,
        remove_floor: raw.remove_floor,
        remove_wall_tiles: raw.remove_wall_tiles,
        remove_mortar_base: raw.remove_mortar_base,
        remove_bathroom_elements: raw.remove_bathroom_elements,
        bathroom_element_units: units(raw.remove_bathroom_elements, raw.bathroom_element_units),
        remove_kitchen_furniture: raw.remove_kitchen_furniture,
        kitchen_furniture_units: units(raw.remove_kitchen_furniture, raw.kitchen_furniture_units),
        remove_bedroom_furniture: raw.remove_bedroom_furniture,
        bedroom_furniture_units: units(raw.remove_bedroom_furniture, raw.bedroom_furniture_units),
        remove_living_room_furniture: raw.remove_living_room_furniture,
        living_room_furniture_units: units(
            raw.remove_living_room_furniture,
            raw.living_room_furniture_units,
        ),
        remove_gotele: raw.remove_gotele,
        remove_wallpaper: raw.remove_wallpaper,
        remove_false_ceiling: raw.remove_false_ceiling
            || raw.current_ceiling_status == CeilingStatus::LoweredToRemove,
        remove_sewage_pipes: raw.remove_sewage_pipes,
        remove_moldings: raw.remove_moldings,
        doors: if raw.has_doors {
            raw.door_list.clone()
        } else {
            Vec::new()
        },
        demolition_radiators,
        lower_ceiling: raw.lower_ceiling || config.lower_all_ceilings,
        new_ceiling_height: if new_ceiling_height > 0.0 {
            Some(new_ceiling_height)
        } else {
            None
        },
        windows: raw.windows,
        new_doors: raw.new_door_list.clone(),
        bathroom_fixtures: raw.bathroom_fixtures.clone(),
        reform_radiator_units,
        has_radiator: raw.has_radiator,
        issues,
    }
}

/// Normalize a batch of raw rooms against one phase configuration.
pub fn normalize_rooms(raw: &[RoomInput], config: &GlobalConfig) -> Vec<Room> {
    raw.iter().map(|r| normalize_room(r, config)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::RoomType;

    fn bathroom() -> RoomInput {
        RoomInput {
            room_type: RoomType::Bathroom,
            measurement_mode: MeasurementMode::AreaPerimeter,
            area: Some(6.0),
            perimeter: Some(10.0),
            remove_wall_tiles: true,
            ..RoomInput::default()
        }
    }

    fn config_with_height(h: f64) -> GlobalConfig {
        GlobalConfig {
            standard_height: h,
            ..GlobalConfig::demolition()
        }
    }

    #[test]
    fn test_geometry_from_width_length() {
        let raw = RoomInput {
            width: Some(3.0),
            length: Some(4.0),
            ..RoomInput::default()
        };
        let room = normalize_room(&raw, &GlobalConfig::demolition());
        assert!((room.area - 12.0).abs() < 1e-9);
        assert!((room.perimeter - 14.0).abs() < 1e-9);
        assert!(room.issues.is_empty());
    }

    #[test]
    fn test_missing_geometry_flagged_not_fatal() {
        let raw = RoomInput::default();
        let room = normalize_room(&raw, &GlobalConfig::demolition());
        assert_eq!(room.area, 0.0);
        assert_eq!(room.perimeter, 0.0);
        assert_eq!(room.issues.len(), 1);
        assert!(matches!(
            room.issues[0],
            crate::errors::ValidationIssue::MissingGeometry { .. }
        ));
    }

    #[test]
    fn test_negative_value_clamped_and_flagged() {
        let raw = RoomInput {
            width: Some(3.0),
            length: Some(4.0),
            custom_height: Some(-2.0),
            ..RoomInput::default()
        };
        let room = normalize_room(&raw, &config_with_height(2.5));
        assert_eq!(room.effective_height, 2.5);
        assert!(room
            .issues
            .iter()
            .any(|i| matches!(i, ValidationIssue::NegativeValue { field, .. } if field == "custom_height")));
    }

    // === Height precedence, all four branches ===

    #[test]
    fn test_height_from_lowered_ceiling_in_reform_phase() {
        let raw = RoomInput {
            lower_ceiling: true,
            new_ceiling_height: Some(2.3),
            custom_height: Some(2.8),
            ..bathroom()
        };
        let config = GlobalConfig {
            standard_height: 2.5,
            ..GlobalConfig::reform()
        };
        let room = normalize_room(&raw, &config);
        assert_eq!(room.effective_height, 2.3);
    }

    #[test]
    fn test_lowering_ignored_in_demolition_phase() {
        let raw = RoomInput {
            lower_ceiling: true,
            new_ceiling_height: Some(2.3),
            ..bathroom()
        };
        let room = normalize_room(&raw, &config_with_height(2.5));
        assert_eq!(room.effective_height, 2.5);
    }

    #[test]
    fn test_height_from_kept_lowered_ceiling() {
        let raw = RoomInput {
            current_ceiling_status: CeilingStatus::LoweredKept,
            current_ceiling_height: Some(2.35),
            custom_height: Some(2.8),
            ..bathroom()
        };
        let room = normalize_room(&raw, &config_with_height(2.5));
        assert_eq!(room.effective_height, 2.35);
    }

    #[test]
    fn test_height_from_custom_height() {
        let raw = RoomInput {
            custom_height: Some(2.8),
            ..bathroom()
        };
        let room = normalize_room(&raw, &config_with_height(2.5));
        assert_eq!(room.effective_height, 2.8);
    }

    #[test]
    fn test_height_from_standard_fallback() {
        let room = normalize_room(&bathroom(), &config_with_height(2.6));
        assert_eq!(room.effective_height, 2.6);
    }

    // === Wall surface fallback chain, all four branches ===

    #[test]
    fn test_wall_surface_from_measured_tiled_area() {
        let raw = RoomInput {
            tiled_wall_surface_area: Some(18.0),
            wall_surface: Some(30.0),
            ..bathroom()
        };
        let room = normalize_room(&raw, &config_with_height(2.6));
        assert_eq!(room.tiled_wall_surface, 18.0);
    }

    #[test]
    fn test_wall_surface_from_generic_surface_when_ceramic() {
        let raw = RoomInput {
            wall_surface: Some(30.0),
            wall_material: "Cerámica".to_string(),
            ..bathroom()
        };
        let room = normalize_room(&raw, &config_with_height(2.6));
        assert_eq!(room.tiled_wall_surface, 30.0);
    }

    #[test]
    fn test_wall_surface_ignores_generic_surface_when_not_ceramic() {
        // Non-ceramic wall: the generic surface signal is skipped and the
        // wet-room estimate applies instead.
        let raw = RoomInput {
            wall_surface: Some(30.0),
            wall_material: "Gotelé".to_string(),
            ..bathroom()
        };
        let room = normalize_room(&raw, &config_with_height(2.6));
        assert!((room.tiled_wall_surface - 26.0).abs() < 1e-9);
    }

    #[test]
    fn test_wall_surface_from_perimeter_estimate() {
        let room = normalize_room(&bathroom(), &config_with_height(2.6));
        // 10 m perimeter * 2.6 m
        assert!((room.tiled_wall_surface - 26.0).abs() < 1e-9);
    }

    #[test]
    fn test_wall_surface_from_square_room_perimeter_estimate() {
        // area 9, no perimeter: estimated perimeter 4*sqrt(9) = 12,
        // wall surface 12 * height
        let raw = RoomInput {
            area: Some(9.0),
            perimeter: None,
            ..bathroom()
        };
        let room = normalize_room(&raw, &config_with_height(2.5));
        assert!((room.perimeter - 12.0).abs() < 1e-9);
        assert!((room.tiled_wall_surface - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_wall_surface_zero_for_dry_room() {
        let raw = RoomInput {
            room_type: RoomType::Bedroom,
            ..bathroom()
        };
        let room = normalize_room(&raw, &config_with_height(2.6));
        assert_eq!(room.tiled_wall_surface, 0.0);
    }

    // === Unit counts ===

    #[test]
    fn test_flag_only_counts_as_one_unit() {
        let raw = RoomInput {
            room_type: RoomType::Kitchen,
            width: Some(3.0),
            length: Some(3.0),
            remove_kitchen_furniture: true,
            ..RoomInput::default()
        };
        let room = normalize_room(&raw, &GlobalConfig::demolition());
        assert_eq!(room.kitchen_furniture_units, 1);
        assert_eq!(room.bathroom_element_units, 0);
    }

    #[test]
    fn test_explicit_unit_count_wins() {
        let raw = RoomInput {
            remove_bathroom_elements: true,
            bathroom_element_units: 4,
            ..bathroom()
        };
        let room = normalize_room(&raw, &GlobalConfig::demolition());
        assert_eq!(room.bathroom_element_units, 4);
    }

    #[test]
    fn test_radiator_resolution() {
        let raw = RoomInput {
            remove_radiators: true,
            has_radiator: true,
            ..bathroom()
        };
        let room = normalize_room(&raw, &GlobalConfig::demolition());
        assert_eq!(room.demolition_radiators, 1);
        assert_eq!(room.reform_radiator_units, 1);
    }

    #[test]
    fn test_idempotent_normalization() {
        let raw = bathroom();
        let config = config_with_height(2.6);
        let a = normalize_room(&raw, &config);
        let b = normalize_room(&raw, &config);
        assert_eq!(a, b);
    }
}
