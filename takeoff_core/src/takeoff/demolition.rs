//! # Demolition Takeoff
//!
//! Derives the demolition bill of quantities from normalized rooms and the
//! demolition-phase configuration. Each room is evaluated independently
//! against the condition/accumulator rules below and the results are summed,
//! so the outcome never depends on room order.
//!
//! Wall demolitions are not part of this summary's scalar accumulators: they
//! live on the config and are grouped by thickness in the debris calculator.

use serde::{Deserialize, Serialize};

use crate::config::GlobalConfig;
use crate::errors::ValidationIssue;
use crate::finishes::{FloorMaterial, WallMaterial};
use crate::room::Room;

/// Per-category demolition quantities.
///
/// Areas in m2, linear quantities in metres, discrete work in unit counts.
/// All fields are plain sums over the room list; recomputed fresh on every
/// call and never mutated in place.
///
/// ## JSON Example
///
/// ```json
/// {
///   "floor_tile_removal_m2": 6.0,
///   "wall_tile_removal_m2": 26.0,
///   "bathroom_element_units": 4,
///   "total_floor_area_m2": 6.0,
///   "issues": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DemolitionSummary {
    /// Ceramic floor tile removal
    pub floor_tile_removal_m2: f64,
    /// Timber floor removal (solid wood or floating parquet)
    pub wooden_floor_removal_m2: f64,
    /// Floor removal with an unrecognized finish
    pub other_floor_removal_m2: f64,
    /// Skirting board removal alongside timber floor removal
    pub skirting_removal_m: f64,
    /// Ceramic wall tile removal (via the measured-first fallback chain)
    pub wall_tile_removal_m2: f64,
    /// Mortar levelling base removal
    pub mortar_base_removal_m2: f64,
    /// Textured coating (gotele) scraping
    pub gotele_removal_m2: f64,
    /// Wallpaper stripping
    pub wallpaper_removal_m2: f64,
    /// Existing false-ceiling demolition
    pub false_ceiling_removal_m2: f64,
    /// Cornice/molding removal
    pub molding_removal_m: f64,

    pub bathroom_element_units: u32,
    pub kitchen_furniture_units: u32,
    pub bedroom_furniture_units: u32,
    pub living_room_furniture_units: u32,
    pub sewage_pipe_units: u32,
    pub radiator_units: u32,
    pub door_removal_units: u32,

    /// Informational: summed floor area of every room in the batch
    pub total_floor_area_m2: f64,

    /// Data defects carried up from normalization; the affected rooms
    /// contributed zero to the impacted accumulators
    pub issues: Vec<ValidationIssue>,
}

impl DemolitionSummary {
    /// True when no rule fired for any room
    pub fn is_empty(&self) -> bool {
        self.floor_tile_removal_m2 == 0.0
            && self.wooden_floor_removal_m2 == 0.0
            && self.other_floor_removal_m2 == 0.0
            && self.wall_tile_removal_m2 == 0.0
            && self.mortar_base_removal_m2 == 0.0
            && self.gotele_removal_m2 == 0.0
            && self.wallpaper_removal_m2 == 0.0
            && self.false_ceiling_removal_m2 == 0.0
            && self.molding_removal_m == 0.0
            && self.bathroom_element_units == 0
            && self.kitchen_furniture_units == 0
            && self.bedroom_furniture_units == 0
            && self.living_room_furniture_units == 0
            && self.sewage_pipe_units == 0
            && self.radiator_units == 0
            && self.door_removal_units == 0
    }
}

/// Fold one room into the summary.
fn accumulate(mut s: DemolitionSummary, room: &Room, config: &GlobalConfig) -> DemolitionSummary {
    let floor_is_ceramic = room.floor_material == FloorMaterial::Ceramic;
    let floor_is_wood = room.floor_material.is_wood();

    // Floor removal, split by finish. Whole-project toggles widen the
    // per-room flag to every matching floor.
    if floor_is_ceramic && (room.remove_floor || config.remove_all_ceramic) {
        s.floor_tile_removal_m2 += room.area;
    } else if floor_is_wood && (room.remove_floor || config.remove_wooden_floor) {
        s.wooden_floor_removal_m2 += room.area;
        s.skirting_removal_m += room.perimeter;
    } else if room.remove_floor {
        s.other_floor_removal_m2 += room.area;
    }

    if room.remove_wall_tiles {
        s.wall_tile_removal_m2 += room.tiled_wall_surface;
    }

    if room.remove_mortar_base {
        s.mortar_base_removal_m2 += room.area;
    }

    if room.remove_gotele
        && (room.wall_material == WallMaterial::Gotele || config.all_walls_have_gotele)
    {
        s.gotele_removal_m2 += room.wall_area();
    }

    if room.remove_wallpaper {
        s.wallpaper_removal_m2 += room.wall_area();
    }

    if room.remove_false_ceiling {
        s.false_ceiling_removal_m2 += room.area;
    }

    if room.remove_moldings {
        s.molding_removal_m += room.perimeter;
    }

    if room.remove_sewage_pipes {
        s.sewage_pipe_units += 1;
    }

    s.bathroom_element_units += room.bathroom_element_units;
    s.kitchen_furniture_units += room.kitchen_furniture_units;
    s.bedroom_furniture_units += room.bedroom_furniture_units;
    s.living_room_furniture_units += room.living_room_furniture_units;
    s.radiator_units += room.demolition_radiators;
    s.door_removal_units += room.doors.len() as u32;

    s.total_floor_area_m2 += room.area;
    s.issues.extend(room.issues.iter().cloned());

    s
}

/// Compute the demolition summary for a batch of normalized rooms.
///
/// Pure fold over the slice; permuting the input changes nothing but the
/// order of the `issues` list.
pub fn compute(rooms: &[Room], config: &GlobalConfig) -> DemolitionSummary {
    rooms
        .iter()
        .fold(DemolitionSummary::default(), |acc, room| {
            accumulate(acc, room, config)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GlobalConfig;
    use crate::normalize::normalize_rooms;
    use crate::room::{Door, DoorType, MeasurementMode, RoomInput, RoomType};

    fn config() -> GlobalConfig {
        GlobalConfig {
            standard_height: 2.6,
            ..GlobalConfig::demolition()
        }
    }

    fn bathroom() -> RoomInput {
        RoomInput {
            room_type: RoomType::Bathroom,
            measurement_mode: MeasurementMode::AreaPerimeter,
            area: Some(6.0),
            perimeter: Some(10.0),
            floor_material: "Cerámica".to_string(),
            wall_material: "Cerámica".to_string(),
            remove_floor: true,
            remove_wall_tiles: true,
            ..RoomInput::default()
        }
    }

    fn bedroom() -> RoomInput {
        RoomInput {
            room_type: RoomType::Bedroom,
            width: Some(3.0),
            length: Some(4.0),
            floor_material: "Parquet flotante".to_string(),
            remove_floor: true,
            remove_moldings: true,
            ..RoomInput::default()
        }
    }

    #[test]
    fn test_end_to_end_bathroom_scenario() {
        // One bathroom, area 6, perimeter 10, ceramic walls and floor,
        // standard height 2.6: floor removal 6 m2, wall tiles 26 m2.
        let rooms = normalize_rooms(&[bathroom()], &config());
        let summary = compute(&rooms, &config());
        assert!((summary.floor_tile_removal_m2 - 6.0).abs() < 1e-9);
        assert!((summary.wall_tile_removal_m2 - 26.0).abs() < 1e-9);
        assert!((summary.total_floor_area_m2 - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_wooden_floor_accumulates_skirting() {
        let rooms = normalize_rooms(&[bedroom()], &config());
        let summary = compute(&rooms, &config());
        assert!((summary.wooden_floor_removal_m2 - 12.0).abs() < 1e-9);
        assert!((summary.skirting_removal_m - 14.0).abs() < 1e-9);
        assert!((summary.molding_removal_m - 14.0).abs() < 1e-9);
        assert_eq!(summary.floor_tile_removal_m2, 0.0);
    }

    #[test]
    fn test_remove_all_ceramic_overrides_room_flag() {
        let mut room = bathroom();
        room.remove_floor = false;
        let cfg = GlobalConfig {
            remove_all_ceramic: true,
            ..config()
        };
        let rooms = normalize_rooms(&[room], &cfg);
        let summary = compute(&rooms, &cfg);
        assert!((summary.floor_tile_removal_m2 - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_floor_falls_into_other_bucket() {
        let mut room = bedroom();
        room.floor_material = "moqueta".to_string();
        let rooms = normalize_rooms(&[room], &config());
        let summary = compute(&rooms, &config());
        assert!((summary.other_floor_removal_m2 - 12.0).abs() < 1e-9);
        assert_eq!(summary.wooden_floor_removal_m2, 0.0);
    }

    #[test]
    fn test_gotele_requires_textured_wall_or_global_toggle() {
        let mut room = bedroom();
        room.remove_gotele = true;
        room.wall_material = "Enlucido y pintura".to_string();

        let rooms = normalize_rooms(&[room.clone()], &config());
        let summary = compute(&rooms, &config());
        assert_eq!(summary.gotele_removal_m2, 0.0);

        let cfg = GlobalConfig {
            all_walls_have_gotele: true,
            ..config()
        };
        let rooms = normalize_rooms(&[room.clone()], &cfg);
        let summary = compute(&rooms, &cfg);
        // perimeter 14 * height 2.6
        assert!((summary.gotele_removal_m2 - 36.4).abs() < 1e-9);

        room.wall_material = "Gotelé".to_string();
        let rooms = normalize_rooms(&[room], &config());
        let summary = compute(&rooms, &config());
        assert!((summary.gotele_removal_m2 - 36.4).abs() < 1e-9);
    }

    #[test]
    fn test_unit_counters() {
        let mut room = bathroom();
        room.remove_bathroom_elements = true;
        room.bathroom_element_units = 4;
        room.remove_sewage_pipes = true;
        room.remove_radiators = true;
        room.has_doors = true;
        room.door_list = vec![Door::new(DoorType::Plain), Door::new(DoorType::SlidingPocket)];

        let rooms = normalize_rooms(&[room], &config());
        let summary = compute(&rooms, &config());
        assert_eq!(summary.bathroom_element_units, 4);
        assert_eq!(summary.sewage_pipe_units, 1);
        assert_eq!(summary.radiator_units, 1);
        assert_eq!(summary.door_removal_units, 2);
    }

    #[test]
    fn test_empty_input_yields_all_zero() {
        let summary = compute(&[], &config());
        assert!(summary.is_empty());
        assert_eq!(summary.total_floor_area_m2, 0.0);
        assert!(summary.issues.is_empty());
    }

    #[test]
    fn test_room_order_does_not_change_totals() {
        let mut kitchen = RoomInput {
            room_type: RoomType::Kitchen,
            width: Some(2.5),
            length: Some(3.5),
            floor_material: "Cerámica".to_string(),
            remove_floor: true,
            remove_wall_tiles: true,
            ..RoomInput::default()
        };
        kitchen.remove_kitchen_furniture = true;

        let forward = normalize_rooms(&[bathroom(), bedroom(), kitchen.clone()], &config());
        let reversed = normalize_rooms(&[kitchen, bedroom(), bathroom()], &config());

        let a = compute(&forward, &config());
        let b = compute(&reversed, &config());
        assert_eq!(a.floor_tile_removal_m2, b.floor_tile_removal_m2);
        assert_eq!(a.wall_tile_removal_m2, b.wall_tile_removal_m2);
        assert_eq!(a.wooden_floor_removal_m2, b.wooden_floor_removal_m2);
        assert_eq!(a.total_floor_area_m2, b.total_floor_area_m2);
        assert_eq!(a.kitchen_furniture_units, b.kitchen_furniture_units);
    }

    #[test]
    fn test_bad_room_does_not_poison_the_batch() {
        let broken = RoomInput::default();
        let rooms = normalize_rooms(&[broken, bathroom()], &config());
        let summary = compute(&rooms, &config());
        assert!((summary.floor_tile_removal_m2 - 6.0).abs() < 1e-9);
        assert_eq!(summary.issues.len(), 1);
    }

    #[test]
    fn test_idempotent_computation() {
        let rooms = normalize_rooms(&[bathroom(), bedroom()], &config());
        let a = compute(&rooms, &config());
        let b = compute(&rooms, &config());
        assert_eq!(a, b);
    }

    #[test]
    fn test_summary_serialization_roundtrip() {
        let rooms = normalize_rooms(&[bathroom()], &config());
        let summary = compute(&rooms, &config());
        let json = serde_json::to_string_pretty(&summary).unwrap();
        let roundtrip: DemolitionSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, roundtrip);
    }
}
