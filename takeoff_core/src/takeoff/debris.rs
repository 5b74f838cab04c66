//! # Debris Volume Takeoff
//!
//! Converts the demolition summary into loose-rubble volumes, container
//! counts, and carry-down labor figures. Solid in-place volumes are bulked up
//! by per-material expansion coefficients; discrete items (doors, furniture,
//! radiators) carry fixed volumetric allowances.
//!
//! Only container counts round (always up, whole skips); every other figure
//! is an exact sum. Rounding for display is a formatting concern outside this
//! engine.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{DemolitionSettings, GlobalConfig};
use crate::room::Room;
use crate::takeoff::demolition::DemolitionSummary;

/// Volumetric allowance per removed door (m3)
pub const DOOR_DEBRIS_M3: f64 = 0.06;
/// Volumetric allowance per kitchen furniture unit (m3)
pub const KITCHEN_FURNITURE_DEBRIS_M3: f64 = 3.5;
/// Volumetric allowance per bedroom furniture unit (m3)
pub const BEDROOM_FURNITURE_DEBRIS_M3: f64 = 2.0;
/// Volumetric allowance per living-room furniture unit (m3)
pub const LIVING_ROOM_FURNITURE_DEBRIS_M3: f64 = 2.0;
/// Volumetric allowance per bathroom element (m3)
pub const BATHROOM_ELEMENT_DEBRIS_M3: f64 = 1.5;

// Two radiator factors are in use: 0.08 feeds the debris totals, 0.05
// only the special-items display bucket. Kept separate pending product
// confirmation of which is authoritative.
/// Radiator allowance entering the debris totals (m3)
pub const RADIATOR_DEBRIS_M3: f64 = 0.08;
/// Radiator allowance used by the special-items display bucket (m3)
pub const RADIATOR_DISPLAY_M3: f64 = 0.05;

/// Assumed skirting board height (m)
pub const SKIRTING_HEIGHT_M: f64 = 0.1;

// Two carry-down hour models are in use as well; both are reported.
/// Flat manual carry-down rate (h per m3)
pub const CARRY_DOWN_RATE_H_PER_M3: f64 = 0.5;
/// Base rate for the estimated-time figure (h per m3)
pub const CLEAR_TIME_BASE_H_PER_M3: f64 = 1.0;
/// Extra hours per m3 and storey when there is no elevator
pub const NO_ELEVATOR_PENALTY_H_PER_M3_FLOOR: f64 = 0.2;

/// One wall-demolition thickness group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallDebrisGroup {
    /// Wall thickness in centimetres
    pub thickness_cm: f64,
    /// Summed wall face area in m2
    pub area_m2: f64,
    /// Loose rubble volume in m3
    pub volume_m3: f64,
}

/// Debris volumes by material class, grand totals, container count, and the
/// two carry-down labor figures.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DebrisCalculation {
    /// Wall-demolition rubble, one entry per wall thickness, ascending
    pub wall_groups: Vec<WallDebrisGroup>,
    /// Sum of all wall-demolition groups
    pub wall_demolition_m3: f64,
    /// Floor tiles, wall tiles, and tile layers on demolished walls
    pub ceramic_m3: f64,
    pub mortar_base_m3: f64,
    pub wooden_floor_m3: f64,
    pub skirting_m3: f64,
    pub false_ceiling_m3: f64,

    pub doors_m3: f64,
    pub kitchen_furniture_m3: f64,
    pub bedroom_furniture_m3: f64,
    pub living_room_furniture_m3: f64,
    pub bathroom_elements_m3: f64,
    /// Radiators at the debris factor (enters the totals)
    pub radiators_m3: f64,
    /// Informational special-items volume; radiators here use the display
    /// factor and the figure is not part of any total
    pub special_items_display_m3: f64,

    /// Masonry-class total: walls, ceramic, mortar, ceiling, bathroom
    /// elements, radiators
    pub mixed_debris_m3: f64,
    /// Timber-class total: wooden floor, skirting, doors, furniture
    pub wood_debris_m3: f64,
    pub total_debris_m3: f64,

    /// Whole skips needed (ceiling division)
    pub containers_needed: u32,
    /// Flat manual carry-down estimate: total x 0.5 h
    pub manual_carry_down_hours: f64,
    /// Estimated carry-down time: total x 1.0 h, plus the no-elevator
    /// penalty of total x (floors - 1) x 0.2 h
    pub estimated_carry_down_hours: f64,
}

/// Count discrete items straight from the rooms. Doors, furniture, and
/// radiators are not captured by the summary's area sums.
fn discrete_counts(rooms: &[Room]) -> (u32, u32, u32, u32, u32) {
    rooms.iter().fold((0, 0, 0, 0, 0), |acc, room| {
        (
            acc.0 + room.doors.len() as u32,
            acc.1 + room.kitchen_furniture_units,
            acc.2 + room.bedroom_furniture_units,
            acc.3 + room.living_room_furniture_units,
            acc.4 + room.demolition_radiators,
        )
    })
}

/// Compute debris volumes from an already-computed demolition summary.
///
/// # Example
///
/// ```rust
/// use takeoff_core::config::{DemolitionSettings, GlobalConfig};
/// use takeoff_core::normalize::normalize_rooms;
/// use takeoff_core::room::{MeasurementMode, RoomInput, RoomType};
/// use takeoff_core::takeoff::{debris, demolition};
///
/// let config = GlobalConfig { standard_height: 2.6, ..GlobalConfig::demolition() };
/// let rooms = normalize_rooms(&[RoomInput {
///     room_type: RoomType::Bathroom,
///     measurement_mode: MeasurementMode::AreaPerimeter,
///     area: Some(6.0),
///     perimeter: Some(10.0),
///     floor_material: "Cerámica".to_string(),
///     wall_material: "Cerámica".to_string(),
///     remove_floor: true,
///     remove_wall_tiles: true,
///     ..RoomInput::default()
/// }], &config);
///
/// let summary = demolition::compute(&rooms, &config);
/// let debris = debris::compute(&summary, &rooms, &config, &DemolitionSettings::default());
/// // (6 + 26) m2 x 0.01 m x 1.4
/// assert!((debris.ceramic_m3 - 0.448).abs() < 1e-9);
/// ```
pub fn compute(
    summary: &DemolitionSummary,
    rooms: &[Room],
    config: &GlobalConfig,
    settings: &DemolitionSettings,
) -> DebrisCalculation {
    // Wall demolitions grouped by thickness. Keyed in tenths of a
    // centimetre so grouping is exact and the output order deterministic.
    let mut groups: BTreeMap<i64, (f64, f64)> = BTreeMap::new();
    let mut tile_layer_m3 = 0.0;
    for wall in &config.wall_demolitions {
        let area = wall.length * config.standard_height;
        let key = (wall.thickness_cm * 10.0).round() as i64;
        let entry = groups.entry(key).or_insert((wall.thickness_cm, 0.0));
        entry.1 += area;

        if wall.has_tiles {
            tile_layer_m3 += area
                * wall.tiles_sides.count()
                * (wall.tile_thickness_cm / 100.0)
                * settings.ceramic_expansion;
        }
    }
    let wall_groups: Vec<WallDebrisGroup> = groups
        .into_values()
        .map(|(thickness_cm, area_m2)| WallDebrisGroup {
            thickness_cm,
            area_m2,
            volume_m3: area_m2 * (thickness_cm / 100.0) * settings.wall_expansion,
        })
        .collect();
    let wall_demolition_m3: f64 = wall_groups.iter().map(|g| g.volume_m3).sum();

    let ceramic_m3 = summary.floor_tile_removal_m2
        * settings.floor_tile_thickness_m
        * settings.ceramic_expansion
        + summary.wall_tile_removal_m2 * settings.wall_tile_thickness_m * settings.ceramic_expansion
        + tile_layer_m3;

    let mortar_base_m3 =
        summary.mortar_base_removal_m2 * settings.mortar_base_thickness_m * settings.mortar_expansion;

    let wooden_floor_m3 = summary.wooden_floor_removal_m2
        * settings.wooden_floor_thickness_m
        * settings.wooden_floor_expansion;
    let skirting_m3 = summary.skirting_removal_m
        * settings.wooden_floor_thickness_m
        * SKIRTING_HEIGHT_M
        * settings.wooden_floor_expansion;

    let false_ceiling_m3 = summary.false_ceiling_removal_m2
        * settings.false_ceiling_thickness_m
        * settings.ceiling_expansion;

    let (doors, kitchen, bedroom, living, radiators) = discrete_counts(rooms);

    let doors_m3 = doors as f64 * DOOR_DEBRIS_M3;
    let kitchen_furniture_m3 = kitchen as f64 * KITCHEN_FURNITURE_DEBRIS_M3;
    let bedroom_furniture_m3 = bedroom as f64 * BEDROOM_FURNITURE_DEBRIS_M3;
    let living_room_furniture_m3 = living as f64 * LIVING_ROOM_FURNITURE_DEBRIS_M3;
    let bathroom_elements_m3 = summary.bathroom_element_units as f64 * BATHROOM_ELEMENT_DEBRIS_M3;
    let radiators_m3 = radiators as f64 * RADIATOR_DEBRIS_M3;

    let special_items_display_m3 = doors_m3
        + kitchen_furniture_m3
        + bedroom_furniture_m3
        + living_room_furniture_m3
        + bathroom_elements_m3
        + radiators as f64 * RADIATOR_DISPLAY_M3;

    let mixed_debris_m3 = wall_demolition_m3
        + ceramic_m3
        + mortar_base_m3
        + false_ceiling_m3
        + bathroom_elements_m3
        + radiators_m3;
    let wood_debris_m3 = wooden_floor_m3
        + skirting_m3
        + doors_m3
        + kitchen_furniture_m3
        + bedroom_furniture_m3
        + living_room_furniture_m3;
    let total_debris_m3 = mixed_debris_m3 + wood_debris_m3;

    let containers_needed = if total_debris_m3 > 0.0 && settings.container_size_m3 > 0.0 {
        (total_debris_m3 / settings.container_size_m3).ceil() as u32
    } else {
        0
    };

    let manual_carry_down_hours = total_debris_m3 * CARRY_DOWN_RATE_H_PER_M3;
    let elevator_penalty = if config.has_elevator {
        0.0
    } else {
        total_debris_m3
            * (config.floors.saturating_sub(1)) as f64
            * NO_ELEVATOR_PENALTY_H_PER_M3_FLOOR
    };
    let estimated_carry_down_hours = total_debris_m3 * CLEAR_TIME_BASE_H_PER_M3 + elevator_penalty;

    DebrisCalculation {
        wall_groups,
        wall_demolition_m3,
        ceramic_m3,
        mortar_base_m3,
        wooden_floor_m3,
        skirting_m3,
        false_ceiling_m3,
        doors_m3,
        kitchen_furniture_m3,
        bedroom_furniture_m3,
        living_room_furniture_m3,
        bathroom_elements_m3,
        radiators_m3,
        special_items_display_m3,
        mixed_debris_m3,
        wood_debris_m3,
        total_debris_m3,
        containers_needed,
        manual_carry_down_hours,
        estimated_carry_down_hours,
    }
}
