//! # Reform Takeoff
//!
//! Derives the finishing-works bill of quantities from reform-side rooms, the
//! reform-phase configuration, and the electrical point counts. Output is
//! organized into trade buckets (masonry, plumbing, paint, carpentry,
//! heating, electrical); every field is computed unconditionally and each
//! bucket exposes `is_empty()` so the presentation layer can skip all-zero
//! sections.

use serde::{Deserialize, Serialize};

use crate::config::{ElectricalConfig, EntranceDoorType, GlobalConfig, HeatingType};
use crate::errors::ValidationIssue;
use crate::finishes::{FloorMaterial, WallMaterial};
use crate::room::{BathroomFixture, DoorType, Room, RoomType};

/// Masonry-trade quantities: tiling, new partitions, linings, ceilings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MasonryReform {
    /// New ceramic floor install
    pub ceramic_floor_m2: f64,
    /// New ceramic wall tiling
    pub wall_tiling_m2: f64,
    /// New partitions, both systems (from the phase config)
    pub partition_m2: f64,
    /// Plasterboard wall linings (from the phase config)
    pub wall_lining_m2: f64,
    /// False-ceiling build for lowered ceilings
    pub false_ceiling_m2: f64,
}

impl MasonryReform {
    pub fn is_empty(&self) -> bool {
        self.ceramic_floor_m2 == 0.0
            && self.wall_tiling_m2 == 0.0
            && self.partition_m2 == 0.0
            && self.wall_lining_m2 == 0.0
            && self.false_ceiling_m2 == 0.0
    }
}

/// Plumbing-trade unit counts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlumbingReform {
    /// New water supply/drain network, one per wet room
    pub water_network_units: u32,
    /// Extraction duct, one per wet room
    pub extraction_duct_units: u32,
    pub sink_units: u32,
    pub washer_install_units: u32,
    pub dishwasher_install_units: u32,

    pub toilet_units: u32,
    pub washbasin_units: u32,
    pub basin_faucet_units: u32,
    pub shower_tray_units: u32,
    pub shower_faucet_units: u32,
    pub bathtub_units: u32,
    pub bath_faucet_units: u32,
    pub bidet_units: u32,
}

impl PlumbingReform {
    pub fn is_empty(&self) -> bool {
        self.water_network_units == 0
            && self.extraction_duct_units == 0
            && self.sink_units == 0
            && self.washer_install_units == 0
            && self.dishwasher_install_units == 0
            && self.toilet_units == 0
            && self.washbasin_units == 0
            && self.basin_faucet_units == 0
            && self.shower_tray_units == 0
            && self.shower_faucet_units == 0
            && self.bathtub_units == 0
            && self.bath_faucet_units == 0
            && self.bidet_units == 0
    }
}

/// Paint-trade areas.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PaintReform {
    /// Smooth plaster without paint
    pub plaster_only_m2: f64,
    /// Smooth plaster plus paint
    pub plaster_and_paint_m2: f64,
    pub ceiling_paint_m2: f64,
}

impl PaintReform {
    pub fn is_empty(&self) -> bool {
        self.plaster_only_m2 == 0.0
            && self.plaster_and_paint_m2 == 0.0
            && self.ceiling_paint_m2 == 0.0
    }
}

/// Carpentry-trade quantities: timber floors, doors, windows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CarpentryReform {
    pub floating_parquet_m2: f64,
    /// New skirting board
    pub skirting_m: f64,
    pub plain_door_units: u32,
    pub double_door_units: u32,
    pub sliding_pocket_door_units: u32,
    /// Pocket frame boxes, one per sliding-pocket door
    pub pocket_frame_units: u32,
    pub sliding_exterior_door_units: u32,
    pub window_units: u32,
    pub standard_entrance_door_units: u32,
    pub armored_entrance_door_units: u32,
}

impl CarpentryReform {
    pub fn is_empty(&self) -> bool {
        self.floating_parquet_m2 == 0.0
            && self.skirting_m == 0.0
            && self.plain_door_units == 0
            && self.double_door_units == 0
            && self.sliding_pocket_door_units == 0
            && self.pocket_frame_units == 0
            && self.sliding_exterior_door_units == 0
            && self.window_units == 0
            && self.standard_entrance_door_units == 0
            && self.armored_entrance_door_units == 0
    }
}

/// Heating-trade unit counts. The radiator pair and the emitter pair are
/// mutually exclusive: electric projects fill the emitter fields, every
/// other heating type fills the radiator fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HeatingReform {
    /// Feed/return piping per radiator (non-electric projects)
    pub radiator_feed_network_units: u32,
    pub radiator_install_units: u32,
    /// Wall fixation per electric emitter (electric projects)
    pub emitter_fixation_units: u32,
    pub electric_emitter_units: u32,

    pub boiler_change_units: u32,
    pub water_heater_removal_units: u32,
    pub gas_boiler_install_units: u32,
    pub gas_connection_units: u32,
    pub water_heater_install_units: u32,
}

impl HeatingReform {
    pub fn is_empty(&self) -> bool {
        self.radiator_feed_network_units == 0
            && self.radiator_install_units == 0
            && self.emitter_fixation_units == 0
            && self.electric_emitter_units == 0
            && self.boiler_change_units == 0
            && self.water_heater_removal_units == 0
            && self.gas_boiler_install_units == 0
            && self.gas_connection_units == 0
            && self.water_heater_install_units == 0
    }
}

/// Electrical-trade unit counts, copied from the electrical configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ElectricalReform {
    pub light_point_units: u32,
    pub socket_units: u32,
    pub tv_point_units: u32,
    pub ac_point_units: u32,
    pub new_panel_units: u32,
}

impl ElectricalReform {
    pub fn is_empty(&self) -> bool {
        self.light_point_units == 0
            && self.socket_units == 0
            && self.tv_point_units == 0
            && self.ac_point_units == 0
            && self.new_panel_units == 0
    }
}

/// Categorized reform bill of quantities.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReformSummary {
    pub masonry: MasonryReform,
    pub plumbing: PlumbingReform,
    pub paint: PaintReform,
    pub carpentry: CarpentryReform,
    pub heating: HeatingReform,
    pub electrical: ElectricalReform,

    /// Informational: summed floor area of every room in the batch
    pub total_floor_area_m2: f64,
    pub issues: Vec<ValidationIssue>,
}

impl ReformSummary {
    /// True when every bucket is empty
    pub fn is_empty(&self) -> bool {
        self.masonry.is_empty()
            && self.plumbing.is_empty()
            && self.paint.is_empty()
            && self.carpentry.is_empty()
            && self.heating.is_empty()
            && self.electrical.is_empty()
    }
}

/// Map one bathroom fixture to its install line items.
fn add_fixture(plumbing: &mut PlumbingReform, fixture: BathroomFixture) {
    match fixture {
        BathroomFixture::Toilet => plumbing.toilet_units += 1,
        BathroomFixture::Washbasin => {
            plumbing.washbasin_units += 1;
            plumbing.basin_faucet_units += 1;
        }
        BathroomFixture::ShowerTray => {
            plumbing.shower_tray_units += 1;
            plumbing.shower_faucet_units += 1;
        }
        BathroomFixture::Bathtub => {
            plumbing.bathtub_units += 1;
            plumbing.bath_faucet_units += 1;
        }
        BathroomFixture::Bidet => plumbing.bidet_units += 1,
    }
}

/// Fold one room into the summary.
fn accumulate(mut s: ReformSummary, room: &Room, config: &GlobalConfig) -> ReformSummary {
    // === Floors ===
    if room.floor_material == FloorMaterial::Ceramic || config.tile_all_floors {
        s.masonry.ceramic_floor_m2 += room.area;
    }
    if room.floor_material == FloorMaterial::FloatingParquet {
        s.carpentry.floating_parquet_m2 += room.area;
    }
    // Skirting whenever the floor changes to a non-ceramic finish;
    // terraces carry none.
    if room.floor_material != FloorMaterial::Ceramic
        && room.floor_material != FloorMaterial::NoChange
        && room.room_type != RoomType::Terrace
    {
        s.carpentry.skirting_m += room.perimeter;
    }

    // === Walls ===
    match room.wall_material {
        WallMaterial::Ceramic => {
            let area = if room.tiled_wall_surface > 0.0 {
                room.tiled_wall_surface
            } else {
                room.wall_area()
            };
            s.masonry.wall_tiling_m2 += area;
        }
        WallMaterial::PlasterOnly => s.paint.plaster_only_m2 += room.wall_area(),
        WallMaterial::PlasterAndPaint => s.paint.plaster_and_paint_m2 += room.wall_area(),
        _ if config.paint_and_plaster_all => s.paint.plaster_and_paint_m2 += room.wall_area(),
        _ => {}
    }

    // === Ceilings ===
    if config.paint_ceilings && room.room_type != RoomType::Terrace {
        s.paint.ceiling_paint_m2 += room.area;
    }
    if room.lowers_ceiling() {
        s.masonry.false_ceiling_m2 += room.area;
    }

    // === Carpentry units ===
    for door in &room.new_doors {
        match door.door_type {
            DoorType::Plain => s.carpentry.plain_door_units += 1,
            DoorType::Double => s.carpentry.double_door_units += 1,
            DoorType::SlidingPocket => {
                s.carpentry.sliding_pocket_door_units += 1;
                s.carpentry.pocket_frame_units += 1;
            }
            DoorType::SlidingExterior => s.carpentry.sliding_exterior_door_units += 1,
        }
    }
    s.carpentry.window_units += room.windows;

    // === Plumbing by room classification ===
    match room.room_type {
        RoomType::Bathroom => {
            s.plumbing.water_network_units += 1;
            s.plumbing.extraction_duct_units += 1;
        }
        RoomType::Kitchen => {
            s.plumbing.water_network_units += 1;
            s.plumbing.extraction_duct_units += 1;
            s.plumbing.sink_units += 1;
            s.plumbing.washer_install_units += 1;
            s.plumbing.dishwasher_install_units += 1;
        }
        _ => {}
    }
    for fixture in &room.bathroom_fixtures {
        add_fixture(&mut s.plumbing, *fixture);
    }

    // === Heating: electric emitters XOR radiator network ===
    if room.reform_radiator_units > 0 {
        if config.reform_heating_type == HeatingType::Electric {
            s.heating.emitter_fixation_units += room.reform_radiator_units;
            s.heating.electric_emitter_units += room.reform_radiator_units;
        } else {
            s.heating.radiator_feed_network_units += room.reform_radiator_units;
            s.heating.radiator_install_units += room.reform_radiator_units;
        }
    }

    s.total_floor_area_m2 += room.area;
    s.issues.extend(room.issues.iter().cloned());

    s
}

/// Compute the reform summary for a batch of normalized rooms.
///
/// Partition and wall-lining areas come straight from the phase config's
/// entity lists; the whole-project heating and entrance-door choices are
/// applied once, after the per-room fold.
pub fn compute(
    rooms: &[Room],
    config: &GlobalConfig,
    electrical: &ElectricalConfig,
) -> ReformSummary {
    let mut s = rooms
        .iter()
        .fold(ReformSummary::default(), |acc, room| {
            accumulate(acc, room, config)
        });

    s.masonry.partition_m2 = config.partitions.iter().map(|p| p.area()).sum();
    s.masonry.wall_lining_m2 = config.wall_linings.iter().map(|l| l.area()).sum();

    match config.entrance_door_type {
        EntranceDoorType::Keep => {}
        EntranceDoorType::Standard => s.carpentry.standard_entrance_door_units = 1,
        EntranceDoorType::Armored => s.carpentry.armored_entrance_door_units = 1,
    }

    s.heating.boiler_change_units = config.change_boiler as u32;
    s.heating.water_heater_removal_units = config.remove_water_heater as u32;
    s.heating.gas_boiler_install_units = config.install_gas_boiler as u32;
    s.heating.gas_connection_units = config.install_gas_connection as u32;
    s.heating.water_heater_install_units = config.install_water_heater as u32;

    s.electrical.light_point_units = electrical.num_points;
    s.electrical.socket_units = electrical.num_sockets;
    s.electrical.tv_point_units = electrical.num_tv_points;
    s.electrical.ac_point_units = electrical.num_ac_points;
    s.electrical.new_panel_units = electrical.has_new_panel as u32;

    s
}
