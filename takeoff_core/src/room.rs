//! # Room Records
//!
//! Raw and normalized room shapes. [`RoomInput`] is the defensive,
//! everything-optional record the UI and the room-detection collaborator
//! produce: every numeric field may be absent (read as zero), every flag may
//! be absent (read as false), and materials arrive as free text. [`Room`] is
//! the canonical shape the calculators consume, produced by
//! [`crate::normalize::normalize_room`]: geometry resolved, heights resolved,
//! material strings parsed into closed enums, unit counts defaulted.
//!
//! ## JSON Example (RoomInput)
//!
//! ```json
//! {
//!   "room_type": "Bathroom",
//!   "measurement_mode": "AreaPerimeter",
//!   "area": 6.0,
//!   "perimeter": 10.0,
//!   "floor_material": "Cerámica",
//!   "wall_material": "Cerámica",
//!   "remove_floor": true,
//!   "remove_wall_tiles": true,
//!   "bathroom_fixtures": ["Toilet", "Washbasin", "ShowerTray"]
//! }
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ValidationIssue;
use crate::finishes::{fold_label, FloorMaterial, WallMaterial};

/// Room category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RoomType {
    LivingRoom,
    Kitchen,
    Bathroom,
    Bedroom,
    Hallway,
    Hall,
    Terrace,
    Storage,
    DressingRoom,
    #[default]
    Other,
}

impl RoomType {
    /// All room type variants for UI selection
    pub const ALL: [RoomType; 10] = [
        RoomType::LivingRoom,
        RoomType::Kitchen,
        RoomType::Bathroom,
        RoomType::Bedroom,
        RoomType::Hallway,
        RoomType::Hall,
        RoomType::Terrace,
        RoomType::Storage,
        RoomType::DressingRoom,
        RoomType::Other,
    ];

    /// Parse from common string representations (Spanish or English).
    ///
    /// Unknown labels map to `Other`.
    pub fn parse_flexible(s: &str) -> Self {
        match fold_label(s).as_str() {
            "salon" | "living room" | "livingroom" | "sala" => RoomType::LivingRoom,
            "cocina" | "kitchen" => RoomType::Kitchen,
            "bano" | "aseo" | "bathroom" => RoomType::Bathroom,
            "dormitorio" | "habitacion" | "bedroom" => RoomType::Bedroom,
            "pasillo" | "hallway" | "corridor" => RoomType::Hallway,
            "recibidor" | "hall" | "entrada" => RoomType::Hall,
            "terraza" | "terrace" | "balcon" | "balcony" => RoomType::Terrace,
            "trastero" | "storage" => RoomType::Storage,
            "vestidor" | "dressing room" | "dressingroom" => RoomType::DressingRoom,
            _ => RoomType::Other,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            RoomType::LivingRoom => "Living room",
            RoomType::Kitchen => "Kitchen",
            RoomType::Bathroom => "Bathroom",
            RoomType::Bedroom => "Bedroom",
            RoomType::Hallway => "Hallway",
            RoomType::Hall => "Hall",
            RoomType::Terrace => "Terrace",
            RoomType::Storage => "Storage",
            RoomType::DressingRoom => "Dressing room",
            RoomType::Other => "Other",
        }
    }

    /// Bathrooms and kitchens: the rooms whose wall surface may be
    /// estimated from perimeter when no measured tiled area exists.
    pub fn is_wet_room(&self) -> bool {
        matches!(self, RoomType::Bathroom | RoomType::Kitchen)
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Which geometry pair the room record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MeasurementMode {
    /// `width` and `length` are populated; area and perimeter are derived
    #[default]
    WidthLength,
    /// `area` and `perimeter` are populated directly
    AreaPerimeter,
}

/// State of the room's existing ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CeilingStatus {
    /// Original slab-height ceiling
    #[default]
    Original,
    /// An existing lowered ceiling that is being kept
    LoweredKept,
    /// An existing lowered (false) ceiling slated for demolition
    LoweredToRemove,
}

/// Door leaf style. Sliding-pocket doors retract into a wall cavity and
/// require an extra frame-box item on install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DoorType {
    #[default]
    Plain,
    Double,
    SlidingPocket,
    SlidingExterior,
}

impl DoorType {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            DoorType::Plain => "Plain",
            DoorType::Double => "Double",
            DoorType::SlidingPocket => "Sliding pocket",
            DoorType::SlidingExterior => "Sliding exterior",
        }
    }
}

/// One door, existing (demolition side) or new (reform side).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Door {
    #[serde(default)]
    pub door_type: DoorType,
}

impl Door {
    pub fn new(door_type: DoorType) -> Self {
        Door { door_type }
    }
}

/// Bathroom fixture. Each fixture maps to one or two install line items
/// on the reform side (a shower tray also brings its faucet, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BathroomFixture {
    Toilet,
    Washbasin,
    ShowerTray,
    Bathtub,
    Bidet,
}

impl BathroomFixture {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            BathroomFixture::Toilet => "Toilet",
            BathroomFixture::Washbasin => "Washbasin",
            BathroomFixture::ShowerTray => "Shower tray",
            BathroomFixture::Bathtub => "Bathtub",
            BathroomFixture::Bidet => "Bidet",
        }
    }
}

/// A radiator present in (or requested for) a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Radiator {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// User label (e.g., "Under window")
    #[serde(default)]
    pub label: String,
}

impl Default for Radiator {
    fn default() -> Self {
        Radiator {
            id: Uuid::new_v4(),
            label: String::new(),
        }
    }
}

/// Raw room record as produced by the UI or the room-detection collaborator.
///
/// Every field is optional at the serialization boundary: absent numbers read
/// as `None`, absent flags as `false`, absent lists as empty. The engine never
/// rejects a `RoomInput`; it normalizes it (see [`crate::normalize`]) and
/// reports contract violations as [`ValidationIssue`]s inside the results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomInput {
    /// Opaque stable identity
    pub id: Uuid,
    pub room_type: RoomType,
    /// Free-text label, used only when `room_type` is `Other`
    pub custom_type_label: Option<String>,
    /// Ordinal within rooms of the same type, for display/grouping
    pub number_within_type: u32,

    // === Geometry ===
    pub measurement_mode: MeasurementMode,
    /// Width in metres (WidthLength mode)
    pub width: Option<f64>,
    /// Length in metres (WidthLength mode)
    pub length: Option<f64>,
    /// Floor area in m2 (AreaPerimeter mode)
    pub area: Option<f64>,
    /// Perimeter in metres (AreaPerimeter mode)
    pub perimeter: Option<f64>,

    // === Height signals, resolved by precedence in the normalizer ===
    /// Per-room height override in metres
    pub custom_height: Option<f64>,
    /// Height of an existing lowered ceiling in metres
    pub current_ceiling_height: Option<f64>,
    /// Target height when the ceiling is lowered in this project
    pub new_ceiling_height: Option<f64>,
    pub current_ceiling_status: CeilingStatus,

    // === Material selection (free text, parsed by the normalizer) ===
    pub floor_material: String,
    pub wall_material: String,

    // === Measured wall-surface signals ===
    /// Explicitly measured ceramic wall area in m2
    pub tiled_wall_surface_area: Option<f64>,
    /// Generic measured wall surface in m2
    pub wall_surface: Option<f64>,

    // === Demolition work flags ===
    pub remove_floor: bool,
    pub remove_wall_tiles: bool,
    pub remove_mortar_base: bool,
    pub remove_bathroom_elements: bool,
    /// Fixture units to tear out; 0 means "one per flagged room"
    pub bathroom_element_units: u32,
    pub remove_kitchen_furniture: bool,
    pub kitchen_furniture_units: u32,
    pub remove_bedroom_furniture: bool,
    pub bedroom_furniture_units: u32,
    pub remove_living_room_furniture: bool,
    pub living_room_furniture_units: u32,
    pub remove_gotele: bool,
    pub remove_wallpaper: bool,
    pub remove_false_ceiling: bool,
    pub remove_radiators: bool,
    pub has_radiator: bool,
    pub remove_sewage_pipes: bool,
    pub remove_moldings: bool,
    pub has_doors: bool,
    pub door_list: Vec<Door>,

    // === Reform-side fields ===
    pub lower_ceiling: bool,
    /// New window units
    pub windows: u32,
    pub new_door_list: Vec<Door>,
    pub bathroom_fixtures: Vec<BathroomFixture>,
    /// New heating emitters requested for this room; 0 falls back to
    /// the radiator list / flag
    pub heating_elements: u32,
    pub radiators: Vec<Radiator>,
}

impl Default for RoomInput {
    fn default() -> Self {
        RoomInput {
            id: Uuid::new_v4(),
            room_type: RoomType::Other,
            custom_type_label: None,
            number_within_type: 1,
            measurement_mode: MeasurementMode::WidthLength,
            width: None,
            length: None,
            area: None,
            perimeter: None,
            custom_height: None,
            current_ceiling_height: None,
            new_ceiling_height: None,
            current_ceiling_status: CeilingStatus::Original,
            floor_material: String::new(),
            wall_material: String::new(),
            tiled_wall_surface_area: None,
            wall_surface: None,
            remove_floor: false,
            remove_wall_tiles: false,
            remove_mortar_base: false,
            remove_bathroom_elements: false,
            bathroom_element_units: 0,
            remove_kitchen_furniture: false,
            kitchen_furniture_units: 0,
            remove_bedroom_furniture: false,
            bedroom_furniture_units: 0,
            remove_living_room_furniture: false,
            living_room_furniture_units: 0,
            remove_gotele: false,
            remove_wallpaper: false,
            remove_false_ceiling: false,
            remove_radiators: false,
            has_radiator: false,
            remove_sewage_pipes: false,
            remove_moldings: false,
            has_doors: false,
            door_list: Vec::new(),
            lower_ceiling: false,
            windows: 0,
            new_door_list: Vec::new(),
            bathroom_fixtures: Vec::new(),
            heating_elements: 0,
            radiators: Vec::new(),
        }
    }
}

/// Canonical room shape consumed by the calculators.
///
/// Produced by [`crate::normalize::normalize_room`]. Geometry is fully
/// resolved (both area and perimeter populated, zero when unknown), the
/// effective height has been picked from the competing signals, material
/// strings are parsed into closed enums, and unit counts are concrete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: Uuid,
    pub room_type: RoomType,
    pub custom_type_label: Option<String>,
    pub number_within_type: u32,

    /// Floor area in m2
    pub area: f64,
    /// Perimeter in metres (estimated as `4 * sqrt(area)` when absent)
    pub perimeter: f64,
    /// Effective wall/ceiling height in metres
    pub effective_height: f64,
    /// Resolved ceramic wall surface in m2, zero when no source applies
    pub tiled_wall_surface: f64,

    pub floor_material: FloorMaterial,
    pub wall_material: WallMaterial,

    // === Demolition flags and resolved unit counts ===
    pub remove_floor: bool,
    pub remove_wall_tiles: bool,
    pub remove_mortar_base: bool,
    pub remove_bathroom_elements: bool,
    pub bathroom_element_units: u32,
    pub remove_kitchen_furniture: bool,
    pub kitchen_furniture_units: u32,
    pub remove_bedroom_furniture: bool,
    pub bedroom_furniture_units: u32,
    pub remove_living_room_furniture: bool,
    pub living_room_furniture_units: u32,
    pub remove_gotele: bool,
    pub remove_wallpaper: bool,
    pub remove_false_ceiling: bool,
    pub remove_sewage_pipes: bool,
    pub remove_moldings: bool,
    /// Existing doors slated for removal (empty unless `has_doors` was set)
    pub doors: Vec<Door>,
    /// Radiator units to tear out
    pub demolition_radiators: u32,

    // === Reform-side fields ===
    pub lower_ceiling: bool,
    pub new_ceiling_height: Option<f64>,
    pub windows: u32,
    pub new_doors: Vec<Door>,
    pub bathroom_fixtures: Vec<BathroomFixture>,
    /// New heating emitter / radiator units for this room
    pub reform_radiator_units: u32,
    pub has_radiator: bool,

    /// Data defects found while normalizing; the room contributed zero to
    /// whatever these affect
    pub issues: Vec<ValidationIssue>,
}

impl Room {
    /// Generic wall area: `perimeter * effective_height`.
    ///
    /// Used for textured-coating removal, wallpaper removal, and wall
    /// finishing areas. Not the same as [`Room::tiled_wall_surface`], which
    /// follows the measured-first fallback chain.
    pub fn wall_area(&self) -> f64 {
        self.perimeter * self.effective_height
    }

    /// True if the ceiling is being lowered and a target height is set
    pub fn lowers_ceiling(&self) -> bool {
        self.lower_ceiling && self.new_ceiling_height.unwrap_or(0.0) > 0.0
    }
}
