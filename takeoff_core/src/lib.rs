//! # takeoff_core - Renovation Quantity Takeoff Engine
//!
//! `takeoff_core` turns a structured description of rooms and project
//! choices into a categorized, quantified bill of work items (areas, linear
//! metres, unit counts, rubble volumes) ready to be priced. All inputs and
//! outputs are JSON-serializable, making it easy to drive from any host.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Defensive**: Absent fields default, bad rooms are flagged, the batch
//!   always completes
//! - **Deterministic**: Identical inputs yield bit-identical outputs, and
//!   room order never matters
//!
//! ## Quick Start
//!
//! ```rust
//! use takeoff_core::project::Project;
//! use takeoff_core::room::{MeasurementMode, RoomInput, RoomType};
//! use takeoff_core::takeoff;
//!
//! let mut project = Project::new("Jane Doe", "25-014", "Acme Reforms");
//! project.demolition_rooms.push(RoomInput {
//!     room_type: RoomType::Bathroom,
//!     measurement_mode: MeasurementMode::AreaPerimeter,
//!     area: Some(6.0),
//!     perimeter: Some(10.0),
//!     floor_material: "Cerámica".to_string(),
//!     remove_floor: true,
//!     ..RoomInput::default()
//! });
//!
//! let report = takeoff::run(&project);
//! assert!(report.demolition.floor_tile_removal_m2 > 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`project`] - Project container and metadata
//! - [`room`] - Raw and normalized room records
//! - [`config`] - Phase configuration, settings, partitions, electrical
//! - [`finishes`] - Floor/wall finish enums and free-text parsing
//! - [`normalize`] - The room normalizer (heights, geometry, fallbacks)
//! - [`takeoff`] - The demolition, debris, reform, and materials calculators
//! - [`collaborators`] - Storage/pricing/detection seams (traits only)
//! - [`errors`] - Structured error and validation-issue types

pub mod collaborators;
pub mod config;
pub mod errors;
pub mod finishes;
pub mod normalize;
pub mod project;
pub mod room;
pub mod takeoff;

// Re-export commonly used types at crate root for convenience
pub use errors::{TakeoffError, TakeoffResult, ValidationIssue};
pub use normalize::{normalize_room, normalize_rooms};
pub use project::{Project, ProjectMetadata};
pub use takeoff::{DebrisCalculation, DemolitionSummary, MaterialQuantities, ReformSummary, TakeoffReport};
