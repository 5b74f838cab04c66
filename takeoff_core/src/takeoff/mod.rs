//! # Quantity Takeoff Calculators
//!
//! The four calculators that turn normalized rooms and configuration into
//! the bill of quantities, plus a convenience runner for the full pipeline.
//! Each calculator follows the pattern:
//!
//! - Plain value-object output (JSON-serializable, no identity)
//! - `compute(...) -> *Summary` - pure function, recomputed fresh per call
//!
//! The only ordering requirement between them is a data dependency: the
//! debris calculator consumes the already-computed demolition summary.
//! Everything is side-effect-free, so concurrent invocation with different
//! inputs is inherently safe.

pub mod debris;
pub mod demolition;
pub mod materials;
pub mod reform;

use serde::{Deserialize, Serialize};

use crate::normalize::normalize_rooms;
use crate::project::Project;

// Re-export commonly used types
pub use debris::{DebrisCalculation, WallDebrisGroup};
pub use demolition::DemolitionSummary;
pub use materials::MaterialQuantities;
pub use reform::ReformSummary;

/// Bundled output of one full pipeline run.
///
/// Carries no identity and is recomputed from scratch on every call; a
/// superseded report can simply be discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TakeoffReport {
    pub demolition: DemolitionSummary,
    pub debris: DebrisCalculation,
    pub reform: ReformSummary,
    pub materials: MaterialQuantities,
}

/// Run the full takeoff pipeline for a project.
///
/// Normalizes both phases' room lists, then runs demolition, debris, reform,
/// and material quantities in dependency order.
///
/// # Example
///
/// ```rust
/// use takeoff_core::project::Project;
/// use takeoff_core::takeoff;
///
/// let project = Project::new("Jane Doe", "25-014", "Acme Reforms");
/// let report = takeoff::run(&project);
/// assert!(report.demolition.is_empty());
/// assert_eq!(report.debris.containers_needed, 0);
/// ```
pub fn run(project: &Project) -> TakeoffReport {
    let demolition_rooms = normalize_rooms(&project.demolition_rooms, &project.demolition_config);
    let demolition_summary = demolition::compute(&demolition_rooms, &project.demolition_config);
    let debris_calculation = debris::compute(
        &demolition_summary,
        &demolition_rooms,
        &project.demolition_config,
        &project.settings,
    );

    let reform_rooms = normalize_rooms(&project.reform_rooms, &project.reform_config);
    let reform_summary = reform::compute(&reform_rooms, &project.reform_config, &project.electrical);
    let material_quantities = materials::compute(
        &project.reform_config.partitions,
        &project.reform_config.wall_linings,
        &reform_rooms,
    );

    TakeoffReport {
        demolition: demolition_summary,
        debris: debris_calculation,
        reform: reform_summary,
        materials: material_quantities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::room::{MeasurementMode, RoomInput, RoomType};

    fn sample_project() -> Project {
        let mut project = Project::new("Engineer", "25-001", "Client");
        project.demolition_config.standard_height = 2.6;
        project.demolition_rooms.push(RoomInput {
            room_type: RoomType::Bathroom,
            measurement_mode: MeasurementMode::AreaPerimeter,
            area: Some(6.0),
            perimeter: Some(10.0),
            floor_material: "Cerámica".to_string(),
            wall_material: "Cerámica".to_string(),
            remove_floor: true,
            remove_wall_tiles: true,
            ..RoomInput::default()
        });
        project.reform_rooms.push(RoomInput {
            room_type: RoomType::Bathroom,
            measurement_mode: MeasurementMode::AreaPerimeter,
            area: Some(6.0),
            perimeter: Some(10.0),
            floor_material: "Cerámica".to_string(),
            wall_material: "Cerámica".to_string(),
            ..RoomInput::default()
        });
        project
    }

    #[test]
    fn test_full_pipeline() {
        let report = run(&sample_project());
        assert!((report.demolition.floor_tile_removal_m2 - 6.0).abs() < 1e-9);
        assert!((report.demolition.wall_tile_removal_m2 - 26.0).abs() < 1e-9);
        assert!((report.debris.ceramic_m3 - 0.448).abs() < 1e-9);
        assert!((report.reform.masonry.ceramic_floor_m2 - 6.0).abs() < 1e-9);
        assert_eq!(report.debris.containers_needed, 1);
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let project = sample_project();
        let a = run(&project);
        let b = run(&project);
        assert_eq!(a, b);
    }

    #[test]
    fn test_report_serialization_roundtrip() {
        let report = run(&sample_project());
        let json = serde_json::to_string_pretty(&report).unwrap();
        let roundtrip: TakeoffReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, roundtrip);
    }
}
