//! # Material Quantity Takeoff
//!
//! Converts partition, wall-lining, and false-ceiling areas into purchasable
//! material counts using fixed yields: 31 bricks per m2 (24x12 cm brick with
//! a 1 cm mortar joint), 2.88 m2 per plasterboard (1.20 x 2.40 m board), 5%
//! waste on top. Counts always round up to whole units.
//!
//! Brick partitions consume no boards; plasterboard partitions are boarded on
//! both faces; wall linings on one face only. False-ceiling boards come from
//! the reform rooms whose ceiling is being lowered, with an informational
//! moisture-resistant sub-count for the bathrooms among them.

use serde::{Deserialize, Serialize};

use crate::config::{Partition, PartitionKind, WallLining};
use crate::room::{Room, RoomType};

/// Bricks per m2 of partition (24x12 cm brick, 1 cm mortar joint)
pub const BRICKS_PER_M2: f64 = 31.0;
/// Face area of one plasterboard (1.20 x 2.40 m)
pub const PLASTERBOARD_AREA_M2: f64 = 2.88;
/// Waste allowance applied to material counts
pub const MATERIAL_WASTE_FACTOR: f64 = 1.05;

/// Boards needed to cover an area, whole boards
fn boards_for(area_m2: f64) -> u32 {
    if area_m2 <= 0.0 {
        0
    } else {
        (area_m2 / PLASTERBOARD_AREA_M2).ceil() as u32
    }
}

/// Derived material counts for the new-construction side of the works.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MaterialQuantities {
    pub brick_partition_m2: f64,
    pub plasterboard_partition_m2: f64,
    pub wall_lining_m2: f64,
    pub false_ceiling_m2: f64,
    /// Bathroom share of the false-ceiling area
    pub moisture_resistant_ceiling_m2: f64,

    /// Bricks including 5% waste
    pub bricks_needed: u32,
    /// Boards for plasterboard partitions, both faces
    pub partition_boards: u32,
    /// Boards for wall linings, one face
    pub lining_boards: u32,
    /// Boards for lowered ceilings
    pub ceiling_boards: u32,
    /// Informational recommendation: boards of the ceiling count that
    /// should be moisture-resistant. Not added to the totals.
    pub moisture_resistant_boards: u32,
    /// All board-consuming buckets summed, plus 5% waste
    pub total_boards_with_waste: u32,
}

impl MaterialQuantities {
    /// True when nothing needs to be purchased
    pub fn is_empty(&self) -> bool {
        self.bricks_needed == 0 && self.total_boards_with_waste == 0
    }
}

/// Compute material counts from partition/lining definitions and the
/// reform rooms' ceiling-lowering flags.
///
/// # Example
///
/// ```rust
/// use takeoff_core::config::{Partition, PartitionKind};
/// use takeoff_core::takeoff::materials;
///
/// let partition = Partition {
///     kind: PartitionKind::Plasterboard,
///     linear_meters: 10.0,
///     height: 2.4,
///     ..Partition::default()
/// };
/// let quantities = materials::compute(&[partition], &[], &[]);
/// // 24 m2, two faces: ceil(48 / 2.88) = 17 boards
/// assert_eq!(quantities.partition_boards, 17);
/// ```
pub fn compute(
    partitions: &[Partition],
    wall_linings: &[WallLining],
    reform_rooms: &[Room],
) -> MaterialQuantities {
    let brick_partition_m2: f64 = partitions
        .iter()
        .filter(|p| p.kind == PartitionKind::Brick)
        .map(|p| p.area())
        .sum();
    let plasterboard_partition_m2: f64 = partitions
        .iter()
        .filter(|p| p.kind == PartitionKind::Plasterboard)
        .map(|p| p.area())
        .sum();
    let wall_lining_m2: f64 = wall_linings.iter().map(|l| l.area()).sum();

    let false_ceiling_m2: f64 = reform_rooms
        .iter()
        .filter(|r| r.lowers_ceiling())
        .map(|r| r.area)
        .sum();
    let moisture_resistant_ceiling_m2: f64 = reform_rooms
        .iter()
        .filter(|r| r.lowers_ceiling() && r.room_type == RoomType::Bathroom)
        .map(|r| r.area)
        .sum();

    let bricks_needed = if brick_partition_m2 > 0.0 {
        (brick_partition_m2 * BRICKS_PER_M2 * MATERIAL_WASTE_FACTOR).ceil() as u32
    } else {
        0
    };

    // Freestanding plasterboard partitions are boarded on both faces,
    // linings on one.
    let partition_boards = boards_for(plasterboard_partition_m2 * 2.0);
    let lining_boards = boards_for(wall_lining_m2);
    let ceiling_boards = boards_for(false_ceiling_m2);
    let moisture_resistant_boards = boards_for(moisture_resistant_ceiling_m2);

    let board_sum = partition_boards + lining_boards + ceiling_boards;
    let total_boards_with_waste = if board_sum > 0 {
        (board_sum as f64 * MATERIAL_WASTE_FACTOR).ceil() as u32
    } else {
        0
    };

    MaterialQuantities {
        brick_partition_m2,
        plasterboard_partition_m2,
        wall_lining_m2,
        false_ceiling_m2,
        moisture_resistant_ceiling_m2,
        bricks_needed,
        partition_boards,
        lining_boards,
        ceiling_boards,
        moisture_resistant_boards,
        total_boards_with_waste,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GlobalConfig;
    use crate::normalize::normalize_rooms;
    use crate::room::{MeasurementMode, RoomInput};

    fn plasterboard(linear_meters: f64, height: f64) -> Partition {
        Partition {
            kind: PartitionKind::Plasterboard,
            linear_meters,
            height,
            ..Partition::default()
        }
    }

    fn brick(linear_meters: f64, height: f64) -> Partition {
        Partition {
            kind: PartitionKind::Brick,
            linear_meters,
            height,
            ..Partition::default()
        }
    }

    #[test]
    fn test_partition_boards_cover_both_faces() {
        let quantities = compute(&[plasterboard(10.0, 2.4)], &[], &[]);
        assert!((quantities.plasterboard_partition_m2 - 24.0).abs() < 1e-9);
        // ceil((24 x 2) / 2.88) = 17
        assert_eq!(quantities.partition_boards, 17);
    }

    #[test]
    fn test_lining_boards_cover_one_face() {
        let lining = WallLining {
            linear_meters: 10.0,
            height: 2.4,
            ..WallLining::default()
        };
        let quantities = compute(&[], &[lining], &[]);
        assert!((quantities.wall_lining_m2 - 24.0).abs() < 1e-9);
        // ceil(24 / 2.88) = 9, roughly half the double-faced partition count
        assert_eq!(quantities.lining_boards, 9);
    }

    #[test]
    fn test_bricks_with_waste() {
        let quantities = compute(&[brick(4.0, 2.5)], &[], &[]);
        assert!((quantities.brick_partition_m2 - 10.0).abs() < 1e-9);
        // ceil(10 x 31 x 1.05) = ceil(325.5) = 326
        assert_eq!(quantities.bricks_needed, 326);
        // Bricks need no boarding
        assert_eq!(quantities.partition_boards, 0);
    }

    #[test]
    fn test_false_ceiling_boards_from_lowered_rooms() {
        let config = GlobalConfig::reform();
        let rooms = normalize_rooms(
            &[
                RoomInput {
                    room_type: crate::room::RoomType::Bathroom,
                    measurement_mode: MeasurementMode::AreaPerimeter,
                    area: Some(6.0),
                    perimeter: Some(10.0),
                    lower_ceiling: true,
                    new_ceiling_height: Some(2.3),
                    ..RoomInput::default()
                },
                RoomInput {
                    room_type: crate::room::RoomType::Bedroom,
                    width: Some(3.0),
                    length: Some(4.0),
                    lower_ceiling: true,
                    new_ceiling_height: Some(2.3),
                    ..RoomInput::default()
                },
                // Lowering flag without a target height does not count
                RoomInput {
                    room_type: crate::room::RoomType::Hallway,
                    width: Some(1.5),
                    length: Some(4.0),
                    lower_ceiling: true,
                    ..RoomInput::default()
                },
            ],
            &config,
        );

        let quantities = compute(&[], &[], &rooms);
        assert!((quantities.false_ceiling_m2 - 18.0).abs() < 1e-9);
        assert!((quantities.moisture_resistant_ceiling_m2 - 6.0).abs() < 1e-9);
        // ceil(18 / 2.88) = 7, ceil(6 / 2.88) = 3
        assert_eq!(quantities.ceiling_boards, 7);
        assert_eq!(quantities.moisture_resistant_boards, 3);
    }

    #[test]
    fn test_grand_total_adds_waste_but_not_moisture_subcount() {
        let config = GlobalConfig::reform();
        let rooms = normalize_rooms(
            &[RoomInput {
                room_type: crate::room::RoomType::Bathroom,
                measurement_mode: MeasurementMode::AreaPerimeter,
                area: Some(6.0),
                perimeter: Some(10.0),
                lower_ceiling: true,
                new_ceiling_height: Some(2.3),
                ..RoomInput::default()
            }],
            &config,
        );
        let lining = WallLining {
            linear_meters: 10.0,
            height: 2.4,
            ..WallLining::default()
        };
        let quantities = compute(&[plasterboard(10.0, 2.4)], &[lining], &rooms);

        // 17 + 9 + 3 = 29, ceil(29 x 1.05) = ceil(30.45) = 31
        assert_eq!(quantities.partition_boards, 17);
        assert_eq!(quantities.lining_boards, 9);
        assert_eq!(quantities.ceiling_boards, 3);
        assert_eq!(quantities.moisture_resistant_boards, 3);
        assert_eq!(quantities.total_boards_with_waste, 31);
    }

    #[test]
    fn test_empty_input_yields_all_zero() {
        let quantities = compute(&[], &[], &[]);
        assert!(quantities.is_empty());
        assert_eq!(quantities.total_boards_with_waste, 0);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let quantities = compute(&[brick(4.0, 2.5), plasterboard(10.0, 2.4)], &[], &[]);
        let json = serde_json::to_string_pretty(&quantities).unwrap();
        let roundtrip: MaterialQuantities = serde_json::from_str(&json).unwrap();
        assert_eq!(quantities, roundtrip);
    }
}
