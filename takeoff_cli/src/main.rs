//! # Takeoff CLI Application
//!
//! Terminal demo for the quantity takeoff engine: builds a small sample
//! project, runs the full pipeline, and prints the results section by
//! section, plus the JSON payload a host would consume.

use std::io::{self, BufRead, Write};

use takeoff_core::project::Project;
use takeoff_core::room::{BathroomFixture, Door, DoorType, MeasurementMode, RoomInput, RoomType};
use takeoff_core::takeoff;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("Takeoff CLI - Renovation Quantity Calculator");
    println!("============================================");
    println!();

    let bathroom_area = prompt_f64("Bathroom area (m2) [6.0]: ", 6.0);
    let bathroom_perimeter = prompt_f64("Bathroom perimeter (m) [10.0]: ", 10.0);
    let standard_height = prompt_f64("Standard ceiling height (m) [2.6]: ", 2.6);

    println!();
    println!("Running takeoff for a bathroom + bedroom demo project...");
    println!();

    let mut project = Project::new("CLI Demo", "25-000", "Demo Client");
    project.demolition_config.standard_height = standard_height;
    project.reform_config.standard_height = standard_height;

    project.demolition_rooms.push(RoomInput {
        room_type: RoomType::Bathroom,
        measurement_mode: MeasurementMode::AreaPerimeter,
        area: Some(bathroom_area),
        perimeter: Some(bathroom_perimeter),
        floor_material: "Cerámica".to_string(),
        wall_material: "Cerámica".to_string(),
        remove_floor: true,
        remove_wall_tiles: true,
        remove_bathroom_elements: true,
        bathroom_element_units: 3,
        has_doors: true,
        door_list: vec![Door::new(DoorType::Plain)],
        ..RoomInput::default()
    });
    project.demolition_rooms.push(RoomInput {
        room_type: RoomType::Bedroom,
        width: Some(3.0),
        length: Some(4.0),
        floor_material: "Parquet flotante".to_string(),
        remove_floor: true,
        remove_moldings: true,
        ..RoomInput::default()
    });

    project.reform_rooms.push(RoomInput {
        room_type: RoomType::Bathroom,
        measurement_mode: MeasurementMode::AreaPerimeter,
        area: Some(bathroom_area),
        perimeter: Some(bathroom_perimeter),
        floor_material: "Cerámica".to_string(),
        wall_material: "Cerámica".to_string(),
        bathroom_fixtures: vec![
            BathroomFixture::Toilet,
            BathroomFixture::Washbasin,
            BathroomFixture::ShowerTray,
        ],
        new_door_list: vec![Door::new(DoorType::SlidingPocket)],
        ..RoomInput::default()
    });
    project.reform_rooms.push(RoomInput {
        room_type: RoomType::Bedroom,
        width: Some(3.0),
        length: Some(4.0),
        floor_material: "Parquet flotante".to_string(),
        wall_material: "Enlucido y pintura".to_string(),
        has_radiator: true,
        new_door_list: vec![Door::new(DoorType::Plain)],
        ..RoomInput::default()
    });

    let report = takeoff::run(&project);

    println!("═══════════════════════════════════════");
    println!("  DEMOLITION");
    println!("═══════════════════════════════════════");
    println!("  Floor tile removal:   {:>7.2} m2", report.demolition.floor_tile_removal_m2);
    println!("  Wooden floor removal: {:>7.2} m2", report.demolition.wooden_floor_removal_m2);
    println!("  Wall tile removal:    {:>7.2} m2", report.demolition.wall_tile_removal_m2);
    println!("  Molding removal:      {:>7.2} m", report.demolition.molding_removal_m);
    println!("  Bathroom elements:    {:>4} ud", report.demolition.bathroom_element_units);
    println!("  Doors:                {:>4} ud", report.demolition.door_removal_units);
    println!();
    println!("═══════════════════════════════════════");
    println!("  DEBRIS");
    println!("═══════════════════════════════════════");
    println!("  Ceramic:    {:>7.3} m3", report.debris.ceramic_m3);
    println!("  Wood:       {:>7.3} m3", report.debris.wood_debris_m3);
    println!("  Mixed:      {:>7.3} m3", report.debris.mixed_debris_m3);
    println!("  TOTAL:      {:>7.3} m3", report.debris.total_debris_m3);
    println!("  Containers: {:>4}", report.debris.containers_needed);
    println!("  Carry-down: {:>7.2} h (flat) / {:.2} h (estimated)",
        report.debris.manual_carry_down_hours,
        report.debris.estimated_carry_down_hours,
    );
    println!();
    println!("═══════════════════════════════════════");
    println!("  REFORM");
    println!("═══════════════════════════════════════");
    if !report.reform.masonry.is_empty() {
        println!("  Masonry:");
        println!("    Ceramic floor: {:>7.2} m2", report.reform.masonry.ceramic_floor_m2);
        println!("    Wall tiling:   {:>7.2} m2", report.reform.masonry.wall_tiling_m2);
    }
    if !report.reform.paint.is_empty() {
        println!("  Paint:");
        println!("    Plaster+paint: {:>7.2} m2", report.reform.paint.plaster_and_paint_m2);
    }
    if !report.reform.carpentry.is_empty() {
        println!("  Carpentry:");
        println!("    Parquet:       {:>7.2} m2", report.reform.carpentry.floating_parquet_m2);
        println!("    Skirting:      {:>7.2} m", report.reform.carpentry.skirting_m);
        println!("    Pocket frames: {:>4} ud", report.reform.carpentry.pocket_frame_units);
    }
    if !report.reform.plumbing.is_empty() {
        println!("  Plumbing:");
        println!("    Water networks: {:>3} ud", report.reform.plumbing.water_network_units);
        println!("    Shower trays:   {:>3} ud", report.reform.plumbing.shower_tray_units);
    }
    if !report.reform.heating.is_empty() {
        println!("  Heating:");
        println!("    Radiator installs: {:>3} ud", report.reform.heating.radiator_install_units);
        println!("    Electric emitters: {:>3} ud", report.reform.heating.electric_emitter_units);
    }
    println!();
    println!("═══════════════════════════════════════");
    println!("  MATERIALS");
    println!("═══════════════════════════════════════");
    println!("  Bricks: {:>5} ud", report.materials.bricks_needed);
    println!("  Boards: {:>5} ud (with waste)", report.materials.total_boards_with_waste);

    println!();
    println!("JSON Output (for host/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&report) {
        println!("{}", json);
    }
}
