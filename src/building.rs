// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! The bundled building: three floors joined by one staircase and one elevator.
//!
//! ```text
//! floor 3:                ELEV_3
//!                           │
//!                 ROOF ── HALL_3A ── STAIRS_3
//!                           │
//!                          301
//!
//! floor 2:                ELEV_2
//!                           │
//!                 203 ── HALL_2C
//!                           │
//!                 201 ── HALL_2A ── HALL_2B ── STAIRS_2
//!                                     │   \
//!                                    202   LIB
//!
//! floor 1:                ELEV_1
//!                           │
//!                 103 ── HALL_1C ── CAFE
//!                           │
//!                 101 ── HALL_1A ── HALL_1B ── STAIRS_1
//!                           │         │
//!                       ENTRANCE     102
//! ```
//!
//! Floors are 4 units apart on the y axis. Stairs and elevator shafts keep
//! their horizontal position on every floor.

use std::sync::OnceLock;

use crate::{Category, Graph, GraphError, Position, Waypoint};

const FLOOR_HEIGHT: f32 = 4.0;

type Row = (&'static str, f32, f32, i32, Category, &'static [&'static str]);

/// (id, x, z, floor, category, neighbors)
const WAYPOINTS: &[Row] = &[
    // Floor 1
    ("ENTRANCE", 0.0, -10.0, 1, Category::Entrance, &["HALL_1A"]),
    ("HALL_1A", 0.0, 0.0, 1, Category::Hallway, &["ENTRANCE", "HALL_1B", "HALL_1C", "101"]),
    ("HALL_1B", 10.0, 0.0, 1, Category::Hallway, &["HALL_1A", "102", "STAIRS_1"]),
    ("HALL_1C", 0.0, 12.0, 1, Category::Hallway, &["HALL_1A", "103", "ELEV_1", "CAFE"]),
    ("101", -6.0, 0.0, 1, Category::Room, &["HALL_1A"]),
    ("102", 10.0, -6.0, 1, Category::Room, &["HALL_1B"]),
    ("103", -6.0, 12.0, 1, Category::Room, &["HALL_1C"]),
    ("CAFE", 8.0, 12.0, 1, Category::Room, &["HALL_1C"]),
    ("STAIRS_1", 14.0, 4.0, 1, Category::Stairs, &["HALL_1B", "STAIRS_2"]),
    ("ELEV_1", 4.0, 16.0, 1, Category::Elevator, &["HALL_1C", "ELEV_2"]),
    // Floor 2
    ("HALL_2A", 0.0, 0.0, 2, Category::Hallway, &["HALL_2B", "HALL_2C", "201"]),
    ("HALL_2B", 10.0, 0.0, 2, Category::Hallway, &["HALL_2A", "STAIRS_2", "202", "LIB"]),
    ("HALL_2C", 0.0, 12.0, 2, Category::Hallway, &["HALL_2A", "ELEV_2", "203"]),
    ("201", -6.0, 0.0, 2, Category::Room, &["HALL_2A"]),
    ("202", 10.0, -6.0, 2, Category::Room, &["HALL_2B"]),
    ("203", -6.0, 12.0, 2, Category::Room, &["HALL_2C"]),
    ("LIB", 20.0, -4.0, 2, Category::Room, &["HALL_2B"]),
    ("STAIRS_2", 14.0, 4.0, 2, Category::Stairs, &["STAIRS_1", "HALL_2B", "STAIRS_3"]),
    ("ELEV_2", 4.0, 16.0, 2, Category::Elevator, &["ELEV_1", "HALL_2C", "ELEV_3"]),
    // Floor 3
    ("HALL_3A", 4.0, 4.0, 3, Category::Hallway, &["STAIRS_3", "ELEV_3", "301", "ROOF"]),
    ("301", 4.0, -4.0, 3, Category::Room, &["HALL_3A"]),
    ("ROOF", -4.0, 4.0, 3, Category::Other, &["HALL_3A"]),
    ("STAIRS_3", 14.0, 4.0, 3, Category::Stairs, &["STAIRS_2", "HALL_3A"]),
    ("ELEV_3", 4.0, 16.0, 3, Category::Elevator, &["ELEV_2", "HALL_3A"]),
];

/// Builds a fresh [Graph] of the bundled building.
pub fn build_sample_building() -> Result<Graph, GraphError> {
    Graph::from_waypoints(WAYPOINTS.iter().map(|&(id, x, z, floor, category, neighbors)| {
        let y = (floor - 1) as f32 * FLOOR_HEIGHT;
        Waypoint::new(id, Position::new(x, y, z), floor, category, neighbors.iter().copied())
    }))
}

/// Returns the bundled building. The [Graph] is built on first use and
/// shared for the rest of the process lifetime.
pub fn sample_building() -> &'static Graph {
    static GRAPH: OnceLock<Graph> = OnceLock::new();
    GRAPH.get_or_init(|| build_sample_building().expect("bundled building data must be valid"))
}
