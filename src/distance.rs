// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::Position;

/// Calculates the straight-line (Euclidean) distance between two positions.
/// This is the cost of moving along an edge of the [Graph](crate::Graph).
pub fn distance(a: Position, b: Position) -> f32 {
    let dx = b.x as f64 - a.x as f64;
    let dy = b.y as f64 - a.y as f64;
    let dz = b.z as f64 - a.z as f64;

    (dx * dx + dy * dy + dz * dz).sqrt() as f32
}
