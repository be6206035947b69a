// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::HashSet;

use crate::{bearing, Bearing, Category, Graph, RouteError, Waypoint};

/// Direction of a floor change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FloorTransition {
    Up,
    Down,
}

impl FloorTransition {
    fn between(from_floor: i32, to_floor: i32) -> Option<Self> {
        match to_floor.cmp(&from_floor) {
            std::cmp::Ordering::Greater => Some(Self::Up),
            std::cmp::Ordering::Less => Some(Self::Down),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

/// A single step of a planned route: moving from one waypoint to an adjacent one.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    pub from: String,
    pub to: String,

    /// Compass direction of the horizontal movement.
    pub bearing: Bearing,

    /// Straight-line distance between the two waypoints, rounded to one decimal place.
    pub segment_length: f32,

    /// Human-readable instruction.
    pub text: String,

    /// Floor of `to`, that is the floor the traveler is on after this step.
    pub floor: i32,

    /// Set only if this step changes the floor by stairs or an elevator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_transition: Option<FloorTransition>,
}

impl Instruction {
    fn new(from: &Waypoint, to: &Waypoint) -> Self {
        let bearing = bearing(from.position, to.position);
        let change = FloorTransition::between(from.floor, to.floor);

        let (text, floor_transition) = match to.category {
            Category::Stairs => vertical_text("stairs", to.floor, change),
            Category::Elevator => vertical_text("elevator", to.floor, change),
            Category::Room => (format!("Arrive at {}", to.id), None),
            Category::Hallway => (format!("Continue {} down the hallway", bearing), None),
            Category::Entrance | Category::Other => (format!("Head {}", bearing), None),
        };

        Self {
            from: from.id.clone(),
            to: to.id.clone(),
            bearing,
            segment_length: round_to_tenth(crate::distance(from.position, to.position)),
            text,
            floor: to.floor,
            floor_transition,
        }
    }
}

fn vertical_text(
    what: &str,
    floor: i32,
    change: Option<FloorTransition>,
) -> (String, Option<FloorTransition>) {
    match change {
        Some(t) => (format!("Take the {} {} to floor {}", what, t.as_str(), floor), Some(t)),
        None => (format!("Continue to the {}", what), None),
    }
}

fn round_to_tenth(x: f32) -> f32 {
    (x * 10.0).round() / 10.0
}

/// Converts a path of waypoint ids (as returned by [find_path](crate::find_path))
/// into turn-by-turn [Instructions](Instruction), one per pair of consecutive waypoints.
///
/// Paths with fewer than two waypoints produce no instructions.
pub fn synthesize<S: AsRef<str>>(g: &Graph, path: &[S]) -> Result<Vec<Instruction>, RouteError> {
    let waypoints = path
        .iter()
        .map(|id| {
            let id = id.as_ref();
            g.get(id).ok_or_else(|| RouteError::UnknownWaypoint(id.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    waypoints
        .windows(2)
        .map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            if !from.neighbors.contains(&to.id) {
                return Err(RouteError::NotAdjacent {
                    from: from.id.clone(),
                    to: to.id.clone(),
                });
            }
            Ok(Instruction::new(from, to))
        })
        .collect()
}

/// Returns ids of all waypoints referenced by the instructions,
/// in the order they were first seen, without duplicates.
pub fn touched_waypoints(instructions: &[Instruction]) -> Vec<&str> {
    let mut seen = HashSet::new();
    instructions
        .iter()
        .flat_map(|i| [i.from.as_str(), i.to.as_str()])
        .filter(|&id| seen.insert(id))
        .collect()
}

/// Returns the sum of segment lengths of all instructions.
pub fn total_length(instructions: &[Instruction]) -> f32 {
    instructions.iter().map(|i| i.segment_length).sum()
}
