// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Turn-by-turn routing inside multi-floor buildings.
//!
//! A building is described as a small [Graph] of named [Waypoints](Waypoint) -
//! rooms, hallway junctions, stairs, elevators and entrances. [plan] runs Dijkstra
//! between two waypoints and turns the resulting path into an ordered list of
//! [Instructions](Instruction), which a presentation layer can render or highlight
//! (see [touched_waypoints]).
//!
//! # Example
//!
//! ```
//! let g = waypath::building::sample_building();
//! let instructions = waypath::plan(g, "ENTRANCE", "LIB").expect("failed to plan route");
//!
//! for instruction in &instructions {
//!     println!("{} ({} m)", instruction.text, instruction.segment_length);
//! }
//! ```

use std::fmt;
use std::str::FromStr;

pub mod bearing;
pub mod building;
pub mod c;
mod dijkstra;
mod distance;
mod graph;
mod instructions;

pub use bearing::{bearing, Bearing};
pub use dijkstra::{find_path, RouteError, DEFAULT_STEP_LIMIT};
pub use distance::distance;
pub use graph::{Graph, GraphError};
pub use instructions::{synthesize, total_length, touched_waypoints, FloorTransition, Instruction};

/// A point in the building's coordinate space.
///
/// `y` is the vertical axis, `x` and `z` span the horizontal plane.
#[derive(Debug, Default, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[repr(C)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Kind of place a [Waypoint] represents. Determines how instructions
/// leading *to* that waypoint are phrased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Room,
    Hallway,
    Stairs,
    Elevator,
    Entrance,
    Other,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Room => "room",
            Self::Hallway => "hallway",
            Self::Stairs => "stairs",
            Self::Elevator => "elevator",
            Self::Entrance => "entrance",
            Self::Other => "other",
        }
    }

    /// Returns true for categories which can move a traveler between floors.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Stairs | Self::Elevator)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [Category] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown waypoint category: {0:?}")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "room" => Ok(Self::Room),
            "hallway" => Ok(Self::Hallway),
            "stairs" => Ok(Self::Stairs),
            "elevator" => Ok(Self::Elevator),
            "entrance" => Ok(Self::Entrance),
            "other" => Ok(Self::Other),
            _ => Err(ParseCategoryError(s.to_string())),
        }
    }
}

/// Represents an element of the [Graph].
///
/// `floor` is authoritative for floor-change detection; `position.y` is only
/// used for rendering and is not required to agree with it.
///
/// Adjacency is expected to be symmetric (if A lists B, B lists A). This is
/// not enforced, but [Graph::from_waypoints] logs a warning for one-way links.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Waypoint {
    pub id: String,
    pub position: Position,
    pub floor: i32,
    pub category: Category,
    pub neighbors: Vec<String>,
}

impl Waypoint {
    pub fn new<I, S>(
        id: &str,
        position: Position,
        floor: i32,
        category: Category,
        neighbors: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.to_string(),
            position,
            floor,
            category,
            neighbors: neighbors.into_iter().map(Into::into).collect(),
        }
    }
}

/// Plans a route between two waypoints and returns the turn-by-turn
/// instructions to follow it.
///
/// Returns an empty vector if `from_id == to_id`. Fails with
/// [RouteError::UnknownWaypoint] if either id is not in the graph and
/// with [RouteError::NoPathFound] if the two waypoints are not connected.
pub fn plan(g: &Graph, from_id: &str, to_id: &str) -> Result<Vec<Instruction>, RouteError> {
    plan_with_limit(g, from_id, to_id, DEFAULT_STEP_LIMIT)
}

/// Same as [plan], but with an explicit limit on the number of waypoints
/// settled by the search before [RouteError::StepLimitExceeded] is returned.
pub fn plan_with_limit(
    g: &Graph,
    from_id: &str,
    to_id: &str,
    step_limit: usize,
) -> Result<Vec<Instruction>, RouteError> {
    log::debug!("planning route {} -> {}", from_id, to_id);

    let path = find_path(g, from_id, to_id, step_limit)?;
    let instructions = synthesize(g, &path)?;

    log::debug!(
        "route {} -> {}: {} instructions, {:.1} total",
        from_id,
        to_id,
        instructions.len(),
        total_length(&instructions),
    );
    Ok(instructions)
}
