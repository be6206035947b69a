// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

/// Recommended number of allowed waypoint settlements in [find_path](crate::find_path)
/// before [RouteError::StepLimitExceeded] is returned.
pub const DEFAULT_STEP_LIMIT: usize = 1_000_000;

/// Error conditions which may occur during [plan](crate::plan),
/// [find_path](crate::find_path) or [synthesize](crate::synthesize).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The start or end waypoint doesn't exist in the graph.
    #[error("unknown waypoint: {0}")]
    UnknownWaypoint(String),

    /// Both waypoints exist, but no sequence of edges connects them.
    #[error("no path from {from} to {to}")]
    NoPathFound { from: String, to: String },

    /// Two consecutive waypoints of a path are not connected by an edge.
    #[error("waypoints {from} and {to} are not adjacent")]
    NotAdjacent { from: String, to: String },

    /// Route search has exceeded its limit of steps.
    ///
    /// Concluding that no route exists requires traversing the whole graph.
    /// The step limit bounds the work done for very large graphs.
    #[error("step limit exceeded")]
    StepLimitExceeded,
}
