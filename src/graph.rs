// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::btree_map::{BTreeMap, Entry};

use crate::{distance, Position, Waypoint};

/// Error conditions which may occur when building a [Graph].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("waypoint with an empty id")]
    EmptyId,

    #[error("duplicate waypoint: {0}")]
    DuplicateWaypoint(String),

    #[error("waypoint {from} lists a non-existing neighbor {to}")]
    DanglingNeighbor { from: String, to: String },

    #[error("waypoint {0} lists itself as a neighbor")]
    SelfLoop(String),
}

/// Represents a building as a set of [Waypoints](Waypoint) and the
/// connections between them.
///
/// A Graph is validated once on construction and can't be modified afterwards,
/// so it may be freely shared between threads planning routes concurrently.
/// Waypoints are kept sorted by id, which makes iteration (and thus route search)
/// deterministic.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Graph(BTreeMap<String, Waypoint>);

impl Graph {
    /// Builds a graph from the provided waypoints.
    ///
    /// Every id referenced in a neighbor list must belong to one of the waypoints.
    /// Duplicate entries in a neighbor list are dropped. One-way connections
    /// (A lists B, but B doesn't list A) are allowed, but logged as warnings.
    pub fn from_waypoints<I: IntoIterator<Item = Waypoint>>(
        waypoints: I,
    ) -> Result<Self, GraphError> {
        let mut map = BTreeMap::default();

        for mut w in waypoints {
            if w.id.is_empty() {
                return Err(GraphError::EmptyId);
            }

            let mut seen = Vec::with_capacity(w.neighbors.len());
            w.neighbors.retain(|n| {
                if seen.contains(n) {
                    false
                } else {
                    seen.push(n.clone());
                    true
                }
            });

            match map.entry(w.id.clone()) {
                Entry::Vacant(e) => {
                    e.insert(w);
                }
                Entry::Occupied(e) => return Err(GraphError::DuplicateWaypoint(e.key().clone())),
            }
        }

        let g = Self(map);
        g.validate()?;
        Ok(g)
    }

    fn validate(&self) -> Result<(), GraphError> {
        for w in self.0.values() {
            for n in &w.neighbors {
                if *n == w.id {
                    return Err(GraphError::SelfLoop(w.id.clone()));
                }

                let neighbor = self.0.get(n).ok_or_else(|| GraphError::DanglingNeighbor {
                    from: w.id.clone(),
                    to: n.clone(),
                })?;

                if !neighbor.neighbors.contains(&w.id) {
                    log::warn!("one-way connection: {} -> {}", w.id, n);
                }
            }
        }
        Ok(())
    }

    /// Returns the number of waypoints in the graph.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the graph has no waypoints.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over all [Waypoints](Waypoint) in the graph, sorted by id.
    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.0.values()
    }

    /// Retrieves a [Waypoint] with the provided id.
    pub fn get(&self, id: &str) -> Option<&Waypoint> {
        self.0.get(id)
    }

    /// Returns true if a waypoint with the provided id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Returns an iterator over all neighbors of a waypoint with the given id,
    /// in the order they were listed. Unknown ids have no neighbors.
    pub fn neighbors<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a Waypoint> + 'a {
        self.0
            .get(id)
            .map(|w| w.neighbors.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(move |n| self.0.get(n))
    }

    /// Gets the length of an edge from one waypoint to another,
    /// or [None] if there is no such edge.
    pub fn edge_length(&self, from_id: &str, to_id: &str) -> Option<f32> {
        let from = self.0.get(from_id)?;
        if !from.neighbors.iter().any(|n| n == to_id) {
            return None;
        }
        let to = self.0.get(to_id)?;
        Some(distance(from.position, to.position))
    }

    /// Finds the closest [Waypoint] to the given position, optionally only
    /// considering waypoints on a specific floor.
    ///
    /// This function requires computing the distance to every [Waypoint] in the graph,
    /// and is not suitable for large graphs.
    pub fn find_nearest_waypoint(
        &self,
        position: Position,
        floor: Option<i32>,
    ) -> Option<&Waypoint> {
        self.0
            .values()
            .filter(|w| floor.map_or(true, |f| w.floor == f))
            .map(|w| (distance(position, w.position), w))
            .min_by(|(a_dist, _), (b_dist, _)| a_dist.total_cmp(b_dist))
            .map(|(_, w)| w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Category;

    fn wp(id: &str, x: f32, z: f32, neighbors: &[&str]) -> Waypoint {
        Waypoint::new(
            id,
            Position::new(x, 0.0, z),
            1,
            Category::Hallway,
            neighbors.iter().copied(),
        )
    }

    #[test]
    fn from_waypoints() {
        let g = Graph::from_waypoints([
            wp("a", 0.0, 0.0, &["b", "c", "b"]),
            wp("b", 3.0, 4.0, &["a"]),
            wp("c", 0.0, 10.0, &["a"]),
        ])
        .unwrap();

        assert_eq!(g.len(), 3);
        assert!(!g.is_empty());
        assert!(g.contains("a"));
        assert!(!g.contains("d"));
        assert_eq!(g.get("a").unwrap().neighbors, vec!["b", "c"]);
        assert_eq!(
            g.iter().map(|w| w.id.as_str()).collect::<Vec<_>>(),
            vec!["a", "b", "c"],
        );
        assert_eq!(
            g.neighbors("a").map(|w| w.id.as_str()).collect::<Vec<_>>(),
            vec!["b", "c"],
        );
        assert_eq!(g.neighbors("d").count(), 0);
        assert_eq!(g.edge_length("a", "b"), Some(5.0));
        assert_eq!(g.edge_length("b", "c"), None);
        assert_eq!(g.edge_length("a", "d"), None);
    }

    #[test]
    fn from_waypoints_rejects_invalid_data() {
        assert_eq!(
            Graph::from_waypoints([wp("a", 0.0, 0.0, &["b"])]),
            Err(GraphError::DanglingNeighbor {
                from: "a".to_string(),
                to: "b".to_string(),
            }),
        );
        assert_eq!(
            Graph::from_waypoints([wp("a", 0.0, 0.0, &[]), wp("a", 1.0, 0.0, &[])]),
            Err(GraphError::DuplicateWaypoint("a".to_string())),
        );
        assert_eq!(
            Graph::from_waypoints([wp("a", 0.0, 0.0, &["a"])]),
            Err(GraphError::SelfLoop("a".to_string())),
        );
        assert_eq!(
            Graph::from_waypoints([wp("", 0.0, 0.0, &[])]),
            Err(GraphError::EmptyId),
        );
    }

    #[test]
    fn from_waypoints_allows_one_way() {
        let g = Graph::from_waypoints([wp("a", 0.0, 0.0, &["b"]), wp("b", 1.0, 0.0, &[])]).unwrap();
        assert!(g.edge_length("a", "b").is_some());
        assert!(g.edge_length("b", "a").is_none());
    }

    #[test]
    fn find_nearest_waypoint() {
        let mut upstairs = wp("up", 1.0, 1.0, &[]);
        upstairs.floor = 2;
        let g = Graph::from_waypoints([
            wp("a", 0.0, 0.0, &[]),
            wp("b", 10.0, 0.0, &[]),
            upstairs,
        ])
        .unwrap();

        let here = Position::new(1.5, 0.0, 1.0);
        assert_eq!(g.find_nearest_waypoint(here, None).unwrap().id, "up");
        assert_eq!(g.find_nearest_waypoint(here, Some(1)).unwrap().id, "a");
        assert_eq!(
            g.find_nearest_waypoint(Position::new(8.0, 0.0, 0.0), Some(1)).unwrap().id,
            "b",
        );
        assert!(g.find_nearest_waypoint(here, Some(3)).is_none());
    }
}
