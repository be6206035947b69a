// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::{distance, Graph, RouteError};

#[derive(Debug, Clone, Copy)]
struct QueueItem<'a> {
    at: &'a str,
    cost: f32,
}

impl PartialEq for QueueItem<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for QueueItem<'_> {}

impl PartialOrd for QueueItem<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueItem<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // NOTE: We revert the order of comparison,
        // as lower costs are considered better ("higher"),
        // and Rust's BinaryHeap is a max-heap.
        // Ties are broken by waypoint id, so that the search is deterministic.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.at.cmp(self.at))
    }
}

fn reconstruct_path<'a>(
    came_from: &HashMap<&'a str, &'a str>,
    from_id: &'a str,
    to_id: &'a str,
) -> Result<Vec<&'a str>, RouteError> {
    let mut path = vec![to_id];
    let mut last = to_id;

    while last != from_id {
        // A walk longer than the number of known predecessors means a cycle
        match came_from.get(last) {
            Some(&nd) if path.len() <= came_from.len() => {
                path.push(nd);
                last = nd;
            }
            _ => {
                return Err(RouteError::NoPathFound {
                    from: from_id.to_string(),
                    to: to_id.to_string(),
                })
            }
        }
    }

    path.reverse();
    Ok(path)
}

/// Uses [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
/// to find the shortest path between two waypoints in the provided graph.
/// Edge costs are the straight-line [distances](crate::distance) between waypoints.
///
/// Returns the ids of all waypoints on the path, including both ends.
/// If `from_id == to_id`, the path consists of a single waypoint.
///
/// Fails with [RouteError::UnknownWaypoint] if either waypoint doesn't exist
/// (checked before any search is done), and with [RouteError::NoPathFound] if
/// there is no path between them.
///
/// `step_limit` limits how many waypoints may be settled during the search
/// before returning [RouteError::StepLimitExceeded]. The recommended value is
/// [DEFAULT_STEP_LIMIT](crate::DEFAULT_STEP_LIMIT).
pub fn find_path<'a>(
    g: &'a Graph,
    from_id: &str,
    to_id: &str,
    step_limit: usize,
) -> Result<Vec<&'a str>, RouteError> {
    let from_id = g
        .get(from_id)
        .ok_or_else(|| RouteError::UnknownWaypoint(from_id.to_string()))?
        .id
        .as_str();
    let to_id = g
        .get(to_id)
        .ok_or_else(|| RouteError::UnknownWaypoint(to_id.to_string()))?
        .id
        .as_str();

    let mut queue: BinaryHeap<QueueItem> = BinaryHeap::default();
    let mut came_from: HashMap<&str, &str> = HashMap::default();
    let mut known_costs: HashMap<&str, f32> = HashMap::default();
    let mut settled: HashSet<&str> = HashSet::default();
    let mut steps: usize = 0;

    queue.push(QueueItem {
        at: from_id,
        cost: 0.0,
    });
    known_costs.insert(from_id, 0.0);

    while let Some(item) = queue.pop() {
        // The queue may hold outdated items for already settled waypoints
        if !settled.insert(item.at) {
            continue;
        }

        if item.at == to_id {
            log::trace!("{} settled after {} steps, cost {}", to_id, steps, item.cost);
            return reconstruct_path(&came_from, from_id, to_id);
        }

        steps += 1;
        if steps > step_limit {
            return Err(RouteError::StepLimitExceeded);
        }

        let Some(current) = g.get(item.at) else {
            continue;
        };

        for neighbor in g.neighbors(item.at) {
            let neighbor_id = neighbor.id.as_str();
            if settled.contains(neighbor_id) {
                continue;
            }

            // Check if this is the cheapest way to the neighbor
            let neighbor_cost = item.cost + distance(current.position, neighbor.position);
            if neighbor_cost
                >= known_costs
                    .get(neighbor_id)
                    .copied()
                    .unwrap_or(f32::INFINITY)
            {
                continue;
            }

            came_from.insert(neighbor_id, item.at);
            known_costs.insert(neighbor_id, neighbor_cost);
            queue.push(QueueItem {
                at: neighbor_id,
                cost: neighbor_cost,
            });
        }
    }

    log::debug!("{} unreachable from {} ({} waypoints settled)", to_id, from_id, steps);
    Err(RouteError::NoPathFound {
        from: from_id.to_string(),
        to: to_id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Category, Position, Waypoint, DEFAULT_STEP_LIMIT};

    macro_rules! assert_almost_eq {
        ($a:expr, $b:expr) => {
            assert!(
                (($a - $b).abs() < 1e-4),
                "assertion failed: {} ≈ {}",
                $a,
                $b
            )
        };
    }

    fn wp(id: &str, x: f32, z: f32, neighbors: &[&str]) -> Waypoint {
        Waypoint::new(
            id,
            Position::new(x, 0.0, z),
            0,
            Category::Hallway,
            neighbors.iter().copied(),
        )
    }

    fn simple_graph() -> Graph {
        //   f
        //   │ \
        //   d──e
        //   │  │
        //   b──c
        //    \ │
        //      a     g (one-way g -> a)
        Graph::from_waypoints([
            wp("a", 4.0, 0.0, &["b", "c"]),
            wp("b", 0.0, 2.0, &["a", "c", "d"]),
            wp("c", 4.0, 2.0, &["a", "b", "e"]),
            wp("d", 0.0, 6.0, &["b", "e", "f"]),
            wp("e", 4.0, 6.0, &["c", "d", "f"]),
            wp("f", 0.0, 9.0, &["d", "e"]),
            wp("g", 9.0, 0.0, &["a"]),
        ])
        .unwrap()
    }

    fn path_length(g: &Graph, path: &[&str]) -> f32 {
        path.windows(2)
            .map(|pair| g.edge_length(pair[0], pair[1]).unwrap())
            .sum()
    }

    /// Returns the length of the shortest path by enumerating all simple paths.
    fn brute_force_shortest(g: &Graph, from_id: &str, to_id: &str) -> Option<f32> {
        fn walk<'a>(g: &'a Graph, path: &mut Vec<&'a str>, to_id: &str, best: &mut Option<f32>) {
            let last = path[path.len() - 1];
            if last == to_id {
                let len = path_length(g, path);
                if best.map_or(true, |b| len < b) {
                    *best = Some(len);
                }
                return;
            }

            for n in g.neighbors(last) {
                if !path.contains(&n.id.as_str()) {
                    path.push(&n.id);
                    walk(g, path, to_id, best);
                    path.pop();
                }
            }
        }

        let mut best = None;
        let start = g.get(from_id)?.id.as_str();
        walk(g, &mut vec![start], to_id, &mut best);
        best
    }

    #[test]
    fn find_path_simple() {
        let g = simple_graph();
        assert_eq!(
            find_path(&g, "a", "f", DEFAULT_STEP_LIMIT),
            Ok(vec!["a", "c", "e", "f"]),
        );
        assert_eq!(
            find_path(&g, "f", "a", DEFAULT_STEP_LIMIT),
            Ok(vec!["f", "e", "c", "a"]),
        );
    }

    #[test]
    fn find_path_is_optimal() {
        let g = simple_graph();
        for from in g.iter() {
            for to in g.iter() {
                let expected = brute_force_shortest(&g, &from.id, &to.id);
                match find_path(&g, &from.id, &to.id, DEFAULT_STEP_LIMIT) {
                    Ok(path) => {
                        assert_eq!(path.first().copied(), Some(from.id.as_str()));
                        assert_eq!(path.last().copied(), Some(to.id.as_str()));
                        assert_almost_eq!(path_length(&g, &path), expected.unwrap());
                    }
                    Err(RouteError::NoPathFound { .. }) => assert!(expected.is_none()),
                    Err(e) => panic!("{} -> {}: {}", from.id, to.id, e),
                }
            }
        }
    }

    #[test]
    fn find_path_same_waypoint() {
        let g = simple_graph();
        assert_eq!(find_path(&g, "d", "d", DEFAULT_STEP_LIMIT), Ok(vec!["d"]));
        assert_eq!(find_path(&g, "d", "d", 0), Ok(vec!["d"]));
    }

    #[test]
    fn find_path_one_way() {
        let g = simple_graph();
        assert_eq!(
            find_path(&g, "g", "b", DEFAULT_STEP_LIMIT),
            Ok(vec!["g", "a", "b"]),
        );
        assert_eq!(
            find_path(&g, "b", "g", DEFAULT_STEP_LIMIT),
            Err(RouteError::NoPathFound {
                from: "b".to_string(),
                to: "g".to_string(),
            }),
        );
    }

    #[test]
    fn find_path_unknown_waypoint() {
        let g = simple_graph();
        assert_eq!(
            find_path(&g, "z", "a", DEFAULT_STEP_LIMIT),
            Err(RouteError::UnknownWaypoint("z".to_string())),
        );
        assert_eq!(
            find_path(&g, "a", "z", DEFAULT_STEP_LIMIT),
            Err(RouteError::UnknownWaypoint("z".to_string())),
        );
        assert_eq!(
            find_path(&g, "y", "z", DEFAULT_STEP_LIMIT),
            Err(RouteError::UnknownWaypoint("y".to_string())),
        );
    }

    #[test]
    fn find_path_ties_are_deterministic() {
        // a─b
        // │ │
        // c─d
        let g = Graph::from_waypoints([
            wp("a", 0.0, 1.0, &["c", "b"]),
            wp("b", 1.0, 1.0, &["a", "d"]),
            wp("c", 0.0, 0.0, &["a", "d"]),
            wp("d", 1.0, 0.0, &["c", "b"]),
        ])
        .unwrap();

        for _ in 0..10 {
            assert_eq!(
                find_path(&g, "a", "d", DEFAULT_STEP_LIMIT),
                Ok(vec!["a", "b", "d"]),
            );
        }
    }

    #[test]
    fn find_path_step_limit() {
        let g = simple_graph();
        assert_eq!(
            find_path(&g, "a", "f", 2),
            Err(RouteError::StepLimitExceeded),
        );
        assert!(find_path(&g, "a", "f", 6).is_ok());
    }
}
