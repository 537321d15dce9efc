use crate::env::TerrainCatalog;
use crate::state::{EntityId, GridMap, Position};

use super::frontier::Frontier;
use super::neighbors::neighbors;
use super::{PathResult, Pathfinder};

impl Pathfinder<'_> {
    /// Cheapest path from `start` to `goal`.
    ///
    /// The mover is whoever occupies `start`; cells held by anyone else are
    /// closed unless `ignore_occupation` is set. The start cell itself is never
    /// checked. Out-of-bounds endpoints and unreachable goals both yield an
    /// empty result.
    pub fn find_path(&self, start: Position, goal: Position, ignore_occupation: bool) -> PathResult {
        let map = self.map;
        let (Some(start_index), Some(goal_index)) = (map.index(start), map.index(goal)) else {
            tracing::warn!(
                "path request {} -> {} outside {}x{} map {}",
                start,
                goal,
                map.width(),
                map.height(),
                map.id()
            );
            return PathResult::not_found();
        };

        if start == goal {
            return PathResult::new(vec![start], 0);
        }

        let mover = map.get(start).and_then(|cell| cell.occupant());
        let step_metric = self.rules.step_metric();
        let min_cost = TerrainCatalog::global().min_entry_cost();
        let heuristic =
            |position: Position| min_cost.saturating_mul(step_metric.distance(position, goal));

        tracing::debug!(
            "searching path {} -> {} on {} (mover: {:?}, ignore_occupation: {})",
            start,
            goal,
            map.id(),
            mover,
            ignore_occupation
        );

        let area = map.dimensions().area();
        let mut best = vec![u32::MAX; area];
        let mut came_from: Vec<Option<usize>> = vec![None; area];
        let mut closed = vec![false; area];
        let mut frontier = Frontier::default();

        best[start_index] = 0;
        frontier.push(start_index, 0, heuristic(start));

        let mut expanded = 0usize;
        while let Some(node) = frontier.pop() {
            if closed[node.index] || node.cost > best[node.index] {
                continue;
            }
            if node.index == goal_index {
                tracing::trace!(
                    "path found after {} expansions ({} discovered)",
                    expanded,
                    frontier.discovered()
                );
                return PathResult::new(rebuild(map, &came_from, goal_index), node.cost);
            }
            closed[node.index] = true;
            expanded += 1;

            let current = map.position_of(node.index);
            for next in neighbors(map, self.rules, current) {
                let Some(step) = self.step_cost(next, mover, ignore_occupation) else {
                    continue;
                };
                let Some(index) = map.index(next) else {
                    continue;
                };
                if closed[index] {
                    continue;
                }

                let cost = node.cost.saturating_add(step);
                if cost < best[index] {
                    best[index] = cost;
                    came_from[index] = Some(node.index);
                    frontier.push(index, cost, cost.saturating_add(heuristic(next)));
                }
            }
        }

        tracing::debug!(
            "no path {} -> {} on {} after {} expansions",
            start,
            goal,
            map.id(),
            expanded
        );
        PathResult::not_found()
    }

    /// Cost of stepping onto `next`, or `None` when the step is closed.
    fn step_cost(&self, next: Position, mover: Option<EntityId>, ignore_occupation: bool) -> Option<u32> {
        let cell = self.map.get(next)?;
        let open = if ignore_occupation {
            cell.is_passable(true)
        } else {
            cell.can_be_entered_by(mover)
        };
        if !open {
            return None;
        }
        cell.terrain().entry_cost()
    }
}

fn rebuild(map: &GridMap, came_from: &[Option<usize>], goal: usize) -> Vec<Position> {
    let mut positions = vec![map.position_of(goal)];
    let mut current = goal;
    while let Some(previous) = came_from[current] {
        positions.push(map.position_of(previous));
        current = previous;
    }
    positions.reverse();
    positions
}
