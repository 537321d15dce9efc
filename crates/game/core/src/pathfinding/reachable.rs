use std::collections::BTreeMap;

use crate::state::{EntityId, GridError, Position};

use super::frontier::Frontier;
use super::neighbors::neighbors;
use super::{Pathfinder, ReachableSet};

impl Pathfinder<'_> {
    /// Every position `mover` can reach from `start` spending at most `budget`
    /// movement points, with the minimum cost of each.
    ///
    /// Cells held by other entities are always closed. The start is included at
    /// cost 0 whatever its terrain.
    pub fn find_reachable(
        &self,
        mover: EntityId,
        start: Position,
        budget: u32,
    ) -> Result<ReachableSet, GridError> {
        let map = self.map;
        let start_cell = map.cell(start).inspect_err(|_| {
            tracing::warn!("reachable query from {} outside map {}", start, map.id());
        })?;
        match start_cell.occupant() {
            Some(occupant) if occupant != mover => {
                return Err(GridError::MoverMismatch {
                    mover,
                    position: start,
                    occupant: Some(occupant),
                });
            }
            _ => {}
        }

        let area = map.dimensions().area();
        let mut best = vec![u32::MAX; area];
        let mut frontier = Frontier::default();

        if let Some(index) = map.index(start) {
            best[index] = 0;
            frontier.push(index, 0, 0);
        }

        while let Some(node) = frontier.pop() {
            if node.cost != best[node.index] {
                continue;
            }

            let current = map.position_of(node.index);
            for next in neighbors(map, self.rules, current) {
                let Some(cell) = map.get(next) else {
                    continue;
                };
                if !cell.can_be_entered_by(Some(mover)) {
                    continue;
                }
                let Some(step) = cell.terrain().entry_cost() else {
                    continue;
                };
                let cost = node.cost.saturating_add(step);
                if cost > budget {
                    continue;
                }
                let Some(index) = map.index(next) else {
                    continue;
                };
                if cost < best[index] {
                    best[index] = cost;
                    frontier.push(index, cost, cost);
                }
            }
        }

        let costs: BTreeMap<Position, u32> = best
            .iter()
            .enumerate()
            .filter(|(_, cost)| **cost != u32::MAX)
            .map(|(index, cost)| (map.position_of(index), *cost))
            .collect();

        tracing::debug!(
            "{} can reach {} positions from {} with budget {}",
            mover,
            costs.len(),
            start,
            budget
        );
        Ok(ReachableSet::new(start, budget, costs))
    }
}
