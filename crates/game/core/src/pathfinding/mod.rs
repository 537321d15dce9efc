//! Read-only queries over a [`GridMap`]: shortest paths, reachable areas and
//! line of sight.
//!
//! A [`Pathfinder`] borrows the map for the duration of a query and keeps no
//! state between calls. Identical maps and arguments always produce identical
//! results, including which of several equal-cost paths is returned.
mod astar;
mod frontier;
mod neighbors;
mod reachable;
mod sight;

use std::collections::BTreeMap;

use crate::config::MovementRules;
use crate::geometry::{self, LinePoints};
use crate::state::{GridMap, Position};

pub use neighbors::Direction;

/// Pathfinding queries against one map under fixed movement rules.
#[derive(Clone, Copy, Debug)]
pub struct Pathfinder<'a> {
    map: &'a GridMap,
    rules: MovementRules,
}

impl<'a> Pathfinder<'a> {
    pub fn new(map: &'a GridMap, rules: MovementRules) -> Self {
        Self { map, rules }
    }

    pub fn map(&self) -> &'a GridMap {
        self.map
    }

    pub fn rules(&self) -> MovementRules {
        self.rules
    }

    pub fn manhattan_distance(&self, a: Position, b: Position) -> u32 {
        geometry::manhattan_distance(a, b)
    }

    pub fn chebyshev_distance(&self, a: Position, b: Position) -> u32 {
        geometry::chebyshev_distance(a, b)
    }

    pub fn euclidean_distance(&self, a: Position, b: Position) -> f64 {
        geometry::euclidean_distance(a, b)
    }

    /// Cells on the segment `start..=end`; see [`geometry::line_points`].
    pub fn line_points(&self, start: Position, end: Position) -> LinePoints {
        geometry::line_points(start, end)
    }

    /// Movement points spent walking `path`, the first position excluded.
    ///
    /// `None` when a step leaves the map or enters impassable terrain.
    /// Occupancy and adjacency are not checked.
    pub fn path_cost(&self, path: &[Position]) -> Option<u32> {
        path.iter().skip(1).try_fold(0u32, |total, position| {
            let step = self.map.get(*position)?.terrain().entry_cost()?;
            Some(total.saturating_add(step))
        })
    }
}

/// Outcome of [`Pathfinder::find_path`].
///
/// An empty result means no path exists; otherwise the positions run from the
/// start to the goal inclusive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    positions: Vec<Position>,
    cost: u32,
}

impl PathResult {
    pub(crate) fn new(positions: Vec<Position>, cost: u32) -> Self {
        Self { positions, cost }
    }

    pub fn not_found() -> Self {
        Self::default()
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn into_positions(self) -> Vec<Position> {
        self.positions
    }

    /// Total movement cost; 0 for an empty or single-position path.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    pub fn is_found(&self) -> bool {
        !self.positions.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Number of moves, one less than the number of positions.
    pub fn steps(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Position> {
        self.positions.first().copied()
    }

    pub fn goal(&self) -> Option<Position> {
        self.positions.last().copied()
    }
}

/// Outcome of [`Pathfinder::find_reachable`]: every position the mover can
/// end its move on, with the cheapest cost to get there.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReachableSet {
    origin: Position,
    budget: u32,
    costs: BTreeMap<Position, u32>,
}

impl ReachableSet {
    pub(crate) fn new(origin: Position, budget: u32, costs: BTreeMap<Position, u32>) -> Self {
        Self {
            origin,
            budget,
            costs,
        }
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn budget(&self) -> u32 {
        self.budget
    }

    pub fn contains(&self, position: Position) -> bool {
        self.costs.contains_key(&position)
    }

    pub fn cost_to(&self, position: Position) -> Option<u32> {
        self.costs.get(&position).copied()
    }

    /// Always at least 1: the origin is reachable at cost 0.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Positions in ascending `(x, y)` order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.costs.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, u32)> + '_ {
        self.costs.iter().map(|(position, cost)| (*position, *cost))
    }

    pub fn costs(&self) -> &BTreeMap<Position, u32> {
        &self.costs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::TerrainKind;
    use crate::state::{MapDimensions, MapId};

    #[test]
    fn path_cost_sums_entry_costs_after_start() {
        let map = GridMap::from_glyph_rows(MapId(1), "cost", &["~T^%", "...."]).unwrap();
        let pathfinder = Pathfinder::new(&map, MovementRules::DEFAULT);

        let walk = [Position::new(0, 1), Position::new(1, 0), Position::new(2, 0), Position::new(3, 0)];
        assert_eq!(pathfinder.path_cost(&walk), Some(2 + 3 + 3));
        assert_eq!(pathfinder.path_cost(&walk[..1]), Some(0));
        assert_eq!(pathfinder.path_cost(&[]), Some(0));

        let into_water = [Position::new(0, 1), Position::new(0, 0)];
        assert_eq!(pathfinder.path_cost(&into_water), None);

        let off_map = [Position::new(0, 1), Position::new(0, 2)];
        assert_eq!(pathfinder.path_cost(&off_map), None);
    }

    #[test]
    fn distance_helpers_delegate_to_geometry() {
        let map = GridMap::new(MapId(1), "d", MapDimensions::new(2, 2), TerrainKind::Plain).unwrap();
        let pathfinder = Pathfinder::new(&map, MovementRules::DEFAULT);
        let (a, b) = (Position::new(0, 0), Position::new(3, 4));

        assert_eq!(pathfinder.manhattan_distance(a, b), 7);
        assert_eq!(pathfinder.chebyshev_distance(a, b), 4);
        assert!((pathfinder.euclidean_distance(a, b) - 5.0).abs() < f64::EPSILON);
        assert_eq!(pathfinder.line_points(a, b).len(), 5);
    }

    #[test]
    fn empty_path_result_reports_not_found() {
        let result = PathResult::not_found();

        assert!(!result.is_found());
        assert_eq!(result.steps(), 0);
        assert_eq!(result.start(), None);
    }
}
