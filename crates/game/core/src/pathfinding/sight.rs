use crate::geometry::line_points;
use crate::state::{GridError, Position};

use super::Pathfinder;

impl Pathfinder<'_> {
    /// Whether nothing between `start` and `end` blocks sight.
    ///
    /// Only the cells strictly between the endpoints are tested, so a unit
    /// standing in a forest can still see and be seen. The answer is the same
    /// in both directions.
    pub fn has_line_of_sight(&self, start: Position, end: Position) -> Result<bool, GridError> {
        let map = self.map;
        for endpoint in [start, end] {
            map.check_bounds(endpoint).inspect_err(|_| {
                tracing::warn!("line of sight endpoint {} outside map {}", endpoint, map.id());
            })?;
        }

        let mut line = line_points(start, end);
        line.next();
        line.next_back();

        let blocker = line.find(|position| map.get(*position).is_some_and(|cell| cell.blocks_sight()));
        if let Some(position) = blocker {
            tracing::trace!("sight {} -> {} blocked at {}", start, end, position);
        }
        Ok(blocker.is_none())
    }
}
