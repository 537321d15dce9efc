//! Distance metrics and line rasterization over grid coordinates.
//!
//! Everything here is pure arithmetic on [`Position`] values; nothing reads a
//! map. Ability ranges and AI scoring use the distance functions directly, the
//! pathfinder builds line-of-sight on top of [`line_points`].

use std::iter::FusedIterator;

use crate::state::Position;

/// Metric used to decide whether a position lies within a range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DistanceMetric {
    /// Square ranges; matches 8-directional movement.
    #[default]
    Chebyshev,
    /// Diamond ranges; matches 4-directional movement.
    Manhattan,
}

impl DistanceMetric {
    pub fn distance(self, a: Position, b: Position) -> u32 {
        match self {
            DistanceMetric::Chebyshev => a.chebyshev_distance(b),
            DistanceMetric::Manhattan => a.manhattan_distance(b),
        }
    }
}

pub fn manhattan_distance(a: Position, b: Position) -> u32 {
    a.manhattan_distance(b)
}

pub fn chebyshev_distance(a: Position, b: Position) -> u32 {
    a.chebyshev_distance(b)
}

pub fn euclidean_distance(a: Position, b: Position) -> f64 {
    a.euclidean_distance(b)
}

/// Rasterizes the segment `start..=end` into the cells it passes through.
///
/// The sequence starts with `start`, ends with `end`, and consecutive points
/// are 8-neighbours. Ties on the minor axis always round towards positive
/// coordinates, so `line_points(b, a)` is exactly `line_points(a, b)` reversed.
pub fn line_points(start: Position, end: Position) -> LinePoints {
    let dx = i128::from(end.x) - i128::from(start.x);
    let dy = i128::from(end.y) - i128::from(start.y);
    let steps = dx.abs().max(dy.abs());

    LinePoints {
        origin: start,
        dx,
        dy,
        steps,
        front: 0,
        back: steps + 1,
    }
}

/// Lazy midpoint (Bresenham) rasterization produced by [`line_points`].
#[derive(Clone, Debug)]
pub struct LinePoints {
    origin: Position,
    dx: i128,
    dy: i128,
    steps: i128,
    front: i128,
    back: i128,
}

impl LinePoints {
    fn point(&self, step: i128) -> Position {
        if self.steps == 0 {
            return self.origin;
        }
        let x = round_along(self.origin.x, self.dx, step, self.steps);
        let y = round_along(self.origin.y, self.dy, step, self.steps);
        Position::new(x, y)
    }
}

/// `origin + step * delta / steps`, rounded half up.
///
/// Stays within `origin..=origin + delta`, which fits `i32` because both
/// endpoints do.
fn round_along(origin: i32, delta: i128, step: i128, steps: i128) -> i32 {
    let numerator = i128::from(origin) * steps + step * delta;
    let value = (2 * numerator + steps).div_euclid(2 * steps);
    value as i32
}

impl Iterator for LinePoints {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let point = self.point(self.front);
        self.front += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.back - self.front).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for LinePoints {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.point(self.back))
    }
}

impl ExactSizeIterator for LinePoints {}

impl FusedIterator for LinePoints {}
