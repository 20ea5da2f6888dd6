//! Wall-bounding: the longest free wall through the hunter along one axis.
//!
//! A new wall always passes through the hunter. Along its own axis it
//! extends until the cell just before the nearest perpendicular wall on
//! each side, or until the arena edge when there is none.

use super::span::Span;
use super::types::{Arena, Point};
use super::wall::WallSegment;

/// Which kind of existing wall bounds the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundingMode {
    /// Bounded by vertical walls; yields a horizontal wall on the hunter's row.
    VerticalBlocking,
    /// Bounded by horizontal walls; yields a vertical wall on the hunter's column.
    HorizontalBlocking,
}

/// Computes the free span along one axis around `center`.
///
/// `obstacles` are the coordinates of perpendicular walls on that axis.
/// Comparisons are strict: an obstacle at exactly `center` bounds neither
/// side. Returns `None` when the bounds cross.
pub fn free_span(center: i32, obstacles: impl IntoIterator<Item = i32>, last: i32) -> Option<Span> {
    let mut lo = 0;
    let mut hi = last;
    for c in obstacles {
        if c > center {
            hi = hi.min(c - 1);
        } else if c < center {
            lo = lo.max(c + 1);
        }
    }
    Span::try_new(lo, hi)
}

/// Computes the maximal wall through `hunter` for the given mode.
///
/// Returns `None` when no valid wall exists: either the bounds cross
/// (the hunter is wedged between adjacent walls) or the free span is a
/// single cell, which would be a zero-length wall.
pub fn bound_wall(
    hunter: Point,
    mode: BoundingMode,
    walls: &[WallSegment],
    arena: &Arena,
) -> Option<WallSegment> {
    let span = match mode {
        BoundingMode::VerticalBlocking => {
            let xs = walls.iter().filter_map(|w| match *w {
                WallSegment::Vertical { x, .. } => Some(x),
                WallSegment::Horizontal { .. } => None,
            });
            free_span(hunter.x, xs, arena.last_x())
        }
        BoundingMode::HorizontalBlocking => {
            let ys = walls.iter().filter_map(|w| match *w {
                WallSegment::Horizontal { y, .. } => Some(y),
                WallSegment::Vertical { .. } => None,
            });
            free_span(hunter.y, ys, arena.last_y())
        }
    };

    let span = match span {
        Some(span) if span.extent() > 0 => span,
        Some(span) => {
            log::debug!("bounding {:?} at {} collapsed to single cell {}", mode, hunter, span);
            return None;
        }
        None => {
            log::debug!("bounding {:?} at {} has crossed bounds", mode, hunter);
            return None;
        }
    };

    Some(match mode {
        BoundingMode::VerticalBlocking => WallSegment::horizontal(hunter.y, span),
        BoundingMode::HorizontalBlocking => WallSegment::vertical(hunter.x, span),
    })
}
