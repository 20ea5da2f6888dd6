//! Inclusive integer span along one axis of the field.

use std::fmt::Display;

/// Closed range `[lo, hi]` of grid cells along a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    lo: i32,
    hi: i32,
}

impl Span {
    /// Creates span `[lo, hi]`.
    ///
    /// # Panics
    ///
    /// Panics if `lo > hi`.
    pub const fn new(lo: i32, hi: i32) -> Self {
        assert!(lo <= hi, "Span lo must be <= hi");
        Self { lo, hi }
    }

    /// Creates span `[lo, hi]`, or `None` if the bounds are inverted.
    pub const fn try_new(lo: i32, hi: i32) -> Option<Self> {
        if lo <= hi {
            Some(Self { lo, hi })
        } else {
            None
        }
    }

    /// Creates the span covering `a` and `b` in either order.
    pub const fn ordered(a: i32, b: i32) -> Self {
        if a <= b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    pub const fn lo(&self) -> i32 {
        self.lo
    }

    pub const fn hi(&self) -> i32 {
        self.hi
    }

    /// Distance between the endpoints (`0` for a single cell).
    pub const fn extent(&self) -> i32 {
        self.hi - self.lo
    }

    /// Returns true if `value` ∈ `[lo, hi]`.
    pub const fn contains(&self, value: i32) -> bool {
        self.lo <= value && value <= self.hi
    }

    /// Checks if this span shares at least one cell with another span.
    pub const fn overlaps(&self, other: &Span) -> bool {
        self.lo <= other.hi && other.lo <= self.hi
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_creation() {
        let span = Span::new(2, 9);
        assert_eq!(span.lo(), 2);
        assert_eq!(span.hi(), 9);
        assert_eq!(span.extent(), 7);
    }

    #[test]
    fn test_try_new_rejects_inverted() {
        assert!(Span::try_new(5, 4).is_none());
        assert_eq!(Span::try_new(4, 4), Some(Span::new(4, 4)));
    }

    #[test]
    fn test_ordered_swaps_endpoints() {
        assert_eq!(Span::ordered(9, 2), Span::new(2, 9));
        assert_eq!(Span::ordered(2, 9), Span::new(2, 9));
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(0, 10);
        assert!(span.contains(0));
        assert!(span.contains(10));
        assert!(!span.contains(11));
        assert!(!span.contains(-1));
    }

    #[test]
    fn test_span_overlaps() {
        let a = Span::new(0, 10);
        let b = Span::new(10, 20);
        let c = Span::new(11, 20);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    #[should_panic(expected = "Span lo must be <= hi")]
    fn test_new_panics_on_inverted() {
        let _ = Span::new(3, 1);
    }
}
