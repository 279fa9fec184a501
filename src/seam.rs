//! Positions inside the two segments and the arithmetic that walks across the seam.
//!
//! A [`Position`] names a physical slot as `(segment, index)`. Index 0 of both
//! segments sits right at the seam: `front[0]` is the element just before it and
//! `back[0]` the element just after it. Stepping therefore never needs to know how
//! long either segment currently is; only the logical index, the sentinels and
//! dereferencing do, and those read the live lengths through [`Layout`].

use core::fmt;

/// One of the two backing segments of a [`Deque`](crate::Deque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Holds the logical prefix in reverse physical order.
    Front,
    /// Holds the logical suffix in forward physical order.
    Back,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Front => f.write_str("front"),
            Segment::Back => f.write_str("back"),
        }
    }
}

/// A detached location inside a deque: a segment and a physical index in it.
///
/// Positions carry no borrow, so they survive mutations of the deque. They only
/// stay meaningful until the next operation that shifts or reallocates the
/// segment they point into; using a stale position is not detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    segment: Segment,
    index: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self::new(Segment::Back, 0)
    }
}

impl Position {
    pub(crate) const fn new(segment: Segment, index: usize) -> Self {
        Self { segment, index }
    }

    /// The segment this position points into.
    #[must_use]
    pub fn segment(&self) -> Segment {
        self.segment
    }

    /// The physical index inside [`segment`](Self::segment).
    #[must_use]
    pub fn physical_index(&self) -> usize {
        self.index
    }

    /// The position `n` logical steps towards the end.
    ///
    /// Inside the front segment logical order runs towards physical index 0. A jump
    /// longer than the distance to the seam spends that distance, plus one step to
    /// cross, and continues from the start of the back segment.
    #[must_use]
    pub(crate) fn forward(self, n: usize) -> Self {
        match self.segment {
            Segment::Back => Self::new(Segment::Back, self.index + n),
            Segment::Front if n <= self.index => Self::new(Segment::Front, self.index - n),
            Segment::Front => Self::new(Segment::Back, n - self.index - 1),
        }
    }

    /// The position `n` logical steps towards the beginning.
    #[must_use]
    pub(crate) fn backward(self, n: usize) -> Self {
        match self.segment {
            Segment::Front => Self::new(Segment::Front, self.index + n),
            Segment::Back if n <= self.index => Self::new(Segment::Back, self.index - n),
            Segment::Back => Self::new(Segment::Front, n - self.index - 1),
        }
    }

    #[must_use]
    pub(crate) fn offset(self, n: isize) -> Self {
        if n >= 0 {
            self.forward(n.unsigned_abs())
        } else {
            self.backward(n.unsigned_abs())
        }
    }
}

/// Snapshot of the segment lengths, taken fresh for every operation that needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Layout {
    pub(crate) front: usize,
    pub(crate) back: usize,
}

impl Layout {
    pub(crate) fn len(self) -> usize {
        self.front + self.back
    }

    /// Logical index of `position`; -1 is the before-begin sentinel and `len()` the
    /// past-the-end sentinel.
    #[allow(clippy::cast_possible_wrap)]
    pub(crate) fn logical(self, position: Position) -> isize {
        match position.segment {
            Segment::Front => self.front as isize - 1 - position.index as isize,
            Segment::Back => (self.front + position.index) as isize,
        }
    }

    /// Inverse of [`logical`](Self::logical).
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub(crate) fn resolve(self, logical: isize) -> Position {
        let front = self.front as isize;
        if logical < front {
            Position::new(Segment::Front, (front - 1 - logical) as usize)
        } else {
            Position::new(Segment::Back, (logical - front) as usize)
        }
    }

    /// Whether `position` references a stored element (not a sentinel).
    pub(crate) fn holds(self, position: Position) -> bool {
        match position.segment {
            Segment::Front => position.index < self.front,
            Segment::Back => position.index < self.back,
        }
    }

    /// Whether `position` lies between the two sentinels, inclusive.
    pub(crate) fn spans(self, position: Position) -> bool {
        match position.segment {
            Segment::Front => position.index <= self.front,
            Segment::Back => position.index <= self.back,
        }
    }

    pub(crate) fn first(self) -> Position {
        self.resolve(0)
    }

    pub(crate) fn end(self) -> Position {
        Position::new(Segment::Back, self.back)
    }

    #[allow(clippy::cast_possible_wrap)]
    pub(crate) fn last(self) -> Position {
        self.resolve(self.len() as isize - 1)
    }

    pub(crate) fn before_first(self) -> Position {
        Position::new(Segment::Front, self.front)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: Layout = Layout { front: 3, back: 2 };

    #[test]
    fn test_logical_index_mapping() {
        // front = [f2, f1, f0] holds logical 2, 1, 0
        assert_eq!(LAYOUT.logical(Position::new(Segment::Front, 2)), 0);
        assert_eq!(LAYOUT.logical(Position::new(Segment::Front, 0)), 2);
        assert_eq!(LAYOUT.logical(Position::new(Segment::Back, 0)), 3);
        assert_eq!(LAYOUT.logical(Position::new(Segment::Back, 1)), 4);
        assert_eq!(LAYOUT.logical(LAYOUT.end()), 5);
        assert_eq!(LAYOUT.logical(LAYOUT.before_first()), -1);
    }

    #[test]
    fn test_resolve_inverts_logical() {
        for logical in -3..8 {
            assert_eq!(LAYOUT.logical(LAYOUT.resolve(logical)), logical);
        }
    }

    #[test]
    fn test_forward_crosses_seam() {
        let first = LAYOUT.first();
        assert_eq!(first, Position::new(Segment::Front, 2));
        assert_eq!(first.forward(2), Position::new(Segment::Front, 0));
        assert_eq!(first.forward(3), Position::new(Segment::Back, 0));
        assert_eq!(first.forward(5), LAYOUT.end());
    }

    #[test]
    fn test_backward_crosses_seam() {
        let end = LAYOUT.end();
        assert_eq!(end.backward(2), Position::new(Segment::Back, 0));
        assert_eq!(end.backward(3), Position::new(Segment::Front, 0));
        assert_eq!(end.backward(5), LAYOUT.first());
        assert_eq!(end.backward(6), LAYOUT.before_first());
    }

    #[test]
    fn test_steps_agree_with_logical_arithmetic() {
        for start in -1..=5 {
            let position = LAYOUT.resolve(start);
            for n in 0..4isize {
                assert_eq!(LAYOUT.logical(position.offset(n)), start + n);
                assert_eq!(LAYOUT.logical(position.offset(-n)), start - n);
            }
        }
    }

    #[test]
    fn test_empty_segments_share_the_seam() {
        let only_back = Layout { front: 0, back: 2 };
        assert_eq!(only_back.first(), Position::new(Segment::Back, 0));
        assert_eq!(only_back.first().backward(1), only_back.before_first());

        let only_front = Layout { front: 2, back: 0 };
        assert_eq!(only_front.last(), Position::new(Segment::Front, 0));
        assert_eq!(only_front.last().forward(1), only_front.end());

        let empty = Layout { front: 0, back: 0 };
        assert_eq!(empty.first(), empty.end());
        assert_eq!(empty.last(), empty.before_first());
    }

    #[test]
    fn test_holds_and_spans() {
        assert!(LAYOUT.holds(LAYOUT.first()));
        assert!(!LAYOUT.holds(LAYOUT.end()));
        assert!(!LAYOUT.holds(LAYOUT.before_first()));
        assert!(LAYOUT.spans(LAYOUT.end()));
        assert!(LAYOUT.spans(LAYOUT.before_first()));
        assert!(!LAYOUT.spans(LAYOUT.end().forward(1)));
    }
}
