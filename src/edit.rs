//! Positional edits shared by the deque and its mutable cursors.

use core::iter;

use crate::deque::{not_an_element, note_growth, Deque};
use crate::error::DequeError;
use crate::seam::{Position, Segment};

impl<T> Deque<T> {
    /// Inserts `value` before the element at `position` and returns the position of
    /// the inserted element. Inserting at `end()` appends.
    ///
    /// The segment owning `position` takes the element; inside the front segment the
    /// physical slot is one past `position`, because that segment runs backwards.
    ///
    /// # Panics
    ///
    /// Panics if `position` lies outside `[begin, end]`.
    #[track_caller]
    pub fn insert(&mut self, position: Position, value: T) -> Position {
        let layout = self.layout();
        let index = position.physical_index();
        match position.segment() {
            Segment::Front if index < layout.front => {
                let before = self.front.capacity();
                self.front.insert(index + 1, value);
                note_growth(Segment::Front, before, self.front.capacity());
                Position::new(Segment::Front, index + 1)
            }
            Segment::Back if index <= layout.back => {
                let before = self.back.capacity();
                self.back.insert(index, value);
                note_growth(Segment::Back, before, self.back.capacity());
                position
            }
            _ => out_of_range(layout.logical(position), layout.len()),
        }
    }

    /// Inserts `count` clones of `value` before `position`. Returns the position of
    /// the first inserted element, or `position` itself when `count` is 0.
    ///
    /// # Panics
    ///
    /// Panics if `position` lies outside `[begin, end]`.
    #[track_caller]
    pub fn insert_n(&mut self, position: Position, count: usize, value: T) -> Position
    where
        T: Clone,
    {
        self.insert_iter(position, iter::repeat(value).take(count))
    }

    /// Inserts every item of `values` before `position`, keeping their order.
    ///
    /// Same result as inserting one item at a time and stepping the insertion
    /// position forward past each inserted item. Returns the position of the first
    /// inserted element, or `position` itself when `values` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `position` lies outside `[begin, end]`.
    #[track_caller]
    pub fn insert_iter<I>(&mut self, position: Position, values: I) -> Position
    where
        I: IntoIterator<Item = T>,
    {
        let layout = self.layout();
        let origin = layout.logical(position);
        if !layout.spans(position) || origin < 0 {
            out_of_range(origin, layout.len());
        }
        let mut at = position;
        for value in values {
            at = self.insert(at, value).forward(1);
        }
        self.layout().resolve(origin)
    }

    /// Removes the element at `position`. Returns it together with the position of
    /// its successor (the end position when the last element was removed).
    ///
    /// # Panics
    ///
    /// Panics if `position` does not reference an element.
    #[track_caller]
    pub fn erase(&mut self, position: Position) -> (T, Position) {
        let layout = self.layout();
        if !layout.holds(position) {
            not_an_element(layout, position);
        }
        let index = position.physical_index();
        match position.segment() {
            Segment::Front => {
                let value = self.front.remove(index);
                (value, position.forward(1))
            }
            Segment::Back => (self.back.remove(index), position),
        }
    }

    /// Removes the elements in `[first, last)` and returns the position of the
    /// element that followed them. An empty range changes nothing.
    ///
    /// # Panics
    ///
    /// Panics if `first` lies outside `[begin, end]` or `last` outside `[first, end]`.
    #[track_caller]
    #[allow(clippy::cast_sign_loss)]
    pub fn erase_range(&mut self, first: Position, last: Position) -> Position {
        let layout = self.layout();
        let start = layout.logical(first);
        let stop = layout.logical(last);
        if !layout.spans(first) || start < 0 {
            out_of_range(start, layout.len());
        }
        if !layout.spans(last) || stop < start {
            out_of_range(stop, layout.len());
        }

        let mut remaining = (stop - start) as usize;
        let mut at = first;
        while remaining > 0 {
            at = self.erase(at).1;
            remaining -= 1;
        }
        at
    }

    /// Shortens the deque to `len` elements, dropping from the back. Same effect as
    /// repeated `pop_back`. No-op if the deque is already short enough.
    pub fn truncate(&mut self, len: usize) {
        let Some(excess) = self.len().checked_sub(len) else {
            return;
        };
        let from_back = excess.min(self.back.len());
        self.back.truncate(self.back.len() - from_back);
        // pop_back on an empty back segment removes front[0]
        self.front.drain(..excess - from_back);
    }

    /// Resizes to `len` elements: drops from the back when shrinking, appends clones
    /// of `value` when growing.
    pub fn resize(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        let current = self.len();
        if len < current {
            self.truncate(len);
        } else if len > current {
            self.extend(iter::repeat(value).take(len - current));
        }
    }
}

#[cold]
#[track_caller]
fn out_of_range(index: isize, length: usize) -> ! {
    panic!("{}", DequeError::CursorOutOfRange { index, length })
}
