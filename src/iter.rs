use alloc::vec;
use core::fmt;
use core::iter::{Chain, FusedIterator, Rev};
use core::slice;

use crate::deque::Deque;
use crate::seam::Position;

/// Iterator over the elements of a `Deque`, driven by cursor positions
///
/// This iterator implements `Clone`.
pub struct Iter<'a, T> {
    deque: &'a Deque<T>,
    head: Position,
    tail: Position,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    /// Iterates `[head, tail)`.
    #[track_caller]
    #[allow(clippy::cast_sign_loss)]
    pub(crate) fn new(deque: &'a Deque<T>, head: Position, tail: Position) -> Self {
        let layout = deque.layout();
        let distance = layout.logical(tail) - layout.logical(head);
        assert!(distance >= 0, "iterator range ends before it starts");
        Self {
            deque,
            head,
            tail,
            remaining: distance as usize,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            deque: self.deque,
            head: self.head,
            tail: self.tail,
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.deque.element(self.head);
        self.head = self.head.forward(1);
        self.remaining -= 1;
        Some(item)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.remaining {
            self.head = self.tail;
            self.remaining = 0;
            return None;
        }
        self.head = self.head.forward(n);
        self.remaining -= n;
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.tail = self.tail.backward(1);
        self.remaining -= 1;
        Some(self.deque.element(self.tail))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator over the elements of a `Deque`
///
/// Walks the front segment backwards, then the back segment forwards.
pub struct IterMut<'a, T> {
    inner: Chain<Rev<slice::IterMut<'a, T>>, slice::IterMut<'a, T>>,
}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").finish_non_exhaustive()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over the elements of a `Deque`
pub struct IntoIter<T> {
    inner: Chain<Rev<vec::IntoIter<T>>, vec::IntoIter<T>>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").finish_non_exhaustive()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Deque<T> {
    /// Returns an iterator over the elements, front to back.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        let layout = self.layout();
        Iter::new(self, layout.first(), layout.end())
    }

    /// Returns a mutable iterator over the elements, front to back.
    #[must_use]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.front.iter_mut().rev().chain(self.back.iter_mut()),
        }
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Deque<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.front.into_iter().rev().chain(self.back),
        }
    }
}
