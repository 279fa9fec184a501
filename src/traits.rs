//! Standard trait implementations: copying, comparison, hashing and collection.
//!
//! Comparisons follow the logical sequence only; two deques with different
//! segment splits but the same elements are equal.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::deque::{note_growth, Deque};
use crate::seam::Segment;

impl<T: Clone> Clone for Deque<T> {
    /// Deep copy built by walking the source front to back. The copy keeps every
    /// element in its back segment, whatever the source's split was.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.back.extend(source.iter().cloned());
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: PartialOrd> PartialOrd for Deque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for Deque<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for Deque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for value in self {
            value.hash(state);
        }
    }
}

fn equals_slice<T: PartialEq<U>, U>(deque: &Deque<T>, other: &[U]) -> bool {
    deque.len() == other.len() && deque.iter().zip(other).all(|(a, b)| a == b)
}

impl<T: PartialEq<U>, U> PartialEq<[U]> for Deque<T> {
    fn eq(&self, other: &[U]) -> bool {
        equals_slice(self, other)
    }
}

impl<T: PartialEq<U>, U> PartialEq<&[U]> for Deque<T> {
    fn eq(&self, other: &&[U]) -> bool {
        equals_slice(self, other)
    }
}

impl<T: PartialEq<U>, U> PartialEq<Vec<U>> for Deque<T> {
    fn eq(&self, other: &Vec<U>) -> bool {
        equals_slice(self, other)
    }
}

impl<T: PartialEq<U>, U, const N: usize> PartialEq<[U; N]> for Deque<T> {
    fn eq(&self, other: &[U; N]) -> bool {
        equals_slice(self, other)
    }
}

impl<T> Extend<T> for Deque<T> {
    /// Same result as calling `push_back` for every item.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        if self.back.is_empty() {
            // push_back onto an empty back segment lands in front[0], every time
            let before = self.front.capacity();
            let mut front: Vec<T> = iter.into_iter().collect();
            front.reverse();
            front.append(&mut self.front);
            self.front = front;
            note_growth(Segment::Front, before, self.front.capacity());
        } else {
            let before = self.back.capacity();
            self.back.extend(iter);
            note_growth(Segment::Back, before, self.back.capacity());
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Deque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> From<Vec<T>> for Deque<T> {
    /// Takes the vector over as the back segment without copying.
    fn from(back: Vec<T>) -> Self {
        Self {
            front: Vec::new(),
            back,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Deque<T> {
    fn from(values: [T; N]) -> Self {
        Self::from(Vec::from(values))
    }
}

impl<T> From<Deque<T>> for Vec<T> {
    fn from(deque: Deque<T>) -> Self {
        deque.into_iter().collect()
    }
}
