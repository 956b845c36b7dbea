// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cyclic slide cursor.
//!
//! [`Cursor`] holds the current slide index together with the (non-zero)
//! slide count, so every index it hands out is valid for the slide
//! collection it was built for.

use core::num::NonZeroUsize;

use crate::error::NavigationError;

/// Direction of a single navigation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Towards the next slide (`+1`). Used by the auto-advance timer.
    #[default]
    Forward,
    /// Towards the previous slide (`-1`).
    Backward,
}

impl Direction {
    /// Returns the signed offset of this direction.
    #[must_use]
    pub const fn offset(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Current position within a fixed, non-empty slide collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cursor {
    index: usize,
    len: NonZeroUsize,
}

impl Cursor {
    /// Creates a cursor at index 0 over `len` slides.
    #[must_use]
    pub const fn new(len: NonZeroUsize) -> Self {
        Self { index: 0, len }
    }

    /// Returns the current index, always in `0..len`.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the number of slides.
    #[must_use]
    pub const fn len(&self) -> NonZeroUsize {
        self.len
    }

    /// Returns the index one step away from the current one, wrapping at
    /// both ends.
    #[must_use]
    pub const fn peek(&self, direction: Direction) -> usize {
        let len = self.len.get();
        // `index + len - 1` keeps the backward case non-negative before the
        // modulo; `index < len`, so neither sum can overflow for sane lengths.
        match direction {
            Direction::Forward => (self.index + 1) % len,
            Direction::Backward => (self.index + len - 1) % len,
        }
    }

    /// Moves one step in `direction` and returns the new index.
    pub fn step(&mut self, direction: Direction) -> usize {
        self.index = self.peek(direction);
        self.index
    }

    /// Jumps directly to `index`.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::IndexOutOfRange`] if `index >= len`; the
    /// cursor is left unchanged.
    pub fn select(&mut self, index: usize) -> Result<usize, NavigationError> {
        if index >= self.len.get() {
            return Err(NavigationError::IndexOutOfRange {
                index,
                len: self.len.get(),
            });
        }
        self.index = index;
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(len: usize) -> Cursor {
        Cursor::new(NonZeroUsize::new(len).unwrap())
    }

    #[test]
    fn wraps_backward_from_first() {
        let mut c = cursor(3);
        assert_eq!(c.step(Direction::Backward), 2);
    }

    #[test]
    fn wraps_forward_from_last() {
        let mut c = cursor(3);
        c.select(2).unwrap();
        assert_eq!(c.step(Direction::Forward), 0);
    }

    #[test]
    fn single_slide_stays_put() {
        let mut c = cursor(1);
        assert_eq!(c.step(Direction::Forward), 0);
        assert_eq!(c.step(Direction::Backward), 0);
    }

    #[test]
    fn select_out_of_range_leaves_cursor() {
        let mut c = cursor(4);
        c.select(1).unwrap();
        assert_eq!(
            c.select(4),
            Err(NavigationError::IndexOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn offsets() {
        assert_eq!(Direction::Forward.offset(), 1);
        assert_eq!(Direction::Backward.offset(), -1);
        assert_eq!(Direction::default(), Direction::Forward);
    }
}
