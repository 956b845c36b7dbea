// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for cyclic cursor arithmetic.

use core::num::NonZeroUsize;

use carousel_core::cursor::{Cursor, Direction};
use proptest::prelude::*;

fn cursor_at(len: usize, start: usize) -> Cursor {
    let mut c = Cursor::new(NonZeroUsize::new(len).unwrap());
    c.select(start % len).unwrap();
    c
}

fn direction(forward: bool) -> Direction {
    if forward {
        Direction::Forward
    } else {
        Direction::Backward
    }
}

proptest! {
    #[test]
    fn index_stays_in_range(
        len in 1_usize..64,
        start in 0_usize..64,
        steps in proptest::collection::vec(any::<bool>(), 0..200),
    ) {
        let mut c = cursor_at(len, start);
        for forward in steps {
            let i = c.step(direction(forward));
            prop_assert!(i < len, "index {} escaped 0..{}", i, len);
        }
    }

    #[test]
    fn step_matches_signed_modulo(
        len in 1_usize..64,
        start in 0_usize..64,
        forward in any::<bool>(),
    ) {
        let mut c = cursor_at(len, start);
        let dir = direction(forward);
        let signed_len = isize::try_from(len).unwrap();
        let signed_start = isize::try_from(start % len).unwrap();
        let expected = (signed_start + dir.offset()).rem_euclid(signed_len);
        prop_assert_eq!(c.step(dir), usize::try_from(expected).unwrap());
    }

    #[test]
    fn full_lap_returns_home(len in 1_usize..32, start in 0_usize..32) {
        let mut c = cursor_at(len, start);
        let home = c.index();
        let mut visited: Vec<usize> = (0..len).map(|_| c.step(Direction::Forward)).collect();
        prop_assert_eq!(c.index(), home);
        visited.sort_unstable();
        prop_assert_eq!(visited, (0..len).collect::<Vec<_>>());
    }

    #[test]
    fn backward_undoes_forward(len in 1_usize..64, start in 0_usize..64) {
        let mut c = cursor_at(len, start);
        let before = c.index();
        c.step(Direction::Forward);
        c.step(Direction::Backward);
        prop_assert_eq!(c.index(), before);
    }
}
