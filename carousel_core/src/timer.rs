// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Repeating-timer capability and a virtual implementation.
//!
//! [`TimerHost`] is the controller's only window onto time: it reads the
//! clock and arms or clears repeating intervals. Expiries travel the other
//! way, from the host into
//! [`Slider::on_timer`](crate::slider::Slider::on_timer), tagged with the
//! [`TimerId`] the host handed out.
//!
//! [`VirtualTimers`] keeps a manual clock and fires intervals only when told
//! to advance, which makes timer behaviour deterministic in tests and
//! simulations.

use alloc::vec::Vec;

use crate::time::{Duration, HostTime};

/// Identifier of one repeating interval, unique per [`TimerHost`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(pub u32);

/// Schedules repeating callbacks on behalf of a slider.
pub trait TimerHost {
    /// Returns the current host time.
    fn now(&self) -> HostTime;

    /// Starts a repeating interval with the given period.
    ///
    /// The first expiry happens one full period from now.
    fn set_interval(&mut self, period: Duration) -> TimerId;

    /// Stops the interval. Clearing an unknown or already cleared id is a
    /// no-op.
    fn clear_interval(&mut self, id: TimerId);
}

impl<T: TimerHost + ?Sized> TimerHost for &mut T {
    fn now(&self) -> HostTime {
        (**self).now()
    }

    fn set_interval(&mut self, period: Duration) -> TimerId {
        (**self).set_interval(period)
    }

    fn clear_interval(&mut self, id: TimerId) {
        (**self).clear_interval(id);
    }
}

#[derive(Clone, Copy, Debug)]
struct Interval {
    id: TimerId,
    period: Duration,
    next_due: HostTime,
}

/// A [`TimerHost`] driven by a manual clock.
///
/// Time only moves through [`advance_to`](Self::advance_to) and
/// [`fire_next`](Self::fire_next). Zero periods are treated as one
/// millisecond so an interval can never fire twice at the same instant.
#[derive(Clone, Debug, Default)]
pub struct VirtualTimers {
    now: HostTime,
    next_id: u32,
    intervals: Vec<Interval>,
}

impl VirtualTimers {
    /// Creates a host whose clock starts at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a host whose clock starts at `now`.
    #[must_use]
    pub fn starting_at(now: HostTime) -> Self {
        Self {
            now,
            ..Self::default()
        }
    }

    /// Returns the number of armed intervals.
    #[must_use]
    pub fn active(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` if `id` is armed.
    #[must_use]
    pub fn is_active(&self, id: TimerId) -> bool {
        self.intervals.iter().any(|i| i.id == id)
    }

    /// Returns when `id` fires next, if it is armed.
    #[must_use]
    pub fn next_due(&self, id: TimerId) -> Option<HostTime> {
        self.intervals
            .iter()
            .find(|i| i.id == id)
            .map(|i| i.next_due)
    }

    /// Fires the earliest interval due at or before `until`.
    ///
    /// The clock moves to that interval's due time and the interval is
    /// re-armed one period later. Ties go to the interval armed first.
    /// Returns `None`, leaving the clock alone, if nothing is due.
    pub fn fire_next(&mut self, until: HostTime) -> Option<TimerId> {
        let slot = self
            .intervals
            .iter()
            .enumerate()
            .filter(|(_, i)| i.next_due <= until)
            .min_by_key(|(_, i)| (i.next_due, i.id))
            .map(|(slot, _)| slot)?;
        let interval = &mut self.intervals[slot];
        self.now = interval.next_due;
        interval.next_due = interval.next_due.saturating_add(interval.period);
        Some(interval.id)
    }

    /// Fires everything due up to `until`, then sets the clock to `until`.
    ///
    /// Returns the fired ids in firing order. Callers that react to expiries
    /// by re-arming timers should loop on [`fire_next`](Self::fire_next)
    /// instead, so each reaction is visible to later expiries.
    pub fn advance_to(&mut self, until: HostTime) -> Vec<TimerId> {
        let mut fired = Vec::new();
        while let Some(id) = self.fire_next(until) {
            fired.push(id);
        }
        self.settle(until);
        fired
    }

    /// Moves the clock forward to `until` without firing anything.
    ///
    /// Never moves the clock backwards.
    pub fn settle(&mut self, until: HostTime) {
        if until > self.now {
            self.now = until;
        }
    }
}

impl TimerHost for VirtualTimers {
    fn now(&self) -> HostTime {
        self.now
    }

    fn set_interval(&mut self, period: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        let period = if period.is_zero() {
            Duration::from_millis(1)
        } else {
            period
        };
        self.intervals.push(Interval {
            id,
            period,
            next_due: self.now.saturating_add(period),
        });
        id
    }

    fn clear_interval(&mut self, id: TimerId) {
        self.intervals.retain(|i| i.id != id);
    }
}
