// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the slider.
//!
//! This module provides a [`TraceSink`] trait with one method per event the
//! controller emits. All method bodies default to no-ops, so implementing
//! only the events you care about is fine.
//!
//! [`Tracer`] owns an optional boxed `TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing and the sink is
//! dropped on construction. When **on**, each method performs a single
//! `Option` branch before dispatching.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use crate::error::MountError;
use crate::time::HostTime;
use crate::timer::TimerId;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// What caused a slide change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavigationCause {
    /// The auto-advance timer fired.
    Auto,
    /// The previous trigger was activated.
    Previous,
    /// The next trigger was activated.
    Next,
    /// An indicator was activated.
    Select,
}

impl NavigationCause {
    /// Returns a short lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Previous => "previous",
            Self::Next => "next",
            Self::Select => "select",
        }
    }

    /// Returns `true` for causes that restart the auto-advance timer.
    #[must_use]
    pub const fn is_manual(self) -> bool {
        !matches!(self, Self::Auto)
    }
}

/// An optional part of the slider markup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    /// The previous trigger.
    PreviousTrigger,
    /// The next trigger.
    NextTrigger,
    /// The container for generated indicators.
    IndicatorContainer,
    /// A generated indicator (creation or binding failed).
    Indicator,
}

impl Part {
    /// Returns a short lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreviousTrigger => "previous-trigger",
            Self::NextTrigger => "next-trigger",
            Self::IndicatorContainer => "indicator-container",
            Self::Indicator => "indicator",
        }
    }
}

/// What happened to the auto-advance timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerAction {
    /// A new interval was armed.
    Armed,
    /// The interval was cleared.
    Cleared,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once a slider is fully mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountEvent {
    /// Host time of the mount.
    pub at: HostTime,
    /// Number of slides found.
    pub slides: usize,
    /// Number of indicators generated.
    pub indicators: usize,
    /// Whether the previous trigger was bound.
    pub previous_bound: bool,
    /// Whether the next trigger was bound.
    pub next_bound: bool,
}

/// Emitted when mounting is abandoned before any side effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MountSkippedEvent {
    /// Why the mount did not happen.
    pub reason: MountError,
}

/// Emitted for each optional part that is absent or could not be set up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartMissingEvent {
    /// Which part.
    pub part: Part,
    /// Slide index for [`Part::Indicator`], `None` otherwise.
    pub index: Option<usize>,
}

/// Emitted after every slide change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigateEvent {
    /// Host time of the change.
    pub at: HostTime,
    /// What caused it.
    pub cause: NavigationCause,
    /// Index before the change.
    pub from: usize,
    /// Index after the change.
    pub to: usize,
}

/// Emitted when the auto-advance interval is armed or cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerEvent {
    /// Host time of the action.
    pub at: HostTime,
    /// Armed or cleared.
    pub action: TimerAction,
    /// The interval concerned.
    pub id: TimerId,
}

/// Emitted when a timer expiry arrives for an interval that is no longer
/// the armed one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaleTickEvent {
    /// Host time the expiry was delivered.
    pub at: HostTime,
    /// The expired interval.
    pub id: TimerId,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from a slider.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called once a slider is mounted.
    fn on_mount(&mut self, e: &MountEvent) {
        _ = e;
    }

    /// Called when mounting is abandoned.
    fn on_mount_skipped(&mut self, e: &MountSkippedEvent) {
        _ = e;
    }

    /// Called for each optional part that is missing.
    fn on_part_missing(&mut self, e: &PartMissingEvent) {
        _ = e;
    }

    /// Called after every slide change.
    fn on_navigate(&mut self, e: &NavigateEvent) {
        _ = e;
    }

    /// Called when the interval is armed or cleared.
    fn on_timer(&mut self, e: &TimerEvent) {
        _ = e;
    }

    /// Called when a stale expiry is ignored.
    fn on_stale_tick(&mut self, e: &StaleTickEvent) {
        _ = e;
    }
}

/// Shares one sink between a slider and its owner, so recorded events can be
/// read back while the slider still holds the sink.
impl<S: TraceSink + ?Sized> TraceSink for Rc<RefCell<S>> {
    fn on_mount(&mut self, e: &MountEvent) {
        self.borrow_mut().on_mount(e);
    }

    fn on_mount_skipped(&mut self, e: &MountSkippedEvent) {
        self.borrow_mut().on_mount_skipped(e);
    }

    fn on_part_missing(&mut self, e: &PartMissingEvent) {
        self.borrow_mut().on_part_missing(e);
    }

    fn on_navigate(&mut self, e: &NavigateEvent) {
        self.borrow_mut().on_navigate(e);
    }

    fn on_timer(&mut self, e: &TimerEvent) {
        self.borrow_mut().on_timer(e);
    }

    fn on_stale_tick(&mut self, e: &StaleTickEvent) {
        self.borrow_mut().on_stale_tick(e);
    }
}

/// Fans every event out to both sinks, first `A` then `B`.
impl<A: TraceSink, B: TraceSink> TraceSink for (A, B) {
    fn on_mount(&mut self, e: &MountEvent) {
        self.0.on_mount(e);
        self.1.on_mount(e);
    }

    fn on_mount_skipped(&mut self, e: &MountSkippedEvent) {
        self.0.on_mount_skipped(e);
        self.1.on_mount_skipped(e);
    }

    fn on_part_missing(&mut self, e: &PartMissingEvent) {
        self.0.on_part_missing(e);
        self.1.on_part_missing(e);
    }

    fn on_navigate(&mut self, e: &NavigateEvent) {
        self.0.on_navigate(e);
        self.1.on_navigate(e);
    }

    fn on_timer(&mut self, e: &TimerEvent) {
        self.0.on_timer(e);
        self.1.on_timer(e);
    }

    fn on_stale_tick(&mut self, e: &StaleTickEvent) {
        self.0.on_stale_tick(e);
        self.1.on_stale_tick(e);
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Owning wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<Box<dyn TraceSink>>,
}

impl core::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::none()
    }
}

impl Tracer {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: Box<dyn TraceSink>) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {}
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {}
        }
    }

    /// Returns `true` if events reach a sink.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        #[cfg(feature = "trace")]
        {
            self.sink.is_some()
        }
        #[cfg(not(feature = "trace"))]
        {
            false
        }
    }

    /// Removes and returns the sink, leaving the tracer disabled.
    #[inline]
    pub fn take(&mut self) -> Option<Box<dyn TraceSink>> {
        #[cfg(feature = "trace")]
        {
            self.sink.take()
        }
        #[cfg(not(feature = "trace"))]
        {
            None
        }
    }

    /// Emits a [`MountEvent`].
    #[inline]
    pub fn mount(&mut self, e: &MountEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_mount(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`MountSkippedEvent`].
    #[inline]
    pub fn mount_skipped(&mut self, e: &MountSkippedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_mount_skipped(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`PartMissingEvent`].
    #[inline]
    pub fn part_missing(&mut self, e: &PartMissingEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_part_missing(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`NavigateEvent`].
    #[inline]
    pub fn navigate(&mut self, e: &NavigateEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_navigate(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TimerEvent`].
    #[inline]
    pub fn timer(&mut self, e: &TimerEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_timer(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`StaleTickEvent`].
    #[inline]
    pub fn stale_tick(&mut self, e: &StaleTickEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_stale_tick(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_navigate() -> NavigateEvent {
        NavigateEvent {
            at: HostTime(5_000),
            cause: NavigationCause::Auto,
            from: 0,
            to: 1,
        }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_navigate(&sample_navigate());
        sink.on_mount_skipped(&MountSkippedEvent {
            reason: MountError::ContainerMissing,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        assert!(!tracer.is_enabled());
        tracer.navigate(&sample_navigate());
        assert!(tracer.take().is_none());
    }

    #[test]
    fn labels() {
        assert_eq!(NavigationCause::Select.as_str(), "select");
        assert!(NavigationCause::Next.is_manual());
        assert!(!NavigationCause::Auto.is_manual());
        assert_eq!(Part::IndicatorContainer.as_str(), "indicator-container");
    }

    #[test]
    fn shared_and_paired_sinks_forward() {
        use alloc::vec::Vec;

        #[derive(Default)]
        struct RecordingSink {
            seen: Vec<usize>,
        }
        impl TraceSink for RecordingSink {
            fn on_navigate(&mut self, e: &NavigateEvent) {
                self.seen.push(e.to);
            }
        }

        let a = Rc::new(RefCell::new(RecordingSink::default()));
        let b = Rc::new(RefCell::new(RecordingSink::default()));
        let mut pair = (Rc::clone(&a), Rc::clone(&b));
        pair.on_navigate(&sample_navigate());
        assert_eq!(a.borrow().seen, [1]);
        assert_eq!(b.borrow().seen, [1]);
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        #[derive(Default)]
        struct RecordingSink {
            seen: Vec<usize>,
        }
        impl TraceSink for RecordingSink {
            fn on_navigate(&mut self, e: &NavigateEvent) {
                self.seen.push(e.to);
            }
        }

        let sink = Rc::new(RefCell::new(RecordingSink::default()));
        let mut tracer = Tracer::new(Box::new(Rc::clone(&sink)));
        assert!(tracer.is_enabled());
        tracer.navigate(&sample_navigate());
        assert_eq!(sink.borrow().seen, [1]);
    }
}
