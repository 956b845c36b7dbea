// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and appends every event to a
//! list of [`RecordedEvent`]s in arrival order. Wrap it in
//! `Rc<RefCell<_>>` to keep reading the recording while a slider owns the
//! sink.

use carousel_core::trace::{
    MountEvent, MountSkippedEvent, NavigateEvent, NavigationCause, PartMissingEvent,
    StaleTickEvent, TimerEvent, TraceSink,
};

/// One recorded trace event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordedEvent {
    /// See [`TraceSink::on_mount`].
    Mount(MountEvent),
    /// See [`TraceSink::on_mount_skipped`].
    MountSkipped(MountSkippedEvent),
    /// See [`TraceSink::on_part_missing`].
    PartMissing(PartMissingEvent),
    /// See [`TraceSink::on_navigate`].
    Navigate(NavigateEvent),
    /// See [`TraceSink::on_timer`].
    Timer(TimerEvent),
    /// See [`TraceSink::on_stale_tick`].
    StaleTick(StaleTickEvent),
}

/// A [`TraceSink`] that keeps every event in memory.
#[derive(Clone, Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded events in arrival order.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Returns the destination index of every slide change, in order.
    #[must_use]
    pub fn visited(&self) -> Vec<usize> {
        self.navigations().map(|e| e.to).collect()
    }

    /// Counts slide changes with the given cause.
    #[must_use]
    pub fn count_cause(&self, cause: NavigationCause) -> usize {
        self.navigations().filter(|e| e.cause == cause).count()
    }

    fn navigations(&self) -> impl Iterator<Item = &NavigateEvent> {
        self.events.iter().filter_map(|e| match e {
            RecordedEvent::Navigate(n) => Some(n),
            _ => None,
        })
    }
}

impl TraceSink for RecorderSink {
    fn on_mount(&mut self, e: &MountEvent) {
        self.events.push(RecordedEvent::Mount(*e));
    }

    fn on_mount_skipped(&mut self, e: &MountSkippedEvent) {
        self.events.push(RecordedEvent::MountSkipped(*e));
    }

    fn on_part_missing(&mut self, e: &PartMissingEvent) {
        self.events.push(RecordedEvent::PartMissing(*e));
    }

    fn on_navigate(&mut self, e: &NavigateEvent) {
        self.events.push(RecordedEvent::Navigate(*e));
    }

    fn on_timer(&mut self, e: &TimerEvent) {
        self.events.push(RecordedEvent::Timer(*e));
    }

    fn on_stale_tick(&mut self, e: &StaleTickEvent) {
        self.events.push(RecordedEvent::StaleTick(*e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use carousel_core::config::SliderConfig;
    use carousel_core::headless::{HeadlessDocument, HeadlessElement, HeadlessLayout};
    use carousel_core::slider::Slider;
    use carousel_core::time::Duration;
    use carousel_core::timer::VirtualTimers;
    use carousel_core::trace::{Part, Tracer};

    #[test]
    fn records_a_session() {
        let recorder = Rc::new(RefCell::new(RecorderSink::new()));
        let layout = HeadlessLayout {
            indicators: false,
            ..HeadlessLayout::complete(3)
        };
        let mut slider = Slider::mount_with_tracer(
            &HeadlessDocument::new(layout),
            VirtualTimers::new(),
            SliderConfig::default(),
            Tracer::new(Box::new(Rc::clone(&recorder))),
        )
        .unwrap();

        slider.advance(Duration::from_secs(5));
        slider.click(HeadlessElement::Previous);
        slider.advance(Duration::from_secs(10));

        let recorder = recorder.borrow();
        assert_eq!(recorder.visited(), [1, 0, 1, 2]);
        assert_eq!(recorder.count_cause(NavigationCause::Auto), 3);
        assert_eq!(recorder.count_cause(NavigationCause::Previous), 1);
        assert!(matches!(
            recorder.events()[0],
            RecordedEvent::PartMissing(PartMissingEvent {
                part: Part::IndicatorContainer,
                index: None,
            })
        ));
    }
}
