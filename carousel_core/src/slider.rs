// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider controller.
//!
//! [`Slider`] owns everything one carousel needs: the located view, the
//! slide and indicator handles, the [`Cursor`], and the armed auto-advance
//! interval. All navigation funnels through two entry points:
//!
//! ```text
//!   click ──► Slider::handle(Action) ──► step / select ──► render_active
//!                                                │
//!                                                └──► reset_timer
//!
//!   expiry ─► Slider::on_timer(TimerId) ──► step(Forward) ──► render_active
//! ```
//!
//! Manual navigation always restarts the interval, so an automatic advance
//! never follows a click by less than one full period.

use alloc::vec::Vec;
use core::num::NonZeroUsize;

use crate::config::SliderConfig;
use crate::cursor::{Cursor, Direction};
use crate::error::{MountError, NavigationError};
use crate::timer::{TimerHost, TimerId};
use crate::trace::{
    MountEvent, MountSkippedEvent, NavigateEvent, NavigationCause, Part, PartMissingEvent,
    StaleTickEvent, TimerAction, TimerEvent, Tracer,
};
use crate::view::{Action, SliderDocument, SliderView};

/// A mounted carousel over view `V`, timed by `T`.
///
/// Create one with [`Slider::mount`]. The slider never re-queries the
/// document after mounting: slide count and order are fixed.
pub struct Slider<V: SliderView, T: TimerHost> {
    view: V,
    timers: T,
    config: SliderConfig,
    slides: Vec<V::Element>,
    indicators: Vec<V::Element>,
    cursor: Cursor,
    timer: Option<TimerId>,
    tracer: Tracer,
}

impl<V: SliderView, T: TimerHost> core::fmt::Debug for Slider<V, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Slider")
            .field("index", &self.cursor.index())
            .field("slides", &self.slides.len())
            .field("indicators", &self.indicators.len())
            .field("timer", &self.timer)
            .field("autoplay", &self.config.autoplay)
            .finish_non_exhaustive()
    }
}

impl<V: SliderView, T: TimerHost> Slider<V, T> {
    /// Locates the slider in `document` and sets it up.
    ///
    /// On success one indicator per slide has been generated and bound,
    /// the triggers are bound, slide 0 is active, and (with autoplay) the
    /// auto-advance interval is armed.
    ///
    /// # Errors
    ///
    /// Returns [`MountError`] if the container is missing or holds no
    /// slides. Nothing is touched in that case.
    pub fn mount<D>(document: &D, timers: T, config: SliderConfig) -> Result<Self, MountError>
    where
        D: SliderDocument<View = V>,
    {
        Self::mount_with_tracer(document, timers, config, Tracer::none())
    }

    /// Like [`mount`](Self::mount), reporting setup to `tracer`.
    ///
    /// A refused mount is reported as a `MountSkippedEvent` before the error
    /// is returned; missing optional parts are reported as
    /// `PartMissingEvent`s.
    ///
    /// # Errors
    ///
    /// See [`mount`](Self::mount).
    pub fn mount_with_tracer<D>(
        document: &D,
        timers: T,
        config: SliderConfig,
        mut tracer: Tracer,
    ) -> Result<Self, MountError>
    where
        D: SliderDocument<View = V>,
    {
        let located = document
            .locate(&config.selectors)
            .ok_or(MountError::ContainerMissing)
            .and_then(|view| {
                let slides = view.slides();
                let len = NonZeroUsize::new(slides.len()).ok_or(MountError::NoSlides)?;
                Ok((view, slides, len))
            });
        let (view, slides, len) = match located {
            Ok(parts) => parts,
            Err(reason) => {
                tracer.mount_skipped(&MountSkippedEvent { reason });
                return Err(reason);
            }
        };

        let mut slider = Self {
            view,
            timers,
            config,
            slides,
            indicators: Vec::new(),
            cursor: Cursor::new(len),
            timer: None,
            tracer,
        };
        slider.build_indicators();
        let previous = slider.view.previous_trigger();
        let previous_bound = slider.bind_trigger(previous, Action::Previous, Part::PreviousTrigger);
        let next = slider.view.next_trigger();
        let next_bound = slider.bind_trigger(next, Action::Next, Part::NextTrigger);
        slider.render_active(0);
        if slider.config.autoplay {
            slider.arm_timer();
        }

        let at = slider.timers.now();
        slider.tracer.mount(&MountEvent {
            at,
            slides: slider.slides.len(),
            indicators: slider.indicators.len(),
            previous_bound,
            next_bound,
        });
        Ok(slider)
    }

    /// Generates and binds one indicator per slide, in slide order.
    ///
    /// Stops at the first indicator that cannot be created or bound, so the
    /// generated indicators always form a prefix of the slide order.
    fn build_indicators(&mut self) {
        let Some(container) = self.view.indicator_container() else {
            self.tracer.part_missing(&PartMissingEvent {
                part: Part::IndicatorContainer,
                index: None,
            });
            return;
        };
        for index in 0..self.slides.len() {
            let created = self.view.create_indicator(&container, index);
            let bound = created.filter(|dot| self.view.bind(dot, Action::Select(index)));
            let Some(dot) = bound else {
                self.tracer.part_missing(&PartMissingEvent {
                    part: Part::Indicator,
                    index: Some(index),
                });
                return;
            };
            self.indicators.push(dot);
        }
    }

    fn bind_trigger(&mut self, trigger: Option<V::Element>, action: Action, part: Part) -> bool {
        let bound = trigger.is_some_and(|el| self.view.bind(&el, action));
        if !bound {
            self.tracer
                .part_missing(&PartMissingEvent { part, index: None });
        }
        bound
    }

    /// Returns the index of the active slide.
    #[must_use]
    pub fn index(&self) -> usize {
        self.cursor.index()
    }

    /// Returns the number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always `false`: a mounted slider has at least one slide.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the number of generated indicators.
    #[must_use]
    pub fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    /// Returns the armed auto-advance interval, if any.
    #[must_use]
    pub fn timer(&self) -> Option<TimerId> {
        self.timer
    }

    /// Returns `true` if auto-advance is enabled.
    #[must_use]
    pub fn is_autoplaying(&self) -> bool {
        self.config.autoplay
    }

    /// Returns the configuration the slider was mounted with.
    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Returns the view.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Returns the timer host.
    #[must_use]
    pub fn timers(&self) -> &T {
        &self.timers
    }

    /// Returns the timer host mutably, e.g. to advance a virtual clock.
    ///
    /// Expiries must still be delivered through [`on_timer`](Self::on_timer).
    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }

    /// Replaces the tracer, returning the previous one.
    pub fn set_tracer(&mut self, tracer: Tracer) -> Tracer {
        core::mem::replace(&mut self.tracer, tracer)
    }

    /// Marks slide `index` (and its indicator) active and every other one
    /// inactive. Idempotent.
    ///
    /// `index` must be below [`len`](Self::len); all callers are internal
    /// and pass a cursor value.
    fn render_active(&mut self, index: usize) {
        for (k, slide) in self.slides.iter().enumerate() {
            self.view.set_active(slide, k == index);
        }
        for (k, dot) in self.indicators.iter().enumerate() {
            self.view.set_active(dot, k == index);
        }
    }

    /// Re-applies the active marker for the current index.
    pub fn render(&mut self) {
        self.render_active(self.cursor.index());
    }

    /// Moves one slide in `direction`, wrapping at both ends, and renders.
    ///
    /// Leaves the timer alone; this is the path the auto-advance timer
    /// takes. Manual navigation goes through [`handle`](Self::handle).
    pub fn step(&mut self, direction: Direction) {
        let cause = match direction {
            Direction::Forward => NavigationCause::Next,
            Direction::Backward => NavigationCause::Previous,
        };
        self.step_because(direction, cause);
    }

    fn step_because(&mut self, direction: Direction, cause: NavigationCause) {
        let from = self.cursor.index();
        let to = self.cursor.step(direction);
        self.render_active(to);
        self.trace_navigate(cause, from, to);
    }

    /// Jumps to slide `index`, renders, and restarts the timer.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::IndexOutOfRange`] for an index past the
    /// last slide; nothing changes in that case.
    pub fn select(&mut self, index: usize) -> Result<(), NavigationError> {
        let from = self.cursor.index();
        let to = self.cursor.select(index)?;
        self.render_active(to);
        self.trace_navigate(NavigationCause::Select, from, to);
        self.reset_timer();
        Ok(())
    }

    /// Performs a user navigation request and restarts the timer.
    ///
    /// # Errors
    ///
    /// Only [`Action::Select`] can fail, see [`select`](Self::select).
    pub fn handle(&mut self, action: Action) -> Result<(), NavigationError> {
        match action {
            Action::Previous => {
                self.step_because(Direction::Backward, NavigationCause::Previous);
                self.reset_timer();
                Ok(())
            }
            Action::Next => {
                self.step_because(Direction::Forward, NavigationCause::Next);
                self.reset_timer();
                Ok(())
            }
            Action::Select(index) => self.select(index),
        }
    }

    /// Delivers an expiry of interval `id`.
    ///
    /// Advances one slide if `id` is the armed interval; anything else is a
    /// stale expiry and is ignored.
    pub fn on_timer(&mut self, id: TimerId) {
        if self.timer != Some(id) {
            let at = self.timers.now();
            self.tracer.stale_tick(&StaleTickEvent { at, id });
            return;
        }
        self.step_because(Direction::Forward, NavigationCause::Auto);
    }

    /// Cancels the armed interval (if any) and, with autoplay enabled, arms
    /// a fresh one with the full period.
    pub fn reset_timer(&mut self) {
        self.disarm_timer();
        if self.config.autoplay {
            self.arm_timer();
        }
    }

    /// Stops auto-advance. Navigation keeps working.
    pub fn stop(&mut self) {
        self.config.autoplay = false;
        self.disarm_timer();
    }

    /// Enables auto-advance and arms a full period from now.
    pub fn start(&mut self) {
        self.config.autoplay = true;
        self.reset_timer();
    }

    fn arm_timer(&mut self) {
        let id = self.timers.set_interval(self.config.interval);
        self.timer = Some(id);
        self.trace_timer(TimerAction::Armed, id);
    }

    fn disarm_timer(&mut self) {
        if let Some(id) = self.timer.take() {
            self.timers.clear_interval(id);
            self.trace_timer(TimerAction::Cleared, id);
        }
    }

    fn trace_navigate(&mut self, cause: NavigationCause, from: usize, to: usize) {
        let at = self.timers.now();
        self.tracer.navigate(&NavigateEvent {
            at,
            cause,
            from,
            to,
        });
    }

    fn trace_timer(&mut self, action: TimerAction, id: TimerId) {
        let at = self.timers.now();
        self.tracer.timer(&TimerEvent { at, action, id });
    }
}

impl<V: SliderView, T: TimerHost> Drop for Slider<V, T> {
    fn drop(&mut self) {
        self.disarm_timer();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{HeadlessDocument, HeadlessElement, HeadlessLayout, HeadlessView};
    use crate::time::{Duration, HostTime};
    use crate::timer::VirtualTimers;
    use alloc::vec;

    const PERIOD: u64 = 5_000;

    fn mounted(slides: usize) -> Slider<HeadlessView, VirtualTimers> {
        let document = HeadlessDocument::new(HeadlessLayout::complete(slides));
        Slider::mount(&document, VirtualTimers::new(), SliderConfig::default()).unwrap()
    }

    /// Asserts exactly one slide (and one indicator, if any) is active, at
    /// `index`.
    fn assert_only_active(slider: &Slider<HeadlessView, VirtualTimers>, index: usize) {
        let view = slider.view();
        let slides = view.active_slides();
        assert_eq!(slides, vec![index], "active slides");
        if view.indicator_count() > 0 {
            assert_eq!(view.active_indicators(), vec![index], "active indicators");
        }
    }

    #[test]
    fn mount_renders_first_slide_and_arms_timer() {
        let slider = mounted(3);
        assert_eq!(slider.index(), 0);
        assert_eq!(slider.len(), 3);
        assert_only_active(&slider, 0);
        assert_eq!(slider.timers().active(), 1);
        let id = slider.timer().unwrap();
        assert_eq!(slider.timers().next_due(id), Some(HostTime(PERIOD)));
    }

    #[test]
    fn one_indicator_per_slide_in_order() {
        let slider = mounted(4);
        assert_eq!(slider.indicator_count(), 4);
        let view = slider.view();
        for k in 0..4 {
            assert_eq!(
                view.action_for(HeadlessElement::Indicator(k)),
                Some(Action::Select(k)),
            );
        }
        assert_eq!(view.indicator_count(), 4);
    }

    #[test]
    fn wraps_in_both_directions() {
        let mut slider = mounted(3);
        slider.handle(Action::Previous).unwrap();
        assert_eq!(slider.index(), 2);
        slider.handle(Action::Next).unwrap();
        assert_eq!(slider.index(), 0);
        slider.step(Direction::Backward);
        slider.step(Direction::Backward);
        assert_eq!(slider.index(), 1);
        assert_only_active(&slider, 1);
    }

    #[test]
    fn render_is_idempotent() {
        let mut slider = mounted(5);
        slider.select(3).unwrap();
        slider.render();
        slider.render();
        assert_only_active(&slider, 3);
    }

    #[test]
    fn auto_advance_every_period() {
        let mut slider = mounted(3);
        assert_eq!(slider.advance(Duration::from_millis(PERIOD - 1)), 0);
        assert_eq!(slider.index(), 0);
        assert_eq!(slider.advance(Duration::from_millis(1)), 1);
        assert_eq!(slider.index(), 1);
        assert_eq!(slider.advance(Duration::from_millis(2 * PERIOD)), 2);
        assert_eq!(slider.index(), 0, "wrapped after three advances");
        assert_only_active(&slider, 0);
    }

    #[test]
    fn manual_navigation_postpones_auto_advance() {
        let mut slider = mounted(5);
        slider.advance(Duration::from_millis(3_000));
        assert!(slider.click(HeadlessElement::Next));
        assert_eq!(slider.index(), 1);

        // The first deadline (t=5000) passes without an advance.
        assert_eq!(slider.advance(Duration::from_millis(3_000)), 0);
        assert!(slider.click(HeadlessElement::Next));
        assert_eq!(slider.index(), 2);

        // A full period after the last click, and not a millisecond sooner.
        assert_eq!(slider.advance(Duration::from_millis(PERIOD - 1)), 0);
        assert_eq!(slider.index(), 2);
        assert_eq!(slider.advance(Duration::from_millis(1)), 1);
        assert_eq!(slider.index(), 3);
        assert_eq!(slider.timers().active(), 1, "never more than one interval");
    }

    #[test]
    fn indicator_click_selects_and_resets() {
        let mut slider = mounted(4);
        slider.advance(Duration::from_millis(4_000));
        assert!(slider.click(HeadlessElement::Indicator(3)));
        assert_eq!(slider.index(), 3);
        assert_only_active(&slider, 3);
        assert_eq!(slider.advance(Duration::from_millis(PERIOD - 1)), 0);
        assert_eq!(slider.advance(Duration::from_millis(1)), 1);
        assert_eq!(slider.index(), 0);
    }

    #[test]
    fn select_out_of_range_changes_nothing() {
        let mut slider = mounted(2);
        let armed = slider.timer();
        assert_eq!(
            slider.handle(Action::Select(2)),
            Err(NavigationError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(slider.index(), 0);
        assert_eq!(slider.timer(), armed, "timer not reset");
    }

    #[test]
    fn stale_expiry_is_ignored() {
        let mut slider = mounted(3);
        let old = slider.timer().unwrap();
        slider.handle(Action::Next).unwrap();
        slider.on_timer(old);
        assert_eq!(slider.index(), 1);
        let current = slider.timer().unwrap();
        slider.on_timer(current);
        assert_eq!(slider.index(), 2);
    }

    #[test]
    fn missing_container_is_a_silent_no_op() {
        let document = HeadlessDocument::empty();
        let mut timers = VirtualTimers::new();
        let result = Slider::mount(&document, &mut timers, SliderConfig::default());
        assert_eq!(result.unwrap_err(), MountError::ContainerMissing);
        assert_eq!(timers.active(), 0, "no timer armed");
        assert!(timers.advance_to(HostTime(60_000)).is_empty());
    }

    #[test]
    fn empty_container_is_refused() {
        let document = HeadlessDocument::new(HeadlessLayout::complete(0));
        let result = Slider::mount(&document, VirtualTimers::new(), SliderConfig::default());
        assert_eq!(result.unwrap_err(), MountError::NoSlides);
    }

    #[test]
    fn missing_triggers_and_dots_are_skipped() {
        let layout = HeadlessLayout {
            slides: 3,
            previous: false,
            next: false,
            indicators: false,
        };
        let document = HeadlessDocument::new(layout);
        let mut slider =
            Slider::mount(&document, VirtualTimers::new(), SliderConfig::default()).unwrap();
        assert_eq!(slider.indicator_count(), 0);
        assert!(!slider.click(HeadlessElement::Next));
        assert!(slider.view().bindings().is_empty());
        assert_only_active(&slider, 0);
        slider.advance(Duration::from_millis(PERIOD));
        assert_eq!(slider.index(), 1, "auto-advance still works");
    }

    #[test]
    fn failing_indicator_stops_generation() {
        let layout = HeadlessLayout::complete(4);
        let document = HeadlessDocument::new(layout).failing_indicator(2);
        let mut slider =
            Slider::mount(&document, VirtualTimers::new(), SliderConfig::default()).unwrap();
        assert_eq!(slider.indicator_count(), 2);
        slider.select(3).unwrap();
        assert_eq!(slider.view().active_slides(), vec![3]);
        assert!(slider.view().active_indicators().is_empty());
    }

    #[test]
    fn stop_and_start() {
        let mut slider = mounted(3);
        slider.stop();
        assert!(!slider.is_autoplaying());
        assert_eq!(slider.timers().active(), 0);
        assert_eq!(slider.advance(Duration::from_secs(60)), 0);

        // Manual navigation does not re-arm a stopped slider.
        slider.handle(Action::Next).unwrap();
        assert_eq!(slider.timer(), None);

        slider.start();
        assert_eq!(slider.advance(Duration::from_millis(PERIOD - 1)), 0);
        assert_eq!(slider.advance(Duration::from_millis(1)), 1);
        assert_eq!(slider.index(), 2);
    }

    #[test]
    fn autoplay_off_arms_nothing() {
        let document = HeadlessDocument::new(HeadlessLayout::complete(3));
        let config = SliderConfig::default().with_autoplay(false);
        let slider = Slider::mount(&document, VirtualTimers::new(), config).unwrap();
        assert_eq!(slider.timer(), None);
        assert_eq!(slider.timers().active(), 0);
    }

    #[test]
    fn custom_interval_is_used() {
        let document = HeadlessDocument::new(HeadlessLayout::complete(3));
        let config = SliderConfig::default().with_interval(Duration::from_millis(250));
        let mut slider = Slider::mount(&document, VirtualTimers::new(), config).unwrap();
        assert_eq!(slider.advance(Duration::from_millis(1_000)), 4);
        assert_eq!(slider.index(), 1);
    }

    #[test]
    fn independent_instances() {
        let mut a = mounted(3);
        let mut b = mounted(4);
        a.handle(Action::Next).unwrap();
        b.handle(Action::Previous).unwrap();
        assert_eq!(a.index(), 1);
        assert_eq!(b.index(), 3);
    }

    #[cfg(feature = "trace")]
    #[test]
    fn trace_reports_setup_and_navigation() {
        use crate::trace::TraceSink;
        use alloc::boxed::Box;
        use alloc::rc::Rc;
        use core::cell::RefCell;

        #[derive(Default)]
        struct Log {
            missing: Vec<Part>,
            causes: Vec<NavigationCause>,
            armed: usize,
            cleared: usize,
            mounted: Option<MountEvent>,
        }
        impl TraceSink for Log {
            fn on_mount(&mut self, e: &MountEvent) {
                self.mounted = Some(*e);
            }
            fn on_part_missing(&mut self, e: &PartMissingEvent) {
                self.missing.push(e.part);
            }
            fn on_navigate(&mut self, e: &NavigateEvent) {
                self.causes.push(e.cause);
            }
            fn on_timer(&mut self, e: &TimerEvent) {
                match e.action {
                    TimerAction::Armed => self.armed += 1,
                    TimerAction::Cleared => self.cleared += 1,
                }
            }
        }

        let log = Rc::new(RefCell::new(Log::default()));
        let layout = HeadlessLayout {
            slides: 2,
            previous: false,
            next: true,
            indicators: true,
        };
        let document = HeadlessDocument::new(layout);
        let mut slider = Slider::mount_with_tracer(
            &document,
            VirtualTimers::new(),
            SliderConfig::default(),
            Tracer::new(Box::new(Rc::clone(&log))),
        )
        .unwrap();
        slider.click(HeadlessElement::Next);
        slider.advance(Duration::from_millis(PERIOD));

        let log = log.borrow();
        assert_eq!(log.missing, [Part::PreviousTrigger]);
        assert_eq!(log.causes, [NavigationCause::Next, NavigationCause::Auto]);
        assert_eq!((log.armed, log.cleared), (2, 1));
        let mounted = log.mounted.unwrap();
        assert_eq!((mounted.slides, mounted.indicators), (2, 2));
        assert!(!mounted.previous_bound && mounted.next_bound);
    }
}
