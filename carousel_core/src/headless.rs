// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory document for tests and simulations.
//!
//! [`HeadlessDocument`] describes which parts of the slider markup exist;
//! [`HeadlessView`] records the active marker of every slide and indicator
//! and the [`Action`] bound to each element. Together with
//! [`VirtualTimers`] they drive a [`Slider`] without a browser:
//!
//! ```
//! use carousel_core::config::SliderConfig;
//! use carousel_core::headless::{HeadlessDocument, HeadlessElement, HeadlessLayout};
//! use carousel_core::slider::Slider;
//! use carousel_core::time::Duration;
//! use carousel_core::timer::VirtualTimers;
//!
//! let document = HeadlessDocument::new(HeadlessLayout::complete(3));
//! let mut slider =
//!     Slider::mount(&document, VirtualTimers::new(), SliderConfig::default()).unwrap();
//!
//! slider.click(HeadlessElement::Previous);
//! assert_eq!(slider.index(), 2);
//!
//! slider.advance(Duration::from_secs(5));
//! assert_eq!(slider.index(), 0);
//! ```

use alloc::vec::Vec;

use crate::config::Selectors;
use crate::slider::Slider;
use crate::time::Duration;
use crate::timer::{TimerHost, VirtualTimers};
use crate::view::{Action, SliderDocument, SliderView};

/// Which parts of the slider markup exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HeadlessLayout {
    /// Number of slides inside the container.
    pub slides: usize,
    /// Whether a previous trigger exists.
    pub previous: bool,
    /// Whether a next trigger exists.
    pub next: bool,
    /// Whether the indicator container exists.
    pub indicators: bool,
}

impl HeadlessLayout {
    /// A layout with `slides` slides and every optional part present.
    #[must_use]
    pub const fn complete(slides: usize) -> Self {
        Self {
            slides,
            previous: true,
            next: true,
            indicators: true,
        }
    }
}

/// An element of a [`HeadlessView`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeadlessElement {
    /// Slide at the given position.
    Slide(usize),
    /// Generated indicator for the given slide.
    Indicator(usize),
    /// The indicator container.
    IndicatorContainer,
    /// The previous trigger.
    Previous,
    /// The next trigger.
    Next,
}

/// A document holding at most one slider.
#[derive(Clone, Debug, Default)]
pub struct HeadlessDocument {
    layout: Option<HeadlessLayout>,
    failing_indicator: Option<usize>,
}

impl HeadlessDocument {
    /// A document whose slider container has the given layout.
    #[must_use]
    pub fn new(layout: HeadlessLayout) -> Self {
        Self {
            layout: Some(layout),
            failing_indicator: None,
        }
    }

    /// A document without a slider container.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Makes creation of the indicator for slide `index` fail.
    #[must_use]
    pub fn failing_indicator(mut self, index: usize) -> Self {
        self.failing_indicator = Some(index);
        self
    }
}

impl SliderDocument for HeadlessDocument {
    type View = HeadlessView;

    fn locate(&self, _selectors: &Selectors) -> Option<HeadlessView> {
        let layout = self.layout?;
        Some(HeadlessView {
            layout,
            failing_indicator: self.failing_indicator,
            slide_active: alloc::vec![false; layout.slides],
            indicator_active: Vec::new(),
            bindings: Vec::new(),
        })
    }
}

/// Recorded state of one located headless slider.
#[derive(Clone, Debug)]
pub struct HeadlessView {
    layout: HeadlessLayout,
    failing_indicator: Option<usize>,
    slide_active: Vec<bool>,
    indicator_active: Vec<bool>,
    bindings: Vec<(HeadlessElement, Action)>,
}

impl HeadlessView {
    /// Returns the positions of slides carrying the active marker.
    #[must_use]
    pub fn active_slides(&self) -> Vec<usize> {
        positions(&self.slide_active)
    }

    /// Returns the positions of indicators carrying the active marker.
    #[must_use]
    pub fn active_indicators(&self) -> Vec<usize> {
        positions(&self.indicator_active)
    }

    /// Returns the number of generated indicators.
    #[must_use]
    pub fn indicator_count(&self) -> usize {
        self.indicator_active.len()
    }

    /// Returns every installed binding, in installation order.
    #[must_use]
    pub fn bindings(&self) -> &[(HeadlessElement, Action)] {
        &self.bindings
    }

    /// Returns the action bound to `element`, if any.
    #[must_use]
    pub fn action_for(&self, element: HeadlessElement) -> Option<Action> {
        self.bindings
            .iter()
            .find(|(bound, _)| *bound == element)
            .map(|&(_, action)| action)
    }
}

fn positions(flags: &[bool]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .filter_map(|(k, &on)| on.then_some(k))
        .collect()
}

impl SliderView for HeadlessView {
    type Element = HeadlessElement;

    fn slides(&self) -> Vec<HeadlessElement> {
        (0..self.layout.slides).map(HeadlessElement::Slide).collect()
    }

    fn previous_trigger(&self) -> Option<HeadlessElement> {
        self.layout.previous.then_some(HeadlessElement::Previous)
    }

    fn next_trigger(&self) -> Option<HeadlessElement> {
        self.layout.next.then_some(HeadlessElement::Next)
    }

    fn indicator_container(&self) -> Option<HeadlessElement> {
        self.layout
            .indicators
            .then_some(HeadlessElement::IndicatorContainer)
    }

    fn create_indicator(
        &mut self,
        container: &HeadlessElement,
        index: usize,
    ) -> Option<HeadlessElement> {
        if *container != HeadlessElement::IndicatorContainer
            || self.failing_indicator == Some(index)
            || index != self.indicator_active.len()
        {
            return None;
        }
        self.indicator_active.push(false);
        Some(HeadlessElement::Indicator(index))
    }

    fn set_active(&mut self, element: &HeadlessElement, active: bool) {
        let flag = match *element {
            HeadlessElement::Slide(k) => self.slide_active.get_mut(k),
            HeadlessElement::Indicator(k) => self.indicator_active.get_mut(k),
            _ => None,
        };
        if let Some(flag) = flag {
            *flag = active;
        }
    }

    fn bind(&mut self, element: &HeadlessElement, action: Action) -> bool {
        self.bindings.push((*element, action));
        true
    }
}

impl<T: TimerHost> Slider<HeadlessView, T> {
    /// Simulates a click on `element`.
    ///
    /// Returns `false` if nothing is bound to it.
    pub fn click(&mut self, element: HeadlessElement) -> bool {
        let Some(action) = self.view().action_for(element) else {
            return false;
        };
        // Bound actions come from mounting and are always in range.
        self.handle(action).is_ok()
    }
}

impl<V: SliderView> Slider<V, VirtualTimers> {
    /// Advances virtual time by `elapsed`, delivering every expiry on the
    /// way, and returns how many were delivered.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let until = self.timers().now().saturating_add(elapsed);
        let mut delivered = 0;
        while let Some(id) = self.timers_mut().fire_next(until) {
            self.on_timer(id);
            delivered += 1;
        }
        self.timers_mut().settle(until);
        delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_locates_nothing() {
        assert!(HeadlessDocument::empty().locate(&Selectors::new()).is_none());
    }

    #[test]
    fn indicators_are_created_in_order() {
        let document = HeadlessDocument::new(HeadlessLayout::complete(2));
        let mut view = document.locate(&Selectors::new()).unwrap();
        let container = view.indicator_container().unwrap();
        assert_eq!(view.create_indicator(&container, 1), None, "out of order");
        assert_eq!(
            view.create_indicator(&container, 0),
            Some(HeadlessElement::Indicator(0))
        );
        assert_eq!(view.indicator_count(), 1);
    }

    #[test]
    fn set_active_ignores_non_markable_elements() {
        let document = HeadlessDocument::new(HeadlessLayout::complete(2));
        let mut view = document.locate(&Selectors::new()).unwrap();
        view.set_active(&HeadlessElement::Next, true);
        view.set_active(&HeadlessElement::Slide(5), true);
        view.set_active(&HeadlessElement::Slide(1), true);
        assert_eq!(view.active_slides(), [1]);
    }
}
