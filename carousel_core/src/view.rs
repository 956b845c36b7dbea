// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document contract for platform integrations.
//!
//! The controller never touches a concrete element tree. A backend provides
//! two pieces:
//!
//! - **Document**: Implements [`SliderDocument`] to locate a slider
//!   container by [`Selectors`] and hand back a view over it. A missing
//!   container is reported as `None`.
//!
//! - **View**: Implements [`SliderView`] to enumerate slides and triggers,
//!   generate indicator elements, toggle the active marker, and route user
//!   activations back to the controller as [`Action`]s.
//!
//! Timer scheduling is a separate capability, see
//! [`TimerHost`](crate::timer::TimerHost).
//!
//! # Event routing
//!
//! [`SliderView::bind`] only records *which* [`Action`] an element triggers.
//! Delivering that action is the backend's job: the web backend registers a
//! click listener that calls
//! [`Slider::handle`](crate::slider::Slider::handle), while the headless view
//! lets tests look the action up and feed it in directly.

use alloc::vec::Vec;

use crate::config::Selectors;

/// A user navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    /// Show the previous slide.
    Previous,
    /// Show the next slide.
    Next,
    /// Show the slide at the given index.
    Select(usize),
}

/// Locates slider containers.
pub trait SliderDocument {
    /// The view type produced for a located container.
    type View: SliderView;

    /// Looks up the container named by `selectors`, returning `None` if it
    /// is absent.
    fn locate(&self, selectors: &Selectors) -> Option<Self::View>;
}

/// Element-level capabilities of one located slider.
///
/// Lookups other than the container may fail independently; the controller
/// skips whatever is missing.
pub trait SliderView {
    /// Handle to one element of the slider.
    type Element;

    /// Returns the slide elements in document order.
    fn slides(&self) -> Vec<Self::Element>;

    /// Returns the previous trigger, if present.
    fn previous_trigger(&self) -> Option<Self::Element>;

    /// Returns the next trigger, if present.
    fn next_trigger(&self) -> Option<Self::Element>;

    /// Returns the container for generated indicators, if present.
    fn indicator_container(&self) -> Option<Self::Element>;

    /// Creates the indicator for slide `index` and appends it to
    /// `container`, returning `None` if creation failed.
    fn create_indicator(&mut self, container: &Self::Element, index: usize)
    -> Option<Self::Element>;

    /// Adds or removes the active marker on `element`.
    fn set_active(&mut self, element: &Self::Element, active: bool);

    /// Arranges for activating `element` to deliver `action`.
    ///
    /// Returns `false` if the binding could not be installed.
    fn bind(&mut self, element: &Self::Element, action: Action) -> bool;
}
