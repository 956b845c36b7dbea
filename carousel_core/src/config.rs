// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider configuration.
//!
//! [`SliderConfig`] carries the timing behaviour of a controller and the
//! [`Selectors`] a document backend uses to find its elements. The defaults
//! match the stock page markup:
//!
//! ```html
//! <div id="slider">
//!   <div class="slide">…</div>
//!   <div class="slide">…</div>
//!   <button class="prev">‹</button>
//!   <button class="next">›</button>
//! </div>
//! <div id="dots"></div>
//! ```

use alloc::borrow::Cow;

use crate::time::Duration;

/// Default auto-advance period.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

/// Names used to locate slider parts in a document.
///
/// Ids are matched exactly; classes are matched as single class names.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Selectors {
    /// Id of the slider container.
    pub container_id: Cow<'static, str>,
    /// Class carried by every slide inside the container.
    pub slide_class: Cow<'static, str>,
    /// Class of the previous trigger inside the container.
    pub previous_class: Cow<'static, str>,
    /// Class of the next trigger inside the container.
    pub next_class: Cow<'static, str>,
    /// Id of the indicator container (looked up document-wide).
    pub indicators_id: Cow<'static, str>,
    /// Class toggled on the active slide and indicator.
    pub active_class: Cow<'static, str>,
    /// Tag name of generated indicator elements.
    pub indicator_tag: Cow<'static, str>,
}

impl Selectors {
    /// Selectors for the stock markup (`#slider`, `.slide`, `.prev`,
    /// `.next`, `#dots`, `active`, `<button>`).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            container_id: Cow::Borrowed("slider"),
            slide_class: Cow::Borrowed("slide"),
            previous_class: Cow::Borrowed("prev"),
            next_class: Cow::Borrowed("next"),
            indicators_id: Cow::Borrowed("dots"),
            active_class: Cow::Borrowed("active"),
            indicator_tag: Cow::Borrowed("button"),
        }
    }

    /// Replaces the container and indicator-container ids, keeping the rest.
    ///
    /// Handy for mounting a second slider on the same page.
    #[must_use]
    pub fn with_ids(
        mut self,
        container_id: impl Into<Cow<'static, str>>,
        indicators_id: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.container_id = container_id.into();
        self.indicators_id = indicators_id.into();
        self
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for a [`Slider`](crate::slider::Slider).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SliderConfig {
    /// Auto-advance period. Restarted in full after every manual navigation.
    pub interval: Duration,
    /// Whether the auto-advance timer runs.
    pub autoplay: bool,
    /// Element lookup names.
    pub selectors: Selectors,
}

impl SliderConfig {
    /// The stock configuration: 5 s auto-advance over the default selectors.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            autoplay: true,
            selectors: Selectors::new(),
        }
    }

    /// Sets the auto-advance period.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Enables or disables auto-advance.
    #[must_use]
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Replaces the selectors.
    #[must_use]
    pub fn with_selectors(mut self, selectors: Selectors) -> Self {
        self.selectors = selectors;
        self
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self::new()
    }
}
