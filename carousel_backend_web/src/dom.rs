// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM element lookup, marking, and click routing.
//!
//! [`DomDocument`] finds the slider container by id; [`DomView`] implements
//! [`SliderView`] over it: slides and triggers are queried by class inside
//! the container, the indicator container is looked up by id document-wide,
//! and the active marker is a toggled class.
//!
//! The view owns every click listener and generated indicator it installs
//! and removes them again when dropped.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event};

use carousel_core::config::Selectors;
use carousel_core::view::{Action, SliderDocument, SliderView};

use crate::dispatch::Dispatcher;

type ClickClosure = Closure<dyn FnMut(Event)>;

struct Listener {
    target: Element,
    closure: ClickClosure,
}

/// Locates sliders in a browser [`Document`].
#[derive(Debug)]
pub struct DomDocument {
    document: Document,
    dispatcher: Dispatcher,
}

impl DomDocument {
    pub(crate) fn new(document: Document, dispatcher: Dispatcher) -> Self {
        Self {
            document,
            dispatcher,
        }
    }
}

impl SliderDocument for DomDocument {
    type View = DomView;

    fn locate(&self, selectors: &Selectors) -> Option<DomView> {
        let container = self.document.get_element_by_id(&selectors.container_id)?;
        Some(DomView {
            document: self.document.clone(),
            container,
            slide_selector: class_selector(&selectors.slide_class),
            previous_selector: class_selector(&selectors.previous_class),
            next_selector: class_selector(&selectors.next_class),
            indicators_id: String::from(&*selectors.indicators_id),
            active_class: String::from(&*selectors.active_class),
            indicator_tag: String::from(&*selectors.indicator_tag),
            dispatcher: self.dispatcher.clone(),
            listeners: Vec::new(),
            generated: Vec::new(),
        })
    }
}

/// A located slider container in the live DOM.
pub struct DomView {
    document: Document,
    container: Element,
    slide_selector: String,
    previous_selector: String,
    next_selector: String,
    indicators_id: String,
    active_class: String,
    indicator_tag: String,
    dispatcher: Dispatcher,
    listeners: Vec<Listener>,
    generated: Vec<Element>,
}

impl core::fmt::Debug for DomView {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomView")
            .field("container", &"Element")
            .field("slide_selector", &self.slide_selector)
            .field("listeners", &self.listeners.len())
            .field("generated", &self.generated.len())
            .finish_non_exhaustive()
    }
}

impl DomView {
    /// Returns the slider container.
    #[must_use]
    pub fn container(&self) -> &Element {
        &self.container
    }

    /// Returns the first element inside the container matching `selector`.
    fn query(&self, selector: &str) -> Option<Element> {
        self.container.query_selector(selector).ok().flatten()
    }
}

impl SliderView for DomView {
    type Element = Element;

    fn slides(&self) -> Vec<Element> {
        let Ok(list) = self.container.query_selector_all(&self.slide_selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn previous_trigger(&self) -> Option<Element> {
        self.query(&self.previous_selector)
    }

    fn next_trigger(&self) -> Option<Element> {
        self.query(&self.next_selector)
    }

    fn indicator_container(&self) -> Option<Element> {
        self.document.get_element_by_id(&self.indicators_id)
    }

    fn create_indicator(&mut self, container: &Element, _index: usize) -> Option<Element> {
        let dot = self.document.create_element(&self.indicator_tag).ok()?;
        container.append_child(&dot).ok()?;
        self.generated.push(dot.clone());
        Some(dot)
    }

    fn set_active(&mut self, element: &Element, active: bool) {
        let _ = element
            .class_list()
            .toggle_with_force(&self.active_class, active);
    }

    fn bind(&mut self, element: &Element, action: Action) -> bool {
        let dispatcher = self.dispatcher.clone();
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            dispatcher.with_slider(|slider| {
                // Bound indicators are generated 1:1 with slides, so
                // `Select` is always in range.
                let _ = slider.handle(action);
            });
        }) as Box<dyn FnMut(Event)>);

        let added = element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .is_ok();
        if added {
            self.listeners.push(Listener {
                target: element.clone(),
                closure,
            });
        }
        added
    }
}

impl Drop for DomView {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            let _ = listener.target.remove_event_listener_with_callback(
                "click",
                listener.closure.as_ref().unchecked_ref(),
            );
        }
        for dot in self.generated.drain(..) {
            dot.remove();
        }
    }
}

/// Builds a CSS class selector, escaping characters that would otherwise
/// end or change the selector.
fn class_selector(class: &str) -> String {
    let mut selector = String::with_capacity(class.len() + 1);
    selector.push('.');
    for (i, c) in class.chars().enumerate() {
        let leading_digit = i == 0 && c.is_ascii_digit();
        if leading_digit {
            selector.push_str(&format!("\\{:x} ", u32::from(c)));
        } else if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
            selector.push(c);
        } else {
            selector.push('\\');
            selector.push(c);
        }
    }
    selector
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_class_selector() {
        assert_eq!(class_selector("slide"), ".slide");
        assert_eq!(class_selector("hero-slide_2"), ".hero-slide_2");
    }

    #[test]
    fn class_selector_escapes() {
        assert_eq!(class_selector("a.b"), ".a\\.b");
        assert_eq!(class_selector("w:50%"), ".w\\:50\\%");
        assert_eq!(class_selector("1up"), ".\\31 up");
    }
}
