//! Browser integrations used by the landing page.
//!
//! - Pointer parallax: a window `pointermove` listener translating the hero
//!   grid cells by depth.
//! - Scroll reveal: an `IntersectionObserver` adding the `visible` class to
//!   sections the first time they scroll into view.
//!
//! Both attach while the calling component is mounted and detach in its
//! cleanup. On the server they do nothing.

use leptos::html;
use leptos::prelude::*;

use crate::core::parallax::GridCell;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Intersection ratio at which a section counts as visible.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Pulls the viewport's bottom edge up so sections reveal a little after
/// they enter.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Class added to a revealed section.
pub const VISIBLE_CLASS: &str = "visible";

/// Translate each cell with the pointer, scaled by the cell's depth.
pub fn use_pointer_parallax(cells: Vec<(NodeRef<html::Div>, GridCell)>) {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::parallax::{ParallaxField, Viewport};

        let (refs, grid): (Vec<_>, Vec<_>) = cells.into_iter().unzip();
        let field = StoredValue::new(ParallaxField::new(grid));

        let handle = window_event_listener(leptos::ev::pointermove, move |ev| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let extent = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
                v.ok().and_then(|v| v.as_f64()).unwrap_or_default()
            };
            let viewport = Viewport::new(extent(window.inner_width()), extent(window.inner_height()));

            let Some(translations) = field
                .try_with_value(|f| {
                    f.pointer_moved(viewport, f64::from(ev.client_x()), f64::from(ev.client_y()))
                })
                .flatten()
            else {
                return;
            };

            for (node_ref, translation) in refs.iter().zip(translations) {
                if let Some(cell) = node_ref.get_untracked() {
                    let _ = cell.style().set_property("transform", &translation.to_css());
                }
            }
        });

        on_cleanup(move || {
            let _ = field.try_update_value(|f| f.detach());
            handle.remove();
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = cells;
    }
}

/// Reveal each target once it scrolls into view. Revealed targets are
/// unobserved right away; the rest are unobserved on cleanup.
pub fn use_scroll_reveal(targets: Vec<NodeRef<html::Div>>) {
    #[cfg(not(feature = "ssr"))]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::{JsCast, JsValue};

        use crate::core::{RevealChange, RevealTracker};

        type ObserverCallback = dyn FnMut(js_sys::Array, web_sys::IntersectionObserver);

        struct Binding {
            observer: web_sys::IntersectionObserver,
            elements: Rc<Vec<web_sys::Element>>,
            tracker: Rc<RefCell<RevealTracker>>,
            _callback: Closure<ObserverCallback>,
        }

        let binding = StoredValue::new_local(None::<Binding>);

        Effect::new(move |_| {
            if binding.with_value(|b| b.is_some()) {
                return;
            }

            let elements: Vec<web_sys::Element> = targets
                .iter()
                .filter_map(|r| r.get())
                .map(web_sys::Element::from)
                .collect();
            if elements.is_empty() {
                return;
            }

            let tracker = Rc::new(RefCell::new(RevealTracker::new(elements.len())));
            let elements = Rc::new(elements);

            let callback = {
                let tracker = Rc::clone(&tracker);
                let elements = Rc::clone(&elements);
                Closure::<ObserverCallback>::new(
                    move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                        for entry in entries.iter() {
                            let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                            let target = entry.target();
                            let Some(index) = elements.iter().position(|el| *el == target) else {
                                continue;
                            };
                            let change = tracker.borrow_mut().record(index, entry.is_intersecting());
                            if change == RevealChange::Revealed {
                                let _ = target.class_list().add_1(VISIBLE_CLASS);
                                observer.unobserve(&target);
                            }
                        }
                    },
                )
            };

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
            options.set_root_margin(REVEAL_ROOT_MARGIN);

            let observer = match web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            ) {
                Ok(observer) => observer,
                Err(err) => {
                    // Without an observer nothing would ever be revealed
                    leptos::logging::warn!("IntersectionObserver unavailable: {:?}", err);
                    for el in elements.iter() {
                        let _ = el.class_list().add_1(VISIBLE_CLASS);
                    }
                    return;
                }
            };

            for el in elements.iter() {
                observer.observe(el);
            }

            binding.set_value(Some(Binding {
                observer,
                elements,
                tracker,
                _callback: callback,
            }));
        });

        on_cleanup(move || {
            let _ = binding.try_update_value(|b| {
                if let Some(b) = b.take() {
                    for index in b.tracker.borrow_mut().teardown() {
                        b.observer.unobserve(&b.elements[index]);
                    }
                    b.observer.disconnect();
                }
            });
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = targets;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parallax::hero_grid;

    #[test]
    fn test_effects_are_inert_on_the_server() {
        let owner = Owner::new();
        owner.with(|| {
            let cells = hero_grid()
                .into_iter()
                .map(|cell| (NodeRef::<html::Div>::new(), cell))
                .collect();
            use_pointer_parallax(cells);
            use_scroll_reveal(vec![NodeRef::new(), NodeRef::new()]);
        });
        owner.cleanup();
    }

    #[test]
    fn test_reveal_options() {
        assert!(REVEAL_THRESHOLD > 0.0 && REVEAL_THRESHOLD < 1.0);
        assert_eq!(REVEAL_ROOT_MARGIN.split_whitespace().count(), 4);
    }
}
