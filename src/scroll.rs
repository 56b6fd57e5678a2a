use crate::constants::REVEALED_CLASS;
use crate::core::constants::REVEAL_THRESHOLD;
use crate::core::RevealTracker;
use crate::dom::{self, EventListener};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use web_sys as web;

struct Reveal {
    element: web::Element,
    tracker: RefCell<RevealTracker>,
    listeners: RefCell<Vec<EventListener>>,
}

impl Reveal {
    fn check(&self) {
        let rect = dom::client_rect(&self.element);
        let settled = {
            let Ok(mut t) = self.tracker.try_borrow_mut() else {
                return;
            };
            if let Some(revealed) = t.update(rect.top, rect.height, dom::viewport_height()) {
                dom::set_class(&self.element, REVEALED_CLASS, revealed);
            }
            t.is_settled()
        };
        if settled {
            // wasm-bindgen defers freeing a closure that is still running.
            let detached = self.listeners.take();
            if !detached.is_empty() {
                log::debug!("[reveal] settled, listeners detached");
            }
        }
    }
}

/// Toggles `is-revealed` on an element as it scrolls into view.
#[wasm_bindgen]
pub struct ScrollReveal {
    shared: Rc<Reveal>,
}

#[wasm_bindgen]
impl ScrollReveal {
    #[wasm_bindgen(constructor)]
    pub fn new(element: web::Element, threshold: Option<f32>, once: Option<bool>) -> ScrollReveal {
        let shared = Rc::new(Reveal {
            element,
            tracker: RefCell::new(RevealTracker::new(
                threshold.unwrap_or(REVEAL_THRESHOLD),
                once.unwrap_or(true),
            )),
            listeners: RefCell::new(Vec::new()),
        });
        shared.check();
        if shared.tracker.borrow().is_settled() {
            return ScrollReveal { shared };
        }

        if let Some(window) = web::window() {
            for event in ["scroll", "resize"] {
                let weak: Weak<Reveal> = Rc::downgrade(&shared);
                let listener = EventListener::new(&window, event, move |_| {
                    if let Some(r) = weak.upgrade() {
                        r.check();
                    }
                });
                match listener {
                    Ok(l) => shared.listeners.borrow_mut().push(l),
                    Err(e) => log::warn!("[reveal] {e:?}"),
                }
            }
        }
        ScrollReveal { shared }
    }

    #[wasm_bindgen(getter)]
    pub fn revealed(&self) -> bool {
        self.shared.tracker.borrow().is_revealed()
    }

    pub fn dispose(&mut self) {
        self.shared.listeners.take();
    }
}
