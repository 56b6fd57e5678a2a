use crate::constants::{HOVERED_CLASS, SCRAMBLE_ATTR, ZOOM_CLASS};
use crate::core::{HoverCard, HoverEffect, StyleTarget};
use crate::dom::{self, EventListener};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

// Push the card's current state onto the card and its overlay.
fn apply(el: &web::HtmlElement, overlay: Option<&web::HtmlElement>, card: &HoverCard) {
    let hovered = card.is_hovered();
    match card.effect() {
        HoverEffect::Zoom => dom::set_class(el, ZOOM_CLASS, true),
        HoverEffect::Evervault | HoverEffect::Tilt => dom::set_class(el, HOVERED_CLASS, hovered),
    }
    for (target, prop, value) in card.style_writes() {
        let style = match target {
            StyleTarget::Card => el.style(),
            StyleTarget::Overlay => match overlay {
                Some(o) => o.style(),
                None => continue,
            },
        };
        _ = style.set_property(prop, &value);
    }
    if hovered && card.effect() == HoverEffect::Evervault {
        _ = overlay.unwrap_or(el).set_attribute(SCRAMBLE_ATTR, card.scramble());
    }
}

/// Pointer-reactive card behaviour attached to one host element.
#[wasm_bindgen]
pub struct HoverCardHandle {
    element: web::HtmlElement,
    overlay: Option<web::HtmlElement>,
    card: Rc<RefCell<HoverCard>>,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl HoverCardHandle {
    /// `effect` is `"evervault"` (default), `"zoom"` or `"tilt"`. The evervault
    /// mask goes on `overlay`; without one only `--pointer-x`/`--pointer-y`
    /// are published on `element` for host CSS.
    #[wasm_bindgen(constructor)]
    pub fn new(
        element: web::HtmlElement,
        effect: Option<String>,
        overlay: Option<web::HtmlElement>,
    ) -> HoverCardHandle {
        let effect = effect
            .as_deref()
            .map(|s| {
                HoverEffect::parse(s).unwrap_or_else(|| {
                    log::warn!("[card] unknown effect `{s}`; using evervault");
                    HoverEffect::default()
                })
            })
            .unwrap_or_default();
        let card = Rc::new(RefCell::new(HoverCard::new(effect)));
        apply(&element, overlay.as_ref(), &card.borrow());

        let mut handle = HoverCardHandle {
            element,
            overlay,
            card,
            listeners: Vec::new(),
        };
        if let Err(e) = handle.wire() {
            log::warn!("[card] listeners not attached: {e:?}");
            handle.listeners.clear();
        }
        handle
    }

    fn wire(&mut self) -> anyhow::Result<()> {
        let (el, ov, card) = (self.element.clone(), self.overlay.clone(), self.card.clone());
        self.listeners
            .push(EventListener::new(&self.element, "pointerenter", move |_| {
                let mut c = card.borrow_mut();
                c.on_enter();
                apply(&el, ov.as_ref(), &c);
            })?);

        let (el, ov, card) = (self.element.clone(), self.overlay.clone(), self.card.clone());
        self.listeners
            .push(EventListener::new(&self.element, "pointermove", move |ev| {
                let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                    return;
                };
                let rect = dom::client_rect(&el);
                let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
                let mut c = card.borrow_mut();
                if c.on_move(client, rect) {
                    apply(&el, ov.as_ref(), &c);
                }
            })?);

        let (el, ov, card) = (self.element.clone(), self.overlay.clone(), self.card.clone());
        self.listeners
            .push(EventListener::new(&self.element, "pointerleave", move |_| {
                let mut c = card.borrow_mut();
                c.on_leave();
                apply(&el, ov.as_ref(), &c);
            })?);
        Ok(())
    }

    #[wasm_bindgen(getter, js_name = isHovered)]
    pub fn is_hovered(&self) -> bool {
        self.card.borrow().is_hovered()
    }

    /// Current decorative scramble text (empty unless evervault).
    #[wasm_bindgen(getter)]
    pub fn scramble(&self) -> String {
        self.card.borrow().scramble().to_string()
    }

    /// Detach listeners and restore the neutral pose.
    pub fn dispose(&mut self) {
        self.listeners.clear();
        let mut c = self.card.borrow_mut();
        c.on_leave();
        apply(&self.element, self.overlay.as_ref(), &c);
    }
}
