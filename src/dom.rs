use crate::core::plasma::effective_dpr;
use crate::core::Rect;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    effective_dpr(web::window().map_or(1.0, |w| w.device_pixel_ratio()))
}

#[inline]
pub fn client_rect(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect {
        left: r.left() as f32,
        top: r.top() as f32,
        width: r.width() as f32,
        height: r.height() as f32,
    }
}

#[inline]
pub fn viewport_height() -> f32 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0) as f32
}

/// Remove `node` from its parent. Nodes already detached by the host are fine.
pub fn detach(node: &web::Node) {
    if let Some(parent) = node.parent_node() {
        _ = parent.remove_child(node);
    }
}

/// Set or clear a class on `el`.
#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// An event listener that is removed from its target when dropped.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {event} listener: {e:?}"))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Resize notifications for one element.
///
/// Prefers a `ResizeObserver` on the element; falls back to the window
/// `resize` event when observers are unavailable. Disconnects on drop.
pub enum ResizeWatch {
    Observer {
        observer: web::ResizeObserver,
        _closure: Closure<dyn FnMut()>,
    },
    Window(EventListener),
}

impl ResizeWatch {
    pub fn new(el: &web::Element, on_resize: impl FnMut() + 'static) -> anyhow::Result<Self> {
        let on_resize: Rc<RefCell<dyn FnMut()>> = Rc::new(RefCell::new(on_resize));
        let cb = on_resize.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Ok(mut f) = cb.try_borrow_mut() {
                f();
            }
        }) as Box<dyn FnMut()>);
        match web::ResizeObserver::new(closure.as_ref().unchecked_ref()) {
            Ok(observer) => {
                observer.observe(el);
                Ok(ResizeWatch::Observer {
                    observer,
                    _closure: closure,
                })
            }
            Err(e) => {
                log::warn!("[dom] ResizeObserver unavailable ({e:?}); using window resize");
                let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
                let listener = EventListener::new(&window, "resize", move |_| {
                    if let Ok(mut f) = on_resize.try_borrow_mut() {
                        f();
                    }
                })?;
                Ok(ResizeWatch::Window(listener))
            }
        }
    }
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        if let ResizeWatch::Observer { observer, .. } = self {
            observer.disconnect();
        }
    }
}
