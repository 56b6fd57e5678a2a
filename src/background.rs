use crate::constants::CANVAS_STYLE;
use crate::core::{Lifecycle, RenderConfig, RenderOptions, SurfaceState};
use crate::dom::{self, EventListener, ResizeWatch};
use crate::frame::{self, FrameContext};
use crate::render::GpuState;
use crate::scheduler::TaskLoop;
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

fn get(obj: &JsValue, key: &str) -> Option<JsValue> {
    js_sys::Reflect::get(obj, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Read the host's option object. Missing or wrongly-typed fields stay `None`.
pub(crate) fn read_options(options: &JsValue) -> RenderOptions {
    if !options.is_object() {
        return RenderOptions::default();
    }
    RenderOptions {
        accent_color: get(options, "accentColor").and_then(|v| v.as_string()),
        speed: get(options, "speed").and_then(|v| v.as_f64()),
        direction: get(options, "direction").and_then(|v| v.as_string()),
        scale: get(options, "scale").and_then(|v| v.as_f64()),
        opacity: get(options, "opacity").and_then(|v| v.as_f64()),
        pointer_reactive: get(options, "pointerReactive").and_then(|v| v.as_bool()),
    }
}

/// Everything one mounted background owns.
struct Mount {
    lifecycle: Lifecycle,
    container: web::HtmlElement,
    canvas: Option<web::HtmlCanvasElement>,
    surface: Rc<RefCell<SurfaceState>>,
    listeners: Vec<EventListener>,
    resize: Option<ResizeWatch>,
    frame_loop: Option<TaskLoop>,
}

impl Mount {
    fn new(container: web::HtmlElement) -> Self {
        Self {
            lifecycle: Lifecycle::Uninitialized,
            container,
            canvas: None,
            surface: Rc::new(RefCell::new(SurfaceState::default())),
            listeners: Vec::new(),
            resize: None,
            frame_loop: None,
        }
    }

    fn dispose(&mut self) {
        if !self.lifecycle.dispose() {
            return;
        }
        self.frame_loop.take();
        self.listeners.clear();
        self.resize.take();
        if let Some(canvas) = self.canvas.take() {
            dom::detach(&canvas);
        }
        log::debug!("[plasma] disposed");
    }
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.dispose();
    }
}

// Measure the container and push the new drawable size to the canvas.
fn sync_size(
    container: &web::HtmlElement,
    canvas: &web::HtmlCanvasElement,
    surface: &RefCell<SurfaceState>,
) {
    let rect = dom::client_rect(container);
    if !(rect.width.is_finite() && rect.height.is_finite()) {
        return;
    }
    let Ok(mut s) = surface.try_borrow_mut() else {
        return;
    };
    if s.resize(rect.width as f64, rect.height as f64, dom::device_pixel_ratio()) {
        canvas.set_width(s.drawable_width);
        canvas.set_height(s.drawable_height);
    }
}

fn wire_dom(mount: &mut Mount, config: &RenderConfig) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {e:?}"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    _ = canvas.set_attribute("style", CANVAS_STYLE);
    _ = canvas.set_attribute("aria-hidden", "true");
    mount
        .container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {e:?}"))?;
    mount.canvas = Some(canvas.clone());

    sync_size(&mount.container, &canvas, &mount.surface);

    let (container_r, canvas_r, surface_r) =
        (mount.container.clone(), canvas.clone(), mount.surface.clone());
    match ResizeWatch::new(&mount.container, move || {
        sync_size(&container_r, &canvas_r, &surface_r)
    }) {
        Ok(w) => mount.resize = Some(w),
        Err(e) => log::warn!("[plasma] no resize tracking: {e:?}"),
    }

    if config.pointer_reactive {
        let container_p = mount.container.clone();
        let surface_p = mount.surface.clone();
        let listener = EventListener::new(&mount.container, "pointermove", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let rect = dom::client_rect(&container_p);
            if let Ok(mut s) = surface_p.try_borrow_mut() {
                s.set_pointer(ev.client_x() as f32 - rect.left, ev.client_y() as f32 - rect.top);
            }
        })?;
        mount.listeners.push(listener);
    }
    Ok(canvas)
}

fn mount(container: web::HtmlElement, config: RenderConfig) -> Rc<RefCell<Mount>> {
    let mount = Rc::new(RefCell::new(Mount::new(container)));
    let canvas = {
        let mut m = mount.borrow_mut();
        m.lifecycle.begin();
        match wire_dom(&mut m, &config) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("[plasma] mount failed, background disabled: {e:?}");
                m.dispose();
                return mount.clone();
            }
        }
    };
    log::debug!("[plasma] initializing {:?}", config);

    let weak: Weak<RefCell<Mount>> = Rc::downgrade(&mount);
    spawn_local(async move {
        let gpu = GpuState::new(&canvas).await;
        let Some(mount) = weak.upgrade() else {
            return;
        };
        let mut m = mount.borrow_mut();
        match gpu {
            Ok(gpu) => {
                if !m.lifecycle.mark_running() {
                    // Disposed while the device request was in flight.
                    return;
                }
                let ctx = FrameContext {
                    gpu,
                    surface: m.surface.clone(),
                    config,
                    started: Instant::now(),
                    render_errors: 0,
                };
                m.frame_loop = Some(frame::start_loop(ctx));
                log::info!("[plasma] running");
            }
            Err(e) => {
                log::warn!("[plasma] WebGPU unavailable, background disabled: {e:?}");
                m.dispose();
            }
        }
    });
    mount
}

/// Animated plasma background mounted into a host container.
#[wasm_bindgen]
pub struct PlasmaBackground {
    mount: Rc<RefCell<Mount>>,
}

#[wasm_bindgen]
impl PlasmaBackground {
    /// Mount into `container`. `options` is an optional plain object:
    /// `{ accentColor, speed, direction, scale, opacity, pointerReactive }`.
    #[wasm_bindgen(constructor)]
    pub fn new(container: web::HtmlElement, options: JsValue) -> PlasmaBackground {
        let config = RenderConfig::from_options(&read_options(&options));
        PlasmaBackground {
            mount: mount(container, config),
        }
    }

    /// Replace the configuration. Tears down every resource and mounts anew.
    pub fn reconfigure(&mut self, options: JsValue) {
        let config = RenderConfig::from_options(&read_options(&options));
        let container = self.mount.borrow().container.clone();
        self.mount.borrow_mut().dispose();
        self.mount = mount(container, config);
    }

    /// Stop rendering and release everything. Safe to call repeatedly.
    pub fn dispose(&mut self) {
        self.mount.borrow_mut().dispose();
    }

    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        self.mount.borrow().lifecycle.as_str().to_string()
    }
}
