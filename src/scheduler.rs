use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// What a task loop should do after a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Next {
    /// Run again on the next display refresh.
    Frame,
    /// Run again after a delay.
    After(Duration),
    Stop,
}

impl From<Option<Duration>> for Next {
    fn from(delay: Option<Duration>) -> Self {
        delay.map_or(Next::Stop, Next::After)
    }
}

#[derive(Clone, Copy)]
enum Pending {
    Frame(i32),
    Timeout(i32),
}

struct LoopShared {
    label: &'static str,
    cancelled: Cell<bool>,
    pending: Cell<Option<Pending>>,
    callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl LoopShared {
    fn schedule(&self, next: Next) {
        if self.cancelled.get() {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        let callback = self.callback.borrow();
        let Some(cb) = callback.as_ref() else {
            return;
        };
        let f: &js_sys::Function = cb.as_ref().unchecked_ref();
        let scheduled = match next {
            Next::Frame => window.request_animation_frame(f).map(Pending::Frame),
            Next::After(delay) => {
                let ms = delay.as_millis().min(i32::MAX as u128) as i32;
                window
                    .set_timeout_with_callback_and_timeout_and_arguments_0(f, ms)
                    .map(Pending::Timeout)
            }
            Next::Stop => return,
        };
        match scheduled {
            Ok(p) => self.pending.set(Some(p)),
            Err(e) => log::warn!("[{}] could not schedule: {:?}", self.label, e),
        }
    }

    fn cancel(&self) {
        self.cancelled.set(true);
        let Some(window) = web::window() else {
            return;
        };
        match self.pending.take() {
            Some(Pending::Frame(id)) => {
                _ = window.cancel_animation_frame(id);
            }
            Some(Pending::Timeout(id)) => window.clear_timeout_with_handle(id),
            None => {}
        }
    }
}

/// A self-rescheduling task driven by animation frames or timeouts.
///
/// The step closure runs once per wake-up and says when to wake next.
/// Dropping the loop clears any pending browser handle and releases the
/// closure; no step runs afterwards.
pub struct TaskLoop {
    shared: Rc<LoopShared>,
}

impl TaskLoop {
    pub fn start(label: &'static str, first: Next, mut step: impl FnMut() -> Next + 'static) -> Self {
        let shared = Rc::new(LoopShared {
            label,
            cancelled: Cell::new(false),
            pending: Cell::new(None),
            callback: RefCell::new(None),
        });
        let weak: Weak<LoopShared> = Rc::downgrade(&shared);
        let closure = Closure::wrap(Box::new(move || {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            shared.pending.set(None);
            if shared.cancelled.get() {
                return;
            }
            let next = step();
            shared.schedule(next);
        }) as Box<dyn FnMut()>);
        *shared.callback.borrow_mut() = Some(closure);
        shared.schedule(first);
        log::debug!("[{label}] loop started");
        Self { shared }
    }
}

impl Drop for TaskLoop {
    fn drop(&mut self) {
        self.shared.cancel();
        log::debug!("[{}] loop stopped", self.shared.label);
    }
}
