use crate::core::constants::{DEFAULT_CHAR_DELAY, DEFAULT_PHRASE_PAUSE, INTRO_LINE};
use crate::core::{IntroSequence, Typewriter};
use crate::scheduler::{Next, TaskLoop};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;

fn millis_or(ms: Option<f64>, default: Duration) -> Duration {
    match ms {
        Some(ms) if ms >= 0.0 => Duration::try_from_secs_f64(ms / 1000.0).unwrap_or(default),
        _ => default,
    }
}

fn emit(callback: &js_sys::Function, args: &[JsValue]) {
    let result = match args {
        [a] => callback.call1(&JsValue::NULL, a),
        [a, b] => callback.call2(&JsValue::NULL, a, b),
        _ => callback.call0(&JsValue::NULL),
    };
    if let Err(e) = result {
        log::warn!("host callback threw: {:?}", e);
    }
}

/// Cycling typewriter whose visible text is pushed to `onUpdate(text)`.
#[wasm_bindgen]
pub struct TypewriterHandle {
    machine: Rc<RefCell<Typewriter>>,
    task: Option<TaskLoop>,
}

#[wasm_bindgen]
impl TypewriterHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(
        phrases: js_sys::Array,
        char_delay_ms: Option<f64>,
        pause_ms: Option<f64>,
        on_update: js_sys::Function,
    ) -> TypewriterHandle {
        let phrases: Vec<String> = phrases.iter().filter_map(|v| v.as_string()).collect();
        let machine = Rc::new(RefCell::new(Typewriter::new(
            phrases,
            millis_or(char_delay_ms, DEFAULT_CHAR_DELAY),
            millis_or(pause_ms, DEFAULT_PHRASE_PAUSE),
        )));
        let mut handle = TypewriterHandle {
            machine,
            task: None,
        };
        handle.start(on_update);
        handle
    }

    fn start(&mut self, on_update: js_sys::Function) {
        let (first, text) = {
            let m = self.machine.borrow();
            (m.initial_delay(), m.visible_text().to_string())
        };
        emit(&on_update, &[JsValue::from_str(&text)]);
        let machine = self.machine.clone();
        self.task = Some(TaskLoop::start("typewriter", first.into(), move || {
            let (next, text) = {
                let mut m = machine.borrow_mut();
                let next = m.step();
                (next, m.visible_text().to_string())
            };
            emit(&on_update, &[JsValue::from_str(&text)]);
            next.into()
        }));
    }

    /// Start over from the first phrase, reporting to `on_update`.
    pub fn restart(&mut self, on_update: js_sys::Function) {
        self.task.take();
        self.machine.borrow_mut().restart();
        self.start(on_update);
    }

    /// Stop; no callback fires after this returns.
    pub fn cancel(&mut self) {
        self.task.take();
        self.machine.borrow_mut().cancel();
    }

    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.machine.borrow().visible_text().to_string()
    }

    #[wasm_bindgen(getter, js_name = phraseIndex)]
    pub fn phrase_index(&self) -> usize {
        self.machine.borrow().phrase_index()
    }
}

/// Landing intro. Reports `onUpdate(stage, text)` on every tick and calls
/// `onComplete()` exactly once when the glitch stage finishes.
#[wasm_bindgen]
pub struct IntroHandle {
    intro: Rc<RefCell<IntroSequence>>,
    task: Option<TaskLoop>,
}

#[wasm_bindgen]
impl IntroHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(
        line: Option<String>,
        on_update: js_sys::Function,
        on_complete: js_sys::Function,
    ) -> IntroHandle {
        let line = line.unwrap_or_else(|| INTRO_LINE.to_string());
        let intro = Rc::new(RefCell::new(IntroSequence::new(&line)));
        let first = intro.borrow().initial_delay();
        {
            let i = intro.borrow();
            emit(
                &on_update,
                &[JsValue::from_str(i.stage().as_str()), JsValue::from_str(i.text())],
            );
        }
        let intro_t = intro.clone();
        let task = TaskLoop::start("intro", first.into(), move || {
            let (step, stage, text) = {
                let mut i = intro_t.borrow_mut();
                let step = i.step();
                (step, i.stage().as_str(), i.text().to_string())
            };
            emit(&on_update, &[JsValue::from_str(stage), JsValue::from_str(&text)]);
            if step.completed {
                log::debug!("[intro] complete");
                emit(&on_complete, &[]);
            }
            Next::from(step.next)
        });
        IntroHandle {
            intro,
            task: Some(task),
        }
    }

    /// Abandon the intro; `onComplete` will not fire.
    pub fn cancel(&mut self) {
        self.task.take();
        self.intro.borrow_mut().cancel();
    }

    #[wasm_bindgen(getter)]
    pub fn stage(&self) -> String {
        self.intro.borrow().stage().as_str().to_string()
    }
}
