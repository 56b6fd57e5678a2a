use crate::core::{RenderConfig, SurfaceState};
use crate::render;
use crate::scheduler::{Next, TaskLoop};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;

/// Per-frame work for one mounted background.
pub struct FrameContext {
    pub gpu: render::GpuState,
    pub surface: Rc<RefCell<SurfaceState>>,
    pub config: RenderConfig,
    pub started: Instant,
    pub render_errors: u32,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();
        // Resize/pointer events wrote into `surface` synchronously; this frame
        // picks up whatever they left.
        let (uniforms, width, height) = {
            let mut s = self.surface.borrow_mut();
            s.advance(elapsed);
            (s.uniforms(&self.config), s.drawable_width, s.drawable_height)
        };
        self.gpu.resize_if_needed(width, height);
        if let Err(e) = self.gpu.render(&uniforms) {
            self.render_errors += 1;
            if self.render_errors == 1 {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

/// Start the animation-frame loop. It runs until the returned loop is dropped.
pub fn start_loop(mut frame_ctx: FrameContext) -> TaskLoop {
    TaskLoop::start("plasma", Next::Frame, move || {
        frame_ctx.frame();
        Next::Frame
    })
}
