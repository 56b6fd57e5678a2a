use super::constants::{INTRO_CHAR_DELAY, INTRO_GLITCH, INTRO_HOLD, INTRO_WELCOME};
use super::typewriter::{Phase, Typewriter};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntroStage {
    Welcome,
    Typing,
    Holding,
    Glitch,
    Complete,
}

impl IntroStage {
    pub fn as_str(self) -> &'static str {
        match self {
            IntroStage::Welcome => "welcome",
            IntroStage::Typing => "typing",
            IntroStage::Holding => "holding",
            IntroStage::Glitch => "glitch",
            IntroStage::Complete => "complete",
        }
    }
}

/// Result of one intro tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntroStep {
    /// Wait before the next tick; `None` once complete.
    pub next: Option<Duration>,
    /// True on exactly one tick: the one entering `Complete`.
    pub completed: bool,
}

/// One-shot landing intro: welcome, type a single line, hold, glitch, done.
#[derive(Clone, Debug)]
pub struct IntroSequence {
    stage: IntroStage,
    line: Typewriter,
    completion_reported: bool,
}

impl IntroSequence {
    pub fn new(line: &str) -> Self {
        Self {
            stage: IntroStage::Welcome,
            line: Typewriter::new([line], INTRO_CHAR_DELAY, Duration::ZERO),
            completion_reported: false,
        }
    }

    pub fn initial_delay(&self) -> Option<Duration> {
        match self.stage {
            IntroStage::Complete => None,
            _ => Some(INTRO_WELCOME),
        }
    }

    pub fn step(&mut self) -> IntroStep {
        let next = match self.stage {
            IntroStage::Welcome => {
                self.stage = IntroStage::Typing;
                self.after_line_progress(self.line.initial_delay())
            }
            IntroStage::Typing => {
                let next = self.line.step();
                self.after_line_progress(next)
            }
            IntroStage::Holding => {
                self.stage = IntroStage::Glitch;
                Some(INTRO_GLITCH)
            }
            IntroStage::Glitch | IntroStage::Complete => {
                self.stage = IntroStage::Complete;
                None
            }
        };
        let completed = self.stage == IntroStage::Complete && !self.completion_reported;
        if completed {
            self.completion_reported = true;
        }
        IntroStep { next, completed }
    }

    // The line is one-shot: as soon as the typewriter would pause, hold instead.
    fn after_line_progress(&mut self, next: Option<Duration>) -> Option<Duration> {
        match self.line.phase() {
            Phase::Typing => next,
            _ => {
                self.stage = IntroStage::Holding;
                Some(INTRO_HOLD)
            }
        }
    }

    /// Stop without reporting completion.
    pub fn cancel(&mut self) {
        self.line.cancel();
        self.completion_reported = true;
        self.stage = IntroStage::Complete;
    }

    #[inline]
    pub fn stage(&self) -> IntroStage {
        self.stage
    }

    /// Text shown by the terminal line; empty during the welcome stage.
    pub fn text(&self) -> &str {
        match self.stage {
            IntroStage::Welcome => "",
            _ => self.line.visible_text(),
        }
    }
}
