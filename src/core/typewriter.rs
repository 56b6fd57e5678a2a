use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Revealing the current phrase one character per step.
    Typing,
    /// Current phrase fully shown; next step clears it and moves on.
    Pausing,
    /// No phrases to show. Nothing is ever scheduled.
    Idle,
    /// Stopped by the owner. Terminal until `restart`.
    Cancelled,
}

/// Reveals phrases one character at a time and cycles through them forever.
///
/// The owner calls [`Typewriter::step`] after waiting the returned delay.
/// `visible_text` is always the `char_index`-character prefix of the current
/// phrase.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    char_delay: Duration,
    pause: Duration,
    phrase_index: usize,
    char_index: usize,
    visible: String,
    phase: Phase,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I, char_delay: Duration, pause: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = phrases
            .into_iter()
            .map(|p| p.as_ref().chars().collect())
            .collect();
        let mut tw = Self {
            phrases,
            char_delay,
            pause,
            phrase_index: 0,
            char_index: 0,
            visible: String::new(),
            phase: Phase::Idle,
        };
        tw.enter_phrase(0);
        tw
    }

    fn current_len(&self) -> usize {
        self.phrases.get(self.phrase_index).map_or(0, Vec::len)
    }

    // Start phrase `index` with nothing visible. Empty phrases skip typing.
    fn enter_phrase(&mut self, index: usize) {
        self.visible.clear();
        self.char_index = 0;
        if self.phrases.is_empty() {
            self.phrase_index = 0;
            self.phase = Phase::Idle;
            return;
        }
        self.phrase_index = index % self.phrases.len();
        self.phase = if self.current_len() == 0 {
            Phase::Pausing
        } else {
            Phase::Typing
        };
    }

    /// Delay before the first `step` from the current state.
    pub fn initial_delay(&self) -> Option<Duration> {
        match self.phase {
            Phase::Typing => Some(self.char_delay),
            Phase::Pausing => Some(self.pause),
            Phase::Idle | Phase::Cancelled => None,
        }
    }

    /// Advance one tick. Returns the delay until the next tick, or `None`
    /// when there is nothing left to schedule.
    pub fn step(&mut self) -> Option<Duration> {
        match self.phase {
            Phase::Typing => {
                let ch = self.phrases[self.phrase_index][self.char_index];
                self.visible.push(ch);
                self.char_index += 1;
                if self.char_index >= self.current_len() {
                    self.phase = Phase::Pausing;
                    Some(self.pause)
                } else {
                    Some(self.char_delay)
                }
            }
            Phase::Pausing => {
                self.enter_phrase(self.phrase_index + 1);
                self.initial_delay()
            }
            Phase::Idle | Phase::Cancelled => None,
        }
    }

    /// Stop for good; no further step does anything.
    pub fn cancel(&mut self) {
        self.phase = Phase::Cancelled;
    }

    /// Back to the first phrase with nothing visible.
    pub fn restart(&mut self) {
        self.enter_phrase(0);
    }

    #[inline]
    pub fn visible_text(&self) -> &str {
        &self.visible
    }

    #[inline]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    #[inline]
    pub fn char_index(&self) -> usize {
        self.char_index
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The phrase currently being typed, if any.
    pub fn current_phrase(&self) -> Option<String> {
        self.phrases
            .get(self.phrase_index)
            .map(|p| p.iter().collect())
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }
}
