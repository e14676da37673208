//! The three-phase scramble animation controller.
//!
//! An animation converges on a target string by passing through
//! pseudo-random intermediate states:
//!
//! 1. **Encoding** - the currently displayed text is scrambled in place,
//!    each position redrawn with random characters once its countdown
//!    hits zero, until every countdown has expired.
//! 2. **Filling** - the displayed string grows or shrinks by one
//!    character per visible step, fully re-randomized each time, until
//!    its length matches the target length.
//! 3. **Decoding** - each position keeps flickering with random
//!    characters until its countdown expires, then freezes on the true
//!    target character. The animation ends when the displayed text
//!    equals the target.
//!
//! The phases run at different visual cadences against a constant-rate
//! tick scheduler: one visible step every 3rd tick while encoding, every
//! 2nd while filling, every 4th while decoding. A single cycle counter is
//! carried across phase transitions, so transitions themselves never emit
//! a visible step.

use crate::charset::Charset;
use crate::engine::scheduler::{TickHandle, TickScheduler};
use crate::rng::{FastrandSource, RandomSource};

/// Sink for every intermediate string the animation produces.
pub type UpdateCallback = Box<dyn FnMut(&str)>;

/// Ticks consumed per visible step, per phase
const ENCODE_TICKS_PER_STEP: u8 = 3;
const FILL_TICKS_PER_STEP: u8 = 2;
const DECODE_TICKS_PER_STEP: u8 = 4;

/// Animation phase. Exactly one is active per engine at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Encoding,
    Filling,
    Decoding,
}

/// Stateful animation controller for a single text target.
///
/// Call [`scramble`](Self::scramble) to begin converging toward a target
/// string, then [`tick`](Self::tick) whenever the scheduler fires. Each
/// visible step is delivered synchronously to the update callback.
/// Restarting while an animation is in flight cancels the outstanding
/// tick before rescheduling, so no frame is ever delivered twice.
pub struct Scrambler<R: RandomSource = FastrandSource> {
    max_randomization_steps: u32,
    charset: Charset,
    rng: R,
    target_text: Vec<char>,
    current_text: Vec<char>,
    encode_counters: Vec<u32>,
    decode_counters: Vec<u32>,
    on_update: Option<UpdateCallback>,
    pending_tick: Option<TickHandle>,
    frame_cycle: u8,
    phase: Phase,
}

impl Scrambler<FastrandSource> {
    /// Engine with the default charset and a thread-local RNG
    pub fn new() -> Self {
        Self::with_parts(Charset::default(), FastrandSource::new())
    }

    /// Engine with a custom charset and a thread-local RNG
    pub fn with_charset(charset: Charset) -> Self {
        Self::with_parts(charset, FastrandSource::new())
    }
}

impl Default for Scrambler<FastrandSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> Scrambler<R> {
    /// Engine with an injected random source (deterministic in tests)
    pub fn with_parts(charset: Charset, rng: R) -> Self {
        Self {
            max_randomization_steps: 14,
            charset,
            rng,
            target_text: Vec::new(),
            current_text: Vec::new(),
            encode_counters: Vec::new(),
            decode_counters: Vec::new(),
            on_update: None,
            pending_tick: None,
            frame_cycle: 0,
            phase: Phase::Idle,
        }
    }

    /// Set the countdown upper bound for future animations.
    ///
    /// Counters already drawn for an in-flight animation are not redrawn.
    /// Zero is clamped to one.
    pub fn configure(&mut self, max_steps: u32) {
        self.max_randomization_steps = max_steps.max(1);
    }

    /// Cancel any pending tick and clear all per-animation state.
    ///
    /// Idempotent. The update callback receives no further calls after
    /// this returns.
    pub fn reset(&mut self, scheduler: &mut dyn TickScheduler) {
        if let Some(handle) = self.pending_tick.take() {
            scheduler.cancel(handle);
        }
        self.target_text.clear();
        self.current_text.clear();
        self.encode_counters.clear();
        self.decode_counters.clear();
        self.on_update = None;
        self.frame_cycle = 0;
        self.phase = Phase::Idle;
    }

    /// Begin a new animation converging toward `target`.
    ///
    /// An animation already in flight is canceled first; its callback
    /// receives no further calls. `on_update` may be `None`, in which
    /// case the animation still runs but delivers nothing.
    pub fn scramble(
        &mut self,
        target: &str,
        on_update: Option<UpdateCallback>,
        scheduler: &mut dyn TickScheduler,
    ) {
        if let Some(handle) = self.pending_tick.take() {
            scheduler.cancel(handle);
        }
        self.target_text = target.chars().collect();
        self.current_text.clear();
        self.encode_counters = self.draw_counters(self.current_text.len());
        self.decode_counters = self.draw_counters(self.target_text.len());
        self.on_update = on_update;
        self.frame_cycle = 0;
        self.phase = Phase::Encoding;
        tracing::debug!(target_len = self.target_text.len(), "starting scramble");
        self.pending_tick = Some(scheduler.schedule());
    }

    /// Execute one scheduled tick.
    ///
    /// A no-op unless a tick is actually pending, which makes stray
    /// invocations after `reset` or a restart harmless.
    pub fn tick(&mut self, scheduler: &mut dyn TickScheduler) {
        if self.pending_tick.take().is_none() {
            return;
        }
        match self.phase {
            Phase::Idle => {}
            Phase::Encoding => self.encoding_step(scheduler),
            Phase::Filling => self.filling_step(scheduler),
            Phase::Decoding => self.decoding_step(scheduler),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// The text last delivered (or converged on)
    pub fn current_text(&self) -> String {
        self.current_text.iter().collect()
    }

    fn encoding_step(&mut self, scheduler: &mut dyn TickScheduler) {
        if self.encode_counters.iter().all(|&c| c == 0) {
            tracing::debug!("encoding complete, entering filling phase");
            self.phase = Phase::Filling;
            self.pending_tick = Some(scheduler.schedule());
            return;
        }

        if self.frame_cycle == 0 {
            for i in 0..self.encode_counters.len() {
                if self.encode_counters[i] != 0 {
                    self.encode_counters[i] -= 1;
                } else {
                    self.current_text[i] = self.charset.sample(&mut self.rng);
                }
            }
            self.deliver();
        }

        self.frame_cycle = (self.frame_cycle + 1) % ENCODE_TICKS_PER_STEP;
        self.pending_tick = Some(scheduler.schedule());
    }

    fn filling_step(&mut self, scheduler: &mut dyn TickScheduler) {
        if self.frame_cycle == 0 {
            if self.current_text.len() == self.target_text.len() {
                tracing::debug!("filling complete, entering decoding phase");
                self.phase = Phase::Decoding;
                self.pending_tick = Some(scheduler.schedule());
                return;
            }
            let next_len = if self.current_text.len() < self.target_text.len() {
                self.current_text.len() + 1
            } else {
                self.current_text.len() - 1
            };
            self.current_text = self.random_chars(next_len);
            self.deliver();
        }

        self.frame_cycle = (self.frame_cycle + 1) % FILL_TICKS_PER_STEP;
        self.pending_tick = Some(scheduler.schedule());
    }

    fn decoding_step(&mut self, scheduler: &mut dyn TickScheduler) {
        if self.current_text == self.target_text {
            tracing::debug!("animation converged");
            self.phase = Phase::Idle;
            return;
        }

        if self.frame_cycle == 0 {
            let mut revealed = Vec::with_capacity(self.target_text.len());
            for i in 0..self.decode_counters.len() {
                if self.decode_counters[i] != 0 {
                    revealed.push(self.charset.sample(&mut self.rng));
                    self.decode_counters[i] -= 1;
                } else {
                    revealed.push(self.target_text[i]);
                }
            }
            self.current_text = revealed;
            self.deliver();
        }

        self.frame_cycle = (self.frame_cycle + 1) % DECODE_TICKS_PER_STEP;
        self.pending_tick = Some(scheduler.schedule());
    }

    /// Per-position countdowns, each uniform in `1..=max_randomization_steps`
    fn draw_counters(&mut self, len: usize) -> Vec<u32> {
        let max = self.max_randomization_steps as usize;
        (0..len)
            .map(|_| self.rng.next_index(max) as u32 + 1)
            .collect()
    }

    fn random_chars(&mut self, len: usize) -> Vec<char> {
        (0..len).map(|_| self.charset.sample(&mut self.rng)).collect()
    }

    fn deliver(&mut self) {
        tracing::trace!(phase = ?self.phase, len = self.current_text.len(), "visible step");
        if let Some(callback) = self.on_update.as_mut() {
            let text: String = self.current_text.iter().collect();
            callback(&text);
        }
    }
}
