//! Target binder: enumerates the on-screen text targets and wires one
//! scramble engine to each target's display line.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use scrambler_core::{AppConfig, Charset, FrameScheduler, Phase, Scrambler};

use crate::theme::Theme;

/// Built-in phrase sets for the demo board
const DEMO_SETS: &[&[&str]] = &[
    &["THE QUICK BROWN FOX", "JUMPS OVER", "THE LAZY DOG"],
    &["HELLO, TERMINAL", "ALL TEXT WANTS", "TO BE SCRAMBLED"],
    &["INCOMING", "TRANSMISSION", "STAND BY"],
];

/// One animated text target: the string it converges to, the text
/// currently on screen, and the engine/scheduler pair driving it.
///
/// The display cell is shared between the widget (reader) and the
/// engine's update callback (writer); the whole app is single-threaded,
/// so an `Rc<RefCell<_>>` is the entire synchronization story.
pub struct ScrambleTarget {
    pub goal: String,
    display: Rc<RefCell<String>>,
    engine: Scrambler,
    scheduler: FrameScheduler,
}

impl ScrambleTarget {
    fn new(goal: String, config: &AppConfig, charset: Charset) -> Self {
        let mut engine = Scrambler::with_charset(charset);
        engine.configure(config.animation.effective_max_steps());
        Self {
            goal,
            display: Rc::new(RefCell::new(String::new())),
            engine,
            scheduler: FrameScheduler::new(config.animation.tick_duration()),
        }
    }

    pub fn display_text(&self) -> String {
        self.display.borrow().clone()
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }
}

/// Application state
pub struct App {
    pub targets: Vec<ScrambleTarget>,
    pub theme: Theme,
    pub should_quit: bool,
    config: AppConfig,
    charset: Charset,
    /// Remaining demo sets to rotate through; empty when the user
    /// supplied their own lines
    demo_rotation: bool,
    demo_index: usize,
}

impl App {
    /// Build the board from user-supplied lines, or the demo rotation
    /// when none are given.
    pub fn new(config: AppConfig, theme: Theme, lines: Vec<String>) -> scrambler_core::Result<Self> {
        let charset = match &config.animation.charset {
            Some(chars) => Charset::new(chars)?,
            None => Charset::default(),
        };
        let demo_rotation = lines.is_empty();
        let lines = if demo_rotation {
            DEMO_SETS[0].iter().map(|s| s.to_string()).collect()
        } else {
            lines
        };

        let mut app = Self {
            targets: Vec::new(),
            theme,
            should_quit: false,
            config,
            charset,
            demo_rotation,
            demo_index: 0,
        };
        app.bind(lines);
        Ok(app)
    }

    /// Create one engine per target line (the binder step)
    fn bind(&mut self, lines: Vec<String>) {
        self.targets = lines
            .into_iter()
            .map(|goal| ScrambleTarget::new(goal, &self.config, self.charset.clone()))
            .collect();
    }

    /// Start (or restart) the animation on every target
    pub fn play(&mut self) {
        tracing::debug!(targets = self.targets.len(), "starting board animation");
        for target in &mut self.targets {
            let cell = target.display.clone();
            let callback = Box::new(move |text: &str| {
                *cell.borrow_mut() = text.to_string();
            });
            target
                .engine
                .scramble(&target.goal, Some(callback), &mut target.scheduler);
        }
    }

    /// Fire every target's due tick. Each target runs its own
    /// independent tick sequence.
    pub fn update(&mut self, now: Instant) {
        for target in &mut self.targets {
            if target.scheduler.fire(now) {
                target.engine.tick(&mut target.scheduler);
            }
        }
    }

    /// Reset every engine, blanking the board
    pub fn clear(&mut self) {
        for target in &mut self.targets {
            target.engine.reset(&mut target.scheduler);
            target.display.borrow_mut().clear();
        }
    }

    /// Advance to the next phrase set (demo mode) and replay
    pub fn shuffle(&mut self) {
        if self.demo_rotation {
            self.demo_index = (self.demo_index + 1) % DEMO_SETS.len();
            let lines = DEMO_SETS[self.demo_index]
                .iter()
                .map(|s| s.to_string())
                .collect();
            self.bind(lines);
        }
        self.play();
    }

    /// Time until the soonest armed tick deadline across all targets,
    /// if any engine still has one. Drives the event loop's poll timeout.
    pub fn time_until_next_tick(&self, now: Instant) -> Option<std::time::Duration> {
        self.targets
            .iter()
            .filter_map(|t| t.scheduler.time_until_due(now))
            .min()
    }

    /// Whether any engine still has work scheduled
    pub fn is_animating(&self) -> bool {
        self.targets.iter().any(|t| t.engine.is_running())
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
