//! Scramble animation engine
//!
//! Drives the transition of a text string from its current rendered form
//! into a target string through pseudo-random intermediate states,
//! revealing the target character by character.
//!
//! - `scheduler` - Tick scheduling abstraction (manual clock for tests,
//!   deadline-armed clock for the terminal loop)
//! - `scrambler` - The three-phase animation controller
//!
//! # Usage
//!
//! ```ignore
//! use scrambler_core::{FrameScheduler, Scrambler};
//!
//! let mut scheduler = FrameScheduler::new(Duration::from_millis(16));
//! let mut engine = Scrambler::new();
//!
//! engine.scramble("HELLO", Some(Box::new(|text| println!("{text}"))), &mut scheduler);
//!
//! // In the main loop, fire ripe ticks
//! if scheduler.fire(Instant::now()) {
//!     engine.tick(&mut scheduler);
//! }
//! ```

pub mod scheduler;
pub mod scrambler;

pub use scheduler::{FrameScheduler, ManualScheduler, TickHandle, TickScheduler};
pub use scrambler::{Phase, Scrambler, UpdateCallback};
