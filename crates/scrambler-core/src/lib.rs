pub mod charset;
pub mod config;
pub mod engine;
pub mod error;
pub mod rng;

pub use charset::Charset;
pub use config::{AnimationConfig, AppConfig};
pub use engine::scheduler::{FrameScheduler, ManualScheduler, TickHandle, TickScheduler};
pub use engine::scrambler::{Phase, Scrambler, UpdateCallback};
pub use error::{Error, Result};
pub use rng::{FastrandSource, RandomSource, SequenceSource};
