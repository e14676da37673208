use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scrambler_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "scrambler")]
#[command(author, version, about = "Terminal text scramble animation")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Lines of text to animate (built-in demo phrases when omitted)
    text: Vec<String>,

    /// Scheduler tick rate in frames per second
    #[arg(long)]
    fps: Option<u16>,

    /// Upper bound on a character's randomization countdown
    #[arg(long)]
    max_steps: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the animation TUI
    Run {
        /// Lines of text to animate
        text: Vec<String>,
    },
    /// Print the configuration file location
    ConfigPath,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration, then apply flag overrides
    let mut config = AppConfig::load()?;
    if let Some(fps) = cli.fps {
        config.animation.tick_fps = fps;
    }
    if let Some(max_steps) = cli.max_steps {
        config.animation.max_randomization_steps = max_steps;
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Some(Commands::Run { text }) => commands::run::run(config, text),
        None => commands::run::run(config, cli.text),
        Some(Commands::ConfigPath) => {
            println!("{}", AppConfig::config_path().display());
            Ok(())
        }
    }
}
