use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use scrambler_core::AppConfig;
use scrambler_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    theme::load_theme,
    widgets::{ScrambleBoardWidget, StatusBarWidget},
};

pub fn run(config: AppConfig, lines: Vec<String>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Scrambler"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, config, lines);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: AppConfig,
    lines: Vec<String>,
) -> Result<()> {
    let theme = load_theme(&config.ui.theme);

    // Cap event polling at one tick interval; the per-iteration timeout
    // shrinks to the soonest armed deadline so ticks fire on time
    let poll_rate_ms = config.animation.tick_duration().as_millis().max(1) as u64;
    let events = EventHandler::new(poll_rate_ms);

    let mut app = App::new(config, theme, lines)?;
    tracing::debug!(targets = app.targets.len(), "entering event loop");
    app.play();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;

        let until_deadline = app.time_until_next_tick(Instant::now());
        if let Some(event) = events.next(until_deadline)? {
            match event {
                AppEvent::Key(key) => match handle_key_event(key) {
                    Action::Quit => app.quit(),
                    Action::Replay => app.play(),
                    Action::Shuffle => app.shuffle(),
                    Action::Clear => app.clear(),
                    Action::None => {}
                },
                // The next draw picks up the new size
                AppEvent::Resize(_, _) => {}
                AppEvent::Tick => {}
            }
        }

        app.update(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    ScrambleBoardWidget::render(frame, chunks[0], app);
    StatusBarWidget::render(frame, chunks[1], app);
}
