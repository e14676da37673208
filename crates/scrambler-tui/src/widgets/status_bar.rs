use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use scrambler_core::Phase;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let running = app
            .targets
            .iter()
            .filter(|t| t.phase() != Phase::Idle)
            .count();
        let status_text = if running == 0 {
            format!(" DONE | Targets: {}", app.targets.len())
        } else {
            format!(
                " SCRAMBLING | Targets: {} | Active: {}",
                app.targets.len(),
                running
            )
        };

        let help_hint = " r:replay s:shuffle c:clear q:quit ";
        let padding_len = area
            .width
            .saturating_sub(status_text.len() as u16 + help_hint.len() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(theme.fg0).bg(theme.bg1),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg1)),
            Span::styled(help_hint, Style::default().fg(theme.grey).bg(theme.bg1)),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
