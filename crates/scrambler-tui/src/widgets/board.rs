use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use scrambler_core::Phase;

use crate::app::App;

pub struct ScrambleBoardWidget;

impl ScrambleBoardWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        // Center the block of target lines vertically
        let line_count = app.targets.len() as u16;
        let top_pad = area.height.saturating_sub(line_count * 2) / 2;

        let mut lines: Vec<Line> = Vec::with_capacity((top_pad + line_count * 2) as usize);
        for _ in 0..top_pad {
            lines.push(Line::default());
        }
        for target in &app.targets {
            let style = match target.phase() {
                Phase::Idle => Style::default().fg(theme.revealed),
                _ => Style::default().fg(theme.scramble),
            };
            lines.push(Line::from(Span::styled(target.display_text(), style)));
            lines.push(Line::default());
        }

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().bg(theme.bg0));
        frame.render_widget(paragraph, area);
    }
}
