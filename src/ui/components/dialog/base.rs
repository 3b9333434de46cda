//! Base dialog component

use crate::ui::layout::centered;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub title_color: Color,
    pub border_color: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint shown under the message (e.g., "Press Enter to dismiss")
    pub hint: Option<Vec<Span<'a>>>,
    pub max_width: u16,
}

/// Outer size of a dialog showing `message` within `max_width` columns
pub fn dialog_size(message: &str, title: &str, has_hint: bool, max_width: u16) -> (u16, u16) {
    // 2 border columns + 2 padding columns per side
    let text_width = max_width.saturating_sub(6).max(1) as usize;

    let longest = message
        .lines()
        .map(|l| l.chars().count())
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0);
    let width = (longest.min(text_width) as u16 + 6).min(max_width);

    let wrapped: usize = message
        .lines()
        .map(|l| l.chars().count().max(1).div_ceil(text_width))
        .sum();
    // borders + title + blank + message + (blank + hint)
    let hint_rows = if has_hint { 2 } else { 0 };
    let height = (2 + 2 + wrapped.max(1) + hint_rows) as u16;

    (width, height.max(5))
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let (width, height) = dialog_size(
        config.message,
        config.title,
        config.hint.is_some(),
        config.max_width,
    );
    let area: Rect = centered(frame.area(), width, height);

    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    lines.extend(config.message.lines().map(|l| Line::from(l.to_string())));
    if let Some(hint) = config.hint {
        lines.push(Line::default());
        lines.push(Line::from(hint).style(Style::default().fg(Color::DarkGray)));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(config.border_color));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
