use super::Frame;
use crate::state::{Phase, State};
use crate::ui::theme::Theme;
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the quote and author regions according to state.
///
pub fn quote(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let title = match state.phase() {
        Phase::Loading => format!(
            "Quote of the Day {}",
            spinner::frame(state.spinner_index())
        ),
        _ => "Quote of the Day".to_string(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(styling::active_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)].as_ref())
        .margin(1)
        .split(inner);

    let text_style = match state.phase() {
        Phase::Failed => styling::error_text_style(theme),
        _ => styling::normal_text_style(theme),
    };
    let quote_widget = Paragraph::new(state.quote_text())
        .style(text_style)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(quote_widget, rows[0]);

    let author_widget = Paragraph::new(state.author_text())
        .style(styling::secondary_text_style(theme))
        .alignment(Alignment::Right);
    frame.render_widget(author_widget, rows[1]);
}
