use super::Frame;
use crate::state::{Phase, State};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let (label, label_background) = match state.phase() {
        Phase::Loading => ("LOADING:", theme.footer_label),
        Phase::Failed => ("ERROR:", theme.error),
        _ => ("QUOTE:", theme.footer_label),
    };

    let controls_content = Line::from(vec![
        Span::styled(
            label,
            Style::default()
                .fg(theme.surface.to_color())
                .bg(label_background.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " r: new quote, t/w: copy share link, l: logs, q: quit",
            Style::default().fg(theme.text_secondary.to_color()),
        ),
    ]);
    let controls_widget = Paragraph::new(controls_content).alignment(Alignment::Left);

    // Show the last refresh time next to the version once a quote loaded.
    let right_text = match state.fetched_at() {
        Some(at) => format!(
            " refreshed {} · v{}",
            at.format("%H:%M:%S"),
            env!("CARGO_PKG_VERSION")
        ),
        None => format!(" v{}", env!("CARGO_PKG_VERSION")),
    };
    let right_content = Line::from(vec![Span::styled(
        right_text,
        Style::default().fg(theme.text_muted.to_color()),
    )]);

    let right_content_width = right_content.width();
    let right_widget = Paragraph::new(right_content).alignment(Alignment::Right);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(right_content_width.try_into().unwrap_or(0)),
        ])
        .split(size);

    frame.render_widget(controls_widget, columns[0]);
    frame.render_widget(right_widget, columns[1]);
}
