use super::*;
use crate::state::{Background, State};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

/// Render the whole page according to state.
///
pub fn all(frame: &mut Frame, state: &State) {
    let size = frame.size();
    let theme = state.scheme();

    // Whole-frame background: the current palette color, or the dark
    // surface behind a photo backdrop.
    let background_color = match state.background() {
        Background::Color(color) => color.to_color(),
        Background::Photo { .. } => theme.surface.to_color(),
    };
    frame.render_widget(
        Block::default().style(Style::default().bg(background_color)),
        size,
    );

    let has_backdrop = matches!(state.background(), Background::Photo { .. });
    let mut constraints = vec![Constraint::Length(7), Constraint::Min(7)];
    if has_backdrop {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(4));
    if state.show_log() {
        constraints.push(Constraint::Length(10));
    }
    constraints.push(Constraint::Length(1));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    banner(frame, rows[0], &theme);
    quote(frame, rows[1], state, &theme);

    let mut next = 2;
    if has_backdrop {
        backdrop(frame, rows[next], state, &theme);
        next += 1;
    }
    share(frame, rows[next], state, &theme);
    next += 1;
    if state.show_log() {
        log(frame, rows[next], state, &theme);
        next += 1;
    }
    footer(frame, rows[next], state, &theme);
}
