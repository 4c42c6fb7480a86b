use super::Frame;
use crate::state::{Background, State};
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render the photo-backdrop line shown while the image path is active.
///
pub fn backdrop(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    if let Background::Photo { url } = state.background() {
        let line = Line::from(vec![
            Span::styled(
                " Backdrop ",
                Style::default()
                    .fg(theme.surface.to_color())
                    .bg(theme.accent.to_color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", url), styling::muted_text_style(theme)),
        ]);
        frame.render_widget(Paragraph::new(line), size);
    }
}
