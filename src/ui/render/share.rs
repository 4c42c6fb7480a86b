use super::Frame;
use crate::share::ShareTarget;
use crate::state::State;
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the share-link region according to state.
///
pub fn share(frame: &mut Frame, size: Rect, state: &State, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Share")
        .border_style(styling::normal_block_border_style(theme));

    let lines: Vec<Line> = if state.share_links().is_empty() {
        vec![Line::from(Span::styled(
            "Share links appear once a quote has loaded.",
            styling::muted_text_style(theme),
        ))]
    } else {
        state
            .share_links()
            .iter()
            .map(|link| {
                let key = match link.target {
                    ShareTarget::Twitter => "[t]",
                    ShareTarget::WhatsApp => "[w]",
                };
                Line::from(vec![
                    Span::styled(
                        format!("{} {:<9}", key, link.target.label()),
                        styling::accent_text_style(theme),
                    ),
                    Span::styled(link.url.clone(), styling::muted_text_style(theme)),
                ])
            })
            .collect()
    };

    let share_widget = Paragraph::new(lines).block(block);
    frame.render_widget(share_widget, size);
}
