use super::Frame;
use crate::ui::theme::Theme;
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, widgets::Paragraph};

pub const BANNER: &str = "
                      _                 _          _
  __ _  _   _   ___  | |_   ___        | |_  _   _ (_)
 / _` || | | | / _ \\ | __| / _ \\  _____| __|| | | || |
| (_| || |_| || (_) || |_ |  __/ |_____| |_ | |_| || |
 \\__, | \\__,_| \\___/  \\__| \\___|        \\__| \\__,_||_|
    |_|
";

/// Render the application banner.
///
pub fn banner(frame: &mut Frame, size: Rect, theme: &Theme) {
    let banner_widget = Paragraph::new(BANNER).style(styling::banner_style(theme));
    frame.render_widget(banner_widget, size);
}
