//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const KEYMAP_TEXT: &str = "q/Esc:close | T:theme";

/// Draw the keymap help bar with the current status on the right.
pub(crate) fn draw_keymap(f: &mut Frame<'_>, area: Rect, status: &str, colors: &ThemeColors) {
    let line = Line::from(vec![
        Span::styled(KEYMAP_TEXT, Style::default().fg(colors.text)),
        Span::raw(" | "),
        Span::styled(status.to_string(), Style::default().fg(colors.label)),
    ]);

    let paragraph =
        Paragraph::new(line).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
