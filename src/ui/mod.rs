//! User interface rendering.

mod formatters;
mod keymap_bar;
mod theme;

use crate::app::App;
use crate::plot::{ui::draw_figure, Figure};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

pub use formatters::format_axis_label;
pub use theme::ThemeColors;

/// Draw the interactive view: the chart plus the keymap bar.
pub fn draw(f: &mut Frame<'_>, app: &App, figure: &Figure) {
    let colors = ThemeColors::from_theme(&app.theme);

    f.render_widget(Block::default().style(Style::default().bg(colors.bg)), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    draw_figure(f, chunks[0], figure, &colors);
    keymap_bar::draw_keymap(f, chunks[1], &app.status, &colors);
}
