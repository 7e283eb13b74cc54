//! Output surfaces for presenting a figure.
//!
//! An attached terminal gets an interactive full-screen chart that blocks until
//! dismissed. Without one, the chart is rendered once into an off-screen buffer
//! and written to stdout as text.

use std::io::{self, IsTerminal, Write};

use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend, TestBackend},
    Terminal,
};

use crate::app::{App, Theme};
use crate::config::HeadlessConfig;
use crate::error::{Result, SinePlotError};
use crate::plot::{ui::draw_figure, Figure};
use crate::ui::{self, ThemeColors};

/// Where a figure is presented.
#[derive(Debug, Clone, Copy)]
pub enum Display {
    /// Interactive full-screen view on the controlling terminal.
    Terminal,
    /// One-shot text render of the given size to stdout.
    Headless(HeadlessConfig),
}

impl Display {
    /// Pick the interactive view when stdout is a terminal.
    pub fn detect(headless: HeadlessConfig) -> Self {
        if io::stdout().is_terminal() {
            Display::Terminal
        } else {
            Display::Headless(headless)
        }
    }

    /// Present `figure`, blocking until dismissal in interactive mode.
    pub fn present(&self, figure: &Figure) -> Result<()> {
        match self {
            Display::Terminal => present_interactive(figure),
            Display::Headless(config) => {
                tracing::debug!(width = config.width, height = config.height, "Headless render");
                let text = render_to_string(figure, *config)?;
                let mut stdout = io::stdout().lock();
                stdout.write_all(text.as_bytes())?;
                stdout.flush()?;
                Ok(())
            },
        }
    }
}

/// Render `figure` into an off-screen buffer and return its rows as text.
pub fn render_to_string(figure: &Figure, config: HeadlessConfig) -> Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(config.width, config.height))
        .map_err(|e| SinePlotError::terminal(e.to_string()))?;
    let colors = ThemeColors::from_theme(&Theme::default());
    terminal
        .draw(|f| draw_figure(f, f.area(), figure, &colors))
        .map_err(|e| SinePlotError::terminal(e.to_string()))?;

    let buffer = terminal.backend().buffer();
    let width = usize::from(buffer.area.width.max(1));
    let mut text = String::new();
    for row in buffer.content.chunks(width) {
        let line: String = row.iter().map(|cell| cell.symbol()).collect();
        text.push_str(line.trim_end());
        text.push('\n');
    }
    Ok(text)
}

fn present_interactive(figure: &Figure) -> Result<()> {
    enable_raw_mode()?;

    let res = open_view(figure);
    let restored = restore_terminal(&mut io::stdout());

    res.and(restored)
}

fn open_view(figure: &Figure) -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    run_view(&mut terminal, figure)
}

/// Leave raw mode and the alternate screen and show the cursor.
///
/// Every step is attempted; the first error is returned.
fn restore_terminal<W: Write>(out: &mut W) -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, Show);
    raw.and(screen)?;
    Ok(())
}

fn run_view<B: Backend>(terminal: &mut Terminal<B>, figure: &Figure) -> Result<()> {
    let mut app = App::new();

    while !app.should_quit {
        terminal
            .draw(|f| ui::draw(f, &app, figure))
            .map_err(|e| SinePlotError::terminal(e.to_string()))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    tracing::info!("Plot view closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_render_to_string_has_configured_rows() {
        let mut fig = Figure::new();
        fig.title("line");
        fig.plot(&array![0.0, 1.0, 2.0], &array![0.0, 1.0, 0.0]).unwrap();

        let text = render_to_string(
            &fig,
            HeadlessConfig {
                width: 40,
                height: 12,
            },
        )
        .unwrap();

        assert_eq!(text.lines().count(), 12);
        assert!(text.lines().all(|l| l.chars().count() <= 40));
        assert!(text.contains("line"));
    }

    #[test]
    fn test_restore_terminal_writes_every_step() {
        let mut out = Vec::new();
        restore_terminal(&mut out).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }
}
