//! Application state and the sample-and-plot sequence.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::PlotConfig;
use crate::display::Display;
use crate::error::Result;
use crate::plot::Figure;
use crate::sampling::Curve;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Interactive view state.
#[derive(Debug)]
pub struct App {
    /// Current theme.
    pub theme: Theme,
    /// Status message.
    pub status: String,
    /// Set once the user dismisses the view.
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance.
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            status: "Ready".to_string(),
            should_quit: false,
        }
    }

    /// Apply a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE, KeyCode::Char('q')) | (KeyModifiers::NONE, KeyCode::Esc) => {
                self.should_quit = true;
            },
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
                self.should_quit = true;
            },
            (_, KeyCode::Char('T')) => {
                self.theme = self.theme.next();
                self.status = format!("Theme: {}", self.theme.name());
            },
            _ => {},
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample sin(x) over the configured interval.
pub fn sample(config: &PlotConfig) -> Result<Curve> {
    Curve::sample(&config.sample, f64::sin)
}

/// Build the figure for a sampled curve.
pub fn build_figure(curve: &Curve, config: &PlotConfig) -> Result<Figure> {
    let mut figure = Figure::with_layout(config.chart.clone());
    figure.title("y = sin(x)").x_label("x").y_label("sin(x)");
    figure.plot(curve.domain(), curve.range())?.label("sin(x)");
    Ok(figure)
}

/// Sample the curve, plot it, and present it on `display`.
pub fn run(config: &PlotConfig, display: &Display) -> Result<()> {
    let curve = sample(config)?;
    tracing::info!(samples = curve.len(), "Computed sine curve");

    let figure = build_figure(&curve, config)?;
    figure.show(display)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HeadlessConfig, SampleConfig};
    use crate::error::SinePlotError;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_sample_is_idempotent() {
        let config = PlotConfig::default();
        assert_eq!(sample(&config).unwrap(), sample(&config).unwrap());
    }

    #[test]
    fn test_run_propagates_sampling_error() {
        let config = PlotConfig {
            sample: SampleConfig {
                count: 0,
                ..SampleConfig::default()
            },
            ..PlotConfig::default()
        };
        let display = Display::Headless(HeadlessConfig::default());

        let err = run(&config, &display).unwrap_err();
        assert!(matches!(err, SinePlotError::InvalidSampleCount { count: 0 }));
    }

    #[test]
    fn test_figure_receives_equal_length_sequences() {
        let config = PlotConfig::default();
        let curve = sample(&config).unwrap();
        let figure = build_figure(&curve, &config).unwrap();

        assert_eq!(figure.series().len(), 1);
        assert_eq!(figure.series()[0].len(), 100);
        assert_eq!(figure.series()[0].points(), curve.points().as_slice());
    }

    #[test]
    fn test_quit_keys() {
        for k in [
            key(KeyCode::Char('q'), KeyModifiers::NONE),
            key(KeyCode::Esc, KeyModifiers::NONE),
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
        ] {
            let mut app = App::new();
            app.handle_key(k);
            assert!(app.should_quit);
        }
    }

    #[test]
    fn test_theme_toggle() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('T'), KeyModifiers::SHIFT));
        assert_eq!(app.theme, Theme::GruvboxLight);
        assert_eq!(app.status, "Theme: Gruvbox Light");
        assert!(!app.should_quit);

        app.handle_key(key(KeyCode::Char('x'), KeyModifiers::NONE));
        assert_eq!(app.theme, Theme::GruvboxLight);
    }
}
