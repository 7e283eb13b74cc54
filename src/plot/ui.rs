//! Figure rendering - pure rendering layer.

use super::Figure;
use crate::ui::{format_axis_label, ThemeColors};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Draw every series of `figure` as a line chart inside `area`.
pub fn draw_figure(f: &mut Frame<'_>, area: Rect, figure: &Figure, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(format!(" {} ", figure.chart_title().unwrap_or("Plot")))
        .title_style(Style::default().fg(colors.heading));

    let Some(bounds) = figure.bounds() else {
        let para = Paragraph::new("No data to plot")
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(para, area);
        return;
    };

    // A lone series is already named by the axis titles.
    let show_legend = figure.series().len() > 1;
    let datasets: Vec<Dataset<'_>> = figure
        .series()
        .iter()
        .enumerate()
        .map(|(i, series)| {
            let dataset = Dataset::default()
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors.series_color(i)))
                .data(series.points());
            match series.name() {
                Some(name) if show_legend => dataset.name(name.to_string()),
                _ => dataset,
            }
        })
        .collect();

    let (x_title, y_title) = figure.axis_titles();
    let [x_min, x_max] = bounds.x;
    let [y_min, y_max] = bounds.y;

    let x_axis = Axis::default()
        .title(x_title.unwrap_or("x").to_string())
        .style(Style::default().fg(colors.text))
        .bounds(bounds.x)
        .labels(axis_labels(x_min, x_max));

    let y_axis = Axis::default()
        .title(y_title.unwrap_or("y").to_string())
        .style(Style::default().fg(colors.text))
        .bounds(bounds.y)
        .labels(axis_labels(y_min, y_max));

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

/// Values closer to zero than this fraction of the axis span print as `0`.
const ZERO_SNAP_FRACTION: f64 = 1e-3;

/// Labels at min, midpoint, and max.
fn axis_labels(min: f64, max: f64) -> Vec<String> {
    let tolerance = (max - min).abs() * ZERO_SNAP_FRACTION;
    [min, (min + max) / 2.0, max]
        .into_iter()
        .map(|v| if v.abs() < tolerance { 0.0 } else { v })
        .map(format_axis_label)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Theme;
    use ndarray::array;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(figure: &Figure) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let colors = ThemeColors::from_theme(&Theme::GruvboxDark);
        terminal
            .draw(|f| draw_figure(f, f.area(), figure, &colors))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draws_title_and_axis_labels() {
        let mut fig = Figure::new();
        fig.title("ramp");
        fig.plot(&array![0.0, 10.0], &array![0.0, 10.0]).unwrap();

        let text = render(&fig);
        assert!(text.contains("ramp"));
        assert!(text.contains("5.0"));
    }

    #[test]
    fn test_axis_midpoint_near_zero_prints_zero() {
        assert_eq!(axis_labels(-1.2, 1.2003), vec!["-1.2", "0", "1.2"]);
        assert_eq!(axis_labels(0.0, 10.0), vec!["0", "5.0", "10.0"]);
    }

    #[test]
    fn test_single_series_has_no_legend() {
        let mut fig = Figure::new();
        fig.plot(&array![0.0, 10.0], &array![0.0, 10.0])
            .unwrap()
            .label("lonely");
        assert!(!render(&fig).contains("lonely"));

        fig.plot(&array![0.0, 10.0], &array![10.0, 0.0])
            .unwrap()
            .label("second");
        let text = render(&fig);
        assert!(text.contains("lonely"));
        assert!(text.contains("second"));
    }

    #[test]
    fn test_empty_figure_shows_placeholder() {
        let text = render(&Figure::new());
        assert!(text.contains("No data to plot"));
    }
}
