//! Plotting - line series registration and chart bounds.
//!
//! A [`Figure`] collects line series and presents them through a
//! [`Display`](crate::display::Display). Rendering lives in [`ui`].

pub mod ui;

use ndarray::Array1;

use crate::config::ChartLayoutConfig;
use crate::display::Display;
use crate::error::{Result, SinePlotError};

/// One line series: points joined by straight segments in index order.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    label: Option<String>,
    points: Vec<(f64, f64)>,
}

impl LineSeries {
    /// Set the legend label.
    pub fn label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = Some(label.into());
        self
    }

    /// Legend label, if any.
    pub fn name(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Points in index order.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn extent(&self) -> ([f64; 2], [f64; 2]) {
        self.points.iter().filter(|(x, y)| x.is_finite() && y.is_finite()).fold(
            (
                [f64::INFINITY, f64::NEG_INFINITY],
                [f64::INFINITY, f64::NEG_INFINITY],
            ),
            |([x_min, x_max], [y_min, y_max]), &(x, y)| {
                ([x_min.min(x), x_max.max(x)], [y_min.min(y), y_max.max(y)])
            },
        )
    }
}

/// Axis bounds for a chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// `[min, max]` along X.
    pub x: [f64; 2],
    /// `[min, max]` along Y, padded.
    pub y: [f64; 2],
}

/// A set of line series plus axis titles.
#[derive(Debug, Clone, Default)]
pub struct Figure {
    series: Vec<LineSeries>,
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    layout: ChartLayoutConfig,
}

impl Figure {
    /// Create an empty figure with default layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty figure with a custom layout.
    pub fn with_layout(layout: ChartLayoutConfig) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    /// Register `(x[i], y[i])` as a line series.
    pub fn plot(&mut self, x: &Array1<f64>, y: &Array1<f64>) -> Result<&mut LineSeries> {
        if x.len() != y.len() {
            return Err(SinePlotError::length_mismatch(x.len(), y.len()));
        }
        if x.is_empty() {
            return Err(SinePlotError::EmptySeries);
        }

        let points = x.iter().zip(y.iter()).map(|(&x, &y)| (x, y)).collect();
        tracing::debug!(points = x.len(), index = self.series.len(), "Registered line series");
        self.series.push(LineSeries {
            label: None,
            points,
        });

        let last = self.series.len() - 1;
        Ok(&mut self.series[last])
    }

    /// Set the chart title.
    pub fn title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Set the X axis title.
    pub fn x_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.x_label = Some(label.into());
        self
    }

    /// Set the Y axis title.
    pub fn y_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.y_label = Some(label.into());
        self
    }

    /// Registered series, in registration order.
    pub fn series(&self) -> &[LineSeries] {
        &self.series
    }

    /// Chart title, if set.
    pub fn chart_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Axis titles `(x, y)`.
    pub fn axis_titles(&self) -> (Option<&str>, Option<&str>) {
        (self.x_label.as_deref(), self.y_label.as_deref())
    }

    /// Union of all series extents, Y padded by the layout's padding factor.
    ///
    /// Returns `None` when no series holds a finite point.
    pub fn bounds(&self) -> Option<Bounds> {
        let ([x_min, x_max], [y_min, y_max]) = self.series.iter().map(LineSeries::extent).fold(
            (
                [f64::INFINITY, f64::NEG_INFINITY],
                [f64::INFINITY, f64::NEG_INFINITY],
            ),
            |([ax0, ax1], [ay0, ay1]), ([bx0, bx1], [by0, by1])| {
                ([ax0.min(bx0), ax1.max(bx1)], [ay0.min(by0), ay1.max(by1)])
            },
        );

        if !x_min.is_finite() || !y_min.is_finite() {
            return None;
        }

        // Flat extents still need a non-zero span to draw.
        let (x_min, x_max) = if x_max > x_min {
            (x_min, x_max)
        } else {
            (x_min - 0.5, x_max + 0.5)
        };

        let y_span = y_max - y_min;
        let (y_min, y_max) = if y_span > 0.0 {
            let pad = y_span * self.layout.y_axis_padding_factor;
            (y_min - pad, y_max + pad)
        } else {
            let half = self.layout.flat_range_half_height;
            (y_min - half, y_max + half)
        };

        Some(Bounds {
            x: [x_min, x_max],
            y: [y_min, y_max],
        })
    }

    /// Present every registered series on `display`.
    pub fn show(&self, display: &Display) -> Result<()> {
        tracing::info!(series = self.series.len(), "Presenting figure");
        display.present(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_plot_registers_series_in_order() {
        let mut fig = Figure::new();
        let x = array![0.0, 1.0, 2.0];
        let y = array![5.0, 4.0, 3.0];
        fig.plot(&x, &y).unwrap().label("down");

        assert_eq!(fig.series().len(), 1);
        let series = &fig.series()[0];
        assert_eq!(series.name(), Some("down"));
        assert_eq!(series.points(), &[(0.0, 5.0), (1.0, 4.0), (2.0, 3.0)]);
    }

    #[test]
    fn test_plot_rejects_length_mismatch() {
        let mut fig = Figure::new();
        let err = fig.plot(&array![0.0, 1.0], &array![0.0]).unwrap_err();
        assert!(matches!(err, SinePlotError::LengthMismatch { x: 2, y: 1 }));
        assert!(fig.series().is_empty());
    }

    #[test]
    fn test_plot_rejects_empty_series() {
        let mut fig = Figure::new();
        let empty = Array1::<f64>::zeros(0);
        assert!(matches!(
            fig.plot(&empty, &empty),
            Err(SinePlotError::EmptySeries)
        ));
    }

    #[test]
    fn test_bounds_pad_y_axis() {
        let mut fig = Figure::with_layout(ChartLayoutConfig {
            y_axis_padding_factor: 0.5,
            ..ChartLayoutConfig::default()
        });
        fig.plot(&array![0.0, 10.0], &array![-1.0, 1.0]).unwrap();

        let bounds = fig.bounds().unwrap();
        assert_eq!(bounds.x, [0.0, 10.0]);
        assert_eq!(bounds.y, [-2.0, 2.0]);
    }

    #[test]
    fn test_bounds_widen_flat_series() {
        let mut fig = Figure::new();
        fig.plot(&array![3.0], &array![7.0]).unwrap();

        let bounds = fig.bounds().unwrap();
        assert_eq!(bounds.x, [2.5, 3.5]);
        assert_eq!(bounds.y, [6.0, 8.0]);
    }

    #[test]
    fn test_bounds_span_all_series() {
        let mut fig = Figure::with_layout(ChartLayoutConfig {
            y_axis_padding_factor: 0.0,
            ..ChartLayoutConfig::default()
        });
        fig.plot(&array![0.0, 1.0], &array![0.0, 1.0]).unwrap();
        fig.plot(&array![-4.0, 2.0], &array![-3.0, 0.5]).unwrap();

        let bounds = fig.bounds().unwrap();
        assert_eq!(bounds.x, [-4.0, 2.0]);
        assert_eq!(bounds.y, [-3.0, 1.0]);
    }

    #[test]
    fn test_bounds_none_without_finite_points() {
        let mut fig = Figure::new();
        assert_eq!(fig.bounds(), None);
        fig.plot(&array![f64::NAN], &array![1.0]).unwrap();
        assert_eq!(fig.bounds(), None);
    }
}
