//! Configuration defaults for sampling and chart layout.

/// Interval and sample count for the domain sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleConfig {
    /// Interval start (inclusive).
    pub start: f64,
    /// Interval end (inclusive).
    pub end: f64,
    /// Number of evenly spaced samples.
    pub count: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 10.0,
            count: 100,
        }
    }
}

/// Configuration for the line chart layout.
#[derive(Debug, Clone)]
pub struct ChartLayoutConfig {
    /// Padding factor for Y-axis (0.1 = 10% margin above and below).
    pub y_axis_padding_factor: f64,
    /// Half-height used when every Y value is identical.
    pub flat_range_half_height: f64,
}

impl Default for ChartLayoutConfig {
    fn default() -> Self {
        Self {
            y_axis_padding_factor: 0.1,
            flat_range_half_height: 1.0,
        }
    }
}

/// Size of the off-screen surface used when no terminal is attached.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessConfig {
    /// Width in terminal cells.
    pub width: u16,
    /// Height in terminal cells.
    pub height: u16,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

/// Combined configuration for a plotting run.
#[derive(Debug, Clone, Default)]
pub struct PlotConfig {
    /// Domain sampling.
    pub sample: SampleConfig,
    /// Chart layout.
    pub chart: ChartLayoutConfig,
    /// Headless surface size.
    pub headless: HeadlessConfig,
}
