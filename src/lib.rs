//! Sineplot - sample sin(x) and draw it as a terminal line plot.
//!
//! Sineplot samples the interval [0, 10] at 100 evenly spaced points, maps
//! sine over them, and presents the curve as a line chart. An attached
//! terminal gets an interactive full-screen view; otherwise the chart is
//! rendered once as text on stdout.
//!
//! # Example
//!
//! ```ignore
//! use sineplot::{app, config::PlotConfig, display::Display};
//!
//! let config = PlotConfig::default();
//! let curve = app::sample(&config)?;
//! println!("sin(10) = {}", curve.range()[99]);
//!
//! app::run(&config, &Display::detect(config.headless))?;
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod config;
pub mod display;
pub mod error;
pub mod plot;
pub mod sampling;
pub mod ui;

pub use error::{Result, SinePlotError};
