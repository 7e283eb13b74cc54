//! Domain sampling and element-wise transforms.
//!
//! The domain is an evenly spaced [`Array1`] over a closed interval and the
//! range is produced by mapping a unary function over it, keeping positional
//! correspondence between the two.

use ndarray::Array1;

use crate::config::SampleConfig;
use crate::error::{Result, SinePlotError};

/// Generate `count` evenly spaced values over `[start, end]`, both ends included.
///
/// The last element is pinned to `end` so accumulated rounding in the step
/// never moves the closing endpoint. A single sample yields `[start]`.
pub fn linspace(start: f64, end: f64, count: usize) -> Result<Array1<f64>> {
    if !start.is_finite() || !end.is_finite() {
        return Err(SinePlotError::NonFiniteBound { start, end });
    }
    if count == 0 {
        return Err(SinePlotError::invalid_sample_count(count));
    }

    let mut domain = Array1::linspace(start, end, count);
    if count > 1 {
        domain[count - 1] = end;
    }
    Ok(domain)
}

/// Apply `f` to every element, returning a sequence of identical length.
pub fn map(values: &Array1<f64>, f: fn(f64) -> f64) -> Array1<f64> {
    values.mapv(f)
}

/// A sampled curve: domain values and the matching range values.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    domain: Array1<f64>,
    range: Array1<f64>,
}

impl Curve {
    /// Build a curve by evaluating `f` at every domain value.
    pub fn from_fn(domain: Array1<f64>, f: fn(f64) -> f64) -> Self {
        let range = map(&domain, f);
        Self { domain, range }
    }

    /// Sample `f` over the interval described by `config`.
    pub fn sample(config: &SampleConfig, f: fn(f64) -> f64) -> Result<Self> {
        let domain = linspace(config.start, config.end, config.count)?;
        tracing::debug!(
            start = config.start,
            end = config.end,
            count = config.count,
            "Sampled domain"
        );
        Ok(Self::from_fn(domain, f))
    }

    /// Independent-variable samples.
    pub fn domain(&self) -> &Array1<f64> {
        &self.domain
    }

    /// Dependent-variable samples.
    pub fn range(&self) -> &Array1<f64> {
        &self.range
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.domain.len()
    }

    /// Whether the curve has no samples.
    pub fn is_empty(&self) -> bool {
        self.domain.is_empty()
    }

    /// Distance between consecutive domain values, if there are at least two.
    pub fn spacing(&self) -> Option<f64> {
        if self.domain.len() < 2 {
            return None;
        }
        Some(self.domain[1] - self.domain[0])
    }

    /// `(x, y)` pairs in index order.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.domain
            .iter()
            .zip(self.range.iter())
            .map(|(&x, &y)| (x, y))
            .collect()
    }
}
