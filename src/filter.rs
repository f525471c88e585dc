use std::ops::{Add, Mul};

use num_traits::Zero;

use crate::coefficients::{compute_weights, WeightCache};
use crate::config::WindowConfig;
use crate::error::Result;

/// Capability set of a value that can be smoothed linearly: a zero element,
/// addition, and scaling by a real weight.
///
/// Implemented for `f64` and for every fixed-size `nalgebra` vector of `f64`
/// (`Vector3<f64>`, `Vector6<f64>`, ...).
pub trait Sample: Copy + Zero + Add<Output = Self> + Mul<f64, Output = Self> {}

impl<T> Sample for T where T: Copy + Zero + Add<Output = T> + Mul<f64, Output = T> {}

/// Savitzky-Golay regression step for a fixed window configuration.
///
/// The weights are computed once at construction; [`apply`](Self::apply) is a
/// single weighted sum over the window and never allocates.
#[derive(Debug, Clone)]
pub struct SavitzkyGolayFilter {
    config: WindowConfig,
    weights: Vec<f64>,
}

impl SavitzkyGolayFilter {
    /// Creates a filter for the given configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use spatial_savitzky_golay::{SavitzkyGolayFilter, WindowConfig};
    ///
    /// let config = WindowConfig::new(2, 2).expect("Valid parameters");
    /// let filter = SavitzkyGolayFilter::new(config).expect("Solvable system");
    /// assert_eq!(filter.weights().len(), 5);
    /// ```
    pub fn new(config: WindowConfig) -> Result<Self> {
        let weights = compute_weights(&config)?;
        Ok(Self { config, weights })
    }

    /// Creates a filter, reusing weights already present in `cache`
    pub fn with_cache(config: WindowConfig, cache: &mut WeightCache) -> Result<Self> {
        let weights = cache.get_weights(&config)?.to_vec();
        Ok(Self { config, weights })
    }

    /// Applies the weights to a window of samples, oldest first.
    ///
    /// Samples are aligned newest to newest with the weights. A window shorter
    /// than the configuration's capacity is accepted: the missing older slots
    /// contribute `zero`.
    pub fn apply<T, I>(&self, samples: I, zero: T) -> T
    where
        T: Sample,
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        self.weights
            .iter()
            .rev()
            .zip(samples.into_iter().rev())
            .fold(zero, |acc, (&w, x)| acc + x * w)
    }

    /// Weights ordered oldest sample first
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Returns the filter configuration
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }
}
