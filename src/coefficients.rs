use std::collections::HashMap;

use nalgebra::{DMatrix, DVector};

use crate::config::WindowConfig;
use crate::error::{Result, SmootherError};

/// Computes Savitzky-Golay weights for an arbitrary set of sample offsets.
///
/// A polynomial of degree `poly_order` is fitted by least squares to samples
/// located at `offsets[i] * delta`, and the `derivative`-th derivative of that
/// polynomial is evaluated at `x = 0`. The returned weights, applied as a dot
/// product with the samples, give that estimate directly.
///
/// # Arguments
///
/// * `offsets` - Position of each sample relative to the evaluation point
/// * `poly_order` - Degree of the polynomial to fit (must be < offsets.len())
/// * `derivative` - Order of derivative to estimate (0 for smoothing)
/// * `delta` - Sample spacing in physical units
pub fn compute_weights_for_offsets(
    offsets: &[isize],
    poly_order: usize,
    derivative: usize,
    delta: f64,
) -> Result<Vec<f64>> {
    let window_size = offsets.len();
    if poly_order >= window_size {
        return Err(SmootherError::InvalidPolynomialOrder(poly_order, window_size));
    }

    // Higher derivatives of a lower-order polynomial vanish
    if derivative > poly_order {
        return Ok(vec![0.0; window_size]);
    }

    let mut vandermonde = DMatrix::<f64>::zeros(window_size, poly_order + 1);
    for (i, &off) in offsets.iter().enumerate() {
        let x = off as f64 * delta;
        for j in 0..=poly_order {
            vandermonde[(i, j)] = x.powi(j as i32);
        }
    }

    // Solve A^T A c = s! e_s, then w = A c
    let ata = vandermonde.transpose() * &vandermonde;
    let mut rhs = DVector::<f64>::zeros(poly_order + 1);
    let factorial = (1..=derivative).fold(1.0, |acc, x| acc * x as f64);
    rhs[derivative] = factorial;

    let coeffs_poly = ata.lu().solve(&rhs).ok_or_else(|| {
        SmootherError::ComputationError("Failed to solve least squares system".to_string())
    })?;

    let weights = &vandermonde * coeffs_poly;
    Ok(weights.iter().copied().collect())
}

/// Computes the weights for a window configuration.
///
/// Weights are ordered oldest sample first, matching the order in which a
/// [`SlidingWindow`](crate::SlidingWindow) stores its contents.
pub fn compute_weights(config: &WindowConfig) -> Result<Vec<f64>> {
    compute_weights_for_offsets(
        &config.offsets(),
        config.poly_order(),
        config.derivative(),
        config.time_step(),
    )
}

/// (half width, eval point, poly order, derivative, time step bits)
type WeightKey = (usize, isize, usize, usize, u64);

/// Memoizes weight vectors so that many smoothers sharing one configuration
/// only solve the least squares system once.
#[derive(Debug, Default)]
pub struct WeightCache {
    weights: HashMap<WeightKey, Vec<f64>, ahash::RandomState>,
}

impl WeightCache {
    /// Creates an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets weights from the cache or computes them if not cached
    pub fn get_weights(&mut self, config: &WindowConfig) -> Result<&[f64]> {
        let key = Self::key(config);

        if !self.weights.contains_key(&key) {
            let weights = compute_weights(config)?;
            log::debug!(
                "computed {} weights for m={} order={} derivative={}",
                weights.len(),
                config.half_width(),
                config.poly_order(),
                config.derivative()
            );
            self.weights.insert(key, weights);
        } else {
            log::debug!("weights for m={} served from cache", config.half_width());
        }

        Ok(self.weights[&key].as_slice())
    }

    /// Number of distinct weight vectors held
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    fn key(config: &WindowConfig) -> WeightKey {
        (
            config.half_width(),
            config.eval_point(),
            config.poly_order(),
            config.derivative(),
            config.time_step().to_bits(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_5_point_quadratic_centered() {
        let weights = compute_weights_for_offsets(&[-2, -1, 0, 1, 2], 2, 0, 1.0).unwrap();
        // Known coefficients for 5-point quadratic smoothing
        let expected = [-3.0 / 35.0, 12.0 / 35.0, 17.0 / 35.0, 12.0 / 35.0, -3.0 / 35.0];

        for (actual, expected) in weights.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(actual, expected, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_5_point_quadratic_causal() {
        let config = WindowConfig::new(2, 2).unwrap();
        let weights = compute_weights(&config).unwrap();
        // Quadratic fit evaluated at the newest sample
        let expected = [3.0 / 35.0, -5.0 / 35.0, -3.0 / 35.0, 9.0 / 35.0, 31.0 / 35.0];

        for (actual, expected) in weights.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(actual, expected, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_smoothing_weights_sum_to_one() {
        for m in 0..6 {
            for order in 0..(2 * m + 1).min(4) {
                let config = WindowConfig::new(m, order).unwrap();
                let sum: f64 = compute_weights(&config).unwrap().iter().sum();
                assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_first_derivative_weights_recover_slope() {
        let config = WindowConfig::new(3, 2)
            .unwrap()
            .with_derivative(1)
            .with_time_step(0.01)
            .unwrap();
        let weights = compute_weights(&config).unwrap();

        // y = 4 t sampled every 10 ms
        let estimate: f64 = weights
            .iter()
            .enumerate()
            .map(|(i, w)| w * 4.0 * (i as f64 * 0.01))
            .sum();
        assert_abs_diff_eq!(estimate, 4.0, epsilon = 1e-8);
    }

    #[test]
    fn test_derivative_above_order_is_zero() {
        let weights = compute_weights_for_offsets(&[-2, -1, 0], 1, 2, 1.0).unwrap();
        assert_eq!(weights, vec![0.0; 3]);
    }

    #[test]
    fn test_invalid_order() {
        assert!(compute_weights_for_offsets(&[-1, 0], 2, 0, 1.0).is_err());
        assert!(compute_weights_for_offsets(&[], 0, 0, 1.0).is_err());
    }

    #[test]
    fn test_weight_cache() {
        let mut cache = WeightCache::new();
        let config = WindowConfig::new(2, 2).unwrap();

        let first = cache.get_weights(&config).unwrap().to_vec();
        let second = cache.get_weights(&config).unwrap().to_vec();
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);

        let lagged = config.clone().with_eval_point(0).unwrap();
        cache.get_weights(&lagged).unwrap();
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_weight_cache_distinguishes_every_field() {
        let mut cache = WeightCache::new();
        let base = WindowConfig::new(3, 2).unwrap();
        let variants = [
            base.clone(),
            WindowConfig::new(2, 2).unwrap(),
            WindowConfig::new(3, 1).unwrap(),
            base.clone().with_eval_point(-1).unwrap(),
            base.clone().with_derivative(1),
            base.clone().with_time_step(0.5).unwrap(),
        ];

        for config in &variants {
            let weights = cache.get_weights(config).unwrap().to_vec();
            assert_eq!(weights.len(), config.capacity());
            assert_eq!(weights, compute_weights(config).unwrap());
        }
        assert_eq!(cache.len(), variants.len());
    }
}
