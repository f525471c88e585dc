//! Rotation smoothing in the tangent space of SO(3).
//!
//! Averaging the entries of rotation matrices does not yield a rotation. The
//! window is instead unwrapped into rotation vectors anchored at the newest
//! sample `R_ref`: walking from the newest sample back to the oldest, each
//! sample gets `v_i = v_{i+1} + log(R_{i+1}⁻¹ R_i)` with `v_ref = 0`. Those
//! vectors are smoothed like any Euclidean signal and the estimate is mapped
//! back as `R_ref · exp(v)`. For rotation about a fixed axis the unwrapping is
//! exact, whatever the total angle the window spans.
//!
//! The logarithm returns the shortest rotation vector (angle in `[0, π]`), so
//! a step of more than half a turn between two consecutive samples aliases to
//! the other side.

use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::coefficients::WeightCache;
use crate::config::WindowConfig;
use crate::error::{Result, SmootherError};
use crate::filter::SavitzkyGolayFilter;
use crate::window::SlidingWindow;

const PROJECTION_EPS: f64 = 1e-12;
const PROJECTION_MAX_ITER: usize = 100;

/// Real-time smoother for rotation-valued signals.
///
/// Only smoothing is supported; a configuration requesting a derivative is
/// rejected at construction.
#[derive(Debug, Clone)]
pub struct RotationSmoother {
    sg_filter: SavitzkyGolayFilter,
    window: SlidingWindow<Rotation3<f64>>,
}

impl RotationSmoother {
    pub fn new(config: WindowConfig) -> Result<Self> {
        Self::check(&config)?;
        Ok(Self::from_filter(SavitzkyGolayFilter::new(config)?))
    }

    pub fn with_cache(config: WindowConfig, cache: &mut WeightCache) -> Result<Self> {
        Self::check(&config)?;
        Ok(Self::from_filter(SavitzkyGolayFilter::with_cache(config, cache)?))
    }

    fn check(config: &WindowConfig) -> Result<()> {
        if config.derivative() != 0 {
            return Err(SmootherError::DerivativeOnManifold(config.derivative()));
        }
        Ok(())
    }

    pub(crate) fn from_filter(sg_filter: SavitzkyGolayFilter) -> Self {
        let window = SlidingWindow::filled(sg_filter.config().capacity(), Rotation3::identity());
        Self { sg_filter, window }
    }

    pub fn reset(&mut self, r: Rotation3<f64>) {
        log::trace!("rotation smoother reset over {} samples", self.window.capacity());
        self.window.fill(r);
    }

    /// Fills the whole window with the identity rotation
    pub fn reset_identity(&mut self) {
        self.reset(Rotation3::identity());
    }

    pub fn clear(&mut self) {
        log::trace!("rotation smoother cleared");
        self.window.clear();
    }

    pub fn add(&mut self, r: Rotation3<f64>) {
        self.window.push(r);
    }

    /// Adds a raw 3x3 matrix after projecting it onto the closest rotation
    pub fn add_matrix(&mut self, m: &Matrix3<f64>) {
        self.add(Rotation3::from_matrix_eps(
            m,
            PROJECTION_EPS,
            PROJECTION_MAX_ITER,
            Rotation3::identity(),
        ));
    }

    /// Smoothed rotation at the configured evaluation point.
    ///
    /// An empty window yields the identity.
    pub fn filter(&self) -> Rotation3<f64> {
        let reference = match self.window.newest() {
            Some(r) => *r,
            None => return Rotation3::identity(),
        };

        // Newest to oldest: (weighted sum, unwrapped tangent, previous sample)
        let (tangent, _, _) = self
            .sg_filter
            .weights()
            .iter()
            .rev()
            .zip(self.window.iter().rev())
            .fold(
                (Vector3::zeros(), Vector3::zeros(), reference),
                |(acc, v, next), (&w, r)| {
                    let v = v + (next.inverse() * r).scaled_axis();
                    (acc + v * w, v, *r)
                },
            );

        reference * Rotation3::from_scaled_axis(tangent)
    }

    pub fn ready(&self) -> bool {
        self.window.is_full()
    }

    pub fn config(&self) -> &WindowConfig {
        self.sg_filter.config()
    }
}
