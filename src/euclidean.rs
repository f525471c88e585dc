use crate::coefficients::WeightCache;
use crate::config::WindowConfig;
use crate::error::Result;
use crate::filter::{SavitzkyGolayFilter, Sample};
use crate::window::SlidingWindow;

/// Real-time smoother for any vector-space signal (scalars, translations, twists).
///
/// The window starts full of zeros, so [`filter`](Self::filter) is defined from
/// the first call, but estimates are biased toward the seed until `2m+1` real
/// samples have been added.
///
/// # Example
///
/// ```rust
/// use nalgebra::Vector3;
/// use spatial_savitzky_golay::{EuclideanSmoother, WindowConfig};
///
/// let config = WindowConfig::new(2, 2).expect("Valid parameters");
/// let mut smoother = EuclideanSmoother::<Vector3<f64>>::new(config).expect("Valid filter");
/// smoother.reset(Vector3::new(0.1, 0.2, 0.3));
/// smoother.add(Vector3::new(0.1, 0.2, 0.31));
/// let estimate = smoother.filter();
/// ```
#[derive(Debug, Clone)]
pub struct EuclideanSmoother<T> {
    sg_filter: SavitzkyGolayFilter,
    window: SlidingWindow<T>,
}

impl<T: Sample> EuclideanSmoother<T> {
    pub fn new(config: WindowConfig) -> Result<Self> {
        Ok(Self::from_filter(SavitzkyGolayFilter::new(config)?))
    }

    /// Creates a smoother whose weights come from `cache`
    pub fn with_cache(config: WindowConfig, cache: &mut WeightCache) -> Result<Self> {
        Ok(Self::from_filter(SavitzkyGolayFilter::with_cache(config, cache)?))
    }

    pub(crate) fn from_filter(sg_filter: SavitzkyGolayFilter) -> Self {
        let window = SlidingWindow::filled(sg_filter.config().capacity(), T::zero());
        Self { sg_filter, window }
    }

    /// Fills the whole window with `value`
    pub fn reset(&mut self, value: T) {
        log::trace!("euclidean smoother reset over {} samples", self.window.capacity());
        self.window.fill(value);
    }

    /// Fills the whole window with zero
    pub fn reset_zero(&mut self) {
        self.reset(T::zero());
    }

    /// Empties the window; the smoother is not ready until refilled
    pub fn clear(&mut self) {
        log::trace!("euclidean smoother cleared");
        self.window.clear();
    }

    pub fn add(&mut self, value: T) {
        self.window.push(value);
    }

    /// Estimate at the configured evaluation point (the newest sample by default)
    pub fn filter(&self) -> T {
        self.sg_filter.apply(self.window.iter().copied(), T::zero())
    }

    /// True once the window holds `2m+1` samples
    pub fn ready(&self) -> bool {
        self.window.is_full()
    }

    pub fn config(&self) -> &WindowConfig {
        self.sg_filter.config()
    }

    /// Current window contents, oldest first
    pub fn window(&self) -> &SlidingWindow<T> {
        &self.window
    }
}
