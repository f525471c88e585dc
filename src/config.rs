use crate::error::{Result, SmootherError};

/// Window configuration shared by every smoother.
///
/// The window holds `2m+1` samples. By default the polynomial fit is evaluated
/// at the newest sample (`t = m`), which is the causal design point for a
/// control loop, and the smoothed value itself is estimated (`s = 0`).
///
/// # Example
///
/// ```rust
/// use spatial_savitzky_golay::WindowConfig;
///
/// let config = WindowConfig::new(5, 2).expect("Valid parameters");
/// assert_eq!(config.capacity(), 11);
/// assert_eq!(config.eval_point(), 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    half_width: usize,
    poly_order: usize,
    eval_point: isize,
    derivative: usize,
    time_step: f64,
}

impl WindowConfig {
    /// Creates a causal smoothing configuration with validation
    ///
    /// # Arguments
    ///
    /// * `half_width` - Number of samples on each side of the window center (`m`)
    /// * `poly_order` - Order of the fitted polynomial (must be < `2m+1`)
    pub fn new(half_width: usize, poly_order: usize) -> Result<Self> {
        let capacity = 2 * half_width + 1;
        if poly_order >= capacity {
            return Err(SmootherError::InvalidPolynomialOrder(poly_order, capacity));
        }

        Ok(Self {
            half_width,
            poly_order,
            eval_point: half_width as isize,
            derivative: 0,
            time_step: 1.0,
        })
    }

    /// Moves the evaluation point inside the window.
    ///
    /// `t = m` is the newest sample, `t = 0` the window center and `t = -m`
    /// the oldest sample. Anything other than `m` trades latency for accuracy.
    pub fn with_eval_point(mut self, eval_point: isize) -> Result<Self> {
        let m = self.half_width as isize;
        if eval_point < -m || eval_point > m {
            return Err(SmootherError::InvalidEvalPoint(eval_point, self.half_width));
        }
        self.eval_point = eval_point;
        Ok(self)
    }

    /// Sets the derivative order to estimate (0 for smoothing)
    pub fn with_derivative(mut self, derivative: usize) -> Self {
        self.derivative = derivative;
        self
    }

    /// Sets the sample period, used to scale derivative estimates
    pub fn with_time_step(mut self, time_step: f64) -> Result<Self> {
        if !time_step.is_finite() || time_step <= 0.0 {
            return Err(SmootherError::InvalidTimeStep(time_step));
        }
        self.time_step = time_step;
        Ok(self)
    }

    /// Window half-width `m`
    pub fn half_width(&self) -> usize {
        self.half_width
    }

    /// Window capacity, always `2m+1`
    pub fn capacity(&self) -> usize {
        2 * self.half_width + 1
    }

    pub fn poly_order(&self) -> usize {
        self.poly_order
    }

    pub fn eval_point(&self) -> isize {
        self.eval_point
    }

    pub fn derivative(&self) -> usize {
        self.derivative
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    /// Offsets of the window samples, oldest first, relative to the evaluation point
    pub(crate) fn offsets(&self) -> Vec<isize> {
        let m = self.half_width as isize;
        (0..self.capacity() as isize)
            .map(|k| k - m - self.eval_point)
            .collect()
    }
}
