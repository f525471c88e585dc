//! Twist smoothing with frame normalization.
//!
//! Twists are laid out as `[vx, vy, vz, wx, wy, wz]`. Samples taken in a frame
//! that rotates over time cannot be averaged as-is, so every added twist is
//! first re-expressed in a fixed reference frame. The smoother tracks the
//! orientation of the frame incoming twists are expressed in (identity unless
//! [`VelocitySmoother::set_frame`] says otherwise).
//!
//! [`VelocitySmoother::filter`] returns the estimate in the reference frame and
//! [`VelocitySmoother::filter_in_frame`] rotates it back into the current
//! sample frame. Seeds given to `reset` are taken as reference-frame values.

use nalgebra::{Rotation3, Vector6};

use crate::coefficients::WeightCache;
use crate::config::WindowConfig;
use crate::error::Result;
use crate::euclidean::EuclideanSmoother;

/// 6D velocity twist, linear part first
pub type Twist = Vector6<f64>;

/// Real-time smoother for 6D twists.
///
/// A configuration with a non-zero derivative order turns it into an
/// acceleration estimator.
#[derive(Debug, Clone)]
pub struct VelocitySmoother {
    vfilter: EuclideanSmoother<Twist>,
    frame: Rotation3<f64>,
}

impl VelocitySmoother {
    pub fn new(config: WindowConfig) -> Result<Self> {
        Ok(Self {
            vfilter: EuclideanSmoother::new(config)?,
            frame: Rotation3::identity(),
        })
    }

    pub fn with_cache(config: WindowConfig, cache: &mut WeightCache) -> Result<Self> {
        Ok(Self {
            vfilter: EuclideanSmoother::with_cache(config, cache)?,
            frame: Rotation3::identity(),
        })
    }

    /// Sets the orientation, relative to the reference frame, of the frame
    /// subsequent twists are expressed in
    pub fn set_frame(&mut self, frame: Rotation3<f64>) {
        self.frame = frame;
    }

    pub fn frame(&self) -> &Rotation3<f64> {
        &self.frame
    }

    pub fn reset(&mut self, twist: Twist) {
        self.vfilter.reset(twist);
    }

    /// Seeds the window with a zero twist
    pub fn reset_zero(&mut self) {
        self.vfilter.reset_zero();
    }

    pub fn clear(&mut self) {
        self.vfilter.clear();
    }

    /// Adds a twist expressed in the current frame
    pub fn add(&mut self, twist: Twist) {
        let converted = self.convert(&twist);
        self.vfilter.add(converted);
    }

    /// Smoothed twist in the reference frame
    pub fn filter(&self) -> Twist {
        self.vfilter.filter()
    }

    /// Smoothed twist re-expressed in the current frame.
    ///
    /// The current frame is used even when a lagged evaluation point
    /// (`t < m`) makes the estimate refer to an older sample, whose frame may
    /// differ. Use [`filter`](Self::filter) and rotate with the matching frame
    /// in that case.
    pub fn filter_in_frame(&self) -> Twist {
        rotate(&self.frame.inverse(), &self.vfilter.filter())
    }

    pub fn ready(&self) -> bool {
        self.vfilter.ready()
    }

    pub fn config(&self) -> &WindowConfig {
        self.vfilter.config()
    }

    fn convert(&self, twist: &Twist) -> Twist {
        rotate(&self.frame, twist)
    }
}

/// Rotates both the linear and angular parts of a twist
fn rotate(r: &Rotation3<f64>, twist: &Twist) -> Twist {
    let linear = r * twist.fixed_rows::<3>(0).into_owned();
    let angular = r * twist.fixed_rows::<3>(3).into_owned();
    Twist::new(linear.x, linear.y, linear.z, angular.x, angular.y, angular.z)
}
