//! # Spatial Savitzky-Golay Smoothing
//!
//! Causal, real-time Savitzky-Golay smoothing of geometric signals sampled at a
//! fixed rate: vectors, rotations, rigid transforms and 6D velocity twists.
//!
//! Every smoother keeps a sliding window of the last `2m+1` samples and fits a
//! polynomial over it by least squares, evaluated at the newest sample. Vector
//! signals are fitted directly. Rotations are first mapped to rotation vectors
//! relative to the newest sample, fitted there, and mapped back, so the output
//! is always a proper rotation.
//!
//! ## Features
//!
//! - One generic smoother for any vector-space sample (`f64`, `Vector3`, `Vector6`)
//! - Tangent-space smoothing of `Rotation3`
//! - Rigid transform (`Isometry3`) and twist smoothing built on top
//! - Optional derivative estimation for vector signals
//! - No allocation once constructed
//!
//! ## Example
//!
//! ```rust
//! use nalgebra::{Isometry3, Translation3, UnitQuaternion};
//! use spatial_savitzky_golay::{TransformSmoother, WindowConfig};
//!
//! let config = WindowConfig::new(3, 2).expect("Invalid parameters");
//! let mut smoother = TransformSmoother::new(config).expect("Invalid filter");
//! smoother.reset_identity();
//!
//! let pose = Isometry3::from_parts(
//!     Translation3::new(0.1, 0.0, 0.2),
//!     UnitQuaternion::from_euler_angles(0.0, 0.0, 0.1),
//! );
//! smoother.add(&pose);
//! let estimate = smoother.filter();
//! ```

mod coefficients;
mod config;
mod error;
mod euclidean;
mod filter;
mod rotation;
mod transform;
mod velocity;
mod window;

pub use coefficients::{compute_weights, compute_weights_for_offsets, WeightCache};
pub use config::WindowConfig;
pub use error::{Result, SmootherError};
pub use euclidean::EuclideanSmoother;
pub use filter::{Sample, SavitzkyGolayFilter};
pub use rotation::RotationSmoother;
pub use transform::TransformSmoother;
pub use velocity::{Twist, VelocitySmoother};
pub use window::SlidingWindow;
