use nalgebra::{Isometry3, Matrix4, Rotation3, Translation3, UnitQuaternion, Vector3};

use crate::coefficients::WeightCache;
use crate::config::WindowConfig;
use crate::error::Result;
use crate::euclidean::EuclideanSmoother;
use crate::rotation::RotationSmoother;

/// Real-time smoother for rigid transforms.
///
/// Each transform is split into its translation, smoothed as a Euclidean
/// signal, and its rotation, smoothed in the tangent space of SO(3). The two
/// estimates are recomposed on [`filter`](Self::filter). Both legs are built
/// from the same configuration.
#[derive(Debug, Clone)]
pub struct TransformSmoother {
    trans_filter: EuclideanSmoother<Vector3<f64>>,
    rot_filter: RotationSmoother,
}

impl TransformSmoother {
    pub fn new(config: WindowConfig) -> Result<Self> {
        let mut cache = WeightCache::new();
        Self::with_cache(config, &mut cache)
    }

    pub fn with_cache(config: WindowConfig, cache: &mut WeightCache) -> Result<Self> {
        let rot_filter = RotationSmoother::with_cache(config.clone(), cache)?;
        let trans_filter = EuclideanSmoother::with_cache(config, cache)?;
        Ok(Self {
            trans_filter,
            rot_filter,
        })
    }

    pub fn reset(&mut self, t: &Isometry3<f64>) {
        self.trans_filter.reset(t.translation.vector);
        self.rot_filter.reset(t.rotation.to_rotation_matrix());
    }

    /// Seeds both legs with the identity transform
    pub fn reset_identity(&mut self) {
        self.trans_filter.reset_zero();
        self.rot_filter.reset_identity();
    }

    pub fn clear(&mut self) {
        self.trans_filter.clear();
        self.rot_filter.clear();
    }

    pub fn add(&mut self, t: &Isometry3<f64>) {
        self.trans_filter.add(t.translation.vector);
        self.rot_filter.add(t.rotation.to_rotation_matrix());
    }

    /// Adds a 4x4 homogeneous matrix; its linear block is projected onto SO(3)
    pub fn add_homogeneous(&mut self, t: &Matrix4<f64>) {
        self.trans_filter.add(t.fixed_view::<3, 1>(0, 3).into_owned());
        self.rot_filter.add_matrix(&t.fixed_view::<3, 3>(0, 0).into_owned());
    }

    pub fn filter(&self) -> Isometry3<f64> {
        let translation = Translation3::from(self.trans_filter.filter());
        let rotation: Rotation3<f64> = self.rot_filter.filter();
        Isometry3::from_parts(translation, UnitQuaternion::from_rotation_matrix(&rotation))
    }

    /// Smoothed transform as a 4x4 homogeneous matrix
    pub fn filter_homogeneous(&self) -> Matrix4<f64> {
        self.filter().to_homogeneous()
    }

    /// True only when both the translation and rotation legs are ready
    pub fn ready(&self) -> bool {
        self.trans_filter.ready() && self.rot_filter.ready()
    }

    pub fn config(&self) -> &WindowConfig {
        self.trans_filter.config()
    }

    pub fn translation_leg(&self) -> &EuclideanSmoother<Vector3<f64>> {
        &self.trans_filter
    }

    pub fn rotation_leg(&self) -> &RotationSmoother {
        &self.rot_filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn pose(x: f64, y: f64, z: f64, roll: f64, pitch: f64, yaw: f64) -> Isometry3<f64> {
        Isometry3::from_parts(
            Translation3::new(x, y, z),
            UnitQuaternion::from_euler_angles(roll, pitch, yaw),
        )
    }

    fn smoother(m: usize, order: usize) -> TransformSmoother {
        TransformSmoother::new(WindowConfig::new(m, order).unwrap()).unwrap()
    }

    #[test]
    fn test_reset_seeds_estimate() {
        let mut s = smoother(2, 2);
        let t = pose(1.0, -2.0, 0.5, 0.1, 0.2, 0.3);
        s.reset(&t);
        assert!(s.ready());
        assert_abs_diff_eq!(s.filter(), t, epsilon = 1e-10);
    }

    #[test]
    fn test_constant_pose_reproduced() {
        let mut s = smoother(3, 2);
        let t = pose(0.4, 0.5, 0.6, -0.7, 0.8, 1.9);
        s.clear();
        for _ in 0..7 {
            s.add(&t);
        }
        assert_abs_diff_eq!(s.filter(), t, epsilon = 1e-10);
    }

    #[test]
    fn test_ready_requires_both_legs() {
        let mut s = smoother(1, 1);
        s.clear();
        assert!(!s.ready());
        s.add(&Isometry3::identity());
        s.add(&Isometry3::identity());
        assert!(!s.ready());
        s.add(&Isometry3::identity());
        assert!(s.ready());
        assert_eq!(
            s.ready(),
            s.translation_leg().ready() && s.rotation_leg().ready()
        );
    }

    #[test]
    fn test_output_decomposes_into_legs() {
        let mut s = smoother(2, 2);
        s.reset_identity();
        for i in 0..7 {
            let k = i as f64;
            s.add(&pose(0.1 * k, (0.3 * k).sin(), 1.0, 0.2 * k, -0.1 * k, 0.05 * k * k));
        }

        let out = s.filter();
        assert_abs_diff_eq!(
            out.translation.vector,
            s.translation_leg().filter(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            out.rotation.to_rotation_matrix(),
            s.rotation_leg().filter(),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_homogeneous_roundtrip_for_constant_input() {
        let mut s = smoother(1, 1);
        let t = pose(3.0, 2.0, 1.0, 0.0, 0.5, 0.0).to_homogeneous();
        s.clear();
        for _ in 0..3 {
            s.add_homogeneous(&t);
        }
        assert_abs_diff_eq!(s.filter_homogeneous(), t, epsilon = 1e-9);
    }

    #[test]
    fn test_config_is_shared() {
        let config = WindowConfig::new(4, 3).unwrap();
        let s = TransformSmoother::new(config.clone()).unwrap();
        assert_eq!(s.config(), &config);
        assert_eq!(s.rotation_leg().config(), &config);
    }
}
