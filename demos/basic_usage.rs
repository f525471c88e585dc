//! Example usage of the spatial Savitzky-Golay smoothers

use nalgebra::{Isometry3, Rotation3, Translation3, UnitQuaternion, Vector3};
use spatial_savitzky_golay::{
    EuclideanSmoother, RotationSmoother, TransformSmoother, Twist, VelocitySmoother,
    WindowConfig,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Spatial Savitzky-Golay Examples ===\n");

    let config = WindowConfig::new(4, 2)?;

    // Example 1: Step response of a scalar signal
    println!("1. Scalar step (m=4, order=2):");
    let mut scalar = EuclideanSmoother::<f64>::new(config.clone())?;
    for k in 0..12 {
        scalar.add(if k < 3 { 0.0 } else { 1.0 });
        println!("  k={:2} ready={} value={:.4}", k, scalar.ready(), scalar.filter());
    }

    // Example 2: Noisy rotation about a fixed axis
    println!("\n2. Rotation smoothing:");
    let mut rotation = RotationSmoother::new(config.clone())?;
    let axis = Vector3::new(0.0, 0.0, 1.0);
    rotation.reset_identity();
    for k in 0..10 {
        let jitter = Vector3::new(0.01 * (k as f64 * 1.3).sin(), 0.0, 0.01 * (k as f64 * 2.1).cos());
        let sample = Rotation3::from_scaled_axis(axis * (0.05 * k as f64) + jitter);
        rotation.add(sample);
        let out = rotation.filter();
        println!(
            "  k={} raw angle={:.4} smoothed angle={:.4} det={:.6}",
            k,
            sample.angle(),
            out.angle(),
            out.matrix().determinant()
        );
    }

    // Example 3: Rigid transform
    println!("\n3. Transform smoothing:");
    let mut transform = TransformSmoother::new(config.clone())?;
    transform.clear();
    for k in 0..9 {
        let t = k as f64 * 0.1;
        transform.add(&Isometry3::from_parts(
            Translation3::new(t, 2.0 * t, 0.0),
            UnitQuaternion::from_euler_angles(0.0, 0.0, t),
        ));
    }
    println!("  ready={} estimate={}", transform.ready(), transform.filter());

    // Example 4: Twists measured in a rotating body frame
    println!("\n4. Velocity smoothing:");
    let mut velocity = VelocitySmoother::new(config)?;
    let world = Twist::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.2);
    for k in 0..9 {
        let frame = Rotation3::from_axis_angle(&Vector3::z_axis(), 0.2 * k as f64);
        let linear = frame.inverse() * world.fixed_rows::<3>(0).into_owned();
        let angular = frame.inverse() * world.fixed_rows::<3>(3).into_owned();
        velocity.set_frame(frame);
        velocity.add(Twist::new(linear.x, linear.y, linear.z, angular.x, angular.y, angular.z));
    }
    println!("  reference frame: {:?}", velocity.filter().as_slice());
    println!("  body frame:      {:?}", velocity.filter_in_frame().as_slice());

    Ok(())
}
