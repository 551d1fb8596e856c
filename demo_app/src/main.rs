//! Character movement demo
//!
//! Drops a capsule character onto a floor mesh, walks it into an obstacle
//! box, and logs what the kinematics queries report each step. Run with
//! `RUST_LOG=info` (or `debug` for per-step output).

use kinematics::prelude::*;

/// Build a simple two-triangle floor spanning 40x40 units at y = 0
fn build_floor() -> CollisionMesh {
    let vertices = [
        Vec3::new(-20.0, 0.0, -20.0),
        Vec3::new(20.0, 0.0, -20.0),
        Vec3::new(20.0, 0.0, 20.0),
        Vec3::new(-20.0, 0.0, 20.0),
    ];
    let indices = [0, 1, 2, 0, 2, 3];
    CollisionMesh::new(&vertices, &indices).expect("floor mesh is statically valid")
}

fn main() {
    kinematics::foundation::logging::init();

    let config = KinematicsConfig::default();
    log::info!(
        "config: skin={} ground_check={} gravity={}",
        config.skin_width,
        config.ground_check_distance,
        config.gravity
    );

    let floor = build_floor();
    let transform = Mat4::identity();
    let wall = BoundingBox::new(Vec3::new(5.0, 0.0, -2.0), Vec3::new(6.0, 3.0, 2.0));

    // A character capsule dropped from the air, walking toward the wall
    let mut capsule = Capsule::new(Vec3::new(0.0, 3.5, 0.0), Vec3::new(0.0, 4.5, 0.0), 0.5);
    let mut velocity = Vec3::new(2.0, 0.0, 0.0);
    let dt = 1.0 / 60.0;

    for frame in 0..600 {
        let step = step_character(&capsule, velocity, dt, &floor, &transform, &[wall], &config);
        capsule = step.capsule;
        velocity = step.velocity;

        log::debug!(
            "frame {frame}: pos=({:.2}, {:.2}, {:.2}) grounded={}",
            capsule.start.x,
            capsule.start.y,
            capsule.start.z,
            step.grounded
        );

        // Stop once the wall has absorbed the walk
        if check_collision_capsule_box(&capsule.translated(Vec3::new(0.05, 0.0, 0.0)), &wall) {
            log::info!("reached the wall after {frame} frames");
            break;
        }
    }

    // Report what a few direct queries see from the final position
    let ground = capsule_grounded_mesh(&capsule, config.ground_check_distance, &floor, &transform);
    log::info!(
        "final position ({:.2}, {:.2}, {:.2}), grounded={}",
        capsule.start.x,
        capsule.start.y,
        capsule.start.z,
        ground.is_some()
    );

    let ray = Ray::new(capsule.start, Vec3::new(1.0, 0.0, 0.0));
    match raycast_box(&ray, &wall) {
        Some(hit) => log::info!("wall is {:.2} units ahead", hit.distance),
        None => log::info!("no wall ahead"),
    }
}
