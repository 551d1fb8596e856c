//! # Kinematics
//!
//! A stateless collision and character kinematics library for 3D games.
//!
//! ## Features
//!
//! - **Overlap Tests**: capsule vs box, sphere, capsule, and triangle mesh
//! - **Penetration Resolution**: depth, normal, and minimum translation vector
//! - **Swept Collision**: time-of-impact for moving spheres and capsules
//! - **Movement Resolution**: surface sliding, bouncing, and depenetration
//! - **Queries**: raycasts against boxes, meshes, and models; ground probes
//!
//! Every operation is a pure function of its inputs: no global state, no
//! internal allocation, safe to call from multiple threads every frame.
//! Missing results are reported through boolean flags or `Option`, never
//! through panics or errors. Broad-phase acceleration over scene geometry is
//! deliberately out of scope and left to the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use kinematics::prelude::*;
//!
//! let capsule = Capsule::new(
//!     Vec3::new(0.0, 0.5, 0.0),
//!     Vec3::new(0.0, 1.5, 0.0),
//!     0.5,
//! );
//! let wall = BoundingBox::new(Vec3::new(2.0, 0.0, -1.0), Vec3::new(3.0, 2.0, 1.0));
//!
//! // Where does the capsule stop when moving toward the wall?
//! let sweep = sweep_capsule_box(&capsule, Vec3::new(5.0, 0.0, 0.0), &wall);
//! assert!(sweep.hit);
//!
//! // And what movement does a slide resolve it to?
//! let (applied, normal) = slide_capsule_box(&capsule, Vec3::new(5.0, 0.0, 0.0), &wall);
//! assert!(normal.is_some());
//! assert!(applied.x < 5.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod collision;
pub mod config;
pub mod foundation;
pub mod geometry;
pub mod movement;

/// Common imports for library users
pub mod prelude {
    pub use crate::collision::{
        Penetration, SweepCollision, check_collision_capsule_box, check_collision_capsule_mesh,
        check_collision_capsule_sphere, check_collision_capsules, check_penetration_capsule_box,
        check_penetration_capsule_sphere, check_penetration_capsules, raycast_box, raycast_mesh,
        raycast_model, sweep_capsule_box, sweep_capsule_mesh, sweep_sphere_box, sweep_sphere_mesh,
        sweep_sphere_point, sweep_sphere_segment, sweep_sphere_triangle,
        sweep_sphere_triangle_plane,
    };
    pub use crate::config::{Config, ConfigError, KinematicsConfig};
    pub use crate::foundation::math::{Mat4, Vec3};
    pub use crate::geometry::{
        BoundingBox, Capsule, CollisionMesh, MeshError, Model, Ray, RayCollision, Triangle,
    };
    pub use crate::movement::{
        CharacterStep, bounce_velocity, capsule_grounded_box, capsule_grounded_mesh,
        depenetrate_capsule_box, depenetrate_sphere_box, slide_capsule_box, slide_capsule_mesh,
        slide_sphere_box, slide_sphere_mesh, slide_velocity, sphere_grounded_box,
        sphere_grounded_mesh, step_character,
    };
}
