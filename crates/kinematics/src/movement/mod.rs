//! Movement resolution built on top of the collision queries
//!
//! # Module Organization
//!
//! - [`resolve`] - Slide/bounce velocity decomposition and slide movement
//! - [`depenetration`] - Push-out correction for overlapping shapes
//! - [`grounding`] - Downward ground probes
//! - [`character`] - One-call character step composing the above

pub mod character;
pub mod depenetration;
pub mod grounding;
pub mod resolve;

pub use character::{CharacterStep, step_character};
pub use depenetration::{depenetrate_capsule_box, depenetrate_sphere_box};
pub use grounding::{
    capsule_grounded_box, capsule_grounded_mesh, sphere_grounded_box, sphere_grounded_mesh,
};
pub use resolve::{
    bounce_velocity, slide_capsule_box, slide_capsule_mesh, slide_sphere_box, slide_sphere_mesh,
    slide_velocity,
};
