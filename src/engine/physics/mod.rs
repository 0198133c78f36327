// Physics system using rapier3d

pub mod body;
mod collision;
mod world;

pub use body::{CapsuleDims, CharacterBody, KinematicCapsule};
pub use collision::CollisionGroups;
pub use world::{ColliderHandle, PhysicsWorld};

use glam::Vec3;
use rapier3d::na as nalgebra;
use rapier3d::prelude::{point, vector, Point, Real, Vector};

/// glam -> nalgebra vector
pub fn to_vector(v: Vec3) -> Vector<Real> {
    vector![v.x, v.y, v.z]
}

/// glam -> nalgebra point
pub fn to_point(v: Vec3) -> Point<Real> {
    point![v.x, v.y, v.z]
}

/// nalgebra -> glam
pub fn to_vec3(v: &Vector<Real>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}
