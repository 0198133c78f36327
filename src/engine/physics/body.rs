use glam::Vec3;
use rapier3d::control::{CharacterLength, KinematicCharacterController};
use rapier3d::prelude::*;

use super::collision::CollisionGroups;
use super::world::{ColliderHandle, PhysicsWorld};
use super::{to_vec3, to_vector};

/// Capsule dimensions, measured from the body origin at the feet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapsuleDims {
    pub height: f32,
    pub radius: f32,
    /// Capsule center relative to the body origin
    pub center: Vec3,
}

impl CapsuleDims {
    pub fn standing(height: f32, radius: f32) -> Self {
        Self {
            height,
            radius,
            center: Vec3::Y * height * 0.5,
        }
    }

    /// Half length of the capsule's inner segment
    pub fn half_segment(&self) -> f32 {
        (self.height * 0.5 - self.radius).max(0.0)
    }
}

/// The physical body a character drives.
///
/// Collision resolution is the body's job: `move_by` asks for a displacement
/// and the body decides how much of it happens. `World` is whatever the body
/// needs access to while moving (the physics world, or nothing for simple
/// bodies).
pub trait CharacterBody {
    type World;

    /// Body origin (feet)
    fn position(&self) -> Vec3;

    /// Ground contact reported by the last move
    fn is_grounded(&self) -> bool;

    /// Apply a displacement for this tick
    fn move_by(&mut self, world: &mut Self::World, displacement: Vec3, dt: f32);

    fn capsule(&self) -> CapsuleDims;

    fn set_capsule(&mut self, world: &mut Self::World, height: f32, center: Vec3);

    /// Whether a capsule of `stand_height` would fit at the current position
    fn has_headroom(&self, world: &Self::World, stand_height: f32) -> bool;

    /// Place the body without sweeping (respawn)
    fn teleport(&mut self, world: &mut Self::World, position: Vec3);
}

/// Rapier-backed kinematic character capsule
#[derive(Debug)]
pub struct KinematicCapsule {
    collider: ColliderHandle,
    controller: KinematicCharacterController,
    origin: Vec3,
    dims: CapsuleDims,
    grounded: bool,
}

impl KinematicCapsule {
    /// Insert a capsule collider with its feet at `origin`
    pub fn spawn(
        world: &mut PhysicsWorld,
        origin: Vec3,
        height: f32,
        radius: f32,
        skin_width: f32,
    ) -> Self {
        let dims = CapsuleDims::standing(height, radius);
        let collider = world.add_collider(presets::character_collider(&dims, origin));

        let controller = KinematicCharacterController {
            offset: CharacterLength::Absolute(skin_width),
            ..KinematicCharacterController::default()
        };

        Self {
            collider,
            controller,
            origin,
            dims,
            grounded: false,
        }
    }

    pub fn collider(&self) -> ColliderHandle {
        self.collider
    }

    fn sync_collider(&self, world: &mut PhysicsWorld) {
        if let Some(collider) = world.get_collider_mut(self.collider) {
            collider.set_translation(to_vector(self.origin + self.dims.center));
        }
    }
}

impl CharacterBody for KinematicCapsule {
    type World = PhysicsWorld;

    fn position(&self) -> Vec3 {
        self.origin
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn move_by(&mut self, world: &mut PhysicsWorld, displacement: Vec3, dt: f32) {
        let Some(movement) =
            world.move_character(&self.controller, self.collider, to_vector(displacement), dt)
        else {
            return;
        };

        self.origin += to_vec3(&movement.translation);
        self.grounded = movement.grounded;
        self.sync_collider(world);
    }

    fn capsule(&self) -> CapsuleDims {
        self.dims
    }

    fn set_capsule(&mut self, world: &mut PhysicsWorld, height: f32, center: Vec3) {
        self.dims.height = height.max(self.dims.radius * 2.0);
        self.dims.center = center;
        if let Some(collider) = world.get_collider_mut(self.collider) {
            collider.set_shape(SharedShape::capsule_y(
                self.dims.half_segment(),
                self.dims.radius,
            ));
        }
        self.sync_collider(world);
    }

    fn has_headroom(&self, world: &PhysicsWorld, stand_height: f32) -> bool {
        let radius = self.dims.radius * 0.95;
        let bottom = self.origin.y + radius + 0.05;
        let top = self.origin.y + stand_height - radius - 0.05;
        let half = ((top - bottom) * 0.5).max(0.0);

        let probe = SharedShape::capsule_y(half, radius);
        let position = Isometry::translation(self.origin.x, (bottom + top) * 0.5, self.origin.z);
        !world.intersects_shape(&position, &*probe, Some(self.collider))
    }

    fn teleport(&mut self, world: &mut PhysicsWorld, position: Vec3) {
        self.origin = position;
        self.grounded = false;
        self.sync_collider(world);
    }
}

/// Common collider configurations for level and characters
pub mod presets {
    use super::*;

    /// Character capsule collider placed with its feet at `origin`
    pub fn character_collider(dims: &CapsuleDims, origin: Vec3) -> Collider {
        let center = origin + dims.center;
        ColliderBuilder::capsule_y(dims.half_segment(), dims.radius)
            .translation(to_vector(center))
            .collision_groups(CollisionGroups::Character.to_interaction_groups())
            .friction(0.0)
            .build()
    }

    /// Static box (floor, wall, ceiling slab)
    pub fn level_box(center: Vec3, half_extents: Vec3) -> Collider {
        ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
            .translation(to_vector(center))
            .collision_groups(CollisionGroups::Level.to_interaction_groups())
            .friction(0.3)
            .build()
    }
}
