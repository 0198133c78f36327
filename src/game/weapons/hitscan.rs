// Hit-scan weapon: instant ray shot, short flash, recoil on the shooter

use glam::Vec3;
use rapier3d::prelude::QueryFilter;
use serde::Deserialize;

use crate::engine::physics::{
    to_point, to_vector, CollisionGroups, ColliderHandle, KinematicCapsule, PhysicsWorld,
};
use crate::game::characters::{Character, RecoilIntegrator, RecoilMode};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct WeaponTuning {
    /// How far a shot reaches
    pub max_distance: f32,
    /// Seconds the shot trace stays visible
    pub flash_time: f32,
    /// Recoil pushed into the shooter on a normal shot
    pub kick_horizontal: f32,
    pub kick_vertical: f32,
    /// Fire as a blast jump instead of a plain kick
    pub blast_jump: bool,
    pub blast_horizontal: f32,
    pub blast_upward: f32,
}

pub const BASE_WEAPON: WeaponTuning = WeaponTuning {
    max_distance: 50.0,
    flash_time: 0.06,
    kick_horizontal: 6.0,
    kick_vertical: 0.0,
    blast_jump: false,
    blast_horizontal: 8.0,
    blast_upward: 10.0,
};

impl Default for WeaponTuning {
    fn default() -> Self {
        BASE_WEAPON
    }
}

/// What a shot touched
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotHit {
    pub collider: ColliderHandle,
    pub distance: f32,
}

/// Line a shot travelled, for drawing and hit handling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotTrace {
    pub start: Vec3,
    pub end: Vec3,
    pub hit: Option<ShotHit>,
}

#[derive(Debug, Clone)]
pub struct HitscanWeapon {
    tuning: WeaponTuning,
    flash_remaining: f32,
    last_trace: Option<ShotTrace>,
    shots_fired: u32,
}

impl HitscanWeapon {
    pub fn new(tuning: WeaponTuning) -> Self {
        Self {
            tuning,
            flash_remaining: 0.0,
            last_trace: None,
            shots_fired: 0,
        }
    }

    pub fn tuning(&self) -> &WeaponTuning {
        &self.tuning
    }

    pub fn set_blast_jump(&mut self, enabled: bool) {
        self.tuning.blast_jump = enabled;
    }

    /// Trace of the latest shot, while its flash lasts
    pub fn flash_visible(&self) -> Option<&ShotTrace> {
        if self.flash_remaining > 0.0 {
            self.last_trace.as_ref()
        } else {
            None
        }
    }

    pub fn last_trace(&self) -> Option<&ShotTrace> {
        self.last_trace.as_ref()
    }

    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }

    /// Count down the flash
    pub fn tick(&mut self, dt: f32) {
        self.flash_remaining = (self.flash_remaining - dt).max(0.0);
    }

    /// Ray cast from `origin` along `direction`, ignoring `shooter`, and push
    /// the shooter back along `-direction`
    pub fn fire(
        &mut self,
        world: &PhysicsWorld,
        shooter: Option<ColliderHandle>,
        origin: Vec3,
        direction: Vec3,
        recoil: &mut RecoilIntegrator,
    ) -> ShotTrace {
        let dir = direction.normalize_or_zero();
        let trace = self.trace(world, shooter, origin, dir);

        if self.tuning.blast_jump {
            recoil.blast(
                -dir,
                self.tuning.blast_horizontal,
                self.tuning.blast_upward,
                Some(RecoilMode::Always),
            );
        } else {
            recoil.kick(
                -dir,
                Some(self.tuning.kick_horizontal),
                Some(self.tuning.kick_vertical),
            );
        }

        self.shots_fired += 1;
        self.flash_remaining = self.tuning.flash_time;
        self.last_trace = Some(trace);

        match trace.hit {
            Some(hit) => log::debug!("Shot hit {:?} at {:.2} m", hit.collider, hit.distance),
            None => log::debug!("Shot missed"),
        }
        trace
    }

    /// Fire from a character's eye along its view direction
    pub fn fire_from(
        &mut self,
        shooter: &mut Character<KinematicCapsule>,
        world: &PhysicsWorld,
    ) -> ShotTrace {
        let origin = shooter.eye_position();
        let direction = shooter.camera().view_direction();
        let collider = shooter.body().collider();
        self.fire(world, Some(collider), origin, direction, shooter.recoil_mut())
    }

    fn trace(
        &self,
        world: &PhysicsWorld,
        shooter: Option<ColliderHandle>,
        origin: Vec3,
        dir: Vec3,
    ) -> ShotTrace {
        if dir == Vec3::ZERO {
            return ShotTrace {
                start: origin,
                end: origin,
                hit: None,
            };
        }

        let mut filter = QueryFilter::default()
            .exclude_sensors()
            .groups(CollisionGroups::Shot.to_interaction_groups());
        if let Some(handle) = shooter {
            filter = filter.exclude_collider(handle);
        }

        let max = self.tuning.max_distance;
        match world.raycast(to_point(origin), to_vector(dir), max, true, filter) {
            Some((collider, distance)) => ShotTrace {
                start: origin,
                end: origin + dir * distance,
                hit: Some(ShotHit { collider, distance }),
            },
            None => ShotTrace {
                start: origin,
                end: origin + dir * max,
                hit: None,
            },
        }
    }
}

impl Default for HitscanWeapon {
    fn default() -> Self {
        Self::new(WeaponTuning::default())
    }
}
