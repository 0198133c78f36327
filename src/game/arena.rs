// Level trigger zones: hazards that hurt and volumes that respawn
//
// Zones only track who is inside and report what should happen. The
// character manager turns those reports into queued commands.

use std::collections::{HashMap, HashSet};

use glam::Vec3;

use super::characters::CharacterId;

/// Axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Corners in any order
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }
}

/// Damages whoever stands inside every `interval` seconds (lava, acid)
#[derive(Debug, Clone)]
pub struct DamageZone {
    pub name: String,
    bounds: Aabb,
    damage: f32,
    interval: f32,
    /// Time since the last hit, per occupant
    timers: HashMap<CharacterId, f32>,
}

impl DamageZone {
    pub const DEFAULT_DAMAGE: f32 = 10.0;
    pub const DEFAULT_INTERVAL: f32 = 1.0;

    pub fn new(name: &str, bounds: Aabb, damage: f32, interval: f32) -> Self {
        Self {
            name: name.to_string(),
            bounds,
            damage,
            interval: interval.max(0.0),
            timers: HashMap::new(),
        }
    }

    /// Lava floor with the stock damage and interval
    pub fn lava(bounds: Aabb) -> Self {
        Self::new("lava", bounds, Self::DEFAULT_DAMAGE, Self::DEFAULT_INTERVAL)
    }

    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    pub fn contains(&self, point: Vec3) -> bool {
        self.bounds.contains(point)
    }

    pub fn is_occupied_by(&self, id: CharacterId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Report the occupant state of one character for this tick. Returns the
    /// damage to deal, if a hit is due.
    ///
    /// Entering and leaving both reset the timer, so the first hit lands one
    /// full interval after entry.
    pub fn update(&mut self, id: CharacterId, inside: bool, dt: f32) -> Option<f32> {
        if !inside {
            if self.timers.remove(&id).is_some() {
                log::debug!("#{} left {}", id, self.name);
            }
            return None;
        }

        let Some(timer) = self.timers.get_mut(&id) else {
            log::debug!("#{} entered {}", id, self.name);
            self.timers.insert(id, 0.0);
            return None;
        };

        *timer += dt;
        if *timer >= self.interval {
            *timer = 0.0;
            Some(self.damage)
        } else {
            None
        }
    }

    /// Drop any state kept for a removed character
    pub fn forget(&mut self, id: CharacterId) {
        self.timers.remove(&id);
    }
}

/// Respawns whoever enters it at a fixed point (kill planes, out of bounds)
#[derive(Debug, Clone)]
pub struct RespawnZone {
    bounds: Aabb,
    respawn_point: Vec3,
    respawn_yaw: f32,
    inside: HashSet<CharacterId>,
}

impl RespawnZone {
    pub fn new(bounds: Aabb, respawn_point: Vec3, respawn_yaw: f32) -> Self {
        Self {
            bounds,
            respawn_point,
            respawn_yaw,
            inside: HashSet::new(),
        }
    }

    pub fn contains(&self, point: Vec3) -> bool {
        self.bounds.contains(point)
    }

    pub fn respawn_point(&self) -> Vec3 {
        self.respawn_point
    }

    pub fn respawn_yaw(&self) -> f32 {
        self.respawn_yaw
    }

    /// True on the tick a character enters
    pub fn update(&mut self, id: CharacterId, inside: bool) -> bool {
        if inside {
            self.inside.insert(id)
        } else {
            self.inside.remove(&id);
            false
        }
    }

    pub fn forget(&mut self, id: CharacterId) {
        self.inside.remove(&id);
    }
}
