// Deterministic body for locomotion tests: an infinite floor and an optional
// flat ceiling, no walls.

use glam::Vec3;

use crate::engine::physics::{CapsuleDims, CharacterBody};

#[derive(Debug, Clone)]
pub struct FlatGround {
    pub position: Vec3,
    pub grounded: bool,
    pub dims: CapsuleDims,
    pub floor: f32,
    pub ceiling: Option<f32>,
    pub moves: usize,
}

impl FlatGround {
    /// Standing on the floor at the origin
    pub fn standing() -> Self {
        Self {
            position: Vec3::ZERO,
            grounded: true,
            dims: CapsuleDims::standing(2.0, 0.5),
            floor: 0.0,
            ceiling: None,
            moves: 0,
        }
    }

    pub fn in_air(height: f32) -> Self {
        Self {
            position: Vec3::new(0.0, height, 0.0),
            grounded: false,
            ..Self::standing()
        }
    }

    pub fn with_ceiling(mut self, y: f32) -> Self {
        self.ceiling = Some(y);
        self
    }
}

impl CharacterBody for FlatGround {
    type World = ();

    fn position(&self) -> Vec3 {
        self.position
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }

    fn move_by(&mut self, _world: &mut (), displacement: Vec3, _dt: f32) {
        self.moves += 1;
        let mut next = self.position + displacement;
        if let Some(ceiling) = self.ceiling {
            let limit = ceiling - self.dims.height;
            if next.y > limit {
                next.y = limit.max(self.position.y.min(limit));
            }
        }
        if next.y <= self.floor {
            next.y = self.floor;
            self.grounded = true;
        } else {
            self.grounded = false;
        }
        self.position = next;
    }

    fn capsule(&self) -> CapsuleDims {
        self.dims
    }

    fn set_capsule(&mut self, _world: &mut (), height: f32, center: Vec3) {
        self.dims.height = height;
        self.dims.center = center;
    }

    fn has_headroom(&self, _world: &(), stand_height: f32) -> bool {
        match self.ceiling {
            Some(ceiling) => self.position.y + stand_height <= ceiling,
            None => true,
        }
    }

    fn teleport(&mut self, _world: &mut (), position: Vec3) {
        self.position = position;
        self.grounded = false;
    }
}
