// Per-tick intent, decoupled from any input device

use glam::Vec2;

/// What the controlling player (or AI) wants this tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Intent {
    /// x = strafe right, y = forward; any length, normalized by the controller
    pub move_direction: Vec2,
    pub sprint_held: bool,
    /// Edge-triggered: true only on the tick the jump was pressed
    pub jump_requested: bool,
    pub crouch_held: bool,
    /// x = yaw, y = pitch (look up positive)
    pub look_delta: Vec2,
}

impl Intent {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn moving(direction: Vec2) -> Self {
        Self {
            move_direction: direction,
            ..Self::default()
        }
    }

    pub fn with_sprint(mut self, held: bool) -> Self {
        self.sprint_held = held;
        self
    }

    pub fn with_jump(mut self, requested: bool) -> Self {
        self.jump_requested = requested;
        self
    }

    pub fn with_crouch(mut self, held: bool) -> Self {
        self.crouch_held = held;
        self
    }

    pub fn with_look(mut self, delta: Vec2) -> Self {
        self.look_delta = delta;
        self
    }
}
