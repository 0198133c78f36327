// Health pool
//
// Current health only changes through `take_damage`, `heal` and
// `apply_delta`, all of which clamp to [0, max] and report whether the value
// actually moved so notifications match real transitions.

#[derive(Debug, Clone, PartialEq)]
pub struct Health {
    current: f32,
    max: f32,
    invulnerable: bool,
}

impl Health {
    /// Full health pool. Non-positive maxima are raised to a minimal pool.
    pub fn new(max: f32) -> Self {
        let max = if max > 0.0 { max } else { 1.0 };
        Self {
            current: max,
            max,
            invulnerable: false,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Health as shown on the HUD
    pub fn display_value(&self) -> i32 {
        self.current.round() as i32
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable
    }

    pub fn set_invulnerable(&mut self, invulnerable: bool) {
        self.invulnerable = invulnerable;
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0.0
    }

    /// Subtract `raw * defense_modifier`. No-op while invulnerable.
    pub fn take_damage(&mut self, raw: f32, defense_modifier: f32) -> bool {
        if self.invulnerable || !(raw > 0.0) {
            return false;
        }
        let damage = raw * defense_modifier.max(0.0);
        self.set_clamped(self.current - damage)
    }

    pub fn heal(&mut self, amount: f32) -> bool {
        if !(amount > 0.0) {
            return false;
        }
        self.set_clamped(self.current + amount)
    }

    /// Signed change from effects over time. Losses are blocked while
    /// invulnerable; the defense modifier does not apply.
    pub fn apply_delta(&mut self, delta: f32) -> bool {
        if delta < 0.0 && self.invulnerable {
            return false;
        }
        self.set_clamped(self.current + delta)
    }

    /// Back to a full pool (respawn)
    pub fn restore(&mut self) -> bool {
        self.set_clamped(self.max)
    }

    fn set_clamped(&mut self, value: f32) -> bool {
        if value.is_nan() {
            return false;
        }
        let value = value.clamp(0.0, self.max);
        let changed = value != self.current;
        self.current = value;
        changed
    }
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100.0)
    }
}
