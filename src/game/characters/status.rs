// Timed status effects and their aggregate multipliers

use super::health::Health;

/// A named bundle of modifiers applied to a character for a while (or forever)
#[derive(Debug, Clone, PartialEq)]
pub struct StatusEffect {
    /// Identity key; a new effect with the same name replaces the old one
    pub name: String,
    /// Total duration in seconds; <= 0 means permanent
    pub duration: f32,
    /// Seconds left before expiry (unused for permanent effects)
    pub remaining_time: f32,
    /// Health change per second (negative = damage over time)
    pub health_per_second: f32,
    /// Movement speed multiplier
    pub speed_modifier: f32,
    /// Damage dealt multiplier
    pub damage_modifier: f32,
    /// Damage taken multiplier
    pub defense_modifier: f32,
}

impl StatusEffect {
    pub fn new(
        name: impl Into<String>,
        duration: f32,
        health_per_second: f32,
        speed_modifier: f32,
        damage_modifier: f32,
        defense_modifier: f32,
    ) -> Self {
        Self {
            name: name.into(),
            duration,
            remaining_time: duration,
            health_per_second,
            speed_modifier,
            damage_modifier,
            defense_modifier,
        }
    }

    /// Effect that only changes health over time
    pub fn poison(duration: f32, damage_per_second: f32) -> Self {
        Self::new("Poison", duration, -damage_per_second, 1.0, 1.0, 1.0)
    }

    pub fn speed_boost(duration: f32, multiplier: f32) -> Self {
        Self::new("SpeedBoost", duration, 0.0, multiplier, 1.0, 1.0)
    }

    /// Deals half damage, takes 75% damage
    pub fn weakened(duration: f32) -> Self {
        Self::new("Weakened", duration, 0.0, 1.0, 0.5, 0.75)
    }

    pub fn is_permanent(&self) -> bool {
        self.duration <= 0.0
    }

    /// Remaining share of the duration for HUD fill bars; `None` when permanent
    pub fn remaining_fraction(&self) -> Option<f32> {
        if self.is_permanent() {
            None
        } else {
            Some((self.remaining_time / self.duration).clamp(0.0, 1.0))
        }
    }
}

/// Product of every active effect's multipliers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModifierCache {
    pub speed: f32,
    pub damage: f32,
    pub defense: f32,
}

impl Default for ModifierCache {
    fn default() -> Self {
        Self {
            speed: 1.0,
            damage: 1.0,
            defense: 1.0,
        }
    }
}

/// What a single [`StatusEffectEngine::tick`] did
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EffectTickReport {
    /// Names of effects that expired this tick, in removal order
    pub expired: Vec<String>,
    /// Whether current health actually changed
    pub health_changed: bool,
}

/// Active effect list of one entity, with a modifier cache that is only
/// rebuilt when the list changes
#[derive(Debug, Default, Clone)]
pub struct StatusEffectEngine {
    effects: Vec<StatusEffect>,
    cache: ModifierCache,
}

impl StatusEffectEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an effect, replacing any effect with the same name.
    /// Returns the replaced effect.
    pub fn add(&mut self, effect: StatusEffect) -> Option<StatusEffect> {
        let replaced = self.take(&effect.name);
        self.effects.push(effect);
        self.recalculate();
        replaced
    }

    /// Remove an effect by name; no-op when absent
    pub fn remove(&mut self, name: &str) -> Option<StatusEffect> {
        let removed = self.take(name);
        self.recalculate();
        removed
    }

    fn take(&mut self, name: &str) -> Option<StatusEffect> {
        let index = self.effects.iter().position(|e| e.name == name)?;
        Some(self.effects.remove(index))
    }

    /// Advance every effect by `dt` seconds and apply health over time.
    ///
    /// An expiring effect still contributes for the part of `dt` it had left,
    /// so an effect of duration D applies exactly `D * health_per_second`.
    pub fn tick(&mut self, dt: f32, health: &mut Health) -> EffectTickReport {
        let mut report = EffectTickReport::default();

        // Reverse order so removals never shift an unvisited effect
        for i in (0..self.effects.len()).rev() {
            let effect = &mut self.effects[i];

            let mut active_time = dt;
            let mut expired = false;
            if !effect.is_permanent() {
                active_time = dt.min(effect.remaining_time.max(0.0));
                effect.remaining_time -= dt;
                expired = effect.remaining_time <= 0.0;
            }

            if effect.health_per_second != 0.0 && active_time > 0.0 {
                let delta = effect.health_per_second * active_time;
                if health.apply_delta(delta) {
                    report.health_changed = true;
                }
            }

            if expired {
                let effect = self.effects.remove(i);
                report.expired.push(effect.name);
            }
        }

        if !report.expired.is_empty() {
            self.recalculate();
        }
        report
    }

    fn recalculate(&mut self) {
        self.cache = self
            .effects
            .iter()
            .fold(ModifierCache::default(), |acc, e| ModifierCache {
                speed: acc.speed * e.speed_modifier,
                damage: acc.damage * e.damage_modifier,
                defense: acc.defense * e.defense_modifier,
            });
    }

    pub fn speed_modifier(&self) -> f32 {
        self.cache.speed
    }

    pub fn damage_modifier(&self) -> f32 {
        self.cache.damage
    }

    pub fn defense_modifier(&self) -> f32 {
        self.cache.defense
    }

    pub fn modifiers(&self) -> ModifierCache {
        self.cache
    }

    /// Active effects in insertion order
    pub fn effects(&self) -> &[StatusEffect] {
        &self.effects
    }

    pub fn get(&self, name: &str) -> Option<&StatusEffect> {
        self.effects.iter().find(|e| e.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Drop every effect (used on respawn)
    pub fn clear(&mut self) -> Vec<StatusEffect> {
        let drained = std::mem::take(&mut self.effects);
        self.recalculate();
        drained
    }
}
