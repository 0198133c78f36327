// Health + status effects + notifications for one character

use super::events::{Observers, SubscriptionId, VitalsEvent};
use super::health::Health;
use super::stats::VitalsTuning;
use super::status::{StatusEffect, StatusEffectEngine};

/// Owns a character's health pool and active effects and informs observers
/// after every transition
#[derive(Debug)]
pub struct Vitals {
    health: Health,
    effects: StatusEffectEngine,
    observers: Observers<VitalsEvent>,
    dead: bool,
}

impl Vitals {
    pub fn new(tuning: &VitalsTuning) -> Self {
        let mut health = Health::new(tuning.max_health);
        health.set_invulnerable(tuning.invulnerable);
        Self {
            health,
            effects: StatusEffectEngine::new(),
            observers: Observers::new(),
            dead: false,
        }
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&VitalsEvent) + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    pub fn health(&self) -> &Health {
        &self.health
    }

    pub fn effects(&self) -> &StatusEffectEngine {
        &self.effects
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn set_invulnerable(&mut self, invulnerable: bool) {
        self.health.set_invulnerable(invulnerable);
    }

    /// Incoming damage, scaled by the current defense modifier
    pub fn take_damage(&mut self, raw: f32) {
        let defense = self.effects.defense_modifier();
        if self.health.take_damage(raw, defense) {
            self.health_changed();
        }
    }

    pub fn heal(&mut self, amount: f32) {
        if self.health.heal(amount) {
            self.health_changed();
        }
    }

    pub fn add_effect(&mut self, effect: StatusEffect) {
        let snapshot = effect.clone();
        if let Some(replaced) = self.effects.add(effect) {
            log::debug!("Status effect '{}' refreshed", replaced.name);
            self.observers.notify(&VitalsEvent::EffectRemoved(replaced.name));
        }
        self.observers.notify(&VitalsEvent::EffectAdded(snapshot));
    }

    pub fn remove_effect(&mut self, name: &str) {
        if let Some(removed) = self.effects.remove(name) {
            self.observers.notify(&VitalsEvent::EffectRemoved(removed.name));
        }
    }

    /// Advance effects; fires one removal per expired effect and at most one
    /// health notification
    pub fn tick(&mut self, dt: f32) {
        let report = self.effects.tick(dt, &mut self.health);

        for name in report.expired {
            log::debug!("Status effect '{}' expired", name);
            self.observers.notify(&VitalsEvent::EffectRemoved(name));
        }
        if report.health_changed {
            self.health_changed();
        }
    }

    /// Full health, no effects, alive again
    pub fn revive(&mut self) {
        for effect in self.effects.clear() {
            self.observers.notify(&VitalsEvent::EffectRemoved(effect.name));
        }
        self.dead = false;
        if self.health.restore() {
            self.observers.notify(&VitalsEvent::HealthChanged);
        }
    }

    fn health_changed(&mut self) {
        self.observers.notify(&VitalsEvent::HealthChanged);

        if self.health.is_depleted() && !self.dead {
            self.dead = true;
            log::info!("Character died");
            self.observers.notify(&VitalsEvent::Died);
        } else if !self.health.is_depleted() {
            self.dead = false;
        }
    }
}
