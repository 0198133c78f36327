// Character notifications for UI and gameplay collaborators

use std::fmt;

use super::status::StatusEffect;

/// Something observable happened to a character's vitals
#[derive(Debug, Clone, PartialEq)]
pub enum VitalsEvent {
    /// Current health changed; readers re-query the value
    HealthChanged,
    /// An effect became active (snapshot at insertion time)
    EffectAdded(StatusEffect),
    /// An effect was removed or expired, or is about to be replaced by a
    /// same-named one (sent before the matching `EffectAdded`)
    EffectRemoved(String),
    /// Health reached zero
    Died,
}

/// Token returned by [`Observers::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

type Callback<E> = Box<dyn FnMut(&E)>;

/// Explicit subscriber list. Observers are called in subscription order,
/// after the state transition they describe has been applied.
pub struct Observers<E> {
    subscribers: Vec<(SubscriptionId, Callback<E>)>,
    next_id: u32,
}

impl<E> Observers<E> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a callback
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&E) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback; returns false if it was not registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn notify(&mut self, event: &E) {
        for (_, callback) in &mut self.subscribers {
            callback(event);
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Observers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
