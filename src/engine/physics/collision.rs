use rapier3d::prelude::*;

/// Collision groups for filtering what objects can collide with each other
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionGroups {
    /// Character capsules
    Character = 0b0000_0001,

    /// Static level geometry (floors, walls, ceilings)
    Level = 0b0000_0010,

    /// Trigger volumes - detected, never blocking
    Sensor = 0b0000_0100,

    /// Hit-scan queries (membership used only by ray casts)
    Shot = 0b0000_1000,
}

impl CollisionGroups {
    /// Convert to rapier3d's InteractionGroups
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let memberships = Group::from_bits_truncate(self as u32);

        let filter = match self {
            // Characters are blocked by the level only; they pass through each
            // other but can be shot
            CollisionGroups::Character => Group::from_bits_truncate(
                CollisionGroups::Level as u32
                    | CollisionGroups::Sensor as u32
                    | CollisionGroups::Shot as u32,
            ),

            // Level geometry blocks characters and stops shots
            CollisionGroups::Level => Group::from_bits_truncate(
                CollisionGroups::Character as u32 | CollisionGroups::Shot as u32,
            ),

            CollisionGroups::Sensor => Group::from_bits_truncate(CollisionGroups::Character as u32),

            // Shots hit characters and the level, never sensors
            CollisionGroups::Shot => Group::from_bits_truncate(
                CollisionGroups::Character as u32 | CollisionGroups::Level as u32,
            ),
        };

        InteractionGroups::new(memberships, filter)
    }
}
