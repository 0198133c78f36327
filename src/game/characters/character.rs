// Character entity and management

use std::collections::VecDeque;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engine::audio::{play_random, SoundClip, SoundPlayer};
use crate::engine::physics::CharacterBody;
use crate::game::arena::{DamageZone, RespawnZone};

use super::camera::CameraRig;
use super::config::ConfigError;
use super::events::{SubscriptionId, VitalsEvent};
use super::intent::Intent;
use super::locomotion::{ExternalMotion, LocomotionController, LocomotionReport};
use super::recoil::{RecoilIntegrator, RecoilMode};
use super::stats::CharacterTuning;
use super::status::StatusEffect;
use super::vitals::Vitals;

/// Unique identifier for a character
pub type CharacterId = u32;

/// Volume jump sounds are played at
const JUMP_VOLUME: f32 = 0.5;

/// Errors raised while assembling a character
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("character '{0}' has no physical body")]
    MissingBody(String),

    #[error("character '{0}' has no camera rig")]
    MissingCamera(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// Operations on a character issued by something other than the character.
/// Queued and applied at the start of the target's next tick.
#[derive(Debug, Clone, PartialEq)]
pub enum CharacterCommand {
    Damage(f32),
    Heal(f32),
    AddEffect(StatusEffect),
    RemoveEffect(String),
    Kick {
        direction: Vec3,
        horizontal: Option<f32>,
        vertical: Option<f32>,
    },
    Blast {
        back_direction: Vec3,
        horizontal: f32,
        upward: f32,
        mode: Option<RecoilMode>,
    },
    Respawn {
        position: Vec3,
        yaw: f32,
    },
}

/// A first-person character: body, camera rig and the three simulation
/// components, ticked in a fixed order
#[derive(Debug)]
pub struct Character<B: CharacterBody> {
    /// Unique identifier
    pub id: CharacterId,
    /// Character name (for display and logs)
    pub name: String,
    /// Player index controlling this character (None for AI)
    pub player_index: Option<usize>,

    tuning: CharacterTuning,
    body: B,
    camera: CameraRig,

    locomotion: LocomotionController,
    recoil: RecoilIntegrator,
    vitals: Vitals,

    jump_clips: Vec<SoundClip>,
    rng: StdRng,

    /// Intent for the next tick (set by input or AI)
    intent: Intent,
    pending: VecDeque<CharacterCommand>,
    last_report: LocomotionReport,
}

impl<B: CharacterBody> Character<B> {
    pub fn tuning(&self) -> &CharacterTuning {
        &self.tuning
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    pub fn locomotion(&self) -> &LocomotionController {
        &self.locomotion
    }

    pub fn recoil(&self) -> &RecoilIntegrator {
        &self.recoil
    }

    pub fn recoil_mut(&mut self) -> &mut RecoilIntegrator {
        &mut self.recoil
    }

    pub fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    pub fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }

    pub fn position(&self) -> Vec3 {
        self.body.position()
    }

    /// World-space camera attach point
    pub fn eye_position(&self) -> Vec3 {
        self.body.position() + Vec3::Y * self.camera.local_height()
    }

    pub fn is_alive(&self) -> bool {
        !self.vitals.is_dead()
    }

    pub fn last_report(&self) -> &LocomotionReport {
        &self.last_report
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&VitalsEvent) + 'static,
    {
        self.vitals.subscribe(callback)
    }

    /// Set the intent used by the next tick
    pub fn set_intent(&mut self, intent: Intent) {
        self.intent = intent;
    }

    pub fn intent(&self) -> &Intent {
        &self.intent
    }

    /// Queue an operation for the start of the next tick
    pub fn queue(&mut self, command: CharacterCommand) {
        self.pending.push_back(command);
    }

    pub fn pending_commands(&self) -> usize {
        self.pending.len()
    }

    /// Run one tick with the stored intent, then clear its edge-triggered
    /// parts
    pub fn update(&mut self, world: &mut B::World, audio: &mut dyn SoundPlayer, dt: f32) -> LocomotionReport {
        let intent = self.intent;
        let report = self.tick(world, &intent, audio, dt);
        self.intent.jump_requested = false;
        self.intent.look_delta = glam::Vec2::ZERO;
        report
    }

    /// Queued commands, then locomotion (reading recoil and speed as they
    /// were before this tick), then recoil decay, then status effects
    pub fn tick(
        &mut self,
        world: &mut B::World,
        intent: &Intent,
        audio: &mut dyn SoundPlayer,
        dt: f32,
    ) -> LocomotionReport {
        self.apply_pending(world);

        let intent = if self.vitals.is_dead() {
            Intent::idle()
        } else {
            *intent
        };

        let external = ExternalMotion {
            speed_modifier: self.vitals.effects().speed_modifier(),
            recoil_velocity: self.recoil.velocity(),
        };
        let report = self.locomotion.tick(
            &mut self.body,
            world,
            &mut self.camera,
            &intent,
            external,
            dt,
        );

        if report.jumped {
            play_random(
                audio,
                &mut self.rng,
                &self.jump_clips,
                self.body.position(),
                JUMP_VOLUME,
            );
        }

        self.recoil.set_grounded(self.body.is_grounded());
        self.recoil.tick(dt);

        self.vitals.tick(dt);

        self.last_report = report;
        report
    }

    /// Teleport, zero every velocity, stand up and restore health
    pub fn respawn_at(&mut self, world: &mut B::World, position: Vec3, yaw: f32) {
        self.body.teleport(world, position);
        self.locomotion.reset(&mut self.body, world);
        self.recoil.reset();
        self.recoil.set_grounded(self.body.is_grounded());
        self.camera.reset(yaw, &self.tuning.camera);
        self.vitals.revive();
        self.intent = Intent::idle();
        log::info!(
            "{} respawned at ({:.1}, {:.1}, {:.1})",
            self.name,
            position.x,
            position.y,
            position.z
        );
    }

    fn apply_pending(&mut self, world: &mut B::World) {
        while let Some(command) = self.pending.pop_front() {
            match command {
                CharacterCommand::Damage(amount) => self.vitals.take_damage(amount),
                CharacterCommand::Heal(amount) => self.vitals.heal(amount),
                CharacterCommand::AddEffect(effect) => self.vitals.add_effect(effect),
                CharacterCommand::RemoveEffect(name) => self.vitals.remove_effect(&name),
                CharacterCommand::Kick {
                    direction,
                    horizontal,
                    vertical,
                } => {
                    self.recoil.kick(direction, horizontal, vertical);
                }
                CharacterCommand::Blast {
                    back_direction,
                    horizontal,
                    upward,
                    mode,
                } => {
                    self.recoil.blast(back_direction, horizontal, upward, mode);
                }
                CharacterCommand::Respawn { position, yaw } => {
                    self.respawn_at(world, position, yaw);
                }
            }
        }
    }
}

/// Assembles a character; body and camera are required
#[derive(Debug)]
pub struct CharacterBuilder<B> {
    name: String,
    player_index: Option<usize>,
    tuning: CharacterTuning,
    body: Option<B>,
    camera: Option<CameraRig>,
    yaw: f32,
    jump_clips: Vec<SoundClip>,
    seed: u64,
}

impl<B: CharacterBody> CharacterBuilder<B> {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            player_index: None,
            tuning: CharacterTuning::default(),
            body: None,
            camera: None,
            yaw: 0.0,
            jump_clips: Vec::new(),
            seed: 0,
        }
    }

    pub fn player_index(mut self, index: usize) -> Self {
        self.player_index = Some(index);
        self
    }

    pub fn tuning(mut self, tuning: CharacterTuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn body(mut self, body: B) -> Self {
        self.body = Some(body);
        self
    }

    pub fn camera(mut self, camera: CameraRig) -> Self {
        self.camera = Some(camera);
        self
    }

    /// Camera rig built from the camera tuning in effect at `build` time
    pub fn default_camera(mut self) -> Self {
        self.camera = Some(CameraRig::new(&self.tuning.camera));
        self
    }

    pub fn yaw(mut self, yaw: f32) -> Self {
        self.yaw = yaw;
        self
    }

    pub fn jump_clips<I, S>(mut self, clips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SoundClip>,
    {
        self.jump_clips = clips.into_iter().map(Into::into).collect();
        self
    }

    /// Seed for sound variation
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self, id: CharacterId) -> Result<Character<B>, SetupError> {
        if let Err(err) = self.tuning.validate() {
            log::warn!("Rejected tuning for {}: {}", self.name, err);
            return Err(err.into());
        }
        let body = self.body.ok_or_else(|| SetupError::MissingBody(self.name.clone()))?;
        let mut camera = self
            .camera
            .ok_or_else(|| SetupError::MissingCamera(self.name.clone()))?;
        camera.set_yaw(self.yaw);

        let tuning = self.tuning;
        let mut recoil = RecoilIntegrator::new(tuning.recoil);
        recoil.set_grounded(body.is_grounded());
        Ok(Character {
            id,
            name: self.name,
            player_index: self.player_index,
            body,
            camera,
            locomotion: LocomotionController::new(tuning.locomotion, tuning.camera),
            recoil,
            vitals: Vitals::new(&tuning.vitals),
            tuning,
            jump_clips: self.jump_clips,
            rng: StdRng::seed_from_u64(self.seed),
            intent: Intent::idle(),
            pending: VecDeque::new(),
            last_report: LocomotionReport::default(),
        })
    }
}

/// Manages all characters and the zones that act on them
#[derive(Debug)]
pub struct CharacterManager<B: CharacterBody> {
    characters: Vec<Character<B>>,
    next_id: CharacterId,
    hazards: Vec<DamageZone>,
    respawn_zones: Vec<RespawnZone>,
}

impl<B: CharacterBody> Default for CharacterManager<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: CharacterBody> CharacterManager<B> {
    pub fn new() -> Self {
        Self {
            characters: Vec::new(),
            next_id: 0,
            hazards: Vec::new(),
            respawn_zones: Vec::new(),
        }
    }

    /// Build and register a character
    pub fn spawn(&mut self, builder: CharacterBuilder<B>) -> Result<CharacterId, SetupError> {
        let id = self.next_id;
        let character = builder.build(id)?;
        self.next_id += 1;

        log::info!("Spawned {} as #{}", character.name, id);
        self.characters.push(character);
        Ok(id)
    }

    /// Get a character by ID
    pub fn get(&self, id: CharacterId) -> Option<&Character<B>> {
        self.characters.iter().find(|c| c.id == id)
    }

    /// Get a mutable character by ID
    pub fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character<B>> {
        self.characters.iter_mut().find(|c| c.id == id)
    }

    /// Get a character by player index
    pub fn get_by_player(&self, player_index: usize) -> Option<&Character<B>> {
        self.characters
            .iter()
            .find(|c| c.player_index == Some(player_index))
    }

    /// Get all characters
    pub fn all(&self) -> &[Character<B>] {
        &self.characters
    }

    /// Get all characters mutably
    pub fn all_mut(&mut self) -> &mut [Character<B>] {
        &mut self.characters
    }

    pub fn add_hazard(&mut self, zone: DamageZone) {
        self.hazards.push(zone);
    }

    pub fn add_respawn_zone(&mut self, zone: RespawnZone) {
        self.respawn_zones.push(zone);
    }

    pub fn hazards(&self) -> &[DamageZone] {
        &self.hazards
    }

    /// Queue a command for a character. Returns false for unknown ids.
    pub fn queue(&mut self, id: CharacterId, command: CharacterCommand) -> bool {
        match self.get_mut(id) {
            Some(character) => {
                character.queue(command);
                true
            }
            None => false,
        }
    }

    pub fn queue_damage(&mut self, id: CharacterId, amount: f32) -> bool {
        self.queue(id, CharacterCommand::Damage(amount))
    }

    /// Set the next intent of a character. Returns false for unknown ids.
    pub fn set_intent(&mut self, id: CharacterId, intent: Intent) -> bool {
        match self.get_mut(id) {
            Some(character) => {
                character.set_intent(intent);
                true
            }
            None => false,
        }
    }

    /// Tick every character in spawn order, then evaluate zones against the
    /// new positions
    pub fn update(&mut self, world: &mut B::World, audio: &mut dyn SoundPlayer, dt: f32) {
        for character in &mut self.characters {
            character.update(world, audio, dt);
        }

        for zone in &mut self.hazards {
            for character in &mut self.characters {
                let inside = zone.contains(character.position());
                if let Some(damage) = zone.update(character.id, inside, dt) {
                    character.queue(CharacterCommand::Damage(damage));
                }
            }
        }

        for zone in &mut self.respawn_zones {
            for character in &mut self.characters {
                let inside = zone.contains(character.position());
                if zone.update(character.id, inside) {
                    character.queue(CharacterCommand::Respawn {
                        position: zone.respawn_point(),
                        yaw: zone.respawn_yaw(),
                    });
                }
            }
        }
    }

    /// Remove a character by ID
    pub fn remove(&mut self, id: CharacterId) -> Option<Character<B>> {
        let pos = self.characters.iter().position(|c| c.id == id)?;
        for zone in &mut self.hazards {
            zone.forget(id);
        }
        for zone in &mut self.respawn_zones {
            zone.forget(id);
        }
        Some(self.characters.remove(pos))
    }

    /// Get the number of characters
    pub fn count(&self) -> usize {
        self.characters.len()
    }

    /// Get the number of alive characters
    pub fn alive_count(&self) -> usize {
        self.characters.iter().filter(|c| c.is_alive()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::audio::{RecordingSoundPlayer, Silence};
    use crate::game::arena::Aabb;
    use crate::game::characters::test_body::FlatGround;
    use approx::assert_relative_eq;
    use glam::Vec2;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn builder(name: &str) -> CharacterBuilder<FlatGround> {
        CharacterBuilder::new(name)
            .body(FlatGround::standing())
            .default_camera()
    }

    fn character() -> Character<FlatGround> {
        builder("Tester").build(0).unwrap()
    }

    #[test]
    fn test_missing_body_is_setup_error() {
        let result = CharacterBuilder::<FlatGround>::new("Ghost").default_camera().build(0);
        assert!(matches!(result, Err(SetupError::MissingBody(name)) if name == "Ghost"));
    }

    #[test]
    fn test_missing_camera_is_setup_error() {
        let result = CharacterBuilder::new("Blind").body(FlatGround::standing()).build(0);
        assert!(matches!(result, Err(SetupError::MissingCamera(_))));
    }

    #[test]
    fn test_invalid_tuning_is_setup_error() {
        let mut tuning = CharacterTuning::default();
        tuning.locomotion.gravity = 9.81;
        let result = builder("Floaty").tuning(tuning).build(0);
        assert!(matches!(result, Err(SetupError::InvalidConfig(_))));
    }

    #[test]
    fn test_jump_plays_one_clip_at_half_volume() {
        let mut character = builder("Jumper")
            .jump_clips(["jump_1", "jump_2"])
            .seed(3)
            .build(0)
            .unwrap();
        let mut audio = RecordingSoundPlayer::default();

        let report = character.tick(&mut (), &Intent::idle().with_jump(true), &mut audio, 1.0 / 60.0);
        assert!(report.jumped);
        assert_eq!(audio.requests.len(), 1);
        let (clip, _, volume) = &audio.requests[0];
        assert!(clip == "jump_1" || clip == "jump_2");
        assert_eq!(*volume, 0.5);

        // Airborne: no second jump, no second sound
        character.tick(&mut (), &Intent::idle().with_jump(true), &mut audio, 1.0 / 60.0);
        assert_eq!(audio.requests.len(), 1);
    }

    #[test]
    fn test_recoil_sampled_before_decay() {
        let mut character = character();
        character.recoil_mut().set_mode(RecoilMode::Always);
        character
            .recoil_mut()
            .kick(Vec3::X, Some(6.0), Some(0.0));

        let dt = 0.1;
        let report = character.tick(&mut (), &Intent::idle(), &mut Silence, dt);
        // Full 6 m/s used for this tick's move, then decayed by 0.6
        assert_relative_eq!(report.displacement.x, 0.6, epsilon = 1e-5);
        assert_relative_eq!(character.recoil().planar_velocity().x, 5.4, epsilon = 1e-5);
    }

    #[test]
    fn test_gated_kick_while_grounded() {
        let mut character = character();
        character.tick(&mut (), &Intent::idle(), &mut Silence, 1.0 / 60.0);
        assert!(character.body().is_grounded());

        character.queue(CharacterCommand::Kick {
            direction: Vec3::X,
            horizontal: Some(6.0),
            vertical: Some(0.0),
        });
        character.tick(&mut (), &Intent::idle(), &mut Silence, 1.0 / 60.0);
        assert_eq!(character.recoil().planar_velocity(), Vec3::ZERO);
    }

    #[test]
    fn test_air_only_kick_gated_before_first_tick() {
        let mut character = character();
        assert!(character.recoil().is_grounded());
        assert!(!character.recoil().can_apply());

        character.queue(CharacterCommand::Kick {
            direction: Vec3::X,
            horizontal: Some(6.0),
            vertical: Some(0.0),
        });
        character.tick(&mut (), &Intent::idle(), &mut Silence, 1.0 / 60.0);
        assert_eq!(character.recoil().planar_velocity(), Vec3::ZERO);
        assert_eq!(character.position().x, 0.0);
    }

    #[test]
    fn test_respawn_syncs_recoil_ground_flag() {
        let mut character = character();
        character.tick(&mut (), &Intent::idle(), &mut Silence, 1.0 / 60.0);
        assert!(!character.recoil().can_apply());

        // Teleport drops contact, so a kick right after respawn is in the air
        character.respawn_at(&mut (), Vec3::new(0.0, 2.0, 0.0), 0.0);
        assert!(!character.body().is_grounded());
        assert!(!character.recoil().is_grounded());
        assert!(character.recoil_mut().kick(Vec3::X, Some(6.0), Some(0.0)));
        assert_relative_eq!(character.recoil().planar_velocity().x, 6.0, epsilon = 1e-5);
    }

    #[test]
    fn test_blast_works_on_ground() {
        let mut character = character();
        character.tick(&mut (), &Intent::idle(), &mut Silence, 1.0 / 60.0);

        character.queue(CharacterCommand::Blast {
            back_direction: -Vec3::Z,
            horizontal: 8.0,
            upward: 10.0,
            mode: None,
        });
        character.tick(&mut (), &Intent::idle(), &mut Silence, 1.0 / 60.0);

        assert!(character.recoil().planar_velocity().z < 0.0);
        assert!(character.position().y > 0.0);
        assert_eq!(character.recoil().mode(), RecoilMode::AirOnly);
    }

    #[test]
    fn test_slow_effect_reduces_speed_next_tick() {
        let mut character = character();
        character.queue(CharacterCommand::AddEffect(StatusEffect::speed_boost(2.0, 0.5)));

        let report = character.tick(&mut (), &Intent::moving(Vec2::Y), &mut Silence, 0.1);
        assert_relative_eq!(report.displacement.z, 0.3, epsilon = 1e-5);
    }

    #[test]
    fn test_queued_damage_applies_at_tick_start() {
        let mut character = character();
        character.queue(CharacterCommand::Damage(30.0));
        assert_eq!(character.vitals().health().current(), 100.0);
        assert_eq!(character.pending_commands(), 1);

        character.tick(&mut (), &Intent::idle(), &mut Silence, 1.0 / 60.0);
        assert_eq!(character.vitals().health().current(), 70.0);
        assert_eq!(character.pending_commands(), 0);
    }

    #[test]
    fn test_dead_character_ignores_intent() {
        let mut character = character();
        character.queue(CharacterCommand::Damage(500.0));
        let report = character.tick(&mut (), &Intent::moving(Vec2::Y).with_jump(true), &mut Silence, 0.1);

        assert!(!character.is_alive());
        assert!(!report.jumped);
        assert_eq!(report.displacement.z, 0.0);
    }

    #[test]
    fn test_respawn_resets_everything() {
        let mut character = character();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        character.subscribe(move |e| sink.borrow_mut().push(e.clone()));

        character.recoil_mut().set_mode(RecoilMode::Always);
        character.recoil_mut().kick(Vec3::X, Some(6.0), None);
        character.queue(CharacterCommand::Damage(150.0));
        character.tick(&mut (), &Intent::idle().with_crouch(true), &mut Silence, 0.1);
        assert!(!character.is_alive());

        character.respawn_at(&mut (), Vec3::new(5.0, 2.0, -3.0), 180.0);

        assert_eq!(character.position(), Vec3::new(5.0, 2.0, -3.0));
        assert!(character.is_alive());
        assert_eq!(character.vitals().health().current(), 100.0);
        assert_eq!(character.recoil().velocity(), Vec3::ZERO);
        assert_eq!(character.locomotion().vertical_velocity(), 0.0);
        assert_eq!(character.body().dims.height, 2.0);
        assert_relative_eq!(character.camera().yaw(), 180.0);
        assert_eq!(character.camera().bounce_offset(), 0.0);
        assert!(events.borrow().contains(&VitalsEvent::Died));
    }

    #[test]
    fn test_update_clears_edge_triggered_intent() {
        let mut character = character();
        character.set_intent(Intent::moving(Vec2::Y).with_jump(true).with_look(Vec2::new(1.0, 0.0)));
        let report = character.update(&mut (), &mut Silence, 1.0 / 60.0);
        assert!(report.jumped);
        assert!(!character.intent().jump_requested);
        assert_eq!(character.intent().look_delta, Vec2::ZERO);
        assert_eq!(character.intent().move_direction, Vec2::Y);
    }

    #[test]
    fn test_manager_assigns_ids_and_queues() {
        let mut manager = CharacterManager::new();
        let a = manager.spawn(builder("A")).unwrap();
        let b = manager.spawn(builder("B").player_index(1)).unwrap();
        assert_ne!(a, b);
        assert_eq!(manager.count(), 2);
        assert_eq!(manager.get_by_player(1).map(|c| c.id), Some(b));

        assert!(manager.queue_damage(b, 40.0));
        assert!(!manager.queue_damage(99, 40.0));

        manager.update(&mut (), &mut Silence, 1.0 / 60.0);
        assert_eq!(manager.get(a).unwrap().vitals().health().current(), 100.0);
        assert_eq!(manager.get(b).unwrap().vitals().health().current(), 60.0);
    }

    #[test]
    fn test_manager_failed_spawn_keeps_ids() {
        let mut manager: CharacterManager<FlatGround> = CharacterManager::new();
        assert!(manager.spawn(CharacterBuilder::new("Nobody")).is_err());
        let id = manager.spawn(builder("Somebody")).unwrap();
        assert_eq!(id, 0);
        assert_eq!(manager.count(), 1);
    }

    #[test]
    fn test_lava_zone_damages_over_time() {
        let mut manager = CharacterManager::new();
        let id = manager.spawn(builder("Walker")).unwrap();
        manager.add_hazard(DamageZone::new(
            "lava",
            Aabb::new(Vec3::new(-5.0, -1.0, -5.0), Vec3::new(5.0, 0.5, 5.0)),
            10.0,
            1.0,
        ));

        let dt = 0.1;
        // 2.5 s standing in lava: hits at 1 s and 2 s
        for _ in 0..26 {
            manager.update(&mut (), &mut Silence, dt);
        }
        assert_relative_eq!(
            manager.get(id).unwrap().vitals().health().current(),
            80.0,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_respawn_zone_teleports_on_entry() {
        let mut manager = CharacterManager::new();
        let id = manager.spawn(builder("Faller")).unwrap();
        manager.add_respawn_zone(RespawnZone::new(
            Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0)),
            Vec3::new(0.0, 10.0, 0.0),
            90.0,
        ));

        manager.update(&mut (), &mut Silence, 1.0 / 60.0);
        manager.update(&mut (), &mut Silence, 1.0 / 60.0);

        let character = manager.get(id).unwrap();
        assert!(character.position().y > 9.0);
        assert_relative_eq!(character.camera().yaw(), 90.0);
    }

    #[test]
    fn test_alive_count() {
        let mut manager = CharacterManager::new();
        let a = manager.spawn(builder("A")).unwrap();
        manager.spawn(builder("B")).unwrap();
        manager.queue_damage(a, 1_000.0);
        manager.update(&mut (), &mut Silence, 1.0 / 60.0);
        assert_eq!(manager.alive_count(), 1);

        assert!(manager.remove(a).is_some());
        assert_eq!(manager.count(), 1);
    }
}
