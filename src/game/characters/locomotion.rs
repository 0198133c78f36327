// Locomotion controller
//
// Turns an Intent into one body displacement per tick: horizontal movement,
// jump and gravity, ceiling detection, crouch blending and the landing bounce.
// Recoil and the status speed multiplier come in from outside and are read,
// never written, here.

use glam::{Vec2, Vec3};

use crate::core::math::{blend_factor, lerp};
use crate::engine::physics::CharacterBody;

use super::camera::CameraRig;
use super::intent::Intent;
use super::state::{JumpPhase, LocomotionState, Stance};
use super::stats::{CameraTuning, LocomotionTuning};

/// Capsule heights closer than this count as equal
const HEIGHT_EPSILON: f32 = 1e-4;

/// Contributions owned by other components, sampled before they tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExternalMotion {
    /// Status-effect speed multiplier
    pub speed_modifier: f32,
    /// Recoil velocity added on top of locomotion
    pub recoil_velocity: Vec3,
}

impl Default for ExternalMotion {
    fn default() -> Self {
        Self {
            speed_modifier: 1.0,
            recoil_velocity: Vec3::ZERO,
        }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocomotionReport {
    pub jumped: bool,
    pub landed: bool,
    pub hit_ceiling: bool,
    /// Seconds spent airborne before a landing, zero otherwise
    pub air_time: f32,
    /// Displacement requested from the body
    pub displacement: Vec3,
}

#[derive(Debug, Clone)]
pub struct LocomotionController {
    tuning: LocomotionTuning,
    camera_tuning: CameraTuning,
    state: LocomotionState,
}

impl LocomotionController {
    pub fn new(tuning: LocomotionTuning, camera_tuning: CameraTuning) -> Self {
        Self {
            tuning,
            camera_tuning,
            state: LocomotionState::default(),
        }
    }

    pub fn tuning(&self) -> &LocomotionTuning {
        &self.tuning
    }

    pub fn camera_tuning(&self) -> &CameraTuning {
        &self.camera_tuning
    }

    pub fn state(&self) -> &LocomotionState {
        &self.state
    }

    pub fn stance(&self) -> Stance {
        self.state.stance
    }

    pub fn is_grounded(&self) -> bool {
        self.state.is_grounded()
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.state.vertical_velocity
    }

    pub fn horizontal_velocity(&self) -> Vec3 {
        self.state.horizontal_velocity
    }

    /// Horizontal speed for the given intent and multiplier
    pub fn target_speed(&self, intent: &Intent, speed_modifier: f32) -> f32 {
        let mut speed = self.tuning.move_speed;
        if intent.sprint_held {
            speed *= self.tuning.sprint_multiplier;
        }
        if self.state.stance == Stance::Crouching && self.state.is_grounded() {
            speed *= self.tuning.crouch_speed_multiplier;
        }
        speed * speed_modifier
    }

    /// Run one tick and move the body
    pub fn tick<B: CharacterBody>(
        &mut self,
        body: &mut B,
        world: &mut B::World,
        camera: &mut CameraRig,
        intent: &Intent,
        external: ExternalMotion,
        dt: f32,
    ) -> LocomotionReport {
        let mut report = LocomotionReport::default();

        let previous_contact_time = self.state.ground_time;
        self.state.set_ground(body.is_grounded(), dt);
        let grounded = self.state.is_grounded();
        let move_input = sanitize(intent.move_direction);

        camera.apply_look(sanitize(intent.look_delta), &self.camera_tuning);
        camera.update_tilt(move_input.x, grounded, dt, &self.camera_tuning);

        self.update_stance(body, world, intent);

        // Horizontal
        let direction = camera.intent_to_world(move_input);
        let horizontal = direction * self.target_speed(intent, external.speed_modifier);
        self.state.horizontal_velocity = horizontal;

        // Landing
        if self.state.just_landed() && self.state.vertical_velocity < 0.0 {
            report.landed = true;
            report.air_time = previous_contact_time;
            if self.state.bounce.trigger() {
                log::debug!(
                    "Landed at {:.2} m/s after {:.2}s in the air",
                    self.state.vertical_velocity,
                    previous_contact_time
                );
            }
        }

        // Ground snap
        if grounded && self.state.vertical_velocity < 0.0 {
            self.state.vertical_velocity = self.tuning.ground_snap_velocity;
        }

        // Jump
        if intent.jump_requested && grounded {
            self.state.vertical_velocity = self.tuning.jump_velocity();
            self.state.jump = JumpPhase::Ascending;
            report.jumped = true;
            log::debug!("Jump at {:.2} m/s", self.state.vertical_velocity);
        }

        // Gravity
        self.state.vertical_velocity += self.tuning.gravity * dt;

        let velocity = horizontal + Vec3::Y * self.state.vertical_velocity + external.recoil_velocity;
        let displacement = velocity * dt;
        report.displacement = displacement;

        let before = body.position();
        body.move_by(world, displacement, dt);
        let moved = body.position() - before;

        if self.state.jump == JumpPhase::Ascending {
            let expected = self.state.vertical_velocity * dt;
            if expected > 0.0 && moved.y.abs() < expected * self.tuning.ceiling_threshold {
                log::debug!("Ceiling hit: rose {:.3} of {:.3}", moved.y, expected);
                self.state.vertical_velocity = 0.0;
                self.state.jump = JumpPhase::Idle;
                report.hit_ceiling = true;
            } else if self.state.vertical_velocity <= 0.0 {
                self.state.jump = JumpPhase::Idle;
            }
        }

        self.blend_crouch(body, world, camera, dt);

        self.state.bounce.advance(dt, &self.camera_tuning);
        camera.set_bounce_offset(self.state.bounce.offset());

        report
    }

    /// Back to a standing, motionless state (respawn)
    pub fn reset<B: CharacterBody>(&mut self, body: &mut B, world: &mut B::World) {
        self.state = LocomotionState::default();
        let height = self.tuning.stand_height;
        body.set_capsule(world, height, Vec3::Y * self.tuning.stand_center_y());
    }

    fn update_stance<B: CharacterBody>(&mut self, body: &B, world: &B::World, intent: &Intent) {
        if intent.crouch_held {
            self.state.stance = Stance::Crouching;
            return;
        }

        let lowered = self.state.stance == Stance::Crouching
            || body.capsule().height < self.tuning.stand_height - HEIGHT_EPSILON;
        if lowered && !body.has_headroom(world, self.tuning.stand_height) {
            self.state.stance = Stance::Crouching;
        } else {
            self.state.stance = Stance::Standing;
        }
    }

    fn blend_crouch<B: CharacterBody>(
        &mut self,
        body: &mut B,
        world: &mut B::World,
        camera: &mut CameraRig,
        dt: f32,
    ) {
        let factor = blend_factor(dt, self.tuning.crouch_lerp);
        let (target_height, target_eye) = match self.state.stance {
            Stance::Crouching => (self.tuning.crouch_height, self.camera_tuning.crouch_height),
            Stance::Standing => (self.tuning.stand_height, self.camera_tuning.stand_height),
        };

        let current = body.capsule().height;
        let height = lerp(current, target_height, factor)
            .clamp(self.tuning.crouch_height, self.tuning.stand_height);
        if (height - current).abs() > f32::EPSILON {
            body.set_capsule(world, height, Vec3::Y * height * 0.5);
        }

        camera.blend_eye_height(target_eye, factor);
    }
}

/// Non-finite input components read as zero
fn sanitize(direction: Vec2) -> Vec2 {
    if direction.is_finite() {
        direction
    } else {
        Vec2::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::state::BouncePhase;
    use crate::game::characters::test_body::FlatGround;
    use approx::assert_relative_eq;

    fn controller() -> (LocomotionController, CameraRig) {
        let camera_tuning = CameraTuning::default();
        (
            LocomotionController::new(LocomotionTuning::default(), camera_tuning),
            CameraRig::new(&camera_tuning),
        )
    }

    #[test]
    fn test_jump_peak_matches_jump_height() {
        let (mut loco, mut camera) = controller();
        let mut body = FlatGround::standing();
        let dt = 0.001;

        let report = loco.tick(
            &mut body,
            &mut (),
            &mut camera,
            &Intent::idle().with_jump(true),
            ExternalMotion::default(),
            dt,
        );
        assert!(report.jumped);

        let mut peak = body.position.y;
        for _ in 0..2_000 {
            loco.tick(&mut body, &mut (), &mut camera, &Intent::idle(), ExternalMotion::default(), dt);
            peak = peak.max(body.position.y);
        }
        assert_relative_eq!(peak, 2.2, epsilon = 0.02);
        assert!(body.grounded);
    }

    #[test]
    fn test_no_jump_while_airborne() {
        let (mut loco, mut camera) = controller();
        let mut body = FlatGround::in_air(5.0);
        let report = loco.tick(
            &mut body,
            &mut (),
            &mut camera,
            &Intent::idle().with_jump(true),
            ExternalMotion::default(),
            1.0 / 60.0,
        );
        assert!(!report.jumped);
        assert!(loco.vertical_velocity() < 0.0);
    }

    #[test]
    fn test_ceiling_stops_ascent() {
        let (mut loco, mut camera) = controller();
        // One unit of clearance above a standing head
        let mut body = FlatGround::standing().with_ceiling(3.0);
        let dt = 1.0 / 60.0;

        loco.tick(
            &mut body,
            &mut (),
            &mut camera,
            &Intent::idle().with_jump(true),
            ExternalMotion::default(),
            dt,
        );

        let mut hit = false;
        for _ in 0..30 {
            let report = loco.tick(&mut body, &mut (), &mut camera, &Intent::idle(), ExternalMotion::default(), dt);
            if report.hit_ceiling {
                hit = true;
                break;
            }
        }

        assert!(hit);
        assert_eq!(loco.vertical_velocity(), 0.0);
        assert_eq!(loco.state().jump, JumpPhase::Idle);
        assert!(body.position.y <= 1.0 + 1e-5);
    }

    #[test]
    fn test_jump_phase_clears_at_apex() {
        let (mut loco, mut camera) = controller();
        let mut body = FlatGround::standing();
        let dt = 1.0 / 60.0;
        loco.tick(
            &mut body,
            &mut (),
            &mut camera,
            &Intent::idle().with_jump(true),
            ExternalMotion::default(),
            dt,
        );
        assert_eq!(loco.state().jump, JumpPhase::Ascending);

        for _ in 0..40 {
            loco.tick(&mut body, &mut (), &mut camera, &Intent::idle(), ExternalMotion::default(), dt);
        }
        assert_eq!(loco.state().jump, JumpPhase::Idle);
    }

    #[test]
    fn test_ground_snap_velocity() {
        let (mut loco, mut camera) = controller();
        let mut body = FlatGround::standing();
        let dt = 1.0 / 60.0;
        for _ in 0..5 {
            loco.tick(&mut body, &mut (), &mut camera, &Intent::idle(), ExternalMotion::default(), dt);
        }
        // Snap to -2, then one tick of gravity
        assert_relative_eq!(loco.vertical_velocity(), -2.0 - 30.0 * dt, epsilon = 1e-5);
        assert_eq!(body.position.y, 0.0);
    }

    #[test]
    fn test_speed_multipliers() {
        let (mut loco, mut camera) = controller();
        let mut body = FlatGround::standing();
        let forward = Intent::moving(Vec2::Y);
        let dt = 0.1;

        loco.tick(&mut body, &mut (), &mut camera, &forward, ExternalMotion::default(), dt);
        assert_relative_eq!(loco.horizontal_velocity().length(), 6.0, epsilon = 1e-5);

        loco.tick(&mut body, &mut (), &mut camera, &forward.with_sprint(true), ExternalMotion::default(), dt);
        assert_relative_eq!(loco.horizontal_velocity().length(), 12.0, epsilon = 1e-5);

        loco.tick(&mut body, &mut (), &mut camera, &forward.with_crouch(true), ExternalMotion::default(), dt);
        assert_relative_eq!(loco.horizontal_velocity().length(), 3.6, epsilon = 1e-5);
    }

    #[test]
    fn test_status_speed_modifier_scales_final_speed() {
        let (mut loco, mut camera) = controller();
        let mut body = FlatGround::standing();
        let external = ExternalMotion {
            speed_modifier: 0.5,
            ..ExternalMotion::default()
        };

        let report = loco.tick(&mut body, &mut (), &mut camera, &Intent::moving(Vec2::Y), external, 0.1);
        assert_relative_eq!(loco.horizontal_velocity().length(), 3.0, epsilon = 1e-5);
        assert_relative_eq!(report.displacement.z, 0.3, epsilon = 1e-5);

        let report = loco.tick(
            &mut body,
            &mut (),
            &mut camera,
            &Intent::moving(Vec2::Y).with_sprint(true),
            external,
            0.1,
        );
        assert_relative_eq!(report.displacement.z, 0.6, epsilon = 1e-5);
    }

    #[test]
    fn test_recoil_velocity_added_to_displacement() {
        let (mut loco, mut camera) = controller();
        let mut body = FlatGround::standing();
        let external = ExternalMotion {
            recoil_velocity: Vec3::new(2.0, 0.0, 0.0),
            ..ExternalMotion::default()
        };

        let report = loco.tick(&mut body, &mut (), &mut camera, &Intent::idle(), external, 0.1);
        assert_relative_eq!(report.displacement.x, 0.2, epsilon = 1e-6);
        assert_relative_eq!(body.position.x, 0.2, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_and_garbage_intent_stay_finite() {
        let (mut loco, mut camera) = controller();
        let mut body = FlatGround::standing();
        let garbage = Intent::moving(Vec2::new(f32::NAN, 1.0));

        for intent in [Intent::idle(), garbage] {
            let report = loco.tick(&mut body, &mut (), &mut camera, &intent, ExternalMotion::default(), 1.0 / 60.0);
            assert!(report.displacement.is_finite());
            assert!(body.position.is_finite());
        }
    }

    #[test]
    fn test_crouch_blends_and_stays_in_range() {
        let (mut loco, mut camera) = controller();
        let mut body = FlatGround::standing();
        let dt = 1.0 / 60.0;
        let crouch = Intent::idle().with_crouch(true);

        loco.tick(&mut body, &mut (), &mut camera, &crouch, ExternalMotion::default(), dt);
        let height = body.dims.height;
        assert!(height < 2.0 && height > 1.2, "crouch must blend, got {height}");

        for _ in 0..300 {
            loco.tick(&mut body, &mut (), &mut camera, &crouch, ExternalMotion::default(), dt);
            assert!(body.dims.height >= 1.2 && body.dims.height <= 2.0);
        }
        assert_relative_eq!(body.dims.height, 1.2, epsilon = 1e-3);
        assert_relative_eq!(body.dims.center.y, 0.6, epsilon = 1e-3);
        assert_relative_eq!(camera.eye_height(), 1.0, epsilon = 1e-3);
    }

    #[test]
    fn test_no_headroom_keeps_crouch() {
        let (mut loco, mut camera) = controller();
        let mut body = FlatGround::standing().with_ceiling(1.5);
        body.dims.height = 1.2;
        body.dims.center = Vec3::Y * 0.6;
        let dt = 1.0 / 60.0;

        for _ in 0..30 {
            loco.tick(&mut body, &mut (), &mut camera, &Intent::idle(), ExternalMotion::default(), dt);
        }
        assert_eq!(loco.stance(), Stance::Crouching);
        assert_relative_eq!(body.dims.height, 1.2, epsilon = 1e-5);

        // Clear the way and stand back up over several ticks
        body.ceiling = None;
        loco.tick(&mut body, &mut (), &mut camera, &Intent::idle(), ExternalMotion::default(), dt);
        assert_eq!(loco.stance(), Stance::Standing);
        assert!(body.dims.height > 1.2 && body.dims.height < 2.0);

        for _ in 0..300 {
            loco.tick(&mut body, &mut (), &mut camera, &Intent::idle(), ExternalMotion::default(), dt);
        }
        assert_relative_eq!(body.dims.height, 2.0, epsilon = 1e-3);
    }

    #[test]
    fn test_landing_runs_bounce_to_completion() {
        let (mut loco, mut camera) = controller();
        let mut body = FlatGround::in_air(1.0);
        let dt = 1.0 / 60.0;

        let mut landings = 0;
        let mut air_time = 0.0;
        let mut lowest = 0.0f32;
        for _ in 0..240 {
            let report = loco.tick(&mut body, &mut (), &mut camera, &Intent::idle(), ExternalMotion::default(), dt);
            if report.landed {
                landings += 1;
                air_time = report.air_time;
            } else {
                assert_eq!(report.air_time, 0.0);
            }
            lowest = lowest.min(camera.bounce_offset());
        }

        assert_eq!(landings, 1);
        // A 1 m drop under 30 m/s^2 takes about 0.26 s
        assert!(air_time > 0.2 && air_time < 0.35, "air time {}", air_time);
        assert!(lowest < 0.0);
        assert_eq!(loco.state().bounce.phase(), BouncePhase::Idle);
        assert_eq!(camera.bounce_offset(), 0.0);
        // Bounce never moves the body
        assert_eq!(body.position.y, 0.0);
    }

    #[test]
    fn test_look_turns_movement() {
        let (mut loco, mut camera) = controller();
        let mut body = FlatGround::standing();
        // 30 units * 3 deg = 90 deg: forward becomes +X
        let intent = Intent::moving(Vec2::Y).with_look(Vec2::new(30.0, 0.0));

        let report = loco.tick(&mut body, &mut (), &mut camera, &intent, ExternalMotion::default(), 0.1);
        assert_relative_eq!(camera.yaw(), 90.0, epsilon = 1e-4);
        assert_relative_eq!(report.displacement.x, 0.6, epsilon = 1e-4);
        assert!(report.displacement.z.abs() < 1e-4);
    }

    #[test]
    fn test_reset_restores_standing() {
        let (mut loco, mut camera) = controller();
        let mut body = FlatGround::standing();
        for _ in 0..60 {
            loco.tick(&mut body, &mut (), &mut camera, &Intent::idle().with_crouch(true), ExternalMotion::default(), 1.0 / 60.0);
        }
        loco.reset(&mut body, &mut ());
        assert_eq!(loco.stance(), Stance::Standing);
        assert_eq!(body.dims.height, 2.0);
        assert_eq!(loco.vertical_velocity(), 0.0);
    }
}
