use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use glam::{Vec2, Vec3};
use log::info;

use rusted_frontline::engine::audio::LogSoundPlayer;
use rusted_frontline::engine::clock::FrameClock;
use rusted_frontline::engine::physics::body::presets;
use rusted_frontline::engine::physics::{KinematicCapsule, PhysicsWorld};
use rusted_frontline::game::arena::{Aabb, DamageZone, RespawnZone};
use rusted_frontline::game::characters::{
    CharacterBuilder, CharacterCommand, CharacterManager, CharacterTuning, Intent, StatusEffect,
    VitalsEvent,
};
use rusted_frontline::game::weapons::HitscanWeapon;

/// Headless first-person character simulation
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Character tuning file (RON)
    #[arg(short, long)]
    tuning: Option<PathBuf>,

    /// Simulated seconds to run
    #[arg(short, long, default_value_t = 8.0)]
    seconds: f32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

const FRAME: Duration = Duration::from_micros(16_667);

/// Static level: floor, a low slab to crouch under, a backstop wall
fn build_level(world: &mut PhysicsWorld) {
    world.add_collider(presets::level_box(
        Vec3::new(0.0, -0.5, 0.0),
        Vec3::new(40.0, 0.5, 40.0),
    ));
    // Underside at y = 1.7, spanning z 14..18
    world.add_collider(presets::level_box(
        Vec3::new(0.0, 2.2, 16.0),
        Vec3::new(3.0, 0.5, 2.0),
    ));
    world.add_collider(presets::level_box(
        Vec3::new(0.0, 3.0, 30.0),
        Vec3::new(10.0, 3.0, 0.5),
    ));
    world.step();
}

/// Scripted player input
fn player_intent(t: f32) -> Intent {
    let forward = Intent::moving(Vec2::Y);
    match t {
        t if t < 1.0 => forward,
        t if t < 1.02 => forward.with_jump(true),
        t if t < 1.5 => forward.with_sprint(true),
        t if t < 3.5 => forward.with_crouch(true),
        t if t < 4.0 => Intent::moving(Vec2::X).with_look(Vec2::new(0.5, 0.0)),
        _ => Intent::idle(),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logger
    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    info!("Starting Rusted Frontline (headless)...");

    let tuning = match &args.tuning {
        Some(path) => CharacterTuning::load(path)
            .with_context(|| format!("loading tuning from {}", path.display()))?,
        None => CharacterTuning::default(),
    };

    let mut world = PhysicsWorld::new();
    build_level(&mut world);

    let loco = tuning.locomotion;
    let spawn_body = |world: &mut PhysicsWorld, at: Vec3| {
        KinematicCapsule::spawn(world, at, loco.stand_height, loco.radius, loco.skin_width)
    };

    let mut manager = CharacterManager::new();
    let player = manager.spawn(
        CharacterBuilder::new("Player")
            .player_index(0)
            .tuning(tuning)
            .body(spawn_body(&mut world, Vec3::new(0.0, 0.5, 0.0)))
            .default_camera()
            .jump_clips(["jump_01", "jump_02", "jump_03"])
            .seed(1),
    )?;
    let dummy = manager.spawn(
        CharacterBuilder::new("Dummy")
            .tuning(tuning)
            .body(spawn_body(&mut world, Vec3::new(0.0, 0.5, 24.0)))
            .default_camera()
            .yaw(180.0),
    )?;
    world.step();

    // Where the scripted walk ends
    manager.add_hazard(DamageZone::lava(Aabb::new(
        Vec3::new(-3.0, -0.5, 17.0),
        Vec3::new(6.0, 0.3, 22.0),
    )));
    manager.add_respawn_zone(RespawnZone::new(
        Aabb::new(Vec3::new(-100.0, -50.0, -100.0), Vec3::new(100.0, -10.0, 100.0)),
        Vec3::new(0.0, 0.5, 0.0),
        0.0,
    ));

    if let Some(character) = manager.get_mut(dummy) {
        character.subscribe(|event| {
            if let VitalsEvent::EffectAdded(effect) = event {
                info!("Dummy gained '{}'", effect.name);
            }
        });
    }

    let mut weapon = HitscanWeapon::default();
    let mut audio = LogSoundPlayer::new();
    let mut clock = FrameClock::new();
    let mut next_report = 0.0;
    let mut fired = false;

    while (clock.sim_time() as f32) < args.seconds {
        let t = clock.sim_time() as f32;
        let dt = clock.advance(FRAME);

        manager.set_intent(player, player_intent(t));

        if !fired && t >= 0.5 {
            fired = true;
            if let Some(shooter) = manager.get_mut(player) {
                let trace = weapon.fire_from(shooter, &world);
                info!(
                    "Shot from ({:.1}, {:.1}, {:.1}) to ({:.1}, {:.1}, {:.1})",
                    trace.start.x, trace.start.y, trace.start.z, trace.end.x, trace.end.y, trace.end.z
                );
                if trace.hit.is_some() {
                    manager.queue_damage(dummy, 25.0);
                    manager.queue(dummy, CharacterCommand::AddEffect(StatusEffect::poison(5.0, 2.0)));
                }
            }
        }

        manager.update(&mut world, &mut audio, dt);
        weapon.tick(dt);
        world.step();

        if t >= next_report {
            next_report += 1.0;
            for character in manager.all() {
                let p = character.position();
                let effects: Vec<String> = character
                    .vitals()
                    .effects()
                    .effects()
                    .iter()
                    .map(|e| match e.remaining_fraction() {
                        Some(f) => format!("{} {:.0}%", e.name, f * 100.0),
                        None => e.name.clone(),
                    })
                    .collect();
                info!(
                    "t={:.1}s {} hp={} pos=({:.2}, {:.2}, {:.2}) grounded={} stance={:?} effects={:?}",
                    t,
                    character.name,
                    character.vitals().health().display_value(),
                    p.x,
                    p.y,
                    p.z,
                    character.locomotion().is_grounded(),
                    character.locomotion().stance(),
                    effects
                );
            }
        }
    }

    info!(
        "Finished {} ticks ({:.1}s simulated), {} sounds, {}/{} alive",
        clock.tick_count(),
        clock.sim_time(),
        audio.played(),
        manager.alive_count(),
        manager.count()
    );

    Ok(())
}
