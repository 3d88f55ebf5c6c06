//! Starlance headless driver.
//!
//! Runs the gameplay core without an engine attached. The driver plays the
//! host's part: it steps frames at a fixed rate, keeps the player's trigger
//! held and, standing in for the physics engine, reports a collision whenever
//! a player shot climbs past a target. Engine commands are counted, or dumped
//! as JSON lines with `--json`.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --scene all --json
//! RUST_LOG=debug cargo run -- --scene battle --ticks 600
//! ```

use bevy_ecs::prelude::*;
use clap::{Parser, ValueEnum};
use crossbeam_channel::Receiver;
use log::{error, info, warn};
use rustc_hash::FxHashMap;
use std::path::PathBuf;

use starlance::components::body::{Category, CollisionBody};
use starlance::components::boss::BossBehavior;
use starlance::components::damage::DamageModel;
use starlance::components::enemy::{EnemyBehavior, EnemyPhase};
use starlance::components::mapposition::MapPosition;
use starlance::components::weapon::Weapon;
use starlance::events::collision::CollisionStarted;
use starlance::events::engine::EngineCmd;
use starlance::game::{BattleScene, Frame, IntroScene, setup_world, spawn_battle, spawn_intro};
use starlance::resources::combatlog::CombatLog;
use starlance::resources::gameconfig::GameConfig;
use starlance::systems::sequencer::sequencers_idle;

/// Vertical reach of a target, in pixels below its pivot.
const TARGET_REACH: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SceneChoice {
    Intro,
    Battle,
    All,
}

/// Starlance gameplay core, headless.
#[derive(Parser)]
#[command(version, about = "Headless driver for the Starlance gameplay core")]
struct Cli {
    /// INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./starlance.ini")]
    config: PathBuf,

    /// Scene(s) to run.
    #[arg(long, value_enum, default_value_t = SceneChoice::All)]
    scene: SceneChoice,

    /// Stop after this many frames.
    #[arg(long, default_value_t = 60 * 60 * 10)]
    ticks: u64,

    /// Override the configured frame rate.
    #[arg(long)]
    fps: Option<u32>,

    /// Print engine commands as JSON lines.
    #[arg(long)]
    json: bool,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    save_config: bool,
}

enum Stage {
    Intro(IntroScene),
    Battle(BattleScene),
    Done,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{e}; using defaults");
    }
    if let Some(fps) = cli.fps {
        config.fps = fps;
    }

    // Early-exit: write the configuration and quit
    if cli.save_config {
        match config.save_to_file() {
            Ok(()) => println!("Config written to {}", config.config_path.display()),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let mut world = World::new();
    let rx = setup_world(&mut world, &config);
    let mut stage = match cli.scene {
        SceneChoice::Intro | SceneChoice::All => Stage::Intro(spawn_intro(&mut world, &config)),
        SceneChoice::Battle => Stage::Battle(spawn_battle(&mut world, &config)),
    };

    let mut frame = Frame::new();
    let mut counts: FxHashMap<&'static str, u64> = FxHashMap::default();
    let mut next_target = 0usize;
    let dt = config.frame_delta();
    let mut tick = 0u64;

    while tick < cli.ticks {
        if let Stage::Battle(battle) = &stage {
            hold_trigger(&mut world, battle.player);
            report_collisions(&mut world, battle, &mut next_target);
        }

        if let Err(e) = frame.run(&mut world, dt) {
            error!("Frame {} aborted: {}", tick, e);
            std::process::exit(1);
        }
        drain_engine(&rx, cli.json, &mut counts);
        tick += 1;

        stage = match stage {
            Stage::Intro(intro) if intro_over(&mut world, &intro) => {
                info!("Intro finished after {} frames", tick);
                if cli.scene == SceneChoice::All {
                    Stage::Battle(spawn_battle(&mut world, &config))
                } else {
                    Stage::Done
                }
            }
            Stage::Battle(battle) if battle_over(&mut world, &battle) => {
                info!("Battle finished after {} frames", tick);
                Stage::Done
            }
            other => other,
        };
        if matches!(stage, Stage::Done) {
            break;
        }
    }

    let log = world.resource::<CombatLog>();
    info!(
        "{} frames, {:.2}s simulated; hits={} parts_destroyed={} absorbed={}",
        tick,
        tick as f32 * dt,
        log.hits,
        log.parts_destroyed,
        log.absorbed
    );
    let mut kinds: Vec<_> = counts.iter().collect();
    kinds.sort();
    for (kind, n) in kinds {
        info!("  {kind}: {n}");
    }
    if cli.json {
        match serde_json::to_string(log) {
            Ok(line) => println!("{line}"),
            Err(e) => warn!("Could not serialize combat log: {e}"),
        }
    }
}

fn hold_trigger(world: &mut World, player: Entity) {
    if let Some(mut weapon) = world.get_mut::<Weapon>(player) {
        weapon.trigger_held = true;
    }
}

/// Pair every player shot that climbed past a target with that target.
///
/// Targets are the boss' bodies and the enemies that have entered, taken in
/// turn so all of them get hit.
fn report_collisions(world: &mut World, battle: &BattleScene, next_target: &mut usize) {
    let mut targets: Vec<(Entity, MapPosition)> = Vec::new();
    let boss_alive = world
        .get::<BossBehavior>(battle.boss)
        .is_some_and(|b| !b.is_dying());
    if let (true, Some(pos)) = (boss_alive, world.get::<MapPosition>(battle.boss).copied()) {
        targets.extend(battle.boss_bodies().into_iter().map(|body| (body, pos)));
    }
    for &enemy in &battle.enemies {
        let entered = world
            .get::<EnemyBehavior>(enemy)
            .is_some_and(|b| b.current != EnemyPhase::Dormant);
        let alive = world.get::<DamageModel>(enemy).is_some_and(|m| !m.is_dead());
        if let (true, true, Some(pos)) = (entered, alive, world.get::<MapPosition>(enemy).copied()) {
            targets.push((enemy, pos));
        }
    }
    if targets.is_empty() {
        return;
    }

    let shots: Vec<(Entity, MapPosition)> = world
        .query::<(Entity, &CollisionBody, &MapPosition)>()
        .iter(world)
        .filter(|(_, body, _)| body.category == Category::PlayerShot)
        .map(|(e, _, pos)| (e, *pos))
        .collect();

    for (shot, at) in shots {
        let (target, pos) = targets[*next_target % targets.len()];
        if at.y <= pos.y + TARGET_REACH && at.y >= 0.0 {
            world.write_message(CollisionStarted::new(shot, target).at(at));
            *next_target += 1;
        }
    }
}

fn drain_engine(rx: &Receiver<EngineCmd>, json: bool, counts: &mut FxHashMap<&'static str, u64>) {
    for cmd in rx.try_iter() {
        let kind = match &cmd {
            EngineCmd::SpawnEffect { .. } => "spawn_effect",
            EngineCmd::SpawnProjectile { .. } => "spawn_projectile",
            EngineCmd::RemoveEntity { .. } => "remove_entity",
        };
        *counts.entry(kind).or_default() += 1;
        if json {
            match serde_json::to_string(&cmd) {
                Ok(line) => println!("{line}"),
                Err(e) => warn!("Could not serialize {kind}: {e}"),
            }
        }
    }
}

fn intro_over(world: &mut World, intro: &IntroScene) -> bool {
    sequencers_idle(world) && world.get_entity(intro.overlay).is_err()
}

fn battle_over(world: &mut World, battle: &BattleScene) -> bool {
    sequencers_idle(world) && world.get_entity(battle.boss).is_err()
}
