//! World setup, scenes and the per-frame runner.
//!
//! - [`setup_world`] inserts the resources and observers every scene needs
//!   and connects the engine bridge.
//! - [`spawn_intro`] and [`spawn_battle`] build the two scenes, each driven
//!   by its own [`SceneSequencer`].
//! - [`Frame`] runs one tick of the simulation.
//!
//! # Frame order
//!
//! 1. advance [`WorldTime`]
//! 2. simulation schedule: resolve collisions, fire weapons, move and cull
//!    projectiles, tweens, phase machines, flight paths
//! 3. [`run_sequencers`]
//! 4. flush schedule: forward engine commands, advance message queues
//!
//! Collisions are resolved before any trigger predicate looks at a
//! [`DamageModel`] in the same frame.

use bevy_ecs::prelude::*;
use crossbeam_channel::Receiver;
use log::info;

use crate::components::body::{Category, CollisionBody, LEFT_ENGINE, RIGHT_ENGINE};
use crate::components::boss::{BossBehavior, BossPlan};
use crate::components::damage::DamageModel;
use crate::components::dialogue::TextReveal;
use crate::components::dynamictext::DynamicText;
use crate::components::enemy::{EnemyBehavior, EnemyPlan, FlightPattern};
use crate::components::mapposition::MapPosition;
use crate::components::opacity::Opacity;
use crate::components::panel::Panel;
use crate::components::sequencer::{BoxedTrigger, SceneSequencer, SequencerError};
use crate::components::tween::Tweens;
use crate::components::weapon::Weapon;
use crate::events::collision::CollisionStarted;
use crate::events::damage::observe_hit_event;
use crate::events::engine::EngineCmd;
use crate::resources::collisionrules::CollisionRules;
use crate::resources::combatlog::CombatLog;
use crate::resources::enginebridge::connect_engine;
use crate::resources::gameconfig::GameConfig;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::boss::boss_phase_system;
use crate::systems::collision::collision_resolver;
use crate::systems::enemy::{enemy_phase_system, flight_path_system};
use crate::systems::engine::{forward_engine_cmds, update_collision_messages, update_engine_cmds};
use crate::systems::movement::movement_system;
use crate::systems::projectile::projectile_culling_system;
use crate::systems::sequencer::run_sequencers;
use crate::systems::time::update_world_time;
use crate::systems::tween::tween_system;
use crate::systems::weapon::weapon_system;
use crate::triggers::boss::BossTrigger;
use crate::triggers::enemy::EnemyTrigger;
use crate::triggers::intro::{OverlayTrigger, RevealTrigger};

const OVERLAY_RGB: u32 = 0xff0000;
const TEXT_BOX_WIDTH: f32 = 180.0;
const TEXT_BOX_HEIGHT: f32 = 30.0;
const TEXT_FONT: &str = "robotomono";
const TEXT_FONT_SIZE: f32 = 16.0;
const ENEMY_START_Y: f32 = -50.0;
const PLAYER_BOTTOM_MARGIN: f32 = 60.0;

/// Insert shared resources and observers. Returns the engine-side receiver.
pub fn setup_world(world: &mut World, config: &GameConfig) -> Receiver<EngineCmd> {
    world.insert_resource(WorldTime::default());
    world.insert_resource(ScreenSize {
        w: config.screen_width as i32,
        h: config.screen_height as i32,
    });
    world.insert_resource(CollisionRules::default());
    world.insert_resource(CombatLog::default());
    world.insert_resource(config.clone());
    world.init_resource::<Messages<CollisionStarted>>();
    let rx = connect_engine(world);
    world.add_observer(observe_hit_event);
    // make sure the observer is registered before the first frame triggers
    world.flush();
    rx
}

/// Handles to the intro scene's entities.
#[derive(Debug, Clone, Copy)]
pub struct IntroScene {
    pub sequencer: Entity,
    pub overlay: Entity,
    pub text: Entity,
    pub frame: Entity,
}

/// Red pulsing overlay with a framed line of text typed out in the middle.
pub fn spawn_intro(world: &mut World, config: &GameConfig) -> IntroScene {
    let w = config.screen_width as f32;
    let h = config.screen_height as f32;
    let box_top = h / 2.0 - TEXT_BOX_HEIGHT / 2.0;

    let overlay = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            Panel::filled(w, h, OVERLAY_RGB),
            Opacity::hidden(),
            Tweens::default(),
        ))
        .id();
    let frame = world
        .spawn((
            MapPosition::new(w / 2.0, box_top),
            Panel::outlined(TEXT_BOX_WIDTH, TEXT_BOX_HEIGHT, 0xffffff, 4.0, 8.0),
            Opacity::default(),
        ))
        .id();
    let text = world
        .spawn((
            MapPosition::new(w / 2.0 + 10.0, box_top + 5.0),
            DynamicText::new("", TEXT_FONT, TEXT_FONT_SIZE),
            TextReveal::new(config.intro_lines.clone(), config.intro_timing),
            Opacity::default(),
        ))
        .id();

    let triggers: Vec<BoxedTrigger<World>> = vec![
        Box::new(OverlayTrigger {
            overlay,
            reveal: text,
        }),
        Box::new(RevealTrigger::new(text).with_frame(frame)),
    ];
    let sequencer = world.spawn(SceneSequencer::new(triggers)).id();
    info!("Intro scene spawned with {} lines", config.intro_lines.len());

    IntroScene {
        sequencer,
        overlay,
        text,
        frame,
    }
}

/// Handles to the battle scene's entities.
#[derive(Debug, Clone)]
pub struct BattleScene {
    pub sequencer: Entity,
    pub player: Entity,
    pub boss: Entity,
    pub hull: Entity,
    pub left_engine: Entity,
    pub right_engine: Entity,
    pub enemies: Vec<Entity>,
}

impl BattleScene {
    /// Boss bodies, hull first.
    pub fn boss_bodies(&self) -> [Entity; 3] {
        [self.hull, self.left_engine, self.right_engine]
    }
}

/// Player, boss and one wave of enemies.
pub fn spawn_battle(world: &mut World, config: &GameConfig) -> BattleScene {
    let w = config.screen_width as f32;
    let h = config.screen_height as f32;

    let player = world
        .spawn((
            MapPosition::new(w / 2.0, h - PLAYER_BOTTOM_MARGIN),
            CollisionBody::new(Category::Player),
            Weapon::player_twin(config.shot_interval, config.bullet_speed),
        ))
        .id();

    let boss = world
        .spawn((
            MapPosition::new(w / 2.0, 0.0),
            BossBehavior::new(BossPlan::new(w / 2.0)),
            DamageModel::new(config.boss_hp)
                .with_part(LEFT_ENGINE, config.engine_hp)
                .with_part(RIGHT_ENGINE, config.engine_hp)
                .with_explosion_amount(config.explosion_amount),
            Tweens::default(),
        ))
        .id();
    let hull = world
        .spawn((CollisionBody::part_of(Category::Boss, boss), ChildOf(boss)))
        .id();
    let left_engine = world
        .spawn((
            CollisionBody::part_of(Category::Boss, boss).with_part(LEFT_ENGINE),
            ChildOf(boss),
        ))
        .id();
    let right_engine = world
        .spawn((
            CollisionBody::part_of(Category::Boss, boss).with_part(RIGHT_ENGINE),
            ChildOf(boss),
        ))
        .id();

    let mut triggers: Vec<BoxedTrigger<World>> = vec![Box::new(BossTrigger::new(boss))];
    let count = config.enemy_count;
    let mut enemies = Vec::with_capacity(count as usize);
    for i in 0..count {
        let pattern = if i % 2 == 0 {
            FlightPattern::Orbit
        } else {
            FlightPattern::Weave
        };
        let x = w * (i + 1) as f32 / (count + 1) as f32;
        let enemy = world
            .spawn((
                MapPosition::new(x, ENEMY_START_Y),
                CollisionBody::new(Category::Enemy),
                EnemyBehavior::new(EnemyPlan::new(pattern)),
                DamageModel::new(config.enemy_hp),
                Weapon::enemy_gun(config.enemy_reload, config.bullet_speed),
                Tweens::default(),
            ))
            .id();
        triggers.push(Box::new(EnemyTrigger::new(
            enemy,
            i as f32 * config.enemy_spacing,
        )));
        enemies.push(enemy);
    }

    let sequencer = world.spawn(SceneSequencer::new(triggers)).id();
    info!(
        "Battle scene spawned: boss hp {}, {} enemies",
        config.boss_hp, count
    );

    BattleScene {
        sequencer,
        player,
        boss,
        hull,
        left_engine,
        right_engine,
        enemies,
    }
}

/// One simulation tick.
pub struct Frame {
    simulation: Schedule,
    flush: Schedule,
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    pub fn new() -> Self {
        let mut simulation = Schedule::default();
        simulation.add_systems(
            (
                collision_resolver,
                weapon_system,
                movement_system,
                projectile_culling_system,
                tween_system,
                boss_phase_system,
                enemy_phase_system,
                flight_path_system,
            )
                .chain(),
        );

        let mut flush = Schedule::default();
        flush.add_systems(
            (
                forward_engine_cmds,
                update_engine_cmds,
                update_collision_messages,
            )
                .chain(),
        );

        Frame { simulation, flush }
    }

    /// Run one frame of `dt` unscaled seconds.
    ///
    /// A trigger hook failure aborts the frame before the flush; engine
    /// commands written so far stay queued for the next flush.
    pub fn run(&mut self, world: &mut World, dt: f32) -> Result<(), SequencerError> {
        update_world_time(world, dt);
        self.simulation.run(world);
        run_sequencers(world)?;
        self.flush.run(world);
        world.clear_trackers();
        Ok(())
    }
}
