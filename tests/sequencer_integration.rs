//! Scene sequencers driven through full frames.

use bevy_ecs::prelude::*;

use starlance::components::sequencer::{BoxedTrigger, SceneSequencer, SequencerError};
use starlance::components::trigger::{HookError, HookKind, HookTrigger};
use starlance::game::{Frame, setup_world};
use starlance::resources::gameconfig::GameConfig;
use starlance::resources::worldtime::WorldTime;
use starlance::systems::sequencer::sequencers_idle;

const DT: f32 = 0.5;

/// Hook calls in the order they happened.
#[derive(Resource, Default)]
struct Journal(Vec<String>);

fn note(world: &mut World, entry: &str) {
    world.resource_mut::<Journal>().0.push(entry.to_string());
}

fn make_world() -> World {
    let mut world = World::new();
    let _rx = setup_world(&mut world, &GameConfig::new());
    world.init_resource::<Journal>();
    world
}

fn elapsed(world: &World) -> f32 {
    world.resource::<WorldTime>().elapsed
}

/// Active from `start` until `end`, journaling every hook.
fn window(name: &'static str, start: f32, end: f32) -> BoxedTrigger<World> {
    Box::new(
        HookTrigger::new(name)
            .activate_when(move |w: &World| elapsed(w) >= start)
            .remove_when(move |w: &World| elapsed(w) >= end)
            .on_init(move |w: &mut World| {
                note(w, &format!("{name}:init"));
                Ok(())
            })
            .on_execute(move |w: &mut World| {
                note(w, &format!("{name}:execute"));
                Ok(())
            })
            .on_remove(move |w: &mut World| {
                note(w, &format!("{name}:remove"));
                Ok(())
            }),
    )
}

#[test]
fn test_hooks_run_once_each_in_order() {
    let mut world = make_world();
    world.spawn(SceneSequencer::new(vec![window("a", 1.0, 2.0)]));
    let mut frame = Frame::new();

    for _ in 0..8 {
        frame.run(&mut world, DT).unwrap();
    }

    let journal = &world.resource::<Journal>().0;
    assert_eq!(
        journal,
        &[
            "a:init",
            "a:execute",
            "a:execute",
            "a:remove",
            "a:execute",
        ]
    );
    assert!(sequencers_idle(&mut world));
}

#[test]
fn test_triggers_overlap_by_time_window() {
    let mut world = make_world();
    let sequencer = world
        .spawn(SceneSequencer::new(vec![
            window("first", 0.0, 1.5),
            window("second", 1.0, 2.0),
        ]))
        .id();
    let mut frame = Frame::new();

    frame.run(&mut world, DT).unwrap();
    {
        let seq = &world.get::<SceneSequencer>(sequencer).unwrap().0;
        assert_eq!(seq.active_names().collect::<Vec<_>>(), vec!["first"]);
        assert_eq!(seq.pending_names().collect::<Vec<_>>(), vec!["second"]);
    }

    frame.run(&mut world, DT).unwrap();
    {
        let seq = &world.get::<SceneSequencer>(sequencer).unwrap().0;
        assert_eq!(seq.active_len(), 2);
        assert_eq!(seq.pending_len(), 0);
    }

    frame.run(&mut world, DT).unwrap();
    {
        let seq = &world.get::<SceneSequencer>(sequencer).unwrap().0;
        assert_eq!(seq.active_names().collect::<Vec<_>>(), vec!["second"]);
    }

    frame.run(&mut world, DT).unwrap();
    assert!(sequencers_idle(&mut world));

    let journal = &world.resource::<Journal>().0;
    let inits = journal.iter().filter(|e| e.ends_with(":init")).count();
    let removes = journal.iter().filter(|e| e.ends_with(":remove")).count();
    assert_eq!((inits, removes), (2, 2));
}

#[test]
fn test_empty_sequencer_is_a_no_op() {
    let mut world = make_world();
    let sequencer = world.spawn(SceneSequencer::default()).id();
    let mut frame = Frame::new();

    for _ in 0..3 {
        frame.run(&mut world, DT).unwrap();
    }
    assert!(world.get::<SceneSequencer>(sequencer).unwrap().0.is_idle());
    assert!(world.resource::<Journal>().0.is_empty());
}

#[test]
fn test_hook_failure_aborts_the_frame() {
    let mut world = make_world();
    let failing: BoxedTrigger<World> = Box::new(
        HookTrigger::new("broken")
            .on_init(|_: &mut World| Err(HookError::missing("Opacity"))),
    );
    let sequencer = world
        .spawn(SceneSequencer::new(vec![failing, window("after", 0.0, 10.0)]))
        .id();
    let mut frame = Frame::new();

    let err = frame.run(&mut world, DT).unwrap_err();
    let SequencerError::Hook { trigger, hook, .. } = &err;
    assert_eq!(trigger, "broken");
    assert_eq!(*hook, HookKind::Init);
    assert_eq!(
        err.to_string(),
        "trigger `broken` failed in init: missing Opacity"
    );

    // the sequencer stays on its entity; the untouched trigger is still pending
    let seq = &world.get::<SceneSequencer>(sequencer).unwrap().0;
    assert_eq!(seq.active_names().collect::<Vec<_>>(), vec!["broken"]);
    assert_eq!(seq.pending_names().collect::<Vec<_>>(), vec!["after"]);

    frame.run(&mut world, DT).unwrap();
    assert_eq!(
        world.resource::<Journal>().0,
        vec!["after:init".to_string(), "after:execute".to_string()]
    );
}

#[test]
fn test_despawned_owner_stops_its_sequencer() {
    let mut world = make_world();
    let sequencer = world
        .spawn(SceneSequencer::new(vec![window("a", 0.0, 10.0)]))
        .id();
    let mut frame = Frame::new();

    frame.run(&mut world, DT).unwrap();
    world.despawn(sequencer);
    frame.run(&mut world, DT).unwrap();

    assert_eq!(world.resource::<Journal>().0, vec!["a:init", "a:execute"]);
}
