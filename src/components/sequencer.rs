//! Two-pool trigger sequencer.
//!
//! A [`Sequencer`] owns a `pending` and an `active` list of
//! [`Trigger`](super::trigger::Trigger)s and advances them once per tick with
//! [`Sequencer::update`]. The order inside a tick is fixed:
//!
//! 1. **Pending pass** – split `pending` (stable) by `should_activate`, run
//!    `init` on the promoted ones in order, append them to `active`.
//! 2. **Active pass** – evaluate `should_remove` on every active trigger,
//!    including the ones promoted a moment ago.
//! 3. Run `remove` on the retiring triggers, in order.
//! 4. Run `execute` on every trigger of the active pass, in order. Retiring
//!    triggers get this last `execute` after their `remove`.
//! 5. Keep the survivors as the new `active` list.
//!
//! A trigger lives in exactly one of the two lists, or in neither once it has
//! been retired. There is no way back from active to pending.
//!
//! # Failures
//!
//! The first hook that fails aborts the rest of the tick and the error is
//! returned as [`SequencerError::Hook`]. The lists are left consistent:
//! whatever ran is committed, whatever did not run keeps its pre-tick place.
//! See [`Sequencer::update`] for the exact rules.
//!
//! # ECS
//!
//! Game triggers run against the whole `World`. [`SceneSequencer`] wraps a
//! `Sequencer<World>` as a component; [`run_sequencers`](crate::systems::sequencer::run_sequencers)
//! takes it out of its entity, updates it with `&mut World`, and puts it back.

use bevy_ecs::prelude::*;
use log::{debug, info};
use std::fmt;
use thiserror::Error;

use crate::components::trigger::{HookError, HookKind, Trigger};

/// A hook failed and the tick was aborted.
#[derive(Debug, Error)]
pub enum SequencerError {
    #[error("trigger `{trigger}` failed in {hook}: {source}")]
    Hook {
        trigger: String,
        hook: HookKind,
        #[source]
        source: HookError,
    },
}

impl SequencerError {
    fn hook<C: ?Sized>(trigger: &dyn Trigger<C>, hook: HookKind, source: HookError) -> Self {
        SequencerError::Hook {
            trigger: trigger.name().to_string(),
            hook,
            source,
        }
    }
}

pub type BoxedTrigger<C> = Box<dyn Trigger<C>>;

/// One entry of the active pass.
struct Slot<C: ?Sized> {
    trigger: BoxedTrigger<C>,
    retiring: bool,
    retired: bool,
}

pub struct Sequencer<C: ?Sized> {
    pending: Vec<BoxedTrigger<C>>,
    active: Vec<BoxedTrigger<C>>,
}

impl<C: ?Sized> Default for Sequencer<C> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            active: Vec::new(),
        }
    }
}

impl<C: ?Sized> Sequencer<C> {
    /// Create a sequencer with every trigger pending.
    pub fn new(triggers: Vec<BoxedTrigger<C>>) -> Self {
        Self {
            pending: triggers,
            active: Vec::new(),
        }
    }

    /// Queue another trigger. It is considered from the next tick on.
    pub fn push(&mut self, trigger: impl Trigger<C> + 'static) {
        self.pending.push(Box::new(trigger));
    }

    pub fn with(mut self, trigger: impl Trigger<C> + 'static) -> Self {
        self.push(trigger);
        self
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Nothing pending and nothing active.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty() && self.active.is_empty()
    }

    pub fn pending_names(&self) -> impl Iterator<Item = &str> {
        self.pending.iter().map(|t| t.name())
    }

    pub fn active_names(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(|t| t.name())
    }

    /// Advance every trigger by one tick.
    ///
    /// On a hook failure the tick stops there and the lists are committed as
    /// follows:
    ///
    /// - `init` failed: triggers initialized before it and the failing one
    ///   are active; promoted triggers not reached yet go back to the front
    ///   of `pending`.
    /// - `remove` failed: triggers removed before it and the failing one are
    ///   retired; retiring triggers not reached yet stay active.
    /// - `execute` failed: retirements of this tick are already final.
    pub fn update(&mut self, ctx: &mut C) -> Result<(), SequencerError> {
        self.activate_pending(ctx)?;
        self.process_active(ctx)
    }

    fn activate_pending(&mut self, ctx: &mut C) -> Result<(), SequencerError> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let view: &C = &*ctx;
        let (to_activate, still_pending): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|trigger| trigger.should_activate(view));
        self.pending = still_pending;

        let mut promoted = to_activate.into_iter();
        while let Some(mut trigger) = promoted.next() {
            let result = trigger.init(ctx);
            match result {
                Ok(()) => {
                    info!("Trigger '{}' activated", trigger.name());
                    self.active.push(trigger);
                }
                Err(source) => {
                    let err = SequencerError::hook(trigger.as_ref(), HookKind::Init, source);
                    self.active.push(trigger);
                    let mut requeued: Vec<_> = promoted.collect();
                    requeued.append(&mut self.pending);
                    self.pending = requeued;
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    fn process_active(&mut self, ctx: &mut C) -> Result<(), SequencerError> {
        if self.active.is_empty() {
            return Ok(());
        }
        let mut slots: Vec<Slot<C>> = self
            .active
            .drain(..)
            .map(|trigger| {
                let retiring = trigger.should_remove(&*ctx);
                Slot {
                    trigger,
                    retiring,
                    retired: false,
                }
            })
            .collect();

        let result = Self::run_hooks(&mut slots, ctx);

        self.active = slots
            .into_iter()
            .filter(|slot| !slot.retired)
            .map(|slot| slot.trigger)
            .collect();
        result
    }

    fn run_hooks(slots: &mut [Slot<C>], ctx: &mut C) -> Result<(), SequencerError> {
        for slot in slots.iter_mut().filter(|slot| slot.retiring) {
            slot.retired = true;
            slot.trigger
                .remove(ctx)
                .map_err(|e| SequencerError::hook(slot.trigger.as_ref(), HookKind::Remove, e))?;
            info!("Trigger '{}' retired", slot.trigger.name());
        }
        for slot in slots.iter_mut() {
            slot.trigger
                .execute(ctx)
                .map_err(|e| SequencerError::hook(slot.trigger.as_ref(), HookKind::Execute, e))?;
        }
        debug!("Sequencer tick: {} triggers executed", slots.len());
        Ok(())
    }
}

impl<C: ?Sized> fmt::Debug for Sequencer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequencer")
            .field("pending", &self.pending_names().collect::<Vec<_>>())
            .field("active", &self.active_names().collect::<Vec<_>>())
            .finish()
    }
}

/// A sequencer whose triggers read and write the ECS world.
#[derive(Component, Default, Debug)]
pub struct SceneSequencer(pub Sequencer<World>);

impl SceneSequencer {
    pub fn new(triggers: Vec<BoxedTrigger<World>>) -> Self {
        SceneSequencer(Sequencer::new(triggers))
    }
}
