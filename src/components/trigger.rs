//! Staged behavior units driven by a [`Sequencer`](super::sequencer::Sequencer).
//!
//! A [`Trigger`] is a small lifecycle with two predicates and three hooks:
//!
//! - `should_activate` – polled every tick while the trigger is pending
//! - `init` – runs once, the tick the trigger is promoted to active
//! - `should_remove` – polled every tick while the trigger is active
//! - `remove` – runs once, the tick the trigger is retired
//! - `execute` – runs every tick while active, including the retiring tick
//!
//! Every hook has a no-op default, so a trigger only implements what it needs.
//! The context type `C` is whatever the owner hands to
//! [`Sequencer::update`](super::sequencer::Sequencer::update): the game uses
//! `bevy_ecs::world::World`, tests use small recording structs.
//!
//! For one-off triggers that do not deserve their own type, [`HookTrigger`]
//! builds one from closures:
//!
//! ```ignore
//! let trigger = HookTrigger::<World>::new("boss_warning")
//!     .activate_when(|world| world.resource::<WorldTime>().elapsed >= 2.0)
//!     .on_init(|world| { /* ... */ Ok(()) })
//!     .remove_when(|_| true);
//! ```

use std::fmt;
use thiserror::Error;

/// Failure reported by a trigger hook.
///
/// Hook failures are programmer errors: the sequencer aborts the tick and
/// propagates them to whoever drives the frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct HookError(pub String);

impl HookError {
    pub fn new(message: impl Into<String>) -> Self {
        HookError(message.into())
    }

    /// The hook needed a component or resource that is not there.
    pub fn missing(what: &str) -> Self {
        HookError(format!("missing {what}"))
    }
}

pub type HookResult = Result<(), HookError>;

/// Which lifecycle hook was running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookKind {
    Init,
    Execute,
    Remove,
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookKind::Init => f.write_str("init"),
            HookKind::Execute => f.write_str("execute"),
            HookKind::Remove => f.write_str("remove"),
        }
    }
}

/// A staged behavior with activation/removal predicates and lifecycle hooks.
///
/// Predicates take the context by shared reference and must not have side
/// effects; hooks take it mutably.
pub trait Trigger<C: ?Sized>: Send + Sync {
    /// Name used in logs and error reports.
    fn name(&self) -> &str {
        "trigger"
    }

    fn should_activate(&self, ctx: &C) -> bool;

    fn should_remove(&self, ctx: &C) -> bool;

    fn init(&mut self, _ctx: &mut C) -> HookResult {
        Ok(())
    }

    fn execute(&mut self, _ctx: &mut C) -> HookResult {
        Ok(())
    }

    fn remove(&mut self, _ctx: &mut C) -> HookResult {
        Ok(())
    }
}

type Hook<C> = Box<dyn FnMut(&mut C) -> HookResult + Send + Sync>;
type Predicate<C> = Box<dyn Fn(&C) -> bool + Send + Sync>;

/// Closure-backed [`Trigger`].
///
/// Activates immediately and never removes itself unless told otherwise.
pub struct HookTrigger<C: ?Sized> {
    name: String,
    activate: Predicate<C>,
    retire: Predicate<C>,
    init: Option<Hook<C>>,
    execute: Option<Hook<C>>,
    remove: Option<Hook<C>>,
}

impl<C: ?Sized> HookTrigger<C> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            activate: Box::new(|_| true),
            retire: Box::new(|_| false),
            init: None,
            execute: None,
            remove: None,
        }
    }

    pub fn activate_when(mut self, predicate: impl Fn(&C) -> bool + Send + Sync + 'static) -> Self {
        self.activate = Box::new(predicate);
        self
    }

    pub fn remove_when(mut self, predicate: impl Fn(&C) -> bool + Send + Sync + 'static) -> Self {
        self.retire = Box::new(predicate);
        self
    }

    pub fn on_init(mut self, hook: impl FnMut(&mut C) -> HookResult + Send + Sync + 'static) -> Self {
        self.init = Some(Box::new(hook));
        self
    }

    pub fn on_execute(
        mut self,
        hook: impl FnMut(&mut C) -> HookResult + Send + Sync + 'static,
    ) -> Self {
        self.execute = Some(Box::new(hook));
        self
    }

    pub fn on_remove(
        mut self,
        hook: impl FnMut(&mut C) -> HookResult + Send + Sync + 'static,
    ) -> Self {
        self.remove = Some(Box::new(hook));
        self
    }
}

impl<C: ?Sized> Trigger<C> for HookTrigger<C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn should_activate(&self, ctx: &C) -> bool {
        (self.activate)(ctx)
    }

    fn should_remove(&self, ctx: &C) -> bool {
        (self.retire)(ctx)
    }

    fn init(&mut self, ctx: &mut C) -> HookResult {
        match self.init.as_mut() {
            Some(hook) => hook(ctx),
            None => Ok(()),
        }
    }

    fn execute(&mut self, ctx: &mut C) -> HookResult {
        match self.execute.as_mut() {
            Some(hook) => hook(ctx),
            None => Ok(()),
        }
    }

    fn remove(&mut self, ctx: &mut C) -> HookResult {
        match self.remove.as_mut() {
            Some(hook) => hook(ctx),
            None => Ok(()),
        }
    }
}

impl<C: ?Sized> fmt::Debug for HookTrigger<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookTrigger")
            .field("name", &self.name)
            .field("init", &self.init.is_some())
            .field("execute", &self.execute.is_some())
            .field("remove", &self.remove.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counter {
        value: i32,
    }

    #[test]
    fn test_defaults_activate_now_and_never_retire() {
        let trigger = HookTrigger::<Counter>::new("idle");
        let ctx = Counter::default();
        assert!(trigger.should_activate(&ctx));
        assert!(!trigger.should_remove(&ctx));
        assert_eq!(trigger.name(), "idle");
    }

    #[test]
    fn test_missing_hooks_are_no_ops() {
        let mut trigger = HookTrigger::<Counter>::new("idle");
        let mut ctx = Counter::default();
        assert!(trigger.init(&mut ctx).is_ok());
        assert!(trigger.execute(&mut ctx).is_ok());
        assert!(trigger.remove(&mut ctx).is_ok());
        assert_eq!(ctx.value, 0);
    }

    #[test]
    fn test_closures_see_context() {
        let mut trigger = HookTrigger::<Counter>::new("count")
            .activate_when(|c| c.value >= 1)
            .remove_when(|c| c.value >= 10)
            .on_execute(|c| {
                c.value += 3;
                Ok(())
            });
        let mut ctx = Counter { value: 1 };
        assert!(trigger.should_activate(&ctx));
        for _ in 0..3 {
            trigger.execute(&mut ctx).unwrap();
        }
        assert_eq!(ctx.value, 10);
        assert!(trigger.should_remove(&ctx));
    }

    #[test]
    fn test_hook_error_message() {
        let err = HookError::missing("DamageModel");
        assert_eq!(err.to_string(), "missing DamageModel");
        assert_eq!(HookKind::Remove.to_string(), "remove");
    }
}
