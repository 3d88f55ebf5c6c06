//! Running tally of resolved hits.
//!
//! Filled by [`observe_hit_event`](crate::events::damage::observe_hit_event)
//! and reported by the CLI at exit.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::components::damage::HitOutcome;
use crate::events::damage::HitEvent;

#[derive(Resource, Clone, Debug, Default, PartialEq, Serialize)]
pub struct CombatLog {
    /// Hits that did ordinary damage.
    pub hits: u32,
    pub parts_destroyed: u32,
    /// Hits swallowed by already destroyed parts.
    pub absorbed: u32,
    /// Hits per sub-component label.
    pub part_hits: FxHashMap<&'static str, u32>,
}

impl CombatLog {
    pub fn record(&mut self, hit: &HitEvent) {
        match hit.outcome {
            HitOutcome::Hit => self.hits += 1,
            HitOutcome::Destroyed => self.parts_destroyed += 1,
            HitOutcome::Absorbed => self.absorbed += 1,
        }
        if let Some(part) = hit.part {
            *self.part_hits.entry(part.0).or_default() += 1;
        }
    }

    pub fn total(&self) -> u32 {
        self.hits + self.parts_destroyed + self.absorbed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::body::LEFT_ENGINE;
    use bevy_ecs::prelude::World;

    #[test]
    fn test_record_outcomes() {
        let mut world = World::new();
        let boss = world.spawn_empty().id();
        let mut log = CombatLog::default();
        for outcome in [HitOutcome::Hit, HitOutcome::Hit, HitOutcome::Destroyed, HitOutcome::Absorbed] {
            log.record(&HitEvent {
                target: boss,
                part: Some(LEFT_ENGINE),
                outcome,
            });
        }
        log.record(&HitEvent {
            target: boss,
            part: None,
            outcome: HitOutcome::Hit,
        });
        assert_eq!(log.hits, 3);
        assert_eq!(log.parts_destroyed, 1);
        assert_eq!(log.absorbed, 1);
        assert_eq!(log.total(), 5);
        assert_eq!(log.part_hits.get("left_engine"), Some(&4));
    }
}
