//! Message plumbing between the ECS world and the external engine.
//!
//! - [`forward_engine_cmds`] pushes this frame's [`EngineCmd`]s into the
//!   [`EngineBridge`] channel.
//! - [`update_engine_cmds`] and [`update_collision_messages`] advance the
//!   message queues. Run them last in the frame.

use bevy_ecs::prelude::*;

use crate::events::collision::CollisionStarted;
use crate::events::engine::EngineCmd;
use crate::resources::enginebridge::EngineBridge;

/// Forward ECS EngineCmd messages to the host via the EngineBridge sender.
pub fn forward_engine_cmds(bridge: Res<EngineBridge>, mut reader: MessageReader<EngineCmd>) {
    for cmd in reader.read() {
        // the host may have dropped its receiver; gameplay goes on regardless
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

pub fn update_engine_cmds(mut msgs: ResMut<Messages<EngineCmd>>) {
    msgs.update();
}

pub fn update_collision_messages(mut msgs: ResMut<Messages<CollisionStarted>>) {
    msgs.update();
}
