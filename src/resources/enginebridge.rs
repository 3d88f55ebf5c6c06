//! Channel from the ECS world to the external engine.
//!
//! Call [`connect_engine`] once during initialization. It inserts the
//! [`EngineBridge`] resource and the message queue for
//! [`EngineCmd`], and hands back the receiving end. Each frame,
//! [`forward_engine_cmds`](crate::systems::engine::forward_engine_cmds) pushes
//! the commands written during that frame into the channel; the host drains
//! the receiver whenever it likes.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::events::engine::EngineCmd;

#[derive(Resource, Clone)]
pub struct EngineBridge {
    /// Sender for [`EngineCmd`] messages (ECS -> engine).
    pub tx_cmd: Sender<EngineCmd>,
}

/// Register the bridge resources and return the engine-side receiver.
pub fn connect_engine(world: &mut World) -> Receiver<EngineCmd> {
    let (tx_cmd, rx_cmd) = unbounded::<EngineCmd>();
    world.insert_resource(EngineBridge { tx_cmd });
    world.init_resource::<Messages<EngineCmd>>();
    rx_cmd
}
