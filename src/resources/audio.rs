//! Channel bridge to the external audio thread.
//!
//! The audio device and the thread that owns it are outside this subsystem.
//! What lives here is the pair of lock-free channels connecting the ECS world
//! to that thread: commands flow out through [`AudioBridge`], responses flow
//! back in and are drained into the ECS message queue each frame by
//! [`poll_audio_messages`](crate::systems::audio::poll_audio_messages).

use bevy_ecs::prelude::Resource;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::events::audio::{AudioCmd, AudioMessage};

/// ECS-side endpoints of the audio channel pair.
#[derive(Resource)]
pub struct AudioBridge {
    /// Commands toward the audio thread.
    pub tx_cmd: Sender<AudioCmd>,
    /// Responses from the audio thread.
    pub rx_msg: Receiver<AudioMessage>,
}

/// Audio-thread-side endpoints, handed to the external thread at startup.
pub struct AudioHost {
    pub rx_cmd: Receiver<AudioCmd>,
    pub tx_msg: Sender<AudioMessage>,
}

/// Create the connected channel pair.
///
/// Insert the [`AudioBridge`] as a resource and move the [`AudioHost`] into
/// the audio thread.
pub fn create_audio_bridge() -> (AudioBridge, AudioHost) {
    let (tx_cmd, rx_cmd) = unbounded();
    let (tx_msg, rx_msg) = unbounded();
    (
        AudioBridge { tx_cmd, rx_msg },
        AudioHost { rx_cmd, tx_msg },
    )
}
