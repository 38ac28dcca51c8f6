//! Audio bridging systems.
//!
//! The audio thread lives outside this subsystem; these systems shuttle
//! messages between the ECS world and the channel pair in
//! [`AudioBridge`](crate::resources::audio::AudioBridge):
//! - [`forward_audio_cmds`] drains ECS [`AudioCmd`] messages to the thread.
//! - [`poll_audio_messages`] non-blockingly drains the thread's responses
//!   into the ECS [`Messages<AudioMessage>`] mailbox each frame.
//! - the `update_*` systems advance the ECS message queues so newly written
//!   messages become readable by subscribers.

use bevy_ecs::prelude::Messages;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Res, ResMut};

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;

/// Forward ECS AudioCmd messages to the audio thread via the bridge sender.
///
/// Send errors are ignored; they only occur while the audio thread is
/// shutting down.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Drain any pending responses from the audio thread into the ECS
/// [`Messages<AudioMessage>`] mailbox.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioCmd`].
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}
