//! Audio commands and responses.
//!
//! The subsystem never touches the sound device. Sound effect requests are
//! written as [`AudioCmd`] messages, forwarded over the
//! [`AudioBridge`](crate::resources::audio::AudioBridge) to the external
//! audio thread, which answers with [`AudioMessage`]s.

use bevy_ecs::message::Message;

/// Sound effects known to the battle subsystem, by type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SfxType {
    /// Spawn-in swoosh played when an entity starts its reveal.
    Appear,
    /// Generic damage feedback.
    Hurt,
}

/// Commands sent *to* the audio thread.
#[derive(Message, Debug, Clone)]
pub enum AudioCmd {
    PlayFx { fx: SfxType },
    StopAllFx,
    Shutdown,
}

/// Events sent *back* from the audio thread.
#[derive(Message, Debug, Clone)]
pub enum AudioMessage {
    FxStarted { fx: SfxType },
    FxFinished { fx: SfxType },
    FxFailed { fx: SfxType, error: String },
}
