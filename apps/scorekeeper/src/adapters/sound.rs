use tracing::info;

use crate::domain::game_transition::Cue;

/// Fire-and-forget audio feedback.
pub trait SoundCue: Send {
    fn play(&self, cue: Cue);
}

/// Terminal stand-in for audio: records each cue through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogCue;

impl SoundCue for LogCue {
    fn play(&self, cue: Cue) {
        info!(cue = cue.as_str(), "Sound cue");
    }
}

/// Sound switched off.
#[derive(Debug, Clone, Copy, Default)]
pub struct MutedCue;

impl SoundCue for MutedCue {
    fn play(&self, _cue: Cue) {}
}

/// Pick the collaborator for the configured sound toggle.
pub fn for_setting(enabled: bool) -> Box<dyn SoundCue> {
    if enabled {
        Box::new(LogCue)
    } else {
        Box::new(MutedCue)
    }
}
