//! Feedback dispatcher - fire-and-forget cues on state transitions
//!
//! The reducer emits [`SoundCue`] values; a sink turns them into whatever the
//! platform offers. Sink failures never propagate back into game state.

use std::io::Write;

use crate::types::SoundCue;

pub trait FeedbackSink {
    fn play(&mut self, cue: SoundCue);
}

/// Rings the terminal bell on failures and level-ups. Successful matches stay
/// silent; the visual feedback carries them.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl FeedbackSink for TerminalBell {
    fn play(&mut self, cue: SoundCue) {
        let ring = matches!(cue, SoundCue::MatchFail | SoundCue::LevelUp);
        if ring {
            // Best effort; a broken pipe here is not a game error.
            let mut out = std::io::stdout();
            let _ = out.write_all(b"\x07");
            let _ = out.flush();
        }
    }
}

/// Discards every cue (tests, headless runs)
#[derive(Debug, Default)]
pub struct NullFeedback;

impl FeedbackSink for NullFeedback {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Records cues for assertions
#[derive(Debug, Default)]
pub struct RecordingFeedback {
    pub cues: Vec<SoundCue>,
}

impl FeedbackSink for RecordingFeedback {
    fn play(&mut self, cue: SoundCue) {
        self.cues.push(cue);
    }
}
