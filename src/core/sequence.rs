//! Scripted transition sequence
//!
//! Following the Athena link plays a short timeline before leaving the page:
//! the overlay lights up immediately, three sound cues follow, and the page
//! navigates at the end. Skipping collapses the timeline to its final
//! navigation. Whatever happens, navigation is produced at most once.

use std::time::Duration;

/// Sound files for the three cues, in order
pub const CUE_SOUNDS: [&str; 3] = [
    "/audio/athena-chime.mp3",
    "/audio/athena-wings.mp3",
    "/audio/athena-gate.mp3",
];

/// One event of the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Activate the visual overlay
    Overlay,
    /// Play sound cue `n` (0-based)
    Cue(usize),
    /// Leave the page
    Navigate,
}

impl Step {
    pub fn is_sound(&self) -> bool {
        matches!(self, Step::Cue(_))
    }
}

/// The timeline, as offsets from arming
pub static TIMELINE: [(Duration, Step); 5] = [
    (Duration::from_millis(0), Step::Overlay),
    (Duration::from_millis(500), Step::Cue(0)),
    (Duration::from_millis(1000), Step::Cue(1)),
    (Duration::from_millis(1700), Step::Cue(2)),
    (Duration::from_millis(3500), Step::Navigate),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceState {
    /// Not started
    Idle,
    /// Started, some steps still pending
    Armed,
    /// Ran to completion
    Fired,
    /// Skipped; pending steps dropped, navigation already issued
    Cancelled,
}

/// Timeline state for one page view
#[derive(Debug, Clone)]
pub struct TransitionSequence {
    state: SequenceState,
    next: usize,
}

impl Default for TransitionSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionSequence {
    pub fn new() -> Self {
        Self {
            state: SequenceState::Idle,
            next: 0,
        }
    }

    pub fn state(&self) -> SequenceState {
        self.state
    }

    /// Started and still holding the pending navigation
    pub fn is_armed(&self) -> bool {
        self.state == SequenceState::Armed
    }

    /// Navigation has been issued, by the timeline or by a skip
    pub fn is_finished(&self) -> bool {
        matches!(self.state, SequenceState::Fired | SequenceState::Cancelled)
    }

    /// Back to idle, for a page restored from the back/forward cache
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Steps not yet fired, with their offsets
    pub fn pending(&self) -> &'static [(Duration, Step)] {
        match self.state {
            SequenceState::Idle | SequenceState::Armed => &TIMELINE[self.next..],
            SequenceState::Fired | SequenceState::Cancelled => &[],
        }
    }

    /// Start the timeline. Returns the steps due immediately.
    /// Arming twice does nothing.
    pub fn arm(&mut self) -> Vec<Step> {
        if self.state != SequenceState::Idle {
            return Vec::new();
        }
        self.state = SequenceState::Armed;
        self.advance(Duration::ZERO)
    }

    /// Fire every pending step whose offset is at or before `elapsed`
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Step> {
        if self.state != SequenceState::Armed {
            return Vec::new();
        }

        let mut due = Vec::new();
        while let Some(&(offset, step)) = TIMELINE.get(self.next) {
            if offset > elapsed {
                break;
            }
            self.next += 1;
            due.push(step);
        }

        if self.next == TIMELINE.len() {
            self.state = SequenceState::Fired;
        }

        due
    }

    /// Drop all pending steps and jump to the end.
    ///
    /// Returns `Some(Step::Navigate)` the first time only.
    pub fn skip(&mut self) -> Option<Step> {
        if !self.is_armed() {
            return None;
        }
        self.state = SequenceState::Cancelled;
        Some(Step::Navigate)
    }
}

/// `localStorage` key of the mute flag
pub const MUTE_STORAGE_KEY: &str = "athena-muted";

/// Persisted sound preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MutePreference {
    pub muted: bool,
}

impl MutePreference {
    /// Parse the stored value; anything but `"true"` means sound on
    pub fn from_stored(value: Option<&str>) -> Self {
        Self {
            muted: value == Some("true"),
        }
    }

    pub fn as_stored(&self) -> &'static str {
        if self.muted { "true" } else { "false" }
    }

    pub fn toggled(self) -> Self {
        Self { muted: !self.muted }
    }

    /// Visual steps always run; sound steps only when unmuted
    pub fn allows(&self, step: Step) -> bool {
        !(self.muted && step.is_sound())
    }
}
