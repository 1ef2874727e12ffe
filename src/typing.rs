//! The transient "assistant is typing" placeholder.
//!
//! At most one placeholder is live at a time. [`show`] never inserts a second
//! one and [`remove`] tolerates an already hidden indicator, so an ordering
//! slip in a caller cannot leave a duplicate or a dangling placeholder.

use tracing::debug;

use crate::transcript::{EntryKind, Transcript};

/// Identifies the placeholder entry; also its element id in the web widget.
pub const TYPING_MARKER: &str = "typing-indicator";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingState {
    Hidden,
    Shown,
}

pub fn state(transcript: &Transcript) -> TypingState {
    match transcript.position_of_marker(TYPING_MARKER) {
        Some(_) => TypingState::Shown,
        None => TypingState::Hidden,
    }
}

/// Appends the placeholder. Returns `false` when one was already live.
pub fn show(transcript: &mut Transcript) -> bool {
    if state(transcript) == TypingState::Shown {
        debug!("typing indicator already shown");
        return false;
    }
    transcript.push(EntryKind::Typing { marker: TYPING_MARKER });
    true
}

/// Deletes the placeholder if present. Returns whether anything was removed.
pub fn remove(transcript: &mut Transcript) -> bool {
    match transcript.position_of_marker(TYPING_MARKER) {
        Some(index) => {
            transcript.remove_at(index);
            true
        }
        None => false,
    }
}
