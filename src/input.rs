use std::rc::Rc;

use crate::backend::ChatBackend;
use crate::orchestrator::{Orchestrator, SubmitOutcome};
use crate::transcript::TranscriptView;

/// Texts of the suggestion chips offered under the input box.
pub const SUGGESTIONS: &[&str] = &[
    "Show me Amazon deals",
    "Food delivery coupons on Zomato",
    "Discounts on Puma shoes",
    "Best electronics offers today",
];

/// The text box the user types into. Methods take `&self`: hosts back it
/// with a reactive signal or a `RefCell`.
pub trait InputField {
    fn value(&self) -> String;

    fn set_value(&self, value: &str);

    fn clear(&self) {
        self.set_value("");
    }

    fn focus(&self) {}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    FormSubmit,
    KeyPress { key: String, shift: bool },
    /// A suggestion chip was clicked; carries the chip's text.
    Suggestion(String),
}

impl InputEvent {
    /// Whether the host must suppress the platform's default action
    /// (form navigation, newline insertion) before handling the event.
    pub fn prevents_default(&self) -> bool {
        match self {
            InputEvent::FormSubmit => true,
            InputEvent::KeyPress { key, shift } => key_action(key, *shift) == KeyAction::Submit,
            InputEvent::Suggestion(_) => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Submit,
    /// Let the key through (Shift+Enter inserts a newline).
    PassThrough,
}

pub fn key_action(key: &str, shift: bool) -> KeyAction {
    if key == "Enter" && !shift {
        KeyAction::Submit
    } else {
        KeyAction::PassThrough
    }
}

/// Routes input events to the orchestrator. Only reads and writes the input
/// field; the transcript and the busy lock belong to the orchestrator.
pub struct InputController<B, V, I> {
    orchestrator: Rc<Orchestrator<B, V>>,
    input: I,
}

impl<B: ChatBackend, V: TranscriptView, I: InputField> InputController<B, V, I> {
    pub fn new(orchestrator: Rc<Orchestrator<B, V>>, input: I) -> Self {
        Self { orchestrator, input }
    }

    pub fn orchestrator(&self) -> &Rc<Orchestrator<B, V>> {
        &self.orchestrator
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    /// Returns the submit outcome for events that submit, `None` otherwise.
    pub async fn handle(&self, event: InputEvent) -> Option<SubmitOutcome> {
        match event {
            InputEvent::FormSubmit => Some(self.submit_current().await),
            InputEvent::KeyPress { key, shift } => match key_action(&key, shift) {
                KeyAction::Submit => Some(self.submit_current().await),
                KeyAction::PassThrough => None,
            },
            InputEvent::Suggestion(text) => {
                self.input.set_value(&text);
                self.input.focus();
                None
            }
        }
    }

    async fn submit_current(&self) -> SubmitOutcome {
        let text = self.input.value();
        self.orchestrator.submit(&text, &self.input).await
    }
}
