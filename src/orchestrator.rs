use std::cell::{Cell, Ref, RefCell};

use tracing::{debug, error, warn};

use crate::backend::ChatBackend;
use crate::input::InputField;
use crate::models::{non_empty, ChatRequest};
use crate::renderer::{render_bot, render_user};
use crate::transcript::TranscriptView;

pub const GREETING_FALLBACK: &str = "Namaste! I'm JUGAAD, your personal shopping assistant. \
I'm here to help you save money with the best deals and coupons. \
What would you like to shop for today? 🎉";

pub const EMPTY_RESPONSE_FALLBACK: &str =
    "I'm sorry, I couldn't process your request. Please try again.";

pub const TRANSPORT_ERROR_FALLBACK: &str =
    "I'm sorry, there was an error processing your request. Please try again.";

/// Admission state. `Sending` covers exactly one request/response cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Sending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The message was rendered, sent, and its reply rendered.
    Sent,
    /// Nothing left after trimming.
    Empty,
    /// Another request was in flight; the message was discarded.
    DroppedBusy,
}

/// Owns the busy lock and sequences typing indicator, network call and
/// rendering for each request.
///
/// Every method takes `&self` so one orchestrator can be shared (`Rc`)
/// between concurrently scheduled event handlers. No `RefCell` borrow is
/// held across an `.await`.
///
/// The greeting and a chat request may overlap. The typing indicator stays
/// up while either is outstanding and always follows the newest entry.
pub struct Orchestrator<B, V> {
    backend: B,
    view: RefCell<V>,
    state: Cell<RequestState>,
    typing_holds: Cell<usize>,
}

impl<B: ChatBackend, V: TranscriptView> Orchestrator<B, V> {
    pub fn new(backend: B, view: V) -> Self {
        Self {
            backend,
            view: RefCell::new(view),
            state: Cell::new(RequestState::Idle),
            typing_holds: Cell::new(0),
        }
    }

    pub fn state(&self) -> RequestState {
        self.state.get()
    }

    pub fn is_busy(&self) -> bool {
        self.state.get() == RequestState::Sending
    }

    pub fn view(&self) -> Ref<'_, V> {
        self.view.borrow()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Renders the service greeting, or the fixed fallback when the service
    /// fails or sends none. Does not take the busy lock.
    pub async fn send_greeting_request(&self) {
        let pending = Pending::begin(self, false);

        let greeting = match self.backend.fetch_greeting().await {
            Ok(body) => non_empty(body.greeting).unwrap_or_else(|| {
                warn!("Greeting response had no greeting, using fallback");
                GREETING_FALLBACK.to_string()
            }),
            Err(e) => {
                error!("Error fetching greeting: {e}");
                GREETING_FALLBACK.to_string()
            }
        };

        pending.finish(&greeting);
    }

    /// Sends one user message and renders the reply.
    ///
    /// The user message is rendered and `input` cleared before the request is
    /// issued. While a request is in flight further calls are dropped, not
    /// queued. Whatever the outcome, the typing indicator is removed, the
    /// reply (or a fallback) rendered, and only then is the lock released.
    pub async fn submit<I: InputField + ?Sized>(&self, text: &str, input: &I) -> SubmitOutcome {
        let text = text.trim();
        if text.is_empty() {
            return SubmitOutcome::Empty;
        }
        if self.is_busy() {
            debug!("Request in flight, dropping message");
            return SubmitOutcome::DroppedBusy;
        }

        render_user(&mut *self.view.borrow_mut(), text);
        input.clear();
        let pending = Pending::begin(self, true);

        let request = ChatRequest { message: text.to_string() };
        let reply = match self.backend.send_chat(&request).await {
            Ok(body) => non_empty(body.response).unwrap_or_else(|| {
                warn!("Chat response had no response field");
                EMPTY_RESPONSE_FALLBACK.to_string()
            }),
            Err(e) => {
                error!("Error sending message: {e}");
                TRANSPORT_ERROR_FALLBACK.to_string()
            }
        };

        pending.finish(&reply);
        SubmitOutcome::Sent
    }

    fn hold_typing(&self) {
        let mut view = self.view.borrow_mut();
        if self.typing_holds.get() > 0 {
            // Move the live placeholder below the entry just rendered.
            view.hide_typing();
        }
        view.show_typing();
        self.typing_holds.set(self.typing_holds.get() + 1);
    }

    fn release_typing(&self, reply: Option<&str>) {
        let remaining = self.typing_holds.get().saturating_sub(1);
        self.typing_holds.set(remaining);
        let Ok(mut view) = self.view.try_borrow_mut() else {
            return;
        };
        view.hide_typing();
        if let Some(reply) = reply {
            render_bot(&mut *view, reply);
        }
        if remaining > 0 {
            view.show_typing();
        }
    }
}

/// One outstanding request. Dropping it (normally, or because the request
/// future was dropped) gives back its typing hold and, for chat requests,
/// returns the lock to `Idle`.
struct Pending<'a, B: ChatBackend, V: TranscriptView> {
    orchestrator: &'a Orchestrator<B, V>,
    locks: bool,
    settled: bool,
}

impl<'a, B: ChatBackend, V: TranscriptView> Pending<'a, B, V> {
    fn begin(orchestrator: &'a Orchestrator<B, V>, locks: bool) -> Self {
        if locks {
            orchestrator.state.set(RequestState::Sending);
        }
        orchestrator.hold_typing();
        Self { orchestrator, locks, settled: false }
    }

    fn finish(mut self, reply: &str) {
        self.orchestrator.release_typing(Some(reply));
        self.settled = true;
    }
}

impl<B: ChatBackend, V: TranscriptView> Drop for Pending<'_, B, V> {
    fn drop(&mut self) {
        if !self.settled {
            self.orchestrator.release_typing(None);
        }
        if self.locks {
            self.orchestrator.state.set(RequestState::Idle);
        }
    }
}
