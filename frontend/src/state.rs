use std::rc::Rc;

use leptos::html::Textarea;
use leptos::prelude::*;
use leptos::task::spawn_local;

use jugaad_chat::clipboard::{NoticePhase, copy_coupon_code};
use jugaad_chat::{
    CouponCard, InputController, InputEvent, InputField, Message, Orchestrator, Transcript,
    TranscriptView,
};

use crate::api::GlooBackend;
use crate::clipboard::{BrowserClipboard, NoticeSignal, TimerSleeper};

/// Element id of the scrolling message list.
pub const MESSAGES_ID: &str = "chat-messages";

type Controller = InputController<GlooBackend, SignalTranscript, SignalInput>;

/// [`TranscriptView`] that writes into a signal the message list renders.
pub struct SignalTranscript {
    transcript: RwSignal<Transcript>,
}

impl TranscriptView for SignalTranscript {
    fn append_user(&mut self, message: Message) {
        self.transcript.update(|t| t.append_user(message));
    }

    fn append_bot(&mut self, message: Message, card: Option<CouponCard>) {
        self.transcript.update(|t| t.append_bot(message, card));
    }

    fn show_typing(&mut self) {
        self.transcript.update(|t| t.show_typing());
    }

    fn hide_typing(&mut self) {
        self.transcript.update(|t| t.hide_typing());
    }

    fn scroll_to_latest(&mut self) {
        // After the list has re-rendered.
        request_animation_frame(|| {
            if let Some(list) = document().get_element_by_id(MESSAGES_ID) {
                list.set_scroll_top(list.scroll_height());
            }
        });
    }
}

/// The message textarea.
pub struct SignalInput {
    value: RwSignal<String>,
    node: NodeRef<Textarea>,
}

impl InputField for SignalInput {
    fn value(&self) -> String {
        self.value.get_untracked()
    }

    fn set_value(&self, value: &str) {
        self.value.set(value.to_string());
    }

    fn focus(&self) {
        if let Some(el) = self.node.get_untracked() {
            if let Err(e) = el.focus() {
                log::warn!("Failed to focus input: {e:?}");
            }
        }
    }
}

/// Shared widget state, provided via Leptos context.
#[derive(Clone, Copy)]
pub struct ChatState {
    pub transcript: RwSignal<Transcript>,
    pub input: RwSignal<String>,
    pub input_ref: NodeRef<Textarea>,
    pub notice: RwSignal<Option<NoticePhase>>,
    controller: StoredValue<Rc<Controller>, LocalStorage>,
}

impl ChatState {
    /// Create a new `ChatState` and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let transcript = RwSignal::new(Transcript::new());
        let input = RwSignal::new(String::new());
        let input_ref = NodeRef::<Textarea>::new();
        let notice = RwSignal::new(None);

        let orchestrator = Rc::new(Orchestrator::new(GlooBackend, SignalTranscript { transcript }));
        let controller = InputController::new(orchestrator, SignalInput { value: input, node: input_ref });

        let state = Self {
            transcript,
            input,
            input_ref,
            notice,
            controller: StoredValue::new_local(Rc::new(controller)),
        };

        provide_context(state);
        state
    }

    /// Request the greeting; called once when the widget mounts.
    pub fn greet(&self) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            controller.orchestrator().send_greeting_request().await;
        });
    }

    pub fn dispatch(&self, event: InputEvent) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            controller.handle(event).await;
        });
    }

    pub fn copy_code(&self, code: String) {
        let surface = NoticeSignal(self.notice);
        spawn_local(async move {
            // Failures are already logged by the copy flow.
            let _ = copy_coupon_code(&BrowserClipboard, &TimerSleeper, &surface, &code).await;
        });
    }
}
