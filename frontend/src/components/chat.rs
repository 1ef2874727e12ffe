use leptos::ev;
use leptos::prelude::*;

use jugaad_chat::clipboard::{COPY_NOTICE_TEXT, NoticePhase};
use jugaad_chat::input::SUGGESTIONS;
use jugaad_chat::{CouponCard, CouponLine, Entry, EntryKind, InputEvent, Role};

use crate::state::{ChatState, MESSAGES_ID};

/// Main chat area: transcript, input form, suggestion chips.
#[component]
pub fn ChatArea() -> impl IntoView {
    let state = expect_context::<ChatState>();

    view! {
        <main class="chat-container">
            <div class="chat-messages" id=MESSAGES_ID>
                <For
                    each=move || state.transcript.with(|t| t.entries().to_vec())
                    key=|entry| entry.id
                    let:entry
                >
                    <EntryView entry=entry />
                </For>
            </div>

            <ChatInput />
            <CopyNotice />
        </main>
    }
}

#[component]
fn EntryView(entry: Entry) -> impl IntoView {
    match entry.kind {
        EntryKind::Typing { marker } => view! {
            <div class="message bot-message" id=marker>
                <div class="typing-indicator">
                    <span></span>
                    <span></span>
                    <span></span>
                </div>
            </div>
        }
        .into_any(),
        EntryKind::Message { message, card } => {
            let css_class = match message.role {
                Role::User => "message user-message",
                Role::Bot => "message bot-message",
            };
            let body = match card {
                Some(card) => view! { <CouponCardView card=card /> }.into_any(),
                None => view! { <p>{message.raw_text}</p> }.into_any(),
            };
            view! {
                <div class=css_class>
                    <div class="message-content">{body}</div>
                </div>
            }
            .into_any()
        }
    }
}

/// One fragment per payload line; codes copy themselves on click.
#[component]
fn CouponCardView(card: CouponCard) -> impl IntoView {
    let state = expect_context::<ChatState>();

    card.lines
        .into_iter()
        .map(|line| match line {
            CouponLine::Code(code) => {
                let copied = code.clone();
                view! {
                    <div
                        class="coupon-code"
                        title="Click to copy"
                        on:click=move |_| state.copy_code(copied.clone())
                    >
                        {code}
                    </div>
                }
                .into_any()
            }
            CouponLine::Field { icon, label, value } => view! {
                <p>
                    <i class=format!("fas fa-{}", icon.name())></i>
                    " "
                    <strong>{format!("{label}:")}</strong>
                    " "
                    {value}
                </p>
            }
            .into_any(),
            CouponLine::Paragraph(text) => view! { <p>{text}</p> }.into_any(),
        })
        .collect_view()
}

/// Message form: Enter sends, Shift+Enter inserts a newline.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<ChatState>();

    let on_keydown = move |ev: ev::KeyboardEvent| {
        let event = InputEvent::KeyPress { key: ev.key(), shift: ev.shift_key() };
        if event.prevents_default() {
            ev.prevent_default();
            state.dispatch(event);
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        state.dispatch(InputEvent::FormSubmit);
    };

    view! {
        <form class="chat-input" id="chat-form" on:submit=on_submit>
            <textarea
                id="user-input"
                rows="1"
                placeholder="Ask me for deals… (Enter to send, Shift+Enter for newline)"
                node_ref=state.input_ref
                prop:value=move || state.input.get()
                on:input=move |ev| state.input.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button type="submit" id="send-button" class="send-btn">
                <i class="fas fa-paper-plane"></i>
            </button>
        </form>
        <div class="suggestion-chips">
            {SUGGESTIONS
                .iter()
                .map(|text| {
                    view! {
                        <button
                            type="button"
                            class="chip"
                            on:click=move |_| state.dispatch(InputEvent::Suggestion(text.to_string()))
                        >
                            {*text}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Transient "copied" toast. The element stays mounted for the whole
/// notice so the CSS transition on `show` can run both ways.
#[component]
fn CopyNotice() -> impl IntoView {
    let state = expect_context::<ChatState>();

    view! {
        <Show when=move || notice_mounted(state.notice.get())>
            <div
                class="copy-notification"
                class:show=move || notice_visible(state.notice.get())
            >
                {COPY_NOTICE_TEXT}
            </div>
        </Show>
    }
}

fn notice_mounted(phase: Option<NoticePhase>) -> bool {
    phase.is_some()
}

fn notice_visible(phase: Option<NoticePhase>) -> bool {
    phase == Some(NoticePhase::Shown)
}
