use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use jugaad_chat::AppError;
use jugaad_chat::clipboard::{Clipboard, NoticePhase, NoticeSurface, Sleeper};

/// `navigator.clipboard`.
pub struct BrowserClipboard;

impl Clipboard for BrowserClipboard {
    async fn write_text(&self, text: &str) -> Result<(), AppError> {
        let window = web_sys::window().ok_or_else(|| AppError::clipboard("no window"))?;
        let promise = window.navigator().clipboard().write_text(text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e: JsValue| AppError::clipboard(e.as_string().unwrap_or_else(|| format!("{e:?}"))))
    }
}

pub struct TimerSleeper;

impl Sleeper for TimerSleeper {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

/// Drives the copy notification through a signal the view renders.
#[derive(Clone, Copy)]
pub struct NoticeSignal(pub RwSignal<Option<NoticePhase>>);

impl NoticeSurface for NoticeSignal {
    fn set_notice(&self, phase: Option<NoticePhase>) {
        self.0.set(phase);
    }
}
