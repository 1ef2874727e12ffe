use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use jugaad_chat::models::{ChatRequest, ChatResponse, GreetingResponse};
use jugaad_chat::{AppError, ChatBackend};

/// Base URL of the assistant service. Empty means same origin as the page.
const API_BASE: &str = match option_env!("JUGAAD_API_BASE") {
    Some(base) => base,
    None => "",
};

/// [`ChatBackend`] over the browser's `fetch`.
#[derive(Clone, Copy, Default)]
pub struct GlooBackend;

impl ChatBackend for GlooBackend {
    async fn fetch_greeting(&self) -> Result<GreetingResponse, AppError> {
        let resp = Request::get(&format!("{API_BASE}/api/greeting"))
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;
        decode(resp).await
    }

    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let resp = Request::post(&format!("{API_BASE}/api/chat"))
            .json(request)
            .map_err(|e| AppError::decode(format!("Serialize error: {e}")))?
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;
        decode(resp).await
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, AppError> {
    if !resp.ok() {
        return Err(AppError::Server { status: resp.status() });
    }
    resp.json::<T>().await.map_err(|e| AppError::decode(e.to_string()))
}
