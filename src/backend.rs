use crate::errors::AppError;
use crate::models::{ChatRequest, ChatResponse, GreetingResponse};

/// The remote assistant service.
///
/// Futures are not required to be `Send`: the pipeline runs on a single
/// cooperative thread (the browser event loop, or a tokio `LocalSet`).
#[allow(async_fn_in_trait)]
pub trait ChatBackend {
    /// `GET /api/greeting`
    async fn fetch_greeting(&self) -> Result<GreetingResponse, AppError>;

    /// `POST /api/chat`
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, AppError>;
}
