use serde::de::DeserializeOwned;
use tracing::debug;

use jugaad_chat::models::{ChatRequest, ChatResponse, GreetingResponse};
use jugaad_chat::{AppError, ChatBackend};

use super::config::Settings;

/// [`ChatBackend`] over HTTP/JSON.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(settings: &Settings) -> Result<Self, AppError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::network(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, base_url: settings.api_base.clone() })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl ChatBackend for HttpBackend {
    async fn fetch_greeting(&self) -> Result<GreetingResponse, AppError> {
        let resp = self
            .client
            .get(self.url("/api/greeting"))
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;
        decode(resp).await
    }

    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        debug!("POST /api/chat ({} chars)", request.message.chars().count());
        let resp = self
            .client
            .post(self.url("/api/chat"))
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;
        decode(resp).await
    }
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, AppError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(AppError::Server { status: status.as_u16() });
    }
    resp.json::<T>().await.map_err(|e| AppError::decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answers exactly one HTTP request with `status` and `body`, returning
    /// the base URL and a handle resolving to the raw request.
    async fn serve_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                if request_complete(&raw) {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8_lossy(&raw).into_owned()
        });
        (format!("http://{addr}"), handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some((head, body)) = text.split_once("\r\n\r\n") else {
            return false;
        };
        let length = head
            .lines()
            .filter_map(|l| l.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, v)| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        body.len() >= length
    }

    fn backend(base: &str) -> HttpBackend {
        HttpBackend::new(&Settings {
            api_base: base.to_string(),
            request_timeout: Some(Duration::from_secs(5)),
            greet: true,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn greeting_is_fetched_with_get() {
        let (base, server) = serve_once("200 OK", r#"{"greeting":"Namaste!"}"#).await;

        let greeting = backend(&base).fetch_greeting().await.unwrap();

        assert_eq!(greeting.greeting.as_deref(), Some("Namaste!"));
        assert!(server.await.unwrap().starts_with("GET /api/greeting "));
    }

    #[tokio::test]
    async fn chat_posts_json_message() {
        let (base, server) = serve_once("200 OK", r#"{"response":"🏷️ CODE: SAVE20"}"#).await;

        let reply = backend(&base)
            .send_chat(&ChatRequest { message: "amazon".into() })
            .await
            .unwrap();

        assert_eq!(reply.response.as_deref(), Some("🏷️ CODE: SAVE20"));
        let raw = server.await.unwrap();
        assert!(raw.starts_with("POST /api/chat "));
        assert!(raw.to_ascii_lowercase().contains("content-type: application/json"));
        assert!(raw.ends_with(r#"{"message":"amazon"}"#));
    }

    #[tokio::test]
    async fn non_success_status_is_a_server_error() {
        let (base, _server) = serve_once("500 Internal Server Error", r#"{"error":"Internal server error"}"#).await;

        let err = backend(&base)
            .send_chat(&ChatRequest { message: "amazon".into() })
            .await
            .unwrap_err();

        assert_eq!(err, AppError::Server { status: 500 });
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let (base, _server) = serve_once("200 OK", "<html>oops</html>").await;

        let err = backend(&base).fetch_greeting().await.unwrap_err();

        assert!(matches!(err, AppError::Decode { .. }));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn unreachable_host_is_a_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let err = backend(&base).fetch_greeting().await.unwrap_err();

        assert!(matches!(err, AppError::Network { .. }));
    }
}
