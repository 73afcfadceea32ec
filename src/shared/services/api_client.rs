use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::models::{
    ChatMessage, ChatRequest, ChatResponse, CreateSessionRequest, HealthStatus,
    SendMessageRequest, SendMessageResponse, Session, UpdateSessionRequest,
};
use crate::shared::constants::REQUEST_TIMEOUT_SECS;
use crate::shared::errors::ApiError;

/// Centralized HTTP access to the Oracle backend.
///
/// One method per endpoint; 2xx bodies are deserialized, everything else is
/// normalized into [`ApiError`]. No retries happen here - retrying is the
/// caller's responsibility (see the error handler hook).
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            #[cfg(not(target_arch = "wasm32"))]
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // Liveness probe used to gate input availability.
    pub async fn check_health(&self) -> Result<HealthStatus, ApiError> {
        self.get_json("/health").await
    }

    // Legacy single-turn chat: `{message, history}` -> `{response}`.
    pub async fn send_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        self.post_json("/api/v1/chat", request).await
    }

    pub async fn get_sessions(&self) -> Result<Vec<Session>, ApiError> {
        self.get_json("/api/v1/sessions/").await
    }

    pub async fn create_session(
        &self,
        request: &CreateSessionRequest,
    ) -> Result<Session, ApiError> {
        self.post_json("/api/v1/sessions/", request).await
    }

    pub async fn get_session(&self, session_id: &str) -> Result<Session, ApiError> {
        self.get_json(&format!("/api/v1/sessions/{session_id}")).await
    }

    pub async fn update_session(
        &self,
        session_id: &str,
        request: &UpdateSessionRequest,
    ) -> Result<Session, ApiError> {
        let payload = to_body(request)?;
        let raw = self
            .execute("PUT", &format!("/api/v1/sessions/{session_id}"), Some(payload))
            .await?;
        decode(raw)
    }

    pub async fn delete_session(&self, session_id: &str) -> Result<(), ApiError> {
        let (status, body) = self
            .execute("DELETE", &format!("/api/v1/sessions/{session_id}"), None)
            .await?;
        if !(200..300).contains(&status) {
            return Err(ApiError::Http {
                status,
                detail: extract_detail(&body),
            });
        }
        Ok(())
    }

    pub async fn send_session_message(
        &self,
        session_id: &str,
        request: &SendMessageRequest,
    ) -> Result<SendMessageResponse, ApiError> {
        self.post_json(&format!("/api/v1/sessions/{session_id}/chat"), request)
            .await
    }

    pub async fn get_session_messages(
        &self,
        session_id: &str,
    ) -> Result<Vec<ChatMessage>, ApiError> {
        self.get_json(&format!("/api/v1/sessions/{session_id}/messages"))
            .await
    }

    // Generic GET request
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let raw = self.execute("GET", endpoint, None).await?;
        decode(raw)
    }

    // Generic POST request
    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let payload = to_body(body)?;
        let raw = self.execute("POST", endpoint, Some(payload)).await?;
        decode(raw)
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Issue one request and return `(status, body_text)`. Transport
    /// failures map to `Network`, the client-side deadline to `Timeout`.
    #[cfg(not(target_arch = "wasm32"))]
    async fn execute(
        &self,
        method: &str,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> Result<(u16, String), ApiError> {
        use std::time::Duration;

        let url = self.url(endpoint);
        let mut request = match method {
            "GET" => self.http.get(&url),
            "POST" => self.http.post(&url),
            "PUT" => self.http.put(&url),
            "DELETE" => self.http.delete(&url),
            other => return Err(ApiError::Network(format!("unsupported method: {other}"))),
        }
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS));

        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|err| {
            if err.is_timeout() {
                ApiError::Timeout(REQUEST_TIMEOUT_SECS)
            } else {
                ApiError::Network(err.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Ok((status, text))
    }

    #[cfg(target_arch = "wasm32")]
    async fn execute(
        &self,
        method: &str,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> Result<(u16, String), ApiError> {
        use futures::future::{select, Either};
        use gloo_net::http::Request;

        let url = self.url(endpoint);
        let send = async {
            let builder = match method {
                "GET" => Request::get(&url),
                "POST" => Request::post(&url),
                "PUT" => Request::put(&url),
                "DELETE" => Request::delete(&url),
                other => return Err(ApiError::Network(format!("unsupported method: {other}"))),
            };

            let result = match body {
                Some(body) => {
                    builder
                        .json(&body)
                        .map_err(|err| ApiError::Network(err.to_string()))?
                        .send()
                        .await
                }
                None => builder.send().await,
            };

            let response = result.map_err(|err| ApiError::Network(err.to_string()))?;
            let status = response.status();
            let text = response
                .text()
                .await
                .map_err(|err| ApiError::Network(err.to_string()))?;
            Ok((status, text))
        };

        // gloo-net has no request deadline of its own, so race the fetch
        // against a timer.
        let deadline =
            gloo_timers::future::TimeoutFuture::new((REQUEST_TIMEOUT_SECS * 1000) as u32);
        futures::pin_mut!(send);
        match select(send, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(ApiError::Timeout(REQUEST_TIMEOUT_SECS)),
        }
    }
}

fn to_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body)
        .map_err(|err| ApiError::Validation(format!("failed to serialize request: {err}")))
}

fn decode<T: DeserializeOwned>((status, body): (u16, String)) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Http {
            status,
            detail: extract_detail(&body),
        });
    }
    serde_json::from_str(&body)
        .map_err(|err| ApiError::Network(format!("invalid response body: {err}")))
}

/// Pull a human-readable detail out of an error body. The backend wraps
/// errors as `{"detail": ...}`; fall back to the raw text, truncated.
fn extract_detail(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "message", "error"] {
            if let Some(detail) = value.get(key).and_then(|v| v.as_str()) {
                return detail.to_string();
            }
        }
    }
    body.chars().take(200).collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining_normalizes_slashes() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.url("/health"), "http://localhost:8000/health");
        assert_eq!(
            client.url("api/v1/sessions/"),
            "http://localhost:8000/api/v1/sessions/"
        );
    }

    #[test]
    fn test_decode_maps_non_2xx_to_http_error() {
        let result: Result<HealthStatus, ApiError> =
            decode((404, r#"{"detail": "session not found"}"#.to_string()));
        assert_eq!(
            result.unwrap_err(),
            ApiError::Http {
                status: 404,
                detail: "session not found".to_string()
            }
        );
    }

    #[test]
    fn test_decode_parses_2xx_body() {
        let result: Result<HealthStatus, ApiError> =
            decode((200, r#"{"status": "ok"}"#.to_string()));
        assert_eq!(result.unwrap().status, "ok");
    }

    #[test]
    fn test_extract_detail_falls_back_to_raw_body() {
        assert_eq!(extract_detail("Bad Gateway"), "Bad Gateway");
        assert_eq!(extract_detail(r#"{"detail": "rate limited"}"#), "rate limited");
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_a_network_error() {
        // Port 9 (discard) is not listening in the test environment.
        let client = ApiClient::new("http://127.0.0.1:9");
        let err = client.check_health().await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)), "got {err:?}");
    }
}
