//! REST API Client
//!
//! One method per backend resource. Every authenticated request reads the
//! bearer token from the session store and fails fast without one; non-2xx
//! responses are normalized into [`ApiError::Server`] carrying the parsed
//! server message when the body has one.

mod auth;
mod boards;
mod profile;

pub use auth::CheckEmailResponse;
pub use boards::CardDraft;
pub use profile::PhotoUpload;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};
use crate::session::SessionStore;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8080";

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    session: SessionStore,
}

impl ApiClient {
    pub fn new(session: SessionStore) -> Self {
        Self::with_server_url(DEFAULT_SERVER_URL, session)
    }

    pub fn with_server_url(server_url: &str, session: SessionStore) -> Self {
        ApiClient {
            base_url: format!("{}/api", server_url.trim_end_matches('/')),
            http: reqwest::Client::new(),
            session,
        }
    }

    pub fn session(&self) -> SessionStore {
        self.session
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// Builder for endpoints that run before authentication.
    fn public_request(&self, method: Method, endpoint: &str) -> RequestBuilder {
        self.http.request(method, self.url(endpoint))
    }

    /// Builder carrying the bearer token; fails when the session has none.
    fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let token = self.session.token().ok_or(ApiError::MissingToken)?;
        Ok(self.http.request(method, self.url(endpoint)).bearer_auth(token))
    }

    /// Map a non-2xx response to [`ApiError::Server`], preferring the JSON
    /// error body's `message` over the generic per-operation `fallback`.
    async fn expect_success(response: Response, fallback: &str) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("message")
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| fallback.to_string());
        Err(ApiError::Server { status: status.as_u16(), message })
    }

    async fn json_body<T: DeserializeOwned>(response: Response) -> Result<T> {
        response
            .json()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_path_is_api() {
        let client = ApiClient::with_server_url("http://localhost:8080/", SessionStore::default());
        assert_eq!(client.url("boards"), "http://localhost:8080/api/boards");
        assert_eq!(
            client.url("boards/3/columns/9/reorder"),
            "http://localhost:8080/api/boards/3/columns/9/reorder"
        );
    }
}
