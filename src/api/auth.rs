//! Authentication endpoints.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::error::{ApiError, Result};
use crate::models::AuthResponse;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    confirm_password: &'a str,
}

#[derive(Serialize)]
struct CheckEmailRequest<'a> {
    email: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct CheckEmailResponse {
    #[serde(default)]
    pub exists: bool,
}

/// Rejected credentials come back as 4xx; keep them distinct from other
/// server failures so forms can phrase them.
fn as_auth_error(err: ApiError) -> ApiError {
    match err {
        ApiError::Server { status, message } if status == 400 || status == 401 || status == 403 => {
            ApiError::Auth(message)
        }
        other => other,
    }
}

impl ApiClient {
    /// Authenticate and persist the token plus denormalized user snapshot.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let response = self
            .public_request(Method::POST, "auth/login")
            .json(&LoginRequest { email, password })
            .send()
            .await?;
        let response = Self::expect_success(response, "Erro no login")
            .await
            .map_err(as_auth_error)?;
        let auth: AuthResponse = Self::json_body(response).await?;
        self.session().store_auth(&auth.token, &auth.user());
        Ok(auth)
    }

    /// Create an account; the backend logs the user straight in.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<AuthResponse> {
        let response = self
            .public_request(Method::POST, "auth/register")
            .json(&RegisterRequest { name, email, password, confirm_password })
            .send()
            .await?;
        let response = Self::expect_success(response, "Erro no cadastro")
            .await
            .map_err(as_auth_error)?;
        let auth: AuthResponse = Self::json_body(response).await?;
        self.session().store_auth(&auth.token, &auth.user());
        Ok(auth)
    }

    /// Pre-registration check for an already-used email.
    pub async fn check_email(&self, email: &str) -> Result<CheckEmailResponse> {
        let response = self
            .public_request(Method::POST, "auth/check-email")
            .json(&CheckEmailRequest { email })
            .send()
            .await?;
        let response = Self::expect_success(response, "Erro ao verificar email").await?;
        Self::json_body(response).await
    }
}
