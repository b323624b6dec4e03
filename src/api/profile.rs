//! Profile and account endpoints.
//!
//! Successful profile/photo mutations also patch the persisted user
//! snapshot so the session store stays consistent without a reload.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::ApiClient;
use crate::error::{ApiError, Result};
use crate::models::User;

#[derive(Serialize)]
struct UpdateProfileRequest<'a> {
    name: &'a str,
}

#[derive(Deserialize)]
struct UpdateProfileResponse {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdatePasswordRequest<'a> {
    current_password: &'a str,
    new_password: &'a str,
}

/// Photo payload sent as JSON: a data-URL plus file metadata.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoUpload {
    pub photo: String,
    pub filename: String,
    pub content_type: String,
    pub size: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadPhotoResponse {
    photo_url: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeleteConfirmationResponse {
    confirmation_message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteAccountRequest<'a> {
    confirmation_message: &'a str,
}

impl ApiClient {
    /// Fresh profile from the server, falling back to the persisted
    /// snapshot (or, lacking one, the token's claims) when the server is
    /// unreachable. Fails only with neither token nor cached data.
    pub async fn current_user(&self) -> Result<User> {
        if !self.session().is_authenticated() {
            return Err(ApiError::MissingToken);
        }
        match self.fetch_profile().await {
            Ok(user) => {
                self.session().store_user(&user);
                Ok(user)
            }
            Err(err) => {
                web_sys::console::warn_1(
                    &format!(
                        "Não foi possível obter dados do servidor, usando dados locais: {err}"
                    )
                    .into(),
                );
                self.session()
                    .user()
                    .or_else(|| self.session().user_from_token())
                    .ok_or(err)
            }
        }
    }

    async fn fetch_profile(&self) -> Result<User> {
        let response = self.request(Method::GET, "users/profile")?.send().await?;
        let response = Self::expect_success(response, "Erro ao obter dados do servidor").await?;
        Self::json_body(response).await
    }

    /// Rename the account; keeps the snapshot's name in sync.
    pub async fn update_profile(&self, name: &str) -> Result<()> {
        let response = self
            .request(Method::PUT, "auth/update-profile")?
            .json(&UpdateProfileRequest { name })
            .send()
            .await?;
        let response = Self::expect_success(response, "Erro ao atualizar perfil").await?;
        let body: UpdateProfileResponse = Self::json_body(response).await?;
        let confirmed = body.name.unwrap_or_else(|| name.to_string());
        self.session().update_user(|user| user.name = confirmed);
        Ok(())
    }

    pub async fn update_password(&self, current_password: &str, new_password: &str) -> Result<()> {
        let response = self
            .request(Method::PUT, "auth/update-password")?
            .json(&UpdatePasswordRequest { current_password, new_password })
            .send()
            .await?;
        Self::expect_success(response, "Erro ao atualizar senha").await?;
        Ok(())
    }

    /// Upload a profile photo; returns the server-assigned URL.
    pub async fn upload_photo(&self, upload: &PhotoUpload) -> Result<String> {
        let response = self
            .request(Method::POST, "users/upload-photo")?
            .json(upload)
            .send()
            .await?;
        let response = Self::expect_success(response, "Erro ao fazer upload da foto").await?;
        let body: UploadPhotoResponse = Self::json_body(response).await?;
        let photo_url = body.photo_url.clone();
        self.session().update_user(|user| user.photo = Some(photo_url));
        Ok(body.photo_url)
    }

    pub async fn remove_photo(&self) -> Result<()> {
        let response = self
            .request(Method::DELETE, "users/remove-photo")?
            .send()
            .await?;
        Self::expect_success(response, "Erro ao remover foto").await?;
        self.session().update_user(|user| user.photo = None);
        Ok(())
    }

    /// Ask the server for the phrase the user must type to delete the
    /// account.
    pub async fn generate_delete_confirmation(&self) -> Result<String> {
        let response = self
            .request(Method::POST, "users/generate-delete-confirmation")?
            .send()
            .await?;
        let response =
            Self::expect_success(response, "Erro ao gerar mensagem de confirmação").await?;
        let body: DeleteConfirmationResponse = Self::json_body(response).await?;
        Ok(body.confirmation_message)
    }

    /// Delete the account. The phrase is validated byte-exact client-side
    /// first, but the server re-checks it. Clears the session on success.
    pub async fn delete_account(&self, confirmation_message: &str) -> Result<()> {
        let response = self
            .request(Method::DELETE, "users/delete-account")?
            .json(&DeleteAccountRequest { confirmation_message })
            .send()
            .await?;
        Self::expect_success(response, "Erro ao excluir conta").await?;
        self.session().logout();
        Ok(())
    }
}
