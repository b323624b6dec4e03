//! Board, column and card endpoints.
//!
//! Mutations return `()` on purpose: callers reload the affected aggregate
//! wholesale instead of patching local state from the response.

use reqwest::Method;
use serde::Serialize;

use super::ApiClient;
use crate::error::{ApiError, Result};
use crate::models::{Board, Priority};
use crate::validation::{description_over_limit, MAX_DESCRIPTION_LEN};

#[derive(Serialize)]
struct NameRequest<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct ReorderRequest {
    position: i32,
}

/// Card create/update payload shared by the card modal.
#[derive(Debug, Clone, Serialize)]
pub struct CardDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl CardDraft {
    fn validate(&self) -> Result<()> {
        if description_over_limit(&self.description) {
            return Err(ApiError::Validation(format!(
                "Descrição deve ter no máximo {MAX_DESCRIPTION_LEN} caracteres"
            )));
        }
        Ok(())
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MoveCardRequest {
    target_column_id: u64,
    target_position: Option<i32>,
}

impl ApiClient {
    /// All boards owned by the session user (columns and cards included).
    pub async fn boards(&self) -> Result<Vec<Board>> {
        let response = self.request(Method::GET, "boards")?.send().await?;
        let response = Self::expect_success(response, "Erro ao carregar boards").await?;
        Self::json_body(response).await
    }

    /// One board, fully populated.
    pub async fn board(&self, board_id: u64) -> Result<Board> {
        let response = self
            .request(Method::GET, &format!("boards/{board_id}"))?
            .send()
            .await?;
        let response = Self::expect_success(response, "Erro ao carregar board").await?;
        Self::json_body(response).await
    }

    pub async fn create_board(&self, name: &str) -> Result<Board> {
        let response = self
            .request(Method::POST, "boards")?
            .json(&NameRequest { name })
            .send()
            .await?;
        let response = Self::expect_success(response, "Erro ao criar board").await?;
        Self::json_body(response).await
    }

    pub async fn rename_board(&self, board_id: u64, name: &str) -> Result<()> {
        let response = self
            .request(Method::PUT, &format!("boards/{board_id}"))?
            .json(&NameRequest { name })
            .send()
            .await?;
        Self::expect_success(response, "Erro ao atualizar board").await?;
        Ok(())
    }

    pub async fn delete_board(&self, board_id: u64) -> Result<()> {
        let response = self
            .request(Method::DELETE, &format!("boards/{board_id}"))?
            .send()
            .await?;
        Self::expect_success(response, "Erro ao excluir board").await?;
        Ok(())
    }

    pub async fn add_column(&self, board_id: u64, name: &str) -> Result<()> {
        let response = self
            .request(Method::POST, &format!("boards/{board_id}/columns"))?
            .json(&NameRequest { name })
            .send()
            .await?;
        Self::expect_success(response, "Erro ao adicionar coluna").await?;
        Ok(())
    }

    pub async fn rename_column(&self, board_id: u64, column_id: u64, name: &str) -> Result<()> {
        let response = self
            .request(Method::PUT, &format!("boards/{board_id}/columns/{column_id}"))?
            .json(&NameRequest { name })
            .send()
            .await?;
        Self::expect_success(response, "Erro ao atualizar coluna").await?;
        Ok(())
    }

    pub async fn delete_column(&self, board_id: u64, column_id: u64) -> Result<()> {
        let response = self
            .request(Method::DELETE, &format!("boards/{board_id}/columns/{column_id}"))?
            .send()
            .await?;
        Self::expect_success(response, "Erro ao remover coluna").await?;
        Ok(())
    }

    /// Request a server-side reorder; positions are server-assigned, the
    /// client only names the target.
    pub async fn reorder_column(&self, board_id: u64, column_id: u64, position: i32) -> Result<()> {
        let response = self
            .request(
                Method::PUT,
                &format!("boards/{board_id}/columns/{column_id}/reorder"),
            )?
            .json(&ReorderRequest { position })
            .send()
            .await?;
        Self::expect_success(response, "Erro ao reordenar coluna").await?;
        Ok(())
    }

    pub async fn add_card(&self, board_id: u64, column_id: u64, draft: &CardDraft) -> Result<()> {
        draft.validate()?;
        let response = self
            .request(
                Method::POST,
                &format!("boards/{board_id}/columns/{column_id}/cards"),
            )?
            .json(draft)
            .send()
            .await?;
        Self::expect_success(response, "Erro ao adicionar card").await?;
        Ok(())
    }

    pub async fn update_card(
        &self,
        board_id: u64,
        column_id: u64,
        card_id: u64,
        draft: &CardDraft,
    ) -> Result<()> {
        draft.validate()?;
        let response = self
            .request(
                Method::PUT,
                &format!("boards/{board_id}/columns/{column_id}/cards/{card_id}"),
            )?
            .json(draft)
            .send()
            .await?;
        Self::expect_success(response, "Erro ao atualizar card").await?;
        Ok(())
    }

    pub async fn delete_card(&self, board_id: u64, column_id: u64, card_id: u64) -> Result<()> {
        let response = self
            .request(
                Method::DELETE,
                &format!("boards/{board_id}/columns/{column_id}/cards/{card_id}"),
            )?
            .send()
            .await?;
        Self::expect_success(response, "Erro ao remover card").await?;
        Ok(())
    }

    /// Move a card to another column. Without a target position the server
    /// decides placement (append).
    pub async fn move_card(
        &self,
        board_id: u64,
        card_id: u64,
        target_column_id: u64,
        target_position: Option<i32>,
    ) -> Result<()> {
        let response = self
            .request(Method::PUT, &format!("boards/{board_id}/cards/{card_id}/move"))?
            .json(&MoveCardRequest { target_column_id, target_position })
            .send()
            .await?;
        Self::expect_success(response, "Erro ao mover card").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn over_limit_draft_is_rejected_before_any_request() {
        let draft = CardDraft {
            title: "t".into(),
            description: "d".repeat(MAX_DESCRIPTION_LEN + 1),
            priority: Priority::Media,
        };
        let err = draft.validate().unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(err.message().contains("100 caracteres"));
    }

    #[test]
    fn draft_at_limit_passes() {
        let draft = CardDraft {
            title: "t".into(),
            description: "d".repeat(MAX_DESCRIPTION_LEN),
            priority: Priority::Alta,
        };
        assert!(draft.validate().is_ok());
    }
}
