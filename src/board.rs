//! Board State Controller
//!
//! Holds the board list and the fully populated active board. Every
//! mutation issues exactly one API call and, on success, reloads the
//! affected aggregate wholesale; nothing is patched locally before server
//! confirmation. Failures alert and leave prior state untouched.

use leptos::prelude::*;

use crate::api::{ApiClient, CardDraft};
use crate::context::alert;
use crate::models::Board;
use crate::slug::{find_board_by_slug, name_to_slug};

/// Outcome of resolving the URL slug against the loaded board list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SlugOutcome {
    /// The slug names a board.
    Select(u64),
    /// Unknown or absent slug; fall back to the first board (its slug
    /// replaces the URL segment).
    Redirect { board_id: u64, slug: String },
    /// No boards exist; show the empty view.
    Empty,
}

/// Pure slug resolution: unique match, else first board, else empty.
pub fn resolve_board_slug(boards: &[Board], slug: Option<&str>) -> SlugOutcome {
    if let Some(slug) = slug {
        if let Some(board) = find_board_by_slug(boards, slug) {
            return SlugOutcome::Select(board.id);
        }
    }
    match boards.first() {
        Some(first) => SlugOutcome::Redirect {
            board_id: first.id,
            slug: name_to_slug(&first.name),
        },
        None => SlugOutcome::Empty,
    }
}

/// Signal bundle for the board view. `Copy`, so handlers can move it into
/// `spawn_local` freely.
#[derive(Clone, Copy)]
pub struct BoardController {
    api: StoredValue<ApiClient>,
    pub boards: RwSignal<Vec<Board>>,
    pub active_board_id: RwSignal<Option<u64>>,
    pub active_board: RwSignal<Option<Board>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl BoardController {
    pub fn new(api: ApiClient) -> Self {
        BoardController {
            api: StoredValue::new(api),
            boards: RwSignal::new(Vec::new()),
            active_board_id: RwSignal::new(None),
            active_board: RwSignal::new(None),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
        }
    }

    fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    /// Initial load: `loading -> {ready, error}`. The error view offers a
    /// manual retry that calls this again.
    pub async fn load_boards(&self) {
        self.loading.set(true);
        self.error.set(None);
        match self.api().boards().await {
            Ok(boards) => self.boards.set(boards),
            Err(err) => {
                web_sys::console::error_1(&format!("Erro ao carregar boards: {err}").into());
                self.error
                    .set(Some("Erro ao carregar quadros. Tente novamente.".to_string()));
            }
        }
        self.loading.set(false);
    }

    /// Refresh the board list without flipping the loading state (used
    /// after board-level mutations).
    async fn refresh_board_list(&self) {
        if let Ok(boards) = self.api().boards().await {
            self.boards.set(boards);
        }
    }

    pub fn select_board(&self, board_id: u64) {
        self.active_board_id.set(Some(board_id));
    }

    pub fn clear_selection(&self) {
        self.active_board_id.set(None);
        self.active_board.set(None);
    }

    /// Wholesale fetch of the active board's columns and cards.
    pub async fn reload_active_board(&self) {
        let Some(board_id) = self.active_board_id.get_untracked() else {
            self.active_board.set(None);
            return;
        };
        match self.api().board(board_id).await {
            Ok(board) => self.active_board.set(Some(board)),
            Err(err) => {
                web_sys::console::error_1(&format!("Erro ao carregar board: {err}").into());
                self.error
                    .set(Some("Erro ao carregar quadro. Tente novamente.".to_string()));
            }
        }
    }

    /// Create a board and return it so the caller can navigate to its slug.
    pub async fn create_board(&self, name: &str) -> Option<Board> {
        match self.api().create_board(name).await {
            Ok(board) => {
                self.refresh_board_list().await;
                Some(board)
            }
            Err(err) => {
                web_sys::console::error_1(&format!("Erro ao criar board: {err}").into());
                alert("Erro ao criar quadro. Tente novamente.");
                None
            }
        }
    }

    /// Rename the active board. Returns success so the caller can rewrite
    /// the slug segment.
    pub async fn rename_board(&self, board_id: u64, name: &str) -> bool {
        match self.api().rename_board(board_id, name).await {
            Ok(()) => {
                self.reload_active_board().await;
                self.refresh_board_list().await;
                true
            }
            Err(err) => {
                web_sys::console::error_1(&format!("Erro ao atualizar board: {err}").into());
                alert("Erro ao atualizar nome do quadro. Tente novamente.");
                false
            }
        }
    }

    /// Delete a board; reloads the list and moves selection off the victim.
    pub async fn delete_board(&self, board_id: u64) -> bool {
        match self.api().delete_board(board_id).await {
            Ok(()) => {
                self.refresh_board_list().await;
                if self.active_board_id.get_untracked() == Some(board_id) {
                    self.clear_selection();
                }
                true
            }
            Err(err) => {
                web_sys::console::error_1(&format!("Erro ao excluir board: {err}").into());
                alert("Erro ao excluir quadro. Tente novamente.");
                false
            }
        }
    }

    pub async fn add_column(&self, board_id: u64, name: &str) {
        match self.api().add_column(board_id, name).await {
            Ok(()) => self.reload_active_board().await,
            Err(err) => {
                web_sys::console::error_1(&format!("Erro ao adicionar coluna: {err}").into());
                alert("Erro ao adicionar coluna. Tente novamente.");
            }
        }
    }

    pub async fn rename_column(&self, board_id: u64, column_id: u64, name: &str) -> bool {
        match self.api().rename_column(board_id, column_id, name).await {
            Ok(()) => {
                self.reload_active_board().await;
                true
            }
            Err(err) => {
                web_sys::console::error_1(&format!("Erro ao atualizar coluna: {err}").into());
                alert("Erro ao atualizar coluna. Tente novamente.");
                false
            }
        }
    }

    pub async fn delete_column(&self, board_id: u64, column_id: u64) {
        match self.api().delete_column(board_id, column_id).await {
            Ok(()) => self.reload_active_board().await,
            Err(err) => {
                web_sys::console::error_1(&format!("Erro ao excluir coluna: {err}").into());
                alert("Erro ao excluir coluna. Tente novamente.");
            }
        }
    }

    pub async fn reorder_column(&self, board_id: u64, column_id: u64, position: i32) {
        match self.api().reorder_column(board_id, column_id, position).await {
            Ok(()) => self.reload_active_board().await,
            Err(err) => {
                web_sys::console::error_1(&format!("Erro ao reordenar coluna: {err}").into());
                alert("Erro ao reordenar coluna. Tente novamente.");
            }
        }
    }

    pub async fn add_card(&self, board_id: u64, column_id: u64, draft: &CardDraft) -> bool {
        match self.api().add_card(board_id, column_id, draft).await {
            Ok(()) => {
                self.reload_active_board().await;
                true
            }
            Err(err) => {
                web_sys::console::error_1(&format!("Erro ao salvar card: {err}").into());
                alert(&err.message());
                false
            }
        }
    }

    pub async fn edit_card(
        &self,
        board_id: u64,
        column_id: u64,
        card_id: u64,
        draft: &CardDraft,
    ) -> bool {
        match self.api().update_card(board_id, column_id, card_id, draft).await {
            Ok(()) => {
                self.reload_active_board().await;
                true
            }
            Err(err) => {
                web_sys::console::error_1(&format!("Erro ao salvar card: {err}").into());
                alert(&err.message());
                false
            }
        }
    }

    pub async fn delete_card(&self, board_id: u64, column_id: u64, card_id: u64) {
        match self.api().delete_card(board_id, column_id, card_id).await {
            Ok(()) => self.reload_active_board().await,
            Err(err) => {
                web_sys::console::error_1(&format!("Erro ao excluir card: {err}").into());
                alert("Erro ao excluir cartão. Tente novamente.");
            }
        }
    }

    /// One move call, then one wholesale reload on success. Placement is
    /// server-decided; no target position is sent from drag-and-drop.
    pub async fn move_card(&self, board_id: u64, card_id: u64, target_column_id: u64) {
        match self.api().move_card(board_id, card_id, target_column_id, None).await {
            Ok(()) => self.reload_active_board().await,
            Err(err) => {
                web_sys::console::error_1(&format!("Erro ao mover card: {err}").into());
                alert("Erro ao mover cartão. Tente novamente.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(id: u64, name: &str) -> Board {
        Board { id, name: name.to_string(), columns: Vec::new() }
    }

    #[test]
    fn slug_selects_unique_match() {
        let boards = vec![board(1, "To Do"), board(2, "My Board")];
        assert_eq!(
            resolve_board_slug(&boards, Some("my-board")),
            SlugOutcome::Select(2)
        );
    }

    #[test]
    fn unknown_slug_falls_back_to_first_board() {
        let boards = vec![board(1, "Primeiro Quadro"), board(2, "Outro")];
        assert_eq!(
            resolve_board_slug(&boards, Some("missing")),
            SlugOutcome::Redirect { board_id: 1, slug: "primeiro-quadro".into() }
        );
        assert_eq!(
            resolve_board_slug(&boards, None),
            SlugOutcome::Redirect { board_id: 1, slug: "primeiro-quadro".into() }
        );
    }

    #[test]
    fn no_boards_yields_empty_view() {
        assert_eq!(resolve_board_slug(&[], Some("any")), SlugOutcome::Empty);
        assert_eq!(resolve_board_slug(&[], None), SlugOutcome::Empty);
    }
}
