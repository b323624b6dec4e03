//! UI Components
//!
//! Props-driven Leptos views; no state beyond form buffers.

mod alert;
mod auth_page;
mod board_sidebar;
mod card_modal;
mod delete_modal;
mod edit_board_modal;
mod edit_column_modal;
mod kanban_card;
mod kanban_column;
mod kanban_header;
mod kanban_page;
mod login_form;
mod profile_page;
mod signup_form;

pub use alert::Alert;
pub use auth_page::AuthPage;
pub use board_sidebar::BoardSidebar;
pub use card_modal::CardModal;
pub use delete_modal::DeleteModal;
pub use edit_board_modal::EditBoardModal;
pub use edit_column_modal::EditColumnModal;
pub use kanban_card::KanbanCard;
pub use kanban_column::KanbanColumn;
pub use kanban_header::KanbanHeader;
pub use kanban_page::KanbanPage;
pub use login_form::LoginForm;
pub use profile_page::ProfilePage;
pub use signup_form::SignUpForm;
