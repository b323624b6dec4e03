//! Board Sidebar
//!
//! Board list with selection and delete shortcuts, plus the user section
//! with the account/logout dropdown.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::{Board, User};
use crate::route::Route;

#[component]
pub fn BoardSidebar(
    #[prop(into)] boards: Signal<Vec<Board>>,
    #[prop(into)] active_board_id: Signal<Option<u64>>,
    #[prop(into)] user: Signal<Option<User>>,
    #[prop(into)] on_select: Callback<Board>,
    #[prop(into)] on_delete_board: Callback<Board>,
    #[prop(into)] on_new_board: Callback<()>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let (dropdown_open, set_dropdown_open) = signal(false);

    view! {
        <div class="kanban-sidebar">
            <div class="sidebar-header">
                <div class="sidebar-logo">"ServiTask"</div>
            </div>

            <div class="boards-section-sidebar">
                <p class="section-title">"Meus quadros:"</p>
                <Show
                    when=move || !boards.get().is_empty()
                    fallback=|| view! { <p class="no-boards">"Nenhum quadro criado"</p> }
                >
                    <For
                        each=move || boards.get()
                        key=|board| (board.id, board.name.clone())
                        children=move |board| {
                            let board = StoredValue::new(board);
                            let board_id = board.with_value(|b| b.id);
                            view! {
                                <div class="board-item">
                                    <button
                                        class=move || {
                                            if active_board_id.get() == Some(board_id) {
                                                "board-btn active"
                                            } else {
                                                "board-btn"
                                            }
                                        }
                                        on:click=move |_| on_select.run(board.get_value())
                                    >
                                        {move || board.with_value(|b| b.name.clone())}
                                    </button>
                                    <button
                                        class="delete-board-btn"
                                        title="Excluir quadro"
                                        on:click=move |_| on_delete_board.run(board.get_value())
                                    >
                                        "🗑"
                                    </button>
                                </div>
                            }
                        }
                    />
                </Show>
                <button class="add-board-btn" on:click=move |_| on_new_board.run(())>
                    "+ Novo quadro"
                </button>
            </div>

            <div class="sidebar-user-section">
                <div class="sidebar-user-dropdown-container">
                    <button
                        class="sidebar-user-profile-btn"
                        on:click=move |_| set_dropdown_open.update(|open| *open = !*open)
                    >
                        {move || {
                            user.get()
                                .and_then(|u| u.photo)
                                .map(|photo| {
                                    view! {
                                        <img class="sidebar-user-avatar" src=photo alt="Foto do perfil" />
                                    }
                                        .into_any()
                                })
                                .unwrap_or_else(|| {
                                    view! { <div class="sidebar-user-placeholder">"👤"</div> }.into_any()
                                })
                        }}
                        <div class="sidebar-user-info">
                            <span class="sidebar-user-name">
                                {move || {
                                    user.get().map(|u| u.name).unwrap_or_else(|| "Usuário".to_string())
                                }}
                            </span>
                            <span class="sidebar-user-email">
                                {move || user.get().map(|u| u.email).unwrap_or_default()}
                            </span>
                        </div>
                    </button>
                    <Show when=move || dropdown_open.get()>
                        <div class="sidebar-user-dropdown-menu">
                            <div
                                class="sidebar-dropdown-item"
                                on:click=move |_| {
                                    set_dropdown_open.set(false);
                                    ctx.router.navigate(Route::Profile);
                                }
                            >
                                "Minha Conta"
                            </div>
                            <div class="sidebar-dropdown-separator"></div>
                            <div
                                class="sidebar-dropdown-item sidebar-logout-item"
                                on:click=move |_| ctx.logout()
                            >
                                "Sair"
                            </div>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
