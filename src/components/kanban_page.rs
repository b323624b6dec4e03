//! Kanban Page
//!
//! The board view: sidebar, active board with its columns, and every
//! modal. Board selection is driven entirely by the URL slug; mutations
//! go through the controller, which reloads state from the server.

use kanban_dragdrop::{card_drop, column_drop, create_dnd_signals};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::CardDraft;
use crate::board::{resolve_board_slug, BoardController, SlugOutcome};
use crate::context::AppContext;
use crate::models::{Board, Card, Column, User};
use crate::route::Route;
use crate::slug::name_to_slug;

use super::{
    BoardSidebar, CardModal, DeleteModal, EditBoardModal, EditColumnModal, KanbanColumn,
    KanbanHeader,
};

#[derive(Clone)]
struct CardModalState {
    column_id: u64,
    editing: Option<Card>,
}

#[component]
pub fn KanbanPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let controller = expect_context::<BoardController>();
    let dnd = create_dnd_signals();
    provide_context(dnd);

    let user = RwSignal::new(None::<User>);

    let board_modal_open = RwSignal::new(false);
    let column_modal = RwSignal::new(None::<Column>);
    let card_modal = RwSignal::new(None::<CardModalState>);
    let board_to_delete = RwSignal::new(None::<Board>);
    let column_to_delete = RwSignal::new(None::<Column>);
    let card_to_delete = RwSignal::new(None::<(u64, Card)>);

    Effect::new(move |_| {
        spawn_local(async move {
            controller.load_boards().await;
        });
    });

    Effect::new(move |_| {
        spawn_local(async move {
            if let Ok(data) = ctx.api().current_user().await {
                user.set(Some(data));
            }
        });
    });

    // The URL slug is the single source of board selection. Resolution
    // waits for the first board list load.
    Effect::new(move |_| {
        let route = ctx.router.route.get();
        let boards = controller.boards.get();
        if controller.loading.get() {
            return;
        }
        let Route::Kanban(slug) = route else {
            return;
        };
        match resolve_board_slug(&boards, slug.as_deref()) {
            SlugOutcome::Select(board_id) => {
                if controller.active_board_id.get_untracked() != Some(board_id) {
                    controller.select_board(board_id);
                }
            }
            SlugOutcome::Redirect { board_id, slug } => {
                if controller.active_board_id.get_untracked() != Some(board_id) {
                    controller.select_board(board_id);
                }
                ctx.router.replace(Route::Kanban(Some(slug)));
            }
            SlugOutcome::Empty => controller.clear_selection(),
        }
    });

    Effect::new(move |_| {
        let _ = controller.active_board_id.get();
        spawn_local(async move {
            controller.reload_active_board().await;
        });
    });

    let select_board = move |board: Board| {
        ctx.router
            .navigate(Route::Kanban(Some(name_to_slug(&board.name))));
    };

    let create_board = move |name: String| {
        spawn_local(async move {
            if let Some(board) = controller.create_board(&name).await {
                board_modal_open.set(false);
                ctx.router
                    .navigate(Route::Kanban(Some(name_to_slug(&board.name))));
            }
        });
    };

    let rename_board = move |name: String| {
        let Some(board_id) = controller.active_board_id.get_untracked() else {
            return;
        };
        spawn_local(async move {
            if controller.rename_board(board_id, &name).await {
                ctx.router.replace(Route::Kanban(Some(name_to_slug(&name))));
            }
        });
    };

    let confirm_delete_board = move |_| {
        let Some(board) = board_to_delete.get_untracked() else {
            return;
        };
        let was_active = controller.active_board_id.get_untracked() == Some(board.id);
        spawn_local(async move {
            if controller.delete_board(board.id).await && was_active {
                ctx.router.replace(Route::Kanban(None));
            }
            board_to_delete.set(None);
        });
    };

    // Columns are created straight away with a default name; the modal only
    // renames.
    let add_column = move |_| {
        let Some(board_id) = controller.active_board_id.get_untracked() else {
            return;
        };
        spawn_local(async move {
            controller.add_column(board_id, "Nova Coluna").await;
        });
    };

    let save_column = move |name: String| {
        let Some(board_id) = controller.active_board_id.get_untracked() else {
            return;
        };
        let Some(column) = column_modal.get_untracked() else {
            return;
        };
        spawn_local(async move {
            if controller.rename_column(board_id, column.id, &name).await {
                column_modal.set(None);
            }
        });
    };

    let confirm_delete_column = move |_| {
        let Some(board_id) = controller.active_board_id.get_untracked() else {
            return;
        };
        let Some(column) = column_to_delete.get_untracked() else {
            return;
        };
        spawn_local(async move {
            controller.delete_column(board_id, column.id).await;
            column_to_delete.set(None);
        });
    };

    let save_card = move |draft: CardDraft| {
        let Some(board_id) = controller.active_board_id.get_untracked() else {
            return;
        };
        let Some(state) = card_modal.get_untracked() else {
            return;
        };
        spawn_local(async move {
            let saved = match &state.editing {
                Some(card) => {
                    controller
                        .edit_card(board_id, state.column_id, card.id, &draft)
                        .await
                }
                None => controller.add_card(board_id, state.column_id, &draft).await,
            };
            if saved {
                card_modal.set(None);
            }
        });
    };

    let confirm_delete_card = move |_| {
        let Some(board_id) = controller.active_board_id.get_untracked() else {
            return;
        };
        let Some((column_id, card)) = card_to_delete.get_untracked() else {
            return;
        };
        spawn_local(async move {
            controller.delete_card(board_id, column_id, card.id).await;
            card_to_delete.set(None);
        });
    };

    let on_card_drop = move |target_column: u64| {
        let state = dnd.state.get_untracked();
        dnd.end_drag();
        let Some(drop) = card_drop(state, target_column) else {
            return;
        };
        let Some(board_id) = controller.active_board_id.get_untracked() else {
            return;
        };
        spawn_local(async move {
            controller
                .move_card(board_id, drop.card_id, drop.target_column)
                .await;
        });
    };

    let on_column_drop = move |target_position: i32| {
        let state = dnd.state.get_untracked();
        dnd.end_drag();
        let current_position = state.dragged_column().and_then(|column_id| {
            controller.active_board.get_untracked().and_then(|board| {
                board
                    .columns
                    .iter()
                    .find(|c| c.id == column_id)
                    .map(|c| c.position)
            })
        });
        let Some(drop) = column_drop(state, current_position, target_position) else {
            return;
        };
        let Some(board_id) = controller.active_board_id.get_untracked() else {
            return;
        };
        spawn_local(async move {
            controller
                .reorder_column(board_id, drop.column_id, drop.target_position)
                .await;
        });
    };

    let board_name = Signal::derive(move || {
        controller
            .active_board
            .get()
            .map(|board| board.name)
            .unwrap_or_default()
    });

    let main_view = move || {
        if controller.loading.get() {
            return view! { <div class="kanban-loading">"Carregando quadros..."</div> }.into_any();
        }
        if let Some(message) = controller.error.get() {
            return view! {
                <div class="kanban-error">
                    <p>{message}</p>
                    <button
                        class="btn-primary"
                        on:click=move |_| {
                            spawn_local(async move {
                                controller.load_boards().await;
                            });
                        }
                    >
                        "Tentar novamente"
                    </button>
                </div>
            }
            .into_any();
        }
        if controller.boards.get().is_empty() {
            return view! {
                <div class="empty-boards">
                    <h2>"Bem-vindo ao ServiTask!"</h2>
                    <p>"Crie seu primeiro quadro para começar a organizar suas tarefas."</p>
                    <button
                        class="btn-primary large"
                        on:click=move |_| board_modal_open.set(true)
                    >
                        "+ Criar Primeiro Quadro"
                    </button>
                </div>
            }
            .into_any();
        }
        match controller.active_board.get() {
            Some(board) => view! {
                <KanbanHeader
                    board_name=board_name
                    on_rename=rename_board
                    on_add_column=add_column
                />
                <div class="kanban-board">
                    {board
                        .columns
                        .into_iter()
                        .map(|column| {
                            view! {
                                <KanbanColumn
                                    column=column
                                    on_add_card=move |column_id| {
                                        card_modal
                                            .set(Some(CardModalState { column_id, editing: None }))
                                    }
                                    on_edit_card=move |(column_id, card)| {
                                        card_modal
                                            .set(
                                                Some(CardModalState {
                                                    column_id,
                                                    editing: Some(card),
                                                }),
                                            )
                                    }
                                    on_delete_card=move |(column_id, card)| {
                                        card_to_delete.set(Some((column_id, card)))
                                    }
                                    on_rename=move |column| column_modal.set(Some(column))
                                    on_delete=move |column| column_to_delete.set(Some(column))
                                    on_card_drop=on_card_drop
                                    on_column_drop=on_column_drop
                                />
                            }
                        })
                        .collect_view()}
                </div>
            }
            .into_any(),
            None => view! { <div class="kanban-loading">"Carregando quadro..."</div> }.into_any(),
        }
    };

    view! {
        <div class="kanban-layout">
            <BoardSidebar
                boards=controller.boards
                active_board_id=controller.active_board_id
                user=user
                on_select=select_board
                on_delete_board=move |board| board_to_delete.set(Some(board))
                on_new_board=move |_| board_modal_open.set(true)
            />
            <div class="kanban-main">{main_view}</div>

            <Show when=move || board_modal_open.get()>
                <EditBoardModal
                    title="Novo Quadro"
                    on_save=create_board
                    on_close=move |_| board_modal_open.set(false)
                />
            </Show>

            {move || {
                column_modal
                    .get()
                    .map(|column| {
                        view! {
                            <EditColumnModal
                                initial_name=column.name.clone()
                                on_save=save_column
                                on_close=move |_| column_modal.set(None)
                            />
                        }
                    })
            }}

            {move || {
                card_modal
                    .get()
                    .map(|state| {
                        view! {
                            <CardModal
                                editing=state.editing
                                on_save=save_card
                                on_close=move |_| card_modal.set(None)
                            />
                        }
                    })
            }}

            {move || {
                board_to_delete
                    .get()
                    .map(|board| {
                        view! {
                            <DeleteModal
                                title="Excluir Quadro"
                                item_name=board.name.clone()
                                warning="Todas as colunas e cartões deste quadro serão excluídos. Esta ação não pode ser desfeita."
                                confirm_label="Excluir Quadro"
                                on_confirm=confirm_delete_board
                                on_close=move |_| board_to_delete.set(None)
                            />
                        }
                    })
            }}

            {move || {
                column_to_delete
                    .get()
                    .map(|column| {
                        view! {
                            <DeleteModal
                                title="Excluir Coluna"
                                item_name=column.name.clone()
                                warning="Todos os cartões desta coluna serão excluídos. Esta ação não pode ser desfeita."
                                confirm_label="Excluir Coluna"
                                on_confirm=confirm_delete_column
                                on_close=move |_| column_to_delete.set(None)
                            />
                        }
                    })
            }}

            {move || {
                card_to_delete
                    .get()
                    .map(|(_, card)| {
                        view! {
                            <DeleteModal
                                title="Excluir Cartão"
                                item_name=card.title.clone()
                                warning="Esta ação não pode ser desfeita."
                                confirm_label="Excluir Cartão"
                                on_confirm=confirm_delete_card
                                on_close=move |_| card_to_delete.set(None)
                            />
                        }
                    })
            }}
        </div>
    }
}
