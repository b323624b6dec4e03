//! Kanban Column
//!
//! Drop target for cards and, via its header, a draggable handle for
//! column reordering. Drop decisions live with the page; this component
//! only reports where the drop landed.

use kanban_dragdrop::{make_on_card_drag_over, make_on_column_drag_over, DndSignals};
use leptos::prelude::*;

use crate::models::{Card, Column};

use super::KanbanCard;

#[component]
pub fn KanbanColumn(
    column: Column,
    #[prop(into)] on_add_card: Callback<u64>,
    #[prop(into)] on_edit_card: Callback<(u64, Card)>,
    #[prop(into)] on_delete_card: Callback<(u64, Card)>,
    #[prop(into)] on_rename: Callback<Column>,
    #[prop(into)] on_delete: Callback<Column>,
    /// Card dropped onto this column.
    #[prop(into)] on_card_drop: Callback<u64>,
    /// Column dropped onto this column's position.
    #[prop(into)] on_column_drop: Callback<i32>,
) -> impl IntoView {
    let dnd = expect_context::<DndSignals>();
    let column_id = column.id;
    let position = column.position;
    let cards = column.cards.clone();
    let column = StoredValue::new(column);

    let card_target = move || dnd.hover_column.get() == Some(column_id);
    let header_target = move || dnd.hover_position.get() == Some(position);
    let dragging = move || dnd.state.get().dragged_column() == Some(column_id);

    let column_class = move || {
        let mut class = String::from("kanban-column");
        if card_target() {
            class.push_str(" drag-over");
        }
        if dragging() {
            class.push_str(" column-dragging");
        }
        class
    };

    view! {
        <div
            class=column_class
            on:dragover=make_on_card_drag_over(dnd, column_id)
            on:dragleave=move |_| dnd.leave_column()
            on:drop=move |ev: web_sys::DragEvent| {
                ev.prevent_default();
                on_card_drop.run(column_id);
            }
        >
            <div
                class=move || {
                    if header_target() { "column-header column-drop-target" } else { "column-header" }
                }
                draggable="true"
                on:dragstart=move |_| dnd.start_column_drag(column_id)
                on:dragend=move |_| dnd.end_drag()
                on:dragover=make_on_column_drag_over(dnd, position)
                on:drop=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    on_column_drop.run(position);
                }
            >
                <h3 class="column-title">
                    {move || column.with_value(|c| c.name.clone())}
                    <span class="card-count">{cards.len()}</span>
                </h3>
                <div class="column-actions">
                    <button
                        class="column-action-btn"
                        title="Renomear coluna"
                        on:click=move |_| on_rename.run(column.get_value())
                    >
                        "✎"
                    </button>
                    <button
                        class="column-action-btn"
                        title="Excluir coluna"
                        on:click=move |_| on_delete.run(column.get_value())
                    >
                        "🗑"
                    </button>
                </div>
            </div>
            <div class="column-cards">
                <For
                    each=move || cards.clone()
                    key=|card| card.id
                    children=move |card| {
                        view! {
                            <KanbanCard
                                card=card
                                column_id=column_id
                                on_edit=move |card| on_edit_card.run((column_id, card))
                                on_delete=move |card| on_delete_card.run((column_id, card))
                            />
                        }
                    }
                />
            </div>
            <button class="add-card-btn" on:click=move |_| on_add_card.run(column_id)>
                "+ Adicionar cartão"
            </button>
        </div>
    }
}
