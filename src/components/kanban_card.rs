//! Kanban Card
//!
//! A single draggable card. The `dragstart` handler stops propagation so
//! the column header's drag handler never sees it.

use kanban_dragdrop::DndSignals;
use leptos::prelude::*;

use crate::models::Card;

#[component]
pub fn KanbanCard(
    card: Card,
    column_id: u64,
    #[prop(into)] on_edit: Callback<Card>,
    #[prop(into)] on_delete: Callback<Card>,
) -> impl IntoView {
    let dnd = expect_context::<DndSignals>();
    let card_id = card.id;
    let priority = card.priority;
    let card = StoredValue::new(card);

    let dragging = move || dnd.state.get().dragged_card() == Some(card_id);

    view! {
        <div
            class=move || if dragging() { "kanban-card dragging" } else { "kanban-card" }
            draggable="true"
            on:dragstart=move |ev| {
                ev.stop_propagation();
                dnd.start_card_drag(card_id, column_id);
            }
            on:dragend=move |_| dnd.end_drag()
        >
            <div class="card-header">
                <span
                    class="priority-badge"
                    style=format!("background: {};", priority.color())
                >
                    {priority.label()}
                </span>
                <div class="card-actions">
                    <button
                        class="card-action-btn"
                        title="Editar cartão"
                        on:click=move |_| on_edit.run(card.get_value())
                    >
                        "✎"
                    </button>
                    <button
                        class="card-action-btn"
                        title="Excluir cartão"
                        on:click=move |_| on_delete.run(card.get_value())
                    >
                        "🗑"
                    </button>
                </div>
            </div>
            <h4 class="card-title">{move || card.with_value(|c| c.title.clone())}</h4>
            {move || {
                card.with_value(|c| c.description.clone())
                    .filter(|d| !d.is_empty())
                    .map(|d| view! { <p class="card-description">{d}</p> })
            }}
        </div>
    }
}
