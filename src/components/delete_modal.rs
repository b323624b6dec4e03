//! Delete Confirmation Modal
//!
//! Shared shell for board, column and card deletion. Each caller keeps its
//! own pending target; cancelling discards it without any API call.

use leptos::prelude::*;

#[component]
pub fn DeleteModal(
    #[prop(into)] title: String,
    #[prop(into)] item_name: String,
    #[prop(into)] warning: String,
    #[prop(into)] confirm_label: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="delete-modal-content" on:click=|ev| ev.stop_propagation()>
                <div class="delete-modal-header">
                    <h2>{title}</h2>
                </div>
                <div class="delete-modal-body">
                    <p>"Tem certeza que deseja excluir:"</p>
                    <div class="card-to-delete">
                        <strong>{format!("\"{item_name}\"")}</strong>
                    </div>
                    <p class="warning-text">{warning}</p>
                </div>
                <div class="delete-modal-actions">
                    <button type="button" class="btn-cancel-delete" on:click=move |_| on_close.run(())>
                        "Cancelar"
                    </button>
                    <button type="button" class="btn-confirm-delete" on:click=move |_| on_confirm.run(())>
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
