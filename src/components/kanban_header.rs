//! Kanban Header
//!
//! Active board title with inline rename (Enter saves, Escape cancels)
//! and the add-column button.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[component]
pub fn KanbanHeader(
    #[prop(into)] board_name: Signal<String>,
    #[prop(into)] on_rename: Callback<String>,
    #[prop(into)] on_add_column: Callback<()>,
) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());

    let start_edit = move |_| {
        set_draft.set(board_name.get_untracked());
        set_editing.set(true);
    };
    let save = move || {
        let name = draft.get_untracked();
        if !name.trim().is_empty() {
            on_rename.run(name.trim().to_string());
        }
        set_editing.set(false);
    };
    let cancel = move || set_editing.set(false);

    view! {
        <div class="kanban-header">
            <div class="board-title-container">
                {move || {
                    if editing.get() {
                        view! {
                            <div class="board-title-edit">
                                <input
                                    type="text"
                                    class="board-title-input"
                                    prop:value=move || draft.get()
                                    on:input=move |ev| {
                                        let target = ev.target().unwrap();
                                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                        set_draft.set(input.value());
                                    }
                                    on:keydown=move |ev: web_sys::KeyboardEvent| {
                                        match ev.key().as_str() {
                                            "Enter" => save(),
                                            "Escape" => cancel(),
                                            _ => {}
                                        }
                                    }
                                />
                                <div class="edit-actions">
                                    <button class="btn-save-title" title="Salvar" on:click=move |_| save()>
                                        "✅"
                                    </button>
                                    <button class="btn-cancel-title" title="Cancelar" on:click=move |_| cancel()>
                                        "❌"
                                    </button>
                                </div>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="board-title-display">
                                <h1>{move || board_name.get()}</h1>
                                <button
                                    class="btn-edit-title"
                                    title="Editar nome do quadro"
                                    on:click=start_edit
                                >
                                    "✏️"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
            <button class="add-column-btn" on:click=move |_| on_add_column.run(())>
                "+ Adicionar Coluna"
            </button>
        </div>
    }
}
