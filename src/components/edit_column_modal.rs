//! Column Name Modal

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::alert;

#[component]
pub fn EditColumnModal(
    #[prop(into)] initial_name: String,
    #[prop(into)] on_save: Callback<String>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = signal(initial_name);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = name.get();
        if value.trim().is_empty() {
            alert("Por favor, digite um nome para a coluna.");
            return;
        }
        on_save.run(value.trim().to_string());
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal-card-form" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header-row">
                    <h2>"Editar Coluna"</h2>
                    <button class="modal-close-btn" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <form class="styled-form" on:submit=submit>
                    <div class="form-group">
                        <label for="column-name">"Nome da coluna *"</label>
                        <input
                            id="column-name"
                            type="text"
                            class="styled-input"
                            prop:value=move || name.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_name.set(input.value());
                            }
                        />
                    </div>
                    <div class="modal-actions-row">
                        <button type="submit" class="btn-confirm">"Salvar"</button>
                        <button type="button" class="btn-cancel" on:click=move |_| on_close.run(())>
                            "Cancelar"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
