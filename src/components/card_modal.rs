//! Card Modal
//!
//! Add/edit form for cards: required title, description with a 100-char
//! counter (submit disabled while over the limit), priority select.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::api::CardDraft;
use crate::context::alert;
use crate::models::{Card, Priority};
use crate::validation::MAX_DESCRIPTION_LEN;

#[component]
pub fn CardModal(
    #[prop(optional_no_strip)] editing: Option<Card>,
    #[prop(into)] on_save: Callback<CardDraft>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let is_editing = editing.is_some();
    let (title, set_title) = signal(editing.as_ref().map(|c| c.title.clone()).unwrap_or_default());
    let (description, set_description) = signal(
        editing
            .as_ref()
            .and_then(|c| c.description.clone())
            .unwrap_or_default(),
    );
    let (priority, set_priority) =
        signal(editing.as_ref().map(|c| c.priority).unwrap_or_default());

    let description_len = move || description.get().chars().count();
    let over_limit = move || description_len() > MAX_DESCRIPTION_LEN;

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Over-limit descriptions never reach the API.
        if over_limit() {
            return;
        }
        let title = title.get();
        if title.trim().is_empty() {
            alert("Por favor, digite um título para o cartão.");
            return;
        }
        on_save.run(CardDraft {
            title: title.trim().to_string(),
            description: description.get(),
            priority: priority.get(),
        });
    };

    view! {
        <div class="modal-overlay">
            <div class="modal-card-form spaced">
                <div class="modal-header-row">
                    <h2>{if is_editing { "Editar Cartão" } else { "Adicionar Novo Cartão" }}</h2>
                    <button class="modal-close-btn" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <form class="styled-form" on:submit=submit>
                    <div class="form-group">
                        <label for="title">"Título *"</label>
                        <input
                            id="title"
                            type="text"
                            class="styled-input"
                            placeholder="Digite o título do cartão"
                            prop:value=move || title.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_title.set(input.value());
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="description">"Descrição"</label>
                        <div class="textarea-container">
                            <textarea
                                id="description"
                                class="styled-input"
                                placeholder="Digite a descrição do cartão"
                                prop:value=move || description.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                    set_description.set(input.value());
                                }
                            ></textarea>
                            <div class="char-counter-bottom">
                                {move || format!("{} / {}", description_len(), MAX_DESCRIPTION_LEN)}
                            </div>
                        </div>
                        {move || over_limit().then(|| view! {
                            <div class="simple-error">
                                {format!("Descrição deve ter no máximo {MAX_DESCRIPTION_LEN} caracteres")}
                            </div>
                        })}
                    </div>
                    <div class="form-group priority-group">
                        <label for="priority">"Prioridade"</label>
                        <div class="priority-select-wrapper">
                            <select
                                id="priority"
                                class="styled-input"
                                prop:value=move || priority.get().as_str()
                                on:change=move |ev| {
                                    let target = ev.target().unwrap();
                                    let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                                    set_priority.set(Priority::parse(&select.value()));
                                }
                            >
                                <option value="alta">"Alta"</option>
                                <option value="media">"Média"</option>
                                <option value="baixa">"Baixa"</option>
                            </select>
                            <span
                                class="priority-circle"
                                style=move || format!("background: {};", priority.get().color())
                            >
                                {move || priority.get().label().chars().next().unwrap_or('M')}
                            </span>
                        </div>
                    </div>
                    <div class="modal-actions-row spaced">
                        <button type="submit" class="btn-blue" disabled=over_limit>
                            {if is_editing { "Salvar Alterações" } else { "Adicionar Cartão" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
