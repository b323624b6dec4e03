//! Profile Page
//!
//! Account management: name, password, photo, and the two-step account
//! deletion (confirm intent, then type the server-issued phrase).

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::api::PhotoUpload;
use crate::context::AppContext;
use crate::error::ApiError;
use crate::models::User;
use crate::route::Route;
use crate::validation::{confirmation_matches, validate_password_change};

use super::Alert;

const MAX_PHOTO_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

/// The final delete button stays disabled until the typed phrase matches
/// the server-issued one, and while the delete request is in flight.
fn delete_confirm_disabled(deleting: bool, typed: &str, issued: &str) -> bool {
    deleting || !confirmation_matches(typed, issued)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let user = RwSignal::new(None::<User>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (success, set_success) = signal(None::<String>);

    let (editing_name, set_editing_name) = signal(false);
    let (name_draft, set_name_draft) = signal(String::new());

    let (editing_password, set_editing_password) = signal(false);
    let (current_password, set_current_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());

    let (uploading_photo, set_uploading_photo) = signal(false);
    let (photo_preview, set_photo_preview) = signal(None::<String>);

    let (delete_step_confirm, set_delete_step_confirm) = signal(false);
    let (delete_step_input, set_delete_step_input) = signal(false);
    let (delete_phrase, set_delete_phrase) = signal(String::new());
    let (delete_input, set_delete_input) = signal(String::new());
    let (deleting, set_deleting) = signal(false);

    let flash = move |message: &'static str| {
        set_success.set(Some(message.to_string()));
        spawn_local(async move {
            TimeoutFuture::new(3_000).await;
            set_success.set(None);
        });
    };

    Effect::new(move |_| {
        spawn_local(async move {
            match ctx.api().current_user().await {
                Ok(data) => user.set(Some(data)),
                Err(ApiError::MissingToken) => ctx.router.navigate(Route::Auth),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Erro ao carregar dados do usuário: {err}").into(),
                    );
                    set_error.set(Some("Erro ao carregar dados do usuário.".to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let save_name = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = name_draft.get_untracked().trim().to_string();
        if name.is_empty() {
            set_error.set(Some("Por favor, digite um nome válido.".to_string()));
            return;
        }
        set_error.set(None);
        spawn_local(async move {
            match ctx.api().update_profile(&name).await {
                Ok(()) => {
                    user.update(|u| {
                        if let Some(u) = u {
                            u.name = name;
                        }
                    });
                    set_editing_name.set(false);
                    flash("Nome atualizado com sucesso!");
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Erro ao atualizar nome: {err}").into());
                    set_error.set(Some("Erro ao atualizar nome. Tente novamente.".to_string()));
                }
            }
        });
    };

    let save_password = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = current_password.get_untracked();
        let new = new_password.get_untracked();
        let confirm = confirm_password.get_untracked();
        if let Some(message) = validate_password_change(&current, &new, &confirm) {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        spawn_local(async move {
            match ctx.api().update_password(&current, &new).await {
                Ok(()) => {
                    set_current_password.set(String::new());
                    set_new_password.set(String::new());
                    set_confirm_password.set(String::new());
                    set_editing_password.set(false);
                    flash("Senha atualizada com sucesso!");
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Erro ao atualizar senha: {err}").into());
                    set_error.set(Some(err.message()));
                }
            }
        });
    };

    let upload = move |data_url: String, filename: String, content_type: String, size: f64| {
        set_uploading_photo.set(true);
        set_error.set(None);
        spawn_local(async move {
            let payload = PhotoUpload { photo: data_url, filename, content_type, size };
            match ctx.api().upload_photo(&payload).await {
                Ok(photo_url) => {
                    user.update(|u| {
                        if let Some(u) = u {
                            u.photo = Some(photo_url);
                        }
                    });
                    flash("Foto atualizada com sucesso!");
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Erro ao fazer upload da foto: {err}").into(),
                    );
                    set_error.set(Some("Erro ao atualizar foto. Tente novamente.".to_string()));
                }
            }
            set_photo_preview.set(None);
            set_uploading_photo.set(false);
        });
    };

    let photo_selected = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap().clone();
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        input.set_value("");
        if !file.type_().starts_with("image/") {
            set_error.set(Some("Por favor, selecione apenas arquivos de imagem.".to_string()));
            return;
        }
        if file.size() > MAX_PHOTO_BYTES {
            set_error.set(Some("A imagem deve ter no máximo 5MB.".to_string()));
            return;
        }
        let reader = match web_sys::FileReader::new() {
            Ok(reader) => reader,
            Err(_) => return,
        };
        let onload = {
            let reader = reader.clone();
            let file = file.clone();
            Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
                let Some(data_url) = reader.result().ok().and_then(|v| v.as_string()) else {
                    return;
                };
                set_photo_preview.set(Some(data_url.clone()));
                upload(data_url, file.name(), file.type_(), file.size());
            })
        };
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();
        let _ = reader.read_as_data_url(&file);
    };

    let remove_photo = move |_| {
        set_error.set(None);
        spawn_local(async move {
            match ctx.api().remove_photo().await {
                Ok(()) => {
                    user.update(|u| {
                        if let Some(u) = u {
                            u.photo = None;
                        }
                    });
                    set_photo_preview.set(None);
                    flash("Foto removida com sucesso!");
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Erro ao remover foto: {err}").into());
                    set_error.set(Some("Erro ao remover foto. Tente novamente.".to_string()));
                }
            }
        });
    };

    // Step one acknowledged; fetch the phrase the user must retype.
    let request_delete_phrase = move |_| {
        set_delete_step_confirm.set(false);
        set_error.set(None);
        spawn_local(async move {
            match ctx.api().generate_delete_confirmation().await {
                Ok(phrase) => {
                    set_delete_phrase.set(phrase);
                    set_delete_input.set(String::new());
                    set_delete_step_input.set(true);
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("Erro ao gerar mensagem de confirmação: {err}").into(),
                    );
                    set_error.set(Some(
                        "Erro ao gerar mensagem de confirmação. Tente novamente.".to_string(),
                    ));
                }
            }
        });
    };

    let confirm_blocked = move || {
        delete_confirm_disabled(deleting.get(), &delete_input.get(), &delete_phrase.get())
    };

    let confirm_delete = move |_| {
        let typed = delete_input.get_untracked();
        let issued = delete_phrase.get_untracked();
        // The button is disabled on mismatch; this guard covers programmatic
        // clicks.
        if !confirmation_matches(&typed, &issued) {
            return;
        }
        set_deleting.set(true);
        set_error.set(None);
        spawn_local(async move {
            match ctx.api().delete_account(typed.trim()).await {
                Ok(()) => ctx.router.navigate(Route::Auth),
                Err(err) => {
                    web_sys::console::error_1(&format!("Erro ao excluir conta: {err}").into());
                    set_error.set(Some(err.message()));
                }
            }
            set_deleting.set(false);
        });
    };

    let photo_src = move || {
        photo_preview
            .get()
            .or_else(|| user.get().and_then(|u| u.photo))
    };

    view! {
        <div class="profile-page">
            <div class="profile-header">
                <button
                    class="back-btn"
                    on:click=move |_| ctx.router.navigate(Route::Kanban(None))
                >
                    "← Voltar"
                </button>
                <h1>"Minha Conta"</h1>
            </div>

            <Alert kind="error" message=error />
            <Alert kind="success" message=success />

            <Show
                when=move || !loading.get()
                fallback=|| view! { <div class="profile-loading">"Carregando..."</div> }
            >
                <div class="profile-card">
                    <div class="profile-photo-section">
                        {move || {
                            photo_src()
                                .map(|src| {
                                    view! {
                                        <img class="profile-photo" src=src alt="Foto do perfil" />
                                    }
                                        .into_any()
                                })
                                .unwrap_or_else(|| {
                                    view! { <div class="profile-photo-placeholder">"👤"</div> }
                                        .into_any()
                                })
                        }}
                        <div class="photo-actions">
                            <label class="btn-secondary">
                                {move || {
                                    if uploading_photo.get() { "Enviando..." } else { "Alterar foto" }
                                }}
                                <input
                                    type="file"
                                    accept="image/*"
                                    style="display: none;"
                                    on:change=photo_selected
                                />
                            </label>
                            <Show when=move || {
                                user.get().map(|u| u.photo.is_some()).unwrap_or(false)
                            }>
                                <button class="btn-secondary" on:click=remove_photo>
                                    "Remover foto"
                                </button>
                            </Show>
                        </div>
                    </div>

                    <div class="profile-field">
                        <label>"Nome"</label>
                        {move || {
                            if editing_name.get() {
                                view! {
                                    <form class="inline-edit-form" on:submit=save_name>
                                        <input
                                            type="text"
                                            class="styled-input"
                                            prop:value=move || name_draft.get()
                                            on:input=move |ev| {
                                                let target = ev.target().unwrap();
                                                let input = target
                                                    .dyn_ref::<web_sys::HtmlInputElement>()
                                                    .unwrap();
                                                set_name_draft.set(input.value());
                                            }
                                        />
                                        <button type="submit" class="btn-confirm">"Salvar"</button>
                                        <button
                                            type="button"
                                            class="btn-cancel"
                                            on:click=move |_| set_editing_name.set(false)
                                        >
                                            "Cancelar"
                                        </button>
                                    </form>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="profile-field-row">
                                        <span>
                                            {move || {
                                                user.get().map(|u| u.name).unwrap_or_default()
                                            }}
                                        </span>
                                        <button
                                            class="btn-link"
                                            on:click=move |_| {
                                                set_name_draft
                                                    .set(
                                                        user
                                                            .get_untracked()
                                                            .map(|u| u.name)
                                                            .unwrap_or_default(),
                                                    );
                                                set_editing_name.set(true);
                                            }
                                        >
                                            "Editar"
                                        </button>
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                    </div>

                    <div class="profile-field">
                        <label>"E-mail"</label>
                        <span>{move || user.get().map(|u| u.email).unwrap_or_default()}</span>
                    </div>

                    <div class="profile-field">
                        <label>"Senha"</label>
                        {move || {
                            if editing_password.get() {
                                view! {
                                    <form class="password-form" on:submit=save_password>
                                        <input
                                            type="password"
                                            class="styled-input"
                                            placeholder="Senha atual"
                                            prop:value=move || current_password.get()
                                            on:input=move |ev| {
                                                let target = ev.target().unwrap();
                                                let input = target
                                                    .dyn_ref::<web_sys::HtmlInputElement>()
                                                    .unwrap();
                                                set_current_password.set(input.value());
                                            }
                                        />
                                        <input
                                            type="password"
                                            class="styled-input"
                                            placeholder="Nova senha"
                                            prop:value=move || new_password.get()
                                            on:input=move |ev| {
                                                let target = ev.target().unwrap();
                                                let input = target
                                                    .dyn_ref::<web_sys::HtmlInputElement>()
                                                    .unwrap();
                                                set_new_password.set(input.value());
                                            }
                                        />
                                        <input
                                            type="password"
                                            class="styled-input"
                                            placeholder="Confirmar nova senha"
                                            prop:value=move || confirm_password.get()
                                            on:input=move |ev| {
                                                let target = ev.target().unwrap();
                                                let input = target
                                                    .dyn_ref::<web_sys::HtmlInputElement>()
                                                    .unwrap();
                                                set_confirm_password.set(input.value());
                                            }
                                        />
                                        <div class="modal-actions-row">
                                            <button type="submit" class="btn-confirm">
                                                "Salvar"
                                            </button>
                                            <button
                                                type="button"
                                                class="btn-cancel"
                                                on:click=move |_| {
                                                    set_current_password.set(String::new());
                                                    set_new_password.set(String::new());
                                                    set_confirm_password.set(String::new());
                                                    set_editing_password.set(false);
                                                }
                                            >
                                                "Cancelar"
                                            </button>
                                        </div>
                                    </form>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="profile-field-row">
                                        <span>"••••••••"</span>
                                        <button
                                            class="btn-link"
                                            on:click=move |_| set_editing_password.set(true)
                                        >
                                            "Alterar senha"
                                        </button>
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                    </div>

                    <div class="danger-zone">
                        <h3>"Zona de perigo"</h3>
                        <p>"Excluir sua conta remove todos os quadros e cartões."</p>
                        <button
                            class="btn-danger"
                            on:click=move |_| set_delete_step_confirm.set(true)
                        >
                            "Excluir conta"
                        </button>
                    </div>
                </div>
            </Show>

            <Show when=move || delete_step_confirm.get()>
                <div class="modal-overlay" on:click=move |_| set_delete_step_confirm.set(false)>
                    <div class="delete-modal-content" on:click=|ev| ev.stop_propagation()>
                        <div class="delete-modal-header">
                            <h2>"Excluir conta"</h2>
                        </div>
                        <div class="delete-modal-body">
                            <p>"Tem certeza que deseja excluir sua conta?"</p>
                            <p class="warning-text">"Esta ação não pode ser desfeita."</p>
                        </div>
                        <div class="delete-modal-actions">
                            <button
                                class="btn-cancel-delete"
                                on:click=move |_| set_delete_step_confirm.set(false)
                            >
                                "Não"
                            </button>
                            <button class="btn-confirm-delete" on:click=request_delete_phrase>
                                "Sim, continuar"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            <Show when=move || delete_step_input.get()>
                <div class="modal-overlay">
                    <div class="delete-modal-content">
                        <div class="delete-modal-header">
                            <h2>"Confirmação final"</h2>
                        </div>
                        <div class="delete-modal-body">
                            <p>"Para excluir sua conta, digite exatamente:"</p>
                            <div class="card-to-delete">
                                <strong>{move || delete_phrase.get()}</strong>
                            </div>
                            <input
                                type="text"
                                class="styled-input"
                                placeholder="Digite a mensagem de confirmação"
                                prop:value=move || delete_input.get()
                                on:input=move |ev| {
                                    let target = ev.target().unwrap();
                                    let input = target
                                        .dyn_ref::<web_sys::HtmlInputElement>()
                                        .unwrap();
                                    set_delete_input.set(input.value());
                                }
                            />
                        </div>
                        <div class="delete-modal-actions">
                            <button
                                class="btn-cancel-delete"
                                on:click=move |_| {
                                    set_delete_step_input.set(false);
                                    set_delete_phrase.set(String::new());
                                    set_delete_input.set(String::new());
                                }
                            >
                                "Cancelar"
                            </button>
                            <button
                                class="btn-confirm-delete"
                                disabled=confirm_blocked
                                on:click=confirm_delete
                            >
                                {move || {
                                    if deleting.get() { "Excluindo..." } else { "Excluir conta" }
                                }}
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::delete_confirm_disabled;

    #[test]
    fn mismatched_phrase_disables_account_deletion() {
        assert!(delete_confirm_disabled(false, "excluir minha", "excluir minha conta"));
        assert!(delete_confirm_disabled(false, "Excluir minha conta", "excluir minha conta"));
        assert!(delete_confirm_disabled(false, "", "excluir minha conta"));
    }

    #[test]
    fn exact_phrase_enables_deletion_until_in_flight() {
        assert!(!delete_confirm_disabled(false, "excluir minha conta", "excluir minha conta"));
        // Input is trimmed before comparison.
        assert!(!delete_confirm_disabled(false, " excluir minha conta ", "excluir minha conta"));
        assert!(delete_confirm_disabled(true, "excluir minha conta", "excluir minha conta"));
    }
}
