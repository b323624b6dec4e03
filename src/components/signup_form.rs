//! Sign-up Form
//!
//! Strength rules are shown as the user types; the email is checked for
//! prior registration before the account is created.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::validation::{is_valid_email, password_requirements};

use super::Alert;

#[component]
pub fn SignUpForm(
    #[prop(into)] on_signup: Callback<()>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let missing_rules = move || password_requirements(&password.get());

    let bind_input = move |setter: WriteSignal<String>| {
        move |ev: web_sys::Event| {
            let target = ev.target().unwrap();
            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
            setter.set(input.value());
            set_error.set(None);
        }
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get_untracked().trim().to_string();
        let email_value = email.get_untracked().trim().to_lowercase();
        let password_value = password.get_untracked();
        let confirm_value = confirm.get_untracked();

        if name_value.is_empty() {
            set_error.set(Some("Por favor, digite seu nome.".to_string()));
            return;
        }
        if !is_valid_email(&email_value) {
            set_error.set(Some("Por favor, digite um email válido.".to_string()));
            return;
        }
        let missing = password_requirements(&password_value);
        if !missing.is_empty() {
            set_error.set(Some(format!("A senha deve conter: {}.", missing.join(", "))));
            return;
        }
        if password_value != confirm_value {
            set_error.set(Some("As senhas não coincidem.".to_string()));
            return;
        }

        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let api = ctx.api();
            match api.check_email(&email_value).await {
                Ok(check) if check.exists => {
                    set_error.set(Some(
                        "Este email já está cadastrado. Faça login ou use outro email.".to_string(),
                    ));
                    set_loading.set(false);
                    return;
                }
                // Registration still runs; the backend repeats the check.
                Ok(_) | Err(_) => {}
            }
            match api
                .register(&name_value, &email_value, &password_value, &confirm_value)
                .await
            {
                Ok(_) => on_signup.run(()),
                Err(err) => {
                    web_sys::console::error_1(&format!("Erro no cadastro: {err}").into());
                    set_error.set(Some(err.message()));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="form-header">
            <h3>"Cadastrar"</h3>
            <p>"Crie sua conta para começar"</p>
        </div>
        <form class="login-form" on:submit=submit>
            <Alert kind="error" message=error />
            <div class="form-group">
                <label for="signup-name">"Nome *"</label>
                <input
                    id="signup-name"
                    type="text"
                    placeholder="Digite seu nome"
                    disabled=loading
                    prop:value=move || name.get()
                    on:input=bind_input(set_name)
                />
            </div>
            <div class="form-group">
                <label for="signup-email">"E-mail *"</label>
                <input
                    id="signup-email"
                    type="email"
                    placeholder="Digite seu e-mail"
                    disabled=loading
                    prop:value=move || email.get()
                    on:input=bind_input(set_email)
                />
            </div>
            <div class="form-group">
                <label for="signup-password">"Senha *"</label>
                <input
                    id="signup-password"
                    type="password"
                    placeholder="Crie uma senha forte"
                    disabled=loading
                    prop:value=move || password.get()
                    on:input=bind_input(set_password)
                />
                {move || {
                    let missing = missing_rules();
                    (!password.get().is_empty() && !missing.is_empty()).then(|| {
                        view! {
                            <div class="password-requirements">
                                <span>"Ainda falta: "</span>
                                {missing.join(", ")}
                            </div>
                        }
                    })
                }}
            </div>
            <div class="form-group">
                <label for="signup-confirm">"Confirmar senha *"</label>
                <input
                    id="signup-confirm"
                    type="password"
                    placeholder="Repita a senha"
                    disabled=loading
                    prop:value=move || confirm.get()
                    on:input=bind_input(set_confirm)
                />
            </div>
            <button type="submit" class="submit-btn" disabled=loading>
                {move || if loading.get() { "🔄 Cadastrando..." } else { "✨ Criar conta" }}
            </button>
            <div class="toggle-mode">
                <p>
                    "Já tem uma conta? "
                    <button type="button" class="toggle-btn" on:click=move |_| on_toggle.run(())>
                        "Entrar"
                    </button>
                </p>
            </div>
        </form>
    }
}
