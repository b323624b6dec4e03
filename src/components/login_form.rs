//! Login Form
//!
//! Validates locally before the network call and rephrases backend
//! credential errors into friendlier copy.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::validation::validate_login;

use super::Alert;

/// Map backend credential messages onto the wording shown to the user.
fn phrase_login_error(message: &str) -> String {
    if message.contains("Credenciais inválidas") || message.contains("Bad credentials") {
        "🔒 Email ou senha incorretos. Verifique suas credenciais e tente novamente.".to_string()
    } else if message.contains("Usuário não encontrado") || message.contains("not found") {
        "👤 Usuário não encontrado. Verifique seu email ou crie uma conta.".to_string()
    } else if message.contains("Email ou senha incorretos") {
        "🔐 Email ou senha incorretos. Verifique suas credenciais e tente novamente.".to_string()
    } else if message.is_empty() {
        "❌ Erro ao fazer login. Tente novamente em alguns instantes.".to_string()
    } else {
        format!("❌ {message}")
    }
}

#[component]
pub fn LoginForm(
    #[prop(into)] on_login: Callback<()>,
    #[prop(into)] on_toggle: Callback<()>,
) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        if let Some(message) = validate_login(&email_value, &password_value) {
            set_error.set(Some(message));
            return;
        }
        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            let api = ctx.api();
            match api
                .login(&email_value.trim().to_lowercase(), &password_value)
                .await
            {
                Ok(_) => on_login.run(()),
                Err(err) => {
                    web_sys::console::error_1(&format!("Erro no login: {err}").into());
                    set_error.set(Some(phrase_login_error(&err.message())));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="form-header">
            <h3>"Entrar"</h3>
            <p>"Entre com suas credenciais"</p>
        </div>
        <form class="login-form" on:submit=submit>
            <Alert kind="error" message=error />
            <div class="form-group">
                <label for="email">"E-mail *"</label>
                <input
                    id="email"
                    type="email"
                    placeholder="Digite seu e-mail"
                    disabled=loading
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_email.set(input.value());
                        set_error.set(None);
                    }
                />
            </div>
            <div class="form-group">
                <label for="password">"Senha *"</label>
                <input
                    id="password"
                    type="password"
                    placeholder="Digite sua senha"
                    disabled=loading
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_password.set(input.value());
                        set_error.set(None);
                    }
                />
            </div>
            <button type="submit" class="submit-btn" disabled=loading>
                {move || if loading.get() { "🔄 Entrando..." } else { "🔑 Entrar" }}
            </button>
            <div class="toggle-mode">
                <p>
                    "Não tem uma conta? "
                    <button type="button" class="toggle-btn" on:click=move |_| on_toggle.run(())>
                        "Cadastre-se"
                    </button>
                </p>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::phrase_login_error;

    #[test]
    fn known_backend_messages_get_friendly_copy() {
        assert!(phrase_login_error("Bad credentials").starts_with("🔒"));
        assert!(phrase_login_error("Usuário não encontrado").starts_with("👤"));
        assert!(phrase_login_error("Email ou senha incorretos").starts_with("🔐"));
    }

    #[test]
    fn unknown_messages_pass_through_prefixed() {
        assert_eq!(phrase_login_error("Conta bloqueada"), "❌ Conta bloqueada");
        assert!(phrase_login_error("").contains("Erro ao fazer login"));
    }
}
