//! Auth Page
//!
//! Login/sign-up toggle. Either success lands on the board view.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::route::Route;

use super::{LoginForm, SignUpForm};

#[component]
pub fn AuthPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let (signup_mode, set_signup_mode) = signal(false);

    let enter_app = move |_| ctx.router.navigate(Route::Kanban(None));
    let toggle = move |_| set_signup_mode.update(|mode| *mode = !*mode);

    view! {
        <div class="auth-page">
            <div class="auth-panel">
                <div class="auth-welcome">
                    <h2>
                        {move || {
                            if signup_mode.get() { "Crie sua conta" } else { "Bem-vindo de volta!" }
                        }}
                    </h2>
                    <p>
                        {move || {
                            if signup_mode.get() {
                                "Comece a organizar suas tarefas de forma inteligente"
                            } else {
                                "Entre para continuar gerenciando suas tarefas"
                            }
                        }}
                    </p>
                </div>
                {move || {
                    if signup_mode.get() {
                        view! { <SignUpForm on_signup=enter_app on_toggle=toggle /> }.into_any()
                    } else {
                        view! { <LoginForm on_login=enter_app on_toggle=toggle /> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
