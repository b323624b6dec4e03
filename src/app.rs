//! Application Root
//!
//! Builds the session, API client, router and board controller once,
//! provides them as context, and switches between the three screens.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::board::BoardController;
use crate::components::{AuthPage, KanbanPage, ProfilePage};
use crate::context::AppContext;
use crate::route::{bind_hashchange, current_hash, parse_hash, Route, Router};
use crate::session::SessionStore;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Screen {
    Auth,
    Kanban,
    Profile,
}

#[component]
pub fn App() -> impl IntoView {
    let session = SessionStore::new();
    let api = ApiClient::new(session);

    let initial = parse_hash(&current_hash()).unwrap_or_else(|| {
        if session.is_authenticated() {
            Route::Kanban(None)
        } else {
            Route::Auth
        }
    });
    let router = Router::new(initial);
    bind_hashchange(router);

    let ctx = AppContext::new(api.clone(), router);
    provide_context(ctx);
    provide_context(BoardController::new(api));

    // Memoized so slug-only changes do not remount the board view.
    let screen = Memo::new(move |_| match ctx.router.route.get() {
        Route::Auth => Screen::Auth,
        Route::Kanban(_) => {
            if ctx.api().session().is_authenticated() {
                Screen::Kanban
            } else {
                Screen::Auth
            }
        }
        Route::Profile => Screen::Profile,
    });

    view! {
        <main class="app">
            {move || match screen.get() {
                Screen::Auth => view! { <AuthPage /> }.into_any(),
                Screen::Kanban => view! { <KanbanPage /> }.into_any(),
                Screen::Profile => view! { <ProfilePage /> }.into_any(),
            }}
        </main>
    }
}
