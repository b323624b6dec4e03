//! Hash Routing
//!
//! Minimal view switching over `location.hash`; boards are addressed by
//! their name slug. A real router stays out of scope.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Top-level views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Auth,
    /// Board view, optionally addressing a board by slug.
    Kanban(Option<String>),
    Profile,
}

/// Parse a `location.hash` value. Unknown hashes yield `None` so the app
/// can pick its default.
pub fn parse_hash(hash: &str) -> Option<Route> {
    let path = hash.trim_start_matches('#');
    let mut segments = path.trim_matches('/').split('/');
    match segments.next() {
        Some("auth") => Some(Route::Auth),
        Some("profile") => Some(Route::Profile),
        Some("kanban") => {
            let slug = segments.next().filter(|s| !s.is_empty()).map(str::to_string);
            Some(Route::Kanban(slug))
        }
        _ => None,
    }
}

pub fn to_hash(route: &Route) -> String {
    match route {
        Route::Auth => "#/auth".to_string(),
        Route::Profile => "#/profile".to_string(),
        Route::Kanban(None) => "#/kanban".to_string(),
        Route::Kanban(Some(slug)) => format!("#/kanban/{slug}"),
    }
}

/// Route signal plus hash write-through.
#[derive(Clone, Copy)]
pub struct Router {
    pub route: ReadSignal<Route>,
    set_route: WriteSignal<Route>,
}

impl Router {
    pub fn new(initial: Route) -> Self {
        let (route, set_route) = signal(initial);
        Router { route, set_route }
    }

    pub fn navigate(&self, route: Route) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(&to_hash(&route));
        }
        self.set_route.set(route);
    }

    /// Like `navigate` but without a history entry (slug corrections).
    pub fn replace(&self, route: Route) {
        if let Some(window) = web_sys::window() {
            let hash = to_hash(&route);
            let _ = window
                .location()
                .replace(&format!("{}{}", window.location().pathname().unwrap_or_default(), hash));
        }
        self.set_route.set(route);
    }
}

/// Current hash at startup.
pub fn current_hash() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

/// Keep the route signal in sync with browser back/forward.
pub fn bind_hashchange(router: Router) {
    use wasm_bindgen::closure::Closure;

    let on_hashchange = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        if let Some(route) = parse_hash(&current_hash()) {
            router.set_route.set(route);
        }
    });

    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("hashchange", on_hashchange.as_ref().unchecked_ref());
    }
    on_hashchange.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_hashes() {
        assert_eq!(parse_hash("#/auth"), Some(Route::Auth));
        assert_eq!(parse_hash("#/profile"), Some(Route::Profile));
        assert_eq!(parse_hash("#/kanban"), Some(Route::Kanban(None)));
        assert_eq!(
            parse_hash("#/kanban/my-board"),
            Some(Route::Kanban(Some("my-board".into())))
        );
        assert_eq!(parse_hash(""), None);
        assert_eq!(parse_hash("#/elsewhere"), None);
    }

    #[test]
    fn hash_round_trips() {
        for route in [
            Route::Auth,
            Route::Profile,
            Route::Kanban(None),
            Route::Kanban(Some("sprint-42".into())),
        ] {
            assert_eq!(parse_hash(&to_hash(&route)), Some(route));
        }
    }
}
