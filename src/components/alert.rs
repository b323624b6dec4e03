//! Inline Alert Banner
//!
//! Success/error notice rendered above forms.

use leptos::prelude::*;

#[component]
pub fn Alert(
    /// "error" or "success"; becomes part of the CSS class.
    #[prop(into)] kind: String,
    #[prop(into)] message: Signal<Option<String>>,
) -> impl IntoView {
    let class = format!("alert alert-{kind}");
    view! {
        {move || message.get().map(|text| {
            view! { <div class=class.clone()>{text}</div> }
        })}
    }
}
