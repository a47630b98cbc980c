use leptos::prelude::*;

use super::context::use_auth;

/// Renders `children` only for an authenticated session, `fallback` otherwise
#[component]
pub fn RequireAuth(#[prop(into)] fallback: ViewFn, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.is_authenticated()
            fallback=fallback
        >
            {children()}
        </Show>
    }
}
