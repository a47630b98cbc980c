pub mod global_context;
pub mod navbar;

use leptos::prelude::*;
use navbar::Navbar;

/// Top navigation bar above the active screen
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Navbar />
            <main class="app-content">{children()}</main>
        </div>
    }
}
