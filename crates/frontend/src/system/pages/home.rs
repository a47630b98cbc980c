use leptos::prelude::*;

use crate::layout::global_context::use_global_context;
use crate::routes::app_route::AppRoute;
use crate::system::auth::use_auth;

const SHORTCUTS: [AppRoute; 5] = [
    AppRoute::ItemCategories,
    AppRoute::Items,
    AppRoute::MarketPlaces,
    AppRoute::StockCard,
    AppRoute::StockSummary,
];

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_global_context();
    let session = use_auth().session;

    let welcome = move || {
        session.state.with(|state| match state.claims() {
            Some(claims) => format!("Welcome back, {}", claims.display_name),
            None => "Welcome, guest!".to_string(),
        })
    };

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Marketplace Admin"</h1>
            </div>
            <p class="page__lead">{welcome}</p>
            <div class="shortcuts">
                {SHORTCUTS
                    .into_iter()
                    .map(|route| view! {
                        <button class="shortcut" on:click=move |_| ctx.navigate(route)>
                            {route.title()}
                            {route.requires_auth().then_some(" (sign-in required)")}
                        </button>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
