use leptos::prelude::*;

use super::global_context::use_global_context;
use crate::routes::app_route::AppRoute;
use crate::shared::icons::icon;
use crate::system::auth::{use_auth, SessionState, SessionStore};

const MASTER_MENU: [(AppRoute, &str); 3] = [
    (AppRoute::ItemCategories, "categories"),
    (AppRoute::Items, "items"),
    (AppRoute::MarketPlaces, "market-places"),
];

const STOCK_MENU: [(AppRoute, &str); 2] = [
    (AppRoute::StockCard, "stock"),
    (AppRoute::StockSummary, "stock"),
];

/// "Administrator [admin]" for a signed-in user
fn greeting(state: &SessionState) -> Option<String> {
    state
        .claims()
        .map(|claims| format!("{} [{}]", claims.display_name, claims.subject))
}

#[component]
fn NavLink(route: AppRoute, #[prop(optional)] icon_name: Option<&'static str>) -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <a
            href=route.path()
            class="nav__link"
            class:nav__link--active=move || ctx.route.get() == route
            on:click=move |ev| {
                ev.prevent_default();
                ctx.navigate(route);
            }
        >
            {icon_name.map(icon)}
            <span>{route.title()}</span>
        </a>
    }
}

fn menu(title: &'static str, entries: &'static [(AppRoute, &'static str)]) -> impl IntoView {
    view! {
        <div class="nav__menu">
            <span class="nav__menu-title">{title} {icon("chevron-down")}</span>
            <div class="nav__dropdown">
                {entries
                    .iter()
                    .map(|(route, icon_name)| view! { <NavLink route=*route icon_name=*icon_name /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let session = auth.session;

    view! {
        <nav class="nav">
            <NavLink route=AppRoute::Home />
            {menu("Master", &MASTER_MENU)}
            {menu("Stock", &STOCK_MENU)}
            <div class="nav__user">
                {move || match session.state.with(greeting) {
                    Some(text) => view! {
                        <span class="nav__user-name">{text}</span>
                        <button class="button button--secondary" on:click=move |_| session.logout()>
                            {icon("log-out")}
                            "Logout"
                        </button>
                    }
                    .into_any(),
                    None => view! {
                        <span class="nav__user-name">"Welcome, guest!"</span>
                        <NavLink route=AppRoute::Login icon_name="log-in" />
                    }
                    .into_any(),
                }}
            </div>
        </nav>
    }
}
