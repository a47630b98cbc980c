use leptos::prelude::*;

use super::app_route::AppRoute;
use crate::domain::a001_item_category::ItemCategoryList;
use crate::domain::a002_item::ItemList;
use crate::domain::a003_market_place::MarketPlaceList;
use crate::layout::global_context::use_global_context;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;
use crate::system::pages::stock::{StockCardPage, StockSummaryPage};

fn screen(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage redirect_to=AppRoute::Home /> }.into_any(),
        AppRoute::ItemCategories => view! { <ItemCategoryList /> }.into_any(),
        AppRoute::Items => view! { <ItemList /> }.into_any(),
        AppRoute::MarketPlaces => view! { <MarketPlaceList /> }.into_any(),
        AppRoute::StockCard => view! { <StockCardPage /> }.into_any(),
        AppRoute::StockSummary => view! { <StockSummaryPage /> }.into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_global_context();

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell>
            {move || {
                let route = ctx.route.get();
                log::debug!("showing {:?}", route);
                if route.requires_auth() {
                    // stays on the requested route, so the screen replaces the form after login
                    view! {
                        <RequireAuth fallback=|| view! { <LoginPage /> }>
                            {screen(route)}
                        </RequireAuth>
                    }
                    .into_any()
                } else {
                    screen(route)
                }
            }}
        </Shell>
    }
}
