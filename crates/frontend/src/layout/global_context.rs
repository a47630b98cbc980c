use leptos::ev;
use leptos::prelude::*;
use web_sys::window;

use crate::routes::app_route::AppRoute;

/// Application-wide UI state: the active screen, kept in sync with the URL hash
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub route: RwSignal<AppRoute>,
}

fn current_hash() -> String {
    window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(AppRoute::from_hash(&current_hash())),
        }
    }

    /// Follow back/forward buttons and hand-edited URLs
    pub fn init_router_integration(&self) {
        let route = self.route;
        let handle = window_event_listener(ev::hashchange, move |_| {
            let next = AppRoute::from_hash(&current_hash());
            if route.get_untracked() != next {
                log::debug!("hash navigation to {:?}", next);
                route.set(next);
            }
        });
        on_cleanup(move || handle.remove());
    }

    pub fn navigate(&self, next: AppRoute) {
        if let Some(w) = window() {
            if current_hash() != next.path() {
                // fires hashchange, which finds the route already set
                let _ = w.location().set_hash(next.path());
            }
        }
        self.route.set(next);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
