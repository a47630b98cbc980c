use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::use_global_context;
use crate::routes::app_route::AppRoute;
use crate::system::auth::{use_auth, SessionStore};

/// Sign-in form
///
/// With `redirect_to` set the app moves there after a successful login; without it
/// the page stays where it is, which lets a private screen replace the form in place.
#[component]
pub fn LoginPage(#[prop(optional)] redirect_to: Option<AppRoute>) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);

    let client = StoredValue::new(use_auth().client);
    let ctx = use_global_context();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get_untracked();
        let password_val = password.get_untracked();
        let client = client.get_value();

        is_loading.set(true);
        error_message.set(None);

        spawn_local(async move {
            let failure = match client.login(&username_val, &password_val).await {
                Ok(()) if client.session().is_authenticated() => {
                    if let Some(route) = redirect_to {
                        ctx.navigate(route);
                    }
                    return;
                }
                Ok(()) => "The server returned an unusable token".to_string(),
                Err(e) => e.to_string(),
            };
            // the page may have been replaced while the request was running
            let _ = is_loading.try_set(false);
            let _ = error_message.try_set(Some(failure));
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Marketplace Admin"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
