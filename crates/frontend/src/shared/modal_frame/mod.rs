use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

fn is_on_overlay(ev: &ev::MouseEvent) -> bool {
    match (ev.target(), ev.current_target()) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

/// Overlay with a titled dialog surface.
///
/// Closes on the header button, on Escape, and on a click that both starts and
/// ends on the overlay (a text selection dragged out of the dialog does not close it).
#[component]
pub fn ModalFrame(
    #[prop(into)] title: Signal<String>,
    on_close: Callback<()>,
    /// Extra class for the dialog surface
    #[prop(optional, into)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let pressed_on_overlay = RwSignal::new(false);

    // the overlay is removed by the close handler, so leave the click dispatch first
    let close_deferred = move || {
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            close_deferred();
        }
    });
    on_cleanup(move || escape.remove());

    let surface_class = match modal_class {
        Some(extra) => format!("modal {extra}"),
        None => "modal".to_string(),
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=move |ev| pressed_on_overlay.set(is_on_overlay(&ev))
            on:click=move |ev| {
                let close = pressed_on_overlay.get_untracked() && is_on_overlay(&ev);
                pressed_on_overlay.set(false);
                if close {
                    close_deferred();
                }
            }
        >
            <div class=surface_class on:click=|ev| ev.stop_propagation()>
                <div class="modal__header">
                    <h2 class="modal__title">{move || title.get()}</h2>
                    <button class="modal__close" title="Close" on:click=move |_| close_deferred()>
                        {crate::shared::icons::icon("x")}
                    </button>
                </div>
                <div class="modal__body">{children()}</div>
            </div>
        </div>
    }
}
