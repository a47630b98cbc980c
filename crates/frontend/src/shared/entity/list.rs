use leptos::prelude::*;
use leptos::task::spawn_local;

use super::editor::entity_editor;
use super::schema::{apply_saved, EditorMode, EntitySchema};
use crate::shared::components::pagination_controls::Paginate;
use crate::shared::config::use_config;
use crate::shared::disposal::{AliveFlag, LatestRequest};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_list, sort_list, SearchInput, SortState};
use crate::shared::pagination::{page_window, PageChange};
use crate::layout::global_context::use_global_context;
use crate::routes::app_route::AppRoute;
use crate::system::auth::use_auth;

/// Searchable, sortable and paged table of `E` with a create/edit dialog
pub fn entity_list_page<E: EntitySchema>() -> impl IntoView {
    let auth = use_auth();
    let global = use_global_context();
    let page_size = use_config().page_size;
    let client = StoredValue::new(auth.client.clone());
    let alive = StoredValue::new(AliveFlag::for_owner());
    let latest = StoredValue::new(LatestRequest::new());

    let rows = RwSignal::new(Vec::<E>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let login_needed = RwSignal::new(false);
    let filter = RwSignal::new(String::new());
    let sort = RwSignal::new(SortState::new(E::default_sort()));
    let page = RwSignal::new(1usize);
    let editing = RwSignal::new(None::<E>);

    let load = move || {
        let client = client.get_value();
        let alive = alive.get_value();
        let latest = latest.get_value();
        let ticket = latest.begin();
        loading.set(true);
        error.set(None);
        login_needed.set(false);
        spawn_local(async move {
            let result = client.get_json::<Vec<E>>(&E::list_path(), None).await;
            if !alive.is_alive() {
                log::debug!("{} response dropped, view closed", E::list_path());
                return;
            }
            if !latest.is_latest(ticket) {
                log::debug!("{} response dropped, superseded", E::list_path());
                return;
            }
            loading.set(false);
            match result {
                Ok(list) => {
                    log::debug!("loaded {} {}", list.len(), E::list_name());
                    rows.set(list);
                }
                Err(e) => {
                    log::warn!("failed to load {}: {}", E::list_name(), e);
                    login_needed.set(e.requires_login());
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    load();

    let visible = Memo::new(move |_| {
        let mut list = filter_list(rows.get(), &filter.get());
        sort.with(|s| sort_list(&mut list, s));
        list
    });
    let total = Signal::derive(move || visible.with(Vec::len));
    let page_rows = Memo::new(move |_| {
        let window = page_window(page.get(), page_size, total.get());
        visible.with(|list| list[window.start..window.end].to_vec())
    });

    let on_saved = Callback::new(move |(saved, mode): (E, EditorMode)| {
        rows.update(|list| apply_saved(list, saved, mode));
        editing.set(None);
    });
    let on_close = Callback::new(move |_| editing.set(None));

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{E::list_name()}</h1>
                </div>
                <div class="header__actions">
                    <SearchInput
                        value=filter
                        on_change=Callback::new(move |text: String| {
                            filter.set(text);
                            page.set(1);
                        })
                    />
                    <button
                        class="button button--primary"
                        on:click=move |_| editing.set(Some(E::default()))
                    >
                        {icon("plus")}
                        {format!("New {}", E::element_name())}
                    </button>
                    <button
                        class="button button--secondary"
                        disabled=move || loading.get()
                        on:click=move |_| load()
                    >
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                    <Show when=move || login_needed.get()>
                        <a
                            href={AppRoute::Login.path()}
                            class="warning-box__action"
                            on:click=move |ev| {
                                ev.prevent_default();
                                global.navigate(AppRoute::Login);
                            }
                        >
                            "Log in"
                        </a>
                    </Show>
                </div>
            })}

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {E::COLUMNS
                                .iter()
                                .map(|column| {
                                    let key = column.key;
                                    view! {
                                        <th
                                            class="table__header-cell table__header-cell--sortable"
                                            on:click=move |_| sort.update(|s| s.toggle(key))
                                        >
                                            {column.label}
                                            {move || sort.with(|s| s.indicator(key))}
                                        </th>
                                    }
                                })
                                .collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            page_rows
                                .get()
                                .into_iter()
                                .map(|row| {
                                    let inactive = !row.is_active();
                                    let cells = E::COLUMNS
                                        .iter()
                                        .map(|column| view! { <td class="table__cell">{row.cell(column.key)}</td> })
                                        .collect_view();
                                    view! {
                                        <tr
                                            class="table__row"
                                            class:table__row--inactive=inactive
                                            on:click=move |_| editing.set(Some(row.clone()))
                                        >
                                            {cells}
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || !loading.get() && total.get() == 0>
                    <div class="table__empty">"No records"</div>
                </Show>
            </div>

            <Paginate
                page=page
                total_count=total
                page_size=page_size
                on_change=Callback::new(move |change: PageChange| page.set(change.page))
            />

            {move || editing.get().map(|record| entity_editor(record, on_saved, on_close))}
        </div>
    }
}
