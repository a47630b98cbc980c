use contracts::shared::list_query::ListQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::config::use_config;
use crate::shared::disposal::AliveFlag;
use crate::shared::entity::EntitySchema;
use crate::shared::list_utils::SearchInput;
use crate::shared::modal_frame::ModalFrame;
use crate::system::auth::use_auth;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingState {
    /// Nothing loaded, or the last search failed
    Empty,
    Loading,
    /// More rows may be available
    Loaded,
    /// The last batch was shorter than the limit
    FullyLoaded,
}

/// A batch request issued by [`BrowseState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    pub generation: u64,
    pub query: ListQuery,
}

/// Rows of the browse dialog and where the next batch starts
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseState<T> {
    pub rows: Vec<T>,
    pub loading: LoadingState,
    search: String,
    limit: usize,
    /// Bumped by every search so responses of a replaced search are dropped
    generation: u64,
}

impl<T> BrowseState<T> {
    pub fn new(limit: usize) -> Self {
        Self {
            rows: Vec::new(),
            loading: LoadingState::Empty,
            search: String::new(),
            limit: limit.max(1),
            generation: 0,
        }
    }

    /// Start over with a new search term
    pub fn start_search(&mut self, search: &str) -> BatchRequest {
        self.generation += 1;
        self.search = search.trim().to_string();
        self.rows.clear();
        self.loading = LoadingState::Loading;
        BatchRequest {
            generation: self.generation,
            query: ListQuery::search(self.search.clone(), self.limit),
        }
    }

    /// Next batch after the loaded rows; `None` unless more rows may exist
    pub fn start_more(&mut self) -> Option<BatchRequest> {
        if self.loading != LoadingState::Loaded {
            return None;
        }
        self.loading = LoadingState::Loading;
        Some(BatchRequest {
            generation: self.generation,
            query: ListQuery::search(self.search.clone(), self.limit).with_offset(self.rows.len()),
        })
    }

    /// Apply a batch; returns false when it belongs to a replaced search
    pub fn finish(&mut self, generation: u64, batch: Vec<T>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = if batch.len() < self.limit {
            LoadingState::FullyLoaded
        } else {
            LoadingState::Loaded
        };
        self.rows.extend(batch);
        true
    }

    /// A failed search leaves nothing, a failed "more" keeps what was loaded
    pub fn fail(&mut self, generation: u64) {
        if generation != self.generation {
            return;
        }
        self.loading = if self.rows.is_empty() {
            LoadingState::Empty
        } else {
            LoadingState::Loaded
        };
    }

    pub fn can_load_more(&self) -> bool {
        self.loading == LoadingState::Loaded
    }
}

/// Searchable lookup dialog over the list endpoint of `E`
///
/// Rows come in batches of the configured lookup limit; clicking a row passes it
/// to `on_select`, which is expected to close the dialog.
pub fn browse_modal<E: EntitySchema>(
    on_select: Callback<E>,
    on_close: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let client = StoredValue::new(auth.client.clone());
    let alive = StoredValue::new(AliveFlag::for_owner());
    let state = RwSignal::new(BrowseState::<E>::new(use_config().lookup_limit));
    let search = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let fetch = move |request: BatchRequest| {
        let client = client.get_value();
        let alive = alive.get_value();
        error.set(None);
        spawn_local(async move {
            let result = client
                .get_json::<Vec<E>>(&E::list_path(), Some(&request.query))
                .await;
            if !alive.is_alive() {
                return;
            }
            match result {
                Ok(batch) => {
                    let applied = state
                        .try_update(|s| s.finish(request.generation, batch))
                        .unwrap_or(false);
                    if !applied {
                        log::debug!("stale {} batch dropped", E::list_path());
                    }
                }
                Err(e) => {
                    log::warn!("browse {} failed: {}", E::list_path(), e);
                    state.update(|s| s.fail(request.generation));
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let run_search = move |text: String| {
        search.set(text.clone());
        if let Some(request) = state.try_update(|s| s.start_search(&text)) {
            fetch(request);
        }
    };

    let load_more = move |_: leptos::ev::MouseEvent| {
        if let Some(request) = state.try_update(|s| s.start_more()).flatten() {
            fetch(request);
        }
    };

    run_search(String::new());

    view! {
        <ModalFrame title=format!("Select {}", E::element_name()) on_close=on_close modal_class="browse-modal">
            <SearchInput value=search on_change=Callback::new(run_search) />

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        {E::COLUMNS
                            .iter()
                            .map(|column| view! { <th class="table__header-cell">{column.label}</th> })
                            .collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        state
                            .with(|s| s.rows.clone())
                            .into_iter()
                            .map(|row| {
                                let hint = row.display_name().to_string();
                                let cells = E::COLUMNS
                                    .iter()
                                    .map(|column| view! { <td class="table__cell">{row.cell(column.key)}</td> })
                                    .collect_view();
                                view! {
                                    <tr class="table__row" title=hint on:click=move |_| on_select.run(row.clone())>
                                        {cells}
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>

            {move || match state.with(|s| s.loading) {
                LoadingState::Empty => view! { <div class="table__empty">"No records"</div> }.into_any(),
                LoadingState::Loading => view! { <div class="loading">"Loading..."</div> }.into_any(),
                LoadingState::Loaded => view! {
                    <button class="button button--secondary" on:click=load_more>"More"</button>
                }
                .into_any(),
                LoadingState::FullyLoaded => ().into_any(),
            }}
        </ModalFrame>
    }
}
