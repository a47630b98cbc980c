use contracts::domain::common::SaveResponse;
use contracts::shared::list_query::LookupOption;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::schema::{EditorMode, EntitySchema, FieldKind, FieldSpec, FieldValue};
use crate::shared::disposal::AliveFlag;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::system::auth::{use_auth, AppClient};

fn dialog_title<E: EntitySchema>(mode: EditorMode) -> String {
    match mode {
        EditorMode::Insert => format!("New {}", E::element_name()),
        EditorMode::Update => format!("Edit {}", E::element_name()),
    }
}

/// Loads the options of a lookup select once, when the dialog opens
fn load_options(client: AppClient, source: &'static str, options: RwSignal<Vec<LookupOption>>) {
    let alive = AliveFlag::for_owner();
    spawn_local(async move {
        let result = client.get_json::<Vec<LookupOption>>(source, None).await;
        if !alive.is_alive() {
            return;
        }
        match result {
            Ok(list) => options.set(list),
            Err(e) => log::warn!("failed to load options from {}: {}", source, e),
        }
    });
}

fn field_input<E: EntitySchema>(
    field: FieldSpec,
    form: RwSignal<E>,
    client: &AppClient,
) -> AnyView {
    let key = field.key;
    let kind = field.kind;
    let initial = form.with_untracked(|record| record.field(key));
    let set = move |input: String| {
        form.update(|record| record.set_field(key, FieldValue::from_input(kind, &input)))
    };

    match kind {
        FieldKind::Text => view! {
            <input
                type="text"
                class="form__input"
                id=key
                value=initial.display()
                on:input=move |ev| set(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::TextArea => view! {
            <textarea
                class="form__textarea"
                id=key
                rows="3"
                prop:value=initial.display()
                on:input=move |ev| set(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        FieldKind::Number => view! {
            <input
                type="number"
                step="any"
                class="form__input"
                id=key
                value=initial.display()
                on:input=move |ev| set(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Checkbox => view! {
            <input
                type="checkbox"
                class="form__checkbox"
                id=key
                prop:checked=initial.as_flag()
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    form.update(|record| record.set_field(key, FieldValue::Flag(checked)))
                }
            />
        }
        .into_any(),
        FieldKind::Lookup { source } => {
            let options = RwSignal::new(Vec::<LookupOption>::new());
            load_options(client.clone(), source, options);
            let selected = match initial {
                FieldValue::Reference(id) => id,
                _ => None,
            };
            view! {
                <select class="form__select" id=key on:change=move |ev| set(event_target_value(&ev))>
                    <option value="" selected=selected.is_none()>"-- select --"</option>
                    {move || {
                        options
                            .get()
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <option
                                        value=option.id.to_string()
                                        selected=selected == Some(option.id)
                                    >
                                        {option.name}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            }
            .into_any()
        }
    }
}

/// Create/edit dialog for one record of `E`
///
/// On a successful save `on_saved` receives the record returned by the backend
/// together with the mode the dialog was opened in.
pub fn entity_editor<E: EntitySchema>(
    record: E,
    on_saved: Callback<(E, EditorMode)>,
    on_close: Callback<()>,
) -> impl IntoView {
    let auth = use_auth();
    let client = StoredValue::new(auth.client.clone());
    let alive = StoredValue::new(AliveFlag::for_owner());

    let mode = EditorMode::of(&record);
    let form = RwSignal::new(record);
    let field_errors = RwSignal::new(ValidationErrors::new());
    let error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let save = move || {
        let current = form.get_untracked();
        if let Err(errors) = current.validate() {
            log::debug!("{} form invalid: {}", E::element_name(), errors);
            field_errors.set(errors);
            return;
        }
        field_errors.set(ValidationErrors::new());
        error.set(None);
        saving.set(true);

        let client = client.get_value();
        let alive = alive.get_value();
        spawn_local(async move {
            let result = client
                .post_json::<E, SaveResponse<E>>(&E::save_path(), &current)
                .await;
            if !alive.is_alive() {
                return;
            }
            saving.set(false);
            match result
                .map_err(|e| e.to_string())
                .and_then(SaveResponse::into_result)
            {
                Ok(saved) => {
                    log::info!(
                        "saved {} {:?} '{}'",
                        E::element_name(),
                        saved.id(),
                        saved.display_name()
                    );
                    on_saved.run((saved, mode));
                }
                Err(message) => {
                    log::warn!("failed to save {}: {}", E::element_name(), message);
                    error.set(Some(message));
                }
            }
        });
    };

    let fields = client.with_value(|client| {
        E::FIELDS
            .iter()
            .map(|field| {
                let key = field.key;
                let label = if field.required {
                    format!("{} *", field.label)
                } else {
                    field.label.to_string()
                };
                view! {
                    <div class="form__group">
                        <label class="form__label" for=key>{label}</label>
                        {field_input(*field, form, client)}
                        {move || {
                            field_errors
                                .with(|errors| errors.for_field(key).map(str::to_string))
                                .map(|message| view! { <div class="form__error">{message}</div> })
                        }}
                    </div>
                }
            })
            .collect_view()
    });

    view! {
        <ModalFrame title={dialog_title::<E>(mode)} on_close=on_close modal_class="entity-editor">
            <form
                class="form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    save();
                }
            >
                {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}
                {fields}
                <div class="form__actions">
                    <button type="submit" class="button button--primary" disabled=move || saving.get()>
                        {icon("save")}
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </ModalFrame>
    }
}
