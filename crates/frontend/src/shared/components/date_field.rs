use chrono::NaiveDate;
use leptos::prelude::*;

use crate::shared::date_utils::{format_date_id, parse_date_id};

/// Blank input clears the date, unparsable input is an error
fn read_date(text: &str, today: NaiveDate) -> Result<Option<NaiveDate>, String> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    parse_date_id(text, today)
        .map(Some)
        .ok_or_else(|| format!("\"{}\" is not a valid date", text.trim()))
}

/// Text date input accepting dd/MM/yyyy, dd/MM/yy, dd/MM and yyyy-MM-dd
///
/// The value is normalized to dd/MM/yyyy when the field loses focus.
#[component]
pub fn DateField(
    #[prop(into)] label: String,
    #[prop(optional)] initial: Option<NaiveDate>,
    on_change: Callback<Option<NaiveDate>>,
) -> impl IntoView {
    let text = RwSignal::new(initial.map(format_date_id).unwrap_or_default());
    let error = RwSignal::new(None::<String>);

    let commit = move || {
        let today = chrono::Utc::now().date_naive();
        match read_date(&text.get_untracked(), today) {
            Ok(date) => {
                error.set(None);
                text.set(date.map(format_date_id).unwrap_or_default());
                on_change.run(date);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <input
                type="text"
                class="form__input form__input--date"
                class:form__input--invalid=move || error.with(Option::is_some)
                placeholder="dd/mm/yyyy"
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
                on:blur=move |_| commit()
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        commit();
                    }
                }
            />
            {move || error.get().map(|message| view! { <div class="form__error">{message}</div> })}
        </div>
    }
}
