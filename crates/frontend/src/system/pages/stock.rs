use chrono::NaiveDate;
use contracts::domain::a002_item::aggregate::Item;
use leptos::prelude::*;

use crate::shared::components::browse_modal::browse_modal;
use crate::shared::components::date_field::DateField;
use crate::shared::date_utils::format_date_id;
use crate::shared::icons::icon;

/// Reporting period picked on the stock screens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StockPeriod {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl StockPeriod {
    pub fn check(&self) -> Result<(), String> {
        match (self.from, self.to) {
            (None, _) | (_, None) => Err("Choose both period dates".to_string()),
            (Some(from), Some(to)) if from > to => {
                Err("The period start is after its end".to_string())
            }
            _ => Ok(()),
        }
    }

    pub fn describe(&self) -> String {
        let show = |date: Option<NaiveDate>| date.map(format_date_id).unwrap_or_else(|| "...".into());
        format!("{} - {}", show(self.from), show(self.to))
    }
}

fn period_fields(period: RwSignal<StockPeriod>) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <DateField
                label="From"
                on_change=Callback::new(move |date| period.update(|p| p.from = date))
            />
            <DateField
                label="To"
                on_change=Callback::new(move |date| period.update(|p| p.to = date))
            />
        </div>
    }
}

fn period_status(period: RwSignal<StockPeriod>) -> impl IntoView {
    move || match period.with(StockPeriod::check) {
        Ok(()) => view! { <div class="info-box">{format!("Period {}", period.with(StockPeriod::describe))}</div> }.into_any(),
        Err(message) => view! { <div class="warning-box">{message}</div> }.into_any(),
    }
}

/// Movements of one item over a period
#[component]
pub fn StockCardPage() -> impl IntoView {
    let period = RwSignal::new(StockPeriod::default());
    let item = RwSignal::new(None::<Item>);
    let browsing = RwSignal::new(false);

    let on_select = Callback::new(move |picked: Item| {
        item.set(Some(picked));
        browsing.set(false);
    });
    let on_close = Callback::new(move |_| browsing.set(false));

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Stock Card"</h1>
            </div>
            <div class="filter-panel">
                <span class="filter-panel__value">
                    {move || item.with(|i| match i {
                        Some(i) => format!("{} {}", i.code, i.name),
                        None => "No item selected".to_string(),
                    })}
                </span>
                <button class="button button--secondary" on:click=move |_| browsing.set(true)>
                    {icon("search")}
                    "Choose item"
                </button>
            </div>
            {period_fields(period)}
            {period_status(period)}
            {move || browsing.get().then(|| browse_modal::<Item>(on_select, on_close))}
        </div>
    }
}

/// Stock totals of all items over a period
#[component]
pub fn StockSummaryPage() -> impl IntoView {
    let period = RwSignal::new(StockPeriod::default());

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">"Stock Summary"</h1>
            </div>
            {period_fields(period)}
            {period_status(period)}
        </div>
    }
}
