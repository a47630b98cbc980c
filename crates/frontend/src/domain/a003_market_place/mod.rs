use contracts::domain::a003_market_place::aggregate::MarketPlace;
use leptos::prelude::*;

use crate::shared::entity::schema::optional_text;
use crate::shared::entity::{
    entity_list_page, ColumnSpec, EntitySchema, FieldKind, FieldSpec, FieldValue,
};

impl EntitySchema for MarketPlace {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("name", "Name", FieldKind::Text).required(),
        FieldSpec::new("description", "Description", FieldKind::TextArea),
        FieldSpec::new("isActive", "Active", FieldKind::Checkbox),
    ];

    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec { key: "name", label: "Name" },
        ColumnSpec { key: "description", label: "Description" },
        ColumnSpec { key: "isActive", label: "Active" },
    ];

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "name" => FieldValue::Text(self.name.clone()),
            "description" => FieldValue::Text(self.description.clone().unwrap_or_default()),
            "isActive" => FieldValue::Flag(self.is_active),
            _ => FieldValue::Reference(self.id),
        }
    }

    fn set_field(&mut self, key: &str, value: FieldValue) {
        match key {
            "name" => self.name = value.as_text().trim().to_string(),
            "description" => self.description = optional_text(&value),
            "isActive" => self.is_active = value.as_flag(),
            _ => log::warn!("market place has no editable field {key}"),
        }
    }
}

#[component]
pub fn MarketPlaceList() -> impl IntoView {
    entity_list_page::<MarketPlace>()
}
