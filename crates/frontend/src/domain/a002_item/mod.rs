use contracts::domain::a002_item::aggregate::Item;
use leptos::prelude::*;

use crate::shared::entity::schema::optional_text;
use crate::shared::entity::{
    entity_list_page, ColumnSpec, EntitySchema, FieldKind, FieldSpec, FieldValue,
};

/// Categories offered in the item editor
const CATEGORY_SOURCE: &str = "/item/category/list";

impl EntitySchema for Item {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("code", "Code", FieldKind::Text).required(),
        FieldSpec::new("name", "Name", FieldKind::Text).required(),
        FieldSpec::new(
            "categoryId",
            "Category",
            FieldKind::Lookup {
                source: CATEGORY_SOURCE,
            },
        )
        .required(),
        FieldSpec::new("sellingPrice", "Selling price", FieldKind::Number),
        FieldSpec::new("description", "Description", FieldKind::TextArea),
        FieldSpec::new("isActive", "Active", FieldKind::Checkbox),
    ];

    const COLUMNS: &'static [ColumnSpec] = &[
        ColumnSpec { key: "code", label: "Code" },
        ColumnSpec { key: "name", label: "Name" },
        ColumnSpec { key: "category", label: "Category" },
        ColumnSpec { key: "sellingPrice", label: "Selling price" },
        ColumnSpec { key: "isActive", label: "Active" },
    ];

    fn field(&self, key: &str) -> FieldValue {
        match key {
            "code" => FieldValue::Text(self.code.clone()),
            "name" => FieldValue::Text(self.name.clone()),
            "categoryId" => FieldValue::Reference(self.category_id),
            "category" => FieldValue::Text(self.category_name().to_string()),
            "sellingPrice" => FieldValue::Number(self.selling_price),
            "description" => FieldValue::Text(self.description.clone().unwrap_or_default()),
            "isActive" => FieldValue::Flag(self.is_active),
            _ => FieldValue::Reference(self.id),
        }
    }

    fn set_field(&mut self, key: &str, value: FieldValue) {
        match (key, value) {
            ("code", value) => self.code = value.as_text().trim().to_string(),
            ("name", value) => self.name = value.as_text().trim().to_string(),
            ("categoryId", FieldValue::Reference(id)) => {
                if self.category_id != id {
                    // the joined name belongs to the previous category
                    self.category = None;
                }
                self.category_id = id;
            }
            ("sellingPrice", FieldValue::Number(price)) => self.selling_price = price,
            ("description", value) => self.description = optional_text(&value),
            ("isActive", value) => self.is_active = value.as_flag(),
            (key, value) => log::warn!("item field {key} cannot take {value:?}"),
        }
    }
}

#[component]
pub fn ItemList() -> impl IntoView {
    entity_list_page::<Item>()
}
