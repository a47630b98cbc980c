use contracts::domain::a001_item_category::aggregate::ItemCategory;
use leptos::prelude::*;

use crate::shared::entity::{
    entity_list_page, ColumnSpec, EntitySchema, FieldKind, FieldSpec, FieldValue,
};
use crate::shared::entity::schema::optional_text;

impl EntitySchema for ItemCategory {
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
            _ => log::warn!("item category has no editable field {key}"),
        }
    }
}

#[component]
pub fn ItemCategoryList() -> impl IntoView {
    entity_list_page::<ItemCategory>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::filter_list;

    #[test]
    fn test_editing_through_fields() {
        let mut category = ItemCategory::default();
        category.set_field("name", FieldValue::Text(" Snacks ".into()));
        category.set_field("description", FieldValue::Text("   ".into()));
        category.set_field("isActive", FieldValue::Flag(false));

        assert_eq!(category.name, "Snacks");
        assert_eq!(category.description, None);
        assert!(!category.is_active);
        assert_eq!(category.cell("isActive"), "No");
    }

    #[test]
    fn test_search_covers_description() {
        let rows = vec![
            ItemCategory {
                id: Some(1),
                name: "Snacks".into(),
                description: Some("Chips and crackers".into()),
                is_active: true,
            },
            ItemCategory {
                id: Some(2),
                name: "Drinks".into(),
                ..ItemCategory::default()
            },
        ];
        let found = filter_list(rows, "chip");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, Some(1));
    }
}
