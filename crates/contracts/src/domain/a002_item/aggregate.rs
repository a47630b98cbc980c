use serde::{Deserialize, Serialize};

use crate::domain::common::Entity;
use crate::shared::list_query::LookupOption;
use crate::shared::validation::{ValidationErrors, ValidationRules};

/// Stock item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: Option<i64>,

    pub code: String,

    #[serde(rename = "categoryId", default)]
    pub category_id: Option<i64>,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(rename = "sellingPrice", default)]
    pub selling_price: Option<f64>,

    /// Joined category, filled by the list endpoint; never sent back on save
    #[serde(default, skip_serializing)]
    pub category: Option<LookupOption>,

    #[serde(rename = "isActive", default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Default for Item {
    fn default() -> Self {
        Self {
            id: None,
            code: String::new(),
            category_id: None,
            name: String::new(),
            description: None,
            selling_price: None,
            category: None,
            is_active: true,
        }
    }
}

impl Item {
    pub const CODE_RULES: ValidationRules = ValidationRules::required().with_max_length(50);
    pub const NAME_RULES: ValidationRules = ValidationRules::required().with_max_length(100);
    pub const CATEGORY_RULES: ValidationRules = ValidationRules::required();
    pub const PRICE_RULES: ValidationRules = ValidationRules::none().with_min(0.0);

    pub fn category_name(&self) -> &str {
        self.category.as_ref().map(|c| c.name.as_str()).unwrap_or("")
    }
}

impl Entity for Item {
    fn id(&self) -> Option<i64> {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check("code", Self::CODE_RULES.validate_string(&self.code, "Code"));
        errors.check(
            "categoryId",
            Self::CATEGORY_RULES.validate_reference(self.category_id, "Category"),
        );
        errors.check("name", Self::NAME_RULES.validate_string(&self.name, "Name"));
        errors.check(
            "sellingPrice",
            Self::PRICE_RULES.validate_number(self.selling_price, "Selling price"),
        );
        errors.into_result()
    }

    fn api_prefix() -> &'static str {
        "/item"
    }

    fn element_name() -> &'static str {
        "Item"
    }

    fn list_name() -> &'static str {
        "Items"
    }
}
