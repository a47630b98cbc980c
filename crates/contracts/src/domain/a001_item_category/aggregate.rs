use serde::{Deserialize, Serialize};

use crate::domain::common::Entity;
use crate::shared::validation::{ValidationErrors, ValidationRules};

/// Item category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCategory {
    #[serde(default)]
    pub id: Option<i64>,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(rename = "isActive", default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Default for ItemCategory {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: None,
            is_active: true,
        }
    }
}

impl ItemCategory {
    pub const NAME_RULES: ValidationRules = ValidationRules::required().with_max_length(100);
}

impl Entity for ItemCategory {
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
        errors.check("name", Self::NAME_RULES.validate_string(&self.name, "Name"));
        errors.into_result()
    }

    fn api_prefix() -> &'static str {
        "/item/category"
    }

    fn element_name() -> &'static str {
        "Item Category"
    }

    fn list_name() -> &'static str {
        "Item Categories"
    }
}
