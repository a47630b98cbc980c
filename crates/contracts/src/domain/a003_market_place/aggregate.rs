use serde::{Deserialize, Serialize};

use crate::domain::common::Entity;
use crate::shared::validation::{ValidationErrors, ValidationRules};

/// Market place (sales channel)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketPlace {
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

impl Default for MarketPlace {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            description: None,
            is_active: true,
        }
    }
}

impl MarketPlace {
    pub const NAME_RULES: ValidationRules = ValidationRules::required().with_max_length(50);
}

impl Entity for MarketPlace {
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
        "/market-place"
    }

    fn element_name() -> &'static str {
        "Market Place"
    }

    fn list_name() -> &'static str {
        "Market Places"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(MarketPlace::list_path(), "/market-place/list");
        assert_eq!(MarketPlace::save_path(), "/market-place/save");
    }

    #[test]
    fn test_name_limit_matches_backend() {
        let mp = MarketPlace {
            name: "x".repeat(51),
            ..Default::default()
        };
        assert_eq!(
            mp.validate().unwrap_err().for_field("name"),
            Some("Name must be at most 50 characters")
        );
    }

    #[test]
    fn test_serializes_camel_case() {
        let mp = MarketPlace {
            id: Some(1),
            name: "Tokopedia".into(),
            description: None,
            is_active: false,
        };
        let json = serde_json::to_string(&mp).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"name":"Tokopedia","description":null,"isActive":false}"#
        );
    }
}
