use crate::shared::validation::ValidationErrors;

/// Trait implemented by every master-data record exposed by the backend
///
/// Instance methods describe one record, associated functions describe the
/// entity class (endpoints, UI names).
pub trait Entity {
    // ============================================================================
    // Instance
    // ============================================================================

    /// Database id, `None` for a record that was never saved
    fn id(&self) -> Option<i64>;

    /// Human readable label of the record
    fn display_name(&self) -> &str;

    fn is_active(&self) -> bool;

    /// Check the record before it is sent to the save endpoint
    fn validate(&self) -> Result<(), ValidationErrors>;

    // ============================================================================
    // Class metadata
    // ============================================================================

    /// Endpoint prefix (e.g. "/item/category")
    fn api_prefix() -> &'static str;

    /// Element name for the UI (singular)
    fn element_name() -> &'static str;

    /// List name for the UI (plural)
    fn list_name() -> &'static str;

    // ============================================================================
    // Defaults
    // ============================================================================

    fn list_path() -> String {
        format!("{}/list", Self::api_prefix())
    }

    fn save_path() -> String {
        format!("{}/save", Self::api_prefix())
    }
}
