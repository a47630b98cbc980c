use serde::{Deserialize, Serialize};

/// Envelope returned by every `*/save` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveResponse<T> {
    pub success: bool,
    pub error: Option<String>,
    pub data: Option<T>,
}

impl<T> SaveResponse<T> {
    /// Saved record, or the message to show the user
    pub fn into_result(self) -> Result<T, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err("Save response contains no data".to_string()),
            (false, _) => Err(self.error.unwrap_or_else(|| "Save failed".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Row {
        id: i64,
    }

    #[test]
    fn test_success_with_data() {
        let resp: SaveResponse<Row> =
            serde_json::from_str(r#"{"success":true,"error":null,"data":{"id":7}}"#).unwrap();
        assert_eq!(resp.into_result(), Ok(Row { id: 7 }));
    }

    #[test]
    fn test_failure_carries_backend_error() {
        let resp: SaveResponse<Row> =
            serde_json::from_str(r#"{"success":false,"error":"Error item not found"}"#).unwrap();
        assert_eq!(resp.into_result(), Err("Error item not found".to_string()));
    }

    #[test]
    fn test_payload_needs_no_default() {
        // `Row` has no Default impl; missing envelope fields still read as None
        let resp: SaveResponse<Row> = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert_eq!(resp.error, None);
        assert_eq!(resp.data, None);
        assert_eq!(resp.into_result(), Err("Save failed".to_string()));
    }

    #[test]
    fn test_success_without_data_is_an_error() {
        let resp: SaveResponse<Row> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(resp.into_result().is_err());
    }
}
