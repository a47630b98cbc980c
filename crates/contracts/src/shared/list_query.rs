use serde::{Deserialize, Serialize};

/// Query parameters accepted by the `*/list` endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    /// Search term, split on spaces by the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

impl ListQuery {
    pub fn search(q: impl Into<String>, limit: usize) -> Self {
        let q = q.into();
        Self {
            q: if q.trim().is_empty() { None } else { Some(q) },
            limit: Some(limit),
            offset: None,
        }
    }

    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = if offset == 0 { None } else { Some(offset) };
        self
    }

    pub fn is_empty(&self) -> bool {
        self.q.is_none() && self.limit.is_none() && self.offset.is_none()
    }
}

/// Minimal `{id, name}` projection used to fill select boxes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupOption {
    pub id: i64,
    pub name: String,
}
