use serde::Serialize;

/// Envelope returned by the mutating endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(id: i64, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }
}

fn is_zero(id: &i64) -> bool {
    *id == 0
}
