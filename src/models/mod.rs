use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod activity;
pub mod layout;
pub mod site;
pub mod timeline;
pub mod weather;

/// Body of every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
