use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Vineyard calendar entry for a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SeasonalActivities {
    pub phase: String,
    pub current: Vec<String>,
    pub upcoming: Vec<String>,
}
