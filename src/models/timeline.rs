use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRequest {
    /// Grape variety, used in planting and harvest task descriptions.
    #[schema(example = "Thompson Seedless")]
    pub variety: String,
    /// `YYYY-MM-DD`
    #[schema(value_type = String, format = Date, example = "2025-05-16")]
    pub planting_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Preparation,
    Planting,
    Water,
    Soil,
    Fertilize,
    Structure,
    Training,
    Prune,
    Pest,
    Monitor,
    Harvest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TimelineTask {
    /// 1-based position in the timeline, as a string.
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: TaskCategory,
    #[schema(value_type = String, format = Date)]
    pub start_date: NaiveDate,
    #[schema(value_type = String, format = Date)]
    pub due_date: NaiveDate,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimelineResponse {
    pub variety: String,
    #[schema(value_type = String, format = Date)]
    pub planting_date: NaiveDate,
    /// Three years after planting, when the vineyard is in full production.
    #[schema(value_type = String, format = Date)]
    pub end_date: NaiveDate,
    pub tasks: Vec<TimelineTask>,
}
