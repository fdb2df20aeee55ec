use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::activity::SeasonalActivities;

/// Plot dimensions and spacing, all in metres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRequest {
    pub plot_length: f64,
    pub plot_width: f64,
    /// Spacing between plants along the plot length.
    pub plant_row_spacing: f64,
    /// Spacing between plants along the plot width.
    pub plant_column_spacing: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutResult {
    pub plants_per_row: u64,
    pub plants_per_column: u64,
    pub max_capacity: u64,
    pub used_length: f64,
    pub used_width: f64,
    pub used_area: f64,
    pub total_area: f64,
    pub utilization_percent: f64,
}

/// A dimension as sent by the browser form.
/// - `2.4` JSON → `Number`
/// - `"2.4"` JSON → `Text`, parsed before validation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawDimension {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPayload {
    #[serde(default)]
    #[schema(value_type = Option<f64>, example = 120.0)]
    pub farm_length: Option<RawDimension>,
    #[serde(default)]
    #[schema(value_type = Option<f64>, example = 60.0)]
    pub farm_width: Option<RawDimension>,
    /// Spacing between plants across the plot width.
    #[serde(default)]
    #[schema(value_type = Option<f64>, example = 1.8)]
    pub plant_width_spacing: Option<RawDimension>,
    /// Spacing between plants along the plot length.
    #[serde(default)]
    #[schema(value_type = Option<f64>, example = 2.4)]
    pub plant_length_spacing: Option<RawDimension>,
}

/// Wire shape of a computed layout. Keys follow the storefront widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LayoutView {
    pub max_capacity: u64,
    pub max_plants_length: u64,
    pub max_plants_width: u64,
    pub used_length: f64,
    pub used_width: f64,
    pub used_area: f64,
    pub total_area: f64,
    /// Percentage of the plot covered by the planted grid, in [0, 100].
    pub utilization: f64,
    pub plant_length_spacing: f64,
    pub plant_width_spacing: f64,
}

impl LayoutView {
    pub fn new(request: &LayoutRequest, result: &LayoutResult) -> Self {
        Self {
            max_capacity: result.max_capacity,
            max_plants_length: result.plants_per_row,
            max_plants_width: result.plants_per_column,
            used_length: result.used_length,
            used_width: result.used_width,
            used_area: result.used_area,
            total_area: result.total_area,
            utilization: result.utilization_percent,
            plant_length_spacing: request.plant_row_spacing,
            plant_width_spacing: request.plant_column_spacing,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LayoutResponse {
    pub layout: LayoutView,
    pub activities: SeasonalActivities,
}
