use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

/// Climate and soil readings for a candidate planting site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SiteConditions {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub soil_ph: f64,
    pub soil_moisture_pct: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub soil_type: String,
    pub weather_condition: String,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SiteVerdict {
    pub valid: bool,
    /// Reason for rejection; absent when the site is suitable.
    pub message: Option<String>,
}

impl SiteVerdict {
    pub fn suitable() -> Self {
        Self { valid: true, message: None }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: Some(message.into()),
        }
    }
}
