use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Current conditions as reported by the weather widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeatherReading {
    /// Air temperature in °C.
    pub temp: f64,
    /// Relative humidity in %.
    pub humidity: f64,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    /// Sky condition, e.g. `"Rain"` or `"Clear"`.
    pub condition: String,
}

/// Inputs of the weather-based disease risk model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeatherFeatures {
    pub temp: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub precipitation: f64,
}

/// Output of a classifier: the winning label and a score per known class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Prediction {
    pub label: String,
    pub confidence_per_class: BTreeMap<String, f64>,
}

impl Prediction {
    /// Confidence attached to the winning label, 0 when the model omitted it.
    pub fn confidence(&self) -> f64 {
        self.confidence_per_class
            .get(&self.label)
            .copied()
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum DiseaseClass {
    #[serde(rename = "Black Rot")]
    BlackRot,
    #[serde(rename = "Leaf Blight")]
    LeafBlight,
    #[serde(rename = "ESCA")]
    Esca,
    Healthy,
}

impl DiseaseClass {
    pub const ALL: [DiseaseClass; 4] = [
        DiseaseClass::BlackRot,
        DiseaseClass::LeafBlight,
        DiseaseClass::Esca,
        DiseaseClass::Healthy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DiseaseClass::BlackRot => "Black Rot",
            DiseaseClass::LeafBlight => "Leaf Blight",
            DiseaseClass::Esca => "ESCA",
            DiseaseClass::Healthy => "Healthy",
        }
    }

    /// Accepts display labels (`"Black Rot"`) as well as slugs (`"black-rot"`).
    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = label.trim().to_lowercase().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|class| class.label().to_lowercase() == normalized)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FarmingRecommendationsResponse {
    pub recommendations: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DiseasePredictionResponse {
    pub predicted_disease: String,
    pub confidence: f64,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DiseaseRecommendationsResponse {
    pub disease: DiseaseClass,
    pub recommendations: Vec<String>,
}
