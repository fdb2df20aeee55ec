use std::collections::BTreeMap;

use crate::models::weather::{DiseaseClass, WeatherReading};

pub const HOT_TEMP_C: f64 = 30.0;
pub const WARM_TEMP_C: f64 = 25.0;
pub const FROST_TEMP_C: f64 = 5.0;
pub const COOL_TEMP_C: f64 = 10.0;
pub const HUMID_PCT: f64 = 80.0;
pub const DRY_PCT: f64 = 30.0;
pub const STRONG_WIND_MS: f64 = 10.0;

/// Field advice keyed by topic (`irrigation`, `disease_risk`, ...).
/// Rules run temperature → humidity → wind → sky; a later rule replaces an earlier
/// advice under the same key.
pub fn farming_recommendations(reading: &WeatherReading) -> BTreeMap<String, String> {
    let mut advice = BTreeMap::new();
    let mut set = |key: &str, text: &str| {
        advice.insert(key.to_string(), text.to_string());
    };

    let temp = reading.temp;
    if temp > HOT_TEMP_C {
        set("irrigation", "Increase irrigation by 20%. Water early morning or late evening to reduce evaporation.");
        set("crop_stress", "High temperature stress likely for crops. Consider shade cloth for sensitive plants.");
    } else if temp > WARM_TEMP_C {
        set("irrigation", "Maintain regular irrigation schedule. Monitor soil moisture closely.");
    } else if temp < FROST_TEMP_C {
        set("frost_protection", "Risk of frost damage. Cover sensitive crops and consider using frost protection methods.");
    } else if temp < COOL_TEMP_C {
        set("planting", "Cool conditions may slow germination. Delay planting heat-loving crops.");
    }

    if reading.humidity > HUMID_PCT {
        set("disease_risk", "High risk of fungal diseases due to high humidity. Monitor crops closely.");
        set("spraying", "Consider preventative fungicide application if appropriate for your farming system.");
    } else if reading.humidity < DRY_PCT {
        set("irrigation", "Low humidity may increase water loss. Consider increasing irrigation frequency.");
    }

    if reading.wind_speed > STRONG_WIND_MS {
        set("protection", "Strong winds can damage crops. Consider temporary windbreaks for vulnerable plants.");
    }

    let sky = reading.condition.to_lowercase();
    if sky.contains("rain") {
        set("field_work", "Postpone field operations that require dry conditions.");
        set("soil_erosion", "Monitor fields for potential erosion. Ensure proper drainage.");
    } else if sky.contains("clear") || sky.contains("sun") {
        set("irrigation", "Check soil moisture levels as evaporation rates will be higher.");
    }

    advice
}

pub fn disease_recommendations(disease: DiseaseClass) -> &'static [&'static str] {
    match disease {
        DiseaseClass::BlackRot => &[
            "Remove infected leaves and fruit to reduce spread",
            "Apply fungicides containing captan or myclobutanil",
            "Ensure proper air circulation by pruning",
            "Avoid overhead irrigation",
        ],
        DiseaseClass::LeafBlight => &[
            "Apply copper-based fungicides as preventative measure",
            "Improve air circulation in the vineyard",
            "Remove infected plant material promptly",
            "Avoid wetting leaves during irrigation",
        ],
        DiseaseClass::Esca => &[
            "Apply sulfur or potassium bicarbonate-based fungicides",
            "Increase sunlight exposure through proper pruning",
            "Maintain good air circulation in the vineyard",
            "Monitor humidity levels and ventilate as needed",
        ],
        DiseaseClass::Healthy => &[
            "Continue regular monitoring",
            "Maintain balanced fertilization",
            "Implement preventative measures based on weather conditions",
            "Follow recommended vineyard management practices",
        ],
    }
}

/// Recommendations for a label coming back from a classifier, known or not.
pub fn recommendations_for_label(label: &str) -> Vec<String> {
    match DiseaseClass::from_label(label) {
        Some(class) => disease_recommendations(class)
            .iter()
            .map(|s| s.to_string())
            .collect(),
        None => vec!["No specific recommendations available for this condition".to_string()],
    }
}
