use crate::models::site::{SiteConditions, SiteVerdict};

pub const SOIL_TYPES: [&str; 5] = ["Sandy", "Clayey", "Loamy", "Laterite", "Black"];
pub const UNSUITABLE_WEATHER: [&str; 5] = ["Thunderstorm", "Snow", "Tornado", "Hurricane", "Blizzard"];

/// Checks a site against the ranges grapes tolerate.
/// The first failing check is reported.
pub fn validate_site(site: &SiteConditions) -> SiteVerdict {
    let ranges: [(&str, f64, f64, f64); 7] = [
        ("Temperature (°C)", site.temperature_c, 10.0, 38.0),
        ("Humidity (%)", site.humidity_pct, 6.0, 45.0),
        ("Soil pH", site.soil_ph, 4.5, 8.5),
        ("Soil Moisture (%)", site.soil_moisture_pct, 10.0, 60.0),
        ("N (Nitrogen)", site.nitrogen, 50.0, 300.0),
        ("P (Phosphorus)", site.phosphorus, 10.0, 150.0),
        ("K (Potassium)", site.potassium, 50.0, 250.0),
    ];

    for (name, value, min, max) in ranges {
        if !(min..=max).contains(&value) {
            return SiteVerdict::rejected(format!(
                "Invalid {name}: Value {value} is outside the acceptable range ({min} - {max}) for grape cultivation."
            ));
        }
    }

    if !SOIL_TYPES.contains(&site.soil_type.as_str()) {
        return SiteVerdict::rejected(format!(
            "Invalid soil type: {}. Must be one of {}.",
            site.soil_type,
            SOIL_TYPES.join(", ")
        ));
    }

    if UNSUITABLE_WEATHER.contains(&site.weather_condition.as_str()) {
        return SiteVerdict::rejected(format!(
            "Unsuitable weather condition: {} is not appropriate for grape cultivation.",
            site.weather_condition
        ));
    }

    SiteVerdict::suitable()
}
