use utoipa::OpenApi;

use crate::models::{
    activity::SeasonalActivities,
    layout::{LayoutPayload, LayoutResponse, LayoutView},
    site::{SiteConditions, SiteVerdict},
    timeline::{TaskCategory, TaskStatus, TimelineRequest, TimelineResponse, TimelineTask},
    weather::{
        DiseaseClass, DiseasePredictionResponse, DiseaseRecommendationsResponse,
        FarmingRecommendationsResponse, Prediction, WeatherFeatures, WeatherReading,
    },
    ErrorResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Vineyard Planning API",
        description = "Server side of the vineyard storefront: planting-grid layout, establishment timeline, seasonal calendar, weather advice, disease risk prediction and site suitability checks.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    servers((url = "/api", description = "Handlers are mounted under /api")),
    paths(
        crate::api::handlers::layout::post_layout,
        crate::api::handlers::timeline::post_timeline,
        crate::api::handlers::weather::post_weather_recommendations,
        crate::api::handlers::disease::post_predict,
        crate::api::handlers::disease::get_disease_recommendations,
        crate::api::handlers::site::post_validate_site,
    ),
    components(
        schemas(
            // Layout
            LayoutPayload, LayoutView, LayoutResponse, SeasonalActivities,
            // Timeline
            TimelineRequest, TimelineResponse, TimelineTask, TaskCategory, TaskStatus,
            // Weather & disease
            WeatherReading, WeatherFeatures, Prediction, DiseaseClass,
            FarmingRecommendationsResponse, DiseasePredictionResponse,
            DiseaseRecommendationsResponse,
            // Site
            SiteConditions, SiteVerdict,
            // Shared
            ErrorResponse,
        )
    ),
    tags(
        (name = "layout",  description = "Planting grid capacity and establishment schedule for a plot"),
        (name = "weather", description = "Field advice from current weather"),
        (name = "disease", description = "Weather-based disease risk and treatment advice"),
        (name = "site",    description = "Grape cultivation suitability of a site"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in [
            "/farm/layout",
            "/farm/timeline",
            "/weather/recommendations",
            "/disease/predict",
            "/diseases/{name}/recommendations",
            "/site/validate",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing path '{path}'");
        }
    }
}
