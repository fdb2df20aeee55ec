use actix_web::{post, web, HttpResponse, Responder};

use crate::{
    logic::recommendations::farming_recommendations,
    models::{
        weather::{FarmingRecommendationsResponse, WeatherReading},
        ErrorResponse,
    },
};

/// POST /api/weather/recommendations
/// Turns a weather reading into field advice.
#[utoipa::path(
    tag = "weather",
    request_body = WeatherReading,
    responses(
        (status = 200, description = "Advice keyed by topic", body = FarmingRecommendationsResponse),
        (status = 400, description = "Malformed reading", body = ErrorResponse),
    )
)]
#[post("/weather/recommendations")]
pub async fn post_weather_recommendations(body: web::Json<WeatherReading>) -> impl Responder {
    let reading = body.into_inner();
    HttpResponse::Ok().json(FarmingRecommendationsResponse {
        recommendations: farming_recommendations(&reading),
    })
}
