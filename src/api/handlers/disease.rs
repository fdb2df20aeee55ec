use actix_web::{get, post, web, HttpResponse, Responder};

use crate::{
    classifier::{Classifier, ClassifierError},
    logic::recommendations::{disease_recommendations, recommendations_for_label},
    models::{
        weather::{
            DiseaseClass, DiseasePredictionResponse, DiseaseRecommendationsResponse,
            WeatherFeatures,
        },
        ErrorResponse,
    },
};

/// POST /api/disease/predict
/// Asks the risk model which disease the weather favours and attaches treatment advice.
#[utoipa::path(
    tag = "disease",
    request_body = WeatherFeatures,
    responses(
        (status = 200, description = "Most likely disease", body = DiseasePredictionResponse),
        (status = 502, description = "The model failed or answered garbage", body = ErrorResponse),
        (status = 503, description = "No model configured", body = ErrorResponse),
    )
)]
#[post("/disease/predict")]
pub async fn post_predict(
    classifier: web::Data<dyn Classifier>,
    body: web::Json<WeatherFeatures>,
) -> impl Responder {
    let features = body.into_inner();

    match classifier.classify(&features).await {
        Ok(prediction) => {
            let confidence = prediction.confidence();
            HttpResponse::Ok().json(DiseasePredictionResponse {
                recommendations: recommendations_for_label(&prediction.label),
                predicted_disease: prediction.label,
                confidence,
            })
        }
        Err(ClassifierError::Unavailable) => HttpResponse::ServiceUnavailable()
            .json(ErrorResponse::new(ClassifierError::Unavailable.to_string())),
        Err(e) => {
            log::warn!("disease prediction failed: {e}");
            HttpResponse::BadGateway().json(ErrorResponse::new(format!("Prediction error: {e}")))
        }
    }
}

/// GET /api/diseases/{name}/recommendations
/// Treatment advice for a known disease class.
#[utoipa::path(
    tag = "disease",
    params(("name" = String, Path, description = "Disease label or slug, e.g. `black-rot`")),
    responses(
        (status = 200, description = "Treatment advice", body = DiseaseRecommendationsResponse),
        (status = 404, description = "Unknown disease", body = ErrorResponse),
    )
)]
#[get("/diseases/{name}/recommendations")]
pub async fn get_disease_recommendations(path: web::Path<String>) -> impl Responder {
    let name = path.into_inner();
    match DiseaseClass::from_label(&name) {
        None => HttpResponse::NotFound().json(ErrorResponse::new(format!(
            "Disease '{name}' not found."
        ))),
        Some(disease) => HttpResponse::Ok().json(DiseaseRecommendationsResponse {
            disease,
            recommendations: disease_recommendations(disease)
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }),
    }
}
