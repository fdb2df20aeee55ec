use actix_web::{post, web, HttpResponse, Responder};

use crate::{
    logic::suitability::validate_site,
    models::{
        site::{SiteConditions, SiteVerdict},
        ErrorResponse,
    },
};

/// POST /api/site/validate
/// Checks whether climate and soil readings suit grape cultivation.
#[utoipa::path(
    tag = "site",
    request_body = SiteConditions,
    responses(
        (status = 200, description = "Suitability verdict", body = SiteVerdict),
        (status = 400, description = "Malformed readings", body = ErrorResponse),
    )
)]
#[post("/site/validate")]
pub async fn post_validate_site(body: web::Json<SiteConditions>) -> impl Responder {
    HttpResponse::Ok().json(validate_site(&body))
}
