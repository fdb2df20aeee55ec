use actix_web::{post, web, HttpResponse, Responder};
use chrono::Local;

use crate::{
    logic::{activities::seasonal_activities, layout::compute_layout},
    models::{
        layout::{LayoutPayload, LayoutRequest, LayoutResponse, LayoutView},
        ErrorResponse,
    },
};

/// POST /api/farm/layout
/// Computes how many vines fit on a plot for the given spacing, plus this month's calendar.
#[utoipa::path(
    tag = "layout",
    request_body = LayoutPayload,
    responses(
        (status = 200, description = "Planting grid for the plot", body = LayoutResponse),
        (status = 400, description = "A dimension is missing, non-numeric or not positive", body = ErrorResponse),
    )
)]
#[post("/farm/layout")]
pub async fn post_layout(body: web::Json<LayoutPayload>) -> impl Responder {
    let payload = body.into_inner();

    let computed = LayoutRequest::try_from(&payload)
        .and_then(|request| compute_layout(&request).map(|result| (request, result)));

    match computed {
        Ok((request, result)) => {
            log::debug!(
                "layout {}x{} m: {} plants ({:.1}% used)",
                request.plot_length,
                request.plot_width,
                result.max_capacity,
                result.utilization_percent
            );
            HttpResponse::Ok().json(LayoutResponse {
                layout: LayoutView::new(&request, &result),
                activities: seasonal_activities(Local::now().date_naive()),
            })
        }
        Err(e) => HttpResponse::BadRequest().json(ErrorResponse::new(e.to_string())),
    }
}
