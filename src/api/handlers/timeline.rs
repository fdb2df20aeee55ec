use actix_web::{post, web, HttpResponse, Responder};

use crate::{
    logic::timeline::{farming_timeline, timeline_end},
    models::{
        timeline::{TimelineRequest, TimelineResponse},
        ErrorResponse,
    },
};

/// POST /api/farm/timeline
/// Builds the three-year task schedule for a vineyard planted on the given date.
#[utoipa::path(
    tag = "layout",
    request_body = TimelineRequest,
    responses(
        (status = 200, description = "Dated tasks from site preparation to first full harvest", body = TimelineResponse),
        (status = 400, description = "Blank variety, malformed date or date out of range", body = ErrorResponse),
    )
)]
#[post("/farm/timeline")]
pub async fn post_timeline(body: web::Json<TimelineRequest>) -> impl Responder {
    let request = body.into_inner();

    let built = farming_timeline(&request.variety, request.planting_date)
        .and_then(|tasks| Ok((tasks, timeline_end(request.planting_date)?)));

    match built {
        Ok((tasks, end_date)) => {
            log::debug!(
                "timeline for {} planted {}: {} tasks",
                request.variety,
                request.planting_date,
                tasks.len()
            );
            HttpResponse::Ok().json(TimelineResponse {
                variety: request.variety.trim().to_string(),
                planting_date: request.planting_date,
                end_date,
                tasks,
            })
        }
        Err(e) => HttpResponse::BadRequest().json(ErrorResponse::new(e.to_string())),
    }
}
