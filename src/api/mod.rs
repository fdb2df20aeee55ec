use actix_web::{error::InternalError, web, HttpResponse};

use crate::models::ErrorResponse;

pub mod handlers;
pub mod openapi;
pub mod routes;

/// JSON extractor settings: malformed bodies answer 400 with `{ "error": ... }`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("JSON deserialization error: {err}");
        InternalError::from_response(err, HttpResponse::BadRequest().json(ErrorResponse::new(message)))
            .into()
    })
}
