use actix_web::web;

use crate::api::handlers::{
    disease::{get_disease_recommendations, post_predict},
    layout::post_layout,
    site::post_validate_site,
    timeline::post_timeline,
    weather::post_weather_recommendations,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(post_layout)
            .service(post_timeline)
            .service(post_weather_recommendations)
            .service(post_predict)
            .service(get_disease_recommendations)
            .service(post_validate_site),
    );
}
