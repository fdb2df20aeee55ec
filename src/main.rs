use std::{io, sync::Arc};

use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use vineyard::{
    api::{json_config, openapi::ApiDoc, routes},
    classifier::{Classifier, RemoteClassifier, UnavailableClassifier},
    config::AppConfig,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let classifier: Arc<dyn Classifier> = match &config.classifier_url {
        Some(url) => {
            log::info!("disease classifier at {url}");
            let remote = RemoteClassifier::new(url.clone(), config.classifier_timeout)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            Arc::new(remote)
        }
        None => {
            log::warn!("CLASSIFIER_URL not set, /api/disease/predict will answer 503");
            Arc::new(UnavailableClassifier)
        }
    };
    let classifier = web::Data::from(classifier);

    let bind_addr = config.bind_addr.clone();
    log::info!("🍇 Vineyard API started at http://{bind_addr}");
    log::info!("   POST /api/farm/layout");
    log::info!("   POST /api/weather/recommendations");
    log::info!("   POST /api/disease/predict");
    log::info!("   GET  /api/diseases/{{name}}/recommendations");
    log::info!("   POST /api/site/validate");
    log::info!("   📖 Swagger UI → http://{bind_addr}/swagger-ui/");

    let openapi = ApiDoc::openapi();
    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(Cors::permissive())
            .app_data(classifier.clone())
            .app_data(json_config())
            .configure(routes::configure)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(bind_addr)?
    .run()
    .await
}
