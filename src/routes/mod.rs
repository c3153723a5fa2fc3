use actix_web::error::InternalError;
use actix_web::{HttpResponse, web};

use crate::dto::updates::ErrorResponse;
use crate::services::ServiceError;

pub mod api;
pub mod health;
pub mod main;

/// Register every route of the update API.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        InternalError::from_response(err, bad_request(message)).into()
    }))
    .app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        InternalError::from_response(err, bad_request(message)).into()
    }))
    .service(main::index)
    .service(api::list_updates)
    .service(api::add_update)
    .service(api::list_by_category)
    .service(api::list_hot)
    .service(api::scrape)
    .service(api::stats);
}

/// Register the routes of the standalone health-check service.
pub fn configure_health(cfg: &mut web::ServiceConfig) {
    cfg.service(health::index).service(health::health);
}

fn bad_request(message: String) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse::new(message))
}

pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Validation(message) => bad_request(message),
        ServiceError::Internal => {
            HttpResponse::InternalServerError().json(ErrorResponse::new("internal error"))
        }
    }
}
