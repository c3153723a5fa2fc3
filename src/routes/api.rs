use actix_web::{HttpResponse, Responder, get, post, web};

use crate::dto::updates::{AddUpdateResponse, ScrapeResponse, StatsResponse, UpdateListResponse};
use crate::forms::updates::AddUpdateForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::scraper::{PageFetcher, SourceRegistry};
use crate::services::scrape::scrape_and_ingest_all;
use crate::services::stats::compute_stats;
use crate::services::updates::{
    LimitQueryParams, UpdatesQueryParams, add_update as add_update_service,
    list_by_category as list_by_category_service, list_hot as list_hot_service,
    list_updates as list_updates_service,
};

#[get("/api/updates")]
pub async fn list_updates(
    params: web::Query<UpdatesQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_updates_service(params.into_inner(), repo.get_ref()) {
        Ok(updates) => HttpResponse::Ok().json(UpdateListResponse::new(updates)),
        Err(err) => error_response(err),
    }
}

#[post("/api/updates")]
pub async fn add_update(
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<AddUpdateForm>,
) -> impl Responder {
    match add_update_service(form, repo.get_ref()) {
        Ok(inserted) => HttpResponse::Ok().json(AddUpdateResponse::new(inserted)),
        Err(err) => error_response(err),
    }
}

#[get("/api/updates/{category}")]
pub async fn list_by_category(
    category: web::Path<String>,
    params: web::Query<LimitQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_by_category_service(&category, params.into_inner(), repo.get_ref()) {
        Ok((filter, updates)) => {
            HttpResponse::Ok().json(UpdateListResponse::new(updates).with_category(filter.as_str()))
        }
        Err(err) => error_response(err),
    }
}

#[get("/api/hot")]
pub async fn list_hot(
    params: web::Query<LimitQueryParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_hot_service(params.into_inner(), repo.get_ref()) {
        Ok(updates) => HttpResponse::Ok().json(UpdateListResponse::new(updates)),
        Err(err) => error_response(err),
    }
}

#[get("/api/scrape")]
pub async fn scrape(
    registry: web::Data<SourceRegistry>,
    fetcher: web::Data<PageFetcher>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let report = scrape_and_ingest_all(&registry, &fetcher, repo.get_ref()).await;
    HttpResponse::Ok().json(ScrapeResponse::from(report))
}

#[get("/api/stats")]
pub async fn stats(
    registry: web::Data<SourceRegistry>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match compute_stats(&registry, repo.get_ref()) {
        Ok(stats) => HttpResponse::Ok().json(StatsResponse {
            success: true,
            stats,
        }),
        Err(err) => error_response(err),
    }
}
