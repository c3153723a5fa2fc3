use actix_web::{HttpResponse, Responder, get};

use crate::dto::updates::IndexResponse;

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(IndexResponse::default())
}
