use std::net::TcpListener;
use std::time::Duration;

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{App, HttpResponse, HttpServer, test, web};
use bd_updates::domain::types::{CategoryName, SourceName};
use bd_updates::domain::update::{CandidateUpdate, NewUpdate};
use bd_updates::repository::{DieselRepository, UpdateWriter};
use bd_updates::routes;
use bd_updates::scraper::extractors::{BPSC_NOTICES, NoNotices, PlaceholderExtractor};
use bd_updates::scraper::{PageFetcher, ScrapeSource, SourceRegistry};
use chrono::{DateTime, NaiveDate};
use serde_json::{Value, json};

mod common;

fn scraped(url: &str, source: &str, category: &str) -> NewUpdate {
    NewUpdate::from_candidate(
        CandidateUpdate::new(format!("notice from {source}"), url, None).unwrap(),
        SourceName::new(source).unwrap(),
        CategoryName::new(category).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
    )
}

macro_rules! app {
    ($repo:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($repo.clone()))
                .app_data(web::Data::new(SourceRegistry::builtin().unwrap()))
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn bpsc_and_btrc_scenario() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    repo.ingest_updates(&[scraped("https://www.bpsc.gov.bd/n/1", "বিসিএস কমিশন", "job")])
        .unwrap();
    repo.ingest_updates(&[scraped("https://www.btrc.gov.bd/n/1", "বিটিআরসি", "hot")])
        .unwrap();
    let app = app!(repo);

    let req = test::TestRequest::get()
        .uri("/api/updates?limit=20")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["count"], json!(2));
    assert_eq!(body["updates"][0]["original_url"], json!("https://www.btrc.gov.bd/n/1"));
    assert_eq!(body["updates"][1]["original_url"], json!("https://www.bpsc.gov.bd/n/1"));
    assert!(body.get("category").is_none());

    let req = test::TestRequest::get().uri("/api/updates/hot").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["category"], json!("hot"));
    assert_eq!(body["count"], json!(1));
    assert_eq!(body["updates"][0]["is_hot"], json!(true));
    assert_eq!(body["updates"][0]["source"], json!("বিটিআরসি"));

    let req = test::TestRequest::get().uri("/api/stats").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["stats"]["total_updates"], json!(2));
    assert_eq!(body["stats"]["hot_updates"], json!(1));
    assert_eq!(body["stats"]["by_category"], json!({"job": 1, "hot": 1}));
    assert_eq!(body["stats"]["sources_count"], json!(5));
    assert!(body["stats"]["last_updated"].is_string());
}

#[actix_web::test]
async fn update_records_expose_every_stored_field() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    repo.ingest_updates(&[scraped("https://www.bpsc.gov.bd/n/1", "বিসিএস কমিশন", "job")])
        .unwrap();
    let app = app!(repo);

    let req = test::TestRequest::get().uri("/api/updates/job").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let record = &body["updates"][0];

    assert_eq!(record["id"], json!(1));
    assert_eq!(record["title"], json!("notice from বিসিএস কমিশন"));
    assert_eq!(record["summary"], json!(""));
    assert_eq!(record["category"], json!("job"));
    assert_eq!(record["publish_date"], json!("2024-01-15"));
    assert_eq!(record["is_hot"], json!(false));
    assert_eq!(record["status"], json!("active"));
    assert!(record["created_at"].is_string());
}

#[actix_web::test]
async fn invalid_category_is_bad_request() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let app = app!(repo);

    let req = test::TestRequest::get().uri("/api/updates/sports").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("invalid category: sports"));
}

#[actix_web::test]
async fn zero_limit_is_bad_request() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let app = app!(repo);

    let req = test::TestRequest::get().uri("/api/hot?limit=0").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn non_numeric_limit_is_json_bad_request() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let app = app!(repo);

    let req = test::TestRequest::get()
        .uri("/api/updates?limit=abc")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].as_str().unwrap().contains("invalid digit"));
}

#[actix_web::test]
async fn limits_above_one_hundred_are_honoured() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let batch: Vec<NewUpdate> = (0..150)
        .map(|i| scraped(&format!("https://www.bpsc.gov.bd/n/{i}"), "বিসিএস কমিশন", "job"))
        .collect();
    assert_eq!(repo.ingest_updates(&batch).unwrap(), 150);
    let app = app!(repo);

    let req = test::TestRequest::get()
        .uri("/api/updates?limit=150")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["count"], json!(150));

    let req = test::TestRequest::get()
        .uri("/api/updates?limit=120")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["count"], json!(120));
}

#[actix_web::test]
async fn unknown_category_filter_is_empty() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    repo.ingest_updates(&[scraped("https://www.bpsc.gov.bd/n/1", "বিসিএস কমিশন", "job")])
        .unwrap();
    let app = app!(repo);

    let req = test::TestRequest::get()
        .uri("/api/updates?category=sports")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["count"], json!(0));
}

#[actix_web::test]
async fn manual_add_is_insert_or_ignore() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let app = app!(repo);

    let payload = json!({
        "title": "সোনালী ব্যাংকে নিয়োগ",
        "original_url": "https://www.sonalibank.com.bd/career/1",
        "summary": "সহকারী অফিসার পদে নিয়োগ",
        "source": "সোনালী ব্যাংক",
        "category": "job",
    });

    let req = test::TestRequest::post()
        .uri("/api/updates")
        .set_json(&payload)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["inserted"], json!(true));

    let req = test::TestRequest::post()
        .uri("/api/updates")
        .set_json(&payload)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["inserted"], json!(false));

    let req = test::TestRequest::get().uri("/api/stats").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["stats"]["total_updates"], json!(1));
}

#[actix_web::test]
async fn manual_add_rejects_invalid_url() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let app = app!(repo);

    let req = test::TestRequest::post()
        .uri("/api/updates")
        .set_json(json!({
            "title": "title",
            "original_url": "not a url",
            "source": "source",
            "category": "job",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn manual_add_rejects_malformed_json() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let app = app!(repo);

    let req = test::TestRequest::post()
        .uri("/api/updates")
        .insert_header(ContentType::json())
        .set_payload("{\"title\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], json!(false));
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn scrape_route_reports_each_source() {
    // Accepts connections through the backlog but never answers.
    let silent = TcpListener::bind("127.0.0.1:0").unwrap();
    let silent_addr = silent.local_addr().unwrap();

    let live = TcpListener::bind("127.0.0.1:0").unwrap();
    let live_addr = live.local_addr().unwrap();
    let server = HttpServer::new(|| {
        App::new().route(
            "/",
            web::get().to(|| async { HttpResponse::Ok().body("<html></html>") }),
        )
    })
    .workers(1)
    .listen(live)
    .unwrap()
    .run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    let registry = SourceRegistry::new()
        .register(
            ScrapeSource::new(
                "bpsc",
                &format!("http://{live_addr}/"),
                "বিসিএস কমিশন",
                "job",
                PlaceholderExtractor::new(BPSC_NOTICES),
            )
            .unwrap(),
        )
        .register(
            ScrapeSource::new(
                "btrc",
                &format!("http://{silent_addr}/"),
                "বিটিআরসি",
                "hot",
                NoNotices,
            )
            .unwrap(),
        );
    let fetcher = PageFetcher::new("bd-updates-test", Duration::from_millis(300)).unwrap();

    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(registry))
            .app_data(web::Data::new(fetcher))
            .configure(routes::configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/scrape").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    handle.stop(true).await;
    drop(silent);

    assert_eq!(body["success"], json!(true));
    assert!(body["message"].is_string());
    assert_eq!(body["results"]["bpsc"], json!("success"));
    assert!(
        body["results"]["btrc"]
            .as_str()
            .unwrap()
            .starts_with("error: ")
    );
    assert!(DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).is_ok());

    let req = test::TestRequest::get().uri("/api/stats").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["stats"]["total_updates"], json!(1));
    assert_eq!(body["stats"]["sources_count"], json!(2));
}

#[actix_web::test]
async fn index_lists_endpoints() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());
    let app = app!(repo);

    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["success"], json!(true));
    assert!(body["endpoints"].get("/api/stats").is_some());
}

#[actix_web::test]
async fn health_stub_returns_static_payloads() {
    let app = test::init_service(App::new().configure(routes::configure_health)).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], json!("running"));
    assert!(body["service"].is_string());

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body, json!({"health": "ok"}));
}
