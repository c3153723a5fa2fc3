//! Core library exports for the public updates service.
//!
//! The `data` feature exposes the persistence layer (domain, models, schema,
//! pool and repositories). The `server` feature adds the scraper, service
//! layer and Actix-web routes used by the binaries.

pub mod db;
pub mod domain;
pub mod error_conversions;
pub mod models;
pub mod repository;
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod scraper;
#[cfg(feature = "server")]
pub mod services;
