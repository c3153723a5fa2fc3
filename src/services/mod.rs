pub use errors::{ServiceError, ServiceResult};

pub mod errors;
pub mod scrape;
pub mod stats;
pub mod updates;
