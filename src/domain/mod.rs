pub mod types;
pub mod update;
