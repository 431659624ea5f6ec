//! Read-only counts over every table

pub mod queries;
pub mod routes;

pub use routes::statistics_routes;
