pub mod get;

pub use get::{GetStatisticsError, GetStatisticsQuery, Statistics};
