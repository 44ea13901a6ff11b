// Errors surfaced by the dashboard use cases
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("unknown metric '{0}', expected one of max_temp, min_temp, humidity, rainfall")]
    UnknownMetric(String),

    #[error("invalid year '{0}', expected a whole number")]
    InvalidYear(String),

    #[error("no weather observations are loaded")]
    NoData,
}
