use thiserror::Error;

use crate::planner::PlanError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid set durations: {0}")]
    Plan(#[from] PlanError),

    #[error("Invalid search criteria: {0}")]
    InvalidCriteria(String),

    #[error("Setlist API error: {0}")]
    Api(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
