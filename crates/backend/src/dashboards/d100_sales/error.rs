use contracts::dashboards::d100_sales::{ErrorKind, ErrorResponse};
use thiserror::Error;

/// Failures of one dashboard render pass
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Empty result: {0}")]
    EmptyResult(String),
}

impl DashboardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DashboardError::Fetch(_) => ErrorKind::Fetch,
            DashboardError::Parse(_) => ErrorKind::Parse,
            DashboardError::EmptyResult(_) => ErrorKind::EmptyResult,
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            DashboardError::Fetch(format!("upstream timed out: {}", err))
        } else {
            DashboardError::Fetch(err.to_string())
        }
    }
}
