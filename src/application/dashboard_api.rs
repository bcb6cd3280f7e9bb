// Repository trait for the two dashboard endpoints
use crate::domain::analytics::AnalyticsSnapshot;
use crate::domain::ticket::TimelineResponse;
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response body: {0}")]
    Parse(#[from] serde_json::Error),
}

#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// Aggregate ticket counts
    async fn fetch_analytics(&self) -> Result<AnalyticsSnapshot, ApiError>;

    /// Recent tickets, newest first as ordered by the server
    async fn fetch_timeline(&self) -> Result<TimelineResponse, ApiError>;
}
