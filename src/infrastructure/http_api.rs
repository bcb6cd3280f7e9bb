// HTTP client for the ticket dashboard endpoints
use crate::application::dashboard_api::{ApiError, DashboardApi};
use crate::domain::analytics::AnalyticsSnapshot;
use crate::domain::ticket::TimelineResponse;
use crate::infrastructure::config::ApiSettings;
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, COOKIE};
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpDashboardApi {
    client: reqwest::Client,
    base_url: String,
    analytics_path: String,
    timeline_path: String,
    session_cookie: Option<String>,
}

impl HttpDashboardApi {
    pub fn new(settings: &ApiSettings) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            analytics_path: settings.analytics_path.clone(),
            timeline_path: settings.timeline_path.clone(),
            session_cookie: settings.session_cookie.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let mut request = self.client.get(&url).header(ACCEPT, "application/json");
        if let Some(cookie) = &self.session_cookie {
            request = request.header(COOKIE, cookie);
        }

        let response = request.send().await.map_err(ApiError::Transport)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status { status, body });
        }

        let body = response.bytes().await.map_err(ApiError::Transport)?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl DashboardApi for HttpDashboardApi {
    async fn fetch_analytics(&self) -> Result<AnalyticsSnapshot, ApiError> {
        self.get_json(&self.analytics_path).await
    }

    async fn fetch_timeline(&self) -> Result<TimelineResponse, ApiError> {
        self.get_json(&self.timeline_path).await
    }
}
