// HTTP request handlers
use crate::application::activity_service::ACTIVITY_CONTAINER;
use crate::infrastructure::page_view::PageView;
use crate::presentation::app_state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/", get(dashboard_page))
        .route("/fragments/activity", get(activity_fragment))
        .route("/fragments/stats", get(stats_fragment))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Full dashboard page with both widgets loaded
pub async fn dashboard_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let view = PageView::standard();
    let report = state.dashboard_service.load_dashboard_data(&view).await;
    tracing::info!(
        stats_loaded = report.stats_loaded,
        activity_loaded = report.activity_loaded,
        "Rendered dashboard page"
    );

    Html(view.render_page())
}

/// Recent activity list only, including its inline error on failure
pub async fn activity_fragment(State(state): State<Arc<AppState>>) -> Html<String> {
    let view = PageView::with_slots(&[ACTIVITY_CONTAINER]);
    state
        .dashboard_service
        .activity()
        .load_recent_activity(&view)
        .await;

    Html(view.render_element(ACTIVITY_CONTAINER).unwrap_or_default())
}

/// Formatted stat values keyed by slot id
pub async fn stats_fragment(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.dashboard_service.stats().formatted_stats().await {
        Ok(stats) => {
            let body: Map<String, Value> = stats
                .into_iter()
                .map(|(id, value)| (id.to_string(), Value::String(value)))
                .collect();
            (StatusCode::OK, Json(Value::Object(body)))
        }
        Err(e) => {
            tracing::error!("Error loading dashboard data: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "error": "Error loading dashboard statistics" })),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::activity_service::{ActivityService, ACTIVITY_ERROR_HTML};
    use crate::application::dashboard_service::DashboardService;
    use crate::application::stats_service::StatsService;
    use crate::application::test_support::{ticket, StubApi};
    use crate::domain::analytics::AnalyticsSnapshot;
    use crate::infrastructure::config::{ActivitySettings, FailureDisplay};
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn app(api: StubApi) -> Router {
        let api = Arc::new(api);
        let dashboard_service = DashboardService::new(
            StatsService::new(api.clone(), FailureDisplay::Log),
            ActivityService::new(api, ActivitySettings::default()),
        );
        router(Arc::new(AppState { dashboard_service }))
    }

    fn healthy_api() -> StubApi {
        let snapshot = AnalyticsSnapshot {
            total_tickets: 1_500,
            open_tickets: 300,
            closed_tickets: 1_200,
            recent_tickets: 25,
            ..Default::default()
        };
        StubApi::with_data(snapshot, vec![ticket(9, false, Some("bug"))])
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_check() {
        let (status, body) = get(app(StubApi::failing()), "/healthz").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn test_dashboard_page() {
        let (status, body) = get(app(healthy_api()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"id="total-tickets">1.5K<"#));
        assert!(body.contains(r#"id="open-tickets">300<"#));
        assert!(body.contains("#9 - Ticket 9"));
        assert!(body.contains(r#"<span class="activity-type">bug</span>"#));
    }

    #[tokio::test]
    async fn test_activity_fragment_shows_error() {
        let (status, body) = get(app(StubApi::failing()), "/fragments/activity").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, ACTIVITY_ERROR_HTML);
    }

    #[tokio::test]
    async fn test_stats_fragment() {
        let (status, body) = get(app(healthy_api()), "/fragments/stats").await;
        let json: Value = serde_json::from_str(&body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total-tickets"], "1.5K");
        assert_eq!(json["recent-activity"], "25");
        assert!(json.get("avg-resolution-time").is_none());
    }

    #[tokio::test]
    async fn test_stats_fragment_failure() {
        let (status, _) = get(app(StubApi::failing()), "/fragments/stats").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
    }
}
