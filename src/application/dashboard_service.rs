// Dashboard service - Loads both widgets of the dashboard page
use crate::application::activity_service::ActivityService;
use crate::application::stats_service::StatsService;
use crate::application::view::DashboardView;

/// Outcome of one dashboard load, per widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub stats_loaded: bool,
    pub activity_loaded: bool,
}

#[derive(Clone)]
pub struct DashboardService {
    stats_service: StatsService,
    activity_service: ActivityService,
}

impl DashboardService {
    pub fn new(stats_service: StatsService, activity_service: ActivityService) -> Self {
        Self {
            stats_service,
            activity_service,
        }
    }

    pub fn stats(&self) -> &StatsService {
        &self.stats_service
    }

    pub fn activity(&self) -> &ActivityService {
        &self.activity_service
    }

    /// Run the stats load and the activity load concurrently.
    /// Each writes to its own region of the view and fails on its own.
    pub async fn load_dashboard_data(&self, view: &dyn DashboardView) -> LoadReport {
        let (stats_loaded, activity_loaded) = futures::future::join(
            self.stats_service.load_stats(view),
            self.activity_service.load_recent_activity(view),
        )
        .await;

        LoadReport {
            stats_loaded,
            activity_loaded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::activity_service::{ACTIVITY_CONTAINER, ACTIVITY_ERROR_HTML};
    use crate::application::test_support::{ticket, StubApi};
    use crate::domain::analytics::AnalyticsSnapshot;
    use crate::infrastructure::config::{ActivitySettings, FailureDisplay};
    use crate::infrastructure::page_view::PageView;
    use std::sync::Arc;

    fn dashboard(api: StubApi) -> DashboardService {
        let api = Arc::new(api);
        DashboardService::new(
            StatsService::new(api.clone(), FailureDisplay::Log),
            ActivityService::new(api, ActivitySettings::default()),
        )
    }

    fn snapshot() -> AnalyticsSnapshot {
        AnalyticsSnapshot {
            total_tickets: 1_500,
            open_tickets: 500,
            closed_tickets: 1_000,
            recent_tickets: 30,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_load_dashboard_data() {
        let view = PageView::standard();
        let service = dashboard(StubApi::with_data(snapshot(), vec![ticket(1, true, Some("bug"))]));

        let report = service.load_dashboard_data(&view).await;

        assert_eq!(
            report,
            LoadReport {
                stats_loaded: true,
                activity_loaded: true
            }
        );
        assert_eq!(view.content("total-tickets").as_deref(), Some("1.5K"));
        assert_eq!(view.content("closed-tickets").as_deref(), Some("1.0K"));
        assert!(view.content(ACTIVITY_CONTAINER).unwrap().contains("#1 - "));
    }

    #[tokio::test]
    async fn test_timeline_failure_does_not_affect_stats() {
        let view = PageView::standard();
        let mut api = StubApi::with_data(snapshot(), Vec::new());
        api.timeline = None;

        let report = dashboard(api).load_dashboard_data(&view).await;

        assert!(report.stats_loaded);
        assert!(!report.activity_loaded);
        assert_eq!(view.content("open-tickets").as_deref(), Some("500"));
        assert_eq!(view.content(ACTIVITY_CONTAINER).as_deref(), Some(ACTIVITY_ERROR_HTML));
    }

    #[tokio::test]
    async fn test_analytics_failure_does_not_affect_activity() {
        let view = PageView::standard();
        let mut api = StubApi::with_data(snapshot(), Vec::new());
        api.analytics = None;

        let report = dashboard(api).load_dashboard_data(&view).await;

        assert!(!report.stats_loaded);
        assert!(report.activity_loaded);
        assert_eq!(view.content("total-tickets").as_deref(), Some(""));
        assert!(view.content(ACTIVITY_CONTAINER).unwrap().contains("No recent activity"));
    }
}
