// Stats service - Writes aggregate counts into the stat slots
use crate::application::dashboard_api::{ApiError, DashboardApi};
use crate::application::view::DashboardView;
use crate::domain::analytics::{AnalyticsSnapshot, StatSlot};
use crate::infrastructure::config::FailureDisplay;
use std::sync::Arc;

pub const ANALYTICS_STATUS_CONTAINER: &str = "analytics-status";
pub const ANALYTICS_ERROR_HTML: &str =
    r#"<div class="error">Error loading dashboard statistics</div>"#;

#[derive(Clone)]
pub struct StatsService {
    api: Arc<dyn DashboardApi>,
    failure_display: FailureDisplay,
}

impl StatsService {
    pub fn new(api: Arc<dyn DashboardApi>, failure_display: FailureDisplay) -> Self {
        Self {
            api,
            failure_display,
        }
    }

    /// Write every slot the snapshot has a value for. Returns how many slots were found.
    pub fn update_dashboard_stats(view: &dyn DashboardView, snapshot: &AnalyticsSnapshot) -> usize {
        let mut updated = 0;

        for slot in StatSlot::ALL {
            let Some(value) = snapshot.display_value(slot) else {
                continue;
            };

            if view.set_text(slot.id(), &value) {
                updated += 1;
            } else {
                tracing::debug!("Stat slot {} not present, skipping", slot.id());
            }
        }

        updated
    }

    /// Fetch the snapshot and update the stat slots.
    /// On failure the slots keep their previous content.
    pub async fn load_stats(&self, view: &dyn DashboardView) -> bool {
        match self.api.fetch_analytics().await {
            Ok(snapshot) => {
                let updated = Self::update_dashboard_stats(view, &snapshot);
                tracing::debug!("Updated {} stat slots", updated);
                true
            }
            Err(e) => {
                tracing::error!("Error loading dashboard data: {}", e);
                if self.failure_display == FailureDisplay::Inline {
                    view.set_html(ANALYTICS_STATUS_CONTAINER, ANALYTICS_ERROR_HTML);
                }
                false
            }
        }
    }

    /// Slot id and formatted text for every value in the current snapshot
    pub async fn formatted_stats(&self) -> Result<Vec<(&'static str, String)>, ApiError> {
        let snapshot = self.api.fetch_analytics().await?;

        Ok(StatSlot::ALL
            .into_iter()
            .filter_map(|slot| snapshot.display_value(slot).map(|value| (slot.id(), value)))
            .collect())
    }
}
