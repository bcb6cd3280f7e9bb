// Activity service - Loads the timeline feed and renders the recent activity list
use crate::application::dashboard_api::DashboardApi;
use crate::application::view::DashboardView;
use crate::domain::ticket::Ticket;
use crate::infrastructure::config::{expand_template, ActivitySettings};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;

pub const ACTIVITY_CONTAINER: &str = "recent-activity-list";
pub const NO_ACTIVITY_HTML: &str = r#"<div class="no-activity">No recent activity</div>"#;
pub const ACTIVITY_ERROR_HTML: &str = r#"<div class="error">Error loading recent activity</div>"#;

const INVALID_DATE: &str = "Invalid Date";

#[derive(Clone)]
pub struct ActivityService {
    api: Arc<dyn DashboardApi>,
    settings: ActivitySettings,
}

impl ActivityService {
    pub fn new(api: Arc<dyn DashboardApi>, settings: ActivitySettings) -> Self {
        Self { api, settings }
    }

    /// Fetch the timeline and render its first `limit` tickets in server order.
    /// Any failure replaces the list with an inline error.
    pub async fn load_recent_activity(&self, view: &dyn DashboardView) -> bool {
        match self.api.fetch_timeline().await {
            Ok(timeline) => {
                let shown = timeline.tickets.len().min(self.settings.limit);
                tracing::debug!(
                    "Timeline returned {} tickets, showing {}",
                    timeline.tickets.len(),
                    shown
                );
                self.display_recent_activity(view, &timeline.tickets[..shown]);
                true
            }
            Err(e) => {
                tracing::error!("Error loading recent activity: {}", e);
                view.set_html(ACTIVITY_CONTAINER, ACTIVITY_ERROR_HTML);
                false
            }
        }
    }

    /// Replace the activity container with one fragment per ticket
    pub fn display_recent_activity(&self, view: &dyn DashboardView, tickets: &[Ticket]) {
        let html = self.render_activity(tickets);
        if !view.set_html(ACTIVITY_CONTAINER, &html) {
            tracing::debug!("Container {} not present, skipping", ACTIVITY_CONTAINER);
        }
    }

    pub fn render_activity(&self, tickets: &[Ticket]) -> String {
        if tickets.is_empty() {
            return NO_ACTIVITY_HTML.to_string();
        }

        tickets.iter().map(|t| self.render_ticket(t)).collect()
    }

    fn render_ticket(&self, ticket: &Ticket) -> String {
        let status = ticket.status();

        let mut vars = HashMap::new();
        vars.insert("id", ticket.id.to_string());
        let href = expand_template(&self.settings.ticket_url, &vars);

        let type_badge = ticket
            .type_badge()
            .map(|t| format!(r#"<span class="activity-type">{}</span>"#, encode_text(t)))
            .unwrap_or_default();

        format!(
            r#"
            <div class="activity-item {status_class}">
                <div class="activity-icon">
                    <i class="fas fa-ticket-alt"></i>
                </div>
                <div class="activity-content">
                    <div class="activity-title">
                        <a href="{href}">#{id} - {caption}</a>
                    </div>
                    <div class="activity-meta">
                        <span class="activity-status">{status_label}</span>
                        <span class="activity-date">{date}</span>
                        {type_badge}
                    </div>
                </div>
            </div>
        "#,
            status_class = status.css_class(),
            href = encode_double_quoted_attribute(&href),
            id = ticket.id,
            caption = encode_text(&ticket.caption),
            status_label = status.label(),
            date = encode_text(&self.format_created(ticket)),
            type_badge = type_badge,
        )
    }

    fn format_created(&self, ticket: &Ticket) -> String {
        let Some(created) = ticket.created_local() else {
            return INVALID_DATE.to_string();
        };

        let mut out = String::new();
        if write!(out, "{}", created.format(&self.settings.date_format)).is_err() {
            tracing::warn!("Invalid date format: {}", self.settings.date_format);
            return INVALID_DATE.to_string();
        }
        out
    }
}
