// In-memory dashboard page backing the DashboardView seam
use crate::application::activity_service::ACTIVITY_CONTAINER;
use crate::application::stats_service::ANALYTICS_STATUS_CONTAINER;
use crate::application::view::DashboardView;
use crate::domain::analytics::StatSlot;
use html_escape::encode_text;
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Debug, Clone)]
enum Content {
    Text(String),
    Html(String),
}

impl Content {
    #[cfg(test)]
    fn raw(&self) -> &str {
        match self {
            Content::Text(s) | Content::Html(s) => s,
        }
    }

    fn to_markup(&self) -> String {
        match self {
            Content::Text(s) => encode_text(s).into_owned(),
            Content::Html(s) => s.clone(),
        }
    }
}

/// A page with a fixed set of addressable elements.
/// Writes to ids outside that set are refused.
#[derive(Debug, Default)]
pub struct PageView {
    elements: RwLock<HashMap<String, Content>>,
}

impl PageView {
    /// Every slot and container the dashboard writes to
    pub fn standard() -> Self {
        let mut ids: Vec<&str> = StatSlot::ALL.iter().map(|s| s.id()).collect();
        ids.push(ANALYTICS_STATUS_CONTAINER);
        ids.push(ACTIVITY_CONTAINER);
        Self::with_slots(&ids)
    }

    pub fn with_slots(ids: &[&str]) -> Self {
        let elements = ids
            .iter()
            .map(|id| (id.to_string(), Content::Text(String::new())))
            .collect();
        Self {
            elements: RwLock::new(elements),
        }
    }

    /// Stored content of an element as written, `None` if the page has no such element
    #[cfg(test)]
    pub fn content(&self, id: &str) -> Option<String> {
        let elements = self.elements.read().unwrap_or_else(|e| e.into_inner());
        elements.get(id).map(|c| c.raw().to_string())
    }

    /// Element content as markup, text escaped
    pub fn render_element(&self, id: &str) -> Option<String> {
        let elements = self.elements.read().unwrap_or_else(|e| e.into_inner());
        elements.get(id).map(Content::to_markup)
    }

    fn write(&self, id: &str, content: Content) -> bool {
        let mut elements = self.elements.write().unwrap_or_else(|e| e.into_inner());
        match elements.get_mut(id) {
            Some(slot) => {
                *slot = content;
                true
            }
            None => false,
        }
    }

    /// Full dashboard document
    pub fn render_page(&self) -> String {
        let stat_cards: String = StatSlot::ALL
            .iter()
            .filter_map(|slot| {
                self.render_element(slot.id()).map(|value| {
                    format!(
                        r#"
                <div class="stat-card">
                    <div class="stat-label">{label}</div>
                    <div class="stat-value" id="{id}">{value}</div>
                </div>"#,
                        label = stat_label(*slot),
                        id = slot.id(),
                        value = value,
                    )
                })
            })
            .collect();

        let status = self
            .render_element(ANALYTICS_STATUS_CONTAINER)
            .unwrap_or_default();
        let activity = self.render_element(ACTIVITY_CONTAINER).unwrap_or_default();

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Dashboard</title>
    <link rel="stylesheet" href="/static/dashboard/css/dashboard.css">
</head>
<body>
    <main class="dashboard">
        <section class="dashboard-stats">
            <div id="{status_id}">{status}</div>
            <div class="stat-grid">{stat_cards}
            </div>
        </section>
        <section class="dashboard-activity">
            <h2>Recent Activity</h2>
            <div id="{activity_id}">{activity}</div>
        </section>
    </main>
</body>
</html>
"#,
            status_id = ANALYTICS_STATUS_CONTAINER,
            status = status,
            stat_cards = stat_cards,
            activity_id = ACTIVITY_CONTAINER,
            activity = activity,
        )
    }
}

fn stat_label(slot: StatSlot) -> &'static str {
    match slot {
        StatSlot::TotalTickets => "Total Tickets",
        StatSlot::OpenTickets => "Open Tickets",
        StatSlot::ClosedTickets => "Closed Tickets",
        StatSlot::RecentActivity => "Recent Activity (30 days)",
        StatSlot::RecentlyClosed => "Recently Closed",
        StatSlot::AvgResolutionTime => "Avg. Resolution Time",
    }
}

impl DashboardView for PageView {
    fn set_text(&self, slot_id: &str, value: &str) -> bool {
        self.write(slot_id, Content::Text(value.to_string()))
    }

    fn set_html(&self, container_id: &str, html: &str) -> bool {
        self.write(container_id, Content::Html(html.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_id_is_refused() {
        let view = PageView::with_slots(&["total-tickets"]);

        assert!(view.set_text("total-tickets", "5"));
        assert!(!view.set_text("open-tickets", "5"));
        assert!(!view.set_html("recent-activity-list", "<p></p>"));
        assert_eq!(view.content("open-tickets"), None);
    }

    #[test]
    fn test_text_is_escaped_on_render() {
        let view = PageView::standard();
        view.set_text("total-tickets", "<1K>");
        view.set_html(ACTIVITY_CONTAINER, "<div class=\"no-activity\">No recent activity</div>");

        assert_eq!(view.content("total-tickets").as_deref(), Some("<1K>"));
        assert_eq!(view.render_element("total-tickets").as_deref(), Some("&lt;1K&gt;"));

        let page = view.render_page();
        assert!(page.contains(r#"<div class="stat-value" id="total-tickets">&lt;1K&gt;</div>"#));
        assert!(page.contains(r#"<div id="recent-activity-list"><div class="no-activity">"#));
    }

    #[test]
    fn test_partial_layout_renders_present_slots_only() {
        let view = PageView::with_slots(&["open-tickets"]);
        view.set_text("open-tickets", "3");

        let page = view.render_page();

        assert!(page.contains(r#"id="open-tickets">3<"#));
        assert!(!page.contains(r#"id="total-tickets""#));
    }
}
