// Aggregate ticket counts as served by the analytics endpoint
use super::format::{format_duration, format_number};
use serde::Deserialize;

/// Body of `GET /dashboard/api/analytics/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyticsSnapshot {
    pub total_tickets: u64,
    pub open_tickets: u64,
    pub closed_tickets: u64,
    pub recent_tickets: u64,
    #[serde(default)]
    pub recent_closed: Option<u64>,
    /// Mean hours from creation to close
    #[serde(default)]
    pub avg_resolution_time: Option<f64>,
}

/// Display slots a snapshot is written into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatSlot {
    TotalTickets,
    OpenTickets,
    ClosedTickets,
    RecentActivity,
    RecentlyClosed,
    AvgResolutionTime,
}

impl StatSlot {
    pub const ALL: [StatSlot; 6] = [
        StatSlot::TotalTickets,
        StatSlot::OpenTickets,
        StatSlot::ClosedTickets,
        StatSlot::RecentActivity,
        StatSlot::RecentlyClosed,
        StatSlot::AvgResolutionTime,
    ];

    pub fn id(self) -> &'static str {
        match self {
            StatSlot::TotalTickets => "total-tickets",
            StatSlot::OpenTickets => "open-tickets",
            StatSlot::ClosedTickets => "closed-tickets",
            StatSlot::RecentActivity => "recent-activity",
            StatSlot::RecentlyClosed => "recently-closed",
            StatSlot::AvgResolutionTime => "avg-resolution-time",
        }
    }
}

impl AnalyticsSnapshot {
    /// Formatted text for a slot, `None` when the snapshot has no value for it
    pub fn display_value(&self, slot: StatSlot) -> Option<String> {
        match slot {
            StatSlot::TotalTickets => Some(format_number(self.total_tickets)),
            StatSlot::OpenTickets => Some(format_number(self.open_tickets)),
            StatSlot::ClosedTickets => Some(format_number(self.closed_tickets)),
            StatSlot::RecentActivity => Some(format_number(self.recent_tickets)),
            StatSlot::RecentlyClosed => self.recent_closed.map(format_number),
            StatSlot::AvgResolutionTime => self.avg_resolution_time.map(format_duration),
        }
    }
}
