// Ticket domain model as served by the timeline endpoint
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Ticket {
    pub id: i64,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub closed_status: bool,
    #[serde(default, rename = "type")]
    pub ticket_type: Option<String>,
}

/// Body of `GET /dashboard/api/timeline/`
#[derive(Debug, Clone, Deserialize)]
pub struct TimelineResponse {
    pub tickets: Vec<Ticket>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Open,
    Closed,
}

impl TicketStatus {
    pub fn css_class(self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::Closed => "closed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::Closed => "Closed",
        }
    }
}

impl Ticket {
    pub fn status(&self) -> TicketStatus {
        if self.closed_status {
            TicketStatus::Closed
        } else {
            TicketStatus::Open
        }
    }

    /// Type name, only when present and non-empty
    pub fn type_badge(&self) -> Option<&str> {
        self.ticket_type.as_deref().filter(|t| !t.is_empty())
    }

    /// Creation time in local time.
    /// Accepts RFC 3339, a naive ISO datetime (local), or a bare date (UTC midnight).
    pub fn created_local(&self) -> Option<DateTime<Local>> {
        let raw = self.created.as_deref()?.trim();

        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed.with_timezone(&Local));
        }

        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Local.from_local_datetime(&naive).earliest();
        }

        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
        Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?).with_timezone(&Local))
    }
}
