use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub api: ApiSettings,
    pub activity: ActivitySettings,
    pub failures: FailureSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub analytics_path: String,
    pub timeline_path: String,
    pub request_timeout_secs: u64,
    /// Sent verbatim as the `Cookie` header
    #[serde(default)]
    pub session_cookie: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ActivitySettings {
    pub limit: usize,
    /// Link target for a ticket, `${id}` is substituted
    pub ticket_url: String,
    /// chrono format string for the creation date
    pub date_format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FailureSettings {
    pub analytics: FailureDisplay,
}

/// What a widget shows when its endpoint fails
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FailureDisplay {
    /// Leave the widget as it was, log only
    Log,
    /// Log and write an inline error fragment
    Inline,
}

impl Default for ActivitySettings {
    fn default() -> Self {
        Self {
            limit: 10,
            ticket_url: "/tickets/view/${id}/".to_string(),
            date_format: "%-m/%-d/%Y".to_string(),
        }
    }
}

fn with_defaults() -> anyhow::Result<ConfigBuilder<DefaultState>> {
    let activity = ActivitySettings::default();

    Ok(config::Config::builder()
        .set_default("server.bind", "0.0.0.0:8080")?
        .set_default("api.base_url", "http://localhost:8000")?
        .set_default("api.analytics_path", "/dashboard/api/analytics/")?
        .set_default("api.timeline_path", "/dashboard/api/timeline/")?
        .set_default("api.request_timeout_secs", 10)?
        .set_default("activity.limit", activity.limit as u64)?
        .set_default("activity.ticket_url", activity.ticket_url)?
        .set_default("activity.date_format", activity.date_format)?
        .set_default("failures.analytics", "log")?)
}

/// Defaults, then `config/dashboard.*` if present, then `DASHBOARD__SECTION__KEY` variables.
pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = with_defaults()?
        .add_source(File::with_name("config/dashboard").required(false))
        .add_source(Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    finish(settings)
}

fn finish(settings: config::Config) -> anyhow::Result<DashboardConfig> {
    let config: DashboardConfig = settings.try_deserialize()?;
    if config.activity.limit == 0 {
        anyhow::bail!("activity.limit must be at least 1");
    }
    Ok(config)
}

/// Replace `${name}` placeholders in a template
pub fn expand_template(template: &str, vars: &HashMap<&str, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        let placeholder = format!("${{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}
