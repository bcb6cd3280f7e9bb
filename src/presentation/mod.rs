// Presentation layer - HTTP routes for the rendered dashboard
pub mod app_state;
pub mod handlers;
