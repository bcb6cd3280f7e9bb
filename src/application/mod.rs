// Application layer - Dashboard use cases and the seams they depend on
pub mod activity_service;
pub mod dashboard_api;
pub mod dashboard_service;
pub mod stats_service;
pub mod view;
