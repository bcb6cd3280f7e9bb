// Domain layer - Ticket models and display formatting
pub mod analytics;
pub mod format;
pub mod ticket;
