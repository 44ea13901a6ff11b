// Presentation layer - HTTP handlers and the dashboard page
pub mod app_state;
pub mod handlers;
pub mod page;
