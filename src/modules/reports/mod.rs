pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use services::ReportService;

/// Route wiring for the reports module
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    controllers::configure(cfg);
}
