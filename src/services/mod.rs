//! Collaborator seams and the report use case built on them.

pub mod forecast_api;
pub mod surf_report;
