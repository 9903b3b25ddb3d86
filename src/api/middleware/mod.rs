//! HTTP middleware for request processing and observability.

pub mod error_report;
pub mod tracing;
