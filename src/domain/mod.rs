//! Domain layer containing the redirect decision logic.
//!
//! This module implements the core behavior of the service independent of
//! HTTP plumbing and external integrations.
//!
//! # Architecture
//!
//! - [`device`] - User-agent classification into desktop/mobile/unknown
//! - [`redirect`] - Deep-link target resolution
//! - [`event`] - Redirect tracking event model
//! - [`event_worker`] - Asynchronous analytics delivery worker
//!
//! # Request Flow
//!
//! 1. HTTP handler classifies the client via [`device::DeviceClass`]
//! 2. A [`event::RedirectEvent`] is sent to the async channel
//! 3. [`redirect::resolve`] produces the target URL (or none for unknown clients)
//! 4. [`event_worker::run_event_worker`] delivers events via
//!    [`crate::infrastructure::analytics::AnalyticsSink`]

pub mod device;
pub mod event;
pub mod event_worker;
pub mod redirect;
