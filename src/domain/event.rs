//! Redirect event model for asynchronous analytics tracking.

use chrono::{DateTime, Utc};

use crate::domain::device::DeviceClass;

/// Event category shared by every redirect event.
pub const EVENT_CATEGORY: &str = "Redirect";

/// Which endpoint variant produced the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventAction {
    /// Phone-only redirect (`/{phonenum}`).
    Phone,
    /// Redirect with message text (`/{phonenum}/{message}`).
    Message,
}

impl EventAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "Phone",
            Self::Message => "Message",
        }
    }
}

/// An in-memory representation of a redirect event for async processing.
///
/// Used to pass tracking information from HTTP handlers to the background
/// worker via a channel. This decouples the HTTP response from the outbound
/// analytics call, so redirects are never delayed by the tracking backend.
///
/// # Design
///
/// - Label is the requested phone number, mirroring the analytics contract
/// - The raw user agent is optional to handle missing headers gracefully
/// - Cloneable for sending across async boundaries
///
/// # Usage Flow
///
/// 1. Created in a redirect handler with request metadata
/// 2. Sent to the channel (non-blocking, dropped if the queue is full)
/// 3. Processed by [`crate::domain::event_worker::run_event_worker`]
/// 4. Delivered via [`crate::infrastructure::analytics::AnalyticsSink`]
#[derive(Debug, Clone)]
pub struct RedirectEvent {
    pub action: EventAction,
    pub phone: String,
    pub device: DeviceClass,
    pub user_agent: Option<String>,
    pub queued_at: DateTime<Utc>,
}

impl RedirectEvent {
    /// Creates a new redirect event stamped with the current time.
    pub fn new(
        action: EventAction,
        phone: String,
        device: DeviceClass,
        user_agent: Option<&str>,
    ) -> Self {
        Self {
            action,
            phone,
            device,
            user_agent: user_agent.map(|s| s.to_string()),
            queued_at: Utc::now(),
        }
    }
}
