//! Handlers for WhatsApp deep-link redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};
use tracing::debug;

use crate::domain::device::DeviceClass;
use crate::domain::event::{EventAction, RedirectEvent};
use crate::domain::redirect::resolve;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a phone number to the WhatsApp send screen.
///
/// # Endpoint
///
/// `GET /{phonenum}`
///
/// # Request Flow
///
/// 1. Classify the client from the `User-Agent` header
/// 2. Send a redirect event to the background worker (fire-and-forget)
/// 3. Return 308 to the web client (desktop) or native scheme (mobile)
///
/// # Event Tracking
///
/// Events are sent to a bounded channel for async delivery. If the queue is
/// full the event is dropped; the redirect always proceeds regardless of
/// tracking outcome.
///
/// # Errors
///
/// Returns 400 Bad Request if the device class is neither desktop nor mobile.
pub async fn redirect_handler(
    Path(phonenum): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    resolve_and_track(&state, phonenum, None, &headers)
}

/// Redirects a phone number with a prefilled message text.
///
/// # Endpoint
///
/// `GET /{phonenum}/{message}`
///
/// Identical to [`redirect_handler`], with the path message form-urlencoded
/// into the target's `text` parameter.
pub async fn redirect_with_message_handler(
    Path((phonenum, message)): Path<(String, String)>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    resolve_and_track(&state, phonenum, Some(message), &headers)
}

/// Shared classify → track → resolve path for both redirect variants.
///
/// The event is enqueued before the decision is computed; a closed or full
/// queue leaves the response untouched.
fn resolve_and_track(
    state: &AppState,
    phone: String,
    message: Option<String>,
    headers: &HeaderMap,
) -> Result<Redirect, AppError> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let device = DeviceClass::from_user_agent(user_agent);

    let action = if message.is_some() {
        EventAction::Message
    } else {
        EventAction::Phone
    };

    let ua = (!user_agent.is_empty()).then_some(user_agent);
    let event = RedirectEvent::new(action, phone.clone(), device, ua);
    let _ = state.event_tx.try_send(event);

    let target =
        resolve(&phone, message.as_deref(), device).ok_or(AppError::UnknownDevice)?;

    debug!(device = device.as_str(), "redirect to: {}", target.url);

    Ok(Redirect::permanent(&target.url))
}
