//! Redirect target resolution for WhatsApp deep links.

use url::form_urlencoded;

use crate::domain::device::DeviceClass;

/// Web client send endpoint, used for desktop browsers.
const WEB_SEND_URL: &str = "https://web.whatsapp.com/send";

/// Native app scheme, used for mobile browsers.
const NATIVE_SEND_URL: &str = "whatsapp://send";

/// A resolved redirect destination.
///
/// Produced by [`resolve`] for classifiable clients; the HTTP layer turns it
/// into a `308 Permanent Redirect`. Unclassifiable clients get no target and
/// are answered with `400` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    pub url: String,
}

/// Resolves the redirect destination for a classified client.
///
/// The phone number is embedded as-is after a literal `+`; no format
/// validation is performed. The message, when present, is form-urlencoded
/// and appended as the `text` query parameter.
///
/// # Returns
///
/// - `Some(RedirectTarget)` for [`DeviceClass::Desktop`] and
///   [`DeviceClass::Mobile`]
/// - `None` for [`DeviceClass::Unknown`]
pub fn resolve(phone: &str, message: Option<&str>, device: DeviceClass) -> Option<RedirectTarget> {
    let base = match device {
        DeviceClass::Desktop => WEB_SEND_URL,
        DeviceClass::Mobile => NATIVE_SEND_URL,
        DeviceClass::Unknown => return None,
    };

    let mut url = format!("{base}?phone=+{phone}");

    if let Some(text) = message {
        url.push_str("&text=");
        url.extend(form_urlencoded::byte_serialize(text.as_bytes()));
    }

    Some(RedirectTarget { url })
}
