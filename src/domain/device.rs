//! Device classification from the User-Agent header.

/// Client device class derived from the raw `User-Agent` value.
///
/// Exactly three mutually exclusive outcomes. Classification is a pure
/// function of the header string and never consults external state, so the
/// same user agent always yields the same class.
///
/// # Usage Flow
///
/// 1. Redirect handler reads the `User-Agent` header (missing → empty string)
/// 2. [`DeviceClass::from_user_agent`] derives the class once per request
/// 3. [`crate::domain::redirect::resolve`] picks the target URL (or none)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Desktop,
    Mobile,
    Unknown,
}

/// Signatures of automated clients. Checked first: a crawler UA often carries
/// `Mozilla/5.0` and platform tokens that would otherwise match as desktop.
const BOT_SIGNATURES: &[&str] = &[
    "bot", "crawler", "spider", "curl/", "wget/", "python-requests", "headless",
];

/// Mobile platform tokens. Checked before desktop tokens: Android user agents
/// contain `Linux` and iOS user agents contain `like Mac OS X`.
const MOBILE_SIGNATURES: &[&str] = &[
    "android",
    "iphone",
    "ipad",
    "ipod",
    "windows phone",
    "blackberry",
    "opera mini",
    "iemobile",
    "webos",
    "mobi",
];

const DESKTOP_SIGNATURES: &[&str] = &["windows nt", "macintosh", "cros", "x11", "linux"];

impl DeviceClass {
    /// Classifies a raw `User-Agent` header value.
    ///
    /// An empty or whitespace-only string, a bot signature, or a value
    /// matching neither mobile nor desktop tokens all yield
    /// [`DeviceClass::Unknown`].
    pub fn from_user_agent(user_agent: &str) -> Self {
        let ua = user_agent.trim().to_ascii_lowercase();

        if ua.is_empty() {
            return Self::Unknown;
        }

        if BOT_SIGNATURES.iter().any(|sig| ua.contains(sig)) {
            return Self::Unknown;
        }

        if MOBILE_SIGNATURES.iter().any(|sig| ua.contains(sig)) {
            return Self::Mobile;
        }

        if DESKTOP_SIGNATURES.iter().any(|sig| ua.contains(sig)) {
            return Self::Desktop;
        }

        Self::Unknown
    }

    /// Stable label used in logs and analytics payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desktop => "desktop",
            Self::Mobile => "mobile",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
