//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Optional Variables
//!
//! - `GA_TRACKING_ID` - Measurement Protocol property id; tracking is
//!   disabled when unset
//! - `GA_CLIENT_ID` - anonymous client identifier for event hits (default: `555`)
//! - `GA_DEBUG` - send hits to the protocol's validation endpoint (default: `false`)
//! - `SENTRY_DSN` - error-reporting DSN; reporting is disabled when unset
//! - `ENV` - deployment-environment label on reported errors (default: `development`)
//! - `LISTEN` - bind address (default: `0.0.0.0:3000`)
//! - `PORT` - listening port, used when `LISTEN` is not set
//! - `EVENT_QUEUE_CAPACITY` - redirect event buffer size (default: 10000, min: 100)
//! - `RUST_LOG` - log level (default: `info`)
//! - `LOG_FORMAT` - log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub ga_tracking_id: Option<String>,
    pub ga_client_id: String,
    /// When true, event hits go to the Measurement Protocol validation
    /// endpoint, which parses but never records them.
    pub ga_debug: bool,
    pub sentry_dsn: Option<String>,
    /// Deployment-environment label attached to reported errors.
    pub environment: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub event_queue_capacity: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let ga_tracking_id = env::var("GA_TRACKING_ID").ok().filter(|v| !v.is_empty());
        let ga_client_id = env::var("GA_CLIENT_ID").unwrap_or_else(|_| "555".to_string());

        let ga_debug = env::var("GA_DEBUG")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let sentry_dsn = env::var("SENTRY_DSN").ok().filter(|v| !v.is_empty());
        let environment = env::var("ENV").unwrap_or_else(|_| "development".to_string());

        let listen_addr = Self::load_listen_addr();
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let event_queue_capacity = env::var("EVENT_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10_000);

        Self {
            ga_tracking_id,
            ga_client_id,
            ga_debug,
            sentry_dsn,
            environment,
            listen_addr,
            log_level,
            log_format,
            event_queue_capacity,
        }
    }

    /// Loads the bind address with fallback to port-only configuration.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable
    /// 2. Constructed from `PORT` on all interfaces
    /// 3. `0.0.0.0:3000`
    fn load_listen_addr() -> String {
        if let Ok(listen) = env::var("LISTEN") {
            return listen;
        }

        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
        format!("0.0.0.0:{port}")
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `event_queue_capacity` is out of range
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` or `SENTRY_DSN` is malformed
    pub fn validate(&self) -> Result<()> {
        if self.event_queue_capacity < 100 {
            anyhow::bail!(
                "EVENT_QUEUE_CAPACITY must be at least 100, got {}",
                self.event_queue_capacity
            );
        }

        if self.event_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "EVENT_QUEUE_CAPACITY is too large (max: 1000000), got {}",
                self.event_queue_capacity
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if let Some(ref dsn) = self.sentry_dsn {
            if !dsn.starts_with("http://") && !dsn.starts_with("https://") {
                anyhow::bail!("SENTRY_DSN must start with 'http://' or 'https://'");
            }
            if !dsn.contains('@') {
                anyhow::bail!("SENTRY_DSN must contain a public key before '@'");
            }
        }

        if self.environment.is_empty() {
            anyhow::bail!("ENV must not be empty");
        }

        Ok(())
    }

    /// Returns whether analytics tracking is enabled.
    pub fn is_tracking_enabled(&self) -> bool {
        self.ga_tracking_id.is_some()
    }

    /// Returns whether error reporting is enabled.
    pub fn is_reporting_enabled(&self) -> bool {
        self.sentry_dsn.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Environment: {}", self.environment);

        if let Some(ref tid) = self.ga_tracking_id {
            let endpoint = if self.ga_debug { "debug" } else { "live" };
            tracing::info!("  Tracking: {} ({} endpoint)", tid, endpoint);
        } else {
            tracing::info!("  Tracking: disabled");
        }

        if let Some(ref dsn) = self.sentry_dsn {
            tracing::info!("  Error reporting: {} (enabled)", mask_dsn(dsn));
        } else {
            tracing::info!("  Error reporting: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Event queue capacity: {}", self.event_queue_capacity);
    }
}

/// Masks the public key in a DSN for logging.
///
/// `https://abc123@host/42` → `https://***@host/42`
fn mask_dsn(dsn: &str) -> String {
    if let Some(scheme_end) = dsn.find("://") {
        let rest = &dsn[scheme_end + 3..];
        if let Some(at_pos) = rest.find('@') {
            return format!("{}***{}", &dsn[..scheme_end + 3], &rest[at_pos..]);
        }
    }

    dsn.to_string()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            ga_tracking_id: None,
            ga_client_id: "555".to_string(),
            ga_debug: false,
            sentry_dsn: None,
            environment: "test".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            event_queue_capacity: 10_000,
        }
    }

    #[test]
    fn test_mask_dsn() {
        assert_eq!(
            mask_dsn("https://abc123@o450.ingest.example.io/42"),
            "https://***@o450.ingest.example.io/42"
        );

        assert_eq!(mask_dsn("https://example.io/42"), "https://example.io/42");
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        config.event_queue_capacity = 50;
        assert!(config.validate().is_err());

        config.event_queue_capacity = 10_000;

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        config.sentry_dsn = Some("ftp://key@host/1".to_string());
        assert!(config.validate().is_err());

        config.sentry_dsn = Some("https://host/1".to_string());
        assert!(config.validate().is_err());

        config.sentry_dsn = Some("https://key@host/1".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_listen_addr_from_port() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::set_var("PORT", "8080");
        }

        assert_eq!(Config::load_listen_addr(), "0.0.0.0:8080");

        // Cleanup
        unsafe {
            env::remove_var("PORT");
        }
    }

    #[test]
    #[serial]
    fn test_listen_addr_priority() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:9999");
            env::set_var("PORT", "8080");
        }

        // LISTEN should take priority
        assert_eq!(Config::load_listen_addr(), "127.0.0.1:9999");

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("PORT");
        }
    }

    #[test]
    #[serial]
    fn test_listen_addr_default() {
        // SAFETY: Tests are run serially
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("PORT");
        }

        assert_eq!(Config::load_listen_addr(), "0.0.0.0:3000");
    }

    #[test]
    #[serial]
    fn test_empty_tracking_id_disables_tracking() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("GA_TRACKING_ID", "");
        }

        let config = Config::from_env();
        assert!(!config.is_tracking_enabled());

        // Cleanup
        unsafe {
            env::remove_var("GA_TRACKING_ID");
        }
    }
}
