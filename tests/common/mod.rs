#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::mpsc;

use wa_redirect::domain::event::RedirectEvent;
use wa_redirect::infrastructure::reporting::{ErrorReporter, NullReporter};
use wa_redirect::state::AppState;

pub const DESKTOP_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub const MOBILE_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Mobile Safari/537.36";

pub const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X) \
    AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Mobile/15E148 Safari/604.1";

pub const BOT_UA: &str = "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";

pub fn create_test_state() -> (AppState, mpsc::Receiver<RedirectEvent>) {
    create_test_state_with_capacity(100)
}

pub fn create_test_state_with_capacity(
    capacity: usize,
) -> (AppState, mpsc::Receiver<RedirectEvent>) {
    let (tx, rx) = mpsc::channel(capacity);
    let state = AppState::new(tx, Arc::new(NullReporter::new()));
    (state, rx)
}

/// Reporter double that records every message for later assertions.
#[derive(Default)]
pub struct CapturingReporter {
    messages: Mutex<Vec<String>>,
}

impl CapturingReporter {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl ErrorReporter for CapturingReporter {
    async fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}
