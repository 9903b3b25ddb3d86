//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod debug;
pub mod redirect;
pub mod root;

pub use debug::debug_error_handler;
pub use redirect::{redirect_handler, redirect_with_message_handler};
pub use root::root_handler;
