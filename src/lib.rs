//! chatlist — the contact-list fetch-and-present workflow of the chat
//! client's contacts screen.
//!
//! The screen authenticates against a hosted backend, lists the other
//! registered users (never the caller's own profile), resolves
//! phone-number searches to a conversation target, and routes on click.
//! Persistence, auth, querying, rendering, and routing all live behind the
//! collaborator traits in [`providers`]; [`backend`] is the production
//! implementation of the two remote ones.

pub mod backend;
pub mod config;
pub mod error;
pub mod phone;
pub mod presentation;
pub mod providers;
pub mod screen;
pub mod state;
pub mod types;

pub use config::{load_config, ScreenConfig};
pub use error::{ScreenError, Severity, UiNotification};
pub use providers::{IdentityProvider, NotificationSink, ProfileStore, Route, Router, StoreError};
pub use screen::ContactScreen;
pub use types::{ContactView, Principal, Profile, ViewPhase};

/// Initialize env-filtered logging for binaries and manual testing.
/// Safe to call once; respects `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();
}
