//! Domain types for the contacts screen.
//!
//! All rows here are owned by the hosted backend; this crate only reads them.
//! Wire-facing structs use camelCase names to match the backend's JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The currently authenticated user, as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    pub id: String,
    /// Sign-in address, when the provider reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A user-account record readable by any authenticated principal.
///
/// `phone_number` holds the backend's phone key — the email-shaped encoding
/// `<digits>@<domain>` used for exact lookup, not a display value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub last_seen: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_online: bool,
}

/// Display attributes derived from a [`Profile`] for one rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactView {
    pub id: String,
    pub name: String,
    /// At most two uppercase characters for the avatar badge.
    pub initials: String,
    /// "Online" or a relative last-seen rendering.
    pub presence: String,
    pub is_online: bool,
}

/// Mutually exclusive render phases of the contacts screen.
///
/// The `searching` busy flag is an overlay on `Empty`/`Listing`, not a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewPhase {
    /// Initial state, until the first contact fetch resolves.
    Loading,
    /// Fetch resolved with zero contacts.
    Empty,
    /// Fetch resolved with one or more contacts.
    Listing,
}
