//! Pure presentation mapping from profile rows to display attributes.
//!
//! No side effects and no failure modes; "now" is a parameter so the
//! relative-time rendering stays deterministic in tests.

use chrono::{DateTime, Utc};

use crate::types::{ContactView, Profile};

/// Placeholder for profiles without a display name.
pub const UNNAMED_PLACEHOLDER: &str = "Unknown User";

/// Avatar initials for a display name.
///
/// Absent name → `"U"`. Otherwise the first character of each whitespace
/// token, uppercased, truncated to two characters.
///
/// Example: "Jane Doe" → "JD", "jane" → "J", "Ana Maria Silva" → "AM"
pub fn initials(display_name: Option<&str>) -> String {
    let name = match display_name {
        Some(n) if !n.trim().is_empty() => n,
        _ => return "U".to_string(),
    };
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .take(2)
        .flat_map(|c| c.to_uppercase())
        .collect()
}

/// Presence label: a fixed "Online", or a relative rendering of `last_seen`
/// against `now`.
pub fn presence_text(is_online: bool, last_seen: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    if is_online {
        return "Online".to_string();
    }
    match last_seen {
        Some(seen) => format!("last seen {}", relative_time(seen, now)),
        None => "last seen a long time ago".to_string(),
    }
}

/// Coarse relative-time phrase for a past instant.
///
/// A `when` in the future (clock skew between backend and client) renders
/// as "just now".
fn relative_time(when: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(when);
    let secs = elapsed.num_seconds();
    if secs < 60 {
        return "just now".to_string();
    }
    let minutes = elapsed.num_minutes();
    if minutes < 60 {
        return plural(minutes, "minute");
    }
    let hours = elapsed.num_hours();
    if hours < 24 {
        return plural(hours, "hour");
    }
    plural(elapsed.num_days(), "day")
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", count, unit)
    }
}

/// Derive the full display row for a profile.
pub fn contact_view(profile: &Profile, now: DateTime<Utc>) -> ContactView {
    let name = profile
        .display_name
        .clone()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| UNNAMED_PLACEHOLDER.to_string());
    ContactView {
        id: profile.id.clone(),
        name,
        initials: initials(profile.display_name.as_deref()),
        presence: presence_text(profile.is_online, profile.last_seen, now),
        is_online: profile.is_online,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_initials_two_names() {
        assert_eq!(initials(Some("Jane Doe")), "JD");
    }

    #[test]
    fn test_initials_missing_name() {
        assert_eq!(initials(None), "U");
        assert_eq!(initials(Some("   ")), "U");
    }

    #[test]
    fn test_initials_single_and_many_tokens() {
        assert_eq!(initials(Some("jane")), "J");
        assert_eq!(initials(Some("Ana Maria Silva")), "AM");
    }

    #[test]
    fn test_presence_online_ignores_last_seen() {
        let now = Utc::now();
        assert_eq!(presence_text(true, Some(now - Duration::days(40)), now), "Online");
        assert_eq!(presence_text(true, None, now), "Online");
    }

    #[test]
    fn test_presence_relative_buckets() {
        let now = Utc::now();
        assert_eq!(
            presence_text(false, Some(now - Duration::seconds(20)), now),
            "last seen just now"
        );
        assert_eq!(
            presence_text(false, Some(now - Duration::minutes(5)), now),
            "last seen 5 minutes ago"
        );
        assert_eq!(
            presence_text(false, Some(now - Duration::hours(1)), now),
            "last seen 1 hour ago"
        );
        assert_eq!(
            presence_text(false, Some(now - Duration::hours(3)), now),
            "last seen 3 hours ago"
        );
        assert_eq!(
            presence_text(false, Some(now - Duration::days(2)), now),
            "last seen 2 days ago"
        );
    }

    #[test]
    fn test_presence_future_timestamp_is_just_now() {
        let now = Utc::now();
        assert_eq!(
            presence_text(false, Some(now + Duration::minutes(2)), now),
            "last seen just now"
        );
    }

    #[test]
    fn test_contact_view_placeholder_name() {
        let now = Utc::now();
        let profile = Profile {
            id: "u1".into(),
            display_name: None,
            phone_number: "5551234567@chatlist.app".into(),
            last_seen: Some(now - Duration::hours(2)),
            is_online: false,
        };
        let view = contact_view(&profile, now);
        assert_eq!(view.name, UNNAMED_PLACEHOLDER);
        assert_eq!(view.initials, "U");
        assert_eq!(view.presence, "last seen 2 hours ago");
    }
}
