//! View state for the contacts screen.
//!
//! Each async operation owns its own flag; the two in-flight operations
//! (initial fetch, phone search) never touch each other's fields, so plain
//! mutexes are enough. Accessors tolerate poisoned locks the same way the
//! rest of the app does: a poisoned read falls back to the default.

use std::sync::Mutex;

use crate::types::{Principal, Profile, ViewPhase};

/// Mutable state of one contacts-screen instance.
pub struct ScreenState {
    principal: Mutex<Option<Principal>>,
    contacts: Mutex<Vec<Profile>>,
    /// True until the first contact fetch resolves.
    loading: Mutex<bool>,
    /// Busy overlay for an in-flight phone search.
    searching: Mutex<bool>,
    phone_input: Mutex<String>,
}

impl ScreenState {
    pub fn new() -> Self {
        Self {
            principal: Mutex::new(None),
            contacts: Mutex::new(Vec::new()),
            loading: Mutex::new(true),
            searching: Mutex::new(false),
            phone_input: Mutex::new(String::new()),
        }
    }

    pub fn principal(&self) -> Option<Principal> {
        self.principal
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn set_principal(&self, principal: Option<Principal>) {
        if let Ok(mut guard) = self.principal.lock() {
            *guard = principal;
        }
    }

    pub fn contacts(&self) -> Vec<Profile> {
        self.contacts
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn set_contacts(&self, contacts: Vec<Profile>) {
        if let Ok(mut guard) = self.contacts.lock() {
            *guard = contacts;
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.lock().map(|guard| *guard).unwrap_or(false)
    }

    pub fn set_loading(&self, loading: bool) {
        if let Ok(mut guard) = self.loading.lock() {
            *guard = loading;
        }
    }

    pub fn is_searching(&self) -> bool {
        self.searching.lock().map(|guard| *guard).unwrap_or(false)
    }

    pub fn set_searching(&self, searching: bool) {
        if let Ok(mut guard) = self.searching.lock() {
            *guard = searching;
        }
    }

    pub fn phone_input(&self) -> String {
        self.phone_input
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    pub fn set_phone_input(&self, input: impl Into<String>) {
        if let Ok(mut guard) = self.phone_input.lock() {
            *guard = input.into();
        }
    }

    pub fn clear_phone_input(&self) {
        self.set_phone_input(String::new());
    }

    /// Current render phase. `searching` is deliberately not part of this:
    /// the busy indicator overlays `Empty`/`Listing` without replacing them.
    pub fn phase(&self) -> ViewPhase {
        if self.is_loading() {
            ViewPhase::Loading
        } else if self.contacts.lock().map(|g| g.is_empty()).unwrap_or(true) {
            ViewPhase::Empty
        } else {
            ViewPhase::Listing
        }
    }
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Profile;

    fn profile(id: &str) -> Profile {
        Profile {
            id: id.to_string(),
            display_name: Some(id.to_string()),
            phone_number: String::new(),
            last_seen: None,
            is_online: false,
        }
    }

    #[test]
    fn test_phase_starts_loading() {
        let state = ScreenState::new();
        assert_eq!(state.phase(), ViewPhase::Loading);
    }

    #[test]
    fn test_phase_empty_after_resolve() {
        let state = ScreenState::new();
        state.set_loading(false);
        assert_eq!(state.phase(), ViewPhase::Empty);
    }

    #[test]
    fn test_phase_listing_with_contacts() {
        let state = ScreenState::new();
        state.set_contacts(vec![profile("a")]);
        state.set_loading(false);
        assert_eq!(state.phase(), ViewPhase::Listing);
    }

    #[test]
    fn test_searching_does_not_change_phase() {
        let state = ScreenState::new();
        state.set_loading(false);
        state.set_searching(true);
        assert_eq!(state.phase(), ViewPhase::Empty);
        assert!(state.is_searching());
    }

    #[test]
    fn test_phone_input_roundtrip() {
        let state = ScreenState::new();
        state.set_phone_input("555-123-4567");
        assert_eq!(state.phone_input(), "555-123-4567");
        state.clear_phone_input();
        assert_eq!(state.phone_input(), "");
    }
}
