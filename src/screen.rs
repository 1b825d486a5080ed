//! The contacts-screen workflow orchestrator.
//!
//! Composes the collaborator seams in `providers.rs`: guard the session on
//! entry, fetch-and-filter the contact list once, resolve phone searches on
//! demand, and route on click. All persistence and querying stay behind the
//! `ProfileStore`/`IdentityProvider` traits; this module only sequences
//! calls and updates `ScreenState`.

use std::sync::Arc;

use crate::error::{ScreenError, UiNotification};
use crate::phone;
use crate::providers::{IdentityProvider, NotificationSink, ProfileStore, Route, Router, StoreError};
use crate::state::ScreenState;
use crate::types::Profile;

/// One instance of the contacts screen.
pub struct ContactScreen {
    identity: Arc<dyn IdentityProvider>,
    store: Arc<dyn ProfileStore>,
    router: Arc<dyn Router>,
    notifier: Arc<dyn NotificationSink>,
    /// Domain suffix for phone-key encoding.
    phone_domain: String,
    pub state: ScreenState,
}

impl ContactScreen {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        store: Arc<dyn ProfileStore>,
        router: Arc<dyn Router>,
        notifier: Arc<dyn NotificationSink>,
        phone_domain: impl Into<String>,
    ) -> Self {
        Self {
            identity,
            store,
            router,
            notifier,
            phone_domain: phone_domain.into(),
            state: ScreenState::new(),
        }
    }

    /// View entry: session guard, then the one-shot contact fetch.
    ///
    /// No session → redirect to login, silently, and do nothing else. A
    /// provider failure reads as "no session" here; there are no retries.
    pub async fn on_enter(&self) {
        let principal = match self.identity.current_principal().await {
            Some(p) => p,
            None => {
                log::info!("contacts: no session, redirecting to login");
                self.router.navigate(Route::Login);
                return;
            }
        };
        log::info!("contacts: session for principal {}", principal.id);
        self.state.set_principal(Some(principal));

        self.load_contacts().await;
    }

    /// Fetch the full profile set, drop the caller's own row, store the rest.
    ///
    /// One-shot, not a subscription. The loading flag is cleared on every
    /// path so the view leaves its Loading phase exactly once.
    pub async fn load_contacts(&self) {
        self.state.set_loading(true);

        match self.store.list_profiles().await {
            Ok(profiles) => {
                // Idempotent re-check: the session may have changed between
                // entry and fetch completion.
                let self_id = match self.identity.current_principal().await {
                    Some(p) => {
                        let id = p.id.clone();
                        self.state.set_principal(Some(p));
                        Some(id)
                    }
                    None => None,
                };

                let contacts: Vec<Profile> = profiles
                    .into_iter()
                    .filter(|p| self_id.as_deref() != Some(p.id.as_str()))
                    .collect();
                log::info!("contacts: loaded {} profiles", contacts.len());
                self.state.set_contacts(contacts);
            }
            Err(err) => {
                log::warn!("contacts: list fetch failed: {}", err);
                self.report(&ScreenError::Fetch(err));
                // List stays empty.
            }
        }

        self.state.set_loading(false);
    }

    /// Resolve a raw phone input to a chat target, or report why not.
    ///
    /// The searching flag wraps the whole operation and the input field is
    /// cleared unconditionally at the end, whatever the outcome.
    pub async fn search_phone(&self, raw_input: &str) {
        self.state.set_searching(true);

        if let Err(err) = self.resolve_phone(raw_input).await {
            self.report(&err);
        }

        self.state.clear_phone_input();
        self.state.set_searching(false);
    }

    async fn resolve_phone(&self, raw_input: &str) -> Result<(), ScreenError> {
        // Validation happens before any backend call.
        let digits = phone::normalize(raw_input)?;
        let key = phone::encode_key(&digits, &self.phone_domain);

        let profile = match self.store.find_by_phone_key(&key).await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                log::info!("contacts: no profile for phone key {}", key);
                return Err(ScreenError::Lookup);
            }
            Err(StoreError::Backend(msg)) => {
                log::warn!("contacts: phone lookup backend error: {}", msg);
                return Err(ScreenError::Lookup);
            }
            Err(StoreError::Transport(msg)) => {
                log::warn!("contacts: phone lookup transport error: {}", msg);
                return Err(ScreenError::Unexpected(msg));
            }
        };

        log::info!("contacts: phone search matched profile {}", profile.id);
        self.router.navigate(Route::Chat(profile.id));
        Ok(())
    }

    /// Navigate into a conversation with a listed contact.
    pub fn open_chat(&self, profile_id: &str) {
        self.router.navigate(Route::Chat(profile_id.to_string()));
    }

    /// End the session and return to login. Sign-out failures are logged
    /// but still navigate; the local session is gone either way.
    pub async fn sign_out(&self) {
        if let Err(err) = self.identity.sign_out().await {
            log::warn!("contacts: sign-out reported {}", err);
        }
        self.state.set_principal(None);
        self.router.navigate(Route::Login);
    }

    fn report(&self, err: &ScreenError) {
        if err.is_notified() {
            self.notifier.notify(UiNotification::from(err));
        }
    }
}
