//! The session state machine, kept free of browser and network types so the
//! lifecycle rules can be exercised in plain unit tests. The reactive layer
//! in `context.rs` owns a `SessionState` inside a signal and calls these
//! transitions.

use contracts::system::auth::UserInfo;

/// Where the bearer token is persisted between visits.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// In-memory store for tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore(std::cell::RefCell<Option<String>>);

impl MemoryTokenStore {
    pub fn stored(&self) -> Option<String> {
        self.0.borrow().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Anonymous,
    Authenticating,
    Authenticated,
}

/// Client authentication state: the token plus the user record derived from
/// it. The session only counts as authenticated once both are present.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
    pub current_user: Option<UserInfo>,
    authenticating: bool,
}

impl SessionState {
    /// Bootstrap from persisted storage. A stored token alone is not enough
    /// to be authenticated; the current-user fetch has to confirm it first.
    pub fn restore(store: &dyn TokenStore) -> Self {
        Self {
            token: store.load(),
            current_user: None,
            authenticating: false,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        if self.authenticating {
            SessionPhase::Authenticating
        } else if self.token.is_some() && self.current_user.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::Anonymous
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase() == SessionPhase::Authenticated
    }

    pub fn is_admin(&self) -> bool {
        self.current_user.as_ref().map(|u| u.is_admin).unwrap_or(false)
    }

    /// A login or registration attempt has been submitted.
    pub fn begin_authentication(&mut self) {
        self.authenticating = true;
    }

    /// The server handed us a token. It is persisted immediately, but the
    /// session stays in `Authenticating` until the user record arrives.
    pub fn accept_token(&mut self, store: &dyn TokenStore, token: String) {
        store.save(&token);
        self.token = Some(token);
    }

    /// The current-user fetch for the held token succeeded.
    pub fn user_loaded(&mut self, user: UserInfo) {
        self.current_user = Some(user);
        self.authenticating = false;
    }

    /// The attempt finished without a token: a failed login, or a
    /// registration (which never yields one). Nothing was persisted, so only
    /// the in-flight flag is dropped.
    pub fn end_authentication(&mut self) {
        self.authenticating = false;
    }

    /// Drop the session entirely: storage and memory. Used for logout,
    /// account deletion and self-healing from a stale token; must leave the
    /// client anonymous no matter what state it was in.
    pub fn sign_out(&mut self, store: &dyn TokenStore) {
        store.clear();
        *self = SessionState::default();
    }

    /// Token disappeared (or never existed): clear the user record without
    /// touching storage or the network.
    pub fn clear_user(&mut self) {
        self.current_user = None;
        self.authenticating = false;
    }

    /// Apply a successful profile update to the in-memory record. The token
    /// is untouched.
    pub fn merge_profile(&mut self, username: &str, email: &str) {
        if let Some(user) = self.current_user.as_mut() {
            user.username = username.to_string();
            user.email = email.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, admin: bool) -> UserInfo {
        UserInfo {
            id,
            username: format!("user{}", id),
            email: format!("user{}@example.com", id),
            is_admin: admin,
        }
    }

    #[test]
    fn successful_login_reaches_authenticated_and_persists_token() {
        let store = MemoryTokenStore::default();
        let mut state = SessionState::restore(&store);
        assert_eq!(state.phase(), SessionPhase::Anonymous);

        state.begin_authentication();
        assert_eq!(state.phase(), SessionPhase::Authenticating);

        state.accept_token(&store, "tok-123".into());
        // Token alone is not enough.
        assert_eq!(state.phase(), SessionPhase::Authenticating);
        assert_eq!(store.stored().as_deref(), Some("tok-123"));

        state.user_loaded(user(3, false));
        assert_eq!(state.phase(), SessionPhase::Authenticated);
    }

    #[test]
    fn failed_login_stays_anonymous_and_persists_nothing() {
        let store = MemoryTokenStore::default();
        let mut state = SessionState::restore(&store);

        state.begin_authentication();
        state.end_authentication();

        assert_eq!(state.phase(), SessionPhase::Anonymous);
        assert_eq!(store.stored(), None);
    }

    #[test]
    fn failed_user_fetch_after_token_clears_everything() {
        let store = MemoryTokenStore::default();
        let mut state = SessionState::restore(&store);

        state.begin_authentication();
        state.accept_token(&store, "tok-123".into());
        // Current-user fetch rejected the token: self-heal via sign_out.
        state.sign_out(&store);

        assert_eq!(state.phase(), SessionPhase::Anonymous);
        assert_eq!(store.stored(), None);
    }

    #[test]
    fn sign_out_always_clears_state_and_storage() {
        let store = MemoryTokenStore::default();
        store.save("tok-abc");
        let mut state = SessionState::restore(&store);
        state.user_loaded(user(1, true));
        assert!(state.is_authenticated());

        // The revocation call may have failed; local sign-out is
        // unconditional.
        state.sign_out(&store);
        assert_eq!(state.phase(), SessionPhase::Anonymous);
        assert_eq!(state.token, None);
        assert_eq!(state.current_user, None);
        assert_eq!(store.stored(), None);
    }

    #[test]
    fn missing_token_clears_user_without_touching_storage() {
        let mut state = SessionState::default();
        state.user_loaded(user(2, false));

        state.token = None;
        state.clear_user();

        assert_eq!(state.current_user, None);
        assert_eq!(state.phase(), SessionPhase::Anonymous);
    }

    #[test]
    fn merge_profile_updates_only_name_and_email() {
        let store = MemoryTokenStore::default();
        let mut state = SessionState::restore(&store);
        state.accept_token(&store, "tok".into());
        state.user_loaded(user(5, true));

        state.merge_profile("newname", "new@example.com");

        let current = state.current_user.as_ref().unwrap();
        assert_eq!(current.username, "newname");
        assert_eq!(current.email, "new@example.com");
        assert_eq!(current.id, 5);
        assert!(current.is_admin);
        assert_eq!(state.token.as_deref(), Some("tok"));
    }

    #[test]
    fn restored_token_is_not_authenticated_until_user_loads() {
        let store = MemoryTokenStore::default();
        store.save("stale");
        let state = SessionState::restore(&store);
        assert_eq!(state.phase(), SessionPhase::Anonymous);
        assert_eq!(state.token.as_deref(), Some("stale"));
    }
}
