use contracts::system::auth::{LoginRequest, RegisterRequest, UpdateProfileRequest, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::ApiError;
use crate::shared::toast::{use_toasts, ToastService};

use super::api;
use super::session::{SessionPhase, SessionState};
use super::storage::LocalTokenStore;

/// Session service handed to every page through context.
///
/// Owns the authentication lifecycle and the global busy flag that is
/// toggled for the duration of each API call.
#[derive(Clone, Copy)]
pub struct SessionService {
    pub state: RwSignal<SessionState>,
    pub busy: RwSignal<bool>,
    toasts: ToastService,
}

impl SessionService {
    fn new(toasts: ToastService) -> Self {
        Self {
            state: RwSignal::new(SessionState::restore(&LocalTokenStore)),
            busy: RwSignal::new(false),
            toasts,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.with(|s| s.phase())
    }

    pub fn current_user(&self) -> Option<UserInfo> {
        self.state.with(|s| s.current_user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.is_authenticated())
    }

    pub fn is_admin(&self) -> bool {
        self.state.with(|s| s.is_admin())
    }

    fn require_token(&self) -> Result<String, ApiError> {
        self.state
            .with_untracked(|s| s.token.clone())
            .ok_or_else(|| ApiError::validation("Not authenticated"))
    }

    /// Drop the session locally: storage and memory, no network.
    pub fn sign_out_local(&self) {
        self.state.update(|s| s.sign_out(&LocalTokenStore));
    }

    /// Create an account. Success does not sign the user in; the caller
    /// sends them to the sign-in panel.
    pub async fn register(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> Result<(), ApiError> {
        let body = RegisterRequest {
            username,
            email,
            password,
        };

        self.state.update(|s| s.begin_authentication());
        self.busy.set(true);
        let result = api::register(&body).await;
        self.busy.set(false);
        self.state.update(|s| s.end_authentication());

        match result {
            Ok(msg) => {
                self.toasts
                    .success(msg.text().unwrap_or("Registration successful!").to_string());
                Ok(())
            }
            Err(e) => {
                self.toasts.error(e.message.clone());
                Err(e)
            }
        }
    }

    /// Exchange credentials for a session. On success the token is
    /// persisted and set in memory, which triggers the current-user fetch;
    /// on failure the session is left untouched.
    pub async fn login(&self, email: String, password: String) -> Result<(), ApiError> {
        let body = LoginRequest { email, password };

        self.state.update(|s| s.begin_authentication());
        self.busy.set(true);
        let result = api::login(&body).await;
        self.busy.set(false);

        match result {
            Ok(response) => {
                self.state
                    .update(|s| s.accept_token(&LocalTokenStore, response.access_token));
                self.toasts.success("Logged in successfully!");
                Ok(())
            }
            Err(e) => {
                self.state.update(|s| s.end_authentication());
                self.toasts.error(e.message.clone());
                Err(e)
            }
        }
    }

    /// Best-effort server revocation, then an unconditional local sign-out.
    /// Never fails: the client ends up logged out even when the network
    /// call does not go through.
    pub async fn logout(&self) {
        if let Ok(token) = self.require_token() {
            self.busy.set(true);
            let result = api::logout(&token).await;
            self.busy.set(false);
            match result {
                Ok(msg) => self
                    .toasts
                    .success(msg.text().unwrap_or("Logged out successfully!").to_string()),
                Err(e) => log::warn!("logout revocation failed: {}", e),
            }
        }
        self.sign_out_local();
    }

    /// PATCH the profile; a success merges the new username/email into the
    /// in-memory record and leaves the token alone.
    pub async fn update_profile(
        &self,
        username: String,
        email: String,
        current_password: String,
        new_password: Option<String>,
    ) -> Result<(), ApiError> {
        let token = self.require_token()?;
        let body = UpdateProfileRequest {
            username: username.clone(),
            email: email.clone(),
            password: current_password,
            new_password,
        };

        self.busy.set(true);
        let result = api::update_profile(&token, &body).await;
        self.busy.set(false);

        match result {
            Ok(msg) => {
                // The backend reports some rejections inside a 2xx body.
                if let Some(error) = msg.error {
                    self.toasts.error(error.clone());
                    return Err(ApiError {
                        status: None,
                        message: error,
                    });
                }
                self.state.update(|s| s.merge_profile(&username, &email));
                self.toasts.success(
                    msg.success
                        .unwrap_or_else(|| "Profile updated successfully!".to_string()),
                );
                Ok(())
            }
            Err(e) => {
                self.toasts.error(e.message.clone());
                if e.is_unauthorized() {
                    self.sign_out_local();
                }
                Err(e)
            }
        }
    }

    /// Delete the account; a success clears the session exactly like logout
    /// without another round trip.
    pub async fn delete_profile(&self) -> Result<(), ApiError> {
        let token = self.require_token()?;

        self.busy.set(true);
        let result = api::delete_profile(&token).await;
        self.busy.set(false);

        match result {
            Ok(msg) => {
                self.sign_out_local();
                self.toasts
                    .success(msg.text().unwrap_or("Profile deleted successfully!").to_string());
                Ok(())
            }
            Err(e) => {
                self.toasts.error(e.message.clone());
                if e.is_unauthorized() {
                    self.sign_out_local();
                }
                Err(e)
            }
        }
    }

    /// Re-derive the current user from the held token. No token clears the
    /// user without a network call; a rejected token drops the whole
    /// session instead of surfacing the raw error.
    pub fn refresh_current_user(&self) {
        let svc = *self;
        let token = self.state.with_untracked(|s| s.token.clone());

        let Some(token) = token else {
            svc.state.update(|s| s.clear_user());
            return;
        };

        spawn_local(async move {
            svc.busy.set(true);
            let result = api::current_user(&token).await;
            svc.busy.set(false);

            match result {
                Ok(user) => svc.state.update(|s| s.user_loaded(user)),
                Err(e) => {
                    log::warn!("current-user fetch failed, signing out: {}", e);
                    svc.sign_out_local();
                }
            }
        });
    }
}

/// Session context provider component
#[component]
pub fn SessionProvider(children: ChildrenFn) -> impl IntoView {
    let toasts = use_toasts();
    let svc = SessionService::new(toasts);
    provide_context(svc);

    // Refetch the current user whenever the token actually changes,
    // including the initial restore from localStorage.
    let token = Memo::new(move |_| svc.state.with(|s| s.token.clone()));
    Effect::new(move |_| {
        token.track();
        svc.refresh_current_user();
    });

    children()
}

/// Hook to access the session service
pub fn use_session() -> SessionService {
    use_context::<SessionService>().expect("SessionProvider not found in component tree")
}
