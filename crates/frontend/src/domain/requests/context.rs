use chrono::{DateTime, Utc};
use contracts::domain::requests::{
    CreateRequestDto, RequestStatus, UpdateReasonDto, UpdateStatusDto,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::ApiError;
use crate::shared::toast::{use_toasts, ToastService};
use crate::system::auth::context::{use_session, SessionService};

use super::api;
use super::store::{RequestScope, RequestStore};

/// "Today" for optimistic entries, taken from the browser clock.
fn now_utc() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64)
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// Request service handed to the request screens through context.
///
/// Mediates every request-related server call and keeps the scoped
/// collection in [`RequestStore`].
#[derive(Clone, Copy)]
pub struct RequestsService {
    pub store: RwSignal<RequestStore>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    session: SessionService,
    toasts: ToastService,
}

impl RequestsService {
    fn new(session: SessionService, toasts: ToastService) -> Self {
        Self {
            store: RwSignal::new(RequestStore::default()),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            session,
            toasts,
        }
    }

    fn require_token(&self) -> Result<String, ApiError> {
        self.session
            .state
            .with_untracked(|s| s.token.clone())
            .ok_or_else(|| ApiError::validation("Not authenticated"))
    }

    pub fn clear_error(&self) {
        self.error.set(None);
    }

    /// Record a failed call. An expired session drops the client back to
    /// anonymous instead of surfacing the raw error again and again.
    fn note_failure(&self, e: &ApiError) {
        self.error.set(Some(e.message.clone()));
        self.toasts.error(e.message.clone());
        if e.is_unauthorized() {
            self.session.sign_out_local();
        }
    }

    /// Fetch the collection for the given scope/epoch pair. A response is
    /// only absorbed while its epoch is still current, so a fetch that was
    /// overtaken by a rescope is a no-op.
    fn spawn_fetch(&self, scope: RequestScope, epoch: u64) {
        let Some(endpoint) = scope.endpoint() else {
            return;
        };
        let svc = *self;

        spawn_local(async move {
            let token = match svc.require_token() {
                Ok(token) => token,
                Err(_) => return,
            };

            svc.loading.set(true);
            let result = api::fetch_requests(&token, endpoint).await;
            svc.loading.set(false);

            match result {
                Ok(fetched) => {
                    let absorbed = svc
                        .store
                        .try_update(|s| s.absorb(epoch, fetched))
                        .unwrap_or(false);
                    if absorbed {
                        svc.error.set(None);
                    }
                }
                Err(e) => {
                    log::warn!("request fetch failed: {}", e);
                    if e.is_unauthorized() {
                        svc.session.sign_out_local();
                    }
                    svc.error.set(Some(e.message));
                }
            }
        });
    }

    /// Re-fetch the current scope without changing it.
    pub fn refresh(&self) {
        let (scope, epoch) = self
            .store
            .with_untracked(|s| (s.scope(), s.epoch()));
        self.spawn_fetch(scope, epoch);
    }

    /// Re-derive the scope from the signed-in user and fetch it. Called on
    /// every current-user transition, including sign-out (which clears the
    /// collection without a fetch).
    pub fn rescope_for_current_user(&self) {
        let user = self.session.state.with_untracked(|s| s.current_user.clone());
        let (scope, epoch) = self
            .store
            .try_update(|s| s.rescope(user.as_ref()))
            .unwrap_or((RequestScope::None, 0));
        self.spawn_fetch(scope, epoch);
    }

    /// Submit a new request. The entry appears locally as pending right
    /// away and is reconciled with the server id on success, or rolled back
    /// on failure.
    pub async fn create_request(
        &self,
        speaker_name: String,
        manufacturer: String,
        reason: String,
    ) -> Result<(), ApiError> {
        let dto = CreateRequestDto {
            speaker_name,
            manufacturer,
            reason,
        };
        if let Err(message) = dto.validate() {
            self.toasts.error(message.clone());
            return Err(ApiError::validation(message));
        }

        let token = self.require_token()?;
        let Some(user) = self.session.state.with_untracked(|s| s.current_user.clone()) else {
            return Err(ApiError::validation("Not signed in"));
        };

        let provisional = self
            .store
            .try_update(|s| s.stage_create(&dto, &user, now_utc()))
            .unwrap_or(0);

        self.loading.set(true);
        let result = api::create_request(&token, &dto).await;
        self.loading.set(false);

        match result {
            Ok(created) => {
                self.store.update(|s| s.commit_create(provisional, created.id));
                self.toasts.success("Request created successfully!");
                Ok(())
            }
            Err(e) => {
                self.store.update(|s| s.abort_create(provisional));
                self.note_failure(&e);
                Err(e)
            }
        }
    }

    /// Update one request's reason.
    pub async fn update_request(&self, id: i64, reason: String) -> Result<(), ApiError> {
        let token = self.require_token()?;
        let dto = UpdateReasonDto {
            reason: reason.clone(),
        };

        self.loading.set(true);
        let result = api::update_reason(&token, id, &dto).await;
        self.loading.set(false);

        match result {
            Ok(_) => {
                self.store.update(|s| {
                    s.patch_reason(id, &reason);
                });
                self.toasts.success("Request updated successfully!");
                Ok(())
            }
            Err(e) => {
                self.note_failure(&e);
                Err(e)
            }
        }
    }

    /// Admin: approve or reject one request.
    pub async fn update_request_status(
        &self,
        id: i64,
        status: RequestStatus,
    ) -> Result<(), ApiError> {
        let token = self.require_token()?;
        let dto = UpdateStatusDto { status };

        self.loading.set(true);
        let result = api::update_status(&token, id, &dto).await;
        self.loading.set(false);

        match result {
            Ok(_) => {
                self.store.update(|s| {
                    s.patch_status(id, status);
                });
                self.toasts.success(format!("Request {} successfully!", status));
                Ok(())
            }
            Err(e) => {
                self.note_failure(&e);
                Err(e)
            }
        }
    }

    /// Admin: delete any request. Owners go through
    /// [`Self::delete_own_request`].
    pub async fn delete_request(&self, id: i64) -> Result<(), ApiError> {
        let token = self.require_token()?;

        self.loading.set(true);
        let result = api::delete_request(&token, id).await;
        self.loading.set(false);

        self.finish_delete(id, result)
    }

    /// Delete one of the signed-in user's own requests.
    pub async fn delete_own_request(&self, id: i64) -> Result<(), ApiError> {
        let token = self.require_token()?;

        self.loading.set(true);
        let result = api::delete_own_request(&token, id).await;
        self.loading.set(false);

        self.finish_delete(id, result)
    }

    fn finish_delete(
        &self,
        id: i64,
        result: Result<contracts::system::auth::ApiMessage, ApiError>,
    ) -> Result<(), ApiError> {
        match result {
            Ok(msg) => {
                self.store.update(|s| {
                    s.remove(id);
                });
                self.toasts
                    .success(msg.text().unwrap_or("Request deleted successfully!").to_string());
                Ok(())
            }
            Err(e) => {
                self.note_failure(&e);
                Err(e)
            }
        }
    }
}

/// Requests context provider component.
///
/// Must sit below `SessionProvider`; mounting it without one is a wiring
/// bug and panics immediately.
#[component]
pub fn RequestsProvider(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let svc = RequestsService::new(session, toasts);
    provide_context(svc);

    // Follow the signed-in user: admins hold every request, regular users
    // only their own, nobody holds anything.
    let current_user = Memo::new(move |_| session.state.with(|s| s.current_user.clone()));
    Effect::new(move |_| {
        current_user.track();
        svc.rescope_for_current_user();
    });

    children()
}

/// Hook to access the requests service
pub fn use_requests() -> RequestsService {
    use_context::<RequestsService>().expect("RequestsProvider not found in component tree")
}
