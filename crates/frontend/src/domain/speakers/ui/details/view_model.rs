use contracts::domain::speakers::{CreateReviewDto, Speaker};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::speakers::api;
use crate::shared::toast::ToastService;
use crate::system::auth::context::SessionService;

/// ViewModel for the speaker detail screen: the loaded record plus the
/// review-form state.
#[derive(Clone, Copy)]
pub struct SpeakerDetailsViewModel {
    pub speaker: RwSignal<Option<Speaker>>,
    pub loading: RwSignal<bool>,
    pub missing: RwSignal<bool>,
    pub rating: RwSignal<u8>,
    pub comment: RwSignal<String>,
    pub submitting: RwSignal<bool>,
}

impl SpeakerDetailsViewModel {
    pub fn new() -> Self {
        Self {
            speaker: RwSignal::new(None),
            loading: RwSignal::new(false),
            missing: RwSignal::new(false),
            rating: RwSignal::new(0),
            comment: RwSignal::new(String::new()),
            submitting: RwSignal::new(false),
        }
    }

    pub fn can_submit_review(&self) -> bool {
        self.rating.get() > 0 && !self.comment.get().trim().is_empty() && !self.submitting.get()
    }

    /// Load (or reload) the speaker behind the route.
    pub fn load(&self, session: SessionService, toasts: ToastService, id: i64) {
        let vm = *self;
        vm.loading.set(true);
        vm.missing.set(false);

        spawn_local(async move {
            let token = session.state.with_untracked(|s| s.token.clone());
            let result = api::fetch_speaker(token.as_deref(), id).await;
            vm.loading.set(false);
            match result {
                Ok(speaker) => vm.speaker.set(Some(speaker)),
                Err(e) => {
                    log::warn!("speaker {} fetch failed: {}", id, e);
                    toasts.error("We couldn't load the speaker details. Please try again later.");
                    vm.speaker.set(None);
                    vm.missing.set(true);
                }
            }
        });
    }

    /// Post the review form against the loaded speaker, then refetch so the
    /// aggregate rating and review list reflect it.
    pub fn submit_review(&self, session: SessionService, toasts: ToastService, id: i64) {
        let vm = *self;

        if session.state.with_untracked(|s| s.current_user.is_none()) {
            toasts.error("Please sign in to submit a review");
            return;
        }

        let dto = CreateReviewDto {
            speaker_id: id,
            rating: vm.rating.get_untracked(),
            comment: vm.comment.get_untracked(),
        };
        if let Err(message) = dto.validate() {
            toasts.error(message);
            return;
        }

        vm.submitting.set(true);
        spawn_local(async move {
            let token = session.state.with_untracked(|s| s.token.clone());
            let Some(token) = token else {
                vm.submitting.set(false);
                toasts.error("Please sign in to submit a review");
                return;
            };

            let result = api::create_review(&token, &dto).await;
            vm.submitting.set(false);
            match result {
                Ok(_) => {
                    toasts.success("Thank you for your review!");
                    vm.rating.set(0);
                    vm.comment.set(String::new());
                    vm.load(session, toasts, id);
                }
                Err(e) => toasts.error(e.message),
            }
        });
    }
}
