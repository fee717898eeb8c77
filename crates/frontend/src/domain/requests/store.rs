//! Scoped bookkeeping for the purchase-request collection.
//!
//! The collection always represents exactly one scope: every request for an
//! admin, or only the signed-in user's own requests otherwise. Switching
//! users discards the previous scope before anything else happens, and the
//! epoch counter makes sure a slow response fetched for an older scope can
//! never leak into the current one.

use chrono::{DateTime, Utc};
use contracts::domain::requests::{CreateRequestDto, RequestStatus, SpeakerRequest};
use contracts::system::auth::UserInfo;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestScope {
    /// Nobody signed in; the collection stays empty.
    #[default]
    None,
    /// Regular user: only their own requests.
    Mine(i64),
    /// Admin: everything.
    All,
}

impl RequestScope {
    pub fn for_user(user: Option<&UserInfo>) -> Self {
        match user {
            None => RequestScope::None,
            Some(u) if u.is_admin => RequestScope::All,
            Some(u) => RequestScope::Mine(u.id),
        }
    }

    /// Which endpoint serves this scope, if any.
    pub fn endpoint(&self) -> Option<&'static str> {
        match self {
            RequestScope::None => None,
            RequestScope::Mine(_) => Some("/requests/user"),
            RequestScope::All => Some("/requests"),
        }
    }

    /// Whether a request belongs in a collection of this scope.
    pub fn admits(&self, request: &SpeakerRequest) -> bool {
        match self {
            RequestScope::None => false,
            RequestScope::Mine(user_id) => request.user_id == *user_id,
            RequestScope::All => true,
        }
    }
}

/// The client-held request collection plus the optimistic-update protocol.
#[derive(Clone, Debug, Default)]
pub struct RequestStore {
    scope: RequestScope,
    items: Vec<SpeakerRequest>,
    epoch: u64,
    next_provisional_id: i64,
}

impl RequestStore {
    pub fn scope(&self) -> RequestScope {
        self.scope
    }

    pub fn items(&self) -> &[SpeakerRequest] {
        &self.items
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Switch to the scope of the given user. The old collection is
    /// discarded immediately and the epoch advances, invalidating any fetch
    /// still in flight for the previous scope. Returns what to fetch.
    pub fn rescope(&mut self, user: Option<&UserInfo>) -> (RequestScope, u64) {
        self.scope = RequestScope::for_user(user);
        self.items.clear();
        self.epoch += 1;
        (self.scope, self.epoch)
    }

    /// Accept a fetched collection, unless it belongs to an older epoch.
    /// Entries outside the current scope are dropped even if the server
    /// sent them.
    pub fn absorb(&mut self, epoch: u64, fetched: Vec<SpeakerRequest>) -> bool {
        if epoch != self.epoch {
            return false;
        }
        let scope = self.scope;
        self.items = fetched.into_iter().filter(|r| scope.admits(r)).collect();
        true
    }

    /// Optimistically add a pending entry for a create that was just
    /// submitted. Returns the provisional (negative) id used until the
    /// server assigns a real one.
    pub fn stage_create(
        &mut self,
        dto: &CreateRequestDto,
        user: &UserInfo,
        now: DateTime<Utc>,
    ) -> i64 {
        self.next_provisional_id -= 1;
        let id = self.next_provisional_id;
        self.items.push(SpeakerRequest {
            id,
            speaker_name: dto.speaker_name.clone(),
            manufacturer: dto.manufacturer.clone(),
            reason: dto.reason.clone(),
            status: RequestStatus::Pending,
            request_date: now,
            user_id: user.id,
        });
        id
    }

    /// The server confirmed the create: swap in its id.
    pub fn commit_create(&mut self, provisional_id: i64, server_id: i64) {
        if let Some(entry) = self.items.iter_mut().find(|r| r.id == provisional_id) {
            entry.id = server_id;
        }
    }

    /// The create failed: roll the staged entry back out.
    pub fn abort_create(&mut self, provisional_id: i64) {
        self.items.retain(|r| r.id != provisional_id);
    }

    /// Patch one entry's reason, leaving everything else untouched.
    pub fn patch_reason(&mut self, id: i64, reason: &str) -> bool {
        match self.items.iter_mut().find(|r| r.id == id) {
            Some(entry) => {
                entry.reason = reason.to_string();
                true
            }
            None => false,
        }
    }

    /// Patch one entry's status, leaving everything else untouched.
    pub fn patch_status(&mut self, id: i64, status: RequestStatus) -> bool {
        match self.items.iter_mut().find(|r| r.id == id) {
            Some(entry) => {
                entry.status = status;
                true
            }
            None => false,
        }
    }

    /// Remove exactly the targeted entry.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|r| r.id != id);
        self.items.len() != before
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

    fn request(id: i64, user_id: i64, status: RequestStatus) -> SpeakerRequest {
        SpeakerRequest {
            id,
            speaker_name: format!("Model {}", id),
            manufacturer: "Acme".into(),
            reason: "demo".into(),
            status,
            request_date: DateTime::UNIX_EPOCH,
            user_id,
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_754_352_000, 0).unwrap()
    }

    #[test]
    fn scope_follows_the_user() {
        assert_eq!(RequestScope::for_user(None), RequestScope::None);
        assert_eq!(
            RequestScope::for_user(Some(&user(3, false))),
            RequestScope::Mine(3)
        );
        assert_eq!(RequestScope::for_user(Some(&user(1, true))), RequestScope::All);
        assert_eq!(RequestScope::None.endpoint(), None);
        assert_eq!(RequestScope::Mine(3).endpoint(), Some("/requests/user"));
        assert_eq!(RequestScope::All.endpoint(), Some("/requests"));
    }

    #[test]
    fn rescope_discards_previous_collection() {
        let mut store = RequestStore::default();
        let admin = user(1, true);
        let (_, epoch) = store.rescope(Some(&admin));
        assert!(store.absorb(epoch, vec![request(1, 2, RequestStatus::Pending)]));
        assert_eq!(store.items().len(), 1);

        // Switching to a regular user clears the admin-scoped list at once.
        store.rescope(Some(&user(3, false)));
        assert!(store.items().is_empty());

        // Signing out clears without a fetch.
        let (scope, _) = store.rescope(None);
        assert_eq!(scope, RequestScope::None);
        assert_eq!(scope.endpoint(), None);
    }

    #[test]
    fn non_admin_collection_never_holds_foreign_entries() {
        let mut store = RequestStore::default();
        let (_, epoch) = store.rescope(Some(&user(3, false)));

        // Even if the server answers with extra rows, foreign entries are
        // dropped on the way in.
        assert!(store.absorb(
            epoch,
            vec![
                request(1, 3, RequestStatus::Pending),
                request(2, 9, RequestStatus::Pending),
            ]
        ));
        assert!(store.items().iter().all(|r| r.user_id == 3));
        assert_eq!(store.items().len(), 1);
    }

    #[test]
    fn stale_epoch_responses_are_discarded() {
        let mut store = RequestStore::default();
        let (_, old_epoch) = store.rescope(Some(&user(1, true)));
        store.rescope(Some(&user(3, false)));

        // The all-requests payload from the admin scope lands late.
        assert!(!store.absorb(old_epoch, vec![request(1, 9, RequestStatus::Pending)]));
        assert!(store.items().is_empty());
    }

    #[test]
    fn staged_create_adds_exactly_one_pending_entry() {
        let mut store = RequestStore::default();
        let me = user(3, false);
        let (_, epoch) = store.rescope(Some(&me));
        assert!(store.absorb(epoch, vec![]));

        let dto = CreateRequestDto {
            speaker_name: "Model X".into(),
            manufacturer: "Acme".into(),
            reason: "need for demo".into(),
        };
        let provisional = store.stage_create(&dto, &me, now());

        assert_eq!(store.items().len(), 1);
        let staged = &store.items()[0];
        assert_eq!(staged.id, provisional);
        assert!(provisional < 0);
        assert_eq!(staged.speaker_name, "Model X");
        assert_eq!(staged.manufacturer, "Acme");
        assert_eq!(staged.reason, "need for demo");
        assert_eq!(staged.status, RequestStatus::Pending);
        assert_eq!(staged.user_id, 3);
        assert_eq!(staged.request_date, now());
    }

    #[test]
    fn commit_swaps_in_the_server_id() {
        let mut store = RequestStore::default();
        let me = user(3, false);
        store.rescope(Some(&me));
        let dto = CreateRequestDto {
            speaker_name: "Model X".into(),
            manufacturer: "Acme".into(),
            reason: "demo".into(),
        };
        let provisional = store.stage_create(&dto, &me, now());

        store.commit_create(provisional, 42);
        assert_eq!(store.items()[0].id, 42);
    }

    #[test]
    fn abort_rolls_the_staged_entry_back() {
        let mut store = RequestStore::default();
        let me = user(3, false);
        let (_, epoch) = store.rescope(Some(&me));
        assert!(store.absorb(epoch, vec![request(7, 3, RequestStatus::Pending)]));

        let dto = CreateRequestDto {
            speaker_name: "Model X".into(),
            manufacturer: "Acme".into(),
            reason: "demo".into(),
        };
        let provisional = store.stage_create(&dto, &me, now());
        assert_eq!(store.items().len(), 2);

        store.abort_create(provisional);
        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].id, 7);
    }

    #[test]
    fn status_update_touches_only_the_target() {
        let mut store = RequestStore::default();
        let (_, epoch) = store.rescope(Some(&user(1, true)));
        assert!(store.absorb(
            epoch,
            vec![
                request(7, 3, RequestStatus::Pending),
                request(8, 4, RequestStatus::Pending),
            ]
        ));

        assert!(store.patch_status(7, RequestStatus::Approved));

        let by_id = |id: i64| store.items().iter().find(|r| r.id == id).unwrap().clone();
        assert_eq!(by_id(7).status, RequestStatus::Approved);
        assert_eq!(by_id(8).status, RequestStatus::Pending);

        assert!(!store.patch_status(99, RequestStatus::Rejected));
    }

    #[test]
    fn reason_update_touches_only_the_target() {
        let mut store = RequestStore::default();
        let (_, epoch) = store.rescope(Some(&user(3, false)));
        assert!(store.absorb(
            epoch,
            vec![
                request(1, 3, RequestStatus::Pending),
                request(2, 3, RequestStatus::Pending),
            ]
        ));

        assert!(store.patch_reason(2, "replacing a blown driver"));
        assert_eq!(store.items()[0].reason, "demo");
        assert_eq!(store.items()[1].reason, "replacing a blown driver");
    }

    #[test]
    fn remove_deletes_exactly_the_targeted_id() {
        let mut store = RequestStore::default();
        let (_, epoch) = store.rescope(Some(&user(1, true)));
        assert!(store.absorb(
            epoch,
            vec![
                request(1, 2, RequestStatus::Pending),
                request(2, 3, RequestStatus::Approved),
                request(3, 4, RequestStatus::Rejected),
            ]
        ));

        assert!(store.remove(2));
        let ids: Vec<i64> = store.items().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3]);

        assert!(!store.remove(2));
    }
}
