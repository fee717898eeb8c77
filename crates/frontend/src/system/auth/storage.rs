use web_sys::window;

use super::session::TokenStore;

const ACCESS_TOKEN_KEY: &str = "access_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Token persistence over browser localStorage. Storage failures degrade to
/// an in-memory-only session rather than erroring.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStore;

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
    }

    fn save(&self, token: &str) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        }
    }
}
