//! Browser Flag Store
//!
//! `window.localStorage` backing for the persisted organization slug.

use scoped_graphql::FlagStore;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserFlagStore;

impl BrowserFlagStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl FlagStore for BrowserFlagStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable, '{}' not persisted", key);
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            log::warn!("could not persist '{}': {:?}", key, e);
        }
    }
}
