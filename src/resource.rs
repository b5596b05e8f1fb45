//! Reactive list state for one backend collection.

use leptos::prelude::*;
use serde::de::DeserializeOwned;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::error::ApiError;
use crate::models::Collection;
use crate::notify;

/// A collection loaded in full. Every mutation elsewhere ends with [`reload`](Self::reload).
pub struct ListResource<T: Send + Sync + 'static> {
    collection: Collection,
    pub items: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<T: Send + Sync + 'static> Clone for ListResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListResource<T> {}

impl<T> ListResource<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            items: RwSignal::new(Vec::new()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
        }
    }

    /// Create and start the first fetch.
    pub fn load(collection: Collection) -> Self {
        let resource = Self::new(collection);
        resource.reload();
        resource
    }

    /// Replace the list with a fresh `GET`. Overlapping calls are not
    /// cancelled; the last response to arrive wins.
    pub fn reload(&self) {
        let this = *self;
        this.loading.set(true);
        spawn_local(async move {
            let result = api::list::<T>(this.collection).await;
            if let Err(e) = &result {
                log::error!("Failed to load {:?}: {}", this.collection, e);
            }
            let previous = this.items.get_untracked();
            let (items, error) = settle(previous, result);
            this.items.set(items);
            this.error.set(error);
            this.loading.set(false);
        });
    }

    /// Delete record `id` once the user confirms `prompt`, then reload.
    pub fn remove(&self, id: i64, prompt: &str) {
        if !notify::confirm(prompt) {
            return;
        }
        let this = *self;
        spawn_local(async move {
            match api::delete(this.collection, id).await {
                Ok(()) => {
                    log::info!("Deleted {:?} #{}", this.collection, id);
                    this.reload();
                }
                Err(e) => {
                    log::error!("Failed to delete {:?} #{}: {}", this.collection, id, e);
                    notify::alert("Eroare la ștergere.");
                }
            }
        });
    }

    pub fn count(&self) -> usize {
        self.items.with(Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// New list state after a fetch: a failed fetch keeps what was shown.
fn settle<T>(previous: Vec<T>, result: Result<Vec<T>, ApiError>) -> (Vec<T>, Option<String>) {
    match result {
        Ok(items) => (items, None),
        Err(e) => (previous, Some(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_replaces_list() {
        let (items, error) = settle(vec![1, 2, 3], Ok(vec![4, 5]));
        assert_eq!(items.len(), 2);
        assert_eq!(items, vec![4, 5]);
        assert!(error.is_none());
    }

    #[test]
    fn test_settle_keeps_list_on_failure() {
        let failed = Err(ApiError::Network("connection refused".to_string()));
        let (items, error) = settle(vec![1, 2], failed);
        assert_eq!(items, vec![1, 2]);
        assert_eq!(error.as_deref(), Some("Network error: connection refused"));
    }

    #[test]
    fn test_settle_empty_collection() {
        let (items, error) = settle(vec![7], Ok(Vec::<i32>::new()));
        assert!(items.is_empty());
        assert!(error.is_none());
    }
}
