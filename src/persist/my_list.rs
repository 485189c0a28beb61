use std::fmt;

use super::kv::KeyValueStore;
use crate::foundation::error::{AquariumError, AquariumResult};

/// Storage key of the saved list.
pub const MY_FISH_KEY: &str = "aquarium-my-fish";

/// Notification sent to [`SavedFishList`] listeners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListChange {
    /// An id was added.
    Added(String),
    /// An id was removed.
    Removed(String),
    /// The list was emptied.
    Cleared,
}

type Listener = Box<dyn FnMut(&ListChange) + Send>;

/// The user's saved fish: unique ids in the order they were added.
pub struct SavedFishList<S> {
    store: S,
    ids: Vec<String>,
    listeners: Vec<Listener>,
}

impl<S: fmt::Debug> fmt::Debug for SavedFishList<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SavedFishList")
            .field("store", &self.store)
            .field("ids", &self.ids)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<S: KeyValueStore> SavedFishList<S> {
    /// Load the list from `store`.
    ///
    /// A payload that is not a JSON array of strings is discarded with a warning.
    pub fn load(store: S) -> AquariumResult<Self> {
        let ids = match store.get(MY_FISH_KEY)? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(stored) => {
                    let mut ids: Vec<String> = Vec::with_capacity(stored.len());
                    for id in stored {
                        if !ids.contains(&id) {
                            ids.push(id);
                        }
                    }
                    ids
                }
                Err(e) => {
                    tracing::warn!(error = %e, "ignoring corrupt saved fish list");
                    Vec::new()
                }
            },
        };
        Ok(Self {
            store,
            ids,
            listeners: Vec::new(),
        })
    }

    /// Call `f` after every change.
    pub fn subscribe(&mut self, f: impl FnMut(&ListChange) + Send + 'static) {
        self.listeners.push(Box::new(f));
    }

    /// Save `id`. Returns `false` when it was already saved.
    pub fn add(&mut self, id: &str) -> AquariumResult<bool> {
        if self.contains(id) {
            return Ok(false);
        }
        let mut next = self.ids.clone();
        next.push(id.to_owned());
        self.commit(next)?;
        self.notify(ListChange::Added(id.to_owned()));
        Ok(true)
    }

    /// Forget `id`. Returns `false` when it was not saved.
    pub fn remove(&mut self, id: &str) -> AquariumResult<bool> {
        let Some(pos) = self.ids.iter().position(|s| s == id) else {
            return Ok(false);
        };
        let mut next = self.ids.clone();
        next.remove(pos);
        self.commit(next)?;
        self.notify(ListChange::Removed(id.to_owned()));
        Ok(true)
    }

    /// Flip `id`; returns whether it is saved afterwards.
    pub fn toggle(&mut self, id: &str) -> AquariumResult<bool> {
        if self.contains(id) {
            self.remove(id)?;
            Ok(false)
        } else {
            self.add(id)?;
            Ok(true)
        }
    }

    /// Drop every id. Listeners are notified even when the list was already empty.
    pub fn clear(&mut self) -> AquariumResult<()> {
        self.commit(Vec::new())?;
        self.notify(ListChange::Cleared);
        Ok(())
    }

    /// Return `true` when `id` is saved.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    /// Saved ids, oldest first.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Number of saved ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Return `true` when nothing is saved.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Give back the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Persist `next`, then make it the in-memory list. A failed write leaves the list unchanged.
    fn commit(&mut self, next: Vec<String>) -> AquariumResult<()> {
        let json = serde_json::to_string(&next)
            .map_err(|e| AquariumError::serde(format!("encode saved fish list: {e}")))?;
        self.store.set(MY_FISH_KEY, &json)?;
        self.ids = next;
        Ok(())
    }

    fn notify(&mut self, change: ListChange) {
        tracing::debug!(?change, saved = self.ids.len(), "saved fish list changed");
        for listener in &mut self.listeners {
            listener(&change);
        }
    }
}
