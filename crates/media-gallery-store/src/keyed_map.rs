//! Keyed entity map
//!
//! Normalized storage shared by the gallery and image reducers. Entries are
//! addressed by a synthetic string key derived from the entity id
//! (`gallery_5`, `image_22`); the key is always re-derived from the id, never
//! stored by callers.
//!
//! Every operation takes the map by value and returns the new map, so reducers
//! can thread state through without in-place mutation leaking out. Missing ids
//! are never an error.

use media_gallery_client::{ApiError, GalleryId, ImageId};
use std::fmt;
use std::marker::PhantomData;

/// Id type that can address a [`KeyedMap`] entry
pub trait EntityKey: Copy + fmt::Display {
    /// Fixed prefix of the synthetic key
    const PREFIX: &'static str;
}

impl EntityKey for GalleryId {
    const PREFIX: &'static str = "gallery";
}

impl EntityKey for ImageId {
    const PREFIX: &'static str = "image";
}

/// Synthetic map key for an id: `"<prefix>_<id>"`
pub fn key_of<K: EntityKey>(id: K) -> String {
    format!("{}_{}", K::PREFIX, id)
}

/// Entity payload paired with its in-flight operation and last error
#[derive(Debug, Clone, PartialEq)]
pub struct EntityState<T, Op> {
    pub processing: Option<Op>,
    pub error: Option<ApiError>,
    pub payload: T,
}

impl<T, Op> EntityState<T, Op> {
    /// Fresh wrapper: not processing, no error
    pub fn wrap(payload: T) -> Self {
        Self {
            processing: None,
            error: None,
            payload,
        }
    }

    /// Apply a status transition to an existing wrapper
    pub fn apply(mut self, transition: Transition<T, Op>) -> Self {
        match transition {
            Transition::Begin(op) => {
                self.processing = Some(op);
                self.error = None;
            }
            Transition::Succeed(payload) => {
                self.processing = None;
                self.error = None;
                self.payload = payload;
            }
            Transition::Fail(error) => {
                self.processing = None;
                self.error = Some(error);
            }
        }
        self
    }
}

/// Patch applied to one entity wrapper by [`KeyedMap::merge_at`]
#[derive(Debug, Clone, PartialEq)]
pub enum Transition<T, Op> {
    /// A request started: set `processing`, clear `error`
    Begin(Op),
    /// The request succeeded: clear status, replace the payload
    Succeed(T),
    /// The request failed: clear `processing`, record the error
    Fail(ApiError),
}

/// Insertion-ordered map from synthetic key to value
///
/// Replacing an existing key keeps its position, so array selectors stay
/// stable across updates.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedMap<K, V> {
    entries: Vec<(String, V)>,
    marker: PhantomData<fn(K)>,
}

impl<K, V> Default for KeyedMap<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            marker: PhantomData,
        }
    }
}

impl<K: EntityKey, V> KeyedMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: K) -> Option<usize> {
        let key = key_of(id);
        self.entries.iter().position(|(k, _)| *k == key)
    }

    pub fn get(&self, id: K) -> Option<&V> {
        self.position(id).map(|idx| &self.entries[idx].1)
    }

    pub fn contains(&self, id: K) -> bool {
        self.position(id).is_some()
    }

    /// Entry for a raw key such as `"gallery_5"`
    pub fn get_by_key(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Insert or replace the entry for `id`
    pub fn set(mut self, id: K, value: V) -> Self {
        match self.position(id) {
            Some(idx) => self.entries[idx].1 = value,
            None => self.entries.push((key_of(id), value)),
        }
        self
    }

    /// Remove the entry for `id`; no-op when absent
    pub fn remove_at(mut self, id: K) -> Self {
        if let Some(idx) = self.position(id) {
            self.entries.remove(idx);
        }
        self
    }

    /// Transform the entry for `id` if it exists
    pub fn update(mut self, id: K, f: impl FnOnce(V) -> V) -> Self {
        if let Some(idx) = self.position(id) {
            let (key, value) = self.entries.remove(idx);
            self.entries.insert(idx, (key, f(value)));
        }
        self
    }

    /// Transform the entry for `id`, starting from `default()` when absent
    pub fn upsert_with(self, id: K, default: impl FnOnce() -> V, f: impl FnOnce(V) -> V) -> Self {
        if self.contains(id) {
            self.update(id, f)
        } else {
            self.set(id, f(default()))
        }
    }
}

impl<K: EntityKey, T, Op> KeyedMap<K, EntityState<T, Op>> {
    /// Apply a transition to the wrapper at `id`
    ///
    /// Two cases:
    /// - the entry exists: the transition is applied to it
    /// - the entry is absent: only [`Transition::Succeed`] inserts a fresh
    ///   wrapper; status-only transitions leave the map untouched, so no
    ///   wrapper ever exists without a payload
    pub fn merge_at(self, id: K, transition: Transition<T, Op>) -> Self {
        if self.contains(id) {
            return self.update(id, |entry| entry.apply(transition));
        }

        match transition {
            Transition::Succeed(payload) => self.set(id, EntityState::wrap(payload)),
            Transition::Begin(_) | Transition::Fail(_) => {
                log::warn!("Ignoring status update for unknown entry {}", key_of(id));
                self
            }
        }
    }
}

impl<K: EntityKey, V> FromIterator<(K, V)> for KeyedMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(KeyedMap::new(), |map, (id, value)| map.set(id, value))
    }
}
