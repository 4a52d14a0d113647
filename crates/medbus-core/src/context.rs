//! Immutable, typed key/value carrier threaded through one query.
//!
//! An `ActionContext` is never mutated in place: `set`/`delete`/`merge` return
//! a new context. Values are reference counted, so derived contexts share the
//! entries they did not touch. This makes a context safe to read from many
//! concurrent `test` calls without locking.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// A typed context key. Two keys with the same name address the same entry;
/// a `get` through a key of the wrong type yields `None`.
pub struct ContextKey<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ContextKey<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for ContextKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ContextKey<T> {}

impl<T> fmt::Debug for ContextKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContextKey({})", self.name)
    }
}

type Value = Arc<dyn Any + Send + Sync>;

#[derive(Clone, Default)]
pub struct ActionContext {
    entries: HashMap<&'static str, Value>,
}

impl ActionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value stored under `key`, if present and of the key's type.
    pub fn get<T: Send + Sync + 'static>(&self, key: &ContextKey<T>) -> Option<&T> {
        self.entries
            .get(key.name)
            .and_then(|v| v.downcast_ref::<T>())
    }

    pub fn has<T>(&self, key: &ContextKey<T>) -> bool {
        self.entries.contains_key(key.name)
    }

    /// Return a new context with `key` bound to `value`.
    pub fn set<T: Send + Sync + 'static>(&self, key: &ContextKey<T>, value: T) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(key.name, Arc::new(value));
        Self { entries }
    }

    /// Return a new context without `key`.
    pub fn delete<T>(&self, key: &ContextKey<T>) -> Self {
        let mut entries = self.entries.clone();
        entries.remove(key.name);
        Self { entries }
    }

    /// Combine two contexts; entries of `other` win on conflicts.
    pub fn merge(&self, other: &ActionContext) -> Self {
        let mut entries = self.entries.clone();
        for (k, v) in &other.entries {
            entries.insert(*k, Arc::clone(v));
        }
        Self { entries }
    }

    /// Key names currently bound (unordered).
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ActionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<_> = self.keys().collect();
        keys.sort_unstable();
        f.debug_struct("ActionContext").field("keys", &keys).finish()
    }
}

/// Anything published on a bus. Every action carries the context of the
/// query it belongs to.
pub trait Action: Send + Sync {
    fn context(&self) -> &ActionContext;
}

impl Action for ActionContext {
    fn context(&self) -> &ActionContext {
        self
    }
}

/// Well-known context keys read by the mediators.
pub mod keys {
    use std::sync::Arc;

    use super::ContextKey;
    use crate::log::Logger;

    /// Upstream estimate of how many results are actually needed
    /// (e.g. from a LIMIT clause).
    pub const LIMIT_INDICATOR: ContextKey<u64> = ContextKey::new("medbus:limitIndicator");

    /// Structured logger for decision records.
    pub const LOG: ContextKey<Arc<dyn Logger>> = ContextKey::new("medbus:log");
}
