// Copyright (c) 2025 Ala Router Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Mutex-guarded route trie for callers sharing one trie across threads.

use parking_lot::Mutex;

use super::matcher::OwnedRouteMatch;
use super::{RouteTrie, RouteTrieResult};

/// A [`RouteTrie`] behind a mutex.
///
/// [`SyncRouteTrie::match_route`] folds the match and the reading of its
/// captures into one locked call, so no other thread can observe or replace
/// the result in between.
#[derive(Debug)]
pub struct SyncRouteTrie<T> {
    inner: Mutex<RouteTrie<T>>,
}

impl<T> SyncRouteTrie<T> {
    /// Wraps an existing trie.
    pub fn new(trie: RouteTrie<T>) -> Self {
        Self {
            inner: Mutex::new(trie),
        }
    }

    /// Inserts a route; see [`RouteTrie::insert_route`].
    pub fn insert_route(&self, path: &str, data: T) -> RouteTrieResult<()> {
        self.inner.lock().insert_route(path, data)
    }

    /// Inserts a route with a destructor; see [`RouteTrie::insert_route_with_destructor`].
    pub fn insert_route_with_destructor<F>(&self, path: &str, data: T, destructor: F) -> RouteTrieResult<()>
    where
        F: FnOnce(T) + Send + 'static,
    {
        self.inner
            .lock()
            .insert_route_with_destructor(path, data, destructor)
    }

    /// Removes a route; see [`RouteTrie::remove_route`].
    pub fn remove_route(&self, path: &str) -> RouteTrieResult<()> {
        self.inner.lock().remove_route(path)
    }

    /// Matches `path` and returns a detached copy of the result.
    pub fn match_route(&self, path: &str) -> Option<OwnedRouteMatch<T>>
    where
        T: Clone,
    {
        let trie = self.inner.lock();
        trie.lookup(path).map(|found| found.into_owned())
    }

    /// Runs `f` with exclusive access, e.g. for a `matches` + `hit_*` sequence.
    pub fn with_trie<R>(&self, f: impl FnOnce(&mut RouteTrie<T>) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether no route is registered.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Unwraps the trie.
    pub fn into_inner(self) -> RouteTrie<T> {
        self.inner.into_inner()
    }
}

impl<T> From<RouteTrie<T>> for SyncRouteTrie<T> {
    fn from(trie: RouteTrie<T>) -> Self {
        Self::new(trie)
    }
}
