//! Generic building blocks for the per-entity facades.
//!
//! Each block binds one key namespace to one payload type. An entity facade
//! is a handful of these sharing the process-wide [`CacheStore`].
//!
//! Write-side contracts:
//! - list writes store `None` items as an empty list and a `None` total as
//!   zero, so "no rows" stays distinguishable from "not cached";
//! - singleton writes ignore `None` and leave any cached value in place.

use crate::keys::{CacheKey, KeyBuilder, KeyParams};
use crate::CacheStore;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// A cached page of results together with the unpaginated row count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedPage<T> {
    pub data: Vec<T>,
    pub total_records: i32,
}

#[derive(Serialize)]
struct CachedPageRef<'a, T> {
    data: &'a [T],
    total_records: i32,
}

/// Paginated, searchable list keyed by a request shape `P`.
pub struct PageCache<P: ?Sized, T> {
    store: Arc<CacheStore>,
    namespace: KeyBuilder,
    _marker: PhantomData<fn(&P) -> T>,
}

impl<P, T> PageCache<P, T>
where
    P: KeyParams + ?Sized,
    T: Serialize + DeserializeOwned,
{
    #[must_use]
    pub fn new(store: Arc<CacheStore>, namespace: KeyBuilder) -> Self {
        Self {
            store,
            namespace,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn key(&self, params: &P) -> CacheKey {
        self.namespace.clone().with(params).build()
    }

    pub async fn get(&self, params: &P) -> Option<CachedPage<T>> {
        self.store.get(self.key(params).as_str()).await
    }

    pub async fn set(&self, params: &P, data: Option<&[T]>, total_records: Option<i32>) {
        let page = CachedPageRef {
            data: data.unwrap_or_default(),
            total_records: total_records.unwrap_or_default(),
        };
        self.store
            .set(self.key(params).as_str(), &page, self.store.default_ttl())
            .await;
    }
}

/// Unpaginated list or statistics series keyed by a request shape `P`.
pub struct ListCache<P: ?Sized, T> {
    store: Arc<CacheStore>,
    namespace: KeyBuilder,
    _marker: PhantomData<fn(&P) -> T>,
}

impl<P, T> ListCache<P, T>
where
    P: KeyParams + ?Sized,
    T: Serialize + DeserializeOwned,
{
    #[must_use]
    pub fn new(store: Arc<CacheStore>, namespace: KeyBuilder) -> Self {
        Self {
            store,
            namespace,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn key(&self, params: &P) -> CacheKey {
        self.namespace.clone().with(params).build()
    }

    pub async fn get(&self, params: &P) -> Option<Vec<T>> {
        self.store.get(self.key(params).as_str()).await
    }

    pub async fn set(&self, params: &P, data: Option<&[T]>) {
        let data: &[T] = data.unwrap_or_default();
        self.store
            .set(self.key(params).as_str(), data, self.store.default_ttl())
            .await;
    }
}

/// Single record keyed by one labelled value, e.g. `merchant:id:5` or
/// `merchant:api_key:abc`.
pub struct ItemCache<K: ?Sized, T> {
    store: Arc<CacheStore>,
    namespace: KeyBuilder,
    field: &'static str,
    _marker: PhantomData<fn(&K) -> T>,
}

impl<K, T> ItemCache<K, T>
where
    K: Display + ?Sized,
    T: Serialize + DeserializeOwned,
{
    #[must_use]
    pub fn new(store: Arc<CacheStore>, namespace: KeyBuilder, field: &'static str) -> Self {
        Self {
            store,
            namespace,
            field,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn key(&self, id: &K) -> CacheKey {
        self.namespace.clone().param(self.field, id).build()
    }

    pub async fn get(&self, id: &K) -> Option<T> {
        self.store.get(self.key(id).as_str()).await
    }

    pub async fn set(&self, id: &K, data: Option<&T>) {
        let key = self.key(id);
        match data {
            Some(data) => {
                self.store
                    .set(key.as_str(), data, self.store.default_ttl())
                    .await;
            }
            None => debug!(key = %key, "Skipping cache write for absent record"),
        }
    }

    pub async fn delete(&self, id: &K) {
        self.store.delete(self.key(id).as_str()).await;
    }

    /// Returns the cached record, or runs `loader` and caches what it yields.
    pub async fn get_or_load<E, F, Fut>(&self, id: &K, loader: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.store
            .get_or_load(self.key(id).as_str(), self.store.default_ttl(), loader)
            .await
    }
}

/// Single value keyed by a request shape `P`, e.g. a dashboard summary.
pub struct ValueCache<P: ?Sized, T> {
    store: Arc<CacheStore>,
    namespace: KeyBuilder,
    _marker: PhantomData<fn(&P) -> T>,
}

impl<P, T> ValueCache<P, T>
where
    P: KeyParams + ?Sized,
    T: Serialize + DeserializeOwned,
{
    #[must_use]
    pub fn new(store: Arc<CacheStore>, namespace: KeyBuilder) -> Self {
        Self {
            store,
            namespace,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub fn key(&self, params: &P) -> CacheKey {
        self.namespace.clone().with(params).build()
    }

    pub async fn get(&self, params: &P) -> Option<T> {
        self.store.get(self.key(params).as_str()).await
    }

    pub async fn set(&self, params: &P, data: Option<&T>) {
        let key = self.key(params);
        match data {
            Some(data) => {
                self.store
                    .set(key.as_str(), data, self.store.default_ttl())
                    .await;
            }
            None => debug!(key = %key, "Skipping cache write for absent value"),
        }
    }
}

macro_rules! debug_namespace {
    ($($name:ident),+) => {
        $(
            impl<P: ?Sized, T> fmt::Debug for $name<P, T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_struct(stringify!($name))
                        .field("namespace", &self.namespace)
                        .finish_non_exhaustive()
                }
            }
        )+
    };
}

debug_namespace!(PageCache, ListCache, ItemCache, ValueCache);
