//! Per-entity cache facades.
//!
//! Every facade owns a disjoint key namespace rooted at its entity name and
//! exposes named `get_*`/`set_*` pairs for each read shape the entity's
//! query path supports. Only singleton keys get a `delete_*`; list and
//! statistics keys are left to expire with the TTL.

/// `get`/`set` pair over a [`PageCache`](crate::PageCache) field.
macro_rules! page_cache_methods {
    ($field:ident: $params:ty => $item:ty, $get:ident, $set:ident) => {
        pub async fn $get(&self, req: &$params) -> Option<$crate::CachedPage<$item>> {
            self.$field.get(req).await
        }

        pub async fn $set(&self, req: &$params, data: Option<&[$item]>, total_records: Option<i32>) {
            self.$field.set(req, data, total_records).await;
        }
    };
}

/// `get`/`set` pair over a [`ListCache`](crate::ListCache) field.
macro_rules! list_cache_methods {
    ($field:ident: $params:ty => $item:ty, $get:ident, $set:ident) => {
        pub async fn $get(&self, req: &$params) -> Option<Vec<$item>> {
            self.$field.get(req).await
        }

        pub async fn $set(&self, req: &$params, data: Option<&[$item]>) {
            self.$field.set(req, data).await;
        }
    };
}

/// `get`/`set`/`delete` over an [`ItemCache`](crate::ItemCache) field.
macro_rules! item_cache_methods {
    ($field:ident: $key:ty => $item:ty, $get:ident, $set:ident $(, $delete:ident)?) => {
        pub async fn $get(&self, key: &$key) -> Option<$item> {
            self.$field.get(key).await
        }

        pub async fn $set(&self, key: &$key, data: Option<&$item>) {
            self.$field.set(key, data).await;
        }

        $(
            pub async fn $delete(&self, key: &$key) {
                self.$field.delete(key).await;
            }
        )?
    };
}

/// `get`/`set` pair over a [`ValueCache`](crate::ValueCache) field.
macro_rules! value_cache_methods {
    ($field:ident: $params:ty => $item:ty, $get:ident, $set:ident) => {
        pub async fn $get(&self, req: &$params) -> Option<$item> {
            self.$field.get(req).await
        }

        pub async fn $set(&self, req: &$params, data: Option<&$item>) {
            self.$field.set(req, data).await;
        }
    };
}

mod account;
mod card;
mod merchant;
mod topup;
mod transaction;
mod transfer;
mod withdraw;

pub use account::{RoleCache, UserCache};
pub use card::{CardCache, SaldoCache};
pub use merchant::{MerchantCache, MerchantDocumentCache};
pub use topup::TopupCache;
pub use transaction::TransactionCache;
pub use transfer::TransferCache;
pub use withdraw::WithdrawCache;

use crate::{CacheStore, ItemCache, KeyBuilder, KeyParams, ListCache, PageCache, ValueCache};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Display;
use std::sync::Arc;

/// Hands out cache blocks rooted at one entity namespace.
struct Namespace<'a> {
    store: &'a Arc<CacheStore>,
    entity: &'static str,
}

impl<'a> Namespace<'a> {
    const fn new(store: &'a Arc<CacheStore>, entity: &'static str) -> Self {
        Self { store, entity }
    }

    fn key(&self, segments: &[&str]) -> KeyBuilder {
        segments
            .iter()
            .fold(KeyBuilder::new(self.entity), |builder, segment| {
                builder.segment(segment)
            })
    }

    /// `entity:op` followed by the request's pagination parameters.
    fn page<P, T>(&self, op: &str) -> PageCache<P, T>
    where
        P: KeyParams + ?Sized,
        T: Serialize + DeserializeOwned,
    {
        PageCache::new(Arc::clone(self.store), self.key(&[op]))
    }

    fn list<P, T>(&self, segments: &[&str]) -> ListCache<P, T>
    where
        P: KeyParams + ?Sized,
        T: Serialize + DeserializeOwned,
    {
        ListCache::new(Arc::clone(self.store), self.key(segments))
    }

    /// `entity:field:value`.
    fn item<K, T>(&self, field: &'static str) -> ItemCache<K, T>
    where
        K: Display + ?Sized,
        T: Serialize + DeserializeOwned,
    {
        ItemCache::new(Arc::clone(self.store), self.key(&[]), field)
    }

    fn value<P, T>(&self, segments: &[&str]) -> ValueCache<P, T>
    where
        P: KeyParams + ?Sized,
        T: Serialize + DeserializeOwned,
    {
        ValueCache::new(Arc::clone(self.store), self.key(segments))
    }

    /// `entity:statistic:monthly:metric`.
    fn monthly<P, T>(&self, metric: &str) -> ListCache<P, T>
    where
        P: KeyParams + ?Sized,
        T: Serialize + DeserializeOwned,
    {
        self.list(&["statistic", "monthly", metric])
    }

    /// `entity:statistic:yearly:metric`.
    fn yearly<P, T>(&self, metric: &str) -> ListCache<P, T>
    where
        P: KeyParams + ?Sized,
        T: Serialize + DeserializeOwned,
    {
        self.list(&["statistic", "yearly", metric])
    }
}
