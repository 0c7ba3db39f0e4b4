//! User and role caches.

use super::Namespace;
use crate::{CacheStore, ItemCache, ListCache, PageCache};
use payflow_core::{FindAllRequest, RoleId, RoleResponse, SoftDeleted, UserId, UserResponse};
use std::sync::Arc;

const USER: &str = "user";
const ROLE: &str = "role";

/// Cache facade for the user service.
#[derive(Debug)]
pub struct UserCache {
    all: PageCache<FindAllRequest, UserResponse>,
    active: PageCache<FindAllRequest, SoftDeleted<UserResponse>>,
    trashed: PageCache<FindAllRequest, SoftDeleted<UserResponse>>,
    by_id: ItemCache<UserId, UserResponse>,
}

impl UserCache {
    #[must_use]
    pub fn new(store: Arc<CacheStore>) -> Self {
        let ns = Namespace::new(&store, USER);
        Self {
            all: ns.page("all"),
            active: ns.page("active"),
            trashed: ns.page("trashed"),
            by_id: ns.item("id"),
        }
    }

    page_cache_methods!(all: FindAllRequest => UserResponse, get_cached_users, set_cached_users);
    page_cache_methods!(active: FindAllRequest => SoftDeleted<UserResponse>, get_cached_user_active, set_cached_user_active);
    page_cache_methods!(trashed: FindAllRequest => SoftDeleted<UserResponse>, get_cached_user_trashed, set_cached_user_trashed);
    item_cache_methods!(by_id: UserId => UserResponse, get_cached_user, set_cached_user, delete_cached_user);
}

/// Cache facade for the role service.
#[derive(Debug)]
pub struct RoleCache {
    all: PageCache<FindAllRequest, RoleResponse>,
    active: PageCache<FindAllRequest, SoftDeleted<RoleResponse>>,
    trashed: PageCache<FindAllRequest, SoftDeleted<RoleResponse>>,
    by_id: ItemCache<RoleId, RoleResponse>,
    by_user: ListCache<UserId, RoleResponse>,
}

impl RoleCache {
    #[must_use]
    pub fn new(store: Arc<CacheStore>) -> Self {
        let ns = Namespace::new(&store, ROLE);
        Self {
            all: ns.page("all"),
            active: ns.page("active"),
            trashed: ns.page("trashed"),
            by_id: ns.item("id"),
            by_user: ns.list(&["user"]),
        }
    }

    page_cache_methods!(all: FindAllRequest => RoleResponse, get_cached_roles, set_cached_roles);
    page_cache_methods!(active: FindAllRequest => SoftDeleted<RoleResponse>, get_cached_role_active, set_cached_role_active);
    page_cache_methods!(trashed: FindAllRequest => SoftDeleted<RoleResponse>, get_cached_role_trashed, set_cached_role_trashed);
    item_cache_methods!(by_id: RoleId => RoleResponse, get_cached_role, set_cached_role, delete_cached_role);
    list_cache_methods!(by_user: UserId => RoleResponse, get_cached_roles_by_user_id, set_cached_roles_by_user_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::MemoryCacheBackend;
    use chrono::Utc;

    fn store() -> Arc<CacheStore> {
        Arc::new(CacheStore::new(Arc::new(MemoryCacheBackend::new())))
    }

    fn role(id: i32, name: &str) -> RoleResponse {
        let now = Utc::now();
        RoleResponse {
            id: RoleId(id),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_user_and_role_ids_do_not_collide() {
        let store = store();
        let users = UserCache::new(Arc::clone(&store));
        let roles = RoleCache::new(store);

        roles.set_cached_role(&RoleId(1), Some(&role(1, "ADMIN"))).await;
        assert!(users.get_cached_user(&UserId(1)).await.is_none());
        assert!(roles.get_cached_role(&RoleId(1)).await.is_some());
    }

    #[tokio::test]
    async fn test_roles_by_user() {
        let roles = RoleCache::new(store());
        let assigned = vec![role(1, "ADMIN"), role(2, "MERCHANT")];

        roles
            .set_cached_roles_by_user_id(&UserId(3), Some(assigned.as_slice()))
            .await;

        assert_eq!(roles.get_cached_roles_by_user_id(&UserId(3)).await, Some(assigned));
        assert_eq!(roles.get_cached_roles_by_user_id(&UserId(4)).await, None);
    }

    #[tokio::test]
    async fn test_trashed_roles_keep_deleted_at() {
        let roles = RoleCache::new(store());
        let req = FindAllRequest::first();
        let trashed = vec![SoftDeleted::trashed(role(9, "GUEST"), Utc::now())];

        roles
            .set_cached_role_trashed(&req, Some(trashed.as_slice()), Some(1))
            .await;

        let page = roles.get_cached_role_trashed(&req).await.unwrap();
        assert_eq!(page.total_records, 1);
        assert!(page.data[0].is_trashed());
        assert!(roles.get_cached_role_active(&req).await.is_none());
    }
}
