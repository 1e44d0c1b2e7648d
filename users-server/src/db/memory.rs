//! In-memory user store
//!
//! Same contract as the PostgreSQL store: ids come from a counter that
//! only moves forward, so a deleted id is never handed out again.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::db::{DbError, UserStore};
use crate::models::{NewUser, User};

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, User>,
    last_id: i64,
    closed: bool,
}

/// User store kept in process memory
#[derive(Default)]
pub struct MemoryUserStore {
    inner: Mutex<Inner>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        // rows are replaced whole, so a poisoned map is still consistent
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn open(&self) -> Result<std::sync::MutexGuard<'_, Inner>, DbError> {
        let guard = self.lock();
        if guard.closed {
            return Err(DbError::Closed);
        }
        Ok(guard)
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list_all(&self) -> Result<Vec<User>, DbError> {
        Ok(self.open()?.rows.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<User, DbError> {
        self.open()?
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::user_not_found(id))
    }

    async fn insert(&self, user: NewUser) -> Result<User, DbError> {
        let mut inner = self.open()?;
        inner.last_id += 1;
        let user = User {
            id: inner.last_id,
            name: user.name,
            email: user.email,
        };
        inner.rows.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<User, DbError> {
        let mut inner = self.open()?;
        match inner.rows.get_mut(&user.id) {
            Some(row) => {
                *row = user.clone();
                Ok(user.clone())
            }
            None => Err(DbError::user_not_found(user.id)),
        }
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DbError> {
        self.open()?
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DbError::user_not_found(id))
    }

    async fn close(&self) {
        self.lock().closed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser {
            name: name.into(),
            email: email.into(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_increasing_ids() {
        let store = MemoryUserStore::new();
        let a = store.insert(new_user("Ann", "ann@example.com")).await.unwrap();
        let b = store.insert(new_user("Bob", "bob@example.com")).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(store.list_all().await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let store = MemoryUserStore::new();
        let a = store.insert(new_user("Ann", "ann@example.com")).await.unwrap();
        store.delete_by_id(a.id).await.unwrap();

        let b = store.insert(new_user("Bob", "bob@example.com")).await.unwrap();
        assert_ne!(a.id, b.id);
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn missing_rows_are_not_found() {
        let store = MemoryUserStore::new();
        assert!(matches!(
            store.get_by_id(42).await,
            Err(DbError::NotFound { resource: "user", .. })
        ));
        assert!(matches!(
            store.delete_by_id(42).await,
            Err(DbError::NotFound { .. })
        ));

        let ghost = User {
            id: 42,
            name: "Ghost".into(),
            email: "ghost@example.com".into(),
        };
        assert!(matches!(
            store.update(&ghost).await,
            Err(DbError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn update_replaces_row() {
        let store = MemoryUserStore::new();
        let mut user = store.insert(new_user("Ann", "ann@example.com")).await.unwrap();
        user.name = "Annabel".into();

        store.update(&user).await.unwrap();
        assert_eq!(store.get_by_id(user.id).await.unwrap().name, "Annabel");
    }

    #[tokio::test]
    async fn close_is_idempotent_and_blocks_access() {
        let store = MemoryUserStore::new();
        store.close().await;
        store.close().await;

        assert!(store.is_closed());
        assert!(matches!(store.list_all().await, Err(DbError::Closed)));
        assert!(matches!(
            store.insert(new_user("Ann", "ann@example.com")).await,
            Err(DbError::Closed)
        ));
    }
}
