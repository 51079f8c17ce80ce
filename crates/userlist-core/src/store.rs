//! Read-only user record store.
//!
//! The record set is fixed when the store is built; there is no mutation API,
//! so a store can be shared across request tasks behind an `Arc` without
//! locking.

use crate::model::User;

/// Read accessor over a fixed, ordered set of users.
pub trait UserStore: Send + Sync {
    /// Every record, in insertion order. Never fails.
    fn find_all(&self) -> &[User];
}

/// The records every fresh process starts with.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "Kemal", "Aydın"),
        User::new(2, "Kemal", "Aydın"),
        User::new(3, "Kemal", "Aydın"),
    ]
}

/// Vec-backed [`UserStore`] whose records are fixed at construction.
#[derive(Debug, Clone)]
pub struct InMemoryUserStore {
    users: Vec<User>,
}

impl InMemoryUserStore {
    /// Store populated with [`seed_users`].
    pub fn new() -> Self {
        Self::from_users(seed_users())
    }

    pub fn from_users(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for InMemoryUserStore {
    fn find_all(&self) -> &[User] {
        &self.users
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_holds_three_records() {
        let store = InMemoryUserStore::new();
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
    }

    #[test]
    fn from_users_keeps_given_order() {
        let store = InMemoryUserStore::from_users(vec![
            User::new(9, "a", "b"),
            User::new(4, "c", "d"),
        ]);
        let ids: Vec<i32> = store.find_all().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![9, 4]);
    }

    #[test]
    fn empty_store() {
        let store = InMemoryUserStore::from_users(Vec::new());
        assert!(store.is_empty());
        assert!(store.find_all().is_empty());
    }
}
