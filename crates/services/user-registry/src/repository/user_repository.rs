//! In-memory user repository with sequential identifiers.

use std::collections::BTreeMap;

use domain::{NewUser, UserId, UserRecord, FIRST_USER_ID};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Records handed out are copies; callers persist changes through `update`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserRepository: Send {
    /// Store a new active user under the next identifier
    fn insert(&mut self, new_user: NewUser) -> UserRecord;

    /// Find user by ID
    fn find_by_id(&self, id: UserId) -> Option<UserRecord>;

    /// Replace an existing user; `false` if the ID is unknown
    fn update(&mut self, user: UserRecord) -> bool;

    /// List all users in ascending ID order
    fn list(&self) -> Vec<UserRecord>;

    /// Number of stored users
    fn count(&self) -> usize;

    /// Drop every user and restart identifiers at `FIRST_USER_ID`
    fn clear(&mut self);
}

/// Concrete in-memory implementation of UserRepository
#[derive(Debug)]
pub struct UserStore {
    users: BTreeMap<UserId, UserRecord>,
    next_id: UserId,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            next_id: FIRST_USER_ID,
        }
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for UserStore {
    fn insert(&mut self, new_user: NewUser) -> UserRecord {
        let id = self.next_id;
        self.next_id += 1;

        let record = new_user.into_record(id);
        self.users.insert(id, record.clone());
        record
    }

    fn find_by_id(&self, id: UserId) -> Option<UserRecord> {
        self.users.get(&id).cloned()
    }

    fn update(&mut self, user: UserRecord) -> bool {
        match self.users.get_mut(&user.id) {
            Some(existing) => {
                *existing = user;
                true
            }
            None => false,
        }
    }

    fn list(&self) -> Vec<UserRecord> {
        self.users.values().cloned().collect()
    }

    fn count(&self) -> usize {
        self.users.len()
    }

    fn clear(&mut self) {
        self.users.clear();
        self.next_id = FIRST_USER_ID;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::UserStatus;

    #[test]
    fn test_insert_assigns_sequential_ids() {
        let mut store = UserStore::new();
        let ids: Vec<_> = (0..3)
            .map(|i| store.insert(NewUser::new(format!("User {i}"), "u@teste.com", 20)).id)
            .collect();

        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(store.count(), 3);
    }

    #[test]
    fn test_find_returns_copy() {
        let mut store = UserStore::new();
        let created = store.insert(NewUser::new("Alice", "alice@email.com", 28));

        let mut found = store.find_by_id(created.id).unwrap();
        found.name = "Changed".to_string();

        assert_eq!(store.find_by_id(created.id).unwrap().name, "Alice");
        assert!(store.find_by_id(99).is_none());
    }

    #[test]
    fn test_update_unknown_id() {
        let mut store = UserStore::new();
        let ghost = NewUser::new("Ghost", "ghost@teste.com", 30).into_record(42);

        assert!(!store.update(ghost));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_update_replaces_record() {
        let mut store = UserStore::new();
        let mut user = store.insert(NewUser::new("Comum", "comum@teste.com", 30));
        user.status = UserStatus::Inactive;

        assert!(store.update(user));
        assert_eq!(store.find_by_id(1).unwrap().status, UserStatus::Inactive);
    }

    #[test]
    fn test_list_is_ordered_by_id() {
        let mut store = UserStore::new();
        for name in ["Carol", "Alice", "Bob"] {
            store.insert(NewUser::new(name, "x@teste.com", 30));
        }

        let names: Vec<_> = store.list().into_iter().map(|u| (u.id, u.name)).collect();
        assert_eq!(
            names,
            vec![
                (1, "Carol".to_string()),
                (2, "Alice".to_string()),
                (3, "Bob".to_string()),
            ]
        );
    }

    #[test]
    fn test_clear_resets_counter() {
        let mut store = UserStore::new();
        store.insert(NewUser::new("Alice", "alice@email.com", 28));
        store.insert(NewUser::new("Bob", "bob@email.com", 32));

        store.clear();

        assert_eq!(store.count(), 0);
        assert_eq!(store.insert(NewUser::new("Carol", "c@teste.com", 40)).id, 1);
    }
}
