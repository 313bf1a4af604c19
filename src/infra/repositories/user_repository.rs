//! In-memory user repository.
//!
//! The store owns every user record for the lifetime of the process. A single
//! mutex guards the records and the id counter together, so each operation is
//! atomic with respect to the others.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};

use crate::domain::{CreateUser, User};

#[cfg(test)]
use mockall::automock;

/// Names of the records every fresh store starts with, in id order.
pub const SEED_USER_NAMES: [&str; 3] = ["Kenneth", "Alice", "Elena"];

/// User repository trait for dependency injection.
///
/// Lookups report a missing record as `None`; turning absence into an error
/// is the caller's decision.
#[cfg_attr(test, automock)]
pub trait UserRepository: Send + Sync {
    /// All users in insertion order
    fn find_all(&self) -> Vec<User>;

    /// First user whose id matches
    fn find_by_id(&self, id: i32) -> Option<User>;

    /// Append a user, assigning the next id when none is given.
    ///
    /// Caller-supplied ids are stored as-is, even when another record
    /// already uses the same id.
    fn save(&self, user: CreateUser) -> User;

    /// Remove and return the first user whose id matches
    fn delete_by_id(&self, id: i32) -> Option<User>;
}

#[derive(Debug)]
struct Records {
    users: Vec<User>,
    /// Last id handed out by `save`
    counter: i32,
}

/// Concrete in-memory implementation of UserRepository
#[derive(Debug)]
pub struct UserStore {
    records: Mutex<Records>,
}

impl UserStore {
    /// Create a store seeded with the sample users, all stamped with the
    /// same creation time.
    pub fn new() -> Self {
        Self::seeded_at(Utc::now())
    }

    /// Create a seeded store with an explicit seed timestamp
    pub fn seeded_at(join_date: DateTime<Utc>) -> Self {
        let users: Vec<User> = SEED_USER_NAMES
            .iter()
            .zip(1..)
            .map(|(name, id)| User::new(id, *name, join_date))
            .collect();

        Self::with_users(users)
    }

    /// Create a store holding exactly `users`; the id counter starts at
    /// their count.
    pub fn with_users(users: Vec<User>) -> Self {
        let counter = users.len() as i32;
        Self {
            records: Mutex::new(Records { users, counter }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Records> {
        // Every operation leaves the records consistent before it can panic.
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for UserStore {
    fn find_all(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    fn find_by_id(&self, id: i32) -> Option<User> {
        self.lock().users.iter().find(|user| user.id == id).cloned()
    }

    fn save(&self, user: CreateUser) -> User {
        let mut records = self.lock();

        let id = match user.id {
            Some(id) => id,
            None => {
                records.counter += 1;
                records.counter
            }
        };

        let saved = User::new(id, user.user_name, user.join_date.unwrap_or_else(Utc::now));
        records.users.push(saved.clone());
        tracing::debug!(id = saved.id, "user stored");
        saved
    }

    fn delete_by_id(&self, id: i32) -> Option<User> {
        let mut records = self.lock();
        let index = records.users.iter().position(|user| user.id == id)?;
        Some(records.users.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn ids(store: &UserStore) -> Vec<i32> {
        store.find_all().iter().map(|user| user.id).collect()
    }

    #[test]
    fn test_fresh_store_has_seed_users_in_order() {
        let store = UserStore::new();
        let users = store.find_all();

        assert_eq!(users.len(), 3);
        assert_eq!(ids(&store), vec![1, 2, 3]);
        assert_eq!(users[0].user_name, "Kenneth");
        assert_eq!(users[1].user_name, "Alice");
        assert_eq!(users[2].user_name, "Elena");
    }

    #[test]
    fn test_seed_users_share_join_date() {
        let seeded_at = Utc::now();
        let store = UserStore::seeded_at(seeded_at);

        assert!(store.find_all().iter().all(|user| user.join_date == seeded_at));
    }

    #[test]
    fn test_find_by_id() {
        let store = UserStore::new();

        assert_eq!(store.find_by_id(1).unwrap().user_name, "Kenneth");
        assert!(store.find_by_id(999).is_none());
    }

    #[test]
    fn test_save_assigns_next_id() {
        let store = UserStore::new();
        let saved = store.save(CreateUser::named("Zed"));

        assert_eq!(saved.id, 4);
        assert_eq!(ids(&store), vec![1, 2, 3, 4]);

        let found = store.find_by_id(4).unwrap();
        assert_eq!(found.user_name, "Zed");
        assert_eq!(found, saved);
    }

    #[test]
    fn test_save_keeps_explicit_join_date() {
        let store = UserStore::new();
        let join_date = Utc::now() - chrono::Duration::days(30);
        let saved = store.save(CreateUser {
            join_date: Some(join_date),
            ..CreateUser::named("Zed")
        });

        assert_eq!(saved.join_date, join_date);
    }

    #[test]
    fn test_save_with_explicit_id_does_not_advance_counter() {
        let store = UserStore::new();

        assert_eq!(store.save(CreateUser::named("Ten").with_id(10)).id, 10);
        assert_eq!(store.save(CreateUser::named("Next")).id, 4);
    }

    #[test]
    fn test_save_accepts_duplicate_explicit_id() {
        let store = UserStore::new();
        let duplicate = store.save(CreateUser::named("Impostor").with_id(1));

        assert_eq!(duplicate.id, 1);
        assert_eq!(store.find_all().len(), 4);
        assert_eq!(ids(&store), vec![1, 2, 3, 1]);
        // Lookups still return the first record with that id.
        assert_eq!(store.find_by_id(1).unwrap().user_name, "Kenneth");
    }

    #[test]
    fn test_delete_by_id_removes_record() {
        let store = UserStore::new();
        let deleted = store.delete_by_id(2).unwrap();

        assert_eq!(deleted.user_name, "Alice");
        assert!(store.find_by_id(2).is_none());
        assert_eq!(ids(&store), vec![1, 3]);
    }

    #[test]
    fn test_delete_missing_id_leaves_store_unchanged() {
        let store = UserStore::new();
        let before = store.find_all();

        assert!(store.delete_by_id(999).is_none());
        assert_eq!(store.find_all(), before);
    }

    #[test]
    fn test_delete_removes_only_first_duplicate() {
        let store = UserStore::new();
        store.save(CreateUser::named("Impostor").with_id(1));

        assert_eq!(store.delete_by_id(1).unwrap().user_name, "Kenneth");
        assert_eq!(store.find_by_id(1).unwrap().user_name, "Impostor");
    }

    #[test]
    fn test_deleting_does_not_reuse_ids() {
        let store = UserStore::new();
        store.delete_by_id(3);

        assert_eq!(store.save(CreateUser::named("Zed")).id, 4);
    }

    #[test]
    fn test_concurrent_saves_get_distinct_ids() {
        let store = Arc::new(UserStore::new());

        let handles: Vec<_> = (0..8)
            .map(|n| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..25)
                        .map(|i| store.save(CreateUser::named(format!("user-{n}-{i}"))).id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut assigned: Vec<i32> = handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap())
            .collect();
        assigned.sort_unstable();

        let expected: Vec<i32> = (4..4 + 200).collect();
        assert_eq!(assigned, expected);
        assert_eq!(store.find_all().len(), 203);
    }

    #[test]
    fn test_empty_store_starts_counter_at_zero() {
        let store = UserStore::with_users(Vec::new());

        assert!(store.find_all().is_empty());
        assert_eq!(store.save(CreateUser::named("First")).id, 1);
    }
}
