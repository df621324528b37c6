//! Keyed in-memory store, one instance per entity kind. Volatile: contents live
//! as long as the process.

use crate::models::{Entity, Patch};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// An attribute that must be unique is already held by another entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conflict {
    pub existing_id: String,
}

/// Generic CRUD store keyed by entity id. Reads hand out clones; the repository
/// keeps the canonical copy.
pub struct InMemoryRepository<E> {
    by_id: RwLock<HashMap<String, E>>,
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        InMemoryRepository {
            by_id: RwLock::new(HashMap::new()),
        }
    }

    // Every mutation is a single map operation, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, E>> {
        self.by_id.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, E>> {
        self.by_id.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert keyed by the entity's id. An existing entry with the same id is replaced.
    pub fn add(&self, entity: E) {
        let id = entity.id().to_string();
        tracing::trace!(id = %id, "repository add");
        self.write().insert(id, entity);
    }

    /// Insert only if no stored entity shares the attribute selected by `key`.
    /// The scan and the insert happen under one write lock.
    pub fn add_unique<V, F>(&self, entity: E, key: F) -> Result<(), Conflict>
    where
        V: PartialEq + ?Sized,
        F: Fn(&E) -> &V,
    {
        let mut map = self.write();
        if let Some(existing) = map.values().find(|e| key(*e) == key(&entity)) {
            return Err(Conflict {
                existing_id: existing.id().to_string(),
            });
        }
        map.insert(entity.id().to_string(), entity);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<E> {
        self.read().get(id).cloned()
    }

    /// All stored entities, in no particular order.
    pub fn get_all(&self) -> Vec<E> {
        self.read().values().cloned().collect()
    }

    /// Apply `changes` to the stored entity and return its new state.
    /// Returns `None` without inserting anything when `id` is unknown.
    pub fn update<P: Patch<E>>(&self, id: &str, changes: P) -> Option<E> {
        let mut map = self.write();
        let entity = map.get_mut(id)?;
        changes.apply(entity);
        entity.touch();
        Some(entity.clone())
    }

    /// Like [`update`](Self::update), but rejects the change when the patched entity
    /// would share the `key` attribute with a different entity.
    pub fn update_unique<P, V, F>(&self, id: &str, changes: P, key: F) -> Result<Option<E>, Conflict>
    where
        P: Patch<E>,
        V: PartialEq + ?Sized,
        F: Fn(&E) -> &V,
    {
        let mut map = self.write();
        let Some(current) = map.get(id) else {
            return Ok(None);
        };
        let mut next = current.clone();
        changes.apply(&mut next);
        if let Some(other) = map.values().find(|e| e.id() != id && key(*e) == key(&next)) {
            return Err(Conflict {
                existing_id: other.id().to_string(),
            });
        }
        next.touch();
        map.insert(id.to_string(), next.clone());
        Ok(Some(next))
    }

    /// Remove and return the entity, if present.
    pub fn delete(&self, id: &str) -> Option<E> {
        self.write().remove(id)
    }

    /// First entity whose selected attribute equals `value`. Linear scan.
    pub fn get_by_attribute<V, F>(&self, attr: F, value: &V) -> Option<E>
    where
        V: PartialEq + ?Sized,
        F: Fn(&E) -> &V,
    {
        self.read().values().find(|e| attr(*e) == value).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewUser, User, UserUpdate};
    use std::sync::Arc;

    fn user(email: &str) -> User {
        User::new(NewUser {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: email.into(),
        })
    }

    #[test]
    fn add_then_get_returns_copy() {
        let repo = InMemoryRepository::new();
        let u = user("ada@example.com");
        repo.add(u.clone());
        assert_eq!(repo.get(&u.id), Some(u));
        assert_eq!(repo.get("missing"), None);
    }

    #[test]
    fn add_overwrites_same_id() {
        let repo = InMemoryRepository::new();
        let mut u = user("ada@example.com");
        repo.add(u.clone());
        u.first_name = "Augusta".into();
        repo.add(u.clone());
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.get(&u.id).unwrap().first_name, "Augusta");
    }

    #[test]
    fn get_all_returns_every_entity_once() {
        let repo = InMemoryRepository::new();
        let mut ids: Vec<String> = ["a@x.io", "b@x.io", "c@x.io"]
            .iter()
            .map(|e| {
                let u = user(e);
                let id = u.id.clone();
                repo.add(u);
                id
            })
            .collect();
        let mut listed: Vec<String> = repo.get_all().into_iter().map(|u| u.id).collect();
        ids.sort();
        listed.sort();
        assert_eq!(ids, listed);
    }

    #[test]
    fn update_applies_patch_and_touches() {
        let repo = InMemoryRepository::new();
        let u = user("ada@example.com");
        repo.add(u.clone());
        let updated = repo
            .update(
                &u.id,
                UserUpdate {
                    first_name: Some("Augusta".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.first_name, "Augusta");
        assert_eq!(updated.email, "ada@example.com");
        assert!(updated.updated_at >= u.updated_at);
        assert_eq!(repo.get(&u.id), Some(updated));
    }

    #[test]
    fn update_missing_is_noop() {
        let repo: InMemoryRepository<User> = InMemoryRepository::new();
        assert_eq!(repo.update("missing", UserUpdate::default()), None);
        assert!(repo.is_empty());
    }

    #[test]
    fn delete_removes_entry() {
        let repo = InMemoryRepository::new();
        let u = user("ada@example.com");
        repo.add(u.clone());
        assert_eq!(repo.delete(&u.id), Some(u.clone()));
        assert_eq!(repo.delete(&u.id), None);
        assert!(repo.get(&u.id).is_none());
    }

    #[test]
    fn get_by_attribute_scans_values() {
        let repo = InMemoryRepository::new();
        let u = user("ada@example.com");
        repo.add(u.clone());
        repo.add(user("grace@example.com"));
        let found = repo.get_by_attribute(|u: &User| u.email.as_str(), "ada@example.com");
        assert_eq!(found, Some(u));
        assert!(repo
            .get_by_attribute(|u: &User| u.email.as_str(), "nobody@example.com")
            .is_none());
    }

    #[test]
    fn add_unique_rejects_taken_key() {
        let repo = InMemoryRepository::new();
        let first = user("ada@example.com");
        repo.add_unique(first.clone(), |u: &User| u.email.as_str()).unwrap();
        let err = repo
            .add_unique(user("ada@example.com"), |u: &User| u.email.as_str())
            .unwrap_err();
        assert_eq!(err.existing_id, first.id);
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn update_unique_allows_own_key_and_rejects_others() {
        let repo = InMemoryRepository::new();
        let ada = user("ada@example.com");
        let grace = user("grace@example.com");
        repo.add(ada.clone());
        repo.add(grace.clone());

        let same = UserUpdate {
            email: Some("ada@example.com".into()),
            ..Default::default()
        };
        assert!(repo
            .update_unique(&ada.id, same, |u: &User| u.email.as_str())
            .unwrap()
            .is_some());

        let taken = UserUpdate {
            email: Some("grace@example.com".into()),
            ..Default::default()
        };
        let err = repo
            .update_unique(&ada.id, taken, |u: &User| u.email.as_str())
            .unwrap_err();
        assert_eq!(err.existing_id, grace.id);
        assert_eq!(repo.get(&ada.id).unwrap().email, "ada@example.com");
    }

    #[test]
    fn concurrent_add_unique_admits_one() {
        let repo = Arc::new(InMemoryRepository::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let repo = Arc::clone(&repo);
                std::thread::spawn(move || {
                    repo.add_unique(user("race@example.com"), |u: &User| u.email.as_str())
                        .is_ok()
                })
            })
            .collect();
        let winners = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(winners, 1);
        assert_eq!(repo.len(), 1);
    }
}
