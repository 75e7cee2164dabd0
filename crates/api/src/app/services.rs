use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use usuarios_core::{DomainResult, NewUser, User, UserPatch, UserRegistry};

/// Registry owned by the router and shared with request handlers.
///
/// Every operation holds the lock for its whole duration, so requests observe
/// the collection either before or after a mutation, never midway.
#[derive(Debug)]
pub struct AppServices {
    registry: RwLock<UserRegistry>,
}

impl AppServices {
    pub fn new(registry: UserRegistry) -> Self {
        Self {
            registry: RwLock::new(registry),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, UserRegistry> {
        // Records are plain values; a panic elsewhere cannot leave one half-written.
        self.registry.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, UserRegistry> {
        self.registry.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn users_list(&self) -> Vec<User> {
        self.read().list_all().to_vec()
    }

    pub fn users_get(&self, name: &str) -> DomainResult<User> {
        self.read().get_by_name(name).cloned()
    }

    pub fn users_create(&self, input: NewUser) -> DomainResult<User> {
        self.write().create(input)
    }

    pub fn users_update(&self, name: &str, patch: UserPatch) -> DomainResult<User> {
        self.write().update_by_name(name, patch)
    }

    pub fn users_delete(&self, name: &str) -> DomainResult<usize> {
        self.write().delete_by_name(name)
    }
}
