//! In-memory user registry.
//!
//! The registry is an ordered list; every lookup is a linear, case-insensitive
//! scan on `name`. Insertion order is preserved and updates happen in place.

use crate::error::{DomainError, DomainResult};
use crate::field;
use crate::id::UserId;
use crate::user::{Age, NewUser, User, UserPatch};

/// Ordered collection of user records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRegistry {
    users: Vec<User>,
}

impl UserRegistry {
    /// Empty registry (tests/dev).
    pub fn new() -> Self {
        Self { users: Vec::new() }
    }

    /// Registry holding the five records present at process start.
    pub fn seeded() -> Self {
        Self {
            users: vec![
                User::new(UserId::new(1), "Ryu", Age::Years(32), "Japón"),
                User::new(UserId::new(2), "Chun-Li", Age::Years(29), "China"),
                User::new(UserId::new(3), "Guile", Age::Years(35), "Estados Unidos"),
                User::new(UserId::new(4), "Dhalsim", Age::Years(45), "India"),
                User::new(UserId::new(5), "Blanka", Age::Years(32), "Brasil"),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// All records in insertion order.
    pub fn list_all(&self) -> &[User] {
        &self.users
    }

    /// First record whose name matches case-insensitively.
    pub fn get_by_name(&self, name: &str) -> DomainResult<&User> {
        let lowered = name.to_lowercase();
        self.users
            .iter()
            .find(|u| u.matches_name(&lowered))
            .ok_or_else(DomainError::not_found)
    }

    /// Validate and append a new record.
    ///
    /// The id is `len + 1`, which can repeat an existing id after deletions.
    pub fn create(&mut self, input: NewUser) -> DomainResult<User> {
        let (Some(name), Some(age), Some(origin_place)) = (
            input.name.filter(|v| field::is_present(Some(v))),
            input.age.filter(|v| field::is_present(Some(v))),
            input.origin_place.filter(|v| field::is_present(Some(v))),
        ) else {
            return Err(DomainError::validation("name, age and originPlace are required"));
        };

        let user = User::new(
            UserId::new(self.users.len() as u64 + 1),
            field::to_text(&name),
            Age::coerce(&age),
            field::to_text(&origin_place),
        );
        self.users.push(user.clone());
        Ok(user)
    }

    /// Overwrite `age` and/or `originPlace` on the first matching record.
    ///
    /// Fields that are absent or empty in the patch leave the stored value alone.
    pub fn update_by_name(&mut self, name: &str, patch: UserPatch) -> DomainResult<User> {
        let lowered = name.to_lowercase();
        let user = self
            .users
            .iter_mut()
            .find(|u| u.matches_name(&lowered))
            .ok_or_else(DomainError::not_found)?;

        if let Some(age) = patch.age.filter(|v| field::is_present(Some(v))) {
            user.age = Age::coerce(&age);
        }
        if let Some(origin) = patch.origin_place.filter(|v| field::is_present(Some(v))) {
            user.origin_place = field::to_text(&origin);
        }

        Ok(user.clone())
    }

    /// Remove every record whose name matches; returns how many were removed.
    pub fn delete_by_name(&mut self, name: &str) -> DomainResult<usize> {
        let lowered = name.to_lowercase();
        let before = self.users.len();
        self.users.retain(|u| !u.matches_name(&lowered));

        match before - self.users.len() {
            0 => Err(DomainError::not_found()),
            removed => Ok(removed),
        }
    }
}
