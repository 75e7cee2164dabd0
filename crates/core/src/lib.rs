//! `usuarios-core` — user registry domain.
//!
//! This crate contains the record model and the in-memory store (no HTTP concerns).

pub mod error;
pub mod field;
pub mod id;
pub mod registry;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use id::UserId;
pub use registry::UserRegistry;
pub use user::{Age, NewUser, User, UserPatch};
