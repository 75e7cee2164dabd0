//! Logging for the user registry service.
//!
//! `main` calls [`init`] once before building the router; tests may call it
//! as often as they like.

pub mod tracing;

pub use crate::tracing::init;
