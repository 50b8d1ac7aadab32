//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The persistence layer converts its own models to and from these types.

pub mod constants;
pub mod user;

pub use constants::*;
pub use user::{CreateUser, UpdateUser, User, UserDraft};
