//! Shared types for Prime Villa.
//!
//! Everything here is plain data: newtype IDs, the validated [`Email`],
//! and the whole-euro [`Rent`]. No I/O, no HTTP, no database access, so
//! both the site binary and the CLI can depend on it freely.
//!
//! The `postgres` feature adds `sqlx` encode/decode support for the ID
//! types without pulling `sqlx` into consumers that never touch a
//! database.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
