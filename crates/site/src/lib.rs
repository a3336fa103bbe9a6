//! Prime Villa site library.
//!
//! The binary in `main.rs` is a thin shell; everything it serves lives
//! here so templates, handlers, and repositories stay testable.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod content;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod reveal;
pub mod routes;
pub mod state;
