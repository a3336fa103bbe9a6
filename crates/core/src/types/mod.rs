//! Domain newtypes shared across the workspace.

pub mod email;
pub mod id;
pub mod rent;

pub use email::{Email, EmailError};
pub use id::*;
pub use rent::Rent;
