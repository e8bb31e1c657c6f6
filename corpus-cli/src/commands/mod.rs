//! Command implementations

pub mod info;
pub mod schema;
pub mod verify;
