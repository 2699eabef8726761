//! Domain records shown in the personnel dashboard tables.

pub mod document;
pub mod leave;
pub mod person;
pub mod reassignment;
pub mod types;
pub mod user;
