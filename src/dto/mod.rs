//! DTO modules that bridge services with the JSON API.

pub mod leaves;
pub mod list;
