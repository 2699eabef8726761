//! Runtime models of the HTTP server.

pub mod config;
