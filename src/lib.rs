//! Shared library for the `qRate` client
//! Contains the domain logic used by the CLI front end: data models,
//! browse filtering, rating aggregation, review drafting, session
//! state, and the HTTP gateway to the backend.

pub mod core;
pub mod logger;

pub use self::core::config;
pub use self::core::models;
