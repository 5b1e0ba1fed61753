//! Core module for the `qRate` client

pub mod config;
pub mod error;
pub mod filter;
pub mod gateway;
pub mod models;
pub mod ratings;
pub mod review;
pub mod session;

/// Returns the current version of the `qrate` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
