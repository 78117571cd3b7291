//! makesdk library exports.
//!
//! The binary is a thin CLI over these modules; integration tests drive
//! them directly against a mock Fuchsia tree.

pub mod archive;
pub mod commands;
pub mod common;
pub mod component;
pub mod config;
pub mod context;
pub mod timing;

pub use config::{Config, Selection};
