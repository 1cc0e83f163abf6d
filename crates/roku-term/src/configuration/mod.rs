//! Configuration management for the remote.
//!
//! Scalar settings live in a process-wide map layered from defaults, the
//! config file, and CLI flags; `[keymap]` overrides are handed out separately
//! so the binding table stays an explicit value.

mod config;

pub use config::*;
