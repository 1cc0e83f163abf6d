//! Core domain logic for the remote.
//!
//! This module contains the data models and services that drive the remote,
//! independent of the terminal surface or the HTTP transport.

pub mod models;
pub mod services;
