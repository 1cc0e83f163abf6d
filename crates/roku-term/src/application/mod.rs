//! Application layer orchestrating the terminal interface.
//!
//! This module handles command-line parsing, the main UI loop, and the
//! line-based REPL fallback.

pub mod cli;
pub mod repl;
pub mod ui;
