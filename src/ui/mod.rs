//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! All terminal output of the CLI goes through this module so that quiet
//! and debug modes behave the same for every command.

pub mod output;
