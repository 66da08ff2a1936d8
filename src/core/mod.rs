//! core
//!
//! Core domain types, codecs and configuration for plugmeta.
//!
//! # Modules
//!
//! - [`types`] - Closed vocabularies: DependencyType, LoadOn, PermissionDefault, Platform
//! - [`naming`] - Plugin name rules and validation
//! - [`metadata`] - The descriptor metadata model and its merge semantics
//! - [`descriptor`] - Reading and writing `plugin.yml` / `bungee.yml`
//! - [`declaration`] - Declarative metadata handed over by the extractor
//! - [`config`] - Configuration schema and option resolution
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid states at compile time
//! - Schemas are strict and self-describing
//! - Serialization is deterministic

pub mod config;
pub mod declaration;
pub mod descriptor;
pub mod metadata;
pub mod naming;
pub mod types;
