//! plugmeta - Plugin descriptor generator
//!
//! plugmeta produces the `plugin.yml` (Spigot) and `bungee.yml`
//! (BungeeCord) descriptors of a plugin from declarative metadata, merged
//! with hand-written base descriptors.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - Merge-and-validate driver and the generation pass
//! - [`core`] - Metadata model, descriptor codec, declarations and config
//! - [`ui`] - Terminal output
//!
//! # Correctness Invariants
//!
//! 1. Written descriptors have a fixed key order; encoding the same
//!    metadata twice yields identical bytes
//! 2. Reading a written descriptor yields equal metadata
//! 3. Names in keyed collections are unique; duplicates are rejected at
//!    insertion
//! 4. A platform whose plugin class failed validation gets no descriptor
//!
//! # Example
//!
//! ```
//! use plugmeta::core::descriptor;
//! use plugmeta::core::metadata::{PluginDependency, PluginMetadata};
//! use plugmeta::core::types::DependencyType;
//!
//! let mut base = descriptor::parse_str("name: Example\nwebsite: example.org\n")
//!     .unwrap()
//!     .unwrap();
//!
//! let mut overrides = PluginMetadata::new("Example");
//! overrides.set_main("org.example.Example").unwrap();
//! overrides
//!     .add_dependency(PluginDependency::new("Vault", DependencyType::SoftDepend).unwrap())
//!     .unwrap();
//! base.accept(&overrides);
//!
//! assert_eq!(
//!     descriptor::encode(&base).unwrap(),
//!     "name: Example\nwebsite: example.org\nmain: org.example.Example\n\
//!      depend: []\nsoftdepend:\n- Vault\nloadbefore: []\n"
//! );
//! ```

pub mod cli;
pub mod core;
pub mod engine;
pub mod ui;
