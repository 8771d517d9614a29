//! Strata resolves named configuration values across a two-dimensional
//! fallback space.
//!
//! # Features
//!
//! - Ordered layer hierarchy (e.g. User → Group → Account → System)
//!     - layers chained by index-based fallback references
//!     - cycle detection instead of unbounded traversal
//! - Per-layer entity scoping
//!     - a concrete entity row shadows the layer default row
//!     - entity identifiers are opaque tokens supplied by the caller
//! - Storage-agnostic core
//!     - all persistence behind the [`SettingsAdapter`] trait
//!     - SQLite adapter available as `strata-settings-adapter-sqlite`
//!
//! The core knows nothing about what a "user" or "group" is, nor how entity
//! parent relationships are derived; callers map each layer to an entity
//! identifier per resolution call.
//!
//! [`SettingsAdapter`]: settings_adapter::SettingsAdapter

// Re-export shared types and the adapter trait from strata-types
pub use strata_types::error;
pub use strata_types::prelude;
pub use strata_types::settings_adapter;
pub use strata_types::types;

// Resolution core re-exports
pub use strata_core::registry;
pub use strata_core::resolver;

pub use strata_core::{EntityMap, LayerRegistry, SettingResolver};

// vim: ts=4
