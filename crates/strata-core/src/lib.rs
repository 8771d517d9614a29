//! Resolution core for strata.
//!
//! Two components, the second built on the first:
//!
//! - [`LayerRegistry`] — exposes the traversal order of the layer fallback
//!   chain, with cycle detection.
//! - [`SettingResolver`] — finds the single winning value for a setting name
//!   given a starting layer and a per-layer entity map.
//!
//! Both are pure consumers of the [`SettingsAdapter`] storage trait; they
//! hold no state between calls.
//!
//! [`SettingsAdapter`]: strata_types::settings_adapter::SettingsAdapter

pub mod registry;
pub mod resolver;

pub use registry::LayerRegistry;
pub use resolver::{EntityMap, SettingResolver};

// vim: ts=4
