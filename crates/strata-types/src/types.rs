//! Core identifier and data types for layered settings.

use serde::{Deserialize, Serialize};

use crate::error::{Error, StResult};

/// Identifies a layer in the fallback hierarchy.
///
/// Layers reference each other by id rather than by direct link, which keeps
/// the fallback relation index-based and cycle detection a matter of tracking
/// visited ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerId(pub i64);

impl std::fmt::Display for LayerId {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<i64> for LayerId {
	fn from(id: i64) -> Self {
		Self(id)
	}
}

/// Opaque entity identifier scoping a setting within a layer.
///
/// The core carries the token through lookups without interpreting it.
/// Identifiers are namespaced per layer; the same token at two different
/// layers names two unrelated entities.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub Box<str>);

impl EntityId {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for EntityId {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<&str> for EntityId {
	fn from(id: &str) -> Self {
		Self(id.into())
	}
}

impl From<String> for EntityId {
	fn from(id: String) -> Self {
		Self(id.into_boxed_str())
	}
}

/// A level in the settings hierarchy, linked to the next less specific level
/// via `fallback_id`. A layer with no fallback terminates the chain.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
	#[serde(rename = "id")]
	pub layer_id: LayerId,
	pub name: Box<str>,
	pub fallback_id: Option<LayerId>,
}

/// A single stored (name, value) pair scoped to one layer and optionally to
/// one entity within it. `entity_id = None` marks the layer default row.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayeredSetting {
	#[serde(rename = "id")]
	pub setting_id: i64,
	pub name: Box<str>,
	pub value: Box<str>,
	pub layer_id: LayerId,
	pub entity_id: Option<EntityId>,
}

impl LayeredSetting {
	/// Parse the stored value as JSON.
	///
	/// The core treats values as opaque strings; callers that store JSON can
	/// decode through this instead of touching serde_json directly.
	pub fn json_value(&self) -> StResult<serde_json::Value> {
		serde_json::from_str(&self.value).map_err(|_| Error::Parse)
	}
}


// vim: ts=4
