//! Adapter that stores layers and their scoped setting rows.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::StResult;
use crate::types::{EntityId, Layer, LayerId, LayeredSetting};

/// A strata settings adapter
///
/// Every storage backend is required to implement this trait. An adapter is
/// responsible for persisting layers and layered setting rows, and for
/// enforcing the uniqueness of the (name, layer, entity) triple. The
/// resolution core performs no retries and adds no caching on top of it.
///
/// Absence is a value here: reads return `Ok(None)` when no row matches.
/// Adapters reserve errors for storage malfunctions.
#[async_trait]
pub trait SettingsAdapter: Debug + Send + Sync {
	/// # Layers
	/// Creates a layer with an explicit id, optionally chained to a fallback layer
	async fn create_layer(
		&self,
		layer_id: LayerId,
		name: &str,
		fallback_id: Option<LayerId>,
	) -> StResult<Layer>;

	/// Reads a single layer by id
	async fn read_layer(&self, layer_id: LayerId) -> StResult<Option<Layer>>;

	/// Reads the terminal layer of the hierarchy (no fallback configured).
	///
	/// Applications are expected to wire exactly one such layer; if several
	/// exist the one with the lowest id wins, deterministically.
	async fn read_default_layer(&self) -> StResult<Option<Layer>>;

	/// Lists all layers
	async fn list_layers(&self) -> StResult<Vec<Layer>>;

	/// # Settings
	/// Reads the row matching (name, layer, entity); `None` entity selects
	/// the layer default row
	async fn read_setting(
		&self,
		name: &str,
		layer_id: LayerId,
		entity_id: Option<&EntityId>,
	) -> StResult<Option<LayeredSetting>>;

	/// Creates or overwrites the single row identified by (name, layer, entity)
	async fn upsert_setting(
		&self,
		name: &str,
		layer_id: LayerId,
		entity_id: Option<&EntityId>,
		value: &str,
	) -> StResult<LayeredSetting>;

	/// Deletes the row matching (name, layer, entity); deleting an absent row
	/// is not an error
	async fn delete_setting(
		&self,
		name: &str,
		layer_id: LayerId,
		entity_id: Option<&EntityId>,
	) -> StResult<()>;

	/// Lists the setting rows of one (layer, entity) scope, optionally
	/// filtered by name prefix
	async fn list_settings(
		&self,
		layer_id: LayerId,
		entity_id: Option<&EntityId>,
		prefix: Option<&str>,
	) -> StResult<Vec<LayeredSetting>>;
}

// vim: ts=4
