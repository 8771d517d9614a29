//! Setting resolution across the layer chain.
//!
//! Resolution walks the fallback chain most specific layer first and checks,
//! within each layer, the caller-supplied entity row before the layer default
//! row. The first hit wins; candidates from different layers are never
//! compared.

use std::collections::HashMap;
use std::sync::Arc;

use strata_types::prelude::*;

use crate::registry::LayerRegistry;

/// Caller-supplied entity scoping for each layer a resolution may visit.
///
/// The core has no knowledge of domain entities or their parent
/// relationships; the caller derives the concrete identifier for each layer
/// and hands it over here. A layer with no entry (or an explicit absent
/// entry) is searched only for its default row.
#[derive(Clone, Debug, Default)]
pub struct EntityMap {
	entities: HashMap<LayerId, Option<EntityId>>,
}

impl EntityMap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Scope `layer_id` to a concrete entity
	pub fn with(mut self, layer_id: LayerId, entity_id: impl Into<EntityId>) -> Self {
		self.entities.insert(layer_id, Some(entity_id.into()));
		self
	}

	/// Explicitly mark `layer_id` as having no entity; equivalent to leaving
	/// the layer out
	pub fn without(mut self, layer_id: LayerId) -> Self {
		self.entities.insert(layer_id, None);
		self
	}

	pub fn insert(&mut self, layer_id: LayerId, entity_id: Option<EntityId>) {
		self.entities.insert(layer_id, entity_id);
	}

	/// The entity to search for at `layer_id`, if the caller supplied one
	pub fn get(&self, layer_id: LayerId) -> Option<&EntityId> {
		self.entities.get(&layer_id).and_then(|entity| entity.as_ref())
	}
}

impl FromIterator<(LayerId, Option<EntityId>)> for EntityMap {
	fn from_iter<I: IntoIterator<Item = (LayerId, Option<EntityId>)>>(iter: I) -> Self {
		Self { entities: iter.into_iter().collect() }
	}
}

/// Finds the single winning value for a (name, per-layer entity map) query.
///
/// Stateless between calls; every resolution is an independent read against
/// the storage adapter.
#[derive(Clone, Debug)]
pub struct SettingResolver {
	adapter: Arc<dyn SettingsAdapter>,
	registry: LayerRegistry,
}

impl SettingResolver {
	pub fn new(adapter: Arc<dyn SettingsAdapter>) -> Self {
		let registry = LayerRegistry::new(Arc::clone(&adapter));
		Self { adapter, registry }
	}

	/// Resolver over a registry with non-default configuration
	pub fn with_registry(adapter: Arc<dyn SettingsAdapter>, registry: LayerRegistry) -> Self {
		Self { adapter, registry }
	}

	pub fn registry(&self) -> &LayerRegistry {
		&self.registry
	}

	/// Resolves `name` starting at `starting_layer`.
	///
	/// Per layer, in chain order: the row scoped to the entity the map
	/// supplies for that layer is checked first and short-circuits the whole
	/// search on a hit, then the layer default row. An exhausted chain
	/// yields `Ok(None)` — a setting that is not configured anywhere is a
	/// normal outcome, not a failure.
	pub async fn get_setting(
		&self,
		name: &str,
		starting_layer: LayerId,
		entities: &EntityMap,
	) -> StResult<Option<LayeredSetting>> {
		validate_name(name)?;

		let chain = self.registry.fallback_chain(starting_layer).await?;
		for layer in &chain {
			if let Some(entity_id) = entities.get(layer.layer_id) {
				let setting =
					self.adapter.read_setting(name, layer.layer_id, Some(entity_id)).await?;
				if let Some(setting) = setting {
					debug!("resolved {} at layer {} for entity {}", name, layer.name, entity_id);
					return Ok(Some(setting));
				}
			}
			let setting = self.adapter.read_setting(name, layer.layer_id, None).await?;
			if let Some(setting) = setting {
				debug!("resolved {} at layer {} default", name, layer.name);
				return Ok(Some(setting));
			}
		}

		debug!("no value for {} in chain starting at layer {}", name, starting_layer);
		Ok(None)
	}

	/// Resolves `name` against the terminal layer's default row only.
	///
	/// `Ok(None)` when no terminal layer is configured or it carries no
	/// default row for `name`.
	pub async fn get_default_setting(&self, name: &str) -> StResult<Option<LayeredSetting>> {
		validate_name(name)?;

		match self.registry.default_layer().await? {
			Some(layer) => self.adapter.read_setting(name, layer.layer_id, None).await,
			None => Ok(None),
		}
	}

	/// Writes the single row identified by (name, layer, entity), overwriting
	/// a previous value
	pub async fn set_setting(
		&self,
		name: &str,
		layer_id: LayerId,
		entity_id: Option<&EntityId>,
		value: &str,
	) -> StResult<LayeredSetting> {
		validate_name(name)?;
		self.adapter.upsert_setting(name, layer_id, entity_id, value).await
	}

	/// Removes the row identified by (name, layer, entity); removing an
	/// absent row is not an error
	pub async fn remove_setting(
		&self,
		name: &str,
		layer_id: LayerId,
		entity_id: Option<&EntityId>,
	) -> StResult<()> {
		validate_name(name)?;
		self.adapter.delete_setting(name, layer_id, entity_id).await
	}

	/// Lists the rows stored for one (layer, entity) scope, optionally
	/// filtered by name prefix
	pub async fn list_settings(
		&self,
		layer_id: LayerId,
		entity_id: Option<&EntityId>,
		prefix: Option<&str>,
	) -> StResult<Vec<LayeredSetting>> {
		self.adapter.list_settings(layer_id, entity_id, prefix).await
	}
}

fn validate_name(name: &str) -> StResult<()> {
	if name.is_empty() {
		return Err(Error::ValidationError("Setting name cannot be empty".to_string()));
	}
	Ok(())
}


// vim: ts=4
