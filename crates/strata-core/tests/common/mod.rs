//! In-memory settings adapter used by the core integration tests.
//!
//! Mirrors the storage contract without a database: maps guarded by mutexes,
//! uniqueness guaranteed by keying rows on the (name, layer, entity) triple.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

use strata_types::prelude::*;

type SettingKey = (Box<str>, LayerId, Option<EntityId>);

#[derive(Debug, Default)]
pub struct MemAdapter {
	layers: Mutex<HashMap<LayerId, Layer>>,
	settings: Mutex<HashMap<SettingKey, LayeredSetting>>,
	next_id: Mutex<i64>,
}

impl MemAdapter {
	pub fn new() -> Self {
		Self::default()
	}
}

#[async_trait]
impl SettingsAdapter for MemAdapter {
	async fn create_layer(
		&self,
		layer_id: LayerId,
		name: &str,
		fallback_id: Option<LayerId>,
	) -> StResult<Layer> {
		let layer = Layer { layer_id, name: name.into(), fallback_id };
		self.layers.lock().insert(layer_id, layer.clone());
		Ok(layer)
	}

	async fn read_layer(&self, layer_id: LayerId) -> StResult<Option<Layer>> {
		Ok(self.layers.lock().get(&layer_id).cloned())
	}

	async fn read_default_layer(&self) -> StResult<Option<Layer>> {
		let layers = self.layers.lock();
		let mut defaults: Vec<&Layer> =
			layers.values().filter(|layer| layer.fallback_id.is_none()).collect();
		defaults.sort_by_key(|layer| layer.layer_id);
		Ok(defaults.first().map(|layer| (*layer).clone()))
	}

	async fn list_layers(&self) -> StResult<Vec<Layer>> {
		let mut layers: Vec<Layer> = self.layers.lock().values().cloned().collect();
		layers.sort_by_key(|layer| layer.layer_id);
		Ok(layers)
	}

	async fn read_setting(
		&self,
		name: &str,
		layer_id: LayerId,
		entity_id: Option<&EntityId>,
	) -> StResult<Option<LayeredSetting>> {
		let key = (Box::from(name), layer_id, entity_id.cloned());
		Ok(self.settings.lock().get(&key).cloned())
	}

	async fn upsert_setting(
		&self,
		name: &str,
		layer_id: LayerId,
		entity_id: Option<&EntityId>,
		value: &str,
	) -> StResult<LayeredSetting> {
		let key = (Box::from(name), layer_id, entity_id.cloned());
		let mut settings = self.settings.lock();

		let setting_id = match settings.get(&key) {
			Some(existing) => existing.setting_id,
			None => {
				let mut next_id = self.next_id.lock();
				*next_id += 1;
				*next_id
			}
		};
		let setting = LayeredSetting {
			setting_id,
			name: name.into(),
			value: value.into(),
			layer_id,
			entity_id: entity_id.cloned(),
		};
		settings.insert(key, setting.clone());
		Ok(setting)
	}

	async fn delete_setting(
		&self,
		name: &str,
		layer_id: LayerId,
		entity_id: Option<&EntityId>,
	) -> StResult<()> {
		let key = (Box::from(name), layer_id, entity_id.cloned());
		self.settings.lock().remove(&key);
		Ok(())
	}

	async fn list_settings(
		&self,
		layer_id: LayerId,
		entity_id: Option<&EntityId>,
		prefix: Option<&str>,
	) -> StResult<Vec<LayeredSetting>> {
		let settings = self.settings.lock();
		let mut rows: Vec<LayeredSetting> = settings
			.values()
			.filter(|setting| {
				setting.layer_id == layer_id
					&& setting.entity_id.as_ref() == entity_id
					&& prefix.is_none_or(|prefix| setting.name.starts_with(prefix))
			})
			.cloned()
			.collect();
		rows.sort_by(|a, b| a.name.cmp(&b.name));
		Ok(rows)
	}
}

// vim: ts=4
