//! SQLite-backed settings adapter for strata.
//!
//! Stores layers and layered setting rows in a single SQLite database and
//! enforces the uniqueness of the (name, layer, entity) triple at the schema
//! level, so concurrent upserts for the same key serialize inside SQLite.

use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};

use strata_types::prelude::*;

mod layer;
mod schema;
mod setting;
mod utils;

#[derive(Debug)]
pub struct SettingsAdapterSqlite {
	db: SqlitePool,
}

impl SettingsAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> StResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.or(Err(Error::DbError))?;

		schema::init_db(&db)
			.await
			.inspect_err(|err| warn!("DB: {:#?}", err))
			.or(Err(Error::DbError))?;

		Ok(Self { db })
	}
}

#[async_trait]
impl SettingsAdapter for SettingsAdapterSqlite {
	// Layer management
	//******************
	async fn create_layer(
		&self,
		layer_id: LayerId,
		name: &str,
		fallback_id: Option<LayerId>,
	) -> StResult<Layer> {
		layer::create(&self.db, layer_id, name, fallback_id).await
	}

	async fn read_layer(&self, layer_id: LayerId) -> StResult<Option<Layer>> {
		layer::read(&self.db, layer_id).await
	}

	async fn read_default_layer(&self) -> StResult<Option<Layer>> {
		layer::read_default(&self.db).await
	}

	async fn list_layers(&self) -> StResult<Vec<Layer>> {
		layer::list(&self.db).await
	}

	// Setting management
	//********************
	async fn read_setting(
		&self,
		name: &str,
		layer_id: LayerId,
		entity_id: Option<&EntityId>,
	) -> StResult<Option<LayeredSetting>> {
		setting::read(&self.db, name, layer_id, entity_id).await
	}

	async fn upsert_setting(
		&self,
		name: &str,
		layer_id: LayerId,
		entity_id: Option<&EntityId>,
		value: &str,
	) -> StResult<LayeredSetting> {
		setting::upsert(&self.db, name, layer_id, entity_id, value).await
	}

	async fn delete_setting(
		&self,
		name: &str,
		layer_id: LayerId,
		entity_id: Option<&EntityId>,
	) -> StResult<()> {
		setting::delete(&self.db, name, layer_id, entity_id).await
	}

	async fn list_settings(
		&self,
		layer_id: LayerId,
		entity_id: Option<&EntityId>,
		prefix: Option<&str>,
	) -> StResult<Vec<LayeredSetting>> {
		setting::list(&self.db, layer_id, entity_id, prefix).await
	}
}

// vim: ts=4
