//! Layered setting storage operations
//!
//! Handles the scoped (name, layer, entity) setting rows. A NULL entity_id
//! marks the layer default row; the unique index in schema.rs keeps every
//! triple single-rowed, including the default ones.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::utils::*;
use strata_types::prelude::*;

fn setting_from_row(row: &SqliteRow) -> Result<LayeredSetting, sqlx::Error> {
	Ok(LayeredSetting {
		setting_id: row.try_get("setting_id")?,
		name: row.try_get("name")?,
		value: row.try_get("value")?,
		layer_id: LayerId(row.try_get("layer_id")?),
		entity_id: row.try_get::<Option<Box<str>>, _>("entity_id")?.map(EntityId),
	})
}

/// Read the row matching (name, layer, entity); `None` entity selects the
/// layer default row
pub(crate) async fn read(
	db: &SqlitePool,
	name: &str,
	layer_id: LayerId,
	entity_id: Option<&EntityId>,
) -> StResult<Option<LayeredSetting>> {
	let res = if let Some(entity_id) = entity_id {
		sqlx::query(
			"SELECT setting_id, name, value, layer_id, entity_id FROM layered_settings
				WHERE name = ? AND layer_id = ? AND entity_id = ?",
		)
		.bind(name)
		.bind(layer_id.0)
		.bind(entity_id.as_str())
		.fetch_optional(db)
		.await
	} else {
		sqlx::query(
			"SELECT setting_id, name, value, layer_id, entity_id FROM layered_settings
				WHERE name = ? AND layer_id = ? AND entity_id IS NULL",
		)
		.bind(name)
		.bind(layer_id.0)
		.fetch_optional(db)
		.await
	};

	let row = res.inspect_err(inspect).map_err(|_| Error::DbError)?;
	row.as_ref()
		.map(setting_from_row)
		.transpose()
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)
}

/// Create or overwrite the single row identified by (name, layer, entity)
pub(crate) async fn upsert(
	db: &SqlitePool,
	name: &str,
	layer_id: LayerId,
	entity_id: Option<&EntityId>,
	value: &str,
) -> StResult<LayeredSetting> {
	let row = sqlx::query(
		"INSERT OR REPLACE INTO layered_settings (name, value, layer_id, entity_id)
			VALUES (?, ?, ?, ?) RETURNING setting_id",
	)
	.bind(name)
	.bind(value)
	.bind(layer_id.0)
	.bind(entity_id.map(EntityId::as_str))
	.fetch_one(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	Ok(LayeredSetting {
		setting_id: row.try_get("setting_id").or(Err(Error::DbError))?,
		name: name.into(),
		value: value.into(),
		layer_id,
		entity_id: entity_id.cloned(),
	})
}

/// Delete the row matching (name, layer, entity); deleting an absent row is
/// not an error
pub(crate) async fn delete(
	db: &SqlitePool,
	name: &str,
	layer_id: LayerId,
	entity_id: Option<&EntityId>,
) -> StResult<()> {
	let res = if let Some(entity_id) = entity_id {
		sqlx::query("DELETE FROM layered_settings WHERE name = ? AND layer_id = ? AND entity_id = ?")
			.bind(name)
			.bind(layer_id.0)
			.bind(entity_id.as_str())
			.execute(db)
			.await
	} else {
		sqlx::query("DELETE FROM layered_settings WHERE name = ? AND layer_id = ? AND entity_id IS NULL")
			.bind(name)
			.bind(layer_id.0)
			.execute(db)
			.await
	};

	res.inspect_err(inspect).map_err(|_| Error::DbError)?;
	Ok(())
}

/// List the rows of one (layer, entity) scope, optionally filtered by name
/// prefix
pub(crate) async fn list(
	db: &SqlitePool,
	layer_id: LayerId,
	entity_id: Option<&EntityId>,
	prefix: Option<&str>,
) -> StResult<Vec<LayeredSetting>> {
	let mut query = sqlx::QueryBuilder::new(
		"SELECT setting_id, name, value, layer_id, entity_id FROM layered_settings WHERE layer_id=",
	);
	query.push_bind(layer_id.0);
	match entity_id {
		Some(entity_id) => {
			query.push(" AND entity_id=").push_bind(entity_id.as_str());
		}
		None => {
			query.push(" AND entity_id IS NULL");
		}
	}
	if let Some(prefix) = prefix {
		query.push(" AND name LIKE ").push_bind(prefix).push(" || '%'");
	}
	query.push(" ORDER BY name");

	let rows = query
		.build()
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	collect_res(rows.iter().map(setting_from_row))
}

// vim: ts=4
