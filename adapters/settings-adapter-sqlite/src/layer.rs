//! Layer storage operations
//!
//! Layers are wired once at application setup and read on every resolution;
//! there is no update or delete surface here.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::utils::*;
use strata_types::prelude::*;

fn layer_from_row(row: &SqliteRow) -> Result<Layer, sqlx::Error> {
	Ok(Layer {
		layer_id: LayerId(row.try_get("layer_id")?),
		name: row.try_get("name")?,
		fallback_id: row.try_get::<Option<i64>, _>("fallback_id")?.map(LayerId),
	})
}

/// Create a layer with an explicit id
pub(crate) async fn create(
	db: &SqlitePool,
	layer_id: LayerId,
	name: &str,
	fallback_id: Option<LayerId>,
) -> StResult<Layer> {
	sqlx::query("INSERT INTO layers (layer_id, name, fallback_id) VALUES (?, ?, ?)")
		.bind(layer_id.0)
		.bind(name)
		.bind(fallback_id.map(|id| id.0))
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(Layer { layer_id, name: name.into(), fallback_id })
}

/// Read a single layer by id
pub(crate) async fn read(db: &SqlitePool, layer_id: LayerId) -> StResult<Option<Layer>> {
	let row = sqlx::query("SELECT layer_id, name, fallback_id FROM layers WHERE layer_id = ?")
		.bind(layer_id.0)
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	row.as_ref()
		.map(layer_from_row)
		.transpose()
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)
}

/// Read the terminal layer (no fallback); lowest id wins when several exist
pub(crate) async fn read_default(db: &SqlitePool) -> StResult<Option<Layer>> {
	let row = sqlx::query(
		"SELECT layer_id, name, fallback_id FROM layers
			WHERE fallback_id IS NULL ORDER BY layer_id LIMIT 1",
	)
	.fetch_optional(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	row.as_ref()
		.map(layer_from_row)
		.transpose()
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)
}

/// List all layers
pub(crate) async fn list(db: &SqlitePool) -> StResult<Vec<Layer>> {
	let rows = sqlx::query("SELECT layer_id, name, fallback_id FROM layers ORDER BY layer_id")
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	collect_res(rows.iter().map(layer_from_row))
}

// vim: ts=4
