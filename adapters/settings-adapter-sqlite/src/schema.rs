//! Database schema initialization
//!
//! Creates the layer and setting tables and the unique index backing the
//! (name, layer, entity) uniqueness invariant.

use sqlx::SqlitePool;

/// Initialize the database schema with all required tables and indexes
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Layers
	//********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS layers (
			layer_id integer NOT NULL,
			name text NOT NULL,
			fallback_id integer,
			PRIMARY KEY(layer_id)
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query(
		"CREATE INDEX IF NOT EXISTS idx_layers_fallback ON layers(fallback_id) WHERE fallback_id IS NULL",
	)
	.execute(&mut *tx)
	.await?;

	// Layered settings
	//******************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS layered_settings (
			setting_id integer NOT NULL,
			name text NOT NULL,
			value text NOT NULL,
			layer_id integer NOT NULL,
			entity_id text,
			PRIMARY KEY(setting_id)
	)",
	)
	.execute(&mut *tx)
	.await?;
	// entity_id is NULL for layer default rows; ifnull() folds those into the
	// uniqueness constraint too (SQLite treats bare NULLs as distinct in
	// unique indexes)
	sqlx::query(
		"CREATE UNIQUE INDEX IF NOT EXISTS idx_layered_settings_key
			ON layered_settings(name, layer_id, ifnull(entity_id, ''))",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query(
		"CREATE INDEX IF NOT EXISTS idx_layered_settings_layer ON layered_settings(layer_id)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
