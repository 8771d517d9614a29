//! Layer storage integration tests

#[cfg(test)]
mod tests {
	use strata_settings_adapter_sqlite::SettingsAdapterSqlite;
	use strata_types::prelude::*;
	use tempfile::TempDir;

	async fn create_test_adapter() -> StResult<(SettingsAdapterSqlite, TempDir)> {
		let tmp_dir = TempDir::new().unwrap();
		let db_path = tmp_dir.path().join("settings.db");
		let adapter = SettingsAdapterSqlite::new(db_path).await?;
		Ok((adapter, tmp_dir))
	}

	#[tokio::test]
	async fn test_create_and_read_layer() {
		let (adapter, _tmp) = create_test_adapter().await.expect("Failed to create adapter");

		adapter.create_layer(LayerId(1), "system", None).await.unwrap();
		adapter.create_layer(LayerId(2), "user", Some(LayerId(1))).await.unwrap();

		let layer = adapter.read_layer(LayerId(2)).await.unwrap().unwrap();
		assert_eq!(layer.name.as_ref(), "user");
		assert_eq!(layer.fallback_id, Some(LayerId(1)));

		let terminal = adapter.read_layer(LayerId(1)).await.unwrap().unwrap();
		assert_eq!(terminal.fallback_id, None);
	}

	#[tokio::test]
	async fn test_read_missing_layer_is_absent() {
		let (adapter, _tmp) = create_test_adapter().await.expect("Failed to create adapter");

		assert!(adapter.read_layer(LayerId(42)).await.unwrap().is_none());
	}

	#[tokio::test]
	async fn test_duplicate_layer_id_fails() {
		let (adapter, _tmp) = create_test_adapter().await.expect("Failed to create adapter");

		adapter.create_layer(LayerId(1), "system", None).await.unwrap();
		let result = adapter.create_layer(LayerId(1), "other", None).await;

		assert!(matches!(result, Err(Error::DbError)));
	}

	#[tokio::test]
	async fn test_default_layer_is_lowest_id_without_fallback() {
		let (adapter, _tmp) = create_test_adapter().await.expect("Failed to create adapter");

		adapter.create_layer(LayerId(3), "orphan", None).await.unwrap();
		adapter.create_layer(LayerId(1), "system", None).await.unwrap();
		adapter.create_layer(LayerId(2), "user", Some(LayerId(1))).await.unwrap();

		let default = adapter.read_default_layer().await.unwrap().unwrap();
		assert_eq!(default.layer_id, LayerId(1));
	}

	#[tokio::test]
	async fn test_default_layer_absent_on_empty_database() {
		let (adapter, _tmp) = create_test_adapter().await.expect("Failed to create adapter");

		assert!(adapter.read_default_layer().await.unwrap().is_none());
	}

	#[tokio::test]
	async fn test_list_layers_ordered_by_id() {
		let (adapter, _tmp) = create_test_adapter().await.expect("Failed to create adapter");

		adapter.create_layer(LayerId(2), "account", Some(LayerId(1))).await.unwrap();
		adapter.create_layer(LayerId(1), "system", None).await.unwrap();
		adapter.create_layer(LayerId(3), "user", Some(LayerId(2))).await.unwrap();

		let layers = adapter.list_layers().await.unwrap();
		let ids: Vec<LayerId> = layers.iter().map(|layer| layer.layer_id).collect();

		assert_eq!(ids, vec![LayerId(1), LayerId(2), LayerId(3)]);
	}
}

// vim: ts=4
