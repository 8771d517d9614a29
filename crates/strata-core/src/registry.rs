//! Layer registry: traversal order for the layer fallback chain.

use std::collections::HashSet;
use std::sync::Arc;

use strata_types::prelude::*;

/// Default bound on chain length.
///
/// Cycle detection already catches revisits; the cap only guards against
/// pathologically deep (but acyclic) misconfigurations. Well-formed
/// hierarchies stay far below it.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Exposes the traversal order for layers.
///
/// The registry reads layers through the adapter on every call; layer
/// wiring is expected to be set up once by the application and left alone
/// afterwards.
#[derive(Clone, Debug)]
pub struct LayerRegistry {
	adapter: Arc<dyn SettingsAdapter>,
	max_depth: usize,
}

impl LayerRegistry {
	pub fn new(adapter: Arc<dyn SettingsAdapter>) -> Self {
		Self { adapter, max_depth: DEFAULT_MAX_DEPTH }
	}

	/// Registry with a custom bound on chain length
	pub fn with_max_depth(adapter: Arc<dyn SettingsAdapter>, max_depth: usize) -> Self {
		Self { adapter, max_depth }
	}

	/// Ordered fallback chain starting at `starting_layer`.
	///
	/// The chain begins with the starting layer, follows `fallback_id` links
	/// and ends at the first layer without one. Every layer in the result is
	/// distinct.
	///
	/// Fails with [`Error::LayerNotFound`] if the starting layer does not
	/// exist or a fallback reference dangles, and with
	/// [`Error::FallbackCycle`] if a layer is revisited (or the chain exceeds
	/// the configured depth bound) before terminating.
	pub async fn fallback_chain(&self, starting_layer: LayerId) -> StResult<Vec<Layer>> {
		let first = self
			.adapter
			.read_layer(starting_layer)
			.await?
			.ok_or(Error::LayerNotFound(starting_layer))?;

		let mut visited = HashSet::new();
		visited.insert(first.layer_id);
		let mut chain = vec![first];

		while let Some(next_id) = chain.last().and_then(|layer| layer.fallback_id) {
			if !visited.insert(next_id) {
				warn!("fallback chain revisits layer {}", next_id);
				return Err(Error::FallbackCycle(next_id));
			}
			if chain.len() >= self.max_depth {
				warn!("fallback chain exceeds depth bound {}", self.max_depth);
				return Err(Error::FallbackCycle(next_id));
			}
			let layer = self
				.adapter
				.read_layer(next_id)
				.await?
				.ok_or(Error::LayerNotFound(next_id))?;
			chain.push(layer);
		}

		Ok(chain)
	}

	/// The terminal layer of the hierarchy, if one is configured
	pub async fn default_layer(&self) -> StResult<Option<Layer>> {
		self.adapter.read_default_layer().await
	}
}

// vim: ts=4
