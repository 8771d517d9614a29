use crate::types::LayerId;

pub type StResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// The requested layer does not exist (or a fallback reference dangles)
	LayerNotFound(LayerId),
	/// The fallback chain revisits a layer instead of terminating
	FallbackCycle(LayerId),
	ValidationError(String),
	Parse,
	DbError,
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Error::LayerNotFound(layer_id) => write!(f, "layer {} not found", layer_id),
			Error::FallbackCycle(layer_id) => {
				write!(f, "fallback chain revisits layer {}", layer_id)
			}
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::Parse => write!(f, "parse error"),
			Error::DbError => write!(f, "database error"),
		}
	}
}

impl std::error::Error for Error {}

// vim: ts=4
