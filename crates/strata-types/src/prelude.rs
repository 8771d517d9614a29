pub use crate::error::{Error, StResult};
pub use crate::settings_adapter::SettingsAdapter;
pub use crate::types::{EntityId, Layer, LayerId, LayeredSetting};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
