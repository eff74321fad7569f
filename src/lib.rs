//! Jvst Tools: unit conversion, random decisions, color formats, regex
//! testing and letter-combination generation.
//!
//! The engines are synchronous and pure. Tools that remember things
//! (history, favorites, saved sets) do so through a `KeyValueStore`
//! passed into their session types.

pub mod core;
pub mod shared;

use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::features::unit_converter::{builtin_registry, UnitCategory, UnitDefinition, UnitSearch};
use crate::shared::settings::{LogFormat, LoggingSettings};

pub use crate::core::features::decision::{pick_weighted, shuffle, unique_sample};
pub use crate::core::features::{navigation, AppFeature, ToolFeature};
pub use crate::core::random::RandomSource;
pub use crate::core::storage::{open_default_store, KeyValueStore};
pub use crate::shared::error::{ToolError, ToolResult};
pub use crate::shared::settings::AppSettings;

/// Converts `value` with the built-in unit catalog
pub fn convert_unit(category: &str, from_unit: &str, to_unit: &str, value: f64) -> ToolResult<f64> {
    builtin_registry().convert(category, from_unit, to_unit, value)
}

pub fn list_categories() -> &'static [UnitCategory] {
    builtin_registry().categories()
}

pub fn list_units(category: &str) -> ToolResult<&'static [UnitDefinition]> {
    builtin_registry().units(category)
}

/// Units whose name, id, description or region contains `query`
pub fn search_units(query: &str) -> UnitSearch<'static> {
    builtin_registry().search(query)
}

/// Installs the global tracing subscriber. `RUST_LOG` overrides the
/// configured level. Calling it again is a no-op.
pub fn init_logging(settings: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match settings.format {
        LogFormat::Pretty => registry.with(fmt::layer().with_writer(std::io::stderr)).try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    };

    if result.is_err() {
        debug!("Logging already initialized");
    }
}
