//! Process-wide registry accessor.

use std::sync::OnceLock;

use crate::config::RegistryConfig;
use crate::index::Registry;

static REGISTRY: OnceLock<Registry> = OnceLock::new();

/// Returns the process-wide registry, creating it empty on first use.
pub fn registry() -> &'static Registry {
	REGISTRY.get_or_init(|| Registry::with_config(RegistryConfig::default()))
}

/// Installs the process-wide registry with `config`.
///
/// Must run before the first call to [`registry`]. Returns the already
/// installed registry as the error if it is too late.
pub fn try_init(config: RegistryConfig) -> Result<&'static Registry, &'static Registry> {
	let mut installed = false;
	let registry = REGISTRY.get_or_init(|| {
		installed = true;
		Registry::with_config(config)
	});
	if installed { Ok(registry) } else { Err(registry) }
}
