//! Process-wide registry installation
//!
//! Registration is expected to happen during a single-threaded startup phase;
//! once built, the registry is published here exactly once and is read-only
//! for the rest of the process lifetime. Reads need no synchronization.

use once_cell::sync::OnceCell;

use crate::registry::TagRegistry;

static GLOBAL: OnceCell<TagRegistry> = OnceCell::new();

/// Publish `registry` as the process-wide registry.
///
/// Returns the rejected registry if one has already been installed.
pub fn install(registry: TagRegistry) -> Result<(), TagRegistry> {
    GLOBAL.set(registry)
}

/// The installed process-wide registry, if any.
pub fn get() -> Option<&'static TagRegistry> {
    GLOBAL.get()
}

/// Check whether a process-wide registry has been installed.
pub fn is_installed() -> bool {
    GLOBAL.get().is_some()
}
