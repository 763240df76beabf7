//! Locale resolution: exact requested-or-default lookup.

use tracing::debug;

use crate::catalog::{Catalog, LocaleEntry};
use crate::error::LinguaError;

/// Anything that can report a preferred locale.
///
/// Platform adapters (a chat guild, an interaction context, a user profile)
/// implement this so the engine only ever consumes a plain string and
/// platform types stay outside the core.
pub trait PreferredLocale {
    /// The locale identifier this context prefers, e.g. `"en-US"`.
    fn preferred_locale(&self) -> &str;
}

impl PreferredLocale for str {
    fn preferred_locale(&self) -> &str {
        self
    }
}

impl PreferredLocale for String {
    fn preferred_locale(&self) -> &str {
        self
    }
}

/// Pick the locale entry to consult: the requested locale if the catalog
/// defines it verbatim, otherwise the default.
///
/// Fallback is exactly requested-then-default. No region stripping is
/// attempted (`"en-US"` never falls back to `"en"`); catalog authors define
/// qualified locales explicitly or callers pass the base locale.
pub fn resolve_entry<'a>(
    catalog: &'a Catalog,
    requested: &str,
    default: &str,
) -> Result<&'a LocaleEntry, LinguaError> {
    if let Some(entry) = catalog.get(requested) {
        return Ok(entry);
    }
    if let Some(entry) = catalog.get(default) {
        debug!("locale '{requested}' not in catalog, falling back to '{default}'");
        return Ok(entry);
    }
    Err(LinguaError::LocaleNotFound {
        requested: requested.to_string(),
        default: default.to_string(),
    })
}
