//! # lingua-core
//!
//! The localization resolution engine: locale fallback, dotted key-path
//! traversal, plural-form selection, and placeholder interpolation over an
//! immutable in-memory catalog.
//!
//! The catalog is constructed once and never mutated; every resolution call
//! is a pure read, so a [`Localizer`] can be shared across threads without
//! coordination.

pub mod args;
pub mod catalog;
pub mod error;
pub mod interpolate;
pub mod locale;
pub mod localizer;
pub mod path;
pub mod plural;

pub use args::{ArgValue, Args};
pub use catalog::{Catalog, LocaleEntry, Node};
pub use error::LinguaError;
pub use locale::PreferredLocale;
pub use localizer::Localizer;
