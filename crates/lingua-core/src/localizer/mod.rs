//! Orchestration: the public resolution entry point.

use tracing::debug;

use crate::args::{ArgValue, Args};
use crate::catalog::{Catalog, Node};
use crate::error::LinguaError;
use crate::interpolate::interpolate;
use crate::locale::{resolve_entry, PreferredLocale};
use crate::path::traverse;
use crate::plural::select_form;


/// The resolution engine: an immutable catalog, a default locale, and a
/// key-path separator.
///
/// Every call is a pure read against the catalog; a `Localizer` can be
/// shared freely across threads. Replacing the catalog means building a new
/// `Localizer`, never mutating one in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Localizer {
    catalog: Catalog,
    default_locale: String,
    separator: char,
}

impl Localizer {
    /// Create a localizer over `catalog`, falling back to `default_locale`
    /// whenever a requested locale is not in the catalog.
    pub fn new(catalog: Catalog, default_locale: impl Into<String>) -> Self {
        Self {
            catalog,
            default_locale: default_locale.into(),
            separator: '.',
        }
    }

    /// Use a different key-path separator (default `'.'`).
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The fallback locale.
    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    /// Resolve `key` for `locale` and interpolate `args` into the result.
    ///
    /// A plural list reached without a quantity deterministically yields its
    /// last element, the "many" form; use [`Localizer::pluralize`] to select
    /// by quantity. A nested mapping or unsupported leaf is `InvalidNode`.
    pub fn localize(&self, key: &str, locale: &str, args: &Args) -> Result<String, LinguaError> {
        let entry = resolve_entry(&self.catalog, locale, &self.default_locale)?;
        let node = traverse(entry, key, self.separator, locale)?;
        if matches!(node, Node::Forms(_)) {
            debug!("plural key '{key}' accessed without a quantity, using the last form");
        }
        // Quantity 0 pins a plural list to its last element and is ignored
        // by plain strings.
        let text = select_form(node, 0, key)?;
        Ok(interpolate(text, args))
    }

    /// Shorthand alias for [`Localizer::localize`].
    pub fn t(&self, key: &str, locale: &str, args: &Args) -> Result<String, LinguaError> {
        self.localize(key, locale, args)
    }

    /// Resolve `key` for whatever locale `ctx` prefers.
    pub fn localize_for(
        &self,
        key: &str,
        ctx: &impl PreferredLocale,
        args: &Args,
    ) -> Result<String, LinguaError> {
        self.localize(key, ctx.preferred_locale(), args)
    }

    /// Resolve `key`, select the plural form for `quantity`, and
    /// interpolate.
    ///
    /// A `{count}` argument is supplied from `quantity` unless the caller
    /// already set one; a plain string at `key` passes through with the
    /// quantity ignored.
    pub fn pluralize(
        &self,
        key: &str,
        quantity: i64,
        locale: &str,
        args: &Args,
    ) -> Result<String, LinguaError> {
        let entry = resolve_entry(&self.catalog, locale, &self.default_locale)?;
        let node = traverse(entry, key, self.separator, locale)?;
        let text = select_form(node, quantity, key)?;

        if args.contains_key("count") {
            Ok(interpolate(text, args))
        } else {
            let mut args = args.clone();
            args.insert("count".to_string(), ArgValue::Int(quantity));
            Ok(interpolate(text, &args))
        }
    }

    /// Resolve `key` to a full node, interpolating every string leaf.
    ///
    /// Unlike [`Localizer::localize`] this accepts non-terminal results:
    /// nested mappings and plural lists are returned with each contained
    /// string formatted, and non-string leaves pass through untouched.
    pub fn localize_node(
        &self,
        key: &str,
        locale: &str,
        args: &Args,
    ) -> Result<Node, LinguaError> {
        let entry = resolve_entry(&self.catalog, locale, &self.default_locale)?;
        let node = traverse(entry, key, self.separator, locale)?;
        Ok(format_node(node, args))
    }
}

/// Recursively interpolate every string leaf of `node`.
fn format_node(node: &Node, args: &Args) -> Node {
    match node {
        Node::Text(text) => Node::Text(interpolate(text, args)),
        Node::Forms(forms) => {
            Node::Forms(forms.iter().map(|form| interpolate(form, args)).collect())
        }
        Node::Map(map) => Node::Map(
            map.iter()
                .map(|(key, value)| (key.clone(), format_node(value, args)))
                .collect(),
        ),
        Node::Other(value) => Node::Other(value.clone()),
    }
}
