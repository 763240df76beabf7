//! Plural-form selection: first element for one, last for everything else.

use crate::catalog::Node;
use crate::error::LinguaError;


/// Select the plural form of `node` for `quantity`.
///
/// Plain strings pass through unchanged, so non-pluralized keys work
/// transparently. For a non-empty list, a quantity of exactly 1 selects the
/// first element and every other quantity selects the last, regardless of
/// list length. This is a deliberate language-agnostic rule, not a CLDR
/// plural-category system; middle elements are never chosen. `key` is only
/// used for error context.
pub fn select_form<'a>(node: &'a Node, quantity: i64, key: &str) -> Result<&'a str, LinguaError> {
    let invalid = |reason: String| LinguaError::InvalidNode {
        key: key.to_string(),
        reason,
    };

    match node {
        Node::Text(text) => Ok(text),
        Node::Forms(forms) => {
            let (first, last) = match (forms.first(), forms.last()) {
                (Some(first), Some(last)) => (first, last),
                _ => return Err(invalid("plural list is empty".to_string())),
            };
            if quantity == 1 {
                Ok(first)
            } else {
                Ok(last)
            }
        }
        Node::Map(_) => Err(invalid(
            "expected a string or plural list, found a nested mapping".to_string(),
        )),
        Node::Other(value) => Err(invalid(format!("unsupported value: {value}"))),
    }
}
