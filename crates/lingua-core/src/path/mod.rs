//! Key-path traversal through nested catalog nodes.

use crate::catalog::{LocaleEntry, Node};
use crate::error::LinguaError;


/// Walk `key_path` through `entry`, descending one mapping per separator-split
/// segment.
///
/// Fails with `KeyPathNotFound` when a segment is absent or an intermediate
/// value is a leaf with segments remaining. The final node is returned as-is,
/// including a sub-mapping when the path under-specifies a leaf; callers that
/// need a string reject non-leaf results. `locale` is only used for error
/// context.
pub fn traverse<'a>(
    entry: &'a LocaleEntry,
    key_path: &str,
    separator: char,
    locale: &str,
) -> Result<&'a Node, LinguaError> {
    let not_found = || LinguaError::KeyPathNotFound {
        key: key_path.to_string(),
        locale: locale.to_string(),
    };

    let mut segments = key_path.split(separator);
    // split() always yields at least one segment; an empty key path fails the
    // first lookup like any other missing key.
    let first = segments.next().unwrap_or_default();
    let mut node = entry.get(first).ok_or_else(not_found)?;
    for segment in segments {
        let Node::Map(map) = node else {
            return Err(not_found());
        };
        node = map.get(segment).ok_or_else(not_found)?;
    }
    Ok(node)
}
