//! Dotted/bracketed path expressions over JSON value trees.
//!
//! A path such as `a.b[2].c` or `items[-1]` names a location inside a nested
//! [`serde_json::Value`]. This crate parses such paths and reads, writes,
//! deletes or grows the value found there. Writes create missing objects and
//! arrays on the way down, and quietly replace values of the wrong kind.
//!
//! Every function that takes a path string parses it completely before
//! touching the tree, so a malformed path never leaves a partial write behind.

pub mod ast;
pub mod error;
mod lexer;
mod parser;
pub mod traverse;

// --- Public API ---
pub use ast::{Path, PathSegment};
pub use error::PathSyntaxError;
pub use parser::parse_path;
pub use traverse::{MAX_PADDING, Policy, Read, Validate, Write, resolve_index, traverse};

use serde_json::Value;

/// Checks that `path` is well-formed without touching any value.
pub fn validate(path: &str) -> Result<(), PathSyntaxError> {
    let parsed = parse_path(path)?;
    traverse(None, &parsed, &mut Validate);
    Ok(())
}

/// Returns the value at `path`, or `None` if any step along the way is missing.
pub fn get_value<'v>(root: &'v Value, path: &str) -> Result<Option<&'v Value>, PathSyntaxError> {
    let parsed = parse_path(path)?;
    Ok(get_at(root, &parsed))
}

/// Moves the value at `path` out of an owned tree.
pub fn take_value(root: Value, path: &str) -> Result<Option<Value>, PathSyntaxError> {
    let parsed = parse_path(path)?;
    Ok(traverse(Some(root), &parsed, &mut Read))
}

/// Stores `value` at `path`, creating intermediate containers as needed.
pub fn set_value(root: &mut Value, path: &str, value: Value) -> Result<(), PathSyntaxError> {
    let parsed = parse_path(path)?;
    set_at(root, &parsed, value);
    Ok(())
}

/// Removes the value at `path`. Array elements are replaced by a `null` hole.
pub fn delete_path(root: &mut Value, path: &str) -> Result<(), PathSyntaxError> {
    let parsed = parse_path(path)?;
    delete_at(root, &parsed);
    Ok(())
}

/// Appends an empty (`null`) slot to the array at `path`, creating it if absent.
pub fn push_placeholder(root: &mut Value, path: &str) -> Result<(), PathSyntaxError> {
    let parsed = parse_path(path)?;
    push_at(root, &parsed);
    Ok(())
}

/// Borrowing form of the [`Read`] policy.
pub fn get_at<'v>(root: &'v Value, path: &Path) -> Option<&'v Value> {
    path.segments().iter().try_fold(root, |value, segment| match segment {
        PathSegment::Key(key) => value.as_object()?.get(key),
        PathSegment::Index(index) => {
            let array = value.as_array()?;
            let resolved = usize::try_from(resolve_index(array.len(), *index)).ok()?;
            array.get(resolved)
        }
    })
}

pub fn set_at(root: &mut Value, path: &Path, value: Value) {
    write_at(root, path, traverse::write_constant(value));
}

pub fn delete_at(root: &mut Value, path: &Path) {
    write_at(root, path, traverse::write_removal());
}

pub fn push_at(root: &mut Value, path: &Path) {
    write_at(root, path, traverse::write_placeholder());
}

/// Runs a [`Write`] policy against `root` in place.
pub fn write_at<F>(root: &mut Value, path: &Path, mut policy: Write<F>)
where
    F: FnMut(Option<Value>) -> Option<Value>,
{
    let current = std::mem::take(root);
    *root = traverse(Some(current), path, &mut policy).unwrap_or(Value::Null);
}
