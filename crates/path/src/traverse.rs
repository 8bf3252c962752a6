//! Traversal of a value tree along a parsed [`Path`].
//!
//! The descent is driven by the path's segments: a [`PathSegment::Key`]
//! always treats the current value as an object and a [`PathSegment::Index`]
//! always treats it as an array. A value of the wrong kind (or an absent one)
//! is replaced by an empty container of the right kind instead of raising an
//! error. At each step the [`Policy`] decides what to build from the child's
//! result, so the same descent implements reading, writing and deleting.
//!
//! The descent works on owned values: each child is moved out of its
//! container, processed, and handed back to the policy together with the
//! container. Nothing is cloned along the way.
use crate::ast::{Path, PathSegment};
use serde_json::{Map, Value};

/// The most `null` slots a single write may add when it lands past the end of
/// an array. A write further out leaves the array unchanged.
pub const MAX_PADDING: usize = 1 << 16;

/// Decides what happens at each decision point of a traversal.
pub trait Policy {
    type Output;

    /// Combines the result for `object[key]` with its parent object.
    fn on_object_property(&mut self, object: Map<String, Value>, key: &str, child: Self::Output) -> Self::Output;

    /// Combines the result for `array[index]` with its parent array.
    ///
    /// `index` is already resolved against the array length and may still be
    /// negative if the path counted back past the start of the array.
    fn on_array_property(&mut self, array: Vec<Value>, index: i64, child: Self::Output) -> Self::Output;

    /// Called once, at the end of the path, with the value found there.
    fn on_final_value(&mut self, current: Option<Value>) -> Self::Output;
}

/// Walks `root` along `path`, letting `policy` combine the results bottom-up.
pub fn traverse<P: Policy>(root: Option<Value>, path: &Path, policy: &mut P) -> P::Output {
    descend(root, path.segments(), policy)
}

fn descend<P: Policy>(value: Option<Value>, segments: &[PathSegment], policy: &mut P) -> P::Output {
    let Some((segment, rest)) = segments.split_first() else {
        return policy.on_final_value(value);
    };
    match segment {
        PathSegment::Key(key) => {
            let mut object = into_object(value);
            let child = object.remove(key);
            let result = descend(child, rest, policy);
            policy.on_object_property(object, key, result)
        }
        PathSegment::Index(index) => {
            let mut array = into_array(value);
            let resolved = resolve_index(array.len(), *index);
            let child = usize::try_from(resolved)
                .ok()
                .and_then(|i| array.get_mut(i))
                .map(std::mem::take);
            let result = descend(child, rest, policy);
            policy.on_array_property(array, resolved, result)
        }
    }
}

/// Resolves a negative index against `len`. The result is not clamped.
pub fn resolve_index(len: usize, index: i64) -> i64 {
    if index < 0 {
        i64::try_from(len).unwrap_or(i64::MAX).saturating_add(index)
    } else {
        index
    }
}

fn into_object(value: Option<Value>) -> Map<String, Value> {
    match value {
        Some(Value::Object(object)) => object,
        Some(Value::Null) | None => Map::new(),
        Some(other) => {
            log::trace!("Replacing {other} with an empty object");
            Map::new()
        }
    }
}

fn into_array(value: Option<Value>) -> Vec<Value> {
    match value {
        Some(Value::Array(array)) => array,
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            log::trace!("Replacing {other} with an empty array");
            Vec::new()
        }
    }
}

/// Moves the value at the end of the path out of the tree. Never mutates
/// anything the caller can still observe.
pub struct Read;

impl Policy for Read {
    type Output = Option<Value>;

    fn on_object_property(&mut self, _object: Map<String, Value>, _key: &str, child: Option<Value>) -> Option<Value> {
        child
    }

    fn on_array_property(&mut self, _array: Vec<Value>, _index: i64, child: Option<Value>) -> Option<Value> {
        child
    }

    fn on_final_value(&mut self, current: Option<Value>) -> Option<Value> {
        current
    }
}

/// Discards every result. Running it only exercises the descent.
pub struct Validate;

impl Policy for Validate {
    type Output = ();

    fn on_object_property(&mut self, _object: Map<String, Value>, _key: &str, _child: ()) {}

    fn on_array_property(&mut self, _array: Vec<Value>, _index: i64, _child: ()) {}

    fn on_final_value(&mut self, _current: Option<Value>) {}
}

/// Rebuilds every container on the way back up, replacing the value at the
/// end of the path with whatever `on_final` returns for it.
///
/// Returning `None` from `on_final` removes the value: the property is dropped
/// from its object, or the array slot is left as a `null` hole so the
/// positions of the other elements are unchanged.
pub struct Write<F> {
    on_final: F,
}

impl<F> Write<F>
where
    F: FnMut(Option<Value>) -> Option<Value>,
{
    pub fn new(on_final: F) -> Self {
        Self { on_final }
    }
}

/// A write that stores `value` at the end of the path.
pub fn write_constant(value: Value) -> Write<impl FnMut(Option<Value>) -> Option<Value>> {
    let mut value = Some(value);
    Write::new(move |_| value.take())
}

/// A write that removes the value at the end of the path.
pub fn write_removal() -> Write<impl FnMut(Option<Value>) -> Option<Value>> {
    Write::new(|_| None)
}

/// A write that appends one placeholder slot to the array at the end of the
/// path, creating the array if needed.
pub fn write_placeholder() -> Write<impl FnMut(Option<Value>) -> Option<Value>> {
    Write::new(grow_with_placeholder)
}

fn grow_with_placeholder(current: Option<Value>) -> Option<Value> {
    let mut array = match current {
        Some(Value::Array(array)) => array,
        _ => Vec::new(),
    };
    array.push(Value::Null);
    Some(Value::Array(array))
}

impl<F> Policy for Write<F>
where
    F: FnMut(Option<Value>) -> Option<Value>,
{
    type Output = Option<Value>;

    fn on_object_property(&mut self, mut object: Map<String, Value>, key: &str, child: Option<Value>) -> Option<Value> {
        if let Some(child) = child {
            object.insert(key.to_string(), child);
        }
        Some(Value::Object(object))
    }

    fn on_array_property(&mut self, mut array: Vec<Value>, index: i64, child: Option<Value>) -> Option<Value> {
        match usize::try_from(index) {
            Ok(i) => match child {
                Some(child) if i < array.len() => array[i] = child,
                Some(child) if i - array.len() <= MAX_PADDING => {
                    array.resize(i, Value::Null);
                    array.push(child);
                }
                Some(_) => {
                    log::warn!(
                        "Index {} is more than {} slots past the end of an array of length {}; leaving the array unchanged",
                        index,
                        MAX_PADDING,
                        array.len()
                    );
                }
                None => {}
            },
            Err(_) => {
                log::warn!(
                    "Index {} is before the start of an array of length {}; leaving the array unchanged",
                    index,
                    array.len()
                );
            }
        }
        Some(Value::Array(array))
    }

    fn on_final_value(&mut self, current: Option<Value>) -> Option<Value> {
        (self.on_final)(current)
    }
}
