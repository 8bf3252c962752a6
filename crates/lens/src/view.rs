//! Cursors that navigate a value tree according to a declared [`Shape`].
//!
//! A [`View`] pairs a mutable borrow of the root value with a [`Shape`] and
//! the path from the root to the node it stands for. Navigating to a child
//! never writes anything; assigning through a view writes with the same path
//! traversal used for instructions, creating missing containers on the way.
use crate::error::ViewError;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::cmp::Ordering;
use varpath_path::{Path, Write, get_at, set_at, write_at};
use varpath_types::Shape;

pub struct View<'a> {
    root: &'a mut Value,
    shape: &'a Shape,
    path: Path,
}

impl<'a> View<'a> {
    /// A view of the whole of `root`.
    pub fn new(shape: &'a Shape, root: &'a mut Value) -> Self {
        Self {
            root,
            shape,
            path: Path::root(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn shape(&self) -> &Shape {
        self.shape
    }

    /// The stored value, if any.
    pub fn get(&self) -> Option<&Value> {
        get_at(&*self.root, &self.path)
    }

    /// The stored value, or an empty container of the declared kind if
    /// nothing is stored yet. The tree is not modified.
    pub fn read(&self) -> Cow<'_, Value> {
        match self.get() {
            Some(value) if !value.is_null() => Cow::Borrowed(value),
            _ => Cow::Owned(empty_value(self.shape)),
        }
    }

    /// The stored value as plain JSON, `null` if absent.
    pub fn to_json(&self) -> Value {
        self.get().cloned().unwrap_or(Value::Null)
    }

    /// Replaces the stored value.
    pub fn set(&mut self, value: Value) {
        set_at(self.root, &self.path, value);
    }

    /// Descends into a declared object field.
    pub fn field(&mut self, name: &str) -> Result<View<'_>, ViewError> {
        let shape = self.field_shape(name)?;
        Ok(View {
            root: &mut *self.root,
            shape,
            path: self.path.with_key(name),
        })
    }

    /// Assigns to a declared object field.
    pub fn set_field(&mut self, name: &str, value: Value) -> Result<(), ViewError> {
        self.field_shape(name)?;
        set_at(self.root, &self.path.with_key(name), value);
        Ok(())
    }

    /// Descends into an element of a declared array.
    pub fn index(&mut self, index: usize) -> Result<View<'_>, ViewError> {
        let element = self.element_shape()?;
        Ok(View {
            root: &mut *self.root,
            shape: element,
            path: self.path.with_index(index_segment(index)),
        })
    }

    /// Assigns to an element of a declared array, padding with `null` if
    /// `index` is past the end.
    pub fn set_index(&mut self, index: usize, value: Value) -> Result<(), ViewError> {
        self.element_shape()?;
        set_at(self.root, &self.path.with_index(index_segment(index)), value);
        Ok(())
    }

    /// Array operations on a declared array.
    pub fn array(&mut self) -> Result<ArrayView<'_>, ViewError> {
        let element = self.element_shape()?;
        Ok(ArrayView {
            root: &mut *self.root,
            element,
            path: self.path.clone(),
        })
    }

    /// The keys currently stored in this object, empty if it is absent.
    pub fn keys(&self) -> Vec<String> {
        self.get()
            .and_then(Value::as_object)
            .map(|object| object.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Whether `key` is currently stored in this object.
    pub fn has(&self, key: &str) -> bool {
        self.get()
            .and_then(Value::as_object)
            .is_some_and(|object| object.contains_key(key))
    }

    fn field_shape(&self, name: &str) -> Result<&'a Shape, ViewError> {
        let shape: &'a Shape = self.shape;
        if !matches!(shape, Shape::Object { .. }) {
            return Err(ViewError::NotAnObject {
                path: describe(&self.path),
                kind: shape.kind(),
            });
        }
        shape.field(name).ok_or_else(|| ViewError::UndeclaredField {
            path: describe(&self.path),
            field: name.to_string(),
        })
    }

    fn element_shape(&self) -> Result<&'a Shape, ViewError> {
        let shape: &'a Shape = self.shape;
        shape.element().ok_or_else(|| ViewError::NotAnArray {
            path: describe(&self.path),
            kind: shape.kind(),
        })
    }
}

/// Array operations on the array stored at a view's path.
///
/// Inspecting the array never writes. Every mutating operation first
/// materializes the array (an empty one if nothing usable is stored), runs
/// the operation on it and writes the result back to the same path.
pub struct ArrayView<'a> {
    root: &'a mut Value,
    element: &'a Shape,
    path: Path,
}

impl ArrayView<'_> {
    fn items(&self) -> Option<&Vec<Value>> {
        get_at(&*self.root, &self.path).and_then(Value::as_array)
    }

    pub fn len(&self) -> usize {
        self.items().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items().and_then(|items| items.get(index))
    }

    pub fn to_vec(&self) -> Vec<Value> {
        self.items().cloned().unwrap_or_default()
    }

    /// A view of one element, shaped by the array's element shape.
    pub fn element(&mut self, index: usize) -> View<'_> {
        View {
            root: &mut *self.root,
            shape: self.element,
            path: self.path.with_index(index_segment(index)),
        }
    }

    pub fn push(&mut self, value: Value) -> usize {
        self.mutate(|items| {
            items.push(value);
            items.len()
        })
    }

    pub fn pop(&mut self) -> Option<Value> {
        self.mutate(Vec::pop)
    }

    /// Removes and returns the first element.
    pub fn shift(&mut self) -> Option<Value> {
        self.mutate(|items| (!items.is_empty()).then(|| items.remove(0)))
    }

    /// Inserts at the front, returning the new length.
    pub fn unshift(&mut self, value: Value) -> usize {
        self.mutate(|items| {
            items.insert(0, value);
            items.len()
        })
    }

    /// Inserts at `index`, or at the end if `index` is past it.
    pub fn insert(&mut self, index: usize, value: Value) {
        self.mutate(|items| items.insert(index.min(items.len()), value));
    }

    pub fn remove(&mut self, index: usize) -> Option<Value> {
        self.mutate(|items| (index < items.len()).then(|| items.remove(index)))
    }

    /// Removes `delete_count` elements starting at `start` and inserts
    /// `replacement` in their place. Out-of-range bounds are clamped.
    pub fn splice(&mut self, start: usize, delete_count: usize, replacement: Vec<Value>) -> Vec<Value> {
        self.mutate(|items| {
            let start = start.min(items.len());
            let end = start.saturating_add(delete_count).min(items.len());
            items.splice(start..end, replacement).collect()
        })
    }

    pub fn reverse(&mut self) {
        self.mutate(|items| items.reverse());
    }

    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Value, &Value) -> Ordering,
    {
        self.mutate(|items| items.sort_by(compare));
    }

    /// Overwrites every existing element with `value`.
    pub fn fill(&mut self, value: Value) {
        self.mutate(|items| items.fill(value));
    }

    pub fn truncate(&mut self, len: usize) {
        self.mutate(|items| items.truncate(len));
    }

    /// Copies `start..end` to position `target` within the same array,
    /// without changing its length.
    pub fn copy_within(&mut self, start: usize, end: usize, target: usize) {
        self.mutate(|items| {
            let end = end.min(items.len());
            let start = start.min(end);
            let chunk: Vec<Value> = items[start..end].to_vec();
            for (slot, value) in items.iter_mut().skip(target).zip(chunk) {
                *slot = value;
            }
        });
    }

    fn mutate<R, F>(&mut self, operation: F) -> R
    where
        R: Default,
        F: FnOnce(&mut Vec<Value>) -> R,
    {
        let mut operation = Some(operation);
        let mut result = None;
        let policy = Write::new(|current: Option<Value>| {
            let mut items = match current {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            };
            if let Some(operation) = operation.take() {
                result = Some(operation(&mut items));
            }
            Some(Value::Array(items))
        });
        write_at(self.root, &self.path, policy);
        result.unwrap_or_default()
    }
}

fn empty_value(shape: &Shape) -> Value {
    match shape {
        Shape::Object { .. } => Value::Object(Map::new()),
        Shape::Array { .. } => Value::Array(Vec::new()),
        Shape::Leaf => Value::Null,
    }
}

fn index_segment(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

fn describe(path: &Path) -> String {
    if path.is_root() {
        "the root".to_string()
    } else {
        format!("'{path}'")
    }
}
