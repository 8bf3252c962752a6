//! Declared shapes used to constrain a live view of a value tree.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The declared structure of a value.
///
/// ```json
/// { "kind": "object", "fields": { "tags": { "kind": "array", "element": { "kind": "leaf" } } } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Object {
        #[serde(default)]
        fields: BTreeMap<String, Shape>,
    },
    Array {
        element: Box<Shape>,
    },
    Leaf,
}

impl Shape {
    pub fn object<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Shape)>,
        K: Into<String>,
    {
        Shape::Object {
            fields: fields.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    pub fn array(element: Shape) -> Self {
        Shape::Array {
            element: Box::new(element),
        }
    }

    /// The shape of a declared object field, if this is an object declaring it.
    pub fn field(&self, name: &str) -> Option<&Shape> {
        match self {
            Shape::Object { fields } => fields.get(name),
            _ => None,
        }
    }

    /// The element shape, if this is an array.
    pub fn element(&self) -> Option<&Shape> {
        match self {
            Shape::Array { element } => Some(element),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Object { .. } => "object",
            Shape::Array { .. } => "array",
            Shape::Leaf => "leaf",
        }
    }
}
