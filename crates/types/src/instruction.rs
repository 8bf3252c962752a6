//! Persisted mutation instructions.
//!
//! An instruction list is stored as part of the extension settings as a plain
//! JSON array of `{ "path", "operator", "value" }` records.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The mutation an [`Instruction`] performs at its path.
///
/// Operators are persisted as literal strings. Strings this version does not
/// recognize are kept verbatim in [`Operator::Unknown`] so a settings record
/// written by a newer editor survives a load/save cycle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Operator {
    /// Replace the value at the path.
    Set,
    /// Remove the value at the path.
    Delete,
    /// Append an empty slot to the array at the path.
    Push,
    /// Any other operator string.
    Unknown(String),
}

impl Operator {
    pub fn as_str(&self) -> &str {
        match self {
            Operator::Set => "set",
            Operator::Delete => "delete",
            Operator::Push => "push",
            Operator::Unknown(name) => name,
        }
    }
}

impl From<String> for Operator {
    fn from(s: String) -> Self {
        match s.as_str() {
            "set" => Operator::Set,
            "delete" => Operator::Delete,
            "push" => Operator::Push,
            _ => Operator::Unknown(s),
        }
    }
}

impl From<&str> for Operator {
    fn from(s: &str) -> Self {
        Operator::from(s.to_string())
    }
}

impl From<Operator> for String {
    fn from(op: Operator) -> Self {
        match op {
            Operator::Unknown(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single declarative mutation targeting one path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub path: String,
    pub operator: Operator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl Instruction {
    pub fn set(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            path: path.into(),
            operator: Operator::Set,
            value: Some(value.into()),
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            operator: Operator::Delete,
            value: None,
        }
    }

    pub fn push(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            operator: Operator::Push,
            value: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_known_operators() {
        let list: Vec<Instruction> = serde_json::from_value(json!([
            { "path": "a", "operator": "set", "value": 1 },
            { "path": "b", "operator": "delete" },
            { "path": "c", "operator": "push" }
        ]))
        .unwrap();

        assert_eq!(list[0], Instruction::set("a", 1));
        assert_eq!(list[1], Instruction::delete("b"));
        assert_eq!(list[2], Instruction::push("c"));
    }

    #[test]
    fn test_unknown_operator_is_preserved() {
        let raw = json!({ "path": "a", "operator": "frobnicate", "value": 1 });
        let instruction: Instruction = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(instruction.operator, Operator::Unknown("frobnicate".into()));
        assert_eq!(serde_json::to_value(&instruction).unwrap(), raw);
    }

    #[test]
    fn test_missing_value_is_not_emitted() {
        let json = serde_json::to_value(Instruction::push("list")).unwrap();
        assert_eq!(json, json!({ "path": "list", "operator": "push" }));
    }

    #[test]
    fn test_explicit_null_value_reads_as_none() {
        let instruction: Instruction =
            serde_json::from_value(json!({ "path": "a", "operator": "set", "value": null })).unwrap();
        // serde maps an explicit null onto `None` for an `Option` field.
        assert_eq!(instruction.value, None);
    }
}
