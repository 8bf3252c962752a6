//! The "update variable" action.
use crate::error::Error;
use crate::processor;
use crate::store::VariableStore;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use varpath_types::{Instruction, VariableId};

/// Settings record of an "update variable" action, as persisted in the
/// extension configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVariableSettings {
    /// The variable (data element) to update.
    pub data_element: VariableId,
    #[serde(default)]
    pub instructions: Vec<Instruction>,
}

impl UpdateVariableSettings {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Applies the settings' instructions to the named variable and replaces the
/// stored tree with the result.
///
/// A variable that has never been stored starts out absent (`null`). The
/// batch runs against a copy, so if any instruction has a malformed path the
/// store is left exactly as it was.
pub fn update_variable(store: &mut VariableStore, settings: &UpdateVariableSettings) -> Result<(), Error> {
    let mut variable = store.get(&settings.data_element).cloned().unwrap_or(Value::Null);
    processor::apply_to(&mut variable, &settings.instructions)?;
    log::debug!(
        "Applied {} instruction(s) to variable '{}'",
        settings.instructions.len(),
        settings.data_element
    );
    store.replace(settings.data_element.clone(), variable);
    Ok(())
}
