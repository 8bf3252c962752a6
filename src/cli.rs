//! File-level operations behind the `varpath` command-line tool.
use crate::error::Error;
use crate::processor;
use serde_json::Value;
use std::fs;
use std::path::Path;
use varpath_types::Instruction;

pub fn read_json(path: &Path) -> Result<Value, Error> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

pub fn read_instructions(path: &Path) -> Result<Vec<Instruction>, Error> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Applies the instruction list in `instructions` to the document in `data`
/// (or to an absent value when no document is given).
pub fn apply_files(data: Option<&Path>, instructions: &Path) -> Result<Value, Error> {
    let initial = match data {
        Some(path) => read_json(path)?,
        None => Value::Null,
    };
    let instructions = read_instructions(instructions)?;
    processor::apply_instructions(initial, &instructions)
}

/// Reads the value at `path` inside the document in `data`.
pub fn get_from_file(data: &Path, path: &str) -> Result<Option<Value>, Error> {
    let document = read_json(data)?;
    Ok(varpath_path::take_value(document, path)?)
}

pub fn write_json(value: &Value, output: Option<&Path>, compact: bool) -> Result<(), Error> {
    let text = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    match output {
        Some(path) => fs::write(path, text + "\n")?,
        None => println!("{text}"),
    }
    Ok(())
}
