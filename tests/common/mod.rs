#![allow(dead_code)]

pub mod fixtures;

use serde_json::Value;
use varpath::{Instruction, apply_instructions};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Applies a JSON instruction list to a JSON document.
pub fn apply_json(initial: Value, instructions: Value) -> Result<Value, Box<dyn std::error::Error>> {
    let instructions: Vec<Instruction> = serde_json::from_value(instructions)?;
    Ok(apply_instructions(initial, &instructions)?)
}
