//! Folds an ordered instruction list into a value.
use crate::error::Error;
use serde_json::Value;
use varpath_path::{Path, delete_at, parse_path, push_at, set_at};
use varpath_types::{Instruction, Operator};

/// Applies `instructions` to `value` in list order, mutating it in place.
///
/// Each instruction's path is parsed before it touches the tree, so an
/// instruction with a malformed path fails without changing anything.
/// Instructions before it have already been applied; callers that need the
/// whole batch to be all-or-nothing apply it to a copy (see
/// [`crate::action::update_variable`]).
///
/// Unknown operators are skipped with a warning.
pub fn apply_to(value: &mut Value, instructions: &[Instruction]) -> Result<(), Error> {
    for (index, instruction) in instructions.iter().enumerate() {
        let path = parse_path(&instruction.path).map_err(|source| Error::Instruction {
            index,
            path: instruction.path.clone(),
            operator: instruction.operator.to_string(),
            source,
        })?;
        apply_one(value, &path, instruction);
    }
    Ok(())
}

/// Owned form of [`apply_to`]: the accumulator starts at `initial` and the
/// final accumulator is returned.
pub fn apply_instructions(initial: Value, instructions: &[Instruction]) -> Result<Value, Error> {
    let mut value = initial;
    apply_to(&mut value, instructions)?;
    Ok(value)
}

fn apply_one(value: &mut Value, path: &Path, instruction: &Instruction) {
    log::debug!("Applying '{}' at '{}'", instruction.operator, path);
    match &instruction.operator {
        Operator::Set => set_at(value, path, instruction.value.clone().unwrap_or(Value::Null)),
        Operator::Delete => delete_at(value, path),
        Operator::Push => push_at(value, path),
        Operator::Unknown(name) => {
            log::warn!(
                "Unknown instruction operator '{}' at '{}'; skipping it",
                name,
                instruction.path
            );
        }
    }
}
