mod common;

use common::TestResult;
use serde_json::json;
use std::fs;
use tempfile::tempdir;
use varpath::{Error, Instruction, UpdateVariableSettings, cli};

#[test]
fn test_apply_files() -> TestResult {
    let dir = tempdir()?;
    let data = dir.path().join("data.json");
    let instructions = dir.path().join("instructions.json");
    fs::write(&data, r#"{ "a": 1 }"#)?;
    fs::write(
        &instructions,
        r#"[{ "path": "b[0]", "operator": "set", "value": "x" }, { "path": "a", "operator": "delete" }]"#,
    )?;

    let result = cli::apply_files(Some(&data), &instructions)?;
    assert_eq!(result, json!({ "b": ["x"] }));
    Ok(())
}

#[test]
fn test_apply_files_without_data_starts_absent() -> TestResult {
    let dir = tempdir()?;
    let instructions = dir.path().join("instructions.json");
    fs::write(&instructions, r#"[{ "path": "list", "operator": "push" }]"#)?;

    assert_eq!(cli::apply_files(None, &instructions)?, json!({ "list": [null] }));
    Ok(())
}

#[test]
fn test_get_from_file() -> TestResult {
    let dir = tempdir()?;
    let data = dir.path().join("data.json");
    fs::write(&data, r#"{ "orders": [{ "id": "A" }, { "id": "B" }] }"#)?;

    assert_eq!(cli::get_from_file(&data, "orders[-1].id")?, Some(json!("B")));
    assert_eq!(cli::get_from_file(&data, "orders[5].id")?, None);
    assert!(matches!(cli::get_from_file(&data, "orders[x]"), Err(Error::Path(_))));
    Ok(())
}

#[test]
fn test_write_json_to_file() -> TestResult {
    let dir = tempdir()?;
    let output = dir.path().join("out.json");
    cli::write_json(&json!({ "a": [1, 2] }), Some(&output), true)?;
    assert_eq!(fs::read_to_string(&output)?, "{\"a\":[1,2]}\n");
    Ok(())
}

#[test]
fn test_malformed_instruction_file() -> TestResult {
    let dir = tempdir()?;
    let instructions = dir.path().join("instructions.json");
    fs::write(&instructions, r#"{ "not": "a list" }"#)?;
    assert!(matches!(cli::apply_files(None, &instructions), Err(Error::Json(_))));

    let missing = dir.path().join("missing.json");
    assert!(matches!(cli::apply_files(None, &missing), Err(Error::Io(_))));
    Ok(())
}

#[test]
fn test_settings_from_file() -> TestResult {
    let dir = tempdir()?;
    let settings = dir.path().join("settings.json");
    fs::write(
        &settings,
        r#"{ "dataElement": "cart", "instructions": [{ "path": "items", "operator": "push" }] }"#,
    )?;

    let settings = UpdateVariableSettings::from_file(&settings)?;
    assert_eq!(settings.data_element.as_str(), "cart");
    assert_eq!(settings.instructions, vec![Instruction::push("items")]);
    Ok(())
}
