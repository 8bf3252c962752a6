mod common;

use common::fixtures::{page_variable, update_settings};
use common::{TestResult, apply_json};
use serde_json::{Value, json};
use varpath::{
    Error, Instruction, UpdateVariableSettings, VariableId, VariableStore, apply_instructions, delete_path, get_value,
    set_value, update_variable,
};

#[test]
fn test_get_after_set() -> TestResult {
    let mut value = json!({});
    set_value(&mut value, "a.b[0]", json!(5))?;
    assert_eq!(get_value(&value, "a.b[0]")?, Some(&json!(5)));
    Ok(())
}

#[test]
fn test_set_touches_nothing_else() -> TestResult {
    let mut value = json!({ "a": 1 });
    set_value(&mut value, "a", json!("x"))?;
    assert_eq!(value, json!({ "a": "x" }));
    Ok(())
}

#[test]
fn test_delete_keeps_array_length() -> TestResult {
    let mut value = json!({ "b": ["x", "y"] });
    delete_path(&mut value, "b[0]")?;
    assert_eq!(value, json!({ "b": [null, "y"] }));
    Ok(())
}

#[test]
fn test_push_then_set_last() -> TestResult {
    let result = apply_json(
        json!({}),
        json!([
            { "path": "b", "operator": "push" },
            { "path": "b.-1", "operator": "set", "value": "item" }
        ]),
    )?;
    assert_eq!(result, json!({ "b": ["item"] }));
    Ok(())
}

#[test]
fn test_delete_before_set_recreates_only_the_set_branch() -> TestResult {
    let result = apply_json(
        json!({ "a": { "b": 0, "c": 1 } }),
        json!([
            { "path": "a", "operator": "delete" },
            { "path": "a.b", "operator": "set", "value": 1 }
        ]),
    )?;
    assert_eq!(result, json!({ "a": { "b": 1 } }));
    Ok(())
}

#[test]
fn test_unknown_operator_leaves_value_unchanged() -> TestResult {
    let result = apply_json(json!({ "a": 1 }), json!([{ "path": "a", "operator": "frobnicate", "value": 1 }]))?;
    assert_eq!(result, json!({ "a": 1 }));
    Ok(())
}

#[test]
fn test_negative_index_set() -> TestResult {
    let mut value = json!({ "arr": ["x", "y", "z"] });
    set_value(&mut value, "arr[-1]", json!("Z"))?;
    assert_eq!(value, json!({ "arr": ["x", "y", "Z"] }));
    Ok(())
}

#[test]
fn test_unterminated_bracket_fails_for_every_operation() {
    let mut value = json!({ "a": [1] });
    assert!(varpath::validate("a[1").is_err());
    assert!(get_value(&value, "a[1").is_err());
    assert!(set_value(&mut value, "a[1", json!(2)).is_err());
    assert!(matches!(
        apply_instructions(value.clone(), &[Instruction::delete("a[1")]),
        Err(Error::Instruction { index: 0, .. })
    ));
    assert_eq!(value, json!({ "a": [1] }));
}

#[test]
fn test_update_variable_end_to_end() -> TestResult {
    let mut store = VariableStore::new();
    let id = VariableId::from("pageVariable");
    store.replace(id.clone(), page_variable());

    let settings: UpdateVariableSettings = serde_json::from_value(update_settings())?;
    update_variable(&mut store, &settings)?;

    assert_eq!(
        store.get(&id),
        Some(&json!({
            "page": { "name": "checkout" },
            "products": [
                null,
                { "sku": "B-2", "quantity": 3 },
                { "sku": "C-3", "quantity": 2 }
            ]
        }))
    );
    Ok(())
}

#[test]
fn test_update_variable_replaces_rather_than_merges() -> TestResult {
    let mut store = VariableStore::new();
    let id = VariableId::from("v");
    store.replace(id.clone(), json!({ "keep": true, "drop": true }));

    let settings = UpdateVariableSettings {
        data_element: id.clone(),
        instructions: vec![Instruction::delete("drop")],
    };
    update_variable(&mut store, &settings)?;
    assert_eq!(store.get(&id), Some(&json!({ "keep": true })));
    Ok(())
}

#[test]
fn test_reapplying_push_grows_again() -> TestResult {
    let instructions = vec![Instruction::push("list"), Instruction::set("count", 1)];
    let once = apply_instructions(Value::Null, &instructions)?;
    let twice = apply_instructions(once, &instructions)?;
    assert_eq!(twice, json!({ "list": [null, null], "count": 1 }));
    Ok(())
}
