use serde_json::{Value, json};
use varpath::Shape;

/// A page-view variable as it looks after a few updates.
pub fn page_variable() -> Value {
    json!({
        "page": { "name": "home", "channel": "web" },
        "products": [
            { "sku": "A-1", "quantity": 1 },
            { "sku": "B-2", "quantity": 3 }
        ]
    })
}

/// The declared shape of [`page_variable`].
pub fn page_shape() -> Shape {
    serde_json::from_value(json!({
        "kind": "object",
        "fields": {
            "page": {
                "kind": "object",
                "fields": {
                    "name": { "kind": "leaf" },
                    "channel": { "kind": "leaf" }
                }
            },
            "products": {
                "kind": "array",
                "element": {
                    "kind": "object",
                    "fields": {
                        "sku": { "kind": "leaf" },
                        "quantity": { "kind": "leaf" }
                    }
                }
            },
            "tags": { "kind": "array", "element": { "kind": "leaf" } }
        }
    }))
    .expect("page shape fixture is a valid shape")
}

/// An "update variable" settings record exercising every operator.
pub fn update_settings() -> Value {
    json!({
        "dataElement": "pageVariable",
        "instructions": [
            { "path": "page.name", "operator": "set", "value": "checkout" },
            { "path": "products", "operator": "push" },
            { "path": "products[-1]", "operator": "set", "value": { "sku": "C-3", "quantity": 2 } },
            { "path": "products[0]", "operator": "delete" },
            { "path": "page.channel", "operator": "delete" },
            { "path": "page", "operator": "annotate", "value": "ignored" }
        ]
    })
}
