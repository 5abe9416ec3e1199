use serde_json::{json, Map, Value};

use super::schema::{FieldKind, FieldSpec, Presence, RecordSchema};

/// Render a record's constraint table as a JSON Schema document.
///
/// Nested record kinds are emitted once under `$defs` and referenced
/// from the fields that contain them, so an external editor can render
/// forms and re-validate documents without any other knowledge of the
/// record kinds.
pub fn describe(schema: &RecordSchema) -> Value {
    let mut defs = Map::new();
    let mut description = describe_object(schema, &mut defs);

    if !defs.is_empty() {
        description["$defs"] = Value::Object(defs);
    }

    description
}

fn describe_object(schema: &RecordSchema, defs: &mut Map<String, Value>) -> Value {
    let mut properties = Map::new();
    for field in schema.fields {
        properties.insert(field.name.to_string(), describe_field(field, defs));
    }

    let required: Vec<&str> = schema.required_fields().map(|f| f.name).collect();

    json!({
        "title": schema.title,
        "description": schema.description,
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

fn describe_field(field: &FieldSpec, defs: &mut Map<String, Value>) -> Value {
    let mut shape = match field.kind {
        FieldKind::Text => json!({ "type": "string" }),
        FieldKind::Integer => json!({ "type": "integer" }),
        FieldKind::Decimal => json!({ "type": "number" }),
        FieldKind::Boolean => json!({ "type": "boolean" }),
        FieldKind::Date => json!({ "type": "string", "format": "date" }),
        FieldKind::List(nested) => {
            if !defs.contains_key(nested.title) {
                let nested_description = describe_object(nested, defs);
                defs.insert(nested.title.to_string(), nested_description);
            }
            json!({
                "type": "array",
                "items": { "$ref": format!("#/$defs/{}", nested.title) },
            })
        }
    };

    if let Some(minimum) = field.minimum {
        shape["minimum"] = json!(minimum);
    }
    if let Some(maximum) = field.maximum {
        shape["maximum"] = json!(maximum);
    }

    let mut property = match field.presence {
        Presence::Optional => json!({
            "anyOf": [shape, { "type": "null" }],
            "default": null,
        }),
        Presence::Default(default) => {
            shape["default"] = default.to_value();
            shape
        }
        Presence::Required => shape,
    };

    property["title"] = Value::String(field_title(field.name));
    property["description"] = Value::String(field.description.to_string());
    property
}

/// `height_cm` -> `Height Cm`
fn field_title(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
