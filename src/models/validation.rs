use chrono::NaiveDate;
use serde_json::{Map, Value};
use thiserror::Error;

use super::schema::{FieldKind, FieldSpec, Presence, RecordSchema};

/// Raw or normalized document, keyed by field name
pub type Document = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field}: field required")]
    Missing { field: String },
    #[error("{field}: expected {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },
    #[error("{field}: value must be {constraint}")]
    OutOfRange { field: String, constraint: String },
    #[error("{0}")]
    Malformed(String),
}

impl ValidationError {
    /// Path of the offending field, e.g. `exercises[0].sets`
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::Missing { field }
            | ValidationError::TypeMismatch { field, .. }
            | ValidationError::OutOfRange { field, .. } => Some(field),
            ValidationError::Malformed(_) => None,
        }
    }
}

/// Check `input` against the constraint table of `schema`.
///
/// Returns a normalized document holding exactly the declared fields:
/// defaults applied, optional fields nulled, unknown keys dropped and
/// nested records normalized recursively.
pub fn validate_document(schema: &RecordSchema, input: &Document) -> Result<Document, ValidationError> {
    validate_at(schema, input, None)
}

fn validate_at(
    schema: &RecordSchema,
    input: &Document,
    prefix: Option<&str>,
) -> Result<Document, ValidationError> {
    let mut normalized = Map::with_capacity(schema.fields.len());

    for field in schema.fields {
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, field.name),
            None => field.name.to_string(),
        };

        let value = match input.get(field.name) {
            None | Some(Value::Null) => match field.presence {
                Presence::Required => return Err(ValidationError::Missing { field: path }),
                Presence::Optional => Value::Null,
                Presence::Default(default) => default.to_value(),
            },
            Some(raw) => check_value(field, raw, &path)?,
        };

        normalized.insert(field.name.to_string(), value);
    }

    Ok(normalized)
}

fn check_value(field: &FieldSpec, raw: &Value, path: &str) -> Result<Value, ValidationError> {
    let mismatch = || ValidationError::TypeMismatch {
        field: path.to_string(),
        expected: field.kind.expected(),
    };

    let value = match field.kind {
        FieldKind::Text => raw.as_str().map(|s| Value::String(s.to_string())),
        FieldKind::Boolean => raw.as_bool().map(Value::Bool),
        FieldKind::Integer => as_integer(raw).map(Value::from),
        FieldKind::Decimal => raw.as_f64().map(Value::from),
        FieldKind::Date => raw
            .as_str()
            .and_then(parse_iso_date)
            .map(|date| Value::String(date.format("%Y-%m-%d").to_string())),
        FieldKind::List(nested) => {
            let items = raw.as_array().ok_or_else(mismatch)?;
            let mut normalized = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                let item_path = format!("{}[{}]", path, index);
                let object = item.as_object().ok_or_else(|| ValidationError::TypeMismatch {
                    field: item_path.clone(),
                    expected: "object",
                })?;
                normalized.push(Value::Object(validate_at(nested, object, Some(&item_path))?));
            }
            Some(Value::Array(normalized))
        }
    }
    .ok_or_else(mismatch)?;

    check_bounds(field, &value, path)?;
    Ok(value)
}

/// Strict `YYYY-MM-DD`: zero-padded, no sign, no surrounding whitespace
fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Integers arrive either as JSON integers or as floats without a fractional part
fn as_integer(raw: &Value) -> Option<i64> {
    raw.as_i64().or_else(|| {
        raw.as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
            .map(|f| f as i64)
    })
}

fn check_bounds(field: &FieldSpec, value: &Value, path: &str) -> Result<(), ValidationError> {
    let Some(number) = value.as_f64() else {
        return Ok(());
    };

    if let Some(minimum) = field.minimum {
        if number < minimum {
            return Err(ValidationError::OutOfRange {
                field: path.to_string(),
                constraint: format!(">= {}", minimum),
            });
        }
    }

    if let Some(maximum) = field.maximum {
        if number > maximum {
            return Err(ValidationError::OutOfRange {
                field: path.to_string(),
                constraint: format!("<= {}", maximum),
            });
        }
    }

    Ok(())
}
