use serde_json::Value;

/// Value type a field accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Integer,
    Decimal,
    Boolean,
    /// ISO calendar date, `YYYY-MM-DD`
    Date,
    /// Ordered sequence of nested records
    List(&'static RecordSchema),
}

impl FieldKind {
    /// Human readable name used in type mismatch errors
    pub fn expected(&self) -> &'static str {
        match self {
            FieldKind::Text => "string",
            FieldKind::Integer => "integer",
            FieldKind::Decimal => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Date => "date (YYYY-MM-DD)",
            FieldKind::List(_) => "array",
        }
    }
}

/// Value applied when a field is absent or null.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    Bool(bool),
    Decimal(f64),
    EmptyList,
}

impl DefaultValue {
    pub fn to_value(self) -> Value {
        match self {
            DefaultValue::Bool(b) => Value::Bool(b),
            DefaultValue::Decimal(d) => Value::from(d),
            DefaultValue::EmptyList => Value::Array(Vec::new()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Presence {
    /// Must be present and non-null
    Required,
    /// May be absent; normalized to null
    Optional,
    Default(DefaultValue),
}

/// One entry of a record's constraint table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub presence: Presence,
    /// Inclusive lower bound for numeric fields
    pub minimum: Option<f64>,
    /// Inclusive upper bound for numeric fields
    pub maximum: Option<f64>,
    pub description: &'static str,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            presence: Presence::Required,
            minimum: None,
            maximum: None,
            description,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind, description: &'static str) -> Self {
        Self {
            presence: Presence::Optional,
            ..Self::required(name, kind, description)
        }
    }

    pub const fn with_default(
        name: &'static str,
        kind: FieldKind,
        default: DefaultValue,
        description: &'static str,
    ) -> Self {
        Self {
            presence: Presence::Default(default),
            ..Self::required(name, kind, description)
        }
    }

    pub const fn min(self, minimum: f64) -> Self {
        Self {
            minimum: Some(minimum),
            ..self
        }
    }

    pub const fn max(self, maximum: f64) -> Self {
        Self {
            maximum: Some(maximum),
            ..self
        }
    }

    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }
}

/// Declarative description of a record kind. Validation and the
/// published schema description are both driven from `fields`.
#[derive(Debug, PartialEq)]
pub struct RecordSchema {
    pub title: &'static str,
    /// Storage collection, the lowercase record kind name
    pub collection: &'static str,
    pub description: &'static str,
    pub fields: &'static [FieldSpec],
}

impl RecordSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.is_required())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EXERCISE_SCHEMA, USER_SCHEMA, WORKOUT_SCHEMA};

    #[test]
    fn test_builder_sets_bounds() {
        let field = FieldSpec::required("sets", FieldKind::Integer, "Number of sets")
            .min(1.0)
            .max(20.0);
        assert_eq!(field.minimum, Some(1.0));
        assert_eq!(field.maximum, Some(20.0));
        assert!(field.is_required());
    }

    #[test]
    fn test_required_fields() {
        let required: Vec<&str> = USER_SCHEMA.required_fields().map(|f| f.name).collect();
        assert_eq!(required, vec!["name", "email", "address"]);
    }

    #[test]
    fn test_nested_list_points_at_exercise() {
        let exercises = WORKOUT_SCHEMA.field("exercises").unwrap();
        assert_eq!(exercises.kind, FieldKind::List(&EXERCISE_SCHEMA));
        assert_eq!(exercises.presence, Presence::Default(DefaultValue::EmptyList));
    }
}
