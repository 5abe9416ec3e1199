// Record kinds, their constraint tables and validation

pub mod describe;
pub mod product;
pub mod profile;
pub mod schema;
pub mod user;
pub mod validation;
pub mod workout;

pub use describe::*;
pub use product::*;
pub use profile::*;
pub use schema::*;
pub use user::*;
pub use validation::*;
pub use workout::*;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// A schema-constrained record kind.
pub trait Record: Serialize + DeserializeOwned {
    fn schema() -> &'static RecordSchema;

    /// Validate a raw document against the record's constraint table and
    /// build the typed record from the normalized result.
    fn validate(input: &Document) -> Result<Self, ValidationError> {
        let normalized = validate_document(Self::schema(), input)?;
        serde_json::from_value(Value::Object(normalized))
            .map_err(|e| ValidationError::Malformed(e.to_string()))
    }
}

/// Every record kind, in declaration order
pub fn record_schemas() -> [&'static RecordSchema; 5] {
    [
        &USER_SCHEMA,
        &PRODUCT_SCHEMA,
        &EXERCISE_SCHEMA,
        &WORKOUT_SCHEMA,
        &PROFILE_SCHEMA,
    ]
}

/// Look up a record kind by its collection name
pub fn find_schema(collection: &str) -> Option<&'static RecordSchema> {
    record_schemas()
        .into_iter()
        .find(|schema| schema.collection == collection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_schema() {
        assert_eq!(find_schema("workout").map(|s| s.title), Some("Workout"));
        assert_eq!(find_schema("profile").map(|s| s.title), Some("Profile"));
        assert!(find_schema("Workout").is_none());
        assert!(find_schema("goal").is_none());
    }
}
