use serde::{Deserialize, Serialize};

use super::schema::{DefaultValue, FieldKind, FieldSpec, RecordSchema};
use super::Record;

pub static USER_SCHEMA: RecordSchema = RecordSchema {
    title: "User",
    collection: "user",
    description: "Users collection schema",
    fields: &[
        FieldSpec::required("name", FieldKind::Text, "Full name"),
        FieldSpec::required("email", FieldKind::Text, "Email address"),
        FieldSpec::required("address", FieldKind::Text, "Address"),
        FieldSpec::optional("age", FieldKind::Integer, "Age in years")
            .min(0.0)
            .max(120.0),
        FieldSpec::with_default(
            "is_active",
            FieldKind::Boolean,
            DefaultValue::Bool(true),
            "Whether user is active",
        ),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub address: String,
    pub age: Option<i32>,
    pub is_active: bool,
}

impl Record for User {
    fn schema() -> &'static RecordSchema {
        &USER_SCHEMA
    }
}
