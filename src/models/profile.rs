use serde::{Deserialize, Serialize};

use super::schema::{FieldKind, FieldSpec, RecordSchema};
use super::Record;

/// User profile for the fitness app
pub static PROFILE_SCHEMA: RecordSchema = RecordSchema {
    title: "Profile",
    collection: "profile",
    description: "User profile for fitness app",
    fields: &[
        FieldSpec::required("user_id", FieldKind::Text, "Identifier for the user"),
        FieldSpec::required("name", FieldKind::Text, "Display name"),
        FieldSpec::optional("goal", FieldKind::Text, "Primary fitness goal"),
        FieldSpec::optional("height_cm", FieldKind::Decimal, "Height in centimeters").min(0.0),
        FieldSpec::optional("weight_kg", FieldKind::Decimal, "Current weight in kilograms").min(0.0),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: String,
    pub name: String,
    pub goal: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
}

impl Record for Profile {
    fn schema() -> &'static RecordSchema {
        &PROFILE_SCHEMA
    }
}
