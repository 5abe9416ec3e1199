use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::schema::{DefaultValue, FieldKind, FieldSpec, RecordSchema};
use super::Record;

pub static EXERCISE_SCHEMA: RecordSchema = RecordSchema {
    title: "Exercise",
    collection: "exercise",
    description: "A single exercise performed as part of a workout",
    fields: &[
        FieldSpec::required("name", FieldKind::Text, "Exercise name, e.g., Bench Press"),
        FieldSpec::required("sets", FieldKind::Integer, "Number of sets")
            .min(1.0)
            .max(20.0),
        FieldSpec::required("reps", FieldKind::Integer, "Repetitions per set")
            .min(1.0)
            .max(100.0),
        FieldSpec::with_default(
            "weight",
            FieldKind::Decimal,
            DefaultValue::Decimal(0.0),
            "Weight per rep in kg or lbs",
        )
        .min(0.0),
    ],
};

pub static WORKOUT_SCHEMA: RecordSchema = RecordSchema {
    title: "Workout",
    collection: "workout",
    description: "Fitness workouts schema",
    fields: &[
        FieldSpec::required("user_id", FieldKind::Text, "Identifier for the user"),
        FieldSpec::required("workout_date", FieldKind::Date, "Date of the workout"),
        FieldSpec::required("title", FieldKind::Text, "Workout title, e.g., Push Day"),
        FieldSpec::optional("notes", FieldKind::Text, "Optional notes"),
        FieldSpec::with_default(
            "exercises",
            FieldKind::List(&EXERCISE_SCHEMA),
            DefaultValue::EmptyList,
            "List of exercises performed",
        ),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub sets: i32,
    pub reps: i32,
    pub weight: f64,
}

impl Record for Exercise {
    fn schema() -> &'static RecordSchema {
        &EXERCISE_SCHEMA
    }
}

/// Workout with its exercises; exercises have no lifecycle of their own
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub user_id: String,
    pub workout_date: NaiveDate,
    pub title: String,
    pub notes: Option<String>,
    pub exercises: Vec<Exercise>,
}

impl Record for Workout {
    fn schema() -> &'static RecordSchema {
        &WORKOUT_SCHEMA
    }
}
