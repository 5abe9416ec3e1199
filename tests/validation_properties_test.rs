use proptest::prelude::*;
use serde_json::{json, Map, Value};

use fitness_api::models::{Exercise, Record, User, ValidationError, Workout};

fn object(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

fn exercise(sets: i64, reps: i64, weight: f64) -> Map<String, Value> {
    object(json!({"name": "Deadlift", "sets": sets, "reps": reps, "weight": weight}))
}

fn user(age: i64) -> Map<String, Value> {
    object(json!({"name": "Sam", "email": "sam@example.com", "address": "1 Main St", "age": age}))
}

proptest! {
    #[test]
    fn exercise_within_bounds_is_accepted(sets in 1i64..=20, reps in 1i64..=100, weight in 0.0f64..1000.0) {
        let validated = Exercise::validate(&exercise(sets, reps, weight)).unwrap();
        prop_assert_eq!(i64::from(validated.sets), sets);
        prop_assert_eq!(i64::from(validated.reps), reps);
    }

    #[test]
    fn exercise_sets_out_of_bounds_rejected(sets in prop_oneof![-10_000i64..1, 21i64..10_000]) {
        let result = Exercise::validate(&exercise(sets, 10, 0.0));
        let rejected = matches!(result, Err(ValidationError::OutOfRange { ref field, .. }) if field == "sets");
        prop_assert!(rejected, "{:?}", result);
    }

    #[test]
    fn exercise_reps_out_of_bounds_rejected(reps in prop_oneof![-10_000i64..1, 101i64..10_000]) {
        let result = Exercise::validate(&exercise(3, reps, 0.0));
        let rejected = matches!(result, Err(ValidationError::OutOfRange { ref field, .. }) if field == "reps");
        prop_assert!(rejected, "{:?}", result);
    }

    #[test]
    fn negative_weight_rejected(weight in -1000.0f64..-0.001) {
        prop_assert!(Exercise::validate(&exercise(3, 10, weight)).is_err());
    }

    #[test]
    fn user_age_bounds(age in -500i64..500) {
        let result = User::validate(&user(age));
        prop_assert_eq!(result.is_ok(), (0..=120).contains(&age));
    }

    #[test]
    fn workout_keeps_exercise_order(count in 0usize..8) {
        let exercises: Vec<Value> = (0..count)
            .map(|i| json!({"name": format!("Exercise {}", i), "sets": 3, "reps": 8}))
            .collect();
        let workout = Workout::validate(&object(json!({
            "user_id": "u1",
            "workout_date": "2024-01-01",
            "title": "Circuit",
            "exercises": exercises
        }))).unwrap();

        prop_assert_eq!(workout.exercises.len(), count);
        for (i, exercise) in workout.exercises.iter().enumerate() {
            prop_assert_eq!(&exercise.name, &format!("Exercise {}", i));
        }
    }
}

#[test]
fn boundary_values_accepted() {
    assert!(Exercise::validate(&exercise(1, 1, 0.0)).is_ok());
    assert!(Exercise::validate(&exercise(20, 100, 0.0)).is_ok());
    assert!(User::validate(&user(0)).is_ok());
    assert!(User::validate(&user(120)).is_ok());
}
