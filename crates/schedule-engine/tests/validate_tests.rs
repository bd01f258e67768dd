//! Tests for the candidate-slot validation gate.

use schedule_engine::{validate_new_slot, validate_new_slot_with, Day, SlotRules, TimeSlot};

fn slot(day: Day, start: &str, end: &str) -> TimeSlot {
    TimeSlot::new(day, start, end, "").unwrap()
}

fn error_of(candidate: &TimeSlot, existing: &[TimeSlot]) -> String {
    let result = validate_new_slot(candidate, existing);
    assert!(!result.valid, "expected {candidate:?} to be rejected");
    result.error.unwrap()
}

#[test]
fn valid_slot_passes() {
    let existing = vec![slot(Day::Lunes, "08:00", "10:00")];
    let result = validate_new_slot(&slot(Day::Lunes, "10:00", "11:30"), &existing);

    assert!(result.valid);
    assert_eq!(result.error, None);
}

#[test]
fn start_after_end_reports_order_error_first() {
    // Negative duration would also fail the minimum, but order comes first.
    assert_eq!(
        error_of(&slot(Day::Lunes, "10:00", "09:00"), &[]),
        "La hora de inicio debe ser menor que la hora de fin"
    );
}

#[test]
fn equal_start_and_end_is_an_order_error() {
    assert_eq!(
        error_of(&slot(Day::Lunes, "10:00", "10:00"), &[]),
        "La hora de inicio debe ser menor que la hora de fin"
    );
}

#[test]
fn fifteen_minutes_is_too_short() {
    assert_eq!(
        error_of(&slot(Day::Lunes, "08:00", "08:15"), &[]),
        "La duración mínima de una clase debe ser 30 minutos"
    );
}

#[test]
fn five_hours_is_too_long() {
    assert_eq!(
        error_of(&slot(Day::Lunes, "08:00", "13:00"), &[]),
        "La duración máxima de una clase es 4 horas"
    );
}

#[test]
fn duration_bounds_are_inclusive() {
    assert!(validate_new_slot(&slot(Day::Lunes, "08:00", "08:30"), &[]).valid);
    assert!(validate_new_slot(&slot(Day::Lunes, "08:00", "12:00"), &[]).valid);
    assert!(!validate_new_slot(&slot(Day::Lunes, "08:00", "12:01"), &[]).valid);
}

#[test]
fn duration_is_checked_before_overlap() {
    let existing = vec![slot(Day::Lunes, "08:00", "09:00")];
    assert_eq!(
        error_of(&slot(Day::Lunes, "08:00", "08:10"), &existing),
        "La duración mínima de una clase debe ser 30 minutos"
    );
}

#[test]
fn first_overlapping_existing_slot_is_reported() {
    let existing = vec![
        slot(Day::Martes, "07:00", "08:00"),
        slot(Day::Lunes, "09:00", "10:00"),
        slot(Day::Martes, "09:30", "10:30"),
        slot(Day::Martes, "09:00", "09:45"),
    ];

    assert_eq!(
        error_of(&slot(Day::Martes, "09:00", "10:00"), &existing),
        "Este horario se solapa con 09:30-10:30 en Martes"
    );
}

#[test]
fn touching_existing_slot_is_accepted() {
    let existing = vec![slot(Day::Jueves, "08:00", "10:00")];
    assert!(validate_new_slot(&slot(Day::Jueves, "10:00", "11:00"), &existing).valid);
}

#[test]
fn other_days_are_ignored() {
    let existing = vec![slot(Day::Sabado, "08:00", "10:00")];
    assert!(validate_new_slot(&slot(Day::Domingo, "08:00", "10:00"), &existing).valid);
}

#[test]
fn custom_rules_render_their_bounds() {
    let rules = SlotRules {
        min_minutes: 45,
        max_minutes: 90,
    };

    let short = validate_new_slot_with(&rules, &slot(Day::Lunes, "08:00", "08:30"), &[]);
    assert_eq!(
        short.error.as_deref(),
        Some("La duración mínima de una clase debe ser 45 minutos")
    );

    let long = validate_new_slot_with(&rules, &slot(Day::Lunes, "08:00", "10:00"), &[]);
    assert_eq!(
        long.error.as_deref(),
        Some("La duración máxima de una clase es 90 minutos")
    );

    let hour = SlotRules {
        min_minutes: 30,
        max_minutes: 60,
    };
    let long = validate_new_slot_with(&hour, &slot(Day::Lunes, "08:00", "10:00"), &[]);
    assert_eq!(
        long.error.as_deref(),
        Some("La duración máxima de una clase es 1 hora")
    );
}

#[test]
fn validation_serializes_like_the_dashboard_expects() {
    let ok = serde_json::to_string(&validate_new_slot(&slot(Day::Lunes, "08:00", "09:00"), &[]))
        .unwrap();
    assert_eq!(ok, r#"{"valid":true}"#);

    let bad = serde_json::to_value(validate_new_slot(&slot(Day::Lunes, "09:00", "08:00"), &[]))
        .unwrap();
    assert_eq!(bad["valid"], false);
    assert_eq!(
        bad["error"],
        "La hora de inicio debe ser menor que la hora de fin"
    );
}
