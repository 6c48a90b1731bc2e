// ABOUTME: Integration tests for summary report building and message formatting
// ABOUTME: Verifies reference messages, overridden swimming speed, and idempotence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use workout_tracker::dispatch::read_package;
use workout_tracker::models::SummaryReport;
use workout_tracker::report::{build_report, format_message};

fn message_for(code: &str, data: &[f64]) -> String {
    let record = read_package(code, data).unwrap();
    format_message(&build_report(&record).unwrap())
}

#[test]
fn test_running_message() {
    let message = message_for("RUN", &[15000.0, 1.0, 75.0]);

    assert!(message.contains("Тип тренировки: Running"));
    assert!(message.contains("Длительность: 1.000 ч."));
    assert!(message.contains("Дистанция: 9.750 км"));
    assert!(message.contains("Ср. скорость: 9.750 км/ч"));
    assert!(message.contains("Потрачено ккал: 797.805."));
}

#[test]
fn test_sample_batch_messages() {
    assert_eq!(
        message_for("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
         Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
    );
    assert_eq!(
        message_for("RUN", &[15000.0, 1.0, 75.0]),
        "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
         Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805."
    );
    assert_eq!(
        message_for("WLK", &[9000.0, 1.0, 75.0, 180.0]),
        "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
         Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500."
    );
}

#[test]
fn test_swimming_report_uses_pool_speed() {
    let record = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
    let report = build_report(&record).unwrap();

    assert!((report.distance - 0.9936).abs() < 1e-12);
    // distance / duration would be 0.9936
    assert!((report.speed - 1.0).abs() < 1e-12);
}

#[test]
fn test_fractional_duration_rounding() {
    let message = message_for("RUN", &[12000.0, 0.75, 82.0]);

    assert!(message.contains("Длительность: 0.750 ч."));
    assert!(message.contains("Дистанция: 7.800 км"));
    assert!(message.contains("Ср. скорость: 10.400 км/ч"));
    assert!(message.contains("Потрачено ккал: 697.373."));
}

#[test]
fn test_build_report_is_idempotent() {
    let record = read_package("WLK", &[30000.0, 1.0, 70.0, 170.0]).unwrap();

    let first = build_report(&record).unwrap();
    let second = build_report(&record).unwrap();

    assert_eq!(first, second);
    assert_eq!(format_message(&first), format_message(&second));
}

#[test]
fn test_report_fields() {
    let record = read_package("SWM", &[2000.0, 2.0, 70.0, 50.0, 60.0]).unwrap();
    let report = build_report(&record).unwrap();

    assert_eq!(report.training_type, "Swimming");
    assert!((report.duration - 2.0).abs() < f64::EPSILON);
    assert!((report.distance - 2.76).abs() < 1e-12);
    assert!((report.speed - 1.5).abs() < 1e-12);
    assert!((report.calories - 364.0).abs() < 1e-9);
}

#[test]
fn test_integer_values_render_three_decimals() {
    let report = SummaryReport::new("Running", 2.0, 10.0, 5.0, 100.0);
    assert_eq!(
        format_message(&report),
        "Тип тренировки: Running; Длительность: 2.000 ч.; Дистанция: 10.000 км; \
         Ср. скорость: 5.000 км/ч; Потрачено ккал: 100.000."
    );
}

#[test]
fn test_display_matches_format_message() {
    let record = read_package("RUN", &[5000.0, 0.5, 60.0]).unwrap();
    let report = build_report(&record).unwrap();

    assert_eq!(report.to_string(), format_message(&report));
    assert!(report.to_string().ends_with("Потрачено ккал: 213.822."));
}

#[test]
fn test_zero_duration_renders_non_finite_values() {
    let message = message_for("RUN", &[15000.0, 0.0, 75.0]);

    assert_eq!(
        message,
        "Тип тренировки: Running; Длительность: 0.000 ч.; Дистанция: 9.750 км; \
         Ср. скорость: inf км/ч; Потрачено ккал: NaN."
    );
}

#[test]
fn test_zero_height_walking_calories_are_nan() {
    let record = read_package("WLK", &[9000.0, 1.0, 75.0, 0.0]).unwrap();
    let report = build_report(&record).unwrap();

    assert!((report.speed - 5.85).abs() < 1e-12);
    assert!(report.calories.is_nan());
    assert!(format_message(&report).ends_with("Потрачено ккал: NaN."));
}

#[test]
fn test_negative_action_gives_negative_distance() {
    let message = message_for("RUN", &[-100.0, 1.0, 75.0]);

    assert!(message.contains("Дистанция: -0.065 км"));
    assert!(message.contains("Ср. скорость: -0.065 км/ч"));
}
