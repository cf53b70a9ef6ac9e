//! Unit tests for inspection, the silent accessors and the transform laws.

use super::*;
use parking_lot::Mutex;
use rstest::{fixture, rstest};
use std::cell::{Cell, RefCell};
use std::sync::Arc;

fn divide(a: f64, b: f64) -> Outcome<f64, String> {
    if b == 0.0 {
        return Outcome::Err(String::from("Division by zero"));
    }
    Outcome::Ok(a / b)
}

struct Recording {
    reporter: Reporter,
    lines: Arc<Mutex<Vec<String>>>,
}

#[fixture]
fn recording() -> Recording {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&lines);
    let reporter = Reporter::builder()
        .with_log_hook(move |message| sink.lock().push(message.to_owned()))
        .build();
    Recording { reporter, lines }
}

#[rstest]
#[case::zero(0)]
#[case::negative(-12)]
#[case::large(i64::MAX)]
fn ok_values_survive_silent_accessors(#[case] value: i64) {
    let outcome: Outcome<i64, String> = Outcome::Ok(value);
    assert!(outcome.is_ok());
    assert!(!outcome.is_err());
    assert_eq!(outcome.unwrap_or(1), value);
}

#[rstest]
fn inspection_is_repeatable(recording: Recording) {
    let outcome: Outcome<u8, &str> = Outcome::Err("nope");
    for _ in 0..3 {
        assert!(outcome.is_err());
        assert!(!outcome.is_ok());
    }
    assert_eq!(outcome.report_to(&recording.reporter).unwrap_err(""), "nope");
    assert!(recording.lines.lock().is_empty());
}

#[rstest]
fn unwrap_or_returns_default_for_err() {
    assert_eq!(divide(10.0, 0.0).unwrap_or(-1.0), -1.0);
}

#[rstest]
fn unwrap_or_else_is_lazy() {
    let calls = Cell::new(0);
    let fallback = || {
        calls.set(calls.get() + 1);
        7
    };
    assert_eq!(Outcome::<i32, &str>::Ok(3).unwrap_or_else(fallback), 3);
    assert_eq!(calls.get(), 0);
    assert_eq!(Outcome::<i32, &str>::Err("x").unwrap_or_else(fallback), 7);
    assert_eq!(calls.get(), 1);
}

#[rstest]
fn unwrap_or_default_substitutes_default() {
    let value: Vec<u8> = Outcome::<Vec<u8>, &str>::Err("x").unwrap_or_default();
    assert!(value.is_empty());
}

#[rstest]
fn map_transforms_ok() {
    assert_eq!(divide(20.0, 4.0).map(|v| v * 2.0), Outcome::Ok(10.0));
}

#[rstest]
fn map_skips_err() {
    let called = Cell::new(false);
    let mapped = divide(1.0, 0.0).map(|v| {
        called.set(true);
        v
    });
    assert_eq!(mapped, Outcome::Err(String::from("Division by zero")));
    assert!(!called.get());
}

#[rstest]
fn map_err_transforms_err() {
    let mapped = divide(1.0, 0.0).map_err(|e| e.len());
    assert_eq!(mapped, Outcome::Err(16));
}

#[rstest]
fn map_err_skips_ok() {
    let called = Cell::new(false);
    let mapped = divide(9.0, 3.0).map_err(|e| {
        called.set(true);
        e.len()
    });
    assert_eq!(mapped, Outcome::Ok(3.0));
    assert!(!called.get());
}

fn halve_even(value: i32) -> Outcome<i32, String> {
    if value.rem_euclid(2) == 0 {
        Outcome::Ok(value >> 1)
    } else {
        Outcome::Err(format!("{value} is odd"))
    }
}

#[rstest]
#[case::even(8, Outcome::Ok(4))]
#[case::odd(7, Outcome::Err(String::from("7 is odd")))]
fn and_then_returns_step_result(#[case] input: i32, #[case] expected: Outcome<i32, String>) {
    assert_eq!(Outcome::Ok(input).and_then(halve_even), expected);
}

#[rstest]
fn and_then_short_circuits() {
    let called = Cell::new(false);
    let chained = Outcome::<i32, String>::Err(String::from("early")).and_then(|v| {
        called.set(true);
        halve_even(v)
    });
    assert_eq!(chained, Outcome::Err(String::from("early")));
    assert!(!called.get());
}

#[rstest]
fn or_else_recovers_err() {
    let recovered: Outcome<f64, ()> = divide(1.0, 0.0).or_else(|_| Outcome::Ok(0.0));
    assert_eq!(recovered, Outcome::Ok(0.0));
}

#[rstest]
fn or_else_skips_ok() {
    let called = Cell::new(false);
    let kept: Outcome<f64, ()> = divide(8.0, 2.0).or_else(|_| {
        called.set(true);
        Outcome::Ok(0.0)
    });
    assert_eq!(kept, Outcome::Ok(4.0));
    assert!(!called.get());
}

#[rstest]
fn chain_short_circuits_to_recovery() {
    let later_map = Cell::new(false);
    let recovered_from = RefCell::new(String::new());
    let result = Outcome::<i32, String>::Ok(5)
        .map(|v| v + 2)
        .and_then(halve_even)
        .map(|v| {
            later_map.set(true);
            v
        })
        .or_else(|error| {
            *recovered_from.borrow_mut() = error;
            Outcome::<i32, String>::Ok(-1)
        });

    assert_eq!(result, Outcome::Ok(-1));
    assert!(!later_map.get());
    assert_eq!(recovered_from.borrow().as_str(), "7 is odd");
}

#[rstest]
fn match_ref_runs_one_branch_and_keeps_payload() {
    let outcome = divide(3.0, 0.0);
    let seen = Cell::new(0);
    outcome.match_ref(|_| seen.set(1), |e| {
        assert_eq!(e, "Division by zero");
        seen.set(2);
    });
    assert_eq!(seen.get(), 2);
    assert_eq!(outcome.unwrap_or(9.0), 9.0);
}

#[rstest]
fn match_consume_moves_payload() {
    let owned = Outcome::<String, u8>::Ok(String::from("payload"))
        .match_consume(|text| text, |code| code.to_string());
    assert_eq!(owned, "payload");
}

#[rstest]
fn inspect_observes_without_consuming() {
    let seen = Cell::new(0.0);
    let kept = divide(9.0, 3.0)
        .inspect(|v| seen.set(*v))
        .inspect_err(|_| seen.set(-1.0));
    assert_eq!(seen.get(), 3.0);
    assert_eq!(kept, Outcome::Ok(3.0));
}

#[rstest]
fn transforms_never_report(recording: Recording) {
    let outcome = divide(1.0, 0.0)
        .map(|v| v + 1.0)
        .map_err(|e| e.to_uppercase())
        .and_then(Outcome::Ok)
        .or_else(Outcome::Err)
        .report_to(&recording.reporter)
        .into_inner();
    assert_eq!(outcome, Outcome::Err(String::from("DIVISION BY ZERO")));
    assert!(recording.lines.lock().is_empty());
}
