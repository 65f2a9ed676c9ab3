//! Test suite for the calculator state
//!
//! Tests cover:
//! - Basic arithmetic and history recording
//! - Memory register round trips and memory history
//! - Scientific functions, angle modes and precision
//! - Chain operations
//! - Error conditions leaving state untouched

use calcshell::{
    AngleMode, CalcError, CalculatorState, FixedClock, MemoryOperation, Settings,
};
use chrono::{TimeZone, Utc};
use std::sync::Arc;

fn fixed_state() -> CalculatorState {
    let instant = Utc.with_ymd_and_hms(2024, 5, 17, 8, 0, 0).unwrap();
    CalculatorState::with_clock(Arc::new(FixedClock::new(instant)))
}

#[test]
fn test_basic_arithmetic() {
    let mut calc = CalculatorState::new();
    assert_eq!(calc.add(5.0, 3.0), 8.0);
    assert_eq!(calc.add(-5.0, -3.0), -8.0);
    assert_eq!(calc.subtract(10.0, 4.0), 6.0);
    assert_eq!(calc.multiply(7.0, 6.0), 42.0);
    assert_eq!(calc.divide(20.0, 5.0).unwrap(), 4.0);
    assert_eq!(calc.modulus(10.0, 3.0), 1.0);
    assert_eq!(calc.history().len(), 6);
}

#[test]
fn test_divide_by_zero_for_every_dividend() {
    let mut calc = CalculatorState::new();
    calc.add(2.0, 2.0);
    for a in [0.0, 1.0, -7.5, f64::MAX].iter() {
        assert_eq!(calc.divide(*a, 0.0), Err(CalcError::DivisionByZero));
    }
    assert_eq!(calc.last_result(), 4.0);
    assert_eq!(calc.history().len(), 1);
}

#[test]
fn test_factorial_matches_product() {
    let mut calc = CalculatorState::new();
    for n in 0..=20u32 {
        let expected: f64 = (1..=n).map(|i| i as f64).product();
        assert_eq!(calc.factorial(n as f64).unwrap(), expected);
    }
    assert_eq!(calc.factorial(0.0).unwrap(), 1.0);
    assert_eq!(
        calc.factorial(-1.0),
        Err(CalcError::NegativeFactorial(-1.0))
    );
    assert_eq!(
        calc.factorial(2.5),
        Err(CalcError::NonIntegerFactorial(2.5))
    );
}

#[test]
fn test_memory_store_recall_round_trip() {
    let mut calc = CalculatorState::new();
    for v in [42.0, -3.25, 0.0, 1e300, f64::MIN_POSITIVE].iter() {
        calc.memory_store(*v);
        assert_eq!(calc.memory_recall(), *v);
    }
}

#[test]
fn test_memory_add_records_old_and_new() {
    let mut calc = CalculatorState::new();
    calc.memory_store(10.0);
    assert_eq!(calc.memory_add(5.0), 15.0);
    assert_eq!(calc.memory(), 15.0);

    let record = calc.memory_history().pop().unwrap();
    assert_eq!(record.operation, MemoryOperation::Add);
    assert_eq!(record.value, 5.0);
    assert_eq!(record.old_value, Some(10.0));
    assert_eq!(record.new_value, 15.0);
}

#[test]
fn test_memory_does_not_touch_history() {
    let mut calc = CalculatorState::new();
    calc.add(1.0, 1.0);
    calc.memory_store(9.0);
    calc.memory_subtract(4.0);
    calc.memory_recall();
    assert_eq!(calc.history().len(), 1);
    assert_eq!(calc.last_result(), 2.0);
    assert_eq!(calc.memory_history().len(), 3);
}

#[test]
fn test_memory_clear_returns_prior_value() {
    let mut calc = CalculatorState::new();
    calc.memory_store(100.0);
    calc.memory_add(25.0);
    assert_eq!(calc.memory_clear(), 125.0);
    assert_eq!(calc.memory(), 0.0);
}

#[test]
fn test_sine_in_both_angle_modes() {
    let mut calc = CalculatorState::new();
    calc.set_angle_mode("degrees").unwrap();
    assert!((calc.sin(30.0) - 0.5).abs() < 1e-10);

    calc.set_angle_mode("radians").unwrap();
    assert!((calc.sin(std::f64::consts::PI / 6.0) - 0.5).abs() < 1e-10);
}

#[test]
fn test_angle_mode_read_at_call_time() {
    let mut calc = CalculatorState::new();
    assert_eq!(calc.cos(180.0), -1.0);
    calc.set_angle_mode("radians").unwrap();
    assert_eq!(calc.cos(0.0), 1.0);
    calc.set_angle_mode("degrees").unwrap();
    assert_eq!(calc.asin(1.0).unwrap(), 90.0);
    assert_eq!(calc.settings().angle_mode, AngleMode::Degrees);
}

#[test]
fn test_precision_does_not_rewrite_history() {
    let mut calc = CalculatorState::new();
    calc.set_angle_mode("radians").unwrap();
    calc.sin(1.0);
    calc.set_precision(2).unwrap();
    calc.sin(1.0);

    let history = calc.history();
    assert_eq!(history[0].result, 0.8414709848);
    assert_eq!(history[1].result, 0.84);
}

#[test]
fn test_logarithms() {
    let mut calc = CalculatorState::new();
    assert_eq!(calc.log10(100.0).unwrap(), 2.0);
    assert_eq!(calc.ln(std::f64::consts::E).unwrap(), 1.0);
    assert_eq!(calc.log_base(2.0, 8.0).unwrap(), 3.0);
    assert_eq!(calc.history()[2].operands, (2.0, Some(8.0)));
    assert!(matches!(
        calc.log10(-5.0),
        Err(CalcError::NonPositiveLogarithm(_))
    ));
    assert!(matches!(
        calc.log_base(1.0, 8.0),
        Err(CalcError::InvalidLogBase(_))
    ));
}

#[test]
fn test_roots_and_power() {
    let mut calc = CalculatorState::new();
    assert_eq!(calc.power(2.0, 3.0), 8.0);
    assert_eq!(calc.square_root(16.0).unwrap(), 4.0);
    assert_eq!(calc.cube_root(-27.0), -3.0);
    assert!(matches!(
        calc.square_root(-1.0),
        Err(CalcError::NegativeRoot(_))
    ));
    assert!(calc.power(-8.0, 1.0 / 3.0).is_nan());
    assert!(calc.last_result().is_nan());
}

#[test]
fn test_chain_sequence() {
    let mut calc = CalculatorState::new();
    calc.add(10.0, 5.0);
    calc.chain_multiply(2.0);
    calc.chain_subtract(10.0);
    assert_eq!(calc.last_result(), 20.0);
    assert_eq!(calc.chain_add(1.0), 21.0);
    assert_eq!(calc.chain_divide(0.0), Err(CalcError::DivisionByZero));
    assert_eq!(calc.last_result(), 21.0);
}

#[test]
fn test_clear_history_keeps_memory() {
    let mut calc = CalculatorState::new();
    calc.add(3.0, 4.0);
    calc.memory_store(7.0);
    calc.clear_history();

    assert!(calc.history().is_empty());
    assert_eq!(calc.last_result(), 0.0);
    assert_eq!(calc.memory(), 7.0);
    assert_eq!(calc.memory_history().len(), 1);
}

#[test]
fn test_history_is_a_copy() {
    let mut calc = CalculatorState::new();
    calc.add(1.0, 2.0);
    let mut copy = calc.history();
    copy.clear();
    copy.push(calc.history()[0].clone());
    copy[0].result = 999.0;
    assert_eq!(calc.history()[0].result, 3.0);
}

#[test]
fn test_settings_validation() {
    let mut calc = CalculatorState::new();
    assert!(matches!(
        calc.set_precision(16),
        Err(CalcError::InvalidPrecision(_))
    ));
    assert!(matches!(
        calc.set_precision(-1),
        Err(CalcError::InvalidPrecision(_))
    ));
    assert_eq!(
        calc.set_angle_mode("grads"),
        Err(CalcError::InvalidAngleMode("grads".to_string()))
    );
    assert_eq!(calc.settings(), Settings::default());
}

#[test]
fn test_records_use_injected_clock() {
    let mut calc = fixed_state();
    calc.add(1.0, 1.0);
    calc.memory_store(3.0);
    let expected = Utc.with_ymd_and_hms(2024, 5, 17, 8, 0, 0).unwrap();
    assert_eq!(calc.history()[0].timestamp, expected);
    assert_eq!(calc.memory_history()[0].timestamp, expected);
}

#[test]
fn test_with_settings_rejects_bad_precision() {
    let settings = Settings {
        angle_mode: AngleMode::Radians,
        precision: 20,
    };
    assert!(CalculatorState::new().with_settings(settings).is_err());
}

#[test]
fn test_remaining_trig_functions_round_and_record() {
    let mut calc = fixed_state();

    assert_eq!(calc.tan(45.0), 1.0);
    assert_eq!(calc.acos(0.5).unwrap(), 60.0);
    assert_eq!(calc.atan(1.0), 45.0);
    assert_eq!(calc.cube_root(-27.0), -3.0);

    let history = calc.history();
    let tags: Vec<&str> = history.iter().map(|r| r.operation.as_str()).collect();
    assert_eq!(tags, vec!["tan", "acos", "atan", "cbrt"]);
    assert_eq!(history[1].result, 60.0);
    assert_eq!(calc.last_result(), -3.0);

    calc.set_angle_mode("radians").unwrap();
    calc.set_precision(3).unwrap();
    assert_eq!(calc.atan(1.0), 0.785);
    assert_eq!(calc.acos(-1.0).unwrap(), 3.142);
    assert_eq!(calc.history()[5].result, 3.142);
}
