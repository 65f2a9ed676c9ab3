//! Text rendering for numbers and history entries.

use crate::calcshell::record::{MemoryOperation, MemoryRecord, OperationRecord};

/// Magnitudes at or above this switch to exponent notation.
const EXPONENT_ABOVE: f64 = 1e21;
/// Non-zero magnitudes below this switch to exponent notation.
const EXPONENT_BELOW: f64 = 1e-6;

/// Render a number the way a calculator display would: integers without a
/// fractional part, `NaN`/`Infinity` spelled out, and no negative zero.
/// Very large and very small magnitudes use exponent form, e.g. `1e+21`.
pub fn number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= EXPONENT_ABOVE || value.abs() < EXPONENT_BELOW {
        let rendered = format!("{:e}", value);
        if rendered.contains("e-") {
            rendered
        } else {
            rendered.replacen('e', "e+", 1)
        }
    } else {
        format!("{}", value)
    }
}

/// `op(a, b) = result` or `op(a) = result`.
pub fn call(operation: &str, operands: (f64, Option<f64>), result: f64) -> String {
    match operands.1 {
        Some(b) => format!(
            "{}({}, {}) = {}",
            operation,
            number(operands.0),
            number(b),
            number(result)
        ),
        None => format!(
            "{}({}) = {}",
            operation,
            number(operands.0),
            number(result)
        ),
    }
}

pub fn operation_record(record: &OperationRecord) -> String {
    call(&record.operation, record.operands, record.result)
}

pub fn memory_record(record: &MemoryRecord) -> String {
    let old = number(record.old_value.unwrap_or(0.0));
    let detail = match record.operation {
        MemoryOperation::Store => format!("{} -> Memory", number(record.value)),
        MemoryOperation::Recall => format!("Memory = {}", number(record.value)),
        MemoryOperation::Clear => format!("{} -> 0", old),
        MemoryOperation::Add => format!(
            "{} + {} = {}",
            old,
            number(record.value),
            number(record.new_value)
        ),
        MemoryOperation::Subtract => format!(
            "{} - {} = {}",
            old,
            number(record.value),
            number(record.new_value)
        ),
    };
    format!("{}: {}", record.operation, detail)
}

/// Numbered listing, one entry per line, starting at 1.
pub fn numbered<T>(items: &[T], render: impl Fn(&T) -> String) -> String {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| format!("{}. {}", index + 1, render(item)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_number_rendering() {
        assert_eq!(number(15.0), "15");
        assert_eq!(number(0.5), "0.5");
        assert_eq!(number(-0.0), "0");
        assert_eq!(number(f64::NAN), "NaN");
        assert_eq!(number(f64::INFINITY), "Infinity");
        assert_eq!(number(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn test_extreme_magnitudes_use_exponent_form() {
        assert_eq!(number(7.257415615307994e306), "7.257415615307994e+306");
        assert_eq!(number(-1e21), "-1e+21");
        assert_eq!(number(1e-20), "1e-20");
        assert_eq!(number(1.5e-7), "1.5e-7");
        assert_eq!(number(999999999999999900000.0), "999999999999999900000");
        assert_eq!(number(0.000001), "0.000001");
    }

    #[test]
    fn test_call_rendering() {
        assert_eq!(call("add", (10.0, Some(5.0)), 15.0), "add(10, 5) = 15");
        assert_eq!(call("sqrt", (144.0, None), 12.0), "sqrt(144) = 12");
    }

    #[test]
    fn test_memory_record_rendering() {
        let record = MemoryRecord {
            operation: MemoryOperation::Add,
            value: 25.0,
            old_value: Some(100.0),
            new_value: 125.0,
            timestamp: Utc::now(),
        };
        assert_eq!(memory_record(&record), "ADD: 100 + 25 = 125");
    }

    #[test]
    fn test_numbered_listing() {
        let items = vec!["a", "b"];
        assert_eq!(numbered(&items, |s| s.to_string()), "1. a\n2. b");
    }
}
