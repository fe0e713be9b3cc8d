//! CLI output formatting.

use std::fmt::Write as _;
use std::time::Duration;

use num_bigint::BigUint;

use fibref_orchestration::interfaces::CalculationResult;

/// Values longer than this are abbreviated in detailed reports.
const ABBREVIATE_ABOVE_DIGITS: usize = 100;

/// Decimal form of `value`, cut to its first and last `max_digits / 2`
/// digits when it is longer than `max_digits`.
#[must_use]
pub fn abbreviate_value(value: &BigUint, max_digits: usize) -> String {
    let digits = value.to_string();
    if digits.len() <= max_digits {
        return digits;
    }
    let half = max_digits / 2;
    let (head, tail) = (&digits[..half], &digits[digits.len() - half..]);
    format!("{head}...{tail} ({} digits)", digits.len())
}

/// Human-readable elapsed time: µs, ms, s, then minutes.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if d.as_micros() < 1_000 {
        format!("{:.2}µs", d.as_secs_f64() * 1e6)
    } else if d.as_millis() < 1_000 {
        format!("{:.2}ms", d.as_secs_f64() * 1e3)
    } else if secs < 60 {
        format!("{:.3}s", d.as_secs_f64())
    } else {
        let rest = d - Duration::from_secs(secs / 60 * 60);
        format!("{}m{:.1}s", secs / 60, rest.as_secs_f64())
    }
}

/// `n` with a comma between each group of three digits.
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let lead = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - lead) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Labelled multi-line report for one result.
#[must_use]
pub fn format_report(
    algorithm: &str,
    n: u64,
    value: &BigUint,
    duration: Duration,
    details: bool,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Algorithm: {algorithm}");
    let _ = writeln!(out, "N: {}", group_thousands(n));
    let _ = writeln!(out, "Duration: {}", format_duration(duration));
    if details {
        let _ = writeln!(out, "Result bits: {}", value.bits());
        let _ = writeln!(out, "Result digits: {}", value.to_string().len());
    }
    // Detailed reports list the digit count, so long values are cut there.
    let shown = if details {
        abbreviate_value(value, ABBREVIATE_ABOVE_DIGITS)
    } else {
        value.to_string()
    };
    let _ = writeln!(out, "F({}) = {shown}", group_thousands(n));
    out
}

/// Table of algorithms, durations, and status for a multi-strategy run.
#[must_use]
pub fn format_comparison(results: &[CalculationResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\nComparison Results:");
    let _ = writeln!(out, "{:-<60}", "");
    for result in results {
        let status = match &result.outcome {
            Ok(_) => "OK",
            Err(_) if result.is_capacity_exceeded() => "CAPACITY",
            Err(_) => "ERROR",
        };
        let _ = writeln!(
            out,
            "  {:<20} {:>10} [{}]",
            result.algorithm,
            format_duration(result.duration),
            status,
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibref_core::calculator::FibError;

    #[test]
    fn duration_units() {
        assert_eq!(format_duration(Duration::from_nanos(500)), "0.50µs");
        assert_eq!(format_duration(Duration::from_millis(42)), "42.00ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.500s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30.0s");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(42), "42");
        assert_eq!(group_thousands(1234), "1,234");
        assert_eq!(group_thousands(123_456), "123,456");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
    }

    #[test]
    fn short_values_are_not_abbreviated() {
        let value = BigUint::from(12345u64);
        assert_eq!(abbreviate_value(&value, 100), "12345");
    }

    #[test]
    fn long_values_keep_head_and_tail() {
        let value = BigUint::from(10u32).pow(150) + 7u32;
        let s = abbreviate_value(&value, 100);
        assert!(s.starts_with(&format!("1{}", "0".repeat(49))));
        assert!(s.ends_with("0007 (151 digits)"));
        assert_eq!(abbreviate_value(&value, 200).len(), 151);
    }

    #[test]
    fn report_lists_fields() {
        let report = format_report(
            "FixedBuffer",
            20,
            &BigUint::from(6765u32),
            Duration::from_millis(5),
            false,
        );
        assert!(report.contains("Algorithm: FixedBuffer"));
        assert!(report.contains("N: 20"));
        assert!(report.contains("F(20) = 6765"));
        assert!(!report.contains("Result bits"));
    }

    #[test]
    fn report_details() {
        let report = format_report(
            "GrowableSequence",
            30,
            &BigUint::from(832_040u32),
            Duration::from_millis(10),
            true,
        );
        assert!(report.contains("Result bits: 20"));
        assert!(report.contains("Result digits: 6"));
    }

    #[test]
    fn comparison_statuses() {
        let results = vec![
            CalculationResult {
                algorithm: "GrowableSequence".into(),
                outcome: Ok(BigUint::from(55u64)),
                duration: Duration::from_millis(5),
            },
            CalculationResult {
                algorithm: "FixedBuffer".into(),
                outcome: Err(FibError::CapacityExceeded { capacity: 5 }),
                duration: Duration::ZERO,
            },
            CalculationResult {
                algorithm: "Other".into(),
                outcome: Err(FibError::Calculation("failed".into())),
                duration: Duration::ZERO,
            },
        ];
        let table = format_comparison(&results);
        assert!(table.contains("[OK]"));
        assert!(table.contains("[CAPACITY]"));
        assert!(table.contains("[ERROR]"));
    }
}
