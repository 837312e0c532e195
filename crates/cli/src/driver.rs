//! Parse → compute → report pipeline
//!
//! One linear pass: resolve the interval count from the argument, time
//! the summation, derive the absolute error against the canonical
//! double-precision π. The timer brackets only the summation call —
//! argument handling and output formatting are outside it.

use crate::config::DriverConfig;
use pi_core::{ParseMode, approximate, parse_intervals};
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of one approximation run.
#[derive(Debug, Clone, Copy)]
pub struct Outcome {
    /// Interval count actually used (after parsing)
    pub intervals: i64,
    /// Partial sum of the series after `intervals` terms
    pub estimate: f64,
    /// `|estimate - PI|` against the f64 π constant
    pub error: f64,
    /// Wall time of the summation call only (monotonic clock)
    pub elapsed: Duration,
}

/// Run one approximation pass.
///
/// `arg` is the raw positional token, if one was given. In lenient mode
/// a missing argument behaves like an unparsable one and resolves to 0;
/// in strict mode both are errors.
pub fn run(arg: Option<&str>, config: &DriverConfig) -> Result<Outcome, String> {
    let intervals = match arg {
        Some(token) => parse_intervals(token, config.parse_mode)?,
        None => match config.parse_mode {
            ParseMode::Lenient => 0,
            ParseMode::Strict => return Err("missing interval count argument".to_string()),
        },
    };
    debug!(intervals, "parsed interval count");

    let start = Instant::now();
    let estimate = approximate(intervals);
    let elapsed = start.elapsed();
    debug!(elapsed_secs = elapsed.as_secs_f64(), "summation finished");

    Ok(Outcome {
        intervals,
        estimate,
        error: (estimate - std::f64::consts::PI).abs(),
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_run_two_terms() {
        let outcome = run(Some("2"), &DriverConfig::new()).unwrap();
        assert_eq!(outcome.intervals, 2);
        assert_eq!(outcome.estimate, 4.0 - 4.0 / 3.0);
        assert_eq!(outcome.error, (4.0 - 4.0 / 3.0 - PI).abs());
    }

    #[test]
    fn test_run_lenient_garbage_is_degenerate_zero() {
        let outcome = run(Some("abc"), &DriverConfig::new()).unwrap();
        assert_eq!(outcome.intervals, 0);
        assert_eq!(outcome.estimate, 0.0);
        assert_eq!(outcome.error, PI);
    }

    #[test]
    fn test_run_lenient_missing_argument_defaults_to_zero() {
        let outcome = run(None, &DriverConfig::new()).unwrap();
        assert_eq!(outcome.intervals, 0);
        assert_eq!(outcome.estimate, 0.0);
    }

    #[test]
    fn test_run_strict_rejects_garbage_and_absence() {
        let config = DriverConfig::new().with_parse_mode(ParseMode::Strict);
        assert!(run(Some("abc"), &config).is_err());
        assert!(run(None, &config).is_err());
        assert!(run(Some("10"), &config).is_ok());
    }

    #[test]
    fn test_run_negative_count_is_degenerate_not_error() {
        let outcome = run(Some("-3"), &DriverConfig::new()).unwrap();
        assert_eq!(outcome.intervals, -3);
        assert_eq!(outcome.estimate, 0.0);
    }
}
