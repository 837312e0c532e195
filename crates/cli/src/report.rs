//! Stdout report formatting
//!
//! The two-line output is a fixed contract, consumed by scripts that
//! scrape it:
//!
//! ```text
//! PI is approximately <estimate>, Error is <error>
//! Time = <elapsed> sec
//! ```
//!
//! All three values carry exactly 16 digits after the decimal point.

use std::time::Duration;

/// Format the estimate/error line.
pub fn estimate_line(estimate: f64, error: f64) -> String {
    format!("PI is approximately {estimate:.16}, Error is {error:.16}")
}

/// Format the elapsed-time line.
pub fn time_line(elapsed: Duration) -> String {
    format!("Time = {:.16} sec", elapsed.as_secs_f64())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_estimate_line_sixteen_digits() {
        assert_eq!(
            estimate_line(4.0, (4.0_f64 - PI).abs()),
            "PI is approximately 4.0000000000000000, Error is 0.8584073464102069"
        );
    }

    #[test]
    fn test_estimate_line_degenerate_zero() {
        assert_eq!(
            estimate_line(0.0, PI),
            "PI is approximately 0.0000000000000000, Error is 3.1415926535897931"
        );
    }

    #[test]
    fn test_time_line() {
        assert_eq!(
            time_line(Duration::from_millis(1500)),
            "Time = 1.5000000000000000 sec"
        );
        assert_eq!(
            time_line(Duration::ZERO),
            "Time = 0.0000000000000000 sec"
        );
    }
}
