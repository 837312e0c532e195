//! Interval-argument parsing
//!
//! The driver takes one textual argument: the number of series terms to
//! sum. Historically that argument went through C `atoi`, which skips
//! leading whitespace, accepts an optional sign, consumes leading
//! digits, and silently yields 0 for anything else. [`ParseMode`] makes
//! that choice explicit instead of inheriting it by accident:
//! `Lenient` reproduces the atoi behavior, `Strict` requires the whole
//! token to be a well-formed base-10 integer.

/// How to interpret the interval-count token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// atoi semantics: leading ASCII whitespace, optional sign, leading
    /// digits; no digits means 0. Never fails.
    #[default]
    Lenient,
    /// The entire token must parse as a base-10 `i64`.
    Strict,
}

/// Parse an interval count according to `mode`.
///
/// Lenient parsing cannot fail; the `Err` arm is only reachable in
/// strict mode. Where atoi overflow would be undefined, lenient parsing
/// saturates at `i64::MIN`/`i64::MAX`.
pub fn parse_intervals(token: &str, mode: ParseMode) -> Result<i64, String> {
    match mode {
        ParseMode::Lenient => Ok(parse_lenient(token)),
        ParseMode::Strict => token
            .parse::<i64>()
            .map_err(|e| format!("invalid interval count '{token}': {e}")),
    }
}

/// atoi-equivalent conversion: whitespace, optional sign, leading digits.
fn parse_lenient(token: &str) -> i64 {
    let mut chars = token.chars().peekable();
    while chars.peek().is_some_and(|c| c.is_ascii_whitespace()) {
        chars.next();
    }
    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        }
        Some('+') => {
            chars.next();
            false
        }
        _ => false,
    };

    // Accumulate on the negative side so i64::MIN is representable
    let mut value: i64 = 0;
    for c in chars {
        let Some(digit) = c.to_digit(10) else { break };
        value = match value
            .checked_mul(10)
            .and_then(|v| v.checked_sub(i64::from(digit)))
        {
            Some(v) => v,
            None => return if negative { i64::MIN } else { i64::MAX },
        };
    }

    if negative {
        value
    } else {
        value.checked_neg().unwrap_or(i64::MAX)
    }
}
