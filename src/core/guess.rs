//! Guess parsing.
//!
//! Raw input is trimmed and read the way a browser number field reads it:
//! a decimal number truncated toward zero, an unsigned `0x`/`0o`/`0b`
//! integer, or a spelled-out `Infinity`. Empty input, other text, `NaN` and
//! zero are rejected; zero is not a playable guess.

use thiserror::Error;

/// The one class of failure the engine knows: unusable guess input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("no guess entered")]
    Empty,
    #[error("`{0}` is not a number")]
    NotANumber(String),
    #[error("zero is not a valid guess")]
    Zero,
}

/// Parse raw input text into a guess.
///
/// ```
/// use number_guess::core::{parse_guess, GuessError};
///
/// assert_eq!(parse_guess(" 12 "), Ok(12));
/// assert_eq!(parse_guess("7.9"), Ok(7));
/// assert_eq!(parse_guess("-3"), Ok(-3));
/// assert_eq!(parse_guess(""), Err(GuessError::Empty));
/// assert_eq!(parse_guess("0"), Err(GuessError::Zero));
/// ```
pub fn parse_guess(raw: &str) -> Result<i64, GuessError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(GuessError::Empty);
    }

    let not_a_number = || GuessError::NotANumber(text.to_string());

    let guess = if let Some(value) = parse_prefixed(text) {
        value.ok_or_else(not_a_number)?
    } else {
        let value = match text {
            "Infinity" | "+Infinity" => f64::INFINITY,
            "-Infinity" => f64::NEG_INFINITY,
            _ => {
                let value: f64 = text.parse().map_err(|_| not_a_number())?;
                // Rust also accepts "inf" and "nan"; only the spelled-out forms count.
                if !value.is_finite() {
                    return Err(not_a_number());
                }
                value
            }
        };
        // Saturating float-to-int cast; anything this large is simply "too high".
        value.trunc() as i64
    };
    if guess == 0 {
        return Err(GuessError::Zero);
    }
    Ok(guess)
}

/// Unsigned radix-prefixed integer. `None` if `text` has no prefix,
/// `Some(None)` if it has one but the digits are bad.
fn parse_prefixed(text: &str) -> Option<Option<i64>> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(None);
    }
    // Digit-only input can only fail by overflow.
    Some(Some(i64::from_str_radix(digits, radix).unwrap_or(i64::MAX)))
}
