use num::{BigInt, BigRational, One, Signed, ToPrimitive, Zero};
use thiserror::Error;

use crate::tokenizer::is_whole_number;

/// Parses a validated operand (`W`, `N/D` or `W&F`) into an exact rational.
///
/// `W&F` is `w + f` for `w >= 0` and `w - f` otherwise, so `-1&7/8` is
/// `-1 - 7/8`.
pub fn parse_exact(token: &str) -> Result<BigRational, ParseError> {
  if is_whole_number(token) {
    return Ok(BigRational::from_integer(parse_integer(token)?));
  }
  if let Some((whole, fraction)) = token.split_once('&') {
    let whole_value = BigRational::from_integer(parse_integer(whole)?);
    let fraction_value = parse_exact(fraction).map_err(|err| err.within(token))?;
    return Ok(if whole_value.is_negative() {
      whole_value - fraction_value
    } else {
      whole_value + fraction_value
    });
  }
  let (numerator, denominator) = split_fraction(token)?;
  let numerator = parse_integer(numerator)?;
  let denominator = parse_integer(denominator)?;
  if denominator.is_zero() {
    return Err(ParseError::UndefinedFraction(token.to_string()));
  }
  Ok(BigRational::new(numerator, denominator))
}

/// Magnitudes beyond `f64` become infinities, tiny ones become zero.
pub fn to_float(value: &BigRational) -> f64 {
  value.to_f64().unwrap_or_else(|| {
    let sign = if value.is_negative() { -1.0 } else { 1.0 };
    if value.abs() < BigRational::one() {
      sign * 0.0
    } else {
      sign * f64::INFINITY
    }
  })
}

fn split_fraction(token: &str) -> Result<(&str, &str), ParseError> {
  token
    .split_once('/')
    .ok_or_else(|| ParseError::Syntax(token.to_string()))
}

fn parse_integer(text: &str) -> Result<BigInt, ParseError> {
  if !is_whole_number(text) {
    return Err(ParseError::Syntax(text.to_string()));
  }
  text
    .parse::<BigInt>()
    .map_err(|_| ParseError::Syntax(text.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
  #[error("'{0}' could not be read as a number")]
  Syntax(String),
  #[error("'{0}' has a zero denominator")]
  UndefinedFraction(String),
}

impl ParseError {
  // undefined fractions are reported against the whole operand
  fn within(self, token: &str) -> Self {
    match self {
      ParseError::UndefinedFraction(_) => ParseError::UndefinedFraction(token.to_string()),
      syntax => syntax,
    }
  }
}
