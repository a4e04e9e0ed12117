use num::{BigRational, Num, Zero};
use thiserror::Error;

use crate::{
  format::{format_float, format_rational, DEFAULT_EPSILON},
  parser::{parse_exact, to_float, ParseError},
  tokenizer::{is_operand, split_expression, Operator, TokenizerError},
};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Precision {
  /// Exact rationals from parse to format.
  #[default]
  Exact,
  /// `f64` arithmetic, recovered into a fraction within `epsilon`.
  Float { epsilon: f64 },
}

impl Precision {
  pub fn float() -> Self {
    Precision::Float {
      epsilon: DEFAULT_EPSILON,
    }
  }
}

/// Division assumes a non-zero divisor.
pub fn evaluate<T: Num>(operator: Operator, left: T, right: T) -> T {
  match operator {
    Operator::Add => left + right,
    Operator::Subtract => left - right,
    Operator::Multiply => left * right,
    Operator::Divide => left / right,
  }
}

/// Evaluates `<operand> <operator> <operand>` exactly and formats the result.
pub fn calculate(input: &str) -> Result<String, CalculationError> {
  calculate_with(input, Precision::Exact)
}

pub fn calculate_with(input: &str, precision: Precision) -> Result<String, CalculationError> {
  let (left, operator, right) = validate(input)?;
  match precision {
    Precision::Exact => {
      let (left, right) = parse_operands(operator, left, right)?;
      let result = evaluate(operator, left, right);
      log::debug!("evaluated to {result}");
      Ok(format_rational(&result))
    }
    Precision::Float { epsilon } => {
      let (left, right) = parse_operands(operator, left, right)?;
      let result = evaluate(operator, to_float(&left), to_float(&right));
      log::debug!("evaluated to {result}");
      format_float(result, epsilon).ok_or_else(|| {
        log::warn!("float result {result} cannot be written as a fraction");
        CalculationError::NonFinite(result)
      })
    }
  }
}

fn validate(input: &str) -> Result<(&str, Operator, &str), CalculationError> {
  let [left, symbol, right] = split_expression(input)?;
  log::debug!("tokenized {left:?} {symbol:?} {right:?}");

  for operand in [left, right] {
    if !is_operand(operand) {
      return Err(CalculationError::InvalidOperand(operand.to_string()));
    }
  }
  let operator = Operator::from_symbol(symbol)
    .ok_or_else(|| CalculationError::InvalidOperator(symbol.to_string()))?;
  log::debug!("validated with operator {operator}");
  Ok((left, operator, right))
}

// The divisor is checked on the exact value, before any float conversion.
fn parse_operands(
  operator: Operator,
  left: &str,
  right: &str,
) -> Result<(BigRational, BigRational), CalculationError> {
  let left = parse_exact(left)?;
  let right = parse_exact(right)?;
  if operator == Operator::Divide && right.is_zero() {
    return Err(CalculationError::DivisionByZero);
  }
  Ok((left, right))
}

pub fn calculate_value(input: &str) -> Result<BigRational, CalculationError> {
  let (left, operator, right) = validate(input)?;
  let (left, right) = parse_operands(operator, left, right)?;
  Ok(evaluate(operator, left, right))
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
  #[error("Syntax error.")]
  Syntax(String),
  #[error("{0} is not a valid number or fraction.")]
  InvalidOperand(String),
  #[error("{0} is not a valid symbol.")]
  InvalidOperator(String),
  #[error("Runtime error: {0}.")]
  Runtime(#[from] ParseError),
  #[error("Cannot divide with 0.")]
  DivisionByZero,
  #[error("{0} cannot be written as a fraction.")]
  NonFinite(f64),
}

impl From<TokenizerError> for CalculationError {
  fn from(error: TokenizerError) -> Self {
    match error {
      TokenizerError::TokenCount(count) => {
        CalculationError::Syntax(format!("expected 3 tokens, found {count}"))
      }
    }
  }
}
