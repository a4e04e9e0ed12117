use thiserror::Error;

use crate::evaluator::Precision;

pub const USAGE: &str = "\
A simple calculator that takes operations on fractions as input and produces a fractional result.

USAGE:
  fraction-calc [OPTIONS] [EXPRESSION...]

Without an expression the calculator reads one expression per line; type 'exit' to quit.

  * Legal operators are *, /, +, - (multiply, divide, add, subtract).
  * Operands and operators shall be separated by one or more spaces.
  * Mixed numbers shall be represented by whole&numerator/denominator; for example \"3&1/4\" or \"-1&7/8\".
  * Improper fractions, whole numbers, and negative numbers are allowed as operands.

OPTIONS:
  --float            Evaluate with floating point and recover the fraction afterwards
  --epsilon <VALUE>  Tolerance for recovering fractions (implies --float, default 1e-6)
  -h, --help         Print this help
  -V, --version      Print the version

Example runs (where ? represents the command prompt):
  ? 1/2 * 3&3/4
  = 1&7/8

  ? 2&3/8 + 9/8
  = 3&1/2

  ? 1&3/4 - 2
  = -1/4";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
  Calculate(String),
  Repl,
  Help,
  Version,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  pub command: Command,
  pub precision: Precision,
}

impl Config {
  /// Anything that is not an option is joined into the expression.
  pub fn from_args<I>(args: I) -> Result<Config, ConfigError>
  where
    I: IntoIterator<Item = String>,
  {
    let mut args = args.into_iter();
    let mut precision = Precision::Exact;
    let mut expression: Vec<String> = vec![];

    while let Some(arg) = args.next() {
      match arg.as_str() {
        "-h" | "--help" => return Ok(Config::with(Command::Help, precision)),
        "-V" | "--version" => return Ok(Config::with(Command::Version, precision)),
        "--float" => {
          if precision == Precision::Exact {
            precision = Precision::float();
          }
        }
        "--epsilon" => {
          let value = args.next().ok_or(ConfigError::MissingValue("--epsilon"))?;
          precision = Precision::Float {
            epsilon: parse_epsilon(&value)?,
          };
        }
        option if option.starts_with("--") => {
          return Err(ConfigError::UnknownOption(option.to_string()))
        }
        operand => expression.push(operand.to_string()),
      }
    }

    let command = if expression.is_empty() {
      Command::Repl
    } else {
      Command::Calculate(expression.join(" "))
    };
    Ok(Config::with(command, precision))
  }

  fn with(command: Command, precision: Precision) -> Config {
    Config { command, precision }
  }
}

fn parse_epsilon(value: &str) -> Result<f64, ConfigError> {
  match value.parse::<f64>() {
    Ok(epsilon) if epsilon.is_finite() && epsilon > 0.0 => Ok(epsilon),
    _ => Err(ConfigError::InvalidEpsilon(value.to_string())),
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
  #[error("unknown option '{0}'")]
  UnknownOption(String),
  #[error("option '{0}' needs a value")]
  MissingValue(&'static str),
  #[error("'{0}' is not a positive tolerance")]
  InvalidEpsilon(String),
}
