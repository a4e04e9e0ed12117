//! Evaluates one `<operand> <operator> <operand>` expression over mixed
//! numbers such as `3&1/4` or `-1&7/8` and formats the result the same way.
//!
//! ```
//! assert_eq!(fraction_calc::calculate("1/2 * 3&3/4").unwrap(), "1&7/8");
//! ```

pub mod config;
pub mod evaluator;
pub mod format;
pub mod parser;
pub mod tokenizer;

pub use evaluator::{calculate, calculate_value, calculate_with, CalculationError, Precision};
