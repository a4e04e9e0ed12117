/// Splits an input line on runs of spaces.
pub fn tokenize(text: &str) -> Vec<&str> {
  text.split(' ').filter(|token| !token.is_empty()).collect()
}

pub fn split_expression(text: &str) -> Result<[&str; 3], TokenizerError> {
  match tokenize(text).as_slice() {
    [left, operator, right] => Ok([*left, *operator, *right]),
    tokens => Err(TokenizerError::TokenCount(tokens.len())),
  }
}

pub fn is_whole_number(token: &str) -> bool {
  let digits = token.strip_prefix('-').unwrap_or(token);
  is_unsigned(digits)
}

fn is_unsigned(token: &str) -> bool {
  !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

/// `N/D` or `W&F`, where `F` is itself a fraction.
pub fn is_fraction(token: &str) -> bool {
  if let Some((whole, fraction)) = token.split_once('&') {
    return is_whole_number(whole) && is_fraction(fraction);
  }
  match token.split_once('/') {
    Some((numerator, denominator)) => is_whole_number(numerator) && is_whole_number(denominator),
    None => false,
  }
}

pub fn is_operand(token: &str) -> bool {
  is_whole_number(token) || is_fraction(token)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
  Add,
  Subtract,
  Multiply,
  Divide,
}

impl Operator {
  pub fn from_symbol(token: &str) -> Option<Operator> {
    match token {
      "+" => Some(Operator::Add),
      "-" => Some(Operator::Subtract),
      "*" => Some(Operator::Multiply),
      "/" => Some(Operator::Divide),
      _ => None,
    }
  }
}

impl std::fmt::Display for Operator {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Operator::Add => write!(f, "+"),
      Operator::Subtract => write!(f, "-"),
      Operator::Multiply => write!(f, "*"),
      Operator::Divide => write!(f, "/"),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizerError {
  TokenCount(usize),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn collapses_space_runs() {
    assert_eq!(tokenize("  2&3/8   +  9/8 "), vec!["2&3/8", "+", "9/8"]);
    assert!(tokenize("   ").is_empty());
  }

  #[test]
  fn requires_three_tokens() {
    assert_eq!(split_expression("1/2 * 3&3/4"), Ok(["1/2", "*", "3&3/4"]));
    assert_eq!(
      split_expression("-3 / 0 + 3"),
      Err(TokenizerError::TokenCount(5))
    );
    assert_eq!(
      split_expression("invalid expression"),
      Err(TokenizerError::TokenCount(2))
    );
    assert_eq!(split_expression(""), Err(TokenizerError::TokenCount(0)));
  }

  #[test]
  fn tabs_are_not_separators() {
    assert_eq!(split_expression("1\t+\t2"), Err(TokenizerError::TokenCount(1)));
  }

  #[test]
  fn whole_numbers() {
    for token in ["0", "7", "-3", "100000", "-0", "007"] {
      assert!(is_whole_number(token), "{token}");
    }
    for token in ["", "-", "--3", "+3", "-b", "1.5", "3-", "1 2"] {
      assert!(!is_whole_number(token), "{token}");
    }
  }

  #[test]
  fn fractions() {
    for token in [
      "1/2", "9/8", "-1/2", "1/-2", "-1/-2", "3&3/4", "-1&7/8", "0&0/5", "1/0", "1&-1/2",
      "1&1/-2", "1&2&3/4",
    ] {
      assert!(is_fraction(token), "{token}");
    }
    for token in [
      "1&y/3", "1/2/3", "1&2", "&1/2", "1&", "/2", "2/", "1", "a/b", "1&1/2/3", "1&&1/2",
    ] {
      assert!(!is_fraction(token), "{token}");
    }
  }

  #[test]
  fn operands() {
    assert!(is_operand("-3"));
    assert!(is_operand("2&3/8"));
    assert!(!is_operand("-b"));
    assert!(!is_operand("x"));
  }

  #[test]
  fn operators() {
    assert_eq!(Operator::from_symbol("+"), Some(Operator::Add));
    assert_eq!(Operator::from_symbol("-"), Some(Operator::Subtract));
    assert_eq!(Operator::from_symbol("*"), Some(Operator::Multiply));
    assert_eq!(Operator::from_symbol("/"), Some(Operator::Divide));
    for token in ["x", "", "++", " +", "^", "//"] {
      assert_eq!(Operator::from_symbol(token), None, "{token:?}");
    }
    assert_eq!(Operator::Divide.to_string(), "/");
  }
}
