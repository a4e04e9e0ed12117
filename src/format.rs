use num::{BigInt, BigRational, FromPrimitive, Signed, ToPrimitive, Zero};

pub const DEFAULT_EPSILON: f64 = 1.0E-6;

// Convergents stop improving long before this for any f64 input.
const MAX_CONVERGENTS: usize = 64;

/// `0`, `W`, `N/D` or `W&N/D`; the whole part is truncated toward zero.
pub fn format_rational(value: &BigRational) -> String {
  if value.is_zero() {
    return "0".to_string();
  }
  let numerator = value.numer();
  let denominator = value.denom();
  let whole: BigInt = numerator / denominator;
  let remainder = (numerator - denominator * &whole).abs();

  let mut result = String::new();
  if !whole.is_zero() {
    result += &whole.to_string();
  }
  if !remainder.is_zero() {
    if !result.is_empty() {
      result.push('&');
    } else if value.is_negative() {
      result.push('-');
    }
    result += &format!("{remainder}/{denominator}");
  }
  result
}

/// `None` for NaN and infinities.
pub fn format_float(value: f64, epsilon: f64) -> Option<String> {
  rational_approximation(value, epsilon).map(|fraction| format_rational(&fraction))
}

// Stops once the remainder is within epsilon * k^2.
pub fn rational_approximation(value: f64, epsilon: f64) -> Option<BigRational> {
  if !value.is_finite() {
    return None;
  }
  let mut x = value;
  let mut a = x.floor();
  let (mut h_prev, mut k_prev) = (BigInt::from(1), BigInt::from(0));
  let (mut h, mut k) = (BigInt::from_f64(a)?, BigInt::from(1));
  let mut k_float = 1.0;

  for _ in 0..MAX_CONVERGENTS {
    if x - a <= epsilon * k_float * k_float {
      break;
    }
    x = 1.0 / (x - a);
    if !x.is_finite() {
      break;
    }
    a = x.floor();
    let step = BigInt::from_f64(a)?;
    let h_next = &step * &h + &h_prev;
    let k_next = &step * &k + &k_prev;
    h_prev = std::mem::replace(&mut h, h_next);
    k_prev = std::mem::replace(&mut k, k_next);
    k_float = k.to_f64().unwrap_or(f64::INFINITY);
    log::trace!("convergent {h}/{k} (remainder {})", x - a);
  }
  Some(BigRational::new(h, k))
}
