use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::{Signed, ToPrimitive};

/// Exact decimal for a JSON number. Returns `None` for NaN and infinities.
pub fn decimal_from_f64(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    BigDecimal::from_str(&value.to_string()).ok()
}

/// Stored prices keep two fraction digits. Negative amounts are passed
/// through unrounded so validation still sees the sign.
pub fn price_from_f64(value: f64) -> Option<BigDecimal> {
    decimal_from_f64(value).map(|d| if d.is_negative() { d } else { d.round(2) })
}

pub fn decimal_to_f64(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or_default()
}
