//! Decimal amounts and prices.
//!
//! Amounts travel as strings (`"10"`, `"0.0000001"`) so callers never touch
//! floating point. On the wire they are integers in stroops, one
//! ten-millionth of a unit. Prices become an `n/d` fraction of two `i32`s,
//! found by continued-fraction approximation.

use super::error::{Result, TransactionError};
use crate::config::{AMOUNT_DECIMALS, STROOPS_PER_UNIT};
use crate::xdr::Price;

/// The largest trust-line limit the network accepts, in stroops.
pub const MAX_AMOUNT: i64 = i64::MAX;

/// Parses a non-negative decimal amount into stroops.
///
/// ```
/// use txnbuild::transaction::amount::parse_amount;
///
/// assert_eq!(parse_amount("10").unwrap(), 100_000_000);
/// assert_eq!(parse_amount("0.0000001").unwrap(), 1);
/// ```
pub fn parse_amount(amount: &str) -> Result<i64> {
    let (whole, frac) = split_decimal(amount)?;
    if frac.len() > AMOUNT_DECIMALS {
        return Err(TransactionError::validation(format!(
            "amount {amount:?} has more than {AMOUNT_DECIMALS} decimal places"
        )));
    }

    let overflow = || TransactionError::validation(format!("amount {amount:?} is too large"));
    let whole: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| overflow())?
    };
    let frac_stroops: i64 = if frac.is_empty() {
        0
    } else {
        let digits: i64 = frac.parse().map_err(|_| overflow())?;
        digits * 10i64.pow((AMOUNT_DECIMALS - frac.len()) as u32)
    };

    whole
        .checked_mul(STROOPS_PER_UNIT)
        .and_then(|stroops| stroops.checked_add(frac_stroops))
        .ok_or_else(overflow)
}

/// Formats stroops as a decimal string with all seven places.
pub fn format_amount(stroops: i64) -> String {
    let sign = if stroops < 0 { "-" } else { "" };
    let abs = stroops.unsigned_abs();
    let unit = STROOPS_PER_UNIT as u64;
    format!(
        "{sign}{}.{:0width$}",
        abs / unit,
        abs % unit,
        width = AMOUNT_DECIMALS
    )
}

/// Converts a decimal price into the closest `n/d` with both terms fitting in `i32`.
pub fn parse_price(price: &str) -> Result<Price> {
    let (whole, frac) = split_decimal(price)?;
    let too_precise = || TransactionError::validation(format!("price {price:?} is out of range"));

    // Exact rational p/q; 10^18 keeps every step inside i128.
    if frac.len() > 18 || whole.len() > 18 {
        return Err(too_precise());
    }
    let q = 10i128.pow(frac.len() as u32);
    let whole: i128 = if whole.is_empty() { 0 } else { whole.parse().map_err(|_| too_precise())? };
    let frac: i128 = if frac.is_empty() { 0 } else { frac.parse().map_err(|_| too_precise())? };
    let (n, d) = continued_fraction(whole * q + frac, q);

    if n == 0 || d == 0 {
        return Err(TransactionError::validation(format!(
            "couldn't find approximation for price {price:?}"
        )));
    }
    // The approximation never lets either term exceed i32::MAX.
    Ok(Price {
        n: n as i32,
        d: d as i32,
    })
}

/// Best rational approximation of `p/q` with numerator and denominator
/// bounded by `i32::MAX`.
fn continued_fraction(mut p: i128, mut q: i128) -> (i128, i128) {
    let max = i128::from(i32::MAX);
    // Convergents h/k, seeded with 0/1 and 1/0.
    let (mut h2, mut k2) = (0i128, 1i128);
    let (mut h1, mut k1) = (1i128, 0i128);

    loop {
        if p > max * q {
            break;
        }
        let a = p / q;
        let rem = p - a * q;
        let h = a * h1 + h2;
        let k = a * k1 + k2;
        if h > max || k > max {
            break;
        }
        (h2, k2, h1, k1) = (h1, k1, h, k);
        if rem == 0 {
            break;
        }
        // number = 1 / fractional part
        (p, q) = (q, rem);
    }
    (h1, k1)
}

/// Splits `"12.34"` into `("12", "34")`, rejecting anything that isn't
/// plain non-negative decimal notation.
fn split_decimal(text: &str) -> Result<(&str, &str)> {
    let invalid = || TransactionError::validation(format!("invalid decimal {text:?}"));
    let (whole, frac) = match text.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (text, ""),
    };
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
        return Err(invalid());
    }
    Ok((whole, frac))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_and_fractional_amounts() {
        assert_eq!(parse_amount("10").unwrap(), 100_000_000);
        assert_eq!(parse_amount("1.5").unwrap(), 15_000_000);
        assert_eq!(parse_amount("0").unwrap(), 0);
        assert_eq!(parse_amount(".25").unwrap(), 2_500_000);
        assert_eq!(parse_amount("922337203685.4775807").unwrap(), MAX_AMOUNT);
    }

    #[test]
    fn malformed_amounts_rejected() {
        for bad in ["", ".", "-1", "1e5", "1.2.3", " 1", "0.00000001"] {
            assert!(
                matches!(parse_amount(bad), Err(TransactionError::Validation(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn overflowing_amount_rejected() {
        assert!(parse_amount("922337203685.4775808").is_err());
        assert!(parse_amount("99999999999999999999").is_err());
    }

    #[test]
    fn format_shows_seven_places() {
        assert_eq!(format_amount(100_000_000), "10.0000000");
        assert_eq!(format_amount(1), "0.0000001");
        assert_eq!(format_amount(-15_000_000), "-1.5000000");
    }

    #[test]
    fn simple_prices() {
        assert_eq!(parse_price("1").unwrap(), Price { n: 1, d: 1 });
        assert_eq!(parse_price("1.0").unwrap(), Price { n: 1, d: 1 });
        assert_eq!(parse_price("0.01").unwrap(), Price { n: 1, d: 100 });
        assert_eq!(parse_price("0.02").unwrap(), Price { n: 1, d: 50 });
        assert_eq!(parse_price("2.5").unwrap(), Price { n: 5, d: 2 });
    }

    #[test]
    fn irrational_looking_price_is_bounded() {
        let price = parse_price("3.14159265358979").unwrap();
        assert!(price.n > 0 && price.d > 0);
        let approx = f64::from(price.n) / f64::from(price.d);
        assert!((approx - 3.14159265358979).abs() < 1e-9);
    }

    #[test]
    fn huge_price_saturates_at_i32_max() {
        let price = parse_price("2147483647").unwrap();
        assert_eq!(price, Price { n: i32::MAX, d: 1 });
    }

    #[test]
    fn zero_price_has_no_approximation() {
        let err = parse_price("0").unwrap_err();
        assert!(err.to_string().contains("couldn't find approximation"));
    }

    #[test]
    fn price_beyond_range_has_no_approximation() {
        assert!(parse_price("2147483648").is_err());
    }
}
