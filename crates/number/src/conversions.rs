//! Conversion utilities between decimal values and their integer encodings.

use {
    crate::{context::ten_to, error::Error},
    bigdecimal::BigDecimal,
    num::{BigInt, Integer, Zero},
};

/// Number of decimals of the 18-decimal fixed point encoding used for pool
/// parameters on chain.
pub const WEI_DECIMALS: i64 = 18;

/// Interprets an integer as an 18-decimal fixed point value, i.e. returns
/// `value / 10^18` exactly.
pub fn wei18_to_decimal(value: &BigInt) -> BigDecimal {
    BigDecimal::new(value.clone(), WEI_DECIMALS)
}

/// Parses an 18-decimal fixed point integer literal such as
/// `1035905000000000000`.
pub fn parse_wei18(literal: &str) -> Result<BigDecimal, Error> {
    let value = literal
        .trim()
        .parse::<BigInt>()
        .map_err(|_| Error::InvalidInteger(literal.to_owned()))?;
    Ok(wei18_to_decimal(&value))
}

/// Returns the same value with trailing zeros stripped from its mantissa, so
/// that `1.000` renders as `1` and `0E-200` as `0`.
pub fn normalize(value: &BigDecimal) -> BigDecimal {
    let (mut mantissa, mut scale) = value.as_bigint_and_exponent();
    if mantissa.is_zero() {
        return BigDecimal::zero();
    }

    let ten = BigInt::from(10);
    loop {
        let (quotient, remainder) = mantissa.div_rem(&ten);
        if !remainder.is_zero() {
            break;
        }
        mantissa = quotient;
        scale -= 1;
    }
    // Keep plain integers free of a negative scale, which would otherwise
    // render in exponent form.
    if scale < 0 {
        mantissa *= ten_to(-scale);
        scale = 0;
    }
    BigDecimal::new(mantissa, scale)
}
