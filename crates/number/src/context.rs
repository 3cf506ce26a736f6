//! Decimal arithmetic carried out to a fixed number of significant digits.
//!
//! Each operation computes either the exact result or enough digits of it
//! together with a flag recording whether anything non-zero was discarded,
//! and then rounds half-even to the context precision. Results are therefore
//! correctly rounded and do not depend on how the operands happen to be
//! represented (trailing zeros, scale).

use {
    crate::error::Error,
    bigdecimal::BigDecimal,
    num::{BigInt, Integer, Signed, Zero},
    std::{cmp::Ordering, num::NonZeroU32},
};

/// Extra digits computed past the precision before rounding a quotient or a
/// square root.
const GUARD_DIGITS: i64 = 2;

/// Arbitrary-precision decimal context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Context {
    precision: NonZeroU32,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            precision: NonZeroU32::new(Self::DEFAULT_PRECISION).unwrap_or(NonZeroU32::MIN),
        }
    }
}

impl Context {
    /// Significant digits used when nothing else is configured.
    pub const DEFAULT_PRECISION: u32 = 200;

    pub fn new(precision: NonZeroU32) -> Self {
        Self { precision }
    }

    /// Number of significant decimal digits results are rounded to.
    pub fn precision(&self) -> u32 {
        self.precision.get()
    }

    /// Rounds a value half-even to the context precision.
    pub fn round(&self, value: &BigDecimal) -> BigDecimal {
        let (mantissa, scale) = value.as_bigint_and_exponent();
        self.round_parts(mantissa, scale, false)
    }

    pub fn add(&self, a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
        self.round(&(a + b))
    }

    pub fn sub(&self, a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
        self.round(&(a - b))
    }

    pub fn mul(&self, a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
        self.round(&(a * b))
    }

    pub fn square(&self, a: &BigDecimal) -> BigDecimal {
        self.mul(a, a)
    }

    /// Correctly rounded quotient `numerator / denominator`.
    pub fn div(&self, numerator: &BigDecimal, denominator: &BigDecimal) -> Result<BigDecimal, Error> {
        let (dividend, dividend_scale) = numerator.as_bigint_and_exponent();
        let (divisor, divisor_scale) = denominator.as_bigint_and_exponent();
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if dividend.is_zero() {
            return Ok(BigDecimal::new(BigInt::zero(), dividend_scale - divisor_scale));
        }

        // Shift the dividend so the integer quotient carries the guard digits.
        let shift = (self.working_digits() + digits(&divisor) - digits(&dividend)).max(0);
        let (quotient, remainder) = (dividend * ten_to(shift)).div_rem(&divisor);

        Ok(self.round_parts(
            quotient,
            dividend_scale - divisor_scale + shift,
            !remainder.is_zero(),
        ))
    }

    /// Correctly rounded square root.
    pub fn sqrt(&self, value: &BigDecimal) -> Result<BigDecimal, Error> {
        let (radicand, scale) = value.as_bigint_and_exponent();
        if radicand.is_negative() {
            return Err(Error::NegativeSqrt(value.clone()));
        }
        if radicand.is_zero() {
            return Ok(BigDecimal::new(BigInt::zero(), scale / 2));
        }

        // The shifted radicand needs an even scale so that its root has an
        // integral one.
        let mut shift = (2 * self.working_digits() - digits(&radicand)).max(0);
        if (scale + shift).is_odd() {
            shift += 1;
        }
        let radicand = radicand * ten_to(shift);
        let root = radicand.sqrt();
        let exact = &root * &root == radicand;

        Ok(self.round_parts(root, (scale + shift) / 2, !exact))
    }

    fn working_digits(&self) -> i64 {
        i64::from(self.precision.get()) + GUARD_DIGITS
    }

    /// Rounds `mantissa * 10^-scale` half-even to the context precision.
    /// `inexact` records that the true value has further non-zero digits
    /// beyond `mantissa`, which breaks exact ties upwards.
    fn round_parts(&self, mantissa: BigInt, scale: i64, inexact: bool) -> BigDecimal {
        let precision = i64::from(self.precision.get());
        let excess = digits(&mantissa) - precision;
        if excess <= 0 {
            return BigDecimal::new(mantissa, scale);
        }

        let negative = mantissa.is_negative();
        let divisor = ten_to(excess);
        let (mut kept, dropped) = mantissa.abs().div_rem(&divisor);
        let half = &divisor / 2u32;
        let round_up = match dropped.cmp(&half) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => inexact || kept.is_odd(),
        };

        let mut scale = scale - excess;
        if round_up {
            kept += 1u32;
            // 99..9 carried into an extra digit
            if digits(&kept) > precision {
                kept /= 10u32;
                scale -= 1;
            }
        }
        if negative {
            kept = -kept;
        }
        BigDecimal::new(kept, scale)
    }
}

/// Number of decimal digits in the magnitude of `value` (1 for zero).
pub(crate) fn digits(value: &BigInt) -> i64 {
    i64::try_from(value.magnitude().to_string().len()).unwrap_or(i64::MAX)
}

/// `10^exponent` for a non-negative exponent.
pub(crate) fn ten_to(exponent: i64) -> BigInt {
    debug_assert!(exponent >= 0, "negative power of ten");
    num::pow(BigInt::from(10), usize::try_from(exponent).unwrap_or_default())
}
