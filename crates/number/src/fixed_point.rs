//! Signed 38-decimal fixed point values as consumed by the E-CLP contracts.

use {
    crate::context::ten_to,
    bigdecimal::BigDecimal,
    num::BigInt,
    std::sync::LazyLock,
};

/// Decimals of the extra-precision fixed point format.
pub const XP_DECIMALS: i64 = 38;

static INT256_MAX: LazyLock<BigInt> = LazyLock::new(|| (BigInt::from(1) << 255u32) - 1);
static INT256_MIN: LazyLock<BigInt> = LazyLock::new(|| -(BigInt::from(1) << 255u32));

/// Scales a value by `10^38` and truncates the result toward zero.
pub fn to_xp(value: &BigDecimal) -> BigInt {
    scale_and_truncate(value, XP_DECIMALS)
}

/// Scales a value by `10^decimals` and truncates toward zero: the floor of
/// the scaled value for non-negative inputs and its ceiling for negative
/// ones.
pub fn scale_and_truncate(value: &BigDecimal, decimals: i64) -> BigInt {
    let (mantissa, scale) = value.as_bigint_and_exponent();
    let shift = decimals - scale;
    if shift >= 0 {
        mantissa * ten_to(shift)
    } else {
        // `BigInt` division rounds toward zero.
        mantissa / ten_to(-shift)
    }
}

/// Whether the value is representable as a signed 256-bit integer.
pub fn fits_int256(value: &BigInt) -> bool {
    *INT256_MIN <= *value && *value <= *INT256_MAX
}
