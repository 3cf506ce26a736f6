//! JSON representation of a calculation.
//!
//! Decimals and integers are encoded as strings since they exceed the range
//! of JSON numbers.

use {
    crate::domain::{self, Calculation},
    bigdecimal::BigDecimal,
    num::BigInt,
    number::conversions::normalize,
    serde::Serialize,
    serde_with::{DisplayFromStr, serde_as},
};

impl Report {
    pub fn new(calculation: &Calculation) -> Self {
        let Calculation {
            params,
            derived,
            constants,
            sanity,
        } = calculation;

        Self {
            params: Params {
                alpha: normalize(&params.alpha),
                beta: normalize(&params.beta),
                c: normalize(&params.c),
                s: normalize(&params.s),
                lambda: normalize(&params.lambda),
            },
            derived: Derived {
                d_sq: normalize(&derived.d_sq),
                d: normalize(&derived.d),
                tau_alpha: Vector2::new(&derived.tau_alpha),
                tau_beta: Vector2::new(&derived.tau_beta),
                u: normalize(&derived.u),
                v: normalize(&derived.v),
                w: normalize(&derived.w),
                z: normalize(&derived.z),
            },
            constants: Constants {
                tau_alpha_x: constants.tau_alpha_x.clone(),
                tau_alpha_y: constants.tau_alpha_y.clone(),
                tau_beta_x: constants.tau_beta_x.clone(),
                tau_beta_y: constants.tau_beta_y.clone(),
                u: constants.u.clone(),
                v: constants.v.clone(),
                w: constants.w.clone(),
                z: constants.z.clone(),
                d_sq: constants.d_sq.clone(),
            },
            sanity: Sanity {
                tau_alpha_norm: normalize(&sanity.tau_alpha_norm),
                tau_beta_norm: normalize(&sanity.tau_beta_norm),
                d_sq: normalize(&sanity.d_sq),
                warnings: sanity.warnings.iter().map(ToString::to_string).collect(),
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    params: Params,
    derived: Derived,
    constants: Constants,
    sanity: Sanity,
}

#[serde_as]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Params {
    #[serde_as(as = "DisplayFromStr")]
    alpha: BigDecimal,
    #[serde_as(as = "DisplayFromStr")]
    beta: BigDecimal,
    #[serde_as(as = "DisplayFromStr")]
    c: BigDecimal,
    #[serde_as(as = "DisplayFromStr")]
    s: BigDecimal,
    #[serde_as(as = "DisplayFromStr")]
    lambda: BigDecimal,
}

#[serde_as]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Derived {
    #[serde_as(as = "DisplayFromStr")]
    d_sq: BigDecimal,
    #[serde_as(as = "DisplayFromStr")]
    d: BigDecimal,
    tau_alpha: Vector2,
    tau_beta: Vector2,
    #[serde_as(as = "DisplayFromStr")]
    u: BigDecimal,
    #[serde_as(as = "DisplayFromStr")]
    v: BigDecimal,
    #[serde_as(as = "DisplayFromStr")]
    w: BigDecimal,
    #[serde_as(as = "DisplayFromStr")]
    z: BigDecimal,
}

#[serde_as]
#[derive(Debug, Serialize)]
struct Vector2 {
    #[serde_as(as = "DisplayFromStr")]
    x: BigDecimal,
    #[serde_as(as = "DisplayFromStr")]
    y: BigDecimal,
}

impl Vector2 {
    fn new(vector: &domain::eclp::Vector2) -> Self {
        Self {
            x: normalize(&vector.x),
            y: normalize(&vector.y),
        }
    }
}

/// Keyed by the Solidity constant names.
#[serde_as]
#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
struct Constants {
    #[serde_as(as = "DisplayFromStr")]
    tau_alpha_x: BigInt,
    #[serde_as(as = "DisplayFromStr")]
    tau_alpha_y: BigInt,
    #[serde_as(as = "DisplayFromStr")]
    tau_beta_x: BigInt,
    #[serde_as(as = "DisplayFromStr")]
    tau_beta_y: BigInt,
    #[serde_as(as = "DisplayFromStr")]
    u: BigInt,
    #[serde_as(as = "DisplayFromStr")]
    v: BigInt,
    #[serde_as(as = "DisplayFromStr")]
    w: BigInt,
    #[serde_as(as = "DisplayFromStr")]
    z: BigInt,
    #[serde_as(as = "DisplayFromStr")]
    d_sq: BigInt,
}

#[serde_as]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Sanity {
    #[serde_as(as = "DisplayFromStr")]
    tau_alpha_norm: BigDecimal,
    #[serde_as(as = "DisplayFromStr")]
    tau_beta_norm: BigDecimal,
    #[serde_as(as = "DisplayFromStr")]
    d_sq: BigDecimal,
    warnings: Vec<String>,
}
