//! Post-derivation sanity checks.
//!
//! None of the checks abort the run: failures are logged and listed in the
//! report so that the constants can still be inspected.

use {
    super::eclp::{Constants, Derived, Params, Vector2},
    bigdecimal::BigDecimal,
    num::{BigInt, Signed},
    number::{Context, fixed_point},
    std::{fmt, sync::LazyLock},
};

// Tolerances of the derived parameter validation in the pool contracts.
const DERIVED_TAU_NORM_ACCURACY_XP: u128 = 100_000_000_000_000_000_000_000; // 1e23
const DERIVED_DSQ_NORM_ACCURACY_XP: u128 = 100_000_000_000_000_000_000_000; // 1e23

static ONE_XP: LazyLock<BigInt> = LazyLock::new(|| BigInt::from(10).pow(38)); // 1e38

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sanity {
    /// `sqrt(tauAlpha.x² + (tauAlpha.y·λ)²)`
    pub tau_alpha_norm: BigDecimal,
    /// `sqrt(tauBeta.x² + (tauBeta.y·λ)²)`
    pub tau_beta_norm: BigDecimal,
    /// Expected to be 1 for a normalised rotation vector.
    pub d_sq: BigDecimal,
    pub warnings: Vec<Warning>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Warning {
    /// `tau.x² + tau.y²` deviates from 1.
    TauNorm {
        bound: &'static str,
        norm_sq_xp: BigInt,
    },
    /// `c² + s²` deviates from 1.
    DSqNorm { d_sq_xp: BigInt },
    /// A scaled constant does not fit into an `int256`.
    Int256Overflow { name: &'static str, value: BigInt },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TauNorm { bound, norm_sq_xp } => write!(
                f,
                "|tau({bound})|² = {norm_sq_xp} deviates from 1e38 by more than \
                 {DERIVED_TAU_NORM_ACCURACY_XP}"
            ),
            Self::DSqNorm { d_sq_xp } => write!(
                f,
                "dSq = {d_sq_xp} deviates from 1e38 by more than {DERIVED_DSQ_NORM_ACCURACY_XP}"
            ),
            Self::Int256Overflow { name, value } => {
                write!(f, "{name} = {value} does not fit into int256")
            }
        }
    }
}

/// Runs all sanity checks on a derivation result.
pub fn check(
    ctx: &Context,
    params: &Params,
    derived: &Derived,
    constants: &Constants,
) -> Result<Sanity, number::Error> {
    let mut warnings = Vec::new();

    for (bound, tau) in [("alpha", &derived.tau_alpha), ("beta", &derived.tau_beta)] {
        let norm_sq_xp = fixed_point::to_xp(&ctx.add(&ctx.square(&tau.x), &ctx.square(&tau.y)));
        if !within(&norm_sq_xp, DERIVED_TAU_NORM_ACCURACY_XP) {
            warnings.push(Warning::TauNorm { bound, norm_sq_xp });
        }
    }

    let d_sq_xp = fixed_point::to_xp(&derived.d_sq);
    if !within(&d_sq_xp, DERIVED_DSQ_NORM_ACCURACY_XP) {
        warnings.push(Warning::DSqNorm { d_sq_xp });
    }

    for (name, value) in constants.named() {
        if !fixed_point::fits_int256(value) {
            warnings.push(Warning::Int256Overflow {
                name,
                value: value.clone(),
            });
        }
    }

    for warning in &warnings {
        tracing::warn!(%warning, "sanity check failed");
    }

    Ok(Sanity {
        tau_alpha_norm: stretched_norm(ctx, &derived.tau_alpha, &params.lambda)?,
        tau_beta_norm: stretched_norm(ctx, &derived.tau_beta, &params.lambda)?,
        d_sq: derived.d_sq.clone(),
        warnings,
    })
}

/// `sqrt(tau.x² + (tau.y·λ)²)`
fn stretched_norm(
    ctx: &Context,
    tau: &Vector2,
    lambda: &BigDecimal,
) -> Result<BigDecimal, number::Error> {
    ctx.sqrt(&ctx.add(&ctx.square(&tau.x), &ctx.square(&ctx.mul(&tau.y, lambda))))
}

fn within(value_xp: &BigInt, accuracy_xp: u128) -> bool {
    (value_xp - &*ONE_XP).abs() <= BigInt::from(accuracy_xp)
}
