//! Derivation of the Gyroscope E-CLP derived parameters.
//!
//! An E-CLP pool is configured with five base parameters: the price bounds
//! `alpha` and `beta`, the rotation `(c, s)` of the ellipse and its stretch
//! factor `lambda`. The pool contracts additionally expect a set of derived
//! parameters that are too expensive to compute on chain: the points
//! `tau(alpha)` and `tau(beta)` where the price bounds meet the boundary of
//! the curve, the shape coefficients `u`, `v`, `w`, `z` and `dSq = c² + s²`.
//! They are handed over as signed 38-decimal fixed point integers.
//!
//! Every step is evaluated with a [`Context`], so each intermediate result is
//! rounded to the context precision in the same order as the reference
//! computation.

use {
    bigdecimal::BigDecimal,
    num::BigInt,
    number::{Context, fixed_point},
};

/// E-CLP pool parameters (alpha, beta, c, s, lambda).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Params {
    /// Lower price bound, the price of token0 in units of token1.
    pub alpha: BigDecimal,
    /// Upper price bound.
    pub beta: BigDecimal,
    /// Cosine of the rotation angle.
    pub c: BigDecimal,
    /// Sine of the rotation angle.
    pub s: BigDecimal,
    /// Stretch factor of the ellipse.
    pub lambda: BigDecimal,
}

/// Two-dimensional vector used in E-CLP calculations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vector2 {
    pub x: BigDecimal,
    pub y: BigDecimal,
}

impl Vector2 {
    pub fn new(x: BigDecimal, y: BigDecimal) -> Self {
        Self { x, y }
    }
}

/// Derived E-CLP parameters at full context precision.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Derived {
    pub d_sq: BigDecimal,
    /// `sqrt(dSq)`, only needed to normalise the rotation vector.
    pub d: BigDecimal,
    pub tau_alpha: Vector2,
    pub tau_beta: Vector2,
    pub u: BigDecimal,
    pub v: BigDecimal,
    pub w: BigDecimal,
    pub z: BigDecimal,
}

/// Derived parameters scaled by `10^38` and truncated toward zero, as they
/// are passed to the pool contracts.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Constants {
    pub tau_alpha_x: BigInt,
    pub tau_alpha_y: BigInt,
    pub tau_beta_x: BigInt,
    pub tau_beta_y: BigInt,
    pub u: BigInt,
    pub v: BigInt,
    pub w: BigInt,
    pub z: BigInt,
    pub d_sq: BigInt,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to normalise the rotation vector (c, s)")]
    Rotation(#[source] number::Error),
    #[error("failed to compute tau({0})")]
    Tau(&'static str, #[source] number::Error),
}

impl Params {
    /// Computes the derived parameters.
    pub fn derive(&self, ctx: &Context) -> Result<Derived, Error> {
        let d_sq = ctx.add(&ctx.square(&self.c), &ctx.square(&self.s));
        let d = ctx.sqrt(&d_sq).map_err(Error::Rotation)?;
        tracing::debug!(%d_sq, %d, "normalised rotation vector");

        let tau_alpha = self
            .tau(ctx, &self.alpha, &d)
            .map_err(|err| Error::Tau("alpha", err))?;
        let tau_beta = self
            .tau(ctx, &self.beta, &d)
            .map_err(|err| Error::Tau("beta", err))?;

        let sc = ctx.mul(&self.s, &self.c);
        let s_sq = ctx.mul(&self.s, &self.s);
        let c_sq = ctx.mul(&self.c, &self.c);

        let u = ctx.mul(&sc, &ctx.sub(&tau_beta.x, &tau_alpha.x));
        let v = ctx.add(
            &ctx.mul(&s_sq, &tau_beta.y),
            &ctx.mul(&c_sq, &tau_alpha.y),
        );
        let w = ctx.mul(&sc, &ctx.sub(&tau_beta.y, &tau_alpha.y));
        let z = ctx.add(
            &ctx.mul(&c_sq, &tau_beta.x),
            &ctx.mul(&s_sq, &tau_alpha.x),
        );

        Ok(Derived {
            d_sq,
            d,
            tau_alpha,
            tau_beta,
            u,
            v,
            w,
            z,
        })
    }

    /// The point on the curve boundary for the price bound `price`:
    ///
    /// ```text
    /// dFactor = 1 / sqrt((c/d + p·s/d)² / λ² + (p·c/d − s/d)²)
    /// tau.x   = (p·c − s) · dFactor
    /// tau.y   = (c + s·p) · dFactor / λ
    /// ```
    fn tau(
        &self,
        ctx: &Context,
        price: &BigDecimal,
        d: &BigDecimal,
    ) -> Result<Vector2, number::Error> {
        let c_over_d = ctx.div(&self.c, d)?;
        let s_over_d = ctx.div(&self.s, d)?;

        let term1 = ctx.div(
            &ctx.square(&ctx.add(&c_over_d, &ctx.mul(price, &s_over_d))),
            &ctx.square(&self.lambda),
        )?;
        let term2 = ctx.square(&ctx.sub(&ctx.mul(price, &c_over_d), &s_over_d));
        let d_factor = ctx.div(&BigDecimal::from(1), &ctx.sqrt(&ctx.add(&term1, &term2))?)?;

        let x = ctx.mul(&ctx.sub(&ctx.mul(price, &self.c), &self.s), &d_factor);
        let y = ctx.div(
            &ctx.mul(&ctx.add(&self.c, &ctx.mul(&self.s, price)), &d_factor),
            &self.lambda,
        )?;

        Ok(Vector2::new(x, y))
    }
}

impl Derived {
    /// Converts the derived parameters into 38-decimal fixed point integers.
    pub fn constants(&self) -> Constants {
        Constants {
            tau_alpha_x: fixed_point::to_xp(&self.tau_alpha.x),
            tau_alpha_y: fixed_point::to_xp(&self.tau_alpha.y),
            tau_beta_x: fixed_point::to_xp(&self.tau_beta.x),
            tau_beta_y: fixed_point::to_xp(&self.tau_beta.y),
            u: fixed_point::to_xp(&self.u),
            v: fixed_point::to_xp(&self.v),
            w: fixed_point::to_xp(&self.w),
            z: fixed_point::to_xp(&self.z),
            d_sq: fixed_point::to_xp(&self.d_sq),
        }
    }
}

impl Constants {
    /// The constants in declaration order, keyed by their Solidity names.
    pub fn named(&self) -> [(&'static str, &BigInt); 9] {
        [
            ("TAU_ALPHA_X", &self.tau_alpha_x),
            ("TAU_ALPHA_Y", &self.tau_alpha_y),
            ("TAU_BETA_X", &self.tau_beta_x),
            ("TAU_BETA_Y", &self.tau_beta_y),
            ("U", &self.u),
            ("V", &self.v),
            ("W", &self.w),
            ("Z", &self.z),
            ("D_SQ", &self.d_sq),
        ]
    }
}
