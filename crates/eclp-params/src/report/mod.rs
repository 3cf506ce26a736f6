//! Rendering of a [`Calculation`] for humans and machines.

pub mod dto;

use {
    crate::domain::Calculation,
    bigdecimal::BigDecimal,
    number::conversions::normalize,
    std::fmt,
};

/// Plain text report: echoed inputs, intermediate values, Solidity constant
/// declarations and the sanity checks.
pub struct Text<'a>(pub &'a Calculation);

impl fmt::Display for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Calculation {
            params,
            derived,
            constants,
            sanity,
        } = self.0;

        writeln!(f, "=== E-CLP Derived Parameter Computation ===")?;
        writeln!(f, "alpha  = {}", Plain(&params.alpha))?;
        writeln!(f, "beta   = {}", Plain(&params.beta))?;
        writeln!(f, "c      = {}", Plain(&params.c))?;
        writeln!(f, "s      = {}", Plain(&params.s))?;
        writeln!(f, "lambda = {}", Plain(&params.lambda))?;
        writeln!(f)?;

        writeln!(f, "dSq = {}", Plain(&derived.d_sq))?;
        writeln!(f, "d   = {}", Plain(&derived.d))?;
        writeln!(f)?;

        writeln!(f, "tauAlpha.x = {}", Plain(&derived.tau_alpha.x))?;
        writeln!(f, "tauAlpha.y = {}", Plain(&derived.tau_alpha.y))?;
        writeln!(f, "tauBeta.x  = {}", Plain(&derived.tau_beta.x))?;
        writeln!(f, "tauBeta.y  = {}", Plain(&derived.tau_beta.y))?;
        writeln!(f)?;

        writeln!(f, "u = {}", Plain(&derived.u))?;
        writeln!(f, "v = {}", Plain(&derived.v))?;
        writeln!(f, "w = {}", Plain(&derived.w))?;
        writeln!(f, "z = {}", Plain(&derived.z))?;
        writeln!(f)?;

        writeln!(f, "=== Solidity Constants (38-decimal, int256) ===")?;
        writeln!(f)?;
        for (name, value) in constants.named() {
            writeln!(f, "    int256 internal constant {name:<11} = {value};")?;
        }
        writeln!(f)?;

        writeln!(f, "=== Sanity Checks ===")?;
        writeln!(f, "|tauAlpha| = {}", Plain(&sanity.tau_alpha_norm))?;
        writeln!(f, "|tauBeta|  = {}", Plain(&sanity.tau_beta_norm))?;
        writeln!(f, "dSq ~= 1?  {}", Plain(&sanity.d_sq))?;
        for warning in &sanity.warnings {
            writeln!(f, "warning: {warning}")?;
        }
        Ok(())
    }
}

/// A decimal in plain notation without trailing zeros.
struct Plain<'a>(&'a BigDecimal);

impl fmt::Display for Plain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", normalize(self.0))
    }
}
