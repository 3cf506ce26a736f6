//! E-CLP derived parameter computation.

pub mod eclp;
pub mod sanity;

use {
    eclp::{Constants, Derived, Params},
    number::Context,
    sanity::Sanity,
};

/// Everything computed for one set of pool parameters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Calculation {
    pub params: Params,
    pub derived: Derived,
    pub constants: Constants,
    pub sanity: Sanity,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Derivation(#[from] eclp::Error),
    #[error("failed to compute the sanity checks")]
    Sanity(#[source] number::Error),
}

impl Calculation {
    pub fn compute(params: Params, ctx: &Context) -> Result<Self, Error> {
        let derived = params.derive(ctx)?;
        let constants = derived.constants();
        let sanity = sanity::check(ctx, &params, &derived, &constants).map_err(Error::Sanity)?;
        tracing::info!(
            precision = ctx.precision(),
            warnings = sanity.warnings.len(),
            "computed derived E-CLP parameters"
        );

        Ok(Self {
            params,
            derived,
            constants,
            sanity,
        })
    }
}
