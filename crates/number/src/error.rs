use bigdecimal::BigDecimal;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("division by zero")]
    DivisionByZero,
    #[error("square root of negative number {0}")]
    NegativeSqrt(BigDecimal),
    #[error("invalid integer literal {0:?}")]
    InvalidInteger(String),
}
