//! Exact and arbitrary-precision number handling shared by the workspace.

pub mod context;
pub mod conversions;
mod error;
pub mod fixed_point;

pub use {context::Context, error::Error};
