pub mod domain;
pub mod infra;
pub mod report;
mod run;
#[cfg(test)]
mod tests;

pub use run::{run, start};
