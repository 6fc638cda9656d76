// Core of the lagrange-secret binary, exposed as a library for tests and reuse

pub mod codec;
pub mod commands;
pub mod domain;
pub mod error;
pub mod fraction;
pub mod input;
pub mod interpolate;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::Error;
pub use fraction::Fraction;
