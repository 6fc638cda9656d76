//! Domain types for secret reconstruction
//!
//! This module contains validated newtypes used at the boundary between raw input and
//! the interpolation core:
//! - [`Base`] - Numeric base of a share value (2..=36)
//! - [`Threshold`] - Number of shares required for reconstruction (k >= 1)
//! - [`ShareId`] - Numerically ordered share identifier
//! - [`Point`] - An (x, y) point on the secret polynomial

mod base;
mod point;
mod share_id;
mod threshold;

pub use base::Base;
pub use point::Point;
pub use share_id::ShareId;
pub use threshold::Threshold;
