//! Lagrange interpolation evaluated at x = 0
//!
//! For k points with distinct x-coordinates there is exactly one polynomial P of
//! degree < k through all of them. Its constant term is
//!
//! ```text
//! P(0) = Σ_i y_i · L_i(0),   L_i(0) = Π_{j≠i} (−x_j) / (x_i − x_j)
//! ```
//!
//! Every term is computed with [`Fraction`] arithmetic, so the result is exact.

use std::collections::HashSet;

use num_traits::{One, Zero};
use tracing::trace;

use crate::domain::{Point, Threshold};
use crate::error::{Error, Result};
use crate::fraction::Fraction;

/// Evaluates at zero the polynomial through the first `k` points
///
/// Only `points[..k]` participate; choosing which points come first is the caller's
/// job. The shares are assumed to be consistent. An inconsistent set yields a wrong
/// integer or a non-integral fraction and is not detected here.
///
/// # Errors
/// - [`Error::MalformedInput`] if fewer than `k` points are given
/// - [`Error::DuplicateX`] if two of the first `k` points share an x-coordinate
///
/// # Examples
///
/// ```rust
/// use lagrange_secret::domain::{Point, Threshold};
/// use lagrange_secret::interpolate::interpolate_at_zero;
/// use num_bigint::BigInt;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // P(x) = 7 + 2x
/// let points = [Point::new(1, 9), Point::new(2, 11)];
/// let secret = interpolate_at_zero(&points, Threshold::new(2)?)?;
/// assert_eq!(secret.to_integer(), Some(BigInt::from(7)));
/// # Ok(())
/// # }
/// ```
pub fn interpolate_at_zero(points: &[Point], k: Threshold) -> Result<Fraction> {
    let k = *k;
    if points.len() < k {
        return Err(Error::malformed(format!(
            "not enough points (have {}, need {k})",
            points.len()
        )));
    }
    let selected = &points[..k];

    let mut seen = HashSet::with_capacity(k);
    if let Some(dup) = selected.iter().find(|p| !seen.insert(p.x())) {
        return Err(Error::DuplicateX(dup.x().clone()));
    }

    selected
        .iter()
        .enumerate()
        .try_fold(Fraction::zero(), |sum, (i, point)| {
            let basis = basis_at_zero(selected, i)?;
            trace!(x = %point.x(), basis = %basis, "lagrange basis");
            Ok(sum + basis * Fraction::from(point.y().clone()))
        })
}

/// L_i(0) for the point at index `i`
fn basis_at_zero(points: &[Point], i: usize) -> Result<Fraction> {
    let xi = points[i].x();

    points
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .try_fold(Fraction::one(), |basis, (_, other)| {
            let xj = other.x();
            let factor = Fraction::reduce(-xj, xi - xj)?;
            Ok(basis * factor)
        })
}
