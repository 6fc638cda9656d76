use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::fraction::Fraction;
use crate::input::InterpolationRequest;
use crate::interpolate::interpolate_at_zero;

/// Path that selects standard input instead of a file
pub const STDIN_PATH: &str = "-";

/// Reconstruct the secret from a parsed request
///
/// Selects the `k` numerically smallest shares, decodes them and interpolates at zero.
///
/// # Errors
/// Returns an error if selection, decoding or interpolation fails
pub fn reconstruct(request: &InterpolationRequest) -> Result<Fraction> {
    let threshold = request.threshold();
    info!(
        k = *threshold,
        available = request.len(),
        "reconstructing secret"
    );

    let points = request.select().context("Failed to select shares")?;
    debug!(
        selected = ?points.iter().map(|p| p.x().to_string()).collect::<Vec<_>>(),
        "selected shares"
    );

    let secret = interpolate_at_zero(&points, threshold).context("Failed to interpolate")?;
    Ok(secret)
}

/// Reconstruct the secret from a JSON input document
///
/// # Errors
/// Returns an error if the document is malformed or reconstruction fails
pub fn reconstruct_from_json(json: &str) -> Result<Fraction> {
    let request = InterpolationRequest::from_json(json).context("Failed to parse input")?;
    reconstruct(&request)
}

/// Reconstruct the secret from a JSON file, or from stdin when `path` is `-`
///
/// # Errors
/// Returns an error if the input cannot be read or reconstruction fails
pub fn reconstruct_file(path: &Path) -> Result<Fraction> {
    let json = if path.as_os_str() == STDIN_PATH {
        let mut buf = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut buf)
            .context("Failed to read input from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    reconstruct_from_json(&json)
}

/// Render a reconstructed secret for display
///
/// Integral values print as `Secret c = N`. Anything else means the shares were not
/// consistent and prints as `Secret c (fraction) = n / d`.
#[must_use]
pub fn render_secret(secret: &Fraction) -> String {
    match secret.to_integer() {
        Some(value) => format!("Secret c = {value}"),
        None => format!(
            "Secret c (fraction) = {} / {}",
            secret.numer(),
            secret.denom()
        ),
    }
}
