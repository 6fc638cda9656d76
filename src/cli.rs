use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "lagrange-secret")]
#[command(about = "Reconstruct a Shamir secret from threshold shares by exact Lagrange interpolation")]
pub struct Cli {
    /// JSON file with `keys.k` and the share records ("-" reads stdin)
    #[arg(default_value = "input.json")]
    pub input: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Log filter implied by the verbosity flags
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
