use std::f64::consts::FRAC_PI_4;

use clap::Parser;
use curves_geometry::CurveFactory;

pub const DEFAULT_COUNT: usize = 10;

/// Command-line options. Running without arguments uses the defaults.
#[derive(Debug, Clone, Parser)]
#[command(name = "curves")]
#[command(about = "Generate random curves, move the circles into a second list and sort them")]
pub struct Options {
    /// Number of random curves in the first list
    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Seed for a reproducible run (fresh entropy when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Curve parameter at which points and tangents are printed
    #[arg(short = 't', long, default_value_t = FRAC_PI_4, allow_hyphen_values = true)]
    pub param: f64,
}

impl Options {
    pub fn factory(&self) -> CurveFactory {
        match self.seed {
            Some(seed) => CurveFactory::seeded(seed),
            None => CurveFactory::from_entropy(),
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            count: DEFAULT_COUNT,
            seed: None,
            param: FRAC_PI_4,
        }
    }
}
