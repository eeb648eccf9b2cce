//! Harmony command: derives related colors from a base color.

use clap::Args;
use rand::{rngs::StdRng, SeedableRng};

use crate::cli::common::{check_count, parse_color, CliResult};
use crate::models::{harmonize, ColorFormat, HarmonyRule};

/// Derive a harmonious palette from a base color
#[derive(Debug, Clone, Args)]
pub struct HarmonyArgs {
    /// Base color as #RRGGBB
    #[arg(value_name = "HEX", allow_hyphen_values = true)]
    pub color: String,

    /// Harmony rule
    #[arg(short, long, value_enum, value_name = "RULE")]
    pub rule: HarmonyRule,

    /// Number of colors including the base
    #[arg(short, long, value_name = "N", default_value_t = 5)]
    pub count: usize,

    /// Output notation
    #[arg(short, long, value_enum, value_name = "FORMAT", default_value_t = ColorFormat::Hex)]
    pub format: ColorFormat,

    /// Seed for the random rule
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

impl HarmonyArgs {
    /// Execute the harmony command
    pub fn execute(&self) -> CliResult<()> {
        let base = parse_color(&self.color)?;
        let count = check_count(self.count)?;

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        for color in harmonize(base.rgb(), self.rule, count, &mut rng) {
            println!("{}", color.to_format(self.format));
        }

        Ok(())
    }
}
