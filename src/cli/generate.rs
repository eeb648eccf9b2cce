//! Generate command: prints a random palette.

use clap::Args;

use crate::cli::common::{check_count, load_config, parse_color, CliError, CliResult};
use crate::export::{render_json, PaletteExport};
use crate::models::{ColorFormat, HexColor, RgbColor};
use crate::services::PaletteStore;

/// Name used for generated palettes in JSON output.
const GENERATED_NAME: &str = "generated";

/// Generate a random palette
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Number of colors (defaults to palette.slot_count)
    #[arg(short, long, value_name = "N")]
    pub count: Option<usize>,

    /// Output notation (defaults to ui.default_format)
    #[arg(short, long, value_enum, value_name = "FORMAT")]
    pub format: Option<ColorFormat>,

    /// Seed for reproducible output
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Keep this color in the next slot (repeatable)
    #[arg(long = "lock", value_name = "HEX")]
    pub locks: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let count = check_count(self.count.unwrap_or(config.palette.slot_count))?;
        let format = self.format.unwrap_or(config.ui.default_format);

        let locks = self
            .locks
            .iter()
            .map(|text| parse_color(text))
            .collect::<CliResult<Vec<HexColor>>>()?;
        if locks.len() > count {
            return Err(CliError::validation(format!(
                "{} locked colors do not fit in {count} slots",
                locks.len()
            )));
        }

        let store = build_palette(&locks, count, self.seed)?;

        if self.json {
            let palette = PaletteExport::new(GENERATED_NAME, store.colors());
            let json = render_json(&palette, format)
                .map_err(|e| CliError::io(format!("Failed to serialize palette: {e}")))?;
            println!("{json}");
        } else {
            for slot in store.slots() {
                println!("{}", slot.value.to_format(format));
            }
        }

        Ok(())
    }
}

/// Fills `count` slots, keeping `locks` in the leading slots.
fn build_palette(locks: &[HexColor], count: usize, seed: Option<u64>) -> CliResult<PaletteStore> {
    let mut colors = locks.to_vec();
    // Placeholders; every unlocked slot is replaced by generate()
    colors.resize(count, HexColor::from_rgb(RgbColor::new(0, 0, 0)));

    let store = match seed {
        Some(seed) => PaletteStore::with_seed(colors, seed),
        None => PaletteStore::new(colors),
    };
    let mut store = store.map_err(|e| CliError::validation(e.to_string()))?;

    for index in 0..locks.len() {
        store
            .toggle_lock(index)
            .map_err(|e| CliError::validation(e.to_string()))?;
    }
    store.generate();

    Ok(store)
}
