// Export action handlers

use chrono::Local;
use std::path::PathBuf;

use crate::export::{
    default_file_name, export_collection, export_to_file, ExportError, ExportFormat,
    ExportOptions, PaletteExport,
};
use crate::tui::{AppState, ExportTarget};
use anyhow::Result;

/// Name used for the live palette in export files.
const CURRENT_PALETTE_NAME: &str = "palette";

/// Name used for the saved collection file.
const COLLECTION_NAME: &str = "saved_palettes";

/// Writer options from the `[export]` config section.
fn export_options(state: &AppState) -> ExportOptions {
    ExportOptions {
        color_format: state.config.export.css_format,
        swatch_size: state.config.export.swatch_size,
    }
}

fn write_target(state: &AppState, target: ExportTarget) -> Result<PathBuf, ExportError> {
    let options = export_options(state);
    let today = Local::now().date_naive();
    let dir = &state.config.export.output_dir;

    match target {
        ExportTarget::Current(format) => {
            let palette = PaletteExport::new(CURRENT_PALETTE_NAME, state.store.colors());
            let path = dir.join(default_file_name(&palette.name, format, today));
            export_to_file(&palette, format, &options, &path)
        }
        ExportTarget::SavedCollection => {
            let palettes: Vec<PaletteExport> =
                state.store.saved().iter().map(PaletteExport::from).collect();
            let path = dir.join(default_file_name(COLLECTION_NAME, ExportFormat::Json, today));
            export_collection(&palettes, &options, &path)
        }
    }
}

/// Handle a confirmed export choice
pub fn handle_export(state: &mut AppState, target: ExportTarget) -> Result<bool> {
    match write_target(state, target) {
        Ok(path) => state.set_status(format!("Exported to {}", path.display())),
        Err(e) => state.set_error(format!("Export failed: {e}")),
    }
    Ok(false)
}
