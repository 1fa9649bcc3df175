//! Interactive file-picker fallback for zero-argument runs.

use anyhow::Result;
use log::info;
use std::path::{Path, PathBuf};

use crate::app_controller::Controller;
use crate::errors::AppError;

/// Run the picker-driven pipeline.
///
/// Dismissing the input picker cancels the run ([`AppError::UserCancelled`],
/// clean exit, nothing written). Dismissing the folder picker falls back to
/// the input's parent directory.
pub fn run_interactive() -> Result<()> {
    let Some(input_path) = pick_input_file() else {
        info!("No file selected");
        return Err(AppError::UserCancelled.into());
    };

    let output_dir = pick_output_dir(&input_path)
        .or_else(|| input_path.parent().map(Path::to_path_buf));

    let controller = Controller::new();
    let output_path = controller.run(&input_path, output_dir.as_deref())?;

    let _ = rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Info)
        .set_title("Word Frequency")
        .set_description(format!("Saved: {}", output_path.display()))
        .set_buttons(rfd::MessageButtons::Ok)
        .show();

    Ok(())
}

fn pick_input_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Select subtitle file")
        .add_filter("Subtitle files", &["srt", "ass"])
        .add_filter("All files", &["*"])
        .pick_file()
}

fn pick_output_dir(input_path: &Path) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new().set_title("Select output folder");
    if let Some(parent) = input_path.parent() {
        dialog = dialog.set_directory(parent);
    }
    dialog.pick_folder()
}
