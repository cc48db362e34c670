use std::path::PathBuf;

use crate::canvas::Canvas;

/// Show the native open-file chooser, filtered to the formats the canvas
/// codec handles well.
pub fn pick_open_path() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("PNG", &["png"])
        .add_filter("JPEG", &["jpg", "jpeg"])
        .add_filter("All Files", &["*"])
        .pick_file()
}

/// Show the native save-file chooser. The suggested name carries a `.png`
/// extension so the default encode format is PNG.
pub fn pick_save_path(canvas: &Canvas) -> Option<PathBuf> {
    let mut dialog = rfd::FileDialog::new()
        .add_filter("PNG", &["png"])
        .add_filter("JPEG", &["jpg", "jpeg"])
        .add_filter("All Files", &["*"]);

    dialog = match canvas.file_path() {
        Some(path) => {
            let dialog = match path.parent() {
                Some(dir) => dialog.set_directory(dir),
                None => dialog,
            };
            match path.file_name() {
                Some(name) => dialog.set_file_name(name.to_string_lossy()),
                None => dialog,
            }
        }
        None => dialog.set_file_name(format!("{}.png", canvas.file_name())),
    };

    dialog.save_file()
}
