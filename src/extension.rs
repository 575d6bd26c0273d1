//! Extension labels used as aggregation keys

use std::path::Path;

/// Label for files whose name carries no suffix.
///
/// Real labels always begin with `.`, so this never collides with one.
pub const NO_EXTENSION: &str = "no extension";

/// Derive the extension label for a file path.
///
/// The label is the lowercased suffix after the last `.` of the file name,
/// including the dot. Leading dots belong to the stem, so `.bashrc` has no
/// suffix. A trailing dot (`notes.`) yields the label `"."`.
pub fn extension_label(path: &Path) -> String {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => return NO_EXTENSION.to_string(),
    };
    label_for_name(&name)
}

/// Derive the extension label from a bare file name.
pub fn label_for_name(name: &str) -> String {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    match name[stem_start..].rfind('.') {
        Some(idx) => name[stem_start + idx..].to_lowercase(),
        None => NO_EXTENSION.to_string(),
    }
}
