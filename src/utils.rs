use std::ffi::OsStr;
use std::path::Path;

/// Returns the fence tag for a file: the characters after the last `.` in its
/// name, or the empty string when there is no extension.
pub fn extension_tag(path: &Path) -> &str {
    path.extension().and_then(OsStr::to_str).unwrap_or("")
}

/// Derives the project name from the root directory's file name.
pub fn project_name(project_root: &Path) -> &str {
    project_root
        .file_name()
        .and_then(OsStr::to_str)
        .unwrap_or("Unknown")
}

/// Expresses `path` relative to the project root, falling back to the path
/// itself when it lies outside the root.
pub fn relative_path<'a>(path: &'a Path, project_root: &Path) -> &'a Path {
    path.strip_prefix(project_root).unwrap_or(path)
}
