use std::path::{Path, PathBuf};

/// Resolve the directory the output tables are written to.
///
/// An explicit `--output` directory wins; otherwise files are saved alongside
/// the archive file. A bare file name has an empty parent, which maps to the
/// current directory.
pub fn resolve_output_dir(archive_file: &Path, output: Option<&Path>) -> PathBuf {
    if let Some(dir) = output {
        return dir.to_path_buf();
    }
    let parent = archive_file.parent().unwrap_or(Path::new(""));
    if parent.as_os_str().is_empty() { PathBuf::from(".") } else { parent.to_path_buf() }
}
