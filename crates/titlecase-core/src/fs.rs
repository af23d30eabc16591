use std::fs;
use std::io;
use std::path::Path;

#[cfg(unix)]
const IN_PLACE_MODE: u32 = 0o644;

/// Truncates `path` and writes `content` verbatim. Not atomic: a failure
/// midway leaves the file partially written.
pub fn write_in_place(path: &Path, content: &str) -> io::Result<()> {
    fs::write(path, content)?;
    reset_permissions(path)
}

#[cfg(unix)]
fn reset_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(IN_PLACE_MODE))
}

#[cfg(not(unix))]
fn reset_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}
