use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Create or truncate `path` and write `content` in full
///
/// `mode` only applies to newly created files on Unix; other platforms use
/// their default permissions.
pub fn write_file(path: &Path, content: &[u8], mode: u32) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    let mut file = options.open(path)?;
    file.write_all(content)?;
    file.flush()
}
