//! Rendering a [`Dict`] back to INI text
//!
//! Output is lossy: comments, source ordering, quoting and casing are gone.
//! Only lowercase names and raw values survive.

use std::fmt;
use std::path::Path;

use log::info;

use crate::constants::{DEFAULT_SECTION, FILE_PERMISSION};
use crate::error::Result;
use crate::models::{Dict, Section};
use crate::utils::file::write_file;

impl Dict {
    /// Render the document as INI text
    ///
    /// Every section is followed by one blank line. The default section gets
    /// no header and always comes first. The order of the named sections and
    /// of keys is unspecified.
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Dict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Headerless keys must precede every header to reparse into the default section
        if let Some(items) = self.section(DEFAULT_SECTION) {
            write_items(f, items)?;
        }
        for (section, items) in self.iter().filter(|(name, _)| !name.is_empty()) {
            writeln!(f, "[{}]", section)?;
            write_items(f, items)?;
        }
        Ok(())
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &Section) -> fmt::Result {
    for (key, value) in items {
        writeln!(f, "{} = {}", key, value)?;
    }
    writeln!(f)
}

/// Serialize `dict` and write it to `path`, creating or truncating the file
pub fn write<P: AsRef<Path>>(path: P, dict: &Dict) -> Result<()> {
    let path = path.as_ref();
    info!("Writing INI file: {}", path.display());
    write_file(path, dict.format().as_bytes(), FILE_PERMISSION)?;
    Ok(())
}
