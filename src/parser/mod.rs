//! Loading INI text into a [`Dict`]

pub mod classifier;
pub mod line_reader;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use log::{debug, error, info};

use crate::constants::DEFAULT_SECTION;
use crate::error::{IniError, Result};
use crate::models::Dict;
use classifier::{classify, Line};
use line_reader::LogicalLines;

/// Parse a line source into a [`Dict`]
///
/// The default section always exists in the result. Parsing stops at the first
/// error and no partial document is returned.
pub fn load_reader<R: BufRead>(reader: R) -> Result<Dict> {
    let mut dict = Dict::new();
    let mut section = dict.reset_section(DEFAULT_SECTION);

    for logical in LogicalLines::new(reader) {
        let logical = logical.inspect_err(|e| error!("INI parse aborted: {}", e))?;

        match classify(&logical.text) {
            Some(Line::Comment) => {}
            Some(Line::Section(name)) => {
                section = dict.reset_section(name);
                debug!("Entering section [{}] at line {}", section, logical.line);
            }
            Some(Line::Entry { key, value }) => dict.add(&section, key, value),
            None => {
                error!("INI syntax error at line {}: {}", logical.line, logical.text);
                return Err(IniError::Syntax { line: logical.line });
            }
        }
    }

    Ok(dict)
}

/// Open and parse the file at `path`
pub fn load<P: AsRef<Path>>(path: P) -> Result<Dict> {
    let path = path.as_ref();
    info!("Loading INI file: {}", path.display());
    let file = File::open(path)?;
    load_reader(BufReader::new(file))
}

/// Parse INI text held in memory
pub fn load_str(content: &str) -> Result<Dict> {
    load_reader(content.as_bytes())
}

/// Like [`load_reader`], but panics on any error
pub fn must_load_reader<R: BufRead>(reader: R) -> Dict {
    load_reader(reader).unwrap_or_else(|e| panic!("failed to parse INI data: {}", e))
}

/// Like [`load`], but panics on any error
pub fn must_load<P: AsRef<Path>>(path: P) -> Dict {
    let path = path.as_ref();
    load(path).unwrap_or_else(|e| panic!("failed to load INI file {}: {}", path.display(), e))
}

impl FromStr for Dict {
    type Err = IniError;

    fn from_str(s: &str) -> Result<Self> {
        load_str(s)
    }
}
