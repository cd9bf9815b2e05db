//! Read, query, modify and write INI-style configuration files
//!
//! Section names and keys are case-insensitive and stored lowercase; values are
//! kept as raw strings and converted by the typed accessors on demand.
//!
//! ```
//! let mut dict = inistore::load_str("[Server]\nPort = 8080\n").unwrap();
//! assert_eq!(dict.get_int("server", "port"), Some(8080));
//!
//! dict.set_bool("server", "tls", true);
//! assert_eq!(dict.get_string("server", "tls"), Some("true"));
//! ```

pub mod constants;
pub mod error;
pub mod generator;
pub mod models;
pub mod parser;
pub mod utils;

// Re-export the document types and entry points for easier access
pub use error::{IniError, Result};
pub use generator::write;
pub use models::{Dict, Section};
pub use parser::{load, load_reader, load_str, must_load, must_load_reader};
