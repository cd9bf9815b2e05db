use std::io;

use thiserror::Error;

/// Errors produced while loading or writing an INI document
#[derive(Error, Debug)]
pub enum IniError {
    /// Failure of the underlying reader, file open or file write
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A logical line that is neither a comment, a section header nor a key/value pair
    #[error("syntax error at line {line}")]
    Syntax { line: usize },

    /// Input ended while a `\` continuation was still pending
    #[error("unexpected end of input in line continuation at line {line}")]
    UnexpectedEof { line: usize },
}

impl IniError {
    /// The 1-based physical line a parse error refers to
    pub fn line(&self) -> Option<usize> {
        match self {
            IniError::Io(_) => None,
            IniError::Syntax { line } | IniError::UnexpectedEof { line } => Some(*line),
        }
    }
}

pub type Result<T> = std::result::Result<T, IniError>;
