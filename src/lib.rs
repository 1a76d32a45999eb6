// main idea is to canonicalize each SMILES with rdkit (MolToSmiles), split the
// canonical string into tokens, and keep only the molecules whose tokens all
// appear in the vocabulary of the downstream model
use std::{
    borrow::Cow,
    fmt::{self, Display},
    io,
    path::PathBuf,
};

use pyo3::PyErr;

pub mod clean;
pub mod rdkit;
pub mod report;
pub mod tokenizer;
pub mod toolkit;
pub mod validate;
pub mod vocab;

pub use validate::Validator;

#[derive(Debug)]
pub enum CleanError {
    Io(io::Error),
    Python(PyErr),
    Json(serde_json::Error),
    Vocabulary {
        path: PathBuf,
        error: serde_json::Error,
    },
}

impl Display for CleanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanError::Io(e) => write!(f, "i/o error: {e}"),
            CleanError::Python(e) => write!(f, "python error: {e}"),
            CleanError::Json(e) => write!(f, "json error: {e}"),
            CleanError::Vocabulary { path, error } => {
                write!(f, "invalid vocabulary {}: {error}", path.display())
            }
        }
    }
}

impl std::error::Error for CleanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CleanError::Io(e) => Some(e),
            CleanError::Python(e) => Some(e),
            CleanError::Json(e) => Some(e),
            CleanError::Vocabulary { error, .. } => Some(error),
        }
    }
}

impl From<io::Error> for CleanError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<PyErr> for CleanError {
    fn from(e: PyErr) -> Self {
        Self::Python(e)
    }
}

impl From<serde_json::Error> for CleanError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// One line of an input SMILES file
#[derive(Debug, PartialEq)]
pub struct Record<'a> {
    pub smiles: &'a str,
    pub name: Cow<'a, str>,
}

impl<'a> Record<'a> {
    /// split `line` into a SMILES string and an optional name, separated by
    /// the first run of whitespace. unnamed records are called
    /// `mol_<line_num>`. returns `None` for blank lines and `#` comments
    pub fn parse(line: &'a str, line_num: usize) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        let (smiles, name) = match line.split_once(char::is_whitespace) {
            Some((smiles, rest)) => (smiles, Cow::Borrowed(rest.trim_start())),
            None => (line, Cow::Owned(format!("mol_{line_num}"))),
        };
        Some(Self { smiles, name })
    }
}
