use std::{
    collections::{BTreeSet, HashSet},
    fs::File,
    io::BufReader,
    path::Path,
};

use serde::Deserialize;

use crate::CleanError;

/// The tokens understood by the downstream REINVENT prior
pub const DEFAULT_TOKENS: [&str; 34] = [
    "o", "$", "9", "[N-]", "Cl", "[O-]", "5", "-", "s", "6", "=", "7", "O",
    "4", ")", "c", "#", "[n+]", "[nH]", "n", "%10", "1", "N", "^", "[S+]", "8",
    "F", "[N+]", "C", "(", "3", "2", "Br", "S",
];

/// The set of tokens a cleaned molecule may contain
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Vocabulary {
    tokens: HashSet<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_TOKENS)
    }
}

impl Vocabulary {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// load a vocabulary from a JSON array of token strings
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CleanError> {
        let path = path.as_ref();
        let f = File::open(path)?;
        let r: Self = serde_json::from_reader(BufReader::new(f)).map_err(
            |error| CleanError::Vocabulary {
                path: path.to_path_buf(),
                error,
            },
        )?;
        log::info!("loaded {} tokens from {}", r.len(), path.display());
        Ok(r)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// the members of `tokens` not in `self`, sorted
    pub fn unsupported<'a>(
        &self,
        tokens: impl IntoIterator<Item = &'a str>,
    ) -> BTreeSet<String> {
        tokens
            .into_iter()
            .filter(|t| !self.contains(t))
            .map(str::to_owned)
            .collect()
    }
}
