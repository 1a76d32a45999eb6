use std::{
    collections::BTreeSet,
    fmt::{self, Display},
};

use crate::{
    tokenizer::tokenize,
    toolkit::{Toolkit, ToolkitError},
    vocab::Vocabulary,
};

/// Why a molecule was dropped. The [Display] form is the key reasons are
/// tallied under in the report, so it has to be stable across runs
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// the toolkit could not build a molecule from the input
    InvalidMolecule,
    /// the canonical SMILES has tokens outside the vocabulary
    UnsupportedTokens(BTreeSet<String>),
    /// the toolkit raised while parsing or canonicalizing
    Error(String),
}

impl Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::InvalidMolecule => {
                write!(f, "Invalid RDKit-equivalent molecule")
            }
            Rejection::UnsupportedTokens(tokens) => {
                write!(f, "Unsupported tokens: {tokens:?}")
            }
            Rejection::Error(msg) => write!(f, "Error: {msg}"),
        }
    }
}

impl From<ToolkitError> for Rejection {
    fn from(e: ToolkitError) -> Self {
        Self::Error(e.0)
    }
}

pub struct Validator<T> {
    toolkit: T,
    vocab: Vocabulary,
}

impl<T: Toolkit> Validator<T> {
    pub fn new(toolkit: T, vocab: Vocabulary) -> Self {
        Self { toolkit, vocab }
    }

    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// canonicalize `smiles` and return the canonical form if every one of
    /// its tokens is in the vocabulary
    pub fn validate(&self, smiles: &str) -> Result<String, Rejection> {
        let Some(mol) = self.toolkit.parse(smiles)? else {
            return Err(Rejection::InvalidMolecule);
        };
        let canon = self.toolkit.canonical_smiles(&mol)?;
        let unsupported = self.vocab.unsupported(tokenize(&canon));
        if !unsupported.is_empty() {
            return Err(Rejection::UnsupportedTokens(unsupported));
        }
        Ok(canon)
    }
}
