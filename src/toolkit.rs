use std::fmt::{self, Display};

/// An error raised by the cheminformatics backend while parsing or writing a
/// molecule. Only the message survives; it ends up in a rejection reason
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolkitError(pub String);

impl Display for ToolkitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ToolkitError {}

/// The parse and canonicalize capabilities of a cheminformatics library
pub trait Toolkit {
    type Mol;

    /// parse `smiles` into a molecule. `Ok(None)` means the library rejected
    /// the input without raising
    fn parse(&self, smiles: &str) -> Result<Option<Self::Mol>, ToolkitError>;

    fn canonical_smiles(&self, mol: &Self::Mol) -> Result<String, ToolkitError>;
}
