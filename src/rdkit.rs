//! RDKit, reached through an embedded Python interpreter

use pyo3::{
    prelude::PyAnyMethods, types::PyModule, Bound, Py, PyErr, PyObject,
    Python,
};

use crate::{
    toolkit::{Toolkit, ToolkitError},
    CleanError,
};

impl From<PyErr> for ToolkitError {
    fn from(e: PyErr) -> Self {
        Self(e.to_string())
    }
}

pub struct RDKit {
    /// the imported `rdkit.Chem` module
    chem: Py<PyModule>,
}

impl RDKit {
    /// import `rdkit.Chem` and silence RDKit's own logging. parse failures
    /// are tallied by the caller, so the stderr noise is only in the way
    pub fn new() -> Result<Self, CleanError> {
        Python::with_gil(|py| {
            let chem = import(py, "rdkit.Chem")?;
            import(py, "rdkit.RDLogger")?
                .call_method1("DisableLog", ("rdApp.*",))?;
            log::debug!("imported rdkit.Chem");
            Ok(Self {
                chem: chem.unbind(),
            })
        })
    }
}

fn import<'py>(
    py: Python<'py>,
    module: &str,
) -> Result<Bound<'py, PyModule>, CleanError> {
    Ok(PyModule::import_bound(py, module)?)
}

impl Toolkit for RDKit {
    type Mol = PyObject;

    fn parse(&self, smiles: &str) -> Result<Option<PyObject>, ToolkitError> {
        Python::with_gil(|py| {
            let mol = self
                .chem
                .bind(py)
                .call_method1("MolFromSmiles", (smiles,))?;
            if mol.is_none() {
                return Ok(None);
            }
            Ok(Some(mol.unbind()))
        })
    }

    fn canonical_smiles(&self, mol: &PyObject) -> Result<String, ToolkitError> {
        Python::with_gil(|py| {
            let smiles = self
                .chem
                .bind(py)
                .call_method1("MolToSmiles", (mol.clone_ref(py),))?
                .extract()?;
            Ok(smiles)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        clean::clean, validate::Rejection, vocab::Vocabulary, Validator,
    };

    use super::*;

    #[test]
    fn missing_module() {
        let got = Python::with_gil(|py| import(py, "no_such_rdkit").err());
        let Some(CleanError::Python(e)) = got else {
            panic!("expected a python error");
        };
        Python::with_gil(|py| {
            assert!(e.is_instance_of::<pyo3::exceptions::PyImportError>(py))
        });
    }

    #[test]
    #[ignore = "needs a Python environment with rdkit"]
    fn clean_twice() {
        let v = Validator::new(RDKit::new().unwrap(), Vocabulary::default());
        let mut first = Vec::new();
        let tally =
            clean("OC(=O)C acetic\nC1=CC=CC=C1\n".as_bytes(), &mut first, &v)
                .unwrap();
        assert_eq!(tally.valid, 2);
        let first = String::from_utf8(first).unwrap();
        assert_eq!(first, "CC(=O)O\tacetic\nc1ccccc1\tmol_2\n");

        let mut second = Vec::new();
        let tally = clean(first.as_bytes(), &mut second, &v).unwrap();
        assert_eq!(String::from_utf8(second).unwrap(), first);
        assert_eq!(tally.valid, 2);
        assert_eq!(tally.invalid, 0);
    }

    #[test]
    #[ignore = "needs a Python environment with rdkit"]
    fn canonical_benzene() {
        let rdkit = RDKit::new().unwrap();
        let mol = rdkit.parse("C1=CC=CC=C1").unwrap().unwrap();
        assert_eq!(rdkit.canonical_smiles(&mol).unwrap(), "c1ccccc1");
    }

    #[test]
    #[ignore = "needs a Python environment with rdkit"]
    fn unparsable() {
        let rdkit = RDKit::new().unwrap();
        assert!(rdkit.parse("not_a_molecule").unwrap().is_none());
    }

    #[test]
    #[ignore = "needs a Python environment with rdkit"]
    fn validate_with_rdkit() {
        let v = Validator::new(RDKit::new().unwrap(), Vocabulary::default());
        assert_eq!(v.validate("OC(=O)C").unwrap(), "CC(=O)O");
        assert_eq!(
            v.validate("not_a_molecule"),
            Err(Rejection::InvalidMolecule)
        );
        let Err(Rejection::UnsupportedTokens(got)) = v.validate("C[Si](C)(C)C")
        else {
            panic!("expected unsupported tokens");
        };
        assert!(got.contains("[Si]"));
    }
}
