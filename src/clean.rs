//! Line-by-line filtering of a SMILES file

use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use log::info;

use crate::{toolkit::Toolkit, CleanError, Record, Validator};

/// log a progress notice every time the line number hits a multiple of this
pub const PROGRESS_INTERVAL: usize = 1000;

/// Running counts for one cleaning pass
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tally {
    pub valid: usize,
    pub invalid: usize,
    /// rejection reason -> number of molecules rejected for it
    pub reasons: HashMap<String, usize>,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.valid + self.invalid
    }

    fn reject(&mut self, reason: String) {
        self.invalid += 1;
        *self.reasons.entry(reason).or_default() += 1;
    }
}

/// Validate every record in `input`, writing the accepted ones to `output` as
/// `canonical<TAB>name` lines. Blank lines and `#` comments are skipped
/// without being counted
pub fn clean<T, R, W>(
    input: R,
    mut output: W,
    validator: &Validator<T>,
) -> Result<Tally, CleanError>
where
    T: Toolkit,
    R: BufRead,
    W: Write,
{
    let mut tally = Tally::default();
    for (i, line) in input.lines().enumerate() {
        let line = line?;
        let line_num = i + 1;
        let Some(record) = Record::parse(&line, line_num) else {
            continue;
        };
        match validator.validate(record.smiles) {
            Ok(canon) => {
                writeln!(output, "{canon}\t{}", record.name)?;
                tally.valid += 1;
            }
            Err(reason) => tally.reject(reason.to_string()),
        }
        if line_num % PROGRESS_INTERVAL == 0 {
            info!("Processed {line_num} molecules...");
        }
    }
    output.flush()?;
    Ok(tally)
}

/// [clean] from the file at `input` into a new file at `output`, truncating
/// it if it exists
pub fn clean_file<T: Toolkit>(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    validator: &Validator<T>,
) -> Result<Tally, CleanError> {
    let r = BufReader::new(File::open(input)?);
    let w = BufWriter::new(File::create(output)?);
    clean(r, w, validator)
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;

    use crate::{toolkit::fake::FakeToolkit, vocab::Vocabulary};

    use super::*;

    fn validator() -> Validator<FakeToolkit> {
        Validator::new(FakeToolkit, Vocabulary::default())
    }

    fn run(input: &str) -> (Tally, String) {
        let mut out = Vec::new();
        let tally = clean(input.as_bytes(), &mut out, &validator()).unwrap();
        (tally, String::from_utf8(out).unwrap())
    }

    #[test]
    fn mixed() {
        let (tally, out) = run(
            "c1ccccc1 benzene\n\
             CCO\n\
             not_a_molecule junk\n\
             C[Si](C)(C)C tms\n\
             CC(=O)O acetic acid\n",
        );
        assert_eq!(out.lines().count(), 3);
        assert_eq!(
            out,
            "c1ccccc1\tbenzene\nCCO\tmol_2\nCC(=O)O\tacetic acid\n"
        );
        assert_eq!(tally.valid, 3);
        assert_eq!(tally.invalid, 2);
        assert_eq!(tally.reasons["Invalid RDKit-equivalent molecule"], 1);
        assert_eq!(tally.reasons[r#"Unsupported tokens: {"[Si]"}"#], 1);
    }

    #[test]
    fn skips_blank_and_comments() {
        let (tally, out) = run("# header\n\n   \nCCO ethanol\n  # indented\n");
        assert_eq!(tally.total(), 1);
        assert_eq!(out, "CCO\tethanol\n");
    }

    #[test]
    fn default_name_uses_line_number() {
        let (_, out) = run("# comment\n\nCCO\n");
        assert_eq!(out, "CCO\tmol_3\n");
    }

    #[test]
    fn same_reason_tallied_once() {
        let (tally, _) = run("C[Si]C\n[Si]\nfoo_bar\n");
        assert_eq!(tally.invalid, 3);
        assert_eq!(tally.reasons.len(), 2);
        assert_eq!(tally.reasons[r#"Unsupported tokens: {"[Si]"}"#], 2);
    }

    #[test]
    fn toolkit_error_does_not_stop_run() {
        let (tally, out) = run("CCO\nC!C bad\nc1ccccc1 benzene\n");
        assert_eq!(tally.valid, 2);
        assert_eq!(tally.invalid, 1);
        assert_eq!(tally.reasons["Error: kekulization exploded"], 1);
        assert_eq!(out, "CCO\tmol_1\nc1ccccc1\tbenzene\n");
    }

    #[test]
    fn rerun_on_own_output() {
        let (first, out) = run("c1ccccc1 benzene\nCCO\nC[Si]C\nCC#N nitrile\n");
        assert_eq!(first.valid, 3);
        let (second, again) = run(&out);
        assert_eq!(again, out);
        assert_eq!(second.valid, 3);
        assert_eq!(second.invalid, 0);
    }

    #[test]
    fn files() {
        let dir = std::env::temp_dir();
        let output = dir.join("smiclean-clean-files.smi");
        let tally =
            clean_file("testfiles/sample.smi", &output, &validator()).unwrap();
        assert_eq!(tally.valid, 3);
        assert_eq!(tally.invalid, 2);
        let got = read_to_string(&output).unwrap();
        assert_eq!(got.lines().count(), 3);
        std::fs::remove_file(output).unwrap();
    }

    #[test]
    fn missing_input() {
        let output = std::env::temp_dir().join("smiclean-missing-input.smi");
        let err = clean_file("testfiles/nope.smi", &output, &validator());
        assert!(matches!(err, Err(CleanError::Io(_))));
    }
}
