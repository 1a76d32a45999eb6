//! Summaries of a cleaning pass, for the console and for report files

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use serde::Serialize;

use crate::{clean::Tally, CleanError};

#[derive(Debug, PartialEq, Serialize)]
pub struct ReasonCount<'a> {
    pub reason: &'a str,
    pub count: usize,
}

pub struct Report {
    pub input: PathBuf,
    pub output: PathBuf,
    pub tally: Tally,
}

/// The JSON form of a [Report]
#[derive(Serialize)]
struct JsonReport<'a> {
    input: &'a Path,
    output: &'a Path,
    total: usize,
    valid: usize,
    invalid: usize,
    success_rate: Option<f64>,
    reasons: Vec<ReasonCount<'a>>,
}

impl Report {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        tally: Tally,
    ) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            tally,
        }
    }

    /// percentage of processed records that were kept, or `None` if nothing
    /// was processed
    pub fn success_rate(&self) -> Option<f64> {
        match self.tally.total() {
            0 => None,
            n => Some(self.tally.valid as f64 / n as f64 * 100.0),
        }
    }

    /// rejection reasons, most common first. ties are ordered by reason so
    /// the listing is the same from run to run
    pub fn reasons(&self) -> Vec<ReasonCount<'_>> {
        let mut ret: Vec<_> = self
            .tally
            .reasons
            .iter()
            .map(|(reason, &count)| ReasonCount {
                reason: reason.as_str(),
                count,
            })
            .collect();
        ret.sort_by(|a, b| b.count.cmp(&a.count).then(a.reason.cmp(b.reason)));
        ret
    }

    fn write_counts(&self, w: &mut impl Write) -> io::Result<()> {
        writeln!(w, "Total processed: {}", self.tally.total())?;
        writeln!(w, "Valid molecules: {}", self.tally.valid)?;
        writeln!(w, "Invalid molecules: {}", self.tally.invalid)?;
        match self.success_rate() {
            Some(rate) => writeln!(w, "Success rate: {rate:.1}%"),
            None => writeln!(w, "Success rate: n/a (no records processed)"),
        }
    }

    fn write_reasons(&self, w: &mut impl Write) -> io::Result<()> {
        for ReasonCount { reason, count } in self.reasons() {
            writeln!(w, "  {count:5} - {reason}")?;
        }
        Ok(())
    }

    /// the console summary printed at the end of a run
    pub fn write_summary(&self, w: &mut impl Write) -> io::Result<()> {
        writeln!(w, "\n=== CLEANING REPORT ===")?;
        self.write_counts(w)?;
        if !self.tally.reasons.is_empty() {
            writeln!(w, "\nInvalid molecule reasons:")?;
            self.write_reasons(w)?;
        }
        Ok(())
    }

    /// the standalone text report, which also records the file paths
    pub fn write_detailed(&self, w: &mut impl Write) -> io::Result<()> {
        writeln!(w, "SMILES Cleaning Report")?;
        writeln!(w, "{}\n", "=".repeat(50))?;
        writeln!(w, "Input file: {}", self.input.display())?;
        writeln!(w, "Output file: {}", self.output.display())?;
        self.write_counts(w)?;
        if !self.tally.reasons.is_empty() {
            writeln!(w, "\nInvalid molecule breakdown:")?;
            self.write_reasons(w)?;
        }
        Ok(())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CleanError> {
        let mut w = BufWriter::new(File::create(path)?);
        self.write_detailed(&mut w)?;
        w.flush()?;
        Ok(())
    }

    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), CleanError> {
        let report = JsonReport {
            input: &self.input,
            output: &self.output,
            total: self.tally.total(),
            valid: self.tally.valid,
            invalid: self.tally.invalid,
            success_rate: self.success_rate(),
            reasons: self.reasons(),
        };
        let mut w = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut w, &report)?;
        writeln!(w)?;
        w.flush()?;
        Ok(())
    }
}
