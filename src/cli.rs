use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    about = "Clean a SMILES dataset by dropping molecules whose canonical \
             form uses tokens outside the model vocabulary."
)]
pub struct Cli {
    /// Input SMILES file, one `SMILES [NAME]` record per line.
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,
    /// Output cleaned SMILES file.
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: PathBuf,
    /// Generate a detailed report file.
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
    /// Also write the report as JSON.
    #[arg(long, value_name = "PATH")]
    pub json_report: Option<PathBuf>,
    /// Read the allowed tokens from a JSON array of strings instead of using
    /// the built-in REINVENT vocabulary.
    #[arg(long, value_name = "PATH")]
    pub vocab: Option<PathBuf>,
}
