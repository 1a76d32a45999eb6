mod cli;

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use env_logger::Env;
use log::{error, info};
use smiclean::{
    clean::clean_file, rdkit::RDKit, report::Report, vocab::Vocabulary,
    Validator,
};

fn try_main(cli: Cli) -> anyhow::Result<()> {
    let vocab = match &cli.vocab {
        Some(path) => Vocabulary::load(path)?,
        None => Vocabulary::default(),
    };
    let rdkit = RDKit::new().context("failed to import rdkit")?;
    let validator = Validator::new(rdkit, vocab);
    info!("validating against {} allowed tokens", validator.vocab().len());

    println!("Cleaning SMILES file: {}", cli.input_file.display());
    println!("Output file: {}", cli.output_file.display());

    let tally = clean_file(&cli.input_file, &cli.output_file, &validator)
        .with_context(|| {
            format!("failed to clean {}", cli.input_file.display())
        })?;
    let report = Report::new(&cli.input_file, &cli.output_file, tally);
    let mut stdout = std::io::stdout().lock();
    report.write_summary(&mut stdout)?;
    stdout.flush()?;

    if let Some(path) = &cli.report {
        report.save(path)?;
    }
    if let Some(path) = &cli.json_report {
        report.save_json(path)?;
    }

    println!("\nCleaned dataset saved to: {}", cli.output_file.display());
    if let Some(path) = &cli.report {
        println!("Detailed report saved to: {}", path.display());
    }
    if let Some(path) = &cli.json_report {
        println!("JSON report saved to: {}", path.display());
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .init();
    let cli = Cli::parse();
    if !cli.input_file.exists() {
        println!("Error: Input file {} not found", cli.input_file.display());
        std::process::exit(1);
    }
    if let Err(error) = try_main(cli) {
        let mut msg = format!("{}", error);
        for cause in error.chain().skip(1) {
            msg += &format!("\n\tCaused by: {}", cause);
        }
        error!("{}", msg);
        std::process::exit(1);
    }
}
