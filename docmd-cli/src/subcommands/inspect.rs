use std::{io::Write, path::PathBuf};

use crate::error;

/// Print the parsed document model of a payload as JSON
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Input JSON payload
    pub file: PathBuf,
}

pub(crate) fn run(args: &Args) -> miette::Result<()> {
    let doc = docmd_model::parse_file(&args.file).map_err(|e| error::display(&e))?;
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &doc)
        .map_err(|e| miette::miette!("unable to serialize document: {e}"))?;
    writeln!(stdout).map_err(|e| miette::miette!("unable to write to stdout: {e}"))?;
    Ok(())
}
