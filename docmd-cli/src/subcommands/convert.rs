use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    time::Instant,
};

use clap::Args as ClapArgs;
use docmd_converters_core::{Converter, GeneratorMetadata, Options, PrettyDuration, Rendered};
use docmd_converters_markdown::{Error, Processor};
use rayon::prelude::*;

use super::OutputFormat;
use crate::error;

/// Convert document payloads to Markdown
#[derive(ClapArgs, Debug)]
pub struct Args {
    /// List of JSON payload files to convert
    #[arg(conflicts_with = "stdin")]
    pub files: Vec<PathBuf>,

    /// Read a single payload from stdin
    #[arg(long, conflicts_with = "files")]
    pub stdin: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// Write `<name>.md` (or `.json`) files into this directory instead of stdout
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Backslash-escape Markdown metacharacters in plain text
    #[arg(long)]
    pub escape: bool,

    /// Font family that marks a run as code
    #[arg(long, value_name = "FAMILY")]
    pub code_font: Option<String>,

    /// Show timing information
    #[arg(long)]
    pub timings: bool,
}

pub(crate) fn build_options(escape: bool, code_font: Option<&str>) -> Options {
    let mut builder = Options::builder()
        .generator_metadata(GeneratorMetadata::new(
            env!("CARGO_BIN_NAME"),
            env!("CARGO_PKG_VERSION"),
        ))
        .escape_text(escape);
    if let Some(family) = code_font {
        builder = builder.code_font_family(family);
    }
    builder.build()
}

pub(crate) fn run(args: &Args) -> miette::Result<()> {
    if !args.stdin && args.files.is_empty() {
        return Err(miette::miette!(
            "You must pass at least one file or --stdin to convert"
        ));
    }

    let options = build_options(args.escape, args.code_font.as_deref());
    tracing::debug!(generator = %options.generator_metadata(), "converting");
    let processor = Processor::new(options);

    if args.stdin {
        let stdin = io::stdin();
        let mut reader = io::BufReader::new(stdin.lock());
        let rendered = docmd_model::parse_from_reader(&mut reader)
            .map_err(Error::from)
            .and_then(|doc| processor.convert(&doc))
            .map_err(|e| error::display(&e))?;
        return emit(args, None, &rendered);
    }

    // Each conversion owns its rendering state, so files convert independently.
    let results: Vec<(&PathBuf, Result<Rendered, Error>)> = args
        .files
        .par_iter()
        .map(|file| {
            let started = Instant::now();
            let result = docmd_model::parse_file(file)
                .map_err(Error::from)
                .and_then(|doc| processor.convert(&doc));
            if args.timings && result.is_ok() {
                eprintln!(
                    "  Converted {} in {}",
                    file.display(),
                    started.elapsed().pretty_print()
                );
            }
            (file, result)
        })
        .collect();

    let mut failures = 0;
    for (file, result) in results {
        match result {
            Ok(rendered) => emit(args, Some(file.as_path()), &rendered)?,
            Err(e) => {
                failures += 1;
                eprintln!("\nFile: {}", file.display());
                eprintln!("{:?}", error::display(&e));
            }
        }
    }

    if failures > 0 {
        return Err(miette::miette!("Failed to convert {failures} file(s)"));
    }
    Ok(())
}

fn emit(args: &Args, file: Option<&Path>, rendered: &Rendered) -> miette::Result<()> {
    let text = args
        .format
        .render(rendered)
        .map_err(|e| miette::miette!("unable to serialize output: {e}"))?;

    match (&args.output, file) {
        (Some(dir), Some(file)) => {
            let stem = file
                .file_stem()
                .ok_or_else(|| miette::miette!("invalid file name: {}", file.display()))?;
            let target = dir.join(stem).with_extension(args.format.extension());
            if target == file {
                return Err(miette::miette!(
                    "Output path cannot be the same as input path: {}",
                    file.display()
                ));
            }
            std::fs::create_dir_all(dir)
                .and_then(|()| std::fs::write(&target, text))
                .map_err(|e| miette::miette!("unable to write {}: {e}", target.display()))?;
            tracing::info!(output = %target.display(), "wrote");
        }
        (Some(_), None) | (None, _) => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| miette::miette!("unable to write to stdout: {e}"))?;
        }
    }
    Ok(())
}
