use std::{path::PathBuf, time::Duration};

use docmd_service::{FileSource, Service};

use super::{OutputFormat, convert::build_options};
use crate::error;

/// Render a document by identifier or URL from a directory of payloads
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Document identifier, or a document URL containing one
    pub document: String,

    /// Directory holding `<id>.json` payloads
    #[arg(long, value_name = "DIR")]
    pub source_dir: PathBuf,

    /// Seconds a rendered result stays fresh
    #[arg(long, default_value_t = 300)]
    pub max_age: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Backslash-escape Markdown metacharacters in plain text
    #[arg(long)]
    pub escape: bool,
}

pub(crate) fn run(args: &Args) -> miette::Result<()> {
    let service = Service::new(
        FileSource::new(&args.source_dir),
        build_options(args.escape, None),
    )
    .with_max_age(Duration::from_secs(args.max_age));

    let rendered = service
        .render_input(&args.document)
        .map_err(|e| error::display(&e))?;
    let text = args
        .format
        .render(&rendered)
        .map_err(|e| miette::miette!("unable to serialize output: {e}"))?;
    print!("{text}");
    Ok(())
}
