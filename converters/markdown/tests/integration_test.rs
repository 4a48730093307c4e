use std::path::{Path, PathBuf};

use docmd_converters_core::{Converter, GeneratorMetadata, Options};
use docmd_converters_markdown::Processor;

type Error = Box<dyn std::error::Error>;

fn remove_lines_trailing_whitespace(output: &str) -> String {
    output
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parses the input `.json` payload, converts to Markdown, and compares with expected output.
#[rstest::rstest]
#[tracing_test::traced_test]
fn test_fixtures(#[files("tests/fixtures/source/*.json")] path: PathBuf) -> Result<(), Error> {
    let file_name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or("Invalid fixture file name")?;
    let expected_path = Path::new("tests")
        .join("fixtures")
        .join("expected")
        .join(file_name)
        .with_extension("md");

    let doc = docmd_model::parse_file(&path)?;

    let options = Options::builder()
        .generator_metadata(GeneratorMetadata::new("docmd", "0.1.0"))
        .build();
    let processor = Processor::new(options);
    let rendered = processor.convert(&doc)?;

    let expected = std::fs::read_to_string(&expected_path)?;

    pretty_assertions::assert_eq!(
        remove_lines_trailing_whitespace(&expected),
        remove_lines_trailing_whitespace(&rendered.content),
        "Markdown output mismatch for fixture: {file_name}",
    );
    assert_eq!(rendered.title, doc.title);
    Ok(())
}

/// `write_to` emits the same content as `convert`, newline-terminated.
#[rstest::rstest]
fn test_write_to_matches_convert(
    #[files("tests/fixtures/source/*.json")] path: PathBuf,
) -> Result<(), Error> {
    let doc = docmd_model::parse_file(&path)?;
    let processor = Processor::new(Options::default());

    let mut output = Vec::new();
    processor.write_to(&doc, &mut output)?;
    let written = String::from_utf8(output)?;

    assert_eq!(written, format!("{}\n", processor.convert(&doc)?.content));
    Ok(())
}
