//! Core traits and utilities for docmd document converters.
//!
//! This crate provides the shared infrastructure used by converters:
//!
//! - [`Converter`] - trait that all converters implement
//! - [`Options`] - configuration for conversion
//! - [`Rendered`] - the `{ title, content }` result of a conversion
//! - [`code`] - style heuristics that classify runs as code
//!
//! # Example
//!
//! ```
//! use docmd_converters_core::{GeneratorMetadata, Options};
//!
//! let options = Options::builder()
//!     .code_font_family("Courier New")
//!     .escape_text(true)
//!     .generator_metadata(GeneratorMetadata::new("my-converter", "1.0.0"))
//!     .build();
//! assert_eq!(options.code_font_family(), "Courier New");
//! ```

use std::io::Write;

use docmd_model::Document;
use serde::{Deserialize, Serialize};

pub mod code;

/// Font family treated as code unless configured otherwise.
pub const DEFAULT_CODE_FONT_FAMILY: &str = "Consolas";

/// Background red channel above which a run is treated as code.
pub const DEFAULT_CODE_BACKGROUND_RED_THRESHOLD: f32 = 0.9;

/// Converter options.
///
/// Use [`Options::builder()`] to construct an instance.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Options {
    generator_metadata: GeneratorMetadata,
    code_font_family: String,
    code_background_red_threshold: f32,
    escape_text: bool,
}

impl Default for Options {
    fn default() -> Self {
        OptionsBuilder::default().build()
    }
}

impl Options {
    /// Create a new builder with default values.
    #[must_use]
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Get the generator metadata.
    #[must_use]
    pub fn generator_metadata(&self) -> &GeneratorMetadata {
        &self.generator_metadata
    }

    /// Font family whose runs are classified as code.
    #[must_use]
    pub fn code_font_family(&self) -> &str {
        &self.code_font_family
    }

    /// Red channel threshold for background-shaded code runs.
    #[must_use]
    pub fn code_background_red_threshold(&self) -> f32 {
        self.code_background_red_threshold
    }

    /// Whether Markdown metacharacters in plain text are backslash-escaped.
    #[must_use]
    pub fn escape_text(&self) -> bool {
        self.escape_text
    }
}

/// Builder for [`Options`].
///
/// Use [`Options::builder()`] to create a new builder.
#[derive(Debug, Clone)]
pub struct OptionsBuilder {
    generator_metadata: GeneratorMetadata,
    code_font_family: String,
    code_background_red_threshold: f32,
    escape_text: bool,
}

impl Default for OptionsBuilder {
    fn default() -> Self {
        Self {
            generator_metadata: GeneratorMetadata::default(),
            code_font_family: DEFAULT_CODE_FONT_FAMILY.to_string(),
            code_background_red_threshold: DEFAULT_CODE_BACKGROUND_RED_THRESHOLD,
            escape_text: false,
        }
    }
}

impl OptionsBuilder {
    /// Set the generator metadata (name and version).
    #[must_use]
    pub fn generator_metadata(mut self, meta: GeneratorMetadata) -> Self {
        self.generator_metadata = meta;
        self
    }

    /// Set the font family that marks a run as code.
    #[must_use]
    pub fn code_font_family<S: Into<String>>(mut self, family: S) -> Self {
        self.code_font_family = family.into();
        self
    }

    /// Set the background red threshold that marks a run as code.
    #[must_use]
    pub fn code_background_red_threshold(mut self, threshold: f32) -> Self {
        self.code_background_red_threshold = threshold;
        self
    }

    /// Enable or disable escaping of Markdown metacharacters in plain text.
    #[must_use]
    pub fn escape_text(mut self, escape: bool) -> Self {
        self.escape_text = escape;
        self
    }

    /// Build the [`Options`] instance.
    #[must_use]
    pub fn build(self) -> Options {
        Options {
            generator_metadata: self.generator_metadata,
            code_font_family: self.code_font_family,
            code_background_red_threshold: self.code_background_red_threshold,
            escape_text: self.escape_text,
        }
    }
}

/// Output of a conversion: the document title and its rendered content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
    /// Document title, copied from the input.
    pub title: String,
    /// Rendered text with leading and trailing whitespace removed.
    pub content: String,
}

/// Extension trait for formatting [`Duration`](std::time::Duration) in human-readable form.
pub trait PrettyDuration {
    /// Returns a human-readable string representation of the duration.
    ///
    /// - Automatically selects appropriate unit (ns, µs, ms, s)
    /// - Rounds to 2 decimal places
    /// - Strips trailing zeros
    fn pretty_print(&self) -> String;
}

impl PrettyDuration for std::time::Duration {
    fn pretty_print(&self) -> String {
        let nanos = self.as_nanos();

        // f64 covers every u128 magnitude we can see here
        #[allow(clippy::cast_precision_loss)]
        let f_nanos = nanos as f64;
        let (value, unit) = match nanos {
            0..=999 => return format!("{nanos}ns"),
            1_000..=999_999 => (f_nanos / 1_000.0, "µs"),
            1_000_000..=999_999_999 => (f_nanos / 1_000_000.0, "ms"),
            _ => (f_nanos / 1_000_000_000.0, "s"),
        };
        let number = format!("{value:.2}");
        let number = number.trim_end_matches('0').trim_end_matches('.');
        format!("{number}{unit}")
    }
}

/// Generator metadata for tracking which tool produced the output.
#[derive(Debug, Default, Clone)]
#[non_exhaustive]
pub struct GeneratorMetadata {
    name: String,
    version: String,
}

impl GeneratorMetadata {
    /// Create new generator metadata.
    #[must_use]
    pub fn new<S: AsRef<str>>(name: S, version: S) -> Self {
        Self {
            name: name.as_ref().to_string(),
            version: version.as_ref().to_string(),
        }
    }

    /// Get the generator name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the generator version.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }
}

impl std::fmt::Display for GeneratorMetadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} v{}", self.name, self.version)
    }
}

/// Trait for document converters.
///
/// A converter is configuration only. Every call to [`Converter::convert`] or
/// [`Converter::write_to`] builds its own rendering state, so one converter
/// can be shared across threads and reused for any number of documents.
pub trait Converter {
    /// The error type for this converter.
    type Error;

    /// Create a new converter instance.
    fn new(options: Options) -> Self;

    /// Get the converter options.
    fn options(&self) -> &Options;

    /// Convert a document into its title and rendered content.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn convert(&self, doc: &Document) -> Result<Rendered, Self::Error>;

    /// Write the rendered content of a document to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    fn write_to<W: Write>(&self, doc: &Document, mut writer: W) -> Result<(), Self::Error>
    where
        Self::Error: From<std::io::Error>,
    {
        let rendered = self.convert(doc)?;
        tracing::debug!(
            generator = %self.options().generator_metadata(),
            title = %rendered.title,
            bytes = rendered.content.len(),
            "writing rendered document"
        );
        writer.write_all(rendered.content.as_bytes())?;
        writeln!(writer)?;
        Ok(())
    }
}
