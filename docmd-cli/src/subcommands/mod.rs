pub(crate) mod convert;
pub(crate) mod fetch;
pub(crate) mod inspect;

use clap::ValueEnum;
use docmd_converters_core::Rendered;

#[derive(Debug, ValueEnum, Clone, Copy, Default)]
pub(crate) enum OutputFormat {
    /// Markdown content only
    #[default]
    Markdown,
    /// `{ "title", "content" }` JSON object
    Json,
}

impl OutputFormat {
    pub(crate) fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }

    pub(crate) fn render(self, rendered: &Rendered) -> Result<String, serde_json::Error> {
        match self {
            Self::Markdown => Ok(format!("{}\n", rendered.content)),
            Self::Json => Ok(format!("{}\n", serde_json::to_string_pretty(rendered)?)),
        }
    }
}
