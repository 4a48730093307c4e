use std::error::Error;

use miette::Diagnostic;

/// Error wrapper carrying advice for payload problems.
#[derive(Debug, Diagnostic, thiserror::Error)]
#[error("{message}")]
#[diagnostic()]
pub(crate) struct CliError {
    message: String,

    #[help]
    advice: Option<String>,
}

/// Walk the source chain looking for an ingestion error.
fn find_model_error<'e>(e: &'e (dyn Error + 'static)) -> Option<&'e docmd_model::Error> {
    let mut current = Some(e);
    while let Some(err) = current {
        if let Some(model_error) = err.downcast_ref::<docmd_model::Error>() {
            return Some(model_error);
        }
        current = err.source();
    }
    None
}

pub(crate) fn display(e: &(dyn Error + 'static)) -> miette::Report {
    let advice = find_model_error(e).and_then(|model_error| match model_error {
        docmd_model::Error::MissingBody | docmd_model::Error::Json(_) => Some(
            "expected a document JSON object with a `body.content` array".to_string(),
        ),
        docmd_model::Error::Io(_) | docmd_model::Error::File { .. } | _ => None,
    });
    miette::Report::new(CliError {
        message: e.to_string(),
        advice,
    })
}
