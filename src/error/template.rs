use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Given URL: '{url}' has unresolved placeholders")]
    UnresolvedPlaceholders { url: String },
    #[error("A string: '{url}' is not valid URL")]
    InvalidUrl { url: String },
    #[error("Template file has no lines to choose from.")]
    EmptySource,
    #[error("Failed to read template line from '{path}': {source}")]
    ReadLine {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Template line {index} is out of range for '{path}'.")]
    LineOutOfRange { path: PathBuf, index: usize },
}
