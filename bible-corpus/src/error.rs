//! Load-time corpus errors. All of them are fatal: the bot must not serve a partially loaded corpus.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("failed to read corpus file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Unparsable JSON or a required field (`name`, `chapters`, `chapter`, `verses`, `verse`, `text`) missing.
    #[error("corpus is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Structurally parsed but violates an invariant (duplicates, empty levels, zero numbers).
    #[error("invalid corpus: {0}")]
    Invalid(String),
}
