use std::path::PathBuf;

use thiserror::Error;

/// Failures that can stop the board from starting. Nothing after startup
/// produces one of these: filter operations are total and logo failures fall
/// back silently.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Could not read job data at {path}: {source}")]
    DataRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed job data at {path}: {source}")]
    DataParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate job id {0} in job data")]
    DuplicateJobId(u32),
}

/// A user interaction that could not be turned into a filter change. Shown
/// to the user as a one-line notice; the board state is left as it was.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InteractionError {
    #[error("Unrecognised command '{0}' (type 'help' for the list)")]
    UnknownCommand(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("No tag chip '{0}' on the visible cards")]
    NoSuchChip(String),

    #[error("No active filter '{0}'")]
    NoSuchFilter(String),

    #[error("There are no active filters")]
    NoActiveFilters,

    #[error("Tags are read-only on this board")]
    TagsReadOnly,
}
