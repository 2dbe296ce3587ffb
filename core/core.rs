pub mod file_finder;
pub mod processor;
pub mod stripper;

pub use file_finder::{CliArgs, Command, CompletionArgs, DecommentArgs, find_files};

pub use processor::{ProcessedFileResult, process_files};
pub use stripper::{StripError, find_comments, remove_matches, strip_comments};
pub use stripper::rules::{CommentRule, ExtensionClass, classify_extension, rule_for_extension};

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    #[error("Path not found: {path}")]
    PathNotFound { path: PathBuf },

    #[error("Cannot access {path}: {source}")]
    Stat {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Path is neither a file nor a directory: {path}")]
    PathNotRegular { path: PathBuf },

    #[error("Failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        source: walkdir::Error,
    },
}
