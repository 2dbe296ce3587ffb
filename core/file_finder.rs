use crate::CoreError;
use clap::{Parser, Subcommand};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Parser, Clone)]
pub struct DecommentArgs {
    #[clap(help = "Path to the file or directory to process")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    #[clap(about = "Generate shell completion scripts")]
    Completion(CompletionArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct CompletionArgs {
    #[clap(value_parser = clap::value_parser!(clap_complete::Shell))]
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "decomment",
    version = "0.1.0",
    about = "Strips comments from source files by extension",
    long_about = "Removes comments from a file, or from every file directly inside a directory.\nThe comment syntax is chosen from the file extension; files are rewritten in place.",
    propagate_version = true
)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Option<Command>,

    #[clap(flatten)]
    pub main_opts: DecommentArgs,
}

pub fn find_files(root: &Path) -> Result<Vec<PathBuf>, CoreError> {
    let meta = fs::metadata(root).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            CoreError::PathNotFound {
                path: root.to_path_buf(),
            }
        } else {
            CoreError::Stat {
                path: root.to_path_buf(),
                source: e,
            }
        }
    })?;

    if meta.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !meta.is_dir() {
        return Err(CoreError::PathNotRegular {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).max_depth(1) {
        match entry {
            Ok(e) => {
                // Subdirectories are skipped, not descended into.
                if e.file_type().is_file() {
                    files.push(e.into_path());
                }
            }
            Err(e) if e.path() == Some(root) => {
                return Err(CoreError::DirectoryRead {
                    path: root.to_path_buf(),
                    source: e,
                });
            }
            Err(e) => {
                eprintln!("Warn: {}", e);
            }
        }
    }
    files.sort();
    Ok(files)
}
