use crate::stripper::{self, rules};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct ProcessedFileResult {
    pub path: PathBuf,
    pub error: Option<String>,
}

fn dotted_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e.to_lowercase()))
}

fn map_err_to_string<E: std::fmt::Display>(p: &Path, c: &str) -> impl Fn(E) -> String {
    let d = p.display().to_string();
    move |e| format!("{} failed for {}: {}", c, d, e)
}

fn process_single_file(path: &Path) -> Result<(), String> {
    let rule = dotted_extension(path)
        .and_then(|ext| rules::rule_for_extension(&ext))
        .ok_or_else(|| format!("Unsupported file type: {}", path.display()))?;

    let content = fs::read_to_string(path).map_err(map_err_to_string(path, "Read"))?;
    let matches = stripper::find_comments(&content, rule);
    let stripped =
        stripper::remove_matches(content, matches).map_err(map_err_to_string(path, "Strip"))?;
    fs::write(path, stripped).map_err(map_err_to_string(path, "Write"))?;
    Ok(())
}

pub fn process_files(files: Vec<PathBuf>) -> Vec<ProcessedFileResult> {
    files
        .into_iter()
        .map(|p| {
            let outcome = process_single_file(&p);
            ProcessedFileResult {
                path: p,
                error: outcome.err(),
            }
        })
        .collect()
}
