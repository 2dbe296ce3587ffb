use decomment_core::{
    CliArgs, Command as CoreCommand, ProcessedFileResult, find_files, process_files,
};

use anyhow::Result;
use clap::{CommandFactory, Parser};
use console::style;
use std::io;
use std::process::ExitCode;

fn print_completions_cli(shell: clap_complete::Shell) {
    let mut cmd = CliArgs::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}

fn main() -> Result<ExitCode> {
    let cli: CliArgs = CliArgs::parse();

    if let Some(command_enum_val) = cli.command {
        match command_enum_val {
            CoreCommand::Completion(args) => {
                print_completions_cli(args.shell);
                return Ok(ExitCode::SUCCESS);
            }
        }
    }

    let root = match cli.main_opts.path {
        Some(path) => path,
        None => {
            eprintln!("{}", style("No input path provided.").red());
            return Ok(ExitCode::FAILURE);
        }
    };

    let files_to_process = match find_files(&root) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("{}", style(format!("Error: {}", e)).red());
            return Ok(ExitCode::FAILURE);
        }
    };

    if files_to_process.is_empty() {
        println!("No files to process in {}.", root.display());
        return Ok(ExitCode::SUCCESS);
    }

    let results: Vec<ProcessedFileResult> = process_files(files_to_process);

    let mut success_count = 0;
    let mut failure_count = 0;
    for result in results {
        match result.error {
            None => {
                println!(
                    "Comments removed from {}",
                    style(result.path.display()).dim()
                );
                success_count += 1;
            }
            Some(err_msg) => {
                eprintln!(
                    "  {} {} - {}",
                    style("⚠️").yellow(),
                    style(result.path.display()).dim(),
                    style(err_msg).red()
                );
                failure_count += 1;
            }
        }
    }
    println!(
        "Result: {} {} processed, {} {} skipped.",
        style(success_count).green(),
        if success_count == 1 { "file" } else { "files" },
        style(failure_count).red(),
        if failure_count == 1 { "file" } else { "files" }
    );

    // Per-file failures never change the exit status; unusable paths
    // already exited above.
    Ok(ExitCode::SUCCESS)
}
