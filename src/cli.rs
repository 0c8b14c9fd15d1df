use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

use crate::prune_error::PruneError;
use crate::remover_config::LogLevel;

/// Removes every directory listed in a path-list file, one path per line
#[derive(Parser, Debug)]
#[command(name = "prunedirs", author, version, long_about = None)]
pub struct Cli {
    /// File holding the directories to remove, one per line
    pub path_list: PathBuf,

    /// Remove each path and everything below it, instead of only empty directories
    #[arg(short, long)]
    pub force: bool,

    /// Use each line verbatim instead of trimming surrounding whitespace
    #[arg(long)]
    pub keep_whitespace: bool,

    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,
}

/// Lists subdirectories holding only pass(1) style `.gpg` entries
#[derive(Parser, Debug)]
#[command(name = "gpgdirs", author, version, long_about = None)]
pub struct ScanCli {
    #[command(subcommand)]
    pub command: ScanCommands,

    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
pub enum ScanCommands {
    /// Subdirectories that are non-empty and contain only .gpg files
    Only { root: PathBuf },
    /// Dotted subdirectories that contain exactly one .gpg entry
    Single { root: PathBuf },
}

/// Parses the command line, or prints usage to stdout and exits with status 1
///
/// `--help` and `--version` keep clap's own behaviour.
pub fn parse_or_usage<P: Parser>() -> P {
    match P::try_parse() {
        Ok(parsed) => parsed,
        Err(err) => {
            use clap::error::ErrorKind;
            if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                err.exit()
            }
            eprintln!("{}", usage_error(&err));
            println!("{}", P::command().render_usage());
            std::process::exit(1)
        }
    }
}

/// The first line of clap's message, e.g. `error: unexpected argument 'b' found`
fn usage_error(err: &clap::Error) -> PruneError {
    let rendered = err.to_string();
    PruneError::usage(rendered.lines().next().unwrap_or_default())
}
