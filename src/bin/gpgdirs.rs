use std::io;
use std::process::exit;

use prunedirs::cli::{self, ScanCli, ScanCommands};
use prunedirs::path_list::write_path_line;
use prunedirs::{app, scan};

fn main() {
    let cli: ScanCli = cli::parse_or_usage();
    app::init_logging(cli.log_level);

    let root = match &cli.command {
        ScanCommands::Only { root } | ScanCommands::Single { root } => root,
    };

    if !root.is_dir() {
        println!("Error: Provided path is not a directory");
        exit(1)
    }

    let found = match &cli.command {
        ScanCommands::Only { .. } => scan::find_gpg_only_dirs(root),
        ScanCommands::Single { .. } => scan::find_single_gpg_dirs(root),
    };

    match found {
        Ok(dirs) => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for dir in dirs {
                if let Err(e) = write_path_line(&mut out, "", &dir) {
                    log::error!("Could not write {}: {}", dir.display(), e);
                    exit(1)
                }
            }
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("{}", e);
            exit(1)
        }
    }
}
