use std::io;
use std::process::exit;

use prunedirs::cli::{self, Cli};
use prunedirs::{app, BatchPathRemover, PathList, RemoverConfig};

fn main() {
    let cli: Cli = cli::parse_or_usage();
    let config = RemoverConfig::from(&cli);
    app::init_logging(config.log_level);
    log::debug!("{:#?}", config);

    let paths = match PathList::read(&cli.path_list, config.trim_whitespace) {
        Ok(paths) => paths,
        Err(e) => {
            /* an unreadable list is a no-op batch, not a usage error */
            log::error!("{}", e);
            eprintln!("{}", e);
            exit(0)
        }
    };

    let remover = BatchPathRemover::new(config.policy);
    let stdout = io::stdout();
    remover.run(&paths, &mut stdout.lock());
}
