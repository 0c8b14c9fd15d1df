pub mod app;
pub mod cli;
pub mod path_list;
pub mod prune_error;
pub mod remover;
pub mod remover_config;
pub mod scan;

pub use path_list::PathList;
pub use prune_error::{PruneError, PruneErrorKind};
pub use remover::{BatchPathRemover, BatchReport, RemovalOutcome, RemovalPolicy};
pub use remover_config::{LogLevel, RemoverConfig};
