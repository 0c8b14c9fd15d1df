use clap::ValueEnum;

use crate::cli::Cli;
use crate::remover::RemovalPolicy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoverConfig {
    /// How each listed path is removed
    pub policy: RemovalPolicy,

    /// Trim whitespace around each line of the path list before using it as a path
    ///
    /// Blank lines are skipped either way.
    pub trim_whitespace: bool,

    pub log_level: LogLevel,
}

impl Default for RemoverConfig {
    fn default() -> Self {
        Self {
            policy: RemovalPolicy::EmptyOnly,
            trim_whitespace: true,
            log_level: LogLevel::Warn,
        }
    }
}

impl From<&Cli> for RemoverConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            policy: if cli.force {
                RemovalPolicy::RecursiveForce
            } else {
                RemovalPolicy::EmptyOnly
            },
            trim_whitespace: !cli.keep_whitespace,
            log_level: cli.log_level,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn defaults_to_empty_only() {
        let cli = Cli::try_parse_from(["prunedirs", "list.txt"]).unwrap();
        let config = RemoverConfig::from(&cli);
        assert_eq!(config, RemoverConfig::default());
    }

    #[test]
    fn force_and_whitespace_flags() {
        let cli = Cli::try_parse_from([
            "prunedirs",
            "--force",
            "--keep-whitespace",
            "--log-level",
            "debug",
            "list.txt",
        ])
        .unwrap();
        let config = RemoverConfig::from(&cli);
        assert_eq!(config.policy, RemovalPolicy::RecursiveForce);
        assert!(!config.trim_whitespace);
        assert_eq!(log::LevelFilter::from(config.log_level), log::LevelFilter::Debug);
    }
}
