use core::fmt;
use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PruneErrorKind {
    /// Wrong arguments on the command line
    Usage,
    /// The path-list file could not be opened or read
    InputRead,
    /// A single listed path could not be removed
    Removal,
    /// A directory could not be listed while scanning
    Scan,
}

#[derive(Debug)]
pub struct PruneError {
    pub kind: PruneErrorKind,
    pub details: String,
    source: Option<io::Error>,
}

impl PruneError {
    pub fn new(kind: PruneErrorKind, msg: &str) -> PruneError {
        PruneError {
            kind,
            details: msg.to_string(),
            source: None,
        }
    }

    pub fn usage(msg: &str) -> PruneError {
        PruneError::new(PruneErrorKind::Usage, msg)
    }

    pub fn input_read(path: &Path, err: io::Error) -> PruneError {
        PruneError::with_source(
            PruneErrorKind::InputRead,
            format!("Failed to read path list {}", path.display()),
            err,
        )
    }

    pub fn removal(path: &Path, err: io::Error) -> PruneError {
        PruneError::with_source(
            PruneErrorKind::Removal,
            format!("Failed to remove {}", path.display()),
            err,
        )
    }

    pub fn scan(path: &Path, err: io::Error) -> PruneError {
        PruneError::with_source(
            PruneErrorKind::Scan,
            format!("Failed to read directory {}", path.display()),
            err,
        )
    }

    fn with_source(kind: PruneErrorKind, details: String, err: io::Error) -> PruneError {
        PruneError {
            kind,
            details,
            source: Some(err),
        }
    }

    /// The OS-level error kind, when this error wraps one
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        self.source.as_ref().map(io::Error::kind)
    }
}

impl fmt::Display for PruneError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.source {
            Some(err) => write!(f, "{}: {}", self.details, err),
            None => write!(f, "{}", self.details),
        }
    }
}

impl Error for PruneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn Error + 'static))
    }
}

/// Path carried alongside a removal failure, for reporting in input order
#[derive(Debug)]
pub struct FailedPath {
    pub path: PathBuf,
    pub error: PruneError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_os_error() {
        let err = PruneError::removal(
            Path::new("/tmp/x"),
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.kind, PruneErrorKind::Removal);
        assert_eq!(err.to_string(), "Failed to remove /tmp/x: gone");
        assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
        assert!(err.source().is_some());
    }

    #[test]
    fn usage_has_no_source() {
        let err = PruneError::usage("bad args");
        assert_eq!(err.to_string(), "bad args");
        assert!(err.source().is_none());
        assert_eq!(err.io_kind(), None);
    }
}
