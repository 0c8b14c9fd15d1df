use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::prune_error::PruneError;

/// Paths read from a path-list file, in file order
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PathList {
    paths: Vec<PathBuf>,
}

impl PathList {
    /// Reads the whole list up front.
    ///
    /// Lines end in `\n` or `\r\n`. With `trim_whitespace`, ASCII whitespace around
    /// each line is dropped. Lines that are empty afterwards are skipped. Duplicates
    /// are kept.
    pub fn read(path: &Path, trim_whitespace: bool) -> Result<PathList, PruneError> {
        log::debug!("Reading path list from {}", path.display());
        let bytes = fs::read(path).map_err(|e| PruneError::input_read(path, e))?;
        Ok(PathList::parse(&bytes, trim_whitespace))
    }

    pub fn parse(bytes: &[u8], trim_whitespace: bool) -> PathList {
        let paths = bytes
            .split(|b| *b == b'\n')
            .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
            .map(|line| if trim_whitespace { trim_ascii(line) } else { line })
            .filter(|line| !trim_ascii(line).is_empty())
            .map(bytes_to_path)
            .collect();
        PathList { paths }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathBuf> {
        self.paths.iter()
    }
}

impl<'a> IntoIterator for &'a PathList {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn trim_ascii(line: &[u8]) -> &[u8] {
    let start = line
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(line.len());
    let end = line
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &line[start..end]
}

/// Writes `prefix`, then `path`, then a newline, keeping the raw path bytes on Unix
pub fn write_path_line<W: Write>(out: &mut W, prefix: &str, path: &Path) -> io::Result<()> {
    out.write_all(prefix.as_bytes())?;
    write_path(out, path)?;
    out.write_all(b"\n")
}

#[cfg(unix)]
fn write_path<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    use std::os::unix::ffi::OsStrExt;
    out.write_all(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn write_path<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    write!(out, "{}", path.display())
}

#[cfg(unix)]
fn bytes_to_path(line: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(OsStr::from_bytes(line))
}

#[cfg(not(unix))]
fn bytes_to_path(line: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(line).into_owned())
}
