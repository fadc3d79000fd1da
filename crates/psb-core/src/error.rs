use std::fmt;
use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Identifier was empty after trimming.
    MissingIdentifier,
    /// Identifier would escape the destination directory.
    InvalidIdentifier(String),
    MissingSecret,
    NoFilesSelected,
    NoSuchCandidate(usize),
    /// Manual pick without a file name component (e.g. `/` or `..`).
    InvalidPick(PathBuf),
    InvalidPattern(regex::Error),
    ScanRoot { path: PathBuf, source: io::Error },
    SourceUnreadable { path: PathBuf, source: io::Error },
    DestinationUnwritable { path: PathBuf, source: io::Error },
    Settings { path: PathBuf, source: io::Error },
}

impl Error {
    /// True for errors caused by what the user typed or selected, as opposed
    /// to the filesystem refusing an operation.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::MissingIdentifier
                | Error::InvalidIdentifier(_)
                | Error::MissingSecret
                | Error::NoFilesSelected
                | Error::NoSuchCandidate(_)
                | Error::InvalidPick(_)
                | Error::InvalidPattern(_)
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingIdentifier => write!(f, "missing identifier"),
            Error::InvalidIdentifier(id) => {
                write!(f, "identifier must not contain path separators: {:?}", id)
            }
            Error::MissingSecret => write!(f, "missing secret"),
            Error::NoFilesSelected => write!(f, "no files selected"),
            Error::NoSuchCandidate(i) => write!(f, "no candidate at index {}", i),
            Error::InvalidPick(p) => write!(f, "not a file path: {}", p.display()),
            Error::InvalidPattern(e) => write!(f, "invalid name pattern: {}", e),
            Error::ScanRoot { path, source } => {
                write!(f, "cannot scan {}: {}", path.display(), source)
            }
            Error::SourceUnreadable { path, source } => {
                write!(f, "cannot read save {}: {}", path.display(), source)
            }
            Error::DestinationUnwritable { path, source } => {
                write!(f, "cannot write archive in {}: {}", path.display(), source)
            }
            Error::Settings { path, source } => {
                write!(f, "settings file {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidPattern(e) => Some(e),
            Error::ScanRoot { source, .. }
            | Error::SourceUnreadable { source, .. }
            | Error::DestinationUnwritable { source, .. }
            | Error::Settings { source, .. } => Some(source),
            _ => None,
        }
    }
}
