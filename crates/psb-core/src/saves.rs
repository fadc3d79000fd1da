use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use regex::Regex;
use walkdir::WalkDir;

use crate::candidate::Candidate;
use crate::error::{Error, Result};

/// Extensions used by emulators and dumpers for Pokémon saves.
pub const DEFAULT_EXTENSIONS: [&str; 4] = [".sav", ".dsv", ".gci", ".dat"];
pub const DEFAULT_PATTERN: &str = r"(?i)pok[eé]mon";

/// Name filter applied during a scan: extension AND pattern must both match.
#[derive(Debug, Clone)]
pub struct SaveFilter {
    extensions: Vec<String>,
    pattern: Regex,
}

impl SaveFilter {
    /// Extensions are compared against the lowercased file name, with or
    /// without a leading dot. `pattern` is a regex searched anywhere in the name.
    pub fn new<S: AsRef<str>>(extensions: &[S], pattern: &str) -> Result<Self> {
        let extensions = extensions
            .iter()
            .map(|e| {
                let e = e.as_ref().trim().to_lowercase();
                if e.starts_with('.') { e } else { format!(".{}", e) }
            })
            .collect();
        let pattern = Regex::new(pattern).map_err(Error::InvalidPattern)?;
        Ok(Self {
            extensions,
            pattern,
        })
    }

    pub fn matches(&self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        self.extensions.iter().any(|e| lower.ends_with(e.as_str()))
            && self.pattern.is_match(file_name)
    }
}

impl Default for SaveFilter {
    fn default() -> Self {
        Self::new(&DEFAULT_EXTENSIONS[..], DEFAULT_PATTERN).expect("built-in save pattern compiles")
    }
}

/// Non-fatal outcome worth showing to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NoSavesFound,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NoSavesFound => write!(
                f,
                "No Pokémon save files were automatically detected. You can select an individual file manually."
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub root: PathBuf,
    pub found: Vec<Candidate>,
}

impl ScanOutcome {
    pub fn notice(&self) -> Option<Notice> {
        self.found.is_empty().then_some(Notice::NoSavesFound)
    }
}

pub fn is_scannable(p: &Path) -> bool { p.is_dir() }

/// Walks `root` recursively and keeps every file accepted by `filter`.
///
/// The root itself must be a readable directory; unreadable entries below it
/// are skipped. Files are visited in name order within each directory. A
/// relative root is resolved against the working directory, so the outcome
/// only ever holds absolute paths.
pub fn scan_for_saves(root: &Path, filter: &SaveFilter) -> Result<ScanOutcome> {
    let root_err = |source: io::Error| Error::ScanRoot { path: root.to_path_buf(), source };
    let root = std::path::absolute(root).map_err(root_err)?;
    if !is_scannable(&root) {
        let kind = if root.exists() { io::ErrorKind::NotADirectory } else { io::ErrorKind::NotFound };
        return Err(root_err(io::Error::new(kind, "not a directory")));
    }
    fs::read_dir(&root).map_err(root_err)?;

    let mut found = Vec::new();
    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                log::debug!("skipping unreadable entry: {}", e);
                continue;
            }
        };
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if filter.matches(&name)
            && let Some(c) = Candidate::from_path(entry.path())
        {
            found.push(c);
        }
    }
    log::info!("found {} save(s) under {}", found.len(), root.display());
    Ok(ScanOutcome { root, found })
}
