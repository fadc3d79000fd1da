use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A save file eligible for archival, found by a scan or picked by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Base name; also the entry name inside an archive.
    pub name: String,
    pub path: PathBuf,
    pub selected: bool,
}

impl Candidate {
    /// Builds an unselected candidate. Returns `None` when `path` has no file name.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let name = path.file_name()?.to_string_lossy().into_owned();
        Some(Self {
            name,
            path,
            selected: false,
        })
    }
}

#[derive(Debug, Default, Clone)]
pub struct CandidateList {
    items: Vec<Candidate>,
}

impl CandidateList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every candidate (manual picks included) and takes `found` in order.
    pub fn replace(&mut self, found: Vec<Candidate>) {
        self.items = found;
    }

    /// Appends a file regardless of the scan filter and returns its index.
    pub fn add_manual(&mut self, path: &Path) -> Result<usize> {
        let abs = std::path::absolute(path).map_err(|_| Error::InvalidPick(path.to_path_buf()))?;
        let cand = Candidate::from_path(abs).ok_or_else(|| Error::InvalidPick(path.to_path_buf()))?;
        self.items.push(cand);
        Ok(self.items.len() - 1)
    }

    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.items.get(index)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut Candidate> {
        self.items.get_mut(index).ok_or(Error::NoSuchCandidate(index))
    }

    /// Flips the flag and returns the new state.
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let c = self.get_mut(index)?;
        c.selected = !c.selected;
        Ok(c.selected)
    }

    pub fn set_selected(&mut self, index: usize, selected: bool) -> Result<()> {
        self.get_mut(index)?.selected = selected;
        Ok(())
    }

    pub fn select_all(&mut self) {
        self.items.iter_mut().for_each(|c| c.selected = true);
    }

    pub fn clear_selection(&mut self) {
        self.items.iter_mut().for_each(|c| c.selected = false);
    }

    pub fn selected(&self) -> Vec<&Candidate> {
        self.items.iter().filter(|c| c.selected).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
