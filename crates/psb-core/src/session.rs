use std::path::{Path, PathBuf};

use crate::archive::{self, ExportSummary};
use crate::backup::{self, BackupTicket};
use crate::candidate::{Candidate, CandidateList};
use crate::error::Result;
use crate::saves::{self, Notice, SaveFilter};
use crate::settings::Settings;

/// Everything one run of the tool works on: the settings it was started
/// with, the folder last scanned and the candidate list.
#[derive(Debug, Default)]
pub struct Session {
    settings: Settings,
    filter: SaveFilter,
    source: Option<PathBuf>,
    candidates: CandidateList,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self::with_filter(settings, SaveFilter::default())
    }

    pub fn with_filter(settings: Settings, filter: SaveFilter) -> Self {
        Self {
            settings,
            filter,
            source: None,
            candidates: CandidateList::new(),
        }
    }

    /// Rescans the remembered folder, if any. `source()` stays `None` when
    /// there was nothing to restore.
    pub fn restore(&mut self) -> Result<Option<Notice>> {
        let Some(folder) = self.settings.last_folder.clone() else {
            return Ok(None);
        };
        if !saves::is_scannable(&folder) {
            log::warn!("last folder {} is no longer available", folder.display());
            return Ok(None);
        }
        self.scan(&folder)
    }

    /// Scans `folder`, replaces the candidates and remembers the folder as
    /// an absolute path.
    pub fn choose_folder(&mut self, folder: &Path) -> Result<Option<Notice>> {
        let notice = self.scan(folder)?;
        self.settings.last_folder = self.source.clone();
        Ok(notice)
    }

    fn scan(&mut self, folder: &Path) -> Result<Option<Notice>> {
        let outcome = saves::scan_for_saves(folder, &self.filter)?;
        let notice = outcome.notice();
        self.source = Some(outcome.root);
        self.candidates.replace(outcome.found);
        Ok(notice)
    }

    pub fn pick_file(&mut self, path: &Path) -> Result<usize> {
        self.candidates.add_manual(path)
    }

    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        self.candidates.toggle(index)
    }

    pub fn set_selected(&mut self, index: usize, selected: bool) -> Result<()> {
        self.candidates.set_selected(index, selected)
    }

    pub fn select_all(&mut self) {
        self.candidates.select_all();
    }

    pub fn candidates(&self) -> &CandidateList {
        &self.candidates
    }

    pub fn selected(&self) -> Vec<&Candidate> {
        self.candidates.selected()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Archives the selection into `destination`, dated with today's local date.
    pub fn export_zip(&self, identifier: &str, destination: &Path) -> Result<ExportSummary> {
        let today = chrono::Local::now().date_naive();
        archive::export_zip(identifier, destination, &self.selected(), today)
    }

    pub fn start_backup(&self, identifier: &str, secret: &str) -> Result<BackupTicket> {
        backup::start_backup(identifier, secret, &self.selected())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn into_settings(self) -> Settings {
        self.settings
    }
}
