use std::fmt;

use crate::archive::validate_identifier;
use crate::candidate::Candidate;
use crate::error::{Error, Result};

/// Acknowledgement that a backup was accepted. Nothing is uploaded yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupTicket {
    pub identifier: String,
    pub files: usize,
}

impl fmt::Display for BackupTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Backing up {} files...", self.files)
    }
}

// TODO: push the selected saves to remote storage once an upload target exists.
pub fn start_backup(identifier: &str, secret: &str, files: &[&Candidate]) -> Result<BackupTicket> {
    if files.is_empty() {
        return Err(Error::NoFilesSelected);
    }
    let id = validate_identifier(identifier)?;
    if secret.trim().is_empty() {
        return Err(Error::MissingSecret);
    }
    let ticket = BackupTicket {
        identifier: id.to_string(),
        files: files.len(),
    };
    log::info!("backup started for {}: {} file(s)", ticket.identifier, ticket.files);
    Ok(ticket)
}
