use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use zip::CompressionMethod;
use zip::write::FileOptions;

use crate::candidate::Candidate;
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub entries: usize,
}

/// Trims the identifier and rejects empty or path-like values.
pub fn validate_identifier(identifier: &str) -> Result<&str> {
    let id = identifier.trim();
    if id.is_empty() {
        return Err(Error::MissingIdentifier);
    }
    if id.contains(['/', '\\']) {
        return Err(Error::InvalidIdentifier(id.to_string()));
    }
    Ok(id)
}

/// `{identifier}-backup{MM-DD-YY}.zip`
pub fn archive_file_name(identifier: &str, date: NaiveDate) -> String {
    format!("{}-backup{}.zip", identifier, date.format("%m-%d-%y"))
}

/// Pairs each selected file with its entry name. A later file with the same
/// base name replaces an earlier one; the entry keeps its first position.
fn entry_plan<'a>(files: &[&'a Candidate]) -> Vec<(&'a str, &'a Path)> {
    let mut plan: Vec<(&str, &Path)> = Vec::with_capacity(files.len());
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for &c in files {
        match seen.get(c.name.as_str()) {
            Some(&i) => {
                log::warn!(
                    "entry {} from {} replaces {}",
                    c.name,
                    c.path.display(),
                    plan[i].1.display()
                );
                plan[i].1 = c.path.as_path();
            }
            None => {
                seen.insert(c.name.as_str(), plan.len());
                plan.push((c.name.as_str(), c.path.as_path()));
            }
        }
    }
    plan
}

/// Writes `files` into `{destination}/{identifier}-backup{date}.zip`.
///
/// The archive is assembled in a temporary file inside `destination` and only
/// renamed into place once complete, so a failure never leaves a partial zip
/// behind and never touches an existing archive of the same name.
pub fn export_zip(
    identifier: &str,
    destination: &Path,
    files: &[&Candidate],
    date: NaiveDate,
) -> Result<ExportSummary> {
    if files.is_empty() {
        return Err(Error::NoFilesSelected);
    }
    let id = validate_identifier(identifier)?;
    let dest = destination.join(archive_file_name(id, date));
    let dest_err = |source: std::io::Error| Error::DestinationUnwritable {
        path: destination.to_path_buf(),
        source,
    };

    let tmp = tempfile::Builder::new()
        .prefix(".psb-")
        .suffix(".zip.part")
        .tempfile_in(destination)
        .map_err(dest_err)?;
    let mut zip = zip::ZipWriter::new(tmp);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    let plan = entry_plan(files);
    for (name, path) in &plan {
        let data = fs::read(path).map_err(|source| Error::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("adding {} ({} bytes)", name, data.len());
        zip.start_file(*name, options)
            .map_err(|e| dest_err(e.into()))?;
        zip.write_all(&data).map_err(dest_err)?;
    }
    let tmp = zip.finish().map_err(|e| dest_err(e.into()))?;
    tmp.persist(&dest).map_err(|e| dest_err(e.error))?;

    log::info!("wrote {} entries to {}", plan.len(), dest.display());
    Ok(ExportSummary {
        path: dest,
        entries: plan.len(),
    })
}
