//! psb-core: finding, selecting and archiving Pokémon save files
//!
//! The crate is the headless core of the save backup tool:
//! - Recursive scan filtered by save extension and a "pokémon" name pattern
//! - Candidate list with per-file selection, plus manual picks
//! - Dated ZIP export written atomically into a destination folder
//! - A one-key settings file remembering the last scanned folder
//!
pub mod archive;
pub mod backup;
pub mod candidate;
pub mod error;
pub mod saves;
pub mod session;
pub mod settings;

pub use archive::{ExportSummary, archive_file_name, export_zip};
pub use backup::{BackupTicket, start_backup};
pub use candidate::{Candidate, CandidateList};
pub use error::{Error, Result};
pub use saves::{Notice, SaveFilter, ScanOutcome, scan_for_saves};
pub use session::Session;
pub use settings::Settings;
