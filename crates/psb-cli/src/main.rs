use clap::{Args as ClapArgs, Parser, Subcommand};
use psb_core::saves::{DEFAULT_EXTENSIONS, DEFAULT_PATTERN};
use psb_core::settings::DEFAULT_SETTINGS_FILE;
use psb_core::{Error, SaveFilter, Session, Settings};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "psb",
    about = "Find Pokémon save files and export a dated ZIP backup",
    version
)]
struct Cli {
    /// Settings file remembering the last scanned folder
    #[arg(long, global = true, default_value = DEFAULT_SETTINGS_FILE)]
    settings: PathBuf,
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Scan a folder (or the last one used) and list candidate saves
    Scan(ScanArgs),
    /// Write the selected saves into {id}-backup{MM-DD-YY}.zip
    Export(ExportArgs),
    /// Validate a backup request (uploading is not implemented)
    Backup(BackupArgs),
    /// Print the settings file
    Settings,
}

#[derive(ClapArgs, Debug)]
struct FilterArgs {
    /// Save extension to look for (repeatable; defaults to .sav .dsv .gci .dat)
    #[arg(long = "ext", value_name = "EXT")]
    extensions: Vec<String>,
    /// Regex that file names must contain
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pattern: String,
}

#[derive(ClapArgs, Debug)]
struct ScanArgs {
    /// Folder to scan; defaults to the last folder used
    folder: Option<PathBuf>,
    #[command(flatten)]
    filter: FilterArgs,
}

#[derive(ClapArgs, Debug)]
struct SelectArgs {
    /// Folder to scan; defaults to the last folder used
    folder: Option<PathBuf>,
    /// Add a file regardless of the filter; picked files are always selected
    #[arg(long, value_name = "FILE")]
    pick: Vec<PathBuf>,
    /// Candidate index as printed by `scan` (repeatable or comma separated)
    #[arg(long, value_delimiter = ',')]
    select: Vec<usize>,
    /// Select every candidate
    #[arg(long, conflicts_with = "select")]
    all: bool,
    #[command(flatten)]
    filter: FilterArgs,
}

#[derive(ClapArgs, Debug)]
struct ExportArgs {
    /// Identifier used in the archive name
    #[arg(long)]
    id: String,
    /// Folder the archive is written to
    #[arg(long, value_name = "DIR")]
    dest: PathBuf,
    #[command(flatten)]
    select: SelectArgs,
}

#[derive(ClapArgs, Debug)]
struct BackupArgs {
    #[arg(long)]
    id: String,
    #[arg(long)]
    secret: String,
    #[command(flatten)]
    select: SelectArgs,
}

fn main() {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let res = match cli.cmd {
        Cmd::Scan(a) => cmd_scan(&cli.settings, a),
        Cmd::Export(a) => cmd_export(&cli.settings, a),
        Cmd::Backup(a) => cmd_backup(&cli.settings, a),
        Cmd::Settings => cmd_settings(&cli.settings),
    };
    if let Err(e) = res {
        eprintln!("error: {}", e);
        std::process::exit(exit_code(&e));
    }
}

fn exit_code(e: &Error) -> i32 {
    match e {
        e if e.is_input_error() => 2,
        Error::Settings { .. } => 4,
        _ => 3,
    }
}

fn load_settings(path: &Path) -> Settings {
    Settings::load(path).unwrap_or_else(|e| {
        log::warn!("{}; starting without a last folder", e);
        Settings::default()
    })
}

fn build_filter(args: &FilterArgs) -> Result<SaveFilter, Error> {
    if args.extensions.is_empty() {
        SaveFilter::new(&DEFAULT_EXTENSIONS[..], &args.pattern)
    } else {
        SaveFilter::new(&args.extensions[..], &args.pattern)
    }
}

/// Scans the given folder or restores the last one, printing the notice when
/// nothing matched. Persists the folder when it was given explicitly.
fn open_session(
    settings_path: &Path,
    folder: Option<&Path>,
    filter: &FilterArgs,
) -> Result<Session, Error> {
    let mut session = Session::with_filter(load_settings(settings_path), build_filter(filter)?);
    let notice = match folder {
        Some(f) => {
            let n = session.choose_folder(f)?;
            session.settings().save(settings_path)?;
            n
        }
        None => session.restore()?,
    };
    if let Some(n) = notice {
        println!("{}", n);
    }
    Ok(session)
}

fn print_candidates(session: &Session) {
    for (i, c) in session.candidates().iter().enumerate() {
        let mark = if c.selected { "x" } else { " " };
        println!("{:>3} [{}] {}\t{}", i, mark, c.name, c.path.display());
    }
}

fn cmd_scan(settings_path: &Path, args: ScanArgs) -> Result<(), Error> {
    let session = open_session(settings_path, args.folder.as_deref(), &args.filter)?;
    match session.source() {
        Some(src) => println!("Scanned {}", src.display()),
        None => println!("No folder given and no last folder recorded"),
    }
    print_candidates(&session);
    Ok(())
}

fn apply_selection(settings_path: &Path, args: &SelectArgs) -> Result<Session, Error> {
    let mut session = open_session(settings_path, args.folder.as_deref(), &args.filter)?;
    for p in &args.pick {
        let idx = session.pick_file(p)?;
        session.set_selected(idx, true)?;
    }
    if args.all {
        session.select_all();
    }
    for &i in &args.select {
        session.set_selected(i, true)?;
    }
    Ok(session)
}

fn cmd_export(settings_path: &Path, args: ExportArgs) -> Result<(), Error> {
    let session = apply_selection(settings_path, &args.select)?;
    let summary = session.export_zip(&args.id, &args.dest)?;
    println!(
        "Saves exported to {} ({} file(s))",
        summary.path.display(),
        summary.entries
    );
    Ok(())
}

fn cmd_backup(settings_path: &Path, args: BackupArgs) -> Result<(), Error> {
    let session = apply_selection(settings_path, &args.select)?;
    let ticket = session.start_backup(&args.id, &args.secret)?;
    println!("{}", ticket);
    Ok(())
}

fn cmd_settings(settings_path: &Path) -> Result<(), Error> {
    let settings = Settings::load(settings_path)?;
    println!("{}", render_settings(&settings, settings_path)?);
    Ok(())
}

fn render_settings(settings: &Settings, settings_path: &Path) -> Result<String, Error> {
    serde_json::to_string_pretty(settings).map_err(|e| Error::Settings {
        path: settings_path.to_path_buf(),
        source: e.into(),
    })
}
