// Changes the process working directory, so it lives in its own test binary.
use std::env;
use std::fs;
use std::path::Path;

use psb_core::{Session, Settings};
use tempfile::tempdir;

#[test]
fn relative_folder_is_remembered_as_absolute() {
    let original = env::current_dir().unwrap();
    let work = tempdir().unwrap();
    let elsewhere = tempdir().unwrap();
    fs::create_dir_all(work.path().join("saves/nested")).unwrap();
    fs::write(work.path().join("saves/nested/pokemon.sav"), b"x").unwrap();

    env::set_current_dir(work.path()).unwrap();
    let cwd = env::current_dir().unwrap();
    let mut session = Session::new(Settings::default());
    session.choose_folder(Path::new("saves")).unwrap();

    let last = session.settings().last_folder.clone().unwrap();
    assert!(last.is_absolute());
    assert_eq!(last, cwd.join("saves"));
    assert_eq!(session.source(), Some(last.as_path()));
    let c = session.candidates().get(0).unwrap();
    assert!(c.path.is_absolute());
    assert_eq!(c.path, cwd.join("saves/nested/pokemon.sav"));

    // a later run from another directory still finds the folder
    env::set_current_dir(elsewhere.path()).unwrap();
    let mut resumed = Session::new(session.into_settings());
    assert_eq!(resumed.restore().unwrap(), None);
    assert_eq!(resumed.candidates().len(), 1);

    env::set_current_dir(original).unwrap();
}
