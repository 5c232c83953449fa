use std::{
    fs,
    path::{Path, PathBuf},
};

use genanki_rs::Package;
use tempfile::NamedTempFile;
use tracing::{info, info_span};

use crate::{
    deck::StudyDeck,
    error::{DeckError, DeckResult},
};

/// Creates the directory `output` will be written into, if it is missing.
pub fn ensure_parent_dir(output: &Path) -> DeckResult<()> {
    match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => Ok(fs::create_dir_all(dir)?),
        _ => Ok(()),
    }
}

/// Every media path must end in a file name, since that name is what the
/// package stores it under. Whether the file exists is not checked here.
pub fn check_media_paths(media_files: &[String]) -> DeckResult<()> {
    match media_files
        .iter()
        .find(|m| Path::new(m.as_str()).file_name().is_none())
    {
        Some(bad) => Err(DeckError::MediaPath(bad.clone())),
        None => Ok(()),
    }
}

fn utf8(path: &Path) -> DeckResult<&str> {
    path.to_str().ok_or_else(|| {
        DeckError::Environment(format!("path is not valid UTF-8: {}", path.display()))
    })
}

/// Writes `deck` and its media into an `.apkg` at `output`, replacing any
/// existing file.
///
/// The package is written to a temp file next to `output` and renamed over
/// it once complete, so a failed write leaves `output` as it was. Media
/// paths go to the packaging library untouched; a missing file shows up as
/// its error, not ours.
pub fn write_package(deck: StudyDeck, media_files: &[String], output: &Path) -> DeckResult<()> {
    let _span = info_span!("write_package", deck = %deck.name, path = %output.display()).entered();
    utf8(output)?;
    check_media_paths(media_files)?;

    let media: Vec<&str> = media_files.iter().map(String::as_str).collect();
    let mut package = Package::new(vec![deck.deck], media)?;

    ensure_parent_dir(output)?;
    let dir = match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let staging = NamedTempFile::new_in(&dir)?;

    info!("Writing package {} to: {}", deck.name, output.display());
    info!("Number of notes in deck: {}", deck.note_count);
    info!("Media files to include: {media_files:?}");

    package.write_to_file(utf8(staging.path())?)?;
    staging.persist(output).map_err(|e| e.error)?;
    info!("Package written successfully");
    Ok(())
}
