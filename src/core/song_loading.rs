use crate::game::song::Song;
use log::{info, warn};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Loads a song catalog from a JSON file: an array of songs, each
/// `{ "name", "bpm", "beatmap" }`. Unplayable songs (non-positive or
/// non-finite BPM) are skipped with a warning rather than failing the load.
pub fn load_catalog(path: &Path) -> Result<Vec<Song>, Box<dyn Error>> {
    let data = fs::read_to_string(path)?;
    let songs = parse_catalog(&data)?;
    info!("Loaded {} song(s) from '{}'.", songs.len(), path.display());
    Ok(songs)
}

fn parse_catalog(data: &str) -> Result<Vec<Song>, Box<dyn Error>> {
    let songs: Vec<Song> = serde_json::from_str(data)?;
    let mut playable = Vec::with_capacity(songs.len());
    for song in songs {
        if song.is_playable() {
            playable.push(song);
        } else {
            warn!("Skipping song '{}': bpm {} is not playable.", song.name, song.bpm);
        }
    }
    Ok(playable)
}

/// Resolves the catalog to play: the configured file if it loads, otherwise
/// the built-in catalog.
pub fn catalog_or_builtin(path: Option<&str>) -> Vec<Song> {
    if let Some(path) = path {
        match load_catalog(Path::new(path)) {
            Ok(songs) if !songs.is_empty() => return songs,
            Ok(_) => warn!("Catalog '{}' contains no playable songs, using built-in catalog.", path),
            Err(e) => warn!("Failed to load catalog '{}': {}. Using built-in catalog.", path, e),
        }
    }
    crate::game::song::builtin_catalog()
}
