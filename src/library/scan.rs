use std::path::Path;
use std::time::Duration;

use lofty::file::{AudioFile, TaggedFileExt};
use lofty::tag::ItemKey;
use walkdir::WalkDir;

use crate::artist::extract_artist;
use crate::config::LibrarySettings;

use super::model::Track;

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Artist for an untagged file: derived from the title, with the containing
/// folder standing in for the uploader account.
fn derive_artist(path: &Path, title: &str, settings: &LibrarySettings) -> String {
    let folder = path
        .parent()
        .and_then(|p| p.file_name())
        .and_then(|s| s.to_str())
        .unwrap_or("");

    match extract_artist(title, folder) {
        Ok(artist) if !artist.is_empty() => artist,
        Ok(_) => settings.unknown_artist.clone(),
        Err(e) => {
            log::warn!("{}: {e}", path.display());
            settings.unknown_artist.clone()
        }
    }
}

pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    let mut tracks: Vec<Track> = Vec::new();

    let mut walker = WalkDir::new(dir).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let path = entry.path();
        if !path.is_file() || !is_audio_file(path, settings) {
            continue;
        }

        let mut title = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("UNKNOWN")
            .to_string();
        let mut artist: Option<String> = None;
        let mut album: Option<String> = None;
        let mut duration: Option<Duration> = None;

        match lofty::read_from_path(path) {
            Ok(tagged) => {
                duration = Some(tagged.properties().duration());

                if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                    let field = |key: &ItemKey| {
                        tag.get_string(key)
                            .map(str::trim)
                            .filter(|v| !v.is_empty())
                            .map(str::to_string)
                    };
                    if let Some(v) = field(&ItemKey::TrackTitle) {
                        title = v;
                    }
                    artist = field(&ItemKey::TrackArtist);
                    album = field(&ItemKey::AlbumTitle);
                }
            }
            Err(e) => log::debug!("no tags for {}: {e}", path.display()),
        }

        let artist = artist.unwrap_or_else(|| derive_artist(path, &title, settings));

        tracks.push(Track {
            id: 0,
            path: path.to_path_buf(),
            title,
            artist,
            album,
            duration,
        });
    }

    tracks.sort_by(|a, b| {
        a.artist
            .to_lowercase()
            .cmp(&b.artist.to_lowercase())
            .then_with(|| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
    });
    for (id, track) in tracks.iter_mut().enumerate() {
        track.id = id;
    }

    log::debug!("scanned {} tracks under {}", tracks.len(), dir.display());
    tracks
}
