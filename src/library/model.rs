use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    /// Position in the sorted scan result.
    pub id: usize,
    pub path: PathBuf,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub duration: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    pub title: String,
    pub items: Vec<Track>,
}

/// An artist with their collection, split into albums and loose singles.
#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    pub name: String,
    pub albums: Vec<Album>,
    pub singles: Vec<Track>,
}

impl Artist {
    /// Find a track by id, inside `album` when given, among singles otherwise.
    pub fn find_by_id(&self, id: usize, album: Option<&str>) -> Option<&Track> {
        match album {
            Some(title) => self
                .albums
                .iter()
                .find(|a| a.title == title)?
                .items
                .iter()
                .find(|t| t.id == id),
            None => self.singles.iter().find(|t| t.id == id),
        }
    }

    /// Every track of the artist: album items in album order, then singles.
    pub fn flatten(&self) -> Vec<&Track> {
        self.albums
            .iter()
            .flat_map(|a| a.items.iter())
            .chain(self.singles.iter())
            .collect()
    }

    pub fn track_count(&self) -> usize {
        self.albums.iter().map(|a| a.items.len()).sum::<usize>() + self.singles.len()
    }
}
