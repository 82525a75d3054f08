use std::collections::BTreeMap;

use super::model::{Album, Artist, Track};

/// Group tracks into artists, ordered case-insensitively by name.
///
/// Tracks carrying an album title are filed under that album (albums ordered
/// by title); the rest become singles. Track order within a group is kept.
pub fn group_by_artist(tracks: Vec<Track>) -> Vec<Artist> {
    let mut by_artist: BTreeMap<String, (String, BTreeMap<String, Vec<Track>>, Vec<Track>)> =
        BTreeMap::new();

    for track in tracks {
        let (_, albums, singles) = by_artist
            .entry(track.artist.to_lowercase())
            .or_insert_with(|| (track.artist.clone(), BTreeMap::new(), Vec::new()));

        match track.album.clone() {
            Some(album) => albums.entry(album).or_default().push(track),
            None => singles.push(track),
        }
    }

    by_artist
        .into_values()
        .map(|(name, albums, singles)| Artist {
            name,
            albums: albums
                .into_iter()
                .map(|(title, items)| Album { title, items })
                .collect(),
            singles,
        })
        .collect()
}
