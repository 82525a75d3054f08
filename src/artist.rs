use std::sync::LazyLock;

use regex::Regex;

use crate::error::{MetaError, Result};

static REMIX_WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)remix").expect("remix pattern is valid"));

static REMIX_SEGMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\((?P<remixer>[\w\s]+) remix\)").expect("remix segment pattern is valid")
});

static OFFICIAL_SUFFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s\(Official\)\s*$").expect("official suffix pattern is valid")
});

/// A track as listed by a streaming service: its title and the account that
/// uploaded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackDescriptor {
    pub title: String,
    pub account: String,
}

impl TrackDescriptor {
    pub fn new(title: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            account: account.into(),
        }
    }

    pub fn artist(&self) -> Result<String> {
        extract_artist(&self.title, &self.account)
    }
}

/// Guess the artist of a track from its title and uploader account.
///
/// Rules, first match wins:
/// 1. a remix title credits the remixer: `Talk Talk (Moon Boots Remix)` gives `Moon Boots`;
/// 2. an `Artist - Title` title gives the part before the first ` - `;
/// 3. otherwise the account, without a trailing ` (Official)`.
///
/// A title mentioning "remix" without a `(<name> Remix)` segment is an error
/// rather than a fall-through.
pub fn extract_artist(title: &str, account: &str) -> Result<String> {
    let artist = if REMIX_WORD_REGEX.is_match(title) {
        REMIX_SEGMENT_REGEX
            .captures(title)
            .and_then(|caps| caps.name("remixer"))
            .map(|m| m.as_str())
            .ok_or_else(|| MetaError::ArtistExtraction {
                rule: "remix",
                title: title.to_string(),
            })?
    } else if let Some((before, _)) = title.split_once(" - ") {
        before
    } else {
        match OFFICIAL_SUFFIX_REGEX.find(account) {
            Some(m) => &account[..m.start()],
            None => account,
        }
    };

    Ok(artist.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_is_used_for_plain_titles() {
        assert_eq!(extract_artist("Maliblue", "Darius").unwrap(), "Darius");
    }

    #[test]
    fn dash_separated_title_yields_leading_artist() {
        assert_eq!(
            extract_artist("Kartell - Aura", "RocheMusique").unwrap(),
            "Kartell"
        );
        assert_eq!(
            extract_artist("  Darius - Helios - Live", "x").unwrap(),
            "Darius"
        );
    }

    #[test]
    fn remix_title_yields_remixer() {
        assert_eq!(
            extract_artist("Talk Talk (Moon Boots Remix)", "future classic").unwrap(),
            "Moon Boots"
        );
        assert_eq!(
            extract_artist("Crave You - Flight Facilities (adventure club REMIX)", "x").unwrap(),
            "adventure club"
        );
    }

    #[test]
    fn official_suffix_is_stripped_from_account() {
        assert_eq!(
            extract_artist("Take Care of You", "Cherokee (Official)").unwrap(),
            "Cherokee"
        );
        assert_eq!(
            extract_artist("Take Care of You", "The Official Band").unwrap(),
            "The Official Band"
        );
    }

    #[test]
    fn hyphen_without_spaces_does_not_split() {
        assert_eq!(extract_artist("Lo-Fi Nights", "Chillhop").unwrap(), "Chillhop");
    }

    #[test]
    fn remix_word_without_segment_is_an_error() {
        let err = extract_artist("Remix Collection Vol. 2", "label").unwrap_err();
        match err {
            MetaError::ArtistExtraction { rule, title } => {
                assert_eq!(rule, "remix");
                assert_eq!(title, "Remix Collection Vol. 2");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn descriptor_delegates_to_extractor() {
        let track = TrackDescriptor::new("Kartell - Aura", "RocheMusique");
        assert_eq!(track.artist().unwrap(), "Kartell");
    }
}
