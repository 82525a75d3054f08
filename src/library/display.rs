use crate::timing::format_duration_secs;

use super::model::Track;

/// One listing line for a track: `Title [M:SS]`, or just the title when the
/// duration is unknown.
pub fn display_line(track: &Track) -> String {
    let title = track.title.trim();
    match track.duration {
        Some(d) => format!("{} [{}]", title, format_duration_secs(d.as_secs())),
        None => title.to_string(),
    }
}
