//! Local music library: scanning a folder into tracks and grouping them by
//! artist into albums and singles.

mod display;
mod group;
mod model;
mod scan;

pub use display::display_line;
pub use group::group_by_artist;
pub use model::*;
pub use scan::scan;
