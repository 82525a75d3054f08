use std::io::Write;
use std::path::PathBuf;

use crate::artist::extract_artist;
use crate::config;
use crate::error::{MetaError, Result};
use crate::i18n::Catalog;
use crate::library::{display_line, group_by_artist, scan};
use crate::timing::{DurationInput, format_duration, parse_clock_time, relative_time};

pub const USAGE: &str = "usage: trackmeta <command>

commands:
  time <seconds|PT#H#M#S>   format a duration as clock text
  seconds <H:MM:SS>         parse clock text into seconds
  ago <timestamp> [now]     describe a Unix timestamp relative to now
  artist <title> <account>  guess the artist of a track
  library [dir]             list a music folder grouped by artist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Time(DurationInput),
    Seconds(String),
    Ago { timestamp: i64, now: Option<i64> },
    Artist { title: String, account: String },
    Library(Option<PathBuf>),
    Help,
}

fn parse_timestamp(arg: &str) -> Result<i64> {
    arg.trim()
        .parse::<i64>()
        .map_err(|_| MetaError::Usage(format!("not a Unix timestamp: {arg:?}")))
}

impl Command {
    /// Parse command-line arguments, without the program name.
    pub fn parse(args: &[String]) -> Result<Self> {
        let usage = || MetaError::Usage(USAGE.to_string());
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        match args.as_slice() {
            [] | ["help" | "-h" | "--help"] => Ok(Self::Help),
            ["time", input] => Ok(Self::Time(DurationInput::parse_arg(input))),
            ["seconds", text] => Ok(Self::Seconds(text.to_string())),
            ["ago", ts] => Ok(Self::Ago {
                timestamp: parse_timestamp(ts)?,
                now: None,
            }),
            ["ago", ts, now] => Ok(Self::Ago {
                timestamp: parse_timestamp(ts)?,
                now: Some(parse_timestamp(now)?),
            }),
            ["artist", title, account] => Ok(Self::Artist {
                title: title.to_string(),
                account: account.to_string(),
            }),
            ["library"] => Ok(Self::Library(None)),
            ["library", dir] => Ok(Self::Library(Some(PathBuf::from(dir)))),
            _ => Err(usage()),
        }
    }
}

/// Execute `cmd`, writing its output to `out`.
///
/// `now` is the current Unix time in seconds, used when the command does not
/// carry its own.
pub fn execute(
    cmd: &Command,
    settings: &config::Settings,
    catalog: &Catalog,
    now: i64,
    out: &mut impl Write,
) -> Result<()> {
    let io_err = |source: std::io::Error| MetaError::Io {
        path: PathBuf::from("<stdout>"),
        source,
    };

    match cmd {
        Command::Help => writeln!(out, "{USAGE}").map_err(io_err)?,
        Command::Time(input) => writeln!(out, "{}", format_duration(input)?).map_err(io_err)?,
        Command::Seconds(text) => writeln!(out, "{}", parse_clock_time(text)?).map_err(io_err)?,
        Command::Ago { timestamp, now: at } => {
            let rt = relative_time(*timestamp, at.unwrap_or(now));
            writeln!(out, "{}", catalog.phrase(&rt)).map_err(io_err)?;
        }
        Command::Artist { title, account } => {
            writeln!(out, "{}", extract_artist(title, account)?).map_err(io_err)?
        }
        Command::Library(dir) => {
            let dir = dir
                .clone()
                .or_else(|| settings.library.default_dir.clone())
                .unwrap_or_else(|| PathBuf::from("."));
            if !dir.is_dir() {
                return Err(MetaError::Io {
                    path: dir,
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "not a directory"),
                });
            }

            for artist in group_by_artist(scan(&dir, &settings.library)) {
                writeln!(out, "{} ({})", artist.name, artist.track_count()).map_err(io_err)?;
                for album in &artist.albums {
                    writeln!(out, "  {}", album.title).map_err(io_err)?;
                    for track in &album.items {
                        writeln!(out, "    {}", display_line(track)).map_err(io_err)?;
                    }
                }
                for track in &artist.singles {
                    writeln!(out, "  {}", display_line(track)).map_err(io_err)?;
                }
            }
        }
    }

    Ok(())
}
