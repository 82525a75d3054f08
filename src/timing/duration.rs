use std::sync::LazyLock;

use regex::Regex;

use crate::error::{MetaError, Result};

static ISO_DURATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^PT(?:(?P<h>\d+)H)?(?:(?P<m>\d+)M)?(?:(?P<s>\d+)S)?$")
        .expect("ISO duration pattern is valid")
});

/// A track duration as handed over by a media source.
///
/// Local files and SoundCloud report a number of seconds; YouTube reports an
/// ISO 8601 duration such as `PT1H2M3S`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationInput {
    Seconds(u64),
    Iso8601(String),
}

impl DurationInput {
    /// Pick a variant for raw command-line text: all digits means seconds,
    /// anything else is treated as an ISO 8601 duration.
    pub fn parse_arg(arg: &str) -> Self {
        let arg = arg.trim();
        match arg.parse::<u64>() {
            Ok(secs) if arg.bytes().all(|b| b.is_ascii_digit()) => Self::Seconds(secs),
            _ => Self::Iso8601(arg.to_string()),
        }
    }
}

impl From<u64> for DurationInput {
    fn from(secs: u64) -> Self {
        Self::Seconds(secs)
    }
}

impl From<&str> for DurationInput {
    fn from(iso: &str) -> Self {
        Self::Iso8601(iso.to_string())
    }
}

/// Hours, minutes and seconds before padding.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Clock {
    hours: u64,
    minutes: u64,
    seconds: u64,
}

impl Clock {
    fn from_secs(total: u64) -> Self {
        let hours = total / 3600;
        Self {
            hours,
            minutes: total / 60 - hours * 60,
            seconds: total % 60,
        }
    }

    fn from_iso(text: &str) -> Result<Self> {
        let invalid = || MetaError::InvalidDurationFormat(text.to_string());
        let caps = ISO_DURATION_REGEX.captures(text.trim()).ok_or_else(invalid)?;

        let field = |name: &str| -> Result<Option<u64>> {
            caps.name(name)
                .map(|m| m.as_str().parse::<u64>().map_err(|_| invalid()))
                .transpose()
        };

        let hours = field("h")?;
        let minutes = field("m")?;
        // `PT5M` carries no seconds component; it is five minutes flat.
        let seconds = field("s")?;

        if hours.is_none() && minutes.is_none() && seconds.is_none() {
            return Err(invalid());
        }

        log::debug!("parsed ISO duration {text:?} as {hours:?}h {minutes:?}m {seconds:?}s");

        Ok(Self {
            hours: hours.unwrap_or(0),
            minutes: minutes.unwrap_or(0),
            seconds: seconds.unwrap_or(0),
        })
    }

    fn render(self) -> String {
        if self.hours == 0 {
            format!("{}:{:02}", self.minutes, self.seconds)
        } else {
            format!("{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
        }
    }
}

/// Render a duration as clock text: `M:SS` below one hour, `H:MM:SS` above.
///
/// Seconds are always two digits; minutes only once an hour field is shown.
/// ISO components are printed as given, so `PT90S` renders as `0:90`.
///
/// ```
/// use trackmeta::timing::{format_duration, DurationInput};
///
/// assert_eq!(format_duration(&DurationInput::Seconds(3723)).unwrap(), "1:02:03");
/// assert_eq!(format_duration(&DurationInput::from("PT4M13S")).unwrap(), "4:13");
/// ```
pub fn format_duration(input: &DurationInput) -> Result<String> {
    let clock = match input {
        DurationInput::Seconds(secs) => Clock::from_secs(*secs),
        DurationInput::Iso8601(text) => Clock::from_iso(text)?,
    };
    Ok(clock.render())
}

/// Infallible shorthand for the seconds path of [`format_duration`].
pub fn format_duration_secs(secs: u64) -> String {
    Clock::from_secs(secs).render()
}

/// Parse clock text (`H:MM:SS`, `M:SS` or plain `S`) back into seconds.
pub fn parse_clock_time(text: &str) -> Result<u64> {
    let invalid = || MetaError::InvalidClockTimeFormat(text.to_string());

    let fields: Vec<&str> = text.trim().split(':').collect();
    if fields.len() > 3 {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    for (field, unit) in fields.iter().rev().zip([1u64, 60, 3600]) {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let value = field.parse::<u64>().map_err(|_| invalid())?;
        total = value
            .checked_mul(unit)
            .and_then(|v| total.checked_add(v))
            .ok_or_else(invalid)?;
    }

    Ok(total)
}
