use super::*;
use crate::error::MetaError;

fn fmt(secs: u64) -> String {
    format_duration(&DurationInput::Seconds(secs)).unwrap()
}

fn fmt_iso(iso: &str) -> String {
    format_duration(&DurationInput::from(iso)).unwrap()
}

#[test]
fn seconds_below_an_hour_render_unpadded_minutes() {
    assert_eq!(fmt(0), "0:00");
    assert_eq!(fmt(5), "0:05");
    assert_eq!(fmt(59), "0:59");
    assert_eq!(fmt(60), "1:00");
    assert_eq!(fmt(150), "2:30");
    assert_eq!(fmt(599), "9:59");
    assert_eq!(fmt(3599), "59:59");
}

#[test]
fn seconds_above_an_hour_pad_minutes() {
    assert_eq!(fmt(3600), "1:00:00");
    assert_eq!(fmt(3723), "1:02:03");
    assert_eq!(fmt(36_000), "10:00:00");
    assert_eq!(fmt(359_999), "99:59:59");
}

#[test]
fn padding_rules_hold_across_range() {
    for s in 0..600u64 {
        let out = fmt(s);
        assert!(!out.starts_with('0') || s < 60, "{s} -> {out}");
        assert_eq!(out.split(':').count(), 2);
    }
    for s in (3600..20_000u64).step_by(37) {
        let out = fmt(s);
        let fields: Vec<&str> = out.split(':').collect();
        assert_eq!(fields.len(), 3, "{s} -> {out}");
        assert_eq!(fields[1].len(), 2, "{s} -> {out}");
        assert_eq!(fields[2].len(), 2, "{s} -> {out}");
    }
}

#[test]
fn iso_durations_match_their_seconds_equivalent() {
    assert_eq!(fmt_iso("PT1H2M3S"), fmt(3723));
    assert_eq!(fmt_iso("PT4M13S"), "4:13");
    assert_eq!(fmt_iso("PT45S"), "0:45");
    assert_eq!(fmt_iso("PT2H"), "2:00:00");
    assert_eq!(fmt_iso("PT1H5S"), "1:00:05");
}

#[test]
fn iso_minutes_without_seconds_is_whole_minutes() {
    assert_eq!(fmt_iso("PT5M"), fmt(300));
    assert_eq!(fmt_iso("PT1H10M"), "1:10:00");
}

#[test]
fn iso_components_are_not_normalized() {
    assert_eq!(fmt_iso("PT90S"), "0:90");
}

#[test]
fn malformed_iso_durations_are_rejected() {
    for bad in ["garbage", "PT", "P1D", "PT1M1H", "PT-5S", "PT5", "1H2M", "PT1.5S", ""] {
        let err = format_duration(&DurationInput::from(bad)).unwrap_err();
        assert!(
            matches!(err, MetaError::InvalidDurationFormat(ref s) if s == bad),
            "{bad:?} gave {err:?}"
        );
    }
}

#[test]
fn parse_arg_picks_variant() {
    assert_eq!(DurationInput::parse_arg("125"), DurationInput::Seconds(125));
    assert_eq!(DurationInput::parse_arg(" 7 "), DurationInput::Seconds(7));
    assert_eq!(
        DurationInput::parse_arg("PT3M"),
        DurationInput::Iso8601("PT3M".to_string())
    );
    assert_eq!(
        DurationInput::parse_arg("+5"),
        DurationInput::Iso8601("+5".to_string())
    );
}

#[test]
fn clock_time_parses_all_shapes() {
    assert_eq!(parse_clock_time("2:30").unwrap(), 150);
    assert_eq!(parse_clock_time("1:02:03").unwrap(), 3723);
    assert_eq!(parse_clock_time("42").unwrap(), 42);
    assert_eq!(parse_clock_time("0:00").unwrap(), 0);
    assert_eq!(parse_clock_time(" 10:00:00 ").unwrap(), 36_000);
}

#[test]
fn clock_time_rejects_bad_fields() {
    for bad in ["1:2:3:4", "a:10", "1::00", "", ":", "1:-5", "1:5s"] {
        let err = parse_clock_time(bad).unwrap_err();
        assert!(
            matches!(err, MetaError::InvalidClockTimeFormat(_)),
            "{bad:?} gave {err:?}"
        );
    }
}

#[test]
fn clock_round_trip_up_to_99_hours() {
    for s in 0..=359_999u64 {
        assert_eq!(parse_clock_time(&format_duration_secs(s)).unwrap(), s);
    }
}

#[test]
fn relative_time_bucket_boundaries() {
    let now = 1_700_000_000;
    let cases = [
        (0, Bucket::SecondsAgo, 0),
        (59, Bucket::SecondsAgo, 59),
        (60, Bucket::MinutesAgo, 1),
        (3599, Bucket::MinutesAgo, 59),
        (3600, Bucket::HoursAgo, 1),
        (86_399, Bucket::HoursAgo, 23),
        (86_400, Bucket::DaysAgo, 1),
        (2_591_999, Bucket::DaysAgo, 29),
        (2_592_000, Bucket::MonthsAgo, 1),
        (2_592_000 * 14 + 5, Bucket::MonthsAgo, 14),
    ];
    for (ago, bucket, magnitude) in cases {
        assert_eq!(
            relative_time(now - ago, now),
            RelativeTime { bucket, magnitude },
            "{ago}s ago"
        );
    }
}

#[test]
fn relative_time_clamps_future_timestamps() {
    let rt = relative_time(1_000, 900);
    assert_eq!(rt.bucket, Bucket::SecondsAgo);
    assert_eq!(rt.magnitude, 0);
}

#[test]
fn bucket_keys_match_catalog_names() {
    assert_eq!(Bucket::MinutesAgo.key(), "minutes_ago");
    assert_eq!(Bucket::MonthsAgo.to_string(), "months_ago");
    assert_eq!(Bucket::DaysAgo.translation_key(), "meta.timing.days_ago");
}
