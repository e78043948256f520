use chrono::{NaiveDate, Timelike};
use std::path::Path;
use vibecheck::error::VibecheckError;
use vibecheck::posts::{load_posts, parse_posts, parse_timestamp};

#[test]
fn posts_are_sorted_and_defaulted() {
    let posts = parse_posts(
        r#"[
            {"platform": "Instagram", "timestamp": "2024-03-02T18:00:00", "text": "later", "likes": 3},
            {"timestamp": "2024-03-01 07:15:00", "text": "earlier"}
        ]"#,
    )
    .unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].text, "earlier");
    assert_eq!(posts[0].platform, "other");
    assert_eq!(posts[0].likes, 0);
    assert_eq!(posts[0].retweets, 0);
    assert_eq!(posts[1].platform, "instagram");
    assert_eq!(posts[1].likes, 3);
    assert_eq!(posts[1].hour(), 18);
}

#[test]
fn blank_platform_falls_back_to_other() {
    let posts = parse_posts(
        r#"[
            {"platform": "", "timestamp": "2024-03-01T09:00:00"},
            {"platform": "  ", "timestamp": "2024-03-01T10:00:00"}
        ]"#,
    )
    .unwrap();
    assert_eq!(posts[0].platform, "other");
    assert_eq!(posts[1].platform, "other");
}

#[test]
fn duplicate_posts_are_kept() {
    let posts = parse_posts(
        r#"[
            {"timestamp": "2024-03-01T09:00:00", "text": "same"},
            {"timestamp": "2024-03-01T09:00:00", "text": "same"}
        ]"#,
    )
    .unwrap();
    assert_eq!(posts.len(), 2);
}

#[test]
fn malformed_timestamp_is_an_input_error() {
    let result = parse_posts(
        r#"[
            {"timestamp": "2024-03-01T09:00:00"},
            {"timestamp": "yesterday-ish"}
        ]"#,
    );
    match result {
        Err(VibecheckError::Timestamp { index, value }) => {
            assert_eq!(index, 1);
            assert_eq!(value, "yesterday-ish");
        }
        other => panic!("expected timestamp error, got {:?}", other),
    }
}

#[test]
fn invalid_json_is_an_input_error() {
    assert!(matches!(parse_posts("{not json"), Err(VibecheckError::Json(_))));
    assert!(matches!(
        parse_posts(r#"[{"text": "no timestamp"}]"#),
        Err(VibecheckError::Json(_))
    ));
}

#[test]
fn negative_counters_are_rejected() {
    let result = parse_posts(r#"[{"timestamp": "2024-03-01T09:00:00", "likes": -4}]"#);
    assert!(matches!(
        result,
        Err(VibecheckError::Counter { field: "likes", .. })
    ));
}

#[test]
fn fractional_counters_truncate() {
    let posts = parse_posts(r#"[{"timestamp": "2024-03-01T09:00:00", "shares": 2.9}]"#).unwrap();
    assert_eq!(posts[0].shares, 2);
}

#[test]
fn timestamps_accept_common_iso_forms() {
    let with_offset = parse_timestamp("2024-03-01T22:30:00+05:00").unwrap();
    assert_eq!(with_offset.hour(), 22);

    let utc = parse_timestamp("2024-03-01T08:00:00Z").unwrap();
    assert_eq!(utc.hour(), 8);

    let fractional = parse_timestamp("2024-03-01T08:00:00.250").unwrap();
    assert_eq!(fractional.hour(), 8);

    let minutes = parse_timestamp("2024-03-01 13:45").unwrap();
    assert_eq!(minutes.hour(), 13);

    let date_only = parse_timestamp("2024-03-01").unwrap();
    assert_eq!(date_only.date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    assert_eq!(date_only.hour(), 0);

    assert!(parse_timestamp("03/01/2024").is_none());
}

#[test]
fn missing_file_reports_path() {
    let err = load_posts(Path::new("does/not/exist.json")).unwrap_err();
    assert!(matches!(err, VibecheckError::Io { .. }));
    assert!(err.to_string().contains("does/not/exist.json"));
}
