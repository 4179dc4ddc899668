//! Validating-parse behavior over raw AI output

use clipsmith::suggest::{parse_suggestions, SuggestError, FALLBACK_TITLE};

const WELL_FORMED: &str = r#"[
    {
        "startTime": 10,
        "endTime": 40,
        "title": "Big reveal",
        "description": "The moment everything changes.",
        "captions": {"en": "Wait for it #shorts", "hi": "रुको ज़रा #shorts"}
    },
    {
        "startTime": 115,
        "endTime": 125,
        "title": "Finale",
        "description": "The closing beat.",
        "captions": {"en": "The end #viral", "hi": "अंत #viral"}
    }
]"#;

#[test]
fn candidates_past_the_source_duration_are_dropped() {
    // duration 120: the 115-125 candidate overruns and must be excluded
    let clips = parse_suggestions(WELL_FORMED, 120.0).unwrap();
    assert_eq!(clips.len(), 1);
    assert_eq!(clips[0].start_time, 10.0);
    assert_eq!(clips[0].end_time, 40.0);
    assert_eq!(clips[0].title, "Big reveal");
    assert_eq!(clips[0].captions.hi, "रुको ज़रा #shorts");
}

#[test]
fn candidates_below_minimum_duration_are_dropped() {
    let body = r#"[
        {"startTime": 10, "endTime": 14, "title": "too short", "description": "d",
         "captions": {"en": "e", "hi": "h"}},
        {"startTime": 20, "endTime": 25, "title": "long enough", "description": "d",
         "captions": {"en": "e", "hi": "h"}}
    ]"#;
    let clips = parse_suggestions(body, 120.0).unwrap();
    assert_eq!(clips.len(), 1);
    assert_eq!(clips[0].title, "long enough");
}

#[test]
fn inverted_and_malformed_ranges_are_dropped() {
    let body = r#"[
        {"startTime": 40, "endTime": 10, "title": "inverted", "description": "d",
         "captions": {"en": "e", "hi": "h"}},
        {"endTime": 30, "title": "missing start", "description": "d",
         "captions": {"en": "e", "hi": "h"}}
    ]"#;
    let clips = parse_suggestions(body, 120.0).unwrap();
    assert!(clips.is_empty());
}

#[test]
fn empty_array_is_a_valid_empty_result() {
    let clips = parse_suggestions("[]", 120.0).unwrap();
    assert!(clips.is_empty());
}

#[test]
fn empty_body_is_a_normalized_error() {
    let err = parse_suggestions("", 120.0).unwrap_err();
    assert!(matches!(err, SuggestError::EmptyResponse));
    assert_eq!(err.banner().title, "Analysis Failed");
}

#[test]
fn non_array_body_is_a_normalized_error() {
    let err = parse_suggestions(r#"{"clips": []}"#, 120.0).unwrap_err();
    assert!(matches!(err, SuggestError::NotAnArray));

    let err = parse_suggestions("garbage", 120.0).unwrap_err();
    assert!(matches!(err, SuggestError::Malformed(_)));
    assert_eq!(err.banner().title, "Analysis Failed");
}

#[test]
fn missing_text_fields_get_fallbacks() {
    let body = r#"[{"startTime": 0, "endTime": 30, "captions": {"en": "", "hi": null}}]"#;
    let clips = parse_suggestions(body, 120.0).unwrap();
    assert_eq!(clips.len(), 1);
    assert_eq!(clips[0].title, FALLBACK_TITLE);
    assert_eq!(clips[0].captions.en, "No English caption generated.");
    assert_eq!(clips[0].captions.hi, "कोई हिंदी कैप्शन नहीं बनाया गया।");
}

#[test]
fn clip_ids_are_unique_within_a_batch() {
    let body = r#"[
        {"startTime": 0, "endTime": 30, "title": "a", "description": "d",
         "captions": {"en": "e", "hi": "h"}},
        {"startTime": 40, "endTime": 70, "title": "b", "description": "d",
         "captions": {"en": "e", "hi": "h"}}
    ]"#;
    let clips = parse_suggestions(body, 120.0).unwrap();
    assert_eq!(clips.len(), 2);
    assert_ne!(clips[0].id, clips[1].id);
    assert!(clips[0].id.starts_with("clip-0-"));
    assert!(clips[1].id.starts_with("clip-1-"));
}
