//! Export-command synthesis against the aspect-ratio rules

use clipsmith::export::plan_export;
use clipsmith::{AspectRatio, Captions, Clip, SourceVideo};

fn clip(start: f64, end: f64) -> Clip {
    Clip {
        id: "clip-0-1".to_string(),
        start_time: start,
        end_time: end,
        title: "t".to_string(),
        description: "d".to_string(),
        captions: Captions {
            en: "e".to_string(),
            hi: "h".to_string(),
        },
    }
}

fn source(width: u32, height: u32) -> SourceVideo {
    SourceVideo::new("talk.mp4".to_string(), 300.0, width, height).unwrap()
}

#[test]
fn matching_ratios_extract_without_reencoding() {
    let plan = plan_export(
        &clip(10.0, 40.0),
        &source(1920, 1080),
        AspectRatio::WIDE,
        "talk.mp4",
        "short.mp4",
    );
    assert!(!plan.reencode);
    assert!(plan.crop_filter.is_none());
    assert!(plan.command.contains("-c copy"));
    assert!(!plan.command.contains("crop"));
}

#[test]
fn wide_source_to_tall_target_crops_the_sides() {
    // 1920x1080 (~1.78) to 9:16 (0.5625): source wider, crop width
    let plan = plan_export(
        &clip(10.0, 40.0),
        &source(1920, 1080),
        AspectRatio::TALL,
        "talk.mp4",
        "short.mp4",
    );
    assert!(plan.reencode);
    assert!(plan.command.contains("crop=ih*0.5625:ih"));
    assert!(plan.command.contains("-c:a copy"));
    assert!(!plan.command.contains("-c copy \""));
}

#[test]
fn tall_source_to_wide_target_crops_top_and_bottom() {
    let plan = plan_export(
        &clip(0.0, 20.0),
        &source(1080, 1920),
        AspectRatio::WIDE,
        "talk.mp4",
        "short.mp4",
    );
    assert!(plan.reencode);
    assert!(plan.command.contains("crop=iw:iw/1.7778"));
}

#[test]
fn times_are_formatted_as_full_timestamps() {
    let plan = plan_export(
        &clip(75.5, 3723.25),
        &source(1920, 1080),
        AspectRatio::WIDE,
        "talk.mp4",
        "short.mp4",
    );
    assert!(plan.command.contains("-ss 00:01:15.500"));
    assert!(plan.command.contains("-to 01:02:03.250"));
}

#[test]
fn near_match_within_tolerance_skips_the_crop() {
    // 1.77 vs 16:9 (1.7778) differs by less than 0.01
    let plan = plan_export(
        &clip(0.0, 20.0),
        &source(1770, 1000),
        AspectRatio::WIDE,
        "talk.mp4",
        "short.mp4",
    );
    assert!(plan.crop_filter.is_none());
}

#[test]
fn command_follows_the_expected_pattern() {
    let plan = plan_export(
        &clip(10.0, 40.0),
        &source(1920, 1080),
        AspectRatio::WIDE,
        "in dir/talk.mp4",
        "out.mp4",
    );
    assert_eq!(
        plan.command,
        "ffmpeg -i \"in dir/talk.mp4\" -ss 00:00:10.000 -to 00:00:40.000 -c copy \"out.mp4\""
    );
}
