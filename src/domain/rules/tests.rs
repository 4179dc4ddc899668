// Unit tests for business rules

use super::*;

#[test]
fn test_range_invariant() {
    assert!(range_is_valid(0.0, 10.0, 120.0));
    assert!(range_is_valid(10.0, 120.0, 120.0));

    assert!(!range_is_valid(-0.1, 10.0, 120.0));
    assert!(!range_is_valid(10.0, 10.0, 120.0));
    assert!(!range_is_valid(40.0, 10.0, 120.0));
    assert!(!range_is_valid(10.0, 120.1, 120.0));
    assert!(!range_is_valid(f64::NAN, 10.0, 120.0));
    assert!(!range_is_valid(0.0, f64::INFINITY, 120.0));
}

#[test]
fn test_candidate_filter_minimum_duration() {
    assert!(candidate_is_acceptable(10.0, 15.0, 120.0));
    assert!(!candidate_is_acceptable(10.0, 14.9, 120.0));
}

#[test]
fn test_candidate_filter_source_bounds() {
    // endTime past the source duration
    assert!(!candidate_is_acceptable(115.0, 125.0, 120.0));
    // inverted range
    assert!(!candidate_is_acceptable(40.0, 10.0, 120.0));
}

#[test]
fn test_crop_decision_within_tolerance() {
    // 1920x1080 against 16:9 differs only in float noise
    assert_eq!(
        crop_decision(1920.0 / 1080.0, 16.0 / 9.0),
        CropDecision::None
    );
    assert_eq!(crop_decision(1.0, 1.005), CropDecision::None);
    assert_eq!(crop_decision(1.0, 1.02), CropDecision::TopBottom);
}

#[test]
fn test_crop_decision_source_wider() {
    // landscape source, portrait target: crop the sides
    assert_eq!(
        crop_decision(1920.0 / 1080.0, 9.0 / 16.0),
        CropDecision::Sides
    );
}

#[test]
fn test_crop_decision_source_narrower() {
    // portrait source, landscape target: crop top and bottom
    assert_eq!(
        crop_decision(1080.0 / 1920.0, 16.0 / 9.0),
        CropDecision::TopBottom
    );
}
