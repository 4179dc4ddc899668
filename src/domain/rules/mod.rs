// Domain rules - Business logic and policies

/// Minimum acceptable clip length in seconds for AI candidates
pub const MIN_CLIP_SECONDS: f64 = 5.0;

/// Tolerance within which source and target aspect ratios are treated as equal
pub const ASPECT_TOLERANCE: f64 = 0.01;

/// The range invariant: `0 <= start < end <= source_duration`
pub fn range_is_valid(start: f64, end: f64, source_duration: f64) -> bool {
    start.is_finite()
        && end.is_finite()
        && start >= 0.0
        && start < end
        && end <= source_duration
}

/// Acceptance filter for AI candidates: the range invariant plus the minimum
/// clip length. Non-finite times (missing or malformed fields) are rejected.
pub fn candidate_is_acceptable(start: f64, end: f64, source_duration: f64) -> bool {
    range_is_valid(start, end, source_duration) && end - start >= MIN_CLIP_SECONDS
}

/// How the source frame must be cropped to reach the target aspect ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropDecision {
    /// Ratios match within tolerance; extract without re-encoding
    None,
    /// Source is wider than the target; crop the sides
    Sides,
    /// Source is narrower than the target; crop top and bottom
    TopBottom,
}

/// Compare source and target ratios under the fixed tolerance and decide
/// which dimension, if any, must be cropped.
pub fn crop_decision(source_ratio: f64, target_ratio: f64) -> CropDecision {
    if (source_ratio - target_ratio).abs() <= ASPECT_TOLERANCE {
        CropDecision::None
    } else if source_ratio > target_ratio {
        CropDecision::Sides
    } else {
        CropDecision::TopBottom
    }
}

#[cfg(test)]
mod tests;
