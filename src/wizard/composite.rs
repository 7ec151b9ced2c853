//! Composite (overall) test score
//!
//! The IELTS overall band is derived from the four module bands on read.

/// Round to the nearest half point; exact quarters round up.
pub fn round_to_half(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}

/// Average of the four module scores rounded to the nearest half point.
///
/// Returns `None` until every module has a non-zero score.
pub fn composite_score(listening: f64, reading: f64, writing: f64, speaking: f64) -> Option<f64> {
    let scores = [listening, reading, writing, speaking];
    if scores.iter().any(|s| *s == 0.0 || !s.is_finite()) {
        return None;
    }
    let average = scores.iter().sum::<f64>() / 4.0;
    Some(round_to_half(average))
}
