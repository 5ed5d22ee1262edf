//! Mathematical helpers for report rendering
//!
//! Percentages here always guard against an empty denominator so an empty
//! library renders as zeros rather than NaN.

/// Calculate percentage safely, returning 0.0 if total is zero.
///
/// # Examples
/// ```
/// use plex_tools::utils::math::safe_percentage;
///
/// assert_eq!(safe_percentage(1, 4), 25.0);
/// assert_eq!(safe_percentage(0, 100), 0.0);
/// assert_eq!(safe_percentage(3, 0), 0.0);
/// ```
#[inline]
pub fn safe_percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (part as f64 / total as f64) * 100.0
    }
}
