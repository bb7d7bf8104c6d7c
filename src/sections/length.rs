//! Length section - awards points for password length.

use super::SectionResult;

const MIN_LENGTH: usize = 8;

const POINTS_PER_CHAR: u32 = 4;
/// Cap on the points earned by the first characters.
const SHORT_CAP: u32 = 14;
/// Characters past this position earn points again.
const PLATEAU_END: usize = 9;
const MAX_POINTS: u32 = 40;

/// Scores the password length.
///
/// Each character is worth 4 points up to 14, then nothing until the
/// ninth character; every character after that adds 4 more, up to 40.
///
/// # Returns
/// - `reason` set if the password is shorter than the recommended minimum
pub fn length_section(password: &str) -> SectionResult {
    let len = password.chars().count();
    let base = saturating_u32(len).saturating_mul(POINTS_PER_CHAR).min(SHORT_CAP);
    let extra = saturating_u32(len.saturating_sub(PLATEAU_END)).saturating_mul(POINTS_PER_CHAR);
    let points = base.saturating_add(extra).min(MAX_POINTS);

    let reason = (len < MIN_LENGTH)
        .then(|| format!("Password must be at least {} characters", MIN_LENGTH));

    SectionResult { points, reason }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
