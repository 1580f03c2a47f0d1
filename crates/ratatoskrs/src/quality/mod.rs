//! Confidence to Sanger quality conversion.

/// Lowest standard quality character (`!`, Q0).
pub const PHRED_BASE: u8 = 33;
/// Quality span covered by a confidence of 1.0.
pub const PHRED_SCALE: u8 = 40;
/// Highest standard quality character (`I`, Q40).
pub const MAX_QUAL: u8 = PHRED_BASE + PHRED_SCALE;

/// Map `score` in [0, 1] onto [`PHRED_BASE`] + `qv_min` ..= [`MAX_QUAL`].
///
/// The value is truncated, and scores outside [0, 1] end up clamped to the
/// standard range.
pub fn to_quality(score: f64, qv_min: u8) -> u8 {
    let qv_min = qv_min.min(PHRED_SCALE);
    let qv = score * f64::from(PHRED_SCALE - qv_min) + f64::from(PHRED_BASE + qv_min);
    if qv.is_nan() {
        return PHRED_BASE + qv_min;
    }
    qv.clamp(f64::from(PHRED_BASE), f64::from(MAX_QUAL)) as u8
}

/// Inverse of [`to_quality`], exact up to its truncation.
pub fn to_score(qual: u8, qv_min: u8) -> f64 {
    let qv_min = qv_min.min(PHRED_SCALE);
    let scale = PHRED_SCALE - qv_min;
    if scale == 0 {
        return 1.0;
    }
    (f64::from(qual) - f64::from(PHRED_BASE + qv_min)) / f64::from(scale)
}

/// Clamp every quality character into [`PHRED_BASE`] ..= [`MAX_QUAL`].
pub fn clamp_to_standard_range(qual: &mut [u8]) {
    for q in qual.iter_mut() {
        *q = (*q).clamp(PHRED_BASE, MAX_QUAL);
    }
}
