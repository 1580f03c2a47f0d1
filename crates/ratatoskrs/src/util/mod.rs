//! Nucleotide and length helpers.

/// Upper-case ASCII letters in place.
pub fn to_upper_case(seq: &mut [u8]) {
    seq.make_ascii_uppercase();
}

/// Length window `(l / factor, l * factor)`, each at least 1.
pub fn min_max_length(len: usize, len_factor: f64) -> (usize, usize) {
    let len = len as f64;
    ((len / len_factor).max(1.0) as usize, (len * len_factor).max(1.0) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upper_case_in_place() {
        let mut seq = b"acgtNn.-".to_vec();
        to_upper_case(&mut seq);
        assert_eq!(seq, b"ACGTNN.-");
    }

    #[test]
    fn length_window() {
        assert_eq!(min_max_length(1000, 1.25), (800, 1250));
        assert_eq!(min_max_length(0, 1.25), (1, 1));
    }
}
