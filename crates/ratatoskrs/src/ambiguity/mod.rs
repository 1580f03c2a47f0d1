//! IUPAC ambiguity codes for consensus bases.
//!
//! A code packs the observed nucleotides into four bits (A = bit 0,
//! C = bit 1, G = bit 2, T = bit 3) and indexes [`AMBIGUITY_CODES`]. Index 0
//! is the `.` sentinel for "no base observed".

/// Symbol for every 4-bit nucleotide combination. The order is load-bearing.
pub const AMBIGUITY_CODES: [u8; 16] = *b".ACMGRSVTWYHKDBN";

const _: () = assert!(codes_are_distinct(&AMBIGUITY_CODES));

const fn codes_are_distinct(codes: &[u8; 16]) -> bool {
    let mut i = 0;
    while i < codes.len() {
        let mut j = i + 1;
        while j < codes.len() {
            if codes[i] == codes[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

/// Presence flags of the four nucleotides at one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct BaseFlags {
    pub a: bool,
    pub c: bool,
    pub g: bool,
    pub t: bool,
}

impl BaseFlags {
    pub fn new(a: bool, c: bool, g: bool, t: bool) -> Self {
        Self { a, c, g, t }
    }

    pub fn from_index(idx: u8) -> Self {
        Self {
            a: idx & 0x1 != 0,
            c: idx & 0x2 != 0,
            g: idx & 0x4 != 0,
            t: idx & 0x8 != 0,
        }
    }

    pub fn index(self) -> u8 {
        self.a as u8 | (self.c as u8) << 1 | (self.g as u8) << 2 | (self.t as u8) << 3
    }

    /// Flags with the nucleotide `base` (case-insensitive) set; other symbols
    /// leave the flags unchanged.
    pub fn with_base(mut self, base: u8) -> Self {
        match base.to_ascii_uppercase() {
            b'A' => self.a = true,
            b'C' => self.c = true,
            b'G' => self.g = true,
            b'T' => self.t = true,
            _ => {}
        }
        self
    }
}

/// Ambiguity symbol for a set of observed nucleotides.
pub fn encode(flags: BaseFlags) -> u8 {
    AMBIGUITY_CODES[flags.index() as usize]
}

/// Symbol at `idx`; only the low four bits are used.
pub fn decode(idx: u8) -> u8 {
    AMBIGUITY_CODES[(idx & 0x0F) as usize]
}

/// Index of `symbol` (case-insensitive), or `None` outside the alphabet.
pub fn decode_index(symbol: u8) -> Option<u8> {
    let symbol = symbol.to_ascii_uppercase();
    AMBIGUITY_CODES
        .iter()
        .position(|&c| c == symbol)
        .map(|idx| idx as u8)
}

/// Nucleotide flags of `symbol`, or `None` outside the alphabet.
pub fn decode_flags(symbol: u8) -> Option<BaseFlags> {
    decode_index(symbol).map(BaseFlags::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for idx in 0..16u8 {
            assert_eq!(decode_index(decode(idx)), Some(idx));
        }
    }

    #[test]
    fn flags_round_trip_all_combinations() {
        for idx in 0..16u8 {
            let flags = BaseFlags::from_index(idx);
            assert_eq!(flags.index(), idx);
            assert_eq!(decode_flags(encode(flags)), Some(flags));
        }
    }

    #[test]
    fn known_codes() {
        assert_eq!(encode(BaseFlags::default()), b'.');
        assert_eq!(encode(BaseFlags::new(true, false, false, false)), b'A');
        assert_eq!(encode(BaseFlags::new(true, false, true, false)), b'R');
        assert_eq!(encode(BaseFlags::new(false, true, false, true)), b'Y');
        assert_eq!(encode(BaseFlags::new(true, true, true, true)), b'N');
        assert_eq!(
            decode_flags(b'k'),
            Some(BaseFlags::new(false, false, true, true))
        );
    }

    #[test]
    fn unknown_symbols() {
        assert_eq!(decode_index(b'X'), None);
        assert_eq!(decode_flags(b'-'), None);
    }

    #[test]
    fn flags_from_bases() {
        let flags = b"ggTx"
            .iter()
            .fold(BaseFlags::default(), |f, &b| f.with_base(b));
        assert_eq!(encode(flags), b'K');
    }
}
