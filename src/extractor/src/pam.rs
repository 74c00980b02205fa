/// A Protospacer Adjacent Motif pattern, e.g. `"NGG"`. `N` in the pattern
/// matches any base; every other character matches itself.
#[derive(Debug, Clone)]
pub struct Pam {
    pattern: Vec<u8>,
}

impl Pam {
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        Self { pattern: pattern.as_bytes().to_vec() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// The reverse complement of this PAM pattern, used to match the
    /// `pam_right=0` (`-` strand) window edge. `N` reverse-complements to
    /// `N`.
    #[must_use]
    pub fn reverse_complement(&self) -> Self {
        let complemented: Vec<u8> = self
            .pattern
            .iter()
            .rev()
            .map(|&b| match b {
                b'A' => b'T',
                b'T' => b'A',
                b'C' => b'G',
                b'G' => b'C',
                other => other, // 'N' and anything else map to themselves.
            })
            .collect();
        Self { pattern: complemented }
    }

    /// Check whether `window` carries this PAM on its right edge (`pam_right`)
    /// or its left edge, matched character-by-character.
    ///
    /// `N` in the pattern matches anything. In strict mode, a non-`A/C/G/T`
    /// base anywhere in the window's PAM region never matches; `legacy_mode`
    /// relaxes that so a non-ACGT base still matches an `N` pattern
    /// character.
    #[must_use]
    pub fn matches(&self, window: &[u8], pam_right: bool, legacy_mode: bool) -> bool {
        let start = if pam_right { window.len() - self.pattern.len() } else { 0 };
        for (i, &pattern_base) in self.pattern.iter().enumerate() {
            let dna_base = window[start + i];
            if !legacy_mode && !matches!(dna_base, b'A' | b'C' | b'G' | b'T') {
                return false;
            }
            if pattern_base == b'N' {
                continue;
            }
            if dna_base != pattern_base {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ngg_matches_right_edge() {
        let pam = Pam::new("NGG");
        let window = b"ATCACCCTATTAACCACTCACGG";
        assert!(pam.matches(window, true, false));
    }

    #[test]
    fn ngg_rejects_wrong_right_edge() {
        let pam = Pam::new("NGG");
        let window = b"ATCACCCTATTAACCACTCACAT";
        assert!(!pam.matches(window, true, false));
    }

    #[test]
    fn n_in_pattern_matches_any_base() {
        let pam = Pam::new("NGG");
        for base in [b'A', b'C', b'G', b'T'] {
            let mut window = b"XGGXXXXXXXXXXXXXXXXXXXX".to_vec();
            window[0] = base;
            assert!(pam.matches(&window, false, false));
        }
    }

    #[test]
    fn strict_mode_rejects_non_acgt_in_pam_region() {
        let pam = Pam::new("NGG");
        let window = b"XXXXXXXXXXXXXXXXXXXXXGN";
        assert!(!pam.matches(window, true, false));
    }

    #[test]
    fn reverse_complement_reverses_and_complements() {
        let pam = Pam::new("NGG");
        assert_eq!(pam.reverse_complement().pattern, b"CCN".to_vec());
    }

    #[test]
    fn legacy_mode_accepts_non_acgt_under_n_pattern_char() {
        let pam = Pam::new("NGG");
        let window = b"XXXXXXXXXXXXXXXXXXXXXGG";
        assert!(!pam.matches(window, true, false));
        assert!(pam.matches(window, true, true));
    }
}
