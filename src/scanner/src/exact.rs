use crate::query::Query;

/// Positions at which `query` appears verbatim in `guides`, 1-based.
///
/// A guide matches if it equals either strand encoding of the query: the
/// index stores each protospacer once, tagged with whichever strand it was
/// extracted on, so a query must be compared against both orientations to
/// find every occurrence. A query containing `N` matches nothing, even
/// though its strand encodings equal [`codec::ERROR_WORD`] just like any
/// `N`-bearing stored guide.
#[must_use]
pub fn search_exact(guides: &[u64], query: &Query) -> Vec<usize> {
    if query.contains_n {
        return Vec::new();
    }
    guides
        .iter()
        .enumerate()
        .filter(|(_, &g)| g == query.q1 || g == query.q0)
        .map(|(i, _)| i + 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guides_array_with_matches() -> Vec<u64> {
        vec![
            0b10000000001111010000000011110101111011101,
            0b10000011110100000000111101011110111011110,
            0b1000100000010100101111110101001011111111,
            0b11000100000010100101111110101001011111111,
            0b1100110101010001000100010100010001010100,
            0b10111111010100101111111111100111111101,
            0b11000100000010100101111110101001011111111,
        ]
    }

    #[test]
    fn finds_multiple_matches() {
        let query = Query::new("AAAACTGGAAACTGGTTCTC").unwrap();
        assert_eq!(search_exact(&guides_array_with_matches(), &query), vec![1, 3]);
    }

    #[test]
    fn finds_no_matches() {
        let guides = vec![
            0b111000001010111000001010111000001010111u64,
            0b1100000101011100000101011100000101011100,
            codec::ERROR_WORD,
        ];
        let query = Query::new("AAAACTGGAAACTGGTTCTC").unwrap();
        assert!(search_exact(&guides, &query).is_empty());
    }

    #[test]
    fn n_query_matches_nothing_even_against_error_word_guides() {
        let guides = vec![codec::ERROR_WORD, codec::ERROR_WORD];
        let seq = format!("N{}", "A".repeat(19));
        let query = Query::new(&seq).unwrap();
        assert!(search_exact(&guides, &query).is_empty());
    }
}
