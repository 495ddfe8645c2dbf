/// A filename stem split at the first opening/ending marker.
///
/// `title_fragment` is the raw, unresolved anime title preceding the
/// marker; `remainder` is everything from the end of the fragment to the
/// end of the stem (separators, marker, episode digits, release noise),
/// preserved verbatim for the planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCandidate {
    pub title_fragment: String,
    pub remainder: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_fields() {
        let candidate = ParsedCandidate {
            title_fragment: "Attack on Titan".to_string(),
            remainder: " - OP1".to_string(),
        };

        assert_eq!(candidate.title_fragment, "Attack on Titan");
        assert_eq!(candidate.remainder, " - OP1");
    }
}
