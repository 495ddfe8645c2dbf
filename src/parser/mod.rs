mod types;

pub use types::*;

use once_cell::sync::Lazy;
use regex::Regex;

// Eligibility pattern: a title portion, one or more hyphen/whitespace
// separators, then an opening/ending marker. The title portion is
// non-greedy, so the match stops at the leftmost marker.
static MARKER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(.*?)[-\s]+(?:OP\d*|Opening|ED\d*|Ending)").unwrap());

/// Split a filename stem into the raw title fragment and the preserved
/// remainder. Returns `None` when the stem carries no opening/ending
/// marker, which makes the file ineligible for renaming.
pub fn parse(stem: &str) -> Option<ParsedCandidate> {
    let captures = MARKER_REGEX.captures(stem)?;
    let title_fragment = captures.get(1)?.as_str().trim();

    if title_fragment.is_empty() {
        return None;
    }

    // The remainder starts where the trimmed fragment ends, so whatever
    // whitespace was trimmed off the fragment survives into the remainder.
    let remainder = stem.get(title_fragment.len()..).unwrap_or_default();

    Some(ParsedCandidate {
        title_fragment: title_fragment.to_string(),
        remainder: remainder.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hyphen_separator() {
        let parsed = parse("Attack on Titan - OP1 1080p").unwrap();

        assert_eq!(parsed.title_fragment, "Attack on Titan");
        assert_eq!(parsed.remainder, " - OP1 1080p");
    }

    #[test]
    fn test_parse_space_separator() {
        let parsed = parse("Cowboy Bebop OP").unwrap();

        assert_eq!(parsed.title_fragment, "Cowboy Bebop");
        assert_eq!(parsed.remainder, " OP");
    }

    #[test]
    fn test_parse_tight_hyphen() {
        let parsed = parse("AttackOnTitan-OP1").unwrap();

        assert_eq!(parsed.title_fragment, "AttackOnTitan");
        assert_eq!(parsed.remainder, "-OP1");
    }

    #[test]
    fn test_parse_ending_marker() {
        let parsed = parse("Your Lie in April - ED2").unwrap();

        assert_eq!(parsed.title_fragment, "Your Lie in April");
        assert_eq!(parsed.remainder, " - ED2");
    }

    #[test]
    fn test_parse_full_word_markers() {
        let parsed = parse("Haikyuu - Opening 3").unwrap();
        assert_eq!(parsed.title_fragment, "Haikyuu");

        let parsed = parse("Haikyuu - Ending 1").unwrap();
        assert_eq!(parsed.title_fragment, "Haikyuu");
    }

    #[test]
    fn test_parse_case_insensitive_marker() {
        let parsed = parse("fullmetal alchemist - op3").unwrap();

        assert_eq!(parsed.title_fragment, "fullmetal alchemist");
        assert_eq!(parsed.remainder, " - op3");
    }

    #[test]
    fn test_parse_leftmost_marker_wins() {
        // Multiple marker-like substrings: the first one is authoritative
        let parsed = parse("Show OP ED Fight").unwrap();

        assert_eq!(parsed.title_fragment, "Show");
        assert_eq!(parsed.remainder, " OP ED Fight");
    }

    #[test]
    fn test_parse_marker_inside_word_not_matched() {
        // "OP" embedded in a word has no separator before it
        assert!(parse("Piano Concerto").is_none());
        assert!(parse("Lupin the Third").is_none());
    }

    #[test]
    fn test_parse_no_marker() {
        assert!(parse("Some Random Video").is_none());
        assert!(parse("Movie 1080p").is_none());
    }

    #[test]
    fn test_parse_marker_without_title_not_eligible() {
        assert!(parse("- OP1").is_none());
    }

    #[test]
    fn test_parse_empty_stem() {
        assert!(parse("").is_none());
    }
}
