//! Assembles the proposed filename from a resolved title and the
//! preserved remainder.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::api::TitlePreference;
use crate::normalize::{expand_season_markers, title_case};
use crate::parser::ParsedCandidate;
use crate::scanner::SourceFile;

static OP_DIGITS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bOP(\d+)\b").unwrap());
static ED_DIGITS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bED(\d+)\b").unwrap());
static MARKER_SPACING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w)(Opening|Ending)").unwrap());
static HYPHEN_SPACING_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\S)-(\S)").unwrap());
static TRAILING_NOISE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(Opening \d+|Ending \d+).*").unwrap());

/// A planned rename for a single file. Computed fresh per file and
/// consumed immediately; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePlan {
    pub original_name: String,
    pub proposed_name: String,
}

// Cleanup transforms applied in order to the joined stem. The order is
// load-bearing: marker digits must be expanded before the spacing rule
// can fire, and truncation has to see the canonical "Opening N" token.
const TRANSFORMS: [fn(&str) -> String; 6] = [
    strip_illegal_chars,
    expand_marker_digits,
    expand_season_markers,
    space_before_marker,
    space_around_hyphens,
    truncate_after_marker,
];

/// Build the proposed filename for an eligible file from its resolved
/// canonical title. The original extension is re-appended unchanged.
pub fn plan(
    file: &SourceFile,
    parsed: &ParsedCandidate,
    resolved: &str,
    preference: TitlePreference,
) -> RenamePlan {
    let title = match preference {
        TitlePreference::English => title_case(resolved),
        TitlePreference::Romaji => resolved.to_string(),
    };

    let mut stem = format!("{}{}", title, parsed.remainder);
    for transform in TRANSFORMS {
        stem = transform(&stem);
    }

    RenamePlan {
        original_name: file.name.clone(),
        proposed_name: format!("{}{}", stem, file.extension),
    }
}

fn strip_illegal_chars(s: &str) -> String {
    const ILLEGAL: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];
    s.chars().filter(|c| !ILLEGAL.contains(c)).collect()
}

fn expand_marker_digits(s: &str) -> String {
    let expanded = OP_DIGITS_REGEX.replace_all(s, "Opening $1");
    ED_DIGITS_REGEX.replace_all(&expanded, "Ending $1").into_owned()
}

fn space_before_marker(s: &str) -> String {
    MARKER_SPACING_REGEX.replace_all(s, "$1 - $2").into_owned()
}

fn space_around_hyphens(s: &str) -> String {
    HYPHEN_SPACING_REGEX.replace_all(s, "$1 - $2").into_owned()
}

fn truncate_after_marker(s: &str) -> String {
    TRAILING_NOISE_REGEX.replace(s, "$1").into_owned()
}
