//! Pure string transforms shared by the resolver and the rename planner.

use once_cell::sync::Lazy;
use regex::Regex;

// Two-part rule must run before the single rule so "S1Part2" is not
// left half-expanded as "Season 1Part2".
static SEASON_PART_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)S(\d+)Part(\d+)").unwrap());
static SEASON_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)S(\d+)\b").unwrap());

/// Words kept lowercase in title-case output, unless they lead the title.
const STOP_WORDS: [&str; 18] = [
    "a", "an", "and", "as", "at", "but", "by", "for", "in", "nor", "of", "on", "or", "so",
    "the", "to", "up", "yet",
];

/// Title-case a string: the first word is always capitalized, later words
/// only when they are not stop words. Word interiors keep their case.
pub fn title_case(title: &str) -> String {
    let mut words = title.split_whitespace();

    let Some(first) = words.next() else {
        return title.to_string();
    };

    let mut formatted = vec![capitalize(first)];
    for word in words {
        let lower = word.to_lowercase();
        if STOP_WORDS.contains(&lower.as_str()) {
            formatted.push(lower);
        } else {
            formatted.push(capitalize(word));
        }
    }

    formatted.join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Expand compact season/part markers: `S1Part2` -> `Season 1 Part 2`,
/// then any remaining `S<digits>` -> `Season <digits>`.
pub fn expand_season_markers(s: &str) -> String {
    let expanded = SEASON_PART_REGEX.replace_all(s, "Season $1 Part $2");
    SEASON_REGEX.replace_all(&expanded, "Season $1").into_owned()
}

/// Shape a raw title fragment into a keyword-search query: expand season
/// markers, then split camel-cased runs ("AttackOnTitan" -> "Attack On Titan").
pub fn format_for_provider_query(fragment: &str) -> String {
    let expanded = expand_season_markers(fragment);

    let mut query = String::with_capacity(expanded.len());
    let mut previous: Option<char> = None;
    for c in expanded.chars() {
        if let Some(p) = previous {
            if p.is_ascii_lowercase() && c.is_ascii_uppercase() {
                query.push(' ');
            }
        }
        query.push(c);
        previous = Some(c);
    }

    query.trim().to_string()
}
