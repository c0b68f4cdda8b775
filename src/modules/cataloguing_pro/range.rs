//! Compact range notation in taxonomy codes
//!
//! Taxonomy entries such as `X922.3/.7`, `T-013/-017` or `Z813/817` stand
//! for a run of sibling codes. Each is expanded into explicit codes before
//! patterns are compiled.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// X922.3/.7
static DOT_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)\.([0-9]+)/\.([0-9]+)(.*?)$").unwrap());
// T-013/-017
static DASH_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)-([0-9]+)/-([0-9]+)(.*?)$").unwrap());
// Z813/817
static BARE_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+?)([0-9]+)/([0-9]+)(.*?)$").unwrap());

/// Expand one taxonomy code into the explicit codes it denotes.
///
/// Bracket markers (`[`, `]`, `{`, `}`) are dropped first. At most one range
/// is expanded, low to high, with each number written as plain decimal text
/// (`T-013/-017` gives `T-13` to `T-17`). Codes without a range come back
/// unchanged, and a range whose end is below its start expands to nothing.
/// Range bounds too long for a `u64` leave the code unexpanded.
pub fn expand_range(code: &str) -> Vec<String> {
    let code: String = code
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '{' | '}'))
        .collect();

    let forms: [(&Regex, &str); 3] = [
        (&*DOT_RANGE, "."),
        (&*DASH_RANGE, "-"),
        (&*BARE_RANGE, ""),
    ];

    for (regex, separator) in forms {
        if let Some(caps) = regex.captures(&code) {
            if let Some(codes) = expand_captures(&caps, separator) {
                return codes;
            }
            break;
        }
    }

    vec![code]
}

fn expand_captures(caps: &Captures<'_>, separator: &str) -> Option<Vec<String>> {
    let prefix = &caps[1];
    let start: u64 = caps[2].parse().ok()?;
    let end: u64 = caps[3].parse().ok()?;
    let suffix = &caps[4];

    Some(
        (start..=end)
            .map(|n| format!("{prefix}{separator}{n}{suffix}"))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_code_is_unchanged() {
        assert_eq!(expand_range("TP312"), vec!["TP312"]);
        assert_eq!(expand_range("F0-0"), vec!["F0-0"]);
    }

    #[test]
    fn test_dot_range() {
        assert_eq!(
            expand_range("X922.3/.7"),
            vec!["X922.3", "X922.4", "X922.5", "X922.6", "X922.7"]
        );
    }

    #[test]
    fn test_leading_zeros_are_not_kept() {
        assert_eq!(
            expand_range("T-013/-017"),
            vec!["T-13", "T-14", "T-15", "T-16", "T-17"]
        );
        assert_eq!(
            expand_range("X922.05/.07"),
            vec!["X922.5", "X922.6", "X922.7"]
        );
    }

    #[test]
    fn test_oversized_bounds_are_left_unexpanded() {
        let code = "Z1/99999999999999999999999";
        assert_eq!(expand_range(code), vec![code]);
    }

    #[test]
    fn test_bare_range() {
        assert_eq!(
            expand_range("Z813/817"),
            vec!["Z813", "Z814", "Z815", "Z816", "Z817"]
        );
        assert_eq!(expand_range("I3/7"), vec!["I3", "I4", "I5", "I6", "I7"]);
    }

    #[test]
    fn test_suffix_is_carried() {
        assert_eq!(
            expand_range("D91/97-6"),
            vec!["D91-6", "D92-6", "D93-6", "D94-6", "D95-6", "D96-6", "D97-6"]
        );
    }

    #[test]
    fn test_brackets_are_stripped() {
        assert_eq!(expand_range("[X-019]"), vec!["X-019"]);
        assert_eq!(expand_range("{D922.5/.6}"), vec!["D922.5", "D922.6"]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        assert!(expand_range("Z817/813").is_empty());
    }
}
