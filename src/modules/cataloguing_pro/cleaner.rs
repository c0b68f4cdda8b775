//! Extraction of a canonical CLC code from noisy catalogue text
//!
//! The composite grammar accepts, innermost first:
//! - a base code: main-class letter(s) plus up to three digits
//! - an optional `/NNN` sub-range marker and trailing `a`
//! - combination suffixes `.NNN`, `-NNN`, `=NNN`, `+NNN`, `(NNN)`, `"NNN"`, `<NNN>`
//! - `[...]` brackets and the `{old}<new>` abandoned/current pair
//! - further facets joined with `:` or `+`
//!
//! Only the first simple code is kept.

use once_cell::sync::Lazy;
use regex::Regex;

/// Main classes defined by the 5th edition, with an optional second letter
const CLASS_STRICT: &str = "(?:[A-K]|[N-V]|X|Z)[A-Z]?[0-9]{0,3}";
/// One or two capitals of any kind. Single letters are accepted on purpose so
/// non-standard classes such as `M` pass as well as `TZ`
const CLASS_LOOSE: &str = "[A-Z]{1,2}[0-9]{0,3}";

static STRICT_REGEX: Lazy<Regex> = Lazy::new(|| compile(CLASS_STRICT));
static LOOSE_REGEX: Lazy<Regex> = Lazy::new(|| compile(CLASS_LOOSE));

fn compile(class: &str) -> Regex {
    let simple = format!(
        r#"\[?({class}(?:/[0-9]{{1,3}})?a?(?:[.\-=+][0-9]{{1,3}}|\([0-9]{{1,3}}\)|"[0-9]{{1,3}}"|<[0-9]{{1,3}}>)*)\]?"#
    );
    let abandoned_included = format!(r"\{{?{simple}(?:\}}<(?:{simple})>)?");
    let complete = format!("{abandoned_included}(?:[:+](?:{abandoned_included}))*");

    Regex::new(&complete).unwrap()
}

/// Which main-class prefixes the cleaner accepts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CleanMode {
    #[default]
    Strict,
    Loose,
}

impl std::str::FromStr for CleanMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(CleanMode::Strict),
            "loose" => Ok(CleanMode::Loose),
            other => Err(format!("Unknown clean mode: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Cleaner {
    regex: &'static Regex,
}

impl Cleaner {
    pub fn new(mode: CleanMode) -> Self {
        let regex = match mode {
            CleanMode::Strict => &*STRICT_REGEX,
            CleanMode::Loose => &*LOOSE_REGEX,
        };
        Self { regex }
    }

    pub fn strict() -> Self {
        Self::new(CleanMode::Strict)
    }

    pub fn loose() -> Self {
        Self::new(CleanMode::Loose)
    }

    /// First canonical code in `text`, or an empty string when none is found
    pub fn clean(&self, text: &str) -> String {
        self.regex
            .captures(text.trim())
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::strict()
    }
}
