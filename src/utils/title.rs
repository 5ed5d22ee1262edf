//! Sort keys for media titles
//!
//! Patterns are compiled once on first use and shared read-only afterwards.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SEPARATORS: Regex = Regex::new(r"(\s|\.|,|_|-|=|'|\|)+").unwrap();
    static ref NON_WORD: Regex = Regex::new(r"[^\w\s]").unwrap();
    static ref FILLER_WORDS: Regex = Regex::new(r"(?i)\b(a|an|the|and|or|of)\b\s?").unwrap();
    static ref REPEATED_WHITESPACE: Regex = Regex::new(r"\s{2,}").unwrap();
    static ref JOINERS: Regex = Regex::new(r"(&|:|\|/)+").unwrap();
}

/// Reduce a title to a key suitable for alphabetical sorting
///
/// Punctuation becomes spaces, articles and conjunctions are dropped and runs of
/// whitespace collapse to one space.
///
/// # Examples
/// ```
/// use plex_tools::utils::title::sort_title;
/// assert_eq!(sort_title("The Lord of the Rings"), "Lord Rings");
/// ```
pub fn sort_title(title: &str) -> String {
    let title = SEPARATORS.replace_all(title, " ");
    let title = NON_WORD.replace_all(&title, "");
    let title = FILLER_WORDS.replace_all(&title, "");
    let title = REPEATED_WHITESPACE.replace_all(&title, " ");
    let title = JOINERS.replace_all(&title, "");

    title.trim().to_string()
}
