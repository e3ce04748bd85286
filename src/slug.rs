//! URL-safe company codes derived from display names.

use regex::Regex;
use std::sync::OnceLock;

fn separator_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("[^a-z0-9]+").expect("static pattern"))
}

/// Lowercase `name`, collapse every run of non-alphanumeric characters into a
/// single `-` and trim separators at both ends.
/// e.g. "Apple Computer, Inc." -> "apple-computer-inc"
pub fn slugify(name: &str) -> String {
    let lower = name.to_lowercase();
    separator_runs()
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_joins_words() {
        assert_eq!(slugify("Apple Computer"), "apple-computer");
        assert_eq!(slugify("Netflix"), "netflix");
    }

    #[test]
    fn collapses_runs_and_trims() {
        assert_eq!(slugify("  Netflix,  Inc.  "), "netflix-inc");
        assert_eq!(slugify("AT&T -- Mobility"), "at-t-mobility");
        assert_eq!(slugify("3M"), "3m");
    }

    #[test]
    fn drops_non_ascii_letters() {
        assert_eq!(slugify("Café Olé"), "caf-ol");
    }

    #[test]
    fn symbols_only_yield_empty_code() {
        assert_eq!(slugify("!!! ---"), "");
        assert_eq!(slugify(""), "");
    }
}
