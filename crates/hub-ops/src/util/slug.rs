use lazy_regex::regex;

/// Turns an article title into a URL and file name safe slug: lowercased,
/// whitespace replaced with hyphens, everything else except word characters
/// stripped, hyphen runs collapsed.
pub(crate) fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    let hyphenated = regex!(r"\s+").replace_all(lowered.trim(), "-");
    let cleaned = regex!(r"[^\w\-]+").replace_all(&hyphenated, "");
    regex!(r"\-\-+").replace_all(&cleaned, "-").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_are_lowercase_and_hyphenated() {
        assert_eq!(
            slugify("Best Rolex Deals This Week"),
            "best-rolex-deals-this-week"
        );
        assert_eq!(slugify("  Is Omega Worth It?  "), "is-omega-worth-it");
    }

    #[test]
    fn punctuation_is_stripped_and_runs_collapse() {
        assert_eq!(
            slugify("Price Guide: Rolex Submariner"),
            "price-guide-rolex-submariner"
        );
        assert_eq!(slugify("Is Seiko 5 Worth It in 2026?"), "is-seiko-5-worth-it-in-2026");
        assert_eq!(slugify("a  --  b"), "a-b");
    }
}
