use std::sync::LazyLock;

use regex::RegexSet;

static QUIZ_INDICATORS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new([
        r"(?i)quiz",
        r"(?i)multiple.?choice",
        r"(?i)fill.?in.?the.?blank",
        r"(?i)\b[A-D]\)|question\s*\d+",
        r"(?i)answers?\s*:",
    ])
    .expect("quiz indicator regexes")
});

/// Cheap check for whether assistant text is worth running through the
/// quiz extractor.
pub fn looks_like_quiz(text: &str) -> bool {
    QUIZ_INDICATORS.is_match(text)
}
