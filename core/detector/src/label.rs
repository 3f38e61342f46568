//! FILENAME: core/detector/src/label.rs
//! PURPOSE: Decides whether a piece of cell text reads like a form label.
//! CONTEXT: Labels are short, end in a colon or carry domain vocabulary, and
//! avoid value-shaped patterns such as URLs, email addresses and long digit
//! runs. Keyword-only labels get the stricter checks.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::DetectorConfig;

static ANY_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("digit pattern"));
static EDGE_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d|\d$").expect("edge digit pattern"));
static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{3,}").expect("digit run pattern"));

/// Outcome of the label heuristic, with the reason for a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelVerdict {
    Accepted,
    TooShort,
    /// Neither a trailing colon nor a keyword.
    NoSignal,
    TooLong,
    /// Contains `@` without any email vocabulary.
    StrayAt,
    /// Starts with `http` or `www`.
    Url,
    /// A digit somewhere, but neither at the start nor at the end.
    EmbeddedDigits,
    /// Three or more consecutive digits.
    DigitRun,
}

impl LabelVerdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, LabelVerdict::Accepted)
    }
}

/// True if the text ends with `:` once trailing whitespace is ignored.
pub fn ends_with_colon(text: &str) -> bool {
    text.trim_end().ends_with(':')
}

/// Runs the heuristic on the trimmed text and reports why it failed, if it did.
pub fn classify_label(text: &str, config: &DetectorConfig) -> LabelVerdict {
    let text = text.trim();
    let length = text.chars().count();

    if length < config.min_label_length {
        return LabelVerdict::TooShort;
    }

    let text_lower = text.to_lowercase();
    let colon = ends_with_colon(text);
    let keyword = config.has_keyword(&text_lower);

    if !(colon || keyword) {
        return LabelVerdict::NoSignal;
    }

    let stray_at = text.contains('@') && !config.has_email_keyword(&text_lower);
    let url = text_lower.starts_with("http") || text_lower.starts_with("www");

    if colon {
        if length > config.max_label_length_with_colon {
            return LabelVerdict::TooLong;
        }
        if stray_at {
            return LabelVerdict::StrayAt;
        }
        if url {
            return LabelVerdict::Url;
        }
        return LabelVerdict::Accepted;
    }

    if length > config.max_label_length_without_colon {
        return LabelVerdict::TooLong;
    }
    if ANY_DIGIT.is_match(text) && !EDGE_DIGIT.is_match(text) {
        return LabelVerdict::EmbeddedDigits;
    }
    if stray_at {
        return LabelVerdict::StrayAt;
    }
    if url {
        return LabelVerdict::Url;
    }
    if DIGIT_RUN.is_match(text) {
        return LabelVerdict::DigitRun;
    }

    LabelVerdict::Accepted
}

/// Determine if text looks like a form label rather than a field value.
pub fn looks_like_label(text: &str, config: &DetectorConfig) -> bool {
    classify_label(text, config).is_accepted()
}
