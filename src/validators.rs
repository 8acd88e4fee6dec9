// File: src/validators.rs
// Purpose: Ready-made patterns for common field checks

use crate::rule::Pattern;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
});

static URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap()
});

static LETTERS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z \-]+$").unwrap()
});

static DIGITS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validate URL format
pub fn is_valid_url(url: &str) -> bool {
    URL_REGEX.is_match(url)
}

/// Pattern accepting a plausible email address
pub fn email(message: impl Into<String>) -> Pattern {
    Pattern::from_regex(EMAIL_REGEX.clone(), message)
}

/// Pattern accepting an http(s) URL
pub fn url(message: impl Into<String>) -> Pattern {
    Pattern::from_regex(URL_REGEX.clone(), message)
}

/// Pattern accepting letters, spaces and dashes
pub fn letters(message: impl Into<String>) -> Pattern {
    Pattern::from_regex(LETTERS_REGEX.clone(), message)
}

/// Pattern accepting digits only
pub fn digits(message: impl Into<String>) -> Pattern {
    Pattern::from_regex(DIGITS_REGEX.clone(), message)
}

/// Pattern requiring at least `min` characters
pub fn min_length(min: usize, message: impl Into<String>) -> Pattern {
    let regex = Regex::new(&format!(r"^[\s\S]{{{min},}}$")).expect("length pattern");
    Pattern::from_regex(regex, message)
}

/// Pattern requiring at most `max` characters
pub fn max_length(max: usize, message: impl Into<String>) -> Pattern {
    let regex = Regex::new(&format!(r"^[\s\S]{{0,{max}}}$")).expect("length pattern");
    Pattern::from_regex(regex, message)
}
