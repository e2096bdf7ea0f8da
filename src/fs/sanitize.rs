//! Path and filename sanitization.
//!
//! Paths are reduced to ASCII alphanumerics, `.` and `/`. Filenames keep any
//! Unicode letter or digit plus `.`, then go through a [`CasingPolicy`].

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;

use crate::error::{Error, Result};
use crate::fs::naming::{join_extension, split_extension};
use crate::fs::policy::CasingPolicy;

static PATH_DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9./]").unwrap());
static REPEATED_SLASHES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/{2,}").unwrap());
static REPEATED_DOTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.{2,}").unwrap());
static TRAILING_TOKENS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:/|\.\.)+$").unwrap());
static FILENAME_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}\s.]").unwrap());

/// Sanitize a directory path.
///
/// Strips everything outside `[A-Za-z0-9./]`, collapses repeated `/`, collapses
/// runs of two or more `.` into `..`, then strips any trailing `/` and `..`
/// tokens. Idempotent. An input made only of disallowed characters yields an
/// empty string, which callers must treat as invalid.
pub fn sanitize_path(input: &str) -> String {
    let filtered = PATH_DISALLOWED.replace_all(input, "");
    let collapsed = REPEATED_SLASHES.replace_all(&filtered, "/");
    let collapsed = REPEATED_DOTS.replace_all(&collapsed, "..");
    TRAILING_TOKENS.replace(&collapsed, "").into_owned()
}

/// Sanitize a filename and apply a casing policy, dating with today's local date.
pub fn sanitize_filename(input: &str, policy: CasingPolicy) -> Result<String> {
    sanitize_filename_on(input, policy, Local::now().date_naive())
}

/// Sanitize a filename and apply a casing policy, dating with `today`.
pub fn sanitize_filename_on(input: &str, policy: CasingPolicy, today: NaiveDate) -> Result<String> {
    let filtered = FILENAME_DISALLOWED.replace_all(input, "");

    let name = match policy {
        CasingPolicy::None => strip_whitespace(&filtered),
        CasingPolicy::Lower => strip_whitespace(&filtered.to_lowercase()),
        CasingPolicy::Upper => strip_whitespace(&filtered.to_uppercase()),
        CasingPolicy::Camel => to_camel(&filtered)?,
        CasingPolicy::Pascal => to_pascal(&filtered),
        CasingPolicy::Date => {
            let lowered = strip_whitespace(&filtered.to_lowercase());
            let (stem, ext) = split_extension(&lowered);
            format!("{}_{}.{}", stem, today.format("%Y-%m-%d"), ext.unwrap_or(""))
        }
    };

    Ok(name)
}

/// Sanitize a filename for a file about to be created, rejecting empty results.
pub fn sanitize_new_filename(input: &str, policy: CasingPolicy) -> Result<String> {
    let name = sanitize_filename(input, policy)?;
    if name.is_empty() || name == "." || name == ".." {
        return Err(Error::InvalidInput(format!(
            "file name '{}' is empty after sanitization",
            input
        )));
    }
    Ok(name)
}

/// Sanitize a directory path, rejecting empty results.
pub fn sanitize_dir(input: &str) -> Result<String> {
    let path = sanitize_path(input);
    if path.is_empty() {
        return Err(Error::InvalidInput(format!(
            "path '{}' is empty after sanitization",
            input
        )));
    }
    Ok(path)
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn to_camel(s: &str) -> Result<String> {
    let words: Vec<String> = s
        .split(' ')
        .map(strip_whitespace)
        .filter(|word| !word.is_empty())
        .map(|word| upper_first(&word))
        .collect();

    let Some((first, rest)) = words.split_first() else {
        return Err(Error::InvalidInput(
            "camel case needs at least one word".to_string(),
        ));
    };

    let mut camel = lower_first(first);
    for word in rest {
        camel.push_str(word);
    }
    Ok(camel)
}

fn to_pascal(s: &str) -> String {
    let titled: String = s
        .split_whitespace()
        .map(|word| upper_first(&word.to_lowercase()))
        .collect();

    // Extension casing is always lower, whatever the title-casing did to it.
    match split_extension(&titled) {
        (stem, Some(ext)) => join_extension(stem, Some(&ext.to_lowercase())),
        (stem, None) => stem.to_string(),
    }
}
