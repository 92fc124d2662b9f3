use lru::LruCache;
use regex::{Regex, RegexBuilder};
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

const PATTERN_CACHE_CAPACITY: usize = 200;

lazy_static::lazy_static! {
    static ref PATTERN_CACHE: Mutex<LruCache<String, Arc<Regex>>> = Mutex::new(LruCache::new(
        NonZeroUsize::new(PATTERN_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN)
    ));
}

/// Convert a wildcard pattern (`*`, `?`) into an anchored regex.
#[inline]
fn wildcard_to_regex(pattern: &str) -> String {
    let mut regex = String::with_capacity(pattern.len() + 2);
    regex.push('^');
    for c in pattern.chars() {
        match c {
            '*' => regex.push_str(".*"),
            '?' => regex.push('.'),
            c => regex.push_str(&regex::escape(&c.to_string())),
        }
    }
    regex.push('$');
    regex
}

/// Patterns without wildcards are plain substring searches.
#[inline]
fn fast_path(text: &str, pattern: &str) -> Option<bool> {
    if pattern.contains('*') || pattern.contains('?') {
        return None;
    }
    Some(text.to_lowercase().contains(&pattern.to_lowercase()))
}

fn compiled(pattern: &str) -> Option<Arc<Regex>> {
    {
        let mut cache = PATTERN_CACHE.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(regex) = cache.get(pattern) {
            return Some(Arc::clone(regex));
        }
    }

    let regex = RegexBuilder::new(&wildcard_to_regex(pattern))
        .case_insensitive(true)
        .build()
        .ok()?;
    let regex = Arc::new(regex);

    PATTERN_CACHE
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .put(pattern.to_string(), Arc::clone(&regex));
    Some(regex)
}

/// Case-insensitive free-text match.
///
/// `*` matches any run of characters and `?` exactly one; a pattern with no
/// wildcard matches anywhere inside `text`.
pub fn matches_text(text: &str, pattern: &str) -> bool {
    if let Some(result) = fast_path(text, pattern) {
        return result;
    }
    match compiled(pattern) {
        Some(regex) => regex.is_match(text),
        // only reachable past the regex size limit
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_pattern_is_case_insensitive_substring() {
        assert!(matches_text("My Petstore API", "petstore"));
        assert!(!matches_text("My Petstore API", "echo"));
    }

    #[test]
    fn wildcards() {
        assert!(matches_text("petstore-v2", "pet*"));
        assert!(matches_text("petstore-v2", "*-V?"));
        assert!(!matches_text("petstore-v2", "store*"));
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        assert!(matches_text("a.b (beta)", "a.b (*)"));
        assert!(!matches_text("axb (beta)", "a.b*"));
    }
}
