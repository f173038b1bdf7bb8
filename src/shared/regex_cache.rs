use dashmap::DashMap;
use regex::Regex;
use std::sync::OnceLock;

/// Process-wide memo of compiled patterns, keyed by source text.
///
/// `Regex` clones share the compiled program, so handing out clones is cheap.
fn cache() -> &'static DashMap<String, Regex> {
    static CACHE: OnceLock<DashMap<String, Regex>> = OnceLock::new();
    CACHE.get_or_init(DashMap::new)
}

/// Returns the compiled form of `pattern`, compiling it on first use.
///
/// Safe to call from any thread. Two threads racing on the same new pattern
/// may both compile it; the first insert wins and both get an equivalent regex.
pub fn cached_regex(pattern: &str) -> Result<Regex, regex::Error> {
    if let Some(compiled) = cache().get(pattern) {
        return Ok(compiled.value().clone());
    }

    let compiled = Regex::new(pattern)?;
    let entry = cache()
        .entry(pattern.to_string())
        .or_insert_with(|| compiled);
    Ok(entry.value().clone())
}

/// Returns capture group `group` of the first match of `pattern` in `text`.
///
/// A pattern that fails to compile is a programming error; it is logged and
/// treated as "no match" so a single bad pattern cannot abort a parse.
pub fn capture(pattern: &str, text: &str, group: usize) -> Option<String> {
    match cached_regex(pattern) {
        Ok(re) => re
            .captures(text)
            .and_then(|caps| caps.get(group))
            .map(|m| m.as_str().to_string()),
        Err(e) => {
            tracing::error!("invalid pattern {:?}: {}", pattern, e);
            None
        }
    }
}

/// Returns true when `pattern` matches anywhere in `text`.
pub fn is_match(pattern: &str, text: &str) -> bool {
    match cached_regex(pattern) {
        Ok(re) => re.is_match(text),
        Err(e) => {
            tracing::error!("invalid pattern {:?}: {}", pattern, e);
            false
        }
    }
}
