//! Candidate URL extraction from raw handler invocation arguments.
//!
//! The OS may deliver the URL as a single quoted argument, as several
//! space-split arguments, or unquoted, so extraction tries three tiers
//! before giving up. "No URL found" is a normal outcome, never an error.

/// Case-insensitive http(s) prefix test.
fn looks_like_url(s: &str) -> bool {
    let has_prefix = |p: &str| {
        s.get(..p.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(p))
    };
    has_prefix("http://") || has_prefix("https://")
}

/// Trims whitespace and any wrapping double quotes from one argument.
fn clean(s: &str) -> &str {
    s.trim().trim_matches('"')
}

/// Strips one layer of wrapping quotes, used for the joined last resort.
fn strip_outer_quotes(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// Returns the single URL to route, or `None` if no argument (and no
/// space-joined concatenation of all arguments) looks like one.
pub fn extract_url(args: &[String]) -> Option<String> {
    if args.is_empty() {
        return None;
    }

    // Usual case: one argument, the "%1" substitution.
    let first = clean(&args[0]);
    if looks_like_url(first) {
        return Some(first.to_string());
    }

    for arg in args {
        let s = clean(arg);
        if looks_like_url(s) {
            return Some(s.to_string());
        }
    }

    // Last resort: the URL may have been split on spaces by the shell.
    let joined = args.join(" ");
    let candidate = strip_outer_quotes(joined.trim());
    if looks_like_url(candidate) {
        Some(candidate.to_string())
    } else {
        None
    }
}
