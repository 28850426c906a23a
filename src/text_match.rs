//! Search-box matching.
//!
//! A query is matched as a literal, case-insensitive substring after both the
//! query and the candidate are brought to Unicode NFC, so that a precomposed
//! character and its base + combining-mark spelling compare equal.

use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};
use unicode_normalization::UnicodeNormalization;

use crate::types::{Group, User};

/// Bring `s` to Unicode Normalization Form C.
pub fn normalize_nfc(s: &str) -> String {
    s.nfc().collect()
}

/// A compiled search query, reusable across many candidates.
#[derive(Debug, Clone)]
pub struct QueryMatcher {
    lowered: String,
    pattern: Option<Regex>,
}

impl QueryMatcher {
    /// Compile `query` as a literal pattern. Regex metacharacters in the
    /// query carry no special meaning.
    pub fn new(query: &str) -> Self {
        let normalized = normalize_nfc(query);
        let pattern = match RegexBuilder::new(&regex::escape(&normalized))
            .case_insensitive(true)
            .build()
        {
            Ok(re) => Some(re),
            Err(err) => {
                warn!(
                    event = "Search",
                    phase = "Compile",
                    error = %err,
                    "falling back to plain substring matching"
                );
                None
            }
        };

        QueryMatcher {
            lowered: normalized.to_lowercase(),
            pattern,
        }
    }

    /// Whether the NFC form of `target` contains the query.
    pub fn is_match(&self, target: &str) -> bool {
        let target = normalize_nfc(target);
        match &self.pattern {
            Some(re) => re.is_match(&target),
            None => target.to_lowercase().contains(&self.lowered),
        }
    }

    /// Whether any of `targets` contains the query. No targets never match.
    pub fn matches_any<I, S>(&self, targets: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        targets.into_iter().any(|t| self.is_match(t.as_ref()))
    }
}

/// True iff at least one of `targets` contains `query` (literal,
/// case-insensitive, NFC). An empty query matches any target.
pub fn filter_test<S: AsRef<str>>(query: &str, targets: &[S]) -> bool {
    QueryMatcher::new(query).matches_any(targets)
}

/// Keep the items for which any of the projected fields matches `query`.
/// Order and identity of the kept items are preserved.
pub fn filter_items<'a, T, F, I>(items: &'a [T], query: &str, fields: F) -> Vec<&'a T>
where
    F: Fn(&'a T) -> I,
    I: IntoIterator<Item = &'a str>,
{
    let matcher = QueryMatcher::new(query);
    let kept: Vec<&T> = items
        .iter()
        .filter(|item| matcher.matches_any(fields(*item)))
        .collect();

    debug!(
        event = "Search",
        phase = "Filtered",
        total = items.len(),
        kept = kept.len()
    );
    kept
}

pub fn filter_groups_by_name<'a>(groups: &'a [Group], query: &str) -> Vec<&'a Group> {
    filter_items(groups, query, |g| [g.name.as_str()])
}

pub fn filter_users_by_name_or_email<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    filter_items(users, query, |u| [u.name.as_str(), u.email.as_str()])
}
