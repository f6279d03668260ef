use crate::Result;
use crate::metrics::Metric;
use globset::{GlobBuilder, GlobMatcher};
use ohno::IntoAppError;
use std::borrow::Cow;

/// A compiled path pattern.
#[derive(Debug, Clone)]
pub struct GlobFilter {
    pattern: String,
    matcher: GlobMatcher,

    /// Set for `!`-prefixed patterns, which keep the paths the rest of the pattern rejects
    negated: bool,
}

impl GlobFilter {
    /// Compile `pattern`.
    ///
    /// # Errors
    ///
    /// Returns an error if `pattern` is not a valid glob
    pub fn new(pattern: &str) -> Result<Self> {
        let (negated, body) = pattern.strip_prefix('!').map_or((false, pattern), |rest| (true, rest));
        let anchored = anchor(body);
        let glob = GlobBuilder::new(&anchored)
            .literal_separator(true)
            .build()
            .into_app_err_with(|| format!("invalid glob pattern '{pattern}'"))?;

        Ok(Self {
            pattern: pattern.to_string(),
            matcher: glob.compile_matcher(),
            negated,
        })
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.matcher.is_match(path) != self.negated
    }

    /// Keep the metrics whose declaration path matches, preserving their order.
    #[must_use]
    pub fn apply<'a>(&self, metrics: &[Metric<'a>]) -> Vec<Metric<'a>> {
        metrics.iter().filter(|metric| self.matches(metric.path())).copied().collect()
    }
}

/// Check a single path against a pattern.
///
/// # Errors
///
/// Returns an error if `pattern` is not a valid glob
pub fn matches(path: &str, pattern: &str) -> Result<bool> {
    Ok(GlobFilter::new(pattern)?.matches(path))
}

fn anchor(pattern: &str) -> Cow<'_, str> {
    let pattern = pattern.strip_prefix("./").unwrap_or(pattern);
    if pattern.starts_with('/') || pattern.starts_with("**") {
        Cow::Borrowed(pattern)
    } else {
        Cow::Owned(format!("**/{pattern}"))
    }
}
