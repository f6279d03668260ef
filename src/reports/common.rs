//! Common utilities shared across report generators.

use camino::Utf8Path;
use std::borrow::Cow;

/// Format a duration in milliseconds with two decimals.
pub fn format_ms(ms: f64) -> String {
    format!("{ms:.2}")
}

/// Show `path` relative to `root` when it lives below it.
pub fn display_path<'p>(path: &'p str, root: &Utf8Path) -> Cow<'p, str> {
    match Utf8Path::new(path).strip_prefix(root) {
        Ok(relative) if !relative.as_str().is_empty() => Cow::Owned(relative.to_string()),
        _ => Cow::Borrowed(path),
    }
}

/// Truncate or pad `text` to exactly `width` characters.
pub fn fit(text: &str, width: usize) -> String {
    let mut fitted: String = text.chars().take(width).collect();
    let len = fitted.chars().count();
    fitted.extend(core::iter::repeat_n(' ', width - len));
    fitted
}

/// Human-readable name of an origin bucket key.
pub fn bucket_title(key: &str) -> Cow<'_, str> {
    let mut chars = key.chars();
    chars.next().map_or(Cow::Borrowed(key), |first| {
        Cow::Owned(first.to_uppercase().chain(chars).collect())
    })
}
