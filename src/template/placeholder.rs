use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use url::form_urlencoded;

#[expect(
    clippy::expect_used,
    reason = "The placeholder pattern is a constant and always compiles."
)]
static PLACEHOLDER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#T(E?)\{(\d+)\}").expect("placeholder pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// `#T{i}`: the value is inserted verbatim.
    Raw,
    /// `#TE{i}`: the value is query-escaped before insertion.
    Escaped,
}

/// A positional reference into a comma-separated template line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    pub kind: PlaceholderKind,
    pub index: usize,
}

impl Placeholder {
    fn from_captures(captures: &Captures<'_>) -> Option<Self> {
        let kind = match captures.get(1).map(|group| group.as_str()) {
            Some("E") => PlaceholderKind::Escaped,
            _ => PlaceholderKind::Raw,
        };
        let digits = captures.get(2)?.as_str();
        // `#T{01}` is never produced from an index, so it can not be resolved.
        if digits.len() > 1 && digits.starts_with('0') {
            return None;
        }
        let index = digits.parse::<usize>().ok()?;
        Some(Self { kind, index })
    }

    fn resolve<'value>(&self, values: &[&'value [u8]]) -> Option<Cow<'value, str>> {
        let value = *values.get(self.index)?;
        Some(match self.kind {
            PlaceholderKind::Raw => String::from_utf8_lossy(value),
            PlaceholderKind::Escaped => Cow::Owned(query_escape_bytes(value)),
        })
    }

    /// True when this placeholder would insert bytes that are not UTF-8
    /// verbatim.
    pub(super) fn inserts_invalid_utf8(&self, values: &[&[u8]]) -> bool {
        self.kind == PlaceholderKind::Raw
            && values
                .get(self.index)
                .is_some_and(|value| std::str::from_utf8(value).is_err())
    }
}

/// Escapes a value for a query component: space becomes `+`, everything
/// outside the unreserved set is percent-encoded.
#[must_use]
pub fn query_escape(value: &str) -> String {
    query_escape_bytes(value.as_bytes())
}

fn query_escape_bytes(value: &[u8]) -> String {
    form_urlencoded::byte_serialize(value).collect()
}

/// Returns every resolvable placeholder found in `text`, in order.
pub fn placeholders(text: &str) -> impl Iterator<Item = Placeholder> + '_ {
    PLACEHOLDER_PATTERN
        .captures_iter(text)
        .filter_map(|captures| Placeholder::from_captures(&captures))
}

/// Returns true when `text` contains any `#T{n}` or `#TE{n}` token.
#[must_use]
pub fn contains_template_placeholders(text: &str) -> bool {
    PLACEHOLDER_PATTERN.is_match(text)
}

/// Replaces every placeholder whose index has a value. Tokens without a
/// value are left in place.
pub(super) fn substitute(template: &str, values: &[&[u8]]) -> String {
    PLACEHOLDER_PATTERN
        .replace_all(template, |captures: &Captures<'_>| {
            let resolved = Placeholder::from_captures(captures)
                .and_then(|placeholder| placeholder.resolve(values));
            match resolved {
                Some(value) => value.into_owned(),
                None => captures
                    .get(0)
                    .map_or_else(String::new, |token| token.as_str().to_owned()),
            }
        })
        .into_owned()
}
