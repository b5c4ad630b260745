use url::Url;

use crate::error::TemplateError;

use super::placeholder::{contains_template_placeholders, placeholders, substitute};

const VALUE_SEPARATOR: u8 = b',';

/// Resolves `url_template` against one comma-separated template line.
///
/// `#TE{i}` receives the query-escaped `i`-th value, `#T{i}` the raw one.
/// The result must be free of placeholders and a valid HTTP(S) URL.
///
/// # Errors
///
/// Returns [`TemplateError::UnresolvedPlaceholders`] when a placeholder has no
/// matching value, or [`TemplateError::InvalidUrl`] when the substituted
/// string is not an absolute HTTP(S) URL.
pub fn prepare_url(url_template: &str, value_line: &str) -> Result<String, TemplateError> {
    prepare_url_from_bytes(url_template, value_line.as_bytes())
}

/// [`prepare_url`] over a raw template line. Values need not be UTF-8:
/// `#TE{i}` percent-encodes the bytes, while `#T{i}` rejects them.
///
/// # Errors
///
/// Same as [`prepare_url`]. A raw placeholder whose value is not UTF-8
/// yields [`TemplateError::InvalidUrl`].
pub fn prepare_url_from_bytes(
    url_template: &str,
    value_line: &[u8],
) -> Result<String, TemplateError> {
    let values: Vec<&[u8]> = value_line
        .split(|byte| *byte == VALUE_SEPARATOR)
        .collect();
    let substituted = substitute(url_template, &values);

    if contains_template_placeholders(&substituted) {
        return Err(TemplateError::UnresolvedPlaceholders { url: substituted });
    }
    if placeholders(url_template).any(|placeholder| placeholder.inserts_invalid_utf8(&values)) {
        return Err(TemplateError::InvalidUrl { url: substituted });
    }

    parse_and_validate_url(&substituted)
}

/// Parses `candidate` as an absolute `http`/`https` URL with a host and
/// returns its canonical serialization.
///
/// # Errors
///
/// Returns [`TemplateError::InvalidUrl`] naming `candidate` when it does not
/// parse, uses another scheme, has no host, contains control characters, or
/// has a malformed percent escape before its query.
pub fn parse_and_validate_url(candidate: &str) -> Result<String, TemplateError> {
    let invalid = || TemplateError::InvalidUrl {
        url: candidate.to_owned(),
    };

    // The url crate silently drops tabs and newlines instead of failing.
    if candidate.bytes().any(|byte| byte.is_ascii_control()) {
        return Err(invalid());
    }
    if !has_http_authority(candidate) || has_invalid_percent_escape(candidate) {
        return Err(invalid());
    }
    let Ok(parsed) = Url::parse(candidate) else {
        return Err(invalid());
    };
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none_or(str::is_empty)
    {
        return Err(invalid());
    }

    Ok(parsed.into())
}

// The url crate lowercases schemes and tolerates `http:host`, so the raw
// prefix and authority are checked first.
fn has_http_authority(candidate: &str) -> bool {
    let rest = candidate
        .strip_prefix("http://")
        .or_else(|| candidate.strip_prefix("https://"));
    rest.is_some_and(|rest| {
        let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        rest.get(..authority_end)
            .is_some_and(|authority| !authority.trim().is_empty())
    })
}

fn has_invalid_percent_escape(candidate: &str) -> bool {
    let before_query = candidate.split(['?', '#']).next().unwrap_or_default();
    let mut bytes = before_query.bytes();
    while let Some(byte) = bytes.next() {
        if byte != b'%' {
            continue;
        }
        let escape = (bytes.next(), bytes.next());
        if !matches!(escape, (Some(high), Some(low)) if high.is_ascii_hexdigit() && low.is_ascii_hexdigit())
        {
            return true;
        }
    }
    false
}
