// src/utils/url.rs

//! URL manipulation utilities.

use std::sync::LazyLock;

use regex::Regex;

static CSS_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)url\(([^)]*)\)").expect("CSS url() pattern is valid")
});

/// Extract the URL literal from a CSS `url(...)` function in an inline style.
///
/// Quoting is optional; surrounding `'` and `"` characters are stripped.
///
/// # Examples
/// ```
/// use maxcine::utils::url::extract_css_url;
///
/// assert_eq!(
///     extract_css_url("background-image:url('http://x/y.jpg')"),
///     Some("http://x/y.jpg".to_string())
/// );
/// assert_eq!(
///     extract_css_url("background-image:url(http://x/y.jpg)"),
///     Some("http://x/y.jpg".to_string())
/// );
/// ```
pub fn extract_css_url(style: &str) -> Option<String> {
    let inner = CSS_URL.captures(style)?.get(1)?.as_str().trim();
    let unquoted = inner.trim_matches(['\'', '"']).trim();

    if unquoted.is_empty() {
        None
    } else {
        Some(unquoted.to_string())
    }
}

/// Last non-empty path segment of a link, used as the movie id.
///
/// Query strings, fragments and trailing slashes are ignored.
pub fn trailing_segment(link: &str) -> Option<String> {
    if let Ok(parsed) = url::Url::parse(link) {
        return parsed
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
            .map(|s| s.to_string());
    }

    let path = link.split(['?', '#']).next().unwrap_or("");
    path.split('/')
        .filter(|s| !s.is_empty())
        .last()
        .map(|s| s.to_string())
}
