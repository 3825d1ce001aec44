use regex::Regex;
use std::sync::LazyLock;

static PERCENT_OCTET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("%[a-fA-F0-9]{2}").expect("valid percent-octet pattern"));

/// Derives the host role slug from a SeAT role title.
///
/// Percent-encoded octets are stripped, each run of whitespace between kept characters
/// becomes a single `-`, and anything outside `[A-Za-z0-9_-]` is dropped before
/// lower-casing. Distinct titles may map to the same slug; collisions are not detected.
///
/// # Arguments
/// - `title` - SeAT role title, e.g. `"Fleet Commander"`
///
/// # Returns
/// - `String` - Slug such as `"fleet-commander"`, empty if nothing survives sanitizing
pub fn sanitize_role_slug(title: &str) -> String {
    let stripped = PERCENT_OCTET.replace_all(title, "");

    let mut slug = String::with_capacity(stripped.len());
    let mut pending_dash = false;

    for c in stripped.chars() {
        if c.is_whitespace() {
            pending_dash = true;
            continue;
        }

        if !(c.is_ascii_alphanumeric() || c == '_' || c == '-') {
            continue;
        }

        if pending_dash && !slug.is_empty() && c != '-' && !slug.ends_with('-') {
            slug.push('-');
        }
        pending_dash = false;

        slug.push(c.to_ascii_lowercase());
    }

    slug
}
