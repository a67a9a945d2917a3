//! Expansion of the `[author_info_table]` shortcode inside page content.
//!
//! Attributes are accepted and ignored. A doubled tag such as
//! `[[author_info_table]]` is an escaped literal and renders with one pair of
//! brackets removed.

pub const SHORTCODE_TAG: &str = "author_info_table";

enum Matched {
    /// Length of a shortcode to replace.
    Tag(usize),
    /// Length of an escaped shortcode, brackets included.
    Escaped(usize),
}

/// Whether `content` mentions the shortcode at all, escaped or not.
pub fn contains_shortcode(content: &str) -> bool {
    content.contains(&format!("[{}", SHORTCODE_TAG))
}

/// Replace every shortcode in `content` with `markup`.
pub fn expand_shortcodes(content: &str, markup: &str) -> String {
    let mut out = String::with_capacity(content.len() + markup.len());
    let mut rest = content;

    while let Some(start) = rest.find('[') {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];

        match match_at(candidate) {
            Some(Matched::Tag(len)) => {
                out.push_str(markup);
                rest = &candidate[len..];
            }
            Some(Matched::Escaped(len)) => {
                out.push_str(&candidate[1..len - 1]);
                rest = &candidate[len..];
            }
            None => {
                out.push('[');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn match_at(text: &str) -> Option<Matched> {
    if let Some(inner) = text.strip_prefix('[') {
        if let Some(len) = tag_len(inner) {
            if inner[len..].starts_with(']') {
                return Some(Matched::Escaped(len + 2));
            }
        }
    }
    tag_len(text).map(Matched::Tag)
}

/// Length of `[author_info_table ...]` at the start of `text`.
fn tag_len(text: &str) -> Option<usize> {
    let opening = 1 + SHORTCODE_TAG.len();
    let after = text.strip_prefix('[')?.strip_prefix(SHORTCODE_TAG)?;

    match after.chars().next()? {
        ']' => Some(opening + 1),
        c if c.is_whitespace() || c == '/' => after.find(']').map(|end| opening + end + 1),
        _ => None,
    }
}
