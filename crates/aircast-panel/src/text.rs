//! Markup-to-text helpers.

/// Drops everything between `<` and `>`.
pub(crate) fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;

    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Decodes the handful of entities that appear in panel text.
pub(crate) fn decode_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Collapses whitespace runs to one space and trims the ends.
pub(crate) fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Visible text of a markup fragment.
pub(crate) fn visible_text(markup: &str) -> String {
    normalize_ws(&decode_entities(&strip_tags(markup)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_text() {
        let markup = "\n  <a href=\"/x\">Fuji&nbsp;TV</a>,\n   <em>Aniplex</em>  ";
        assert_eq!(visible_text(markup), "Fuji TV, Aniplex");
    }

    #[test]
    fn test_decode_amp_last() {
        assert_eq!(decode_entities("&amp;lt;"), "&lt;");
    }
}
