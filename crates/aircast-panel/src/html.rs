//! HTML info panel.
//!
//! An info panel is a run of `<div>` rows, each starting with a label span:
//!
//! ```html
//! <div class="spaceit_pad">
//!   <span class="dark_text">Aired:</span>
//!   Jan 7, 2024 to ?
//! </div>
//! ```
//!
//! [`InfoPanel::parse`] splits a fragment into those rows and the raw text
//! around them, so [`InfoPanel::render`] reproduces untouched input exactly.
//! Rows are matched case-insensitively on tag names; nested `<div>`s inside a
//! row are not supported.

use crate::field::{ElementId, Field, FieldExtractor, Renderer};
use crate::text::visible_text;

const LABEL_OPEN: &str = r#"<span class="dark_text">"#;
const SPAN_CLOSE: &str = "</span>";
const ROW_OPEN: &str = "<div";
const ROW_CLOSE: &str = "</div>";

/// An HTML fragment holding labelled info rows.
#[derive(Debug, Clone, Default)]
pub struct InfoPanel {
    segments: Vec<Segment>,
    rows: Vec<Row>,
}

#[derive(Debug, Clone)]
enum Segment {
    Raw(String),
    Row(usize),
}

#[derive(Debug, Clone)]
struct Row {
    open_tag: String,
    inner: String,
    close_tag: String,
}

/// Byte offsets of one row within the source fragment.
#[derive(Debug, Clone, Copy)]
struct RowBounds {
    start: usize,
    open_end: usize,
    close_start: usize,
    end: usize,
}

impl InfoPanel {
    /// Splits an HTML fragment into labelled rows.
    ///
    /// Never fails: text that does not look like a row is kept verbatim.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        // ASCII lowering keeps byte offsets aligned with `html`
        let lower = html.to_ascii_lowercase();
        let mut segments = Vec::new();
        let mut rows = Vec::new();
        let mut cursor = 0;
        let mut search = 0;

        while let Some(rel) = lower[search..].find(LABEL_OPEN) {
            let label_start = search + rel;
            search = label_start + LABEL_OPEN.len();

            let Some(bounds) = locate_row(&lower, cursor, label_start) else {
                continue;
            };

            if bounds.start > cursor {
                segments.push(Segment::Raw(html[cursor..bounds.start].to_string()));
            }
            rows.push(Row {
                open_tag: html[bounds.start..bounds.open_end].to_string(),
                inner: html[bounds.open_end..bounds.close_start].to_string(),
                close_tag: html[bounds.close_start..bounds.end].to_string(),
            });
            segments.push(Segment::Row(rows.len() - 1));

            cursor = bounds.end;
            search = search.max(bounds.end);
        }

        if cursor < html.len() {
            segments.push(Segment::Raw(html[cursor..].to_string()));
        }

        Self { segments, rows }
    }

    /// Reassembles the fragment, including any edits.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Raw(text) => out.push_str(text),
                Segment::Row(index) => {
                    let row = &self.rows[*index];
                    out.push_str(&row.open_tag);
                    out.push_str(&row.inner);
                    out.push_str(&row.close_tag);
                }
            }
        }
        out
    }

    /// Returns the number of labelled rows.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no labelled rows were found.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FieldExtractor for InfoPanel {
    fn lookup(&self, label: &str) -> Option<Field> {
        let wanted = label.trim();
        self.rows.iter().enumerate().find_map(|(index, row)| {
            let (row_label, text) = split_label(&row.inner)?;
            (row_label == wanted).then(|| Field {
                text,
                element: ElementId::new(index),
            })
        })
    }

    fn markup(&self, element: ElementId) -> Option<&str> {
        self.rows.get(element.index()).map(|row| row.inner.as_str())
    }
}

impl Renderer for InfoPanel {
    fn replace_content(&mut self, element: ElementId, markup: String) {
        if let Some(row) = self.rows.get_mut(element.index()) {
            row.inner = markup;
        }
    }

    fn append_content(&mut self, element: ElementId, markup: &str) {
        if let Some(row) = self.rows.get_mut(element.index()) {
            row.inner.push_str(markup);
        }
    }
}

/// Finds the `<div>` enclosing the label span at `label_start`.
fn locate_row(lower: &str, floor: usize, label_start: usize) -> Option<RowBounds> {
    let start = lower[floor..label_start].rfind(ROW_OPEN)? + floor;
    let open_end = lower[start..label_start].find('>')? + start + 1;
    if lower[open_end..label_start].contains(ROW_CLOSE) {
        return None;
    }
    let close_start = lower[label_start..].find(ROW_CLOSE)? + label_start;

    Some(RowBounds {
        start,
        open_end,
        close_start,
        end: close_start + ROW_CLOSE.len(),
    })
}

/// Splits a row's inner markup into its label and visible value text.
fn split_label(inner: &str) -> Option<(String, String)> {
    let lower = inner.to_ascii_lowercase();
    let start = lower.find(LABEL_OPEN)?;
    let end = lower[start..].find(SPAN_CLOSE)? + start + SPAN_CLOSE.len();

    let label = visible_text(&inner[start..end]);
    let value = visible_text(&format!("{}{}", &inner[..start], &inner[end..]));
    Some((label, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANEL: &str = r#"<h2>Information</h2>
<div class="spaceit_pad">
  <span class="dark_text">Type:</span>
  <a href="/topanime.php?type=tv">TV</a>
</div>
<div class="spaceit_pad">
  <span class="dark_text">Episodes:</span>
  12
</div>
<div class="spaceit_pad">
  <span class="dark_text">Status:</span>
  Currently Airing
</div>
<div class="spaceit_pad">
  <span class="dark_text">Aired:</span>
  Jan 7, 2024 to ?
</div>
<div class="spaceit_pad">
  <span class="dark_text">Broadcast:</span>
  Sundays at 23:30 (JST)
</div>
<div class="spaceit_pad">
  <span class="dark_text">Producers:</span>
  <a href="/p/1">Aniplex</a>, <a href="/p/2">Fuji&nbsp;TV</a>
</div>"#;

    #[test]
    fn test_parse_rows() {
        let panel = InfoPanel::parse(PANEL);
        assert_eq!(panel.len(), 6);

        let elements: Vec<_> = ["Type:", "Episodes:", "Status:", "Aired:", "Broadcast:", "Producers:"]
            .iter()
            .map(|label| panel.lookup(label).unwrap().element.index())
            .collect();
        assert_eq!(elements, [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_render_roundtrips_untouched() {
        let panel = InfoPanel::parse(PANEL);
        assert_eq!(panel.render(), PANEL);
    }

    #[test]
    fn test_lookup_strips_label_and_tags() {
        let panel = InfoPanel::parse(PANEL);

        assert_eq!(panel.lookup("Status:").unwrap().text, "Currently Airing");
        assert_eq!(panel.lookup("Episodes:").unwrap().text, "12");
        assert_eq!(panel.lookup("Aired:").unwrap().text, "Jan 7, 2024 to ?");
        assert_eq!(panel.lookup("Type:").unwrap().text, "TV");
        assert_eq!(
            panel.lookup("Producers:").unwrap().text,
            "Aniplex, Fuji TV"
        );
        assert!(panel.lookup("Premiered:").is_none());
    }

    #[test]
    fn test_replace_and_append() {
        let mut panel = InfoPanel::parse(PANEL);
        let episodes = panel.lookup("Episodes:").unwrap().element;

        panel.append_content(episodes, "<small>!</small>");
        assert!(panel.markup(episodes).unwrap().ends_with("<small>!</small>"));

        let aired = panel.lookup("Aired:").unwrap().element;
        let replaced = panel.markup(aired).unwrap().replace('?', "~Mar 24, 2024");
        panel.replace_content(aired, replaced);

        assert_eq!(
            panel.lookup("Aired:").unwrap().text,
            "Jan 7, 2024 to ~Mar 24, 2024"
        );
        assert!(panel.render().contains("12\n<small>!</small></div>"));
    }

    #[test]
    fn test_uppercase_tags() {
        let html = r#"<DIV id="s"><SPAN CLASS="dark_text">Status:</SPAN> Finished Airing</DIV>"#;
        let panel = InfoPanel::parse(html);

        assert_eq!(panel.lookup("Status:").unwrap().text, "Finished Airing");
        assert_eq!(panel.render(), html);
    }

    #[test]
    fn test_mixed_case_close_tags_survive_edits() {
        let html = "<Div><span class=\"dark_text\">Aired:</span> Jan 7, 2024 to ?</DIV>\n\
                    <div><span class=\"dark_text\">Episodes:</span> 12</dIv>";
        let mut panel = InfoPanel::parse(html);
        assert_eq!(panel.render(), html);

        let episodes = panel.lookup("Episodes:").unwrap().element;
        panel.append_content(episodes, "!");

        let rendered = panel.render();
        assert!(rendered.contains("to ?</DIV>"));
        assert!(rendered.ends_with(" 12!</dIv>"));
    }

    #[test]
    fn test_malformed_fragments_roundtrip() {
        for html in [
            r#"<div><span class="dark_text">Aired:</span> no close"#,
            r#"</div><span class="dark_text">Status:</span></div>"#,
            r#"<div <span class="dark_text">"#,
            "<div>放送: <span class=\"dark_text\">Status:</span> 日曜日</div>",
            "",
        ] {
            assert_eq!(InfoPanel::parse(html).render(), html);
        }
    }

    #[test]
    fn test_label_outside_row_is_kept_raw() {
        let html = r#"<p><span class="dark_text">Orphan:</span> x</p>"#;
        let panel = InfoPanel::parse(html);

        assert!(panel.is_empty());
        assert_eq!(panel.render(), html);
    }

    #[test]
    fn test_unknown_element_is_ignored() {
        let mut panel = InfoPanel::parse(PANEL);
        panel.append_content(ElementId::new(99), "x");
        assert!(panel.markup(ElementId::new(99)).is_none());
        assert_eq!(panel.render(), PANEL);
    }
}
