//! Capabilities the augmenter needs from a displayed panel.

/// Opaque handle to an element of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

impl ElementId {
    /// Creates a handle from an implementation-defined index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the implementation-defined index.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.0
    }
}

/// A labelled value found on a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Visible value text with the label stripped and whitespace trimmed.
    pub text: String,
    /// Element containing the label and value.
    pub element: ElementId,
}

/// Finds labelled values on a panel.
pub trait FieldExtractor {
    /// Looks up the value associated with a visible label such as `"Aired:"`.
    fn lookup(&self, label: &str) -> Option<Field>;

    /// Returns the current inner markup of an element.
    fn markup(&self, element: ElementId) -> Option<&str>;
}

/// Writes content back into a panel.
///
/// Neither operation checks for earlier writes; callers guard against
/// duplicate appends themselves.
pub trait Renderer {
    /// Replaces an element's inner markup.
    fn replace_content(&mut self, element: ElementId, markup: String);

    /// Appends markup to the end of an element's inner markup.
    fn append_content(&mut self, element: ElementId, markup: &str);
}
