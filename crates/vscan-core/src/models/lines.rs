//! Ordered line input for one document.

/// Full-width (ideographic) space used by CJK report templates.
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Read-only sequence of text lines scoped to one document.
///
/// Strategies borrow it and never mutate it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSequence {
    lines: Vec<String>,
}

impl LineSequence {
    /// Split already-extracted text on line breaks.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(normalize_line).collect(),
        }
    }

    /// Concatenate the line lists of each page, in page order.
    pub fn from_pages<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines = pages
            .into_iter()
            .flat_map(|page| {
                page.as_ref()
                    .lines()
                    .map(normalize_line)
                    .collect::<Vec<_>>()
            })
            .collect();
        Self { lines }
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document yielded no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate lines front to back.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Line at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for LineSequence {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            lines: iter.into_iter().map(|l| normalize_line(l.as_ref())).collect(),
        }
    }
}

fn normalize_line(line: &str) -> String {
    line.replace(IDEOGRAPHIC_SPACE, " ")
}
