//! Document identity and text snapshots.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Position, Span};
use crate::core::text_utils::find_word_boundaries;

/// Identity of a document open in the host, usually its URI.
///
/// Two ids are the same document iff their strings are equal.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Arc<str>);

impl DocumentId {
    pub fn new(uri: impl Into<Arc<str>>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocumentId({})", self.0)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocumentId {
    fn from(uri: &str) -> Self {
        Self::new(uri)
    }
}

impl From<String> for DocumentId {
    fn from(uri: String) -> Self {
        Self::new(uri)
    }
}

/// Immutable snapshot of a document's text as the host saw it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextDocument {
    id: DocumentId,
    text: Arc<str>,
}

impl TextDocument {
    pub fn new(id: impl Into<DocumentId>, text: impl Into<Arc<str>>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Line `n` without its terminator, `None` past the end.
    pub fn line(&self, n: usize) -> Option<&str> {
        self.text
            .split('\n')
            .nth(n)
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
    }

    /// Range of the word under `position`, if any.
    ///
    /// A caret sitting just after the last character of a word still
    /// counts as being on that word.
    pub fn word_range_at(&self, position: Position) -> Option<Span> {
        let line = self.line(position.line)?;
        let chars: Vec<char> = line.chars().collect();

        let (start, end) = find_word_boundaries(&chars, position.column).or_else(|| {
            position
                .column
                .checked_sub(1)
                .and_then(|prev| find_word_boundaries(&chars, prev))
        })?;

        Some(Span::from_coords(position.line, start, position.line, end))
    }
}
