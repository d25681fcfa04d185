//! Candidate filters.

use crate::base::{DocumentId, Position};
use crate::host::{CodeAction, Location};

/// A side-effect free test applied once to each candidate.
///
/// Any `Fn(&T) -> bool` is a predicate, so ad-hoc strategies can be passed
/// to [`decide`](super::decide) without a named type.
pub trait FilterPredicate<T: ?Sized> {
    fn matches(&self, candidate: &T) -> bool;
}

impl<T: ?Sized, F> FilterPredicate<T> for F
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, candidate: &T) -> bool {
        self(candidate)
    }
}

/// Accepts code actions that look like "add this one import".
///
/// Titles are compared case-insensitively: the keyword must appear and no
/// excluded phrase may.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportActionFilter {
    keyword: String,
    excluded: Vec<String>,
}

impl Default for ImportActionFilter {
    fn default() -> Self {
        Self::new("import", ["all missing imports"])
    }
}

impl ImportActionFilter {
    pub fn new<I, S>(keyword: impl AsRef<str>, excluded: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keyword: keyword.as_ref().to_lowercase(),
            excluded: excluded
                .into_iter()
                .map(|phrase| phrase.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn matches_title(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        title.contains(&self.keyword) && !self.excluded.iter().any(|p| title.contains(p))
    }
}

impl FilterPredicate<CodeAction> for ImportActionFilter {
    fn matches(&self, candidate: &CodeAction) -> bool {
        self.matches_title(&candidate.title)
    }
}

/// Drops the reference the caret is sitting on.
///
/// Locations in other documents always pass; same-document locations pass
/// unless their span contains the caret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExcludeEnclosingReference {
    document: DocumentId,
    caret: Position,
}

impl ExcludeEnclosingReference {
    pub fn new(document: DocumentId, caret: Position) -> Self {
        Self { document, caret }
    }
}

impl FilterPredicate<Location> for ExcludeEnclosingReference {
    fn matches(&self, candidate: &Location) -> bool {
        !candidate.contains(&self.document, self.caret)
    }
}
