//! Data the host hands to commands and receives back from them.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::base::{DocumentId, Position, Selection, Span, TextDocument};

/// Hierarchical code action kind, e.g. `quickfix` or `source.organizeImports`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeActionKind(Arc<str>);

impl CodeActionKind {
    pub fn new(value: impl Into<Arc<str>>) -> Self {
        Self(value.into())
    }

    pub fn quick_fix() -> Self {
        Self::new("quickfix")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CodeActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CodeActionKind({})", self.0)
    }
}

/// A single text replacement inside one document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    pub document: DocumentId,
    pub range: Span,
    pub new_text: String,
}

impl TextEdit {
    pub fn insert(document: impl Into<DocumentId>, at: Position, text: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            range: Span::empty(at),
            new_text: text.into(),
        }
    }

    pub fn replace(document: impl Into<DocumentId>, range: Span, text: impl Into<String>) -> Self {
        Self {
            document: document.into(),
            range,
            new_text: text.into(),
        }
    }
}

/// A set of edits the host applies as one operation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceEdit {
    pub changes: Vec<TextEdit>,
}

impl WorkspaceEdit {
    pub fn new(changes: Vec<TextEdit>) -> Self {
        Self { changes }
    }
}

/// A host command invocation: name plus positional arguments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub name: String,
    #[serde(default)]
    pub arguments: Vec<serde_json::Value>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_arguments(mut self, arguments: Vec<serde_json::Value>) -> Self {
        self.arguments = arguments;
        self
    }
}

/// A code action offered by the host's code-action provider.
///
/// `edit` and `command` are independent; an action may carry either,
/// both or neither.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CodeAction {
    pub title: String,
    #[serde(default)]
    pub kind: Option<CodeActionKind>,
    #[serde(default)]
    pub edit: Option<WorkspaceEdit>,
    #[serde(default)]
    pub command: Option<Command>,
}

impl CodeAction {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind: None,
            edit: None,
            command: None,
        }
    }

    pub fn with_kind(mut self, kind: CodeActionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_edit(mut self, edit: WorkspaceEdit) -> Self {
        self.edit = Some(edit);
        self
    }

    pub fn with_command(mut self, command: Command) -> Self {
        self.command = Some(command);
        self
    }
}

/// A span inside a specific document, as returned by the reference provider.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub document: DocumentId,
    pub span: Span,
}

impl Location {
    pub fn new(document: impl Into<DocumentId>, span: Span) -> Self {
        Self {
            document: document.into(),
            span,
        }
    }

    pub fn contains(&self, document: &DocumentId, position: Position) -> bool {
        &self.document == document && self.span.contains(position)
    }
}

/// Snapshot of the active text editor at the moment a command runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorState {
    pub document: TextDocument,
    pub selection: Selection,
}

impl EditorState {
    pub fn new(document: TextDocument, selection: Selection) -> Self {
        Self {
            document,
            selection,
        }
    }

    /// Editor with a zero-width selection at `caret`.
    pub fn at(document: TextDocument, caret: Position) -> Self {
        Self::new(document, Selection::caret(caret))
    }

    pub fn document_id(&self) -> &DocumentId {
        self.document.id()
    }

    pub fn caret(&self) -> Position {
        self.selection.active
    }

    /// The caret's word range, or a zero-width range at the caret.
    pub fn word_range_or_caret(&self) -> Span {
        self.document
            .word_range_at(self.caret())
            .unwrap_or_else(|| Span::empty(self.caret()))
    }
}
