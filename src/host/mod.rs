//! Host capabilities consumed by the commands.
//!
//! The editor runtime is reached only through [`EditorHost`]. Commands never
//! dispatch host features by string name; each capability they need is a
//! trait method, and an adapter binds it to a concrete editor.
//!
//! [`MemoryHost`] is a complete headless adapter that keeps documents and
//! provider results in memory.

mod error;
mod memory;
mod types;

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::base::{DocumentId, Position, Selection, Span};

pub use error::HostError;
pub use memory::{HostEvent, MemoryHost};
pub use types::{
    CodeAction, CodeActionKind, Command, EditorState, Location, TextEdit, WorkspaceEdit,
};

/// The host features a command can call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Capability {
    CodeActions,
    References,
    ApplyEdit,
    ExecuteCommand,
    RevealDefinition,
    ShowQuickFix,
    ShowReferences,
    ShowDocument,
}

impl Capability {
    pub fn as_str(self) -> &'static str {
        match self {
            Capability::CodeActions => "codeActions",
            Capability::References => "references",
            Capability::ApplyEdit => "applyEdit",
            Capability::ExecuteCommand => "executeCommand",
            Capability::RevealDefinition => "revealDefinition",
            Capability::ShowQuickFix => "showQuickFix",
            Capability::ShowReferences => "showReferences",
            Capability::ShowDocument => "showDocument",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The editor runtime as seen by command handlers.
///
/// Every async method is a suspension point: the handler waits for the
/// host to resolve it. Implementations must not assume calls are
/// serialized; the same command may be running twice.
#[async_trait]
pub trait EditorHost: Send + Sync {
    /// Code actions the host offers for `range` in `document`.
    async fn code_actions(
        &self,
        document: &DocumentId,
        range: Span,
    ) -> Result<Vec<CodeAction>, HostError>;

    /// References to the symbol at `position`, in provider order.
    async fn references(
        &self,
        document: &DocumentId,
        position: Position,
    ) -> Result<Vec<Location>, HostError>;

    /// Apply `edit`. `Ok(false)` means the host declined it.
    async fn apply_edit(&self, edit: &WorkspaceEdit) -> Result<bool, HostError>;

    /// Run a host command with its stored arguments.
    async fn execute_command(
        &self,
        command: &Command,
    ) -> Result<Option<serde_json::Value>, HostError>;

    /// Run the host's go-to-definition from `editor`.
    ///
    /// Returns the editor that is active once navigation settles, or `None`
    /// when no editor is active.
    async fn reveal_definition(
        &self,
        editor: &EditorState,
    ) -> Result<Option<EditorState>, HostError>;

    /// Open the host's quick-fix chooser at the caret of `editor`.
    async fn show_quick_fix(
        &self,
        editor: &EditorState,
        actions: &[CodeAction],
    ) -> Result<(), HostError>;

    /// Open the host's references panel anchored at `origin`/`position`.
    async fn show_references(
        &self,
        origin: &DocumentId,
        position: Position,
        locations: &[Location],
    ) -> Result<(), HostError>;

    /// Open `document` (if needed) and apply `selection` to its editor.
    async fn show_document(
        &self,
        document: &DocumentId,
        selection: Selection,
    ) -> Result<(), HostError>;

    /// Transient notice to the user. Fire-and-forget.
    fn show_information_message(&self, message: &str);
}
