//! Go to definition, falling back to references when nothing happens.

use tracing::{debug, error};

use crate::config::ExtensionConfig;
use crate::host::{EditorHost, EditorState, HostError};

use super::{CommandId, go_to_references};

/// Whether go-to-definition took the user anywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Moved,
    Unchanged,
}

impl Navigation {
    /// Compare the editor before and after a navigation attempt.
    ///
    /// Any change of document or caret position counts as a move.
    pub fn between(before: &EditorState, after: &EditorState) -> Self {
        if before.document_id() != after.document_id() || before.caret() != after.caret() {
            Navigation::Moved
        } else {
            Navigation::Unchanged
        }
    }
}

/// Reveal the definition at the caret; if the caret stays put, run
/// [`go_to_references`] once instead.
///
/// Without an active editor this does nothing, not even a notice. The
/// fallback calls the handler directly rather than through the registry.
pub async fn smart_goto<H: EditorHost + ?Sized>(
    host: &H,
    config: &ExtensionConfig,
    editor: Option<&EditorState>,
) {
    let Some(editor) = editor else {
        return;
    };

    if let Err(err) = run(host, config, editor).await {
        error!(
            command = %CommandId::SmartGoto,
            error = %err,
            "Error revealing definition"
        );
    }
}

async fn run<H: EditorHost + ?Sized>(
    host: &H,
    config: &ExtensionConfig,
    editor: &EditorState,
) -> Result<(), HostError> {
    let Some(after) = host.reveal_definition(editor).await? else {
        debug!("no active editor after revealing definition");
        return Ok(());
    };

    match Navigation::between(editor, &after) {
        Navigation::Moved => {
            debug!(document = %after.document_id(), "definition revealed");
        }
        Navigation::Unchanged => {
            debug!("caret did not move, falling back to references");
            go_to_references(host, config, Some(&after)).await;
        }
    }

    Ok(())
}
