//! Go to references, skipping the one under the caret.

use tracing::{debug, error};

use crate::base::Selection;
use crate::config::ExtensionConfig;
use crate::host::{EditorHost, EditorState, HostError};
use crate::policy::{Decision, ExcludeEnclosingReference, Policy, decide};

use super::CommandId;

/// Navigate to the references of the symbol at the caret.
///
/// The reference enclosing the caret is dropped. One remaining reference
/// is opened directly with the caret at its start; several open the
/// host's references panel; none does nothing.
pub async fn go_to_references<H: EditorHost + ?Sized>(
    host: &H,
    config: &ExtensionConfig,
    editor: Option<&EditorState>,
) {
    let Some(editor) = editor else {
        host.show_information_message(&config.no_editor_message);
        return;
    };

    if let Err(err) = run(host, editor).await {
        error!(
            command = %CommandId::GoToReferences,
            error = %err,
            "Error fetching references"
        );
    }
}

async fn run<H: EditorHost + ?Sized>(host: &H, editor: &EditorState) -> Result<(), HostError> {
    let origin = editor.document_id();
    let caret = editor.caret();

    let references = host.references(origin, caret).await?;
    let filter = ExcludeEnclosingReference::new(origin.clone(), caret);
    let decision = decide(&references, &filter, Policy::REFERENCES);
    debug!(
        found = references.len(),
        decision = decision.label(),
        "classified references"
    );

    match decision {
        Decision::AutoApply(target) => {
            host.show_document(&target.document, Selection::caret(target.span.start))
                .await
        }
        Decision::DelegateToHostUi(remaining) => {
            host.show_references(origin, caret, &remaining).await
        }
        Decision::Noop => Ok(()),
    }
}
