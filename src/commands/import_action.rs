//! Run the one import fix at the caret, or open the quick-fix menu.

use tracing::{debug, error, warn};

use crate::config::ExtensionConfig;
use crate::host::{CodeAction, EditorHost, EditorState, HostError};
use crate::policy::{Decision, Policy, decide};

use super::CommandId;

/// Execute the single import-related code action at the caret.
///
/// Actions are requested for the word under the caret (or an empty range
/// at the caret). If exactly one of them is an import fix it is applied
/// directly; otherwise the host's quick-fix chooser opens over every
/// action, not just the import ones.
pub async fn execute_import_action<H: EditorHost + ?Sized>(
    host: &H,
    config: &ExtensionConfig,
    editor: Option<&EditorState>,
) {
    let Some(editor) = editor else {
        host.show_information_message(&config.no_editor_message);
        return;
    };

    if let Err(err) = run(host, config, editor).await {
        error!(
            command = %CommandId::ExecuteImportAction,
            error = %err,
            "Error fetching code actions"
        );
    }
}

async fn run<H: EditorHost + ?Sized>(
    host: &H,
    config: &ExtensionConfig,
    editor: &EditorState,
) -> Result<(), HostError> {
    let range = editor.word_range_or_caret();
    let actions = host.code_actions(editor.document_id(), range).await?;

    let decision = decide(&actions, &config.import_filter(), Policy::IMPORT_ACTION);
    debug!(
        offered = actions.len(),
        decision = decision.label(),
        "classified code actions"
    );

    match decision {
        Decision::AutoApply(action) => {
            debug!(
                title = %action.title,
                kind = action.kind.as_ref().map(|k| k.as_str()),
                "applying import action"
            );
            apply_code_action(host, &action).await
        }
        Decision::DelegateToHostUi(all) => host.show_quick_fix(editor, &all).await,
        Decision::Noop => Ok(()),
    }
}

/// Apply `action`'s edit, then run its follow-up command.
///
/// Both steps are optional and independent. An edit already applied is
/// not rolled back if the command fails.
pub async fn apply_code_action<H: EditorHost + ?Sized>(
    host: &H,
    action: &CodeAction,
) -> Result<(), HostError> {
    if let Some(edit) = &action.edit {
        if !host.apply_edit(edit).await? {
            warn!(title = %action.title, "host declined the edit");
        }
    }

    if let Some(command) = &action.command {
        host.execute_command(command).await?;
    }

    Ok(())
}
