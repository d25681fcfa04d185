//! Import code action execution.

use std::sync::Arc;

use serde_json::json;

use crate::helpers::host_fixtures::*;
use highlight_errors::base::{Position, Span};
use highlight_errors::host::{
    Capability, CodeAction, CodeActionKind, Command, HostEvent, TextEdit, WorkspaceEdit,
};
use highlight_errors::{Extension, ExtensionConfig, ExtensionContext};

const COMMAND: &str = "highlight-errors.executeCodeAction";

fn add_import(name: &str, from: &str) -> CodeAction {
    CodeAction::new(format!("Add import from \"{}\"", from))
        .with_kind(CodeActionKind::quick_fix())
        .with_edit(WorkspaceEdit::new(vec![TextEdit::insert(
            APP,
            Position::new(0, 0),
            format!("import {{ {} }} from '{}';\n", name, from),
        )]))
}

#[tokio::test]
async fn test_single_import_is_applied_directly() {
    let (host, extension, _context) = activated();
    offer_actions(
        &host,
        APP,
        vec![
            add_import("sum", "./lib"),
            CodeAction::new("Add all missing imports"),
            CodeAction::new("Change spelling to 'sun'"),
        ],
    );
    let editor = editor_at(&host, APP, 0, 15);

    extension.execute(COMMAND, Some(&editor)).await.unwrap();

    assert!(matches!(effects(&host).as_slice(), [HostEvent::EditApplied(_)]));
    assert!(
        host.document(&doc(APP))
            .unwrap()
            .text()
            .starts_with("import { sum } from './lib';\nconst total")
    );
}

#[tokio::test]
async fn test_single_import_command_runs_with_its_arguments() {
    let (host, extension, _context) = activated();
    host.register_command("_typescript.applyFixAllCodeAction", Some(json!(true)));
    let command = Command::new("_typescript.applyFixAllCodeAction")
        .with_arguments(vec![json!(APP), json!({ "fixId": "fixMissingImport" })]);
    offer_actions(
        &host,
        APP,
        vec![CodeAction::new("Import 'sum' from module \"./lib\"").with_command(command.clone())],
    );
    let editor = editor_at(&host, APP, 0, 15);

    extension.execute(COMMAND, Some(&editor)).await.unwrap();

    assert_eq!(effects(&host), vec![HostEvent::CommandExecuted(command)]);
}

#[tokio::test]
async fn test_two_imports_open_quick_fix_with_every_action() {
    let (host, extension, _context) = activated();
    let offered = vec![
        CodeAction::new("Import A"),
        CodeAction::new("Import B"),
        CodeAction::new("Remove unused declaration"),
    ];
    offer_actions(&host, APP, offered.clone());
    let editor = editor_at(&host, APP, 0, 15);

    extension.execute(COMMAND, Some(&editor)).await.unwrap();

    assert_eq!(
        effects(&host),
        vec![HostEvent::QuickFixShown {
            document: doc(APP),
            position: Position::new(0, 15),
            actions: offered,
        }]
    );
}

#[tokio::test]
async fn test_no_import_opens_quick_fix() {
    let (host, extension, _context) = activated();
    offer_actions(&host, APP, vec![CodeAction::new("Add all missing imports")]);
    let editor = editor_at(&host, APP, 0, 15);

    extension.execute(COMMAND, Some(&editor)).await.unwrap();

    assert!(matches!(
        effects(&host).as_slice(),
        [HostEvent::QuickFixShown { actions, .. }] if actions.len() == 1
    ));
}

#[tokio::test]
async fn test_no_editor_shows_notice_and_skips_host() {
    let (host, extension, _context) = activated();

    extension.execute(COMMAND, None).await.unwrap();

    assert_eq!(
        host.events(),
        vec![HostEvent::InformationMessage("No active editor!".to_string())]
    );
}

#[tokio::test]
async fn test_provider_failure_is_swallowed() {
    let (host, extension, _context) = activated();
    host.fail(Capability::CodeActions);
    let editor = editor_at(&host, APP, 0, 15);

    let result = extension.execute(COMMAND, Some(&editor)).await;

    assert!(result.is_ok());
    assert!(effects(&host).is_empty());
}

#[tokio::test]
async fn test_failed_edit_skips_follow_up_command() {
    let (host, extension, _context) = activated();
    host.register_command("organize", None);
    host.fail(Capability::ApplyEdit);
    offer_actions(
        &host,
        APP,
        vec![add_import("sum", "./lib").with_command(Command::new("organize"))],
    );
    let editor = editor_at(&host, APP, 0, 15);

    extension.execute(COMMAND, Some(&editor)).await.unwrap();

    assert!(effects(&host).is_empty());
}

#[tokio::test]
async fn test_declined_edit_still_runs_follow_up_command() {
    let (host, extension, _context) = activated();
    host.register_command("organize", None);
    host.decline_edits(true);
    offer_actions(
        &host,
        APP,
        vec![add_import("sum", "./lib").with_command(Command::new("organize"))],
    );
    let before = host.document(&doc(APP)).unwrap();
    let editor = editor_at(&host, APP, 0, 15);

    extension.execute(COMMAND, Some(&editor)).await.unwrap();

    assert_eq!(
        effects(&host),
        vec![HostEvent::CommandExecuted(Command::new("organize"))]
    );
    assert_eq!(host.document(&doc(APP)).unwrap(), before);
}

#[tokio::test]
async fn test_overlapping_edits_are_rejected_without_panicking() {
    let (host, extension, _context) = activated();
    host.register_command("organize", None);
    let overlapping = CodeAction::new("Add import from \"./lib\"")
        .with_edit(WorkspaceEdit::new(vec![
            TextEdit::replace(APP, Span::from_coords(0, 0, 0, 4), ""),
            TextEdit::replace(APP, Span::from_coords(0, 2, 0, 6), "X"),
        ]))
        .with_command(Command::new("organize"));
    offer_actions(&host, APP, vec![overlapping]);
    let before = host.document(&doc(APP)).unwrap();
    let editor = editor_at(&host, APP, 0, 15);

    let result = extension.execute(COMMAND, Some(&editor)).await;

    assert!(result.is_ok());
    assert!(effects(&host).is_empty());
    assert_eq!(host.document(&doc(APP)).unwrap(), before);
}

#[tokio::test]
async fn test_custom_keyword_from_settings() {
    let (host, _default, _context) = activated();
    let config = ExtensionConfig::from_json(
        r#"{ "importKeyword": "use", "importExclusions": ["all uses"] }"#,
    )
    .unwrap();
    let extension = Extension::new(Arc::clone(&host), config);
    extension.activate(&mut ExtensionContext::new()).unwrap();
    offer_actions(
        &host,
        APP,
        vec![
            CodeAction::new("Add import from \"./lib\""),
            CodeAction::new("Use sum from ./lib").with_command(Command::new("noop")),
            CodeAction::new("Add all uses"),
        ],
    );
    host.register_command("noop", None);
    let editor = editor_at(&host, APP, 0, 15);

    extension.execute(COMMAND, Some(&editor)).await.unwrap();

    assert_eq!(
        effects(&host),
        vec![HostEvent::CommandExecuted(Command::new("noop"))]
    );
}
