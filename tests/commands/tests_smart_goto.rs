//! Go to definition with a references fallback.

use crate::helpers::host_fixtures::*;
use highlight_errors::base::{Position, Selection};
use highlight_errors::CommandId;
use highlight_errors::host::{Capability, HostEvent};

const COMMAND: &str = "highlight-errors.smartGoto";

#[tokio::test]
async fn test_definition_found_skips_references() {
    let (host, extension, _context) = activated();
    host.add_definition(loc(APP, 0, 14, 17), loc(LIB, 0, 16, 19));
    host.add_reference_group(vec![loc(APP, 0, 14, 17), loc(APP, 1, 12, 15)]);
    let editor = editor_at(&host, APP, 0, 15);

    extension.execute(COMMAND, Some(&editor)).await.unwrap();

    assert_eq!(reference_requests(&host), 0);
    let active = host.active_editor().unwrap();
    assert_eq!(active.document_id(), &doc(LIB));
    assert_eq!(active.caret(), Position::new(0, 16));
}

#[tokio::test]
async fn test_definition_in_same_document_counts_as_move() {
    let (host, extension, _context) = activated();
    host.add_definition(loc(APP, 1, 12, 15), loc(APP, 0, 14, 17));
    let editor = editor_at(&host, APP, 1, 13);

    extension.execute(COMMAND, Some(&editor)).await.unwrap();

    assert_eq!(reference_requests(&host), 0);
    assert_eq!(host.active_editor().unwrap().caret(), Position::new(0, 14));
}

#[tokio::test]
async fn test_unmoved_caret_falls_back_to_references_once() {
    let (host, extension, _context) = activated();
    host.add_reference_group(vec![loc(LIB, 0, 16, 19), loc(APP, 0, 14, 17)]);
    let editor = editor_at(&host, APP, 0, 15);

    extension.execute(COMMAND, Some(&editor)).await.unwrap();

    assert_eq!(reference_requests(&host), 1);
    assert_eq!(
        effects(&host),
        vec![HostEvent::DocumentShown {
            document: doc(LIB),
            selection: Selection::caret(Position::new(0, 16)),
        }]
    );
}

#[tokio::test]
async fn test_fallback_does_not_depend_on_registered_references_command() {
    let (host, extension, context) = activated();
    context
        .subscriptions()
        .iter()
        .find(|disposable| disposable.id() == CommandId::GoToReferences)
        .unwrap()
        .dispose();
    host.add_reference_group(vec![loc(LIB, 0, 16, 19), loc(APP, 0, 14, 17)]);
    let editor = editor_at(&host, APP, 0, 15);

    extension.execute(COMMAND, Some(&editor)).await.unwrap();

    assert!(!extension.registry().contains(CommandId::GoToReferences));
    assert_eq!(reference_requests(&host), 1);
}

#[tokio::test]
async fn test_no_editor_after_reveal_ends_quietly() {
    let (host, extension, _context) = activated();
    let editor = editor_at(&host, APP, 0, 15);
    host.close_editors();

    extension.execute(COMMAND, Some(&editor)).await.unwrap();

    assert_eq!(reference_requests(&host), 0);
    assert!(effects(&host).is_empty());
}

#[tokio::test]
async fn test_no_editor_is_silent() {
    let (host, extension, _context) = activated();

    extension.execute(COMMAND, None).await.unwrap();

    assert!(host.events().is_empty());
}

#[tokio::test]
async fn test_reveal_failure_skips_fallback() {
    let (host, extension, _context) = activated();
    host.fail(Capability::RevealDefinition);
    host.add_reference_group(vec![loc(LIB, 0, 16, 19), loc(APP, 0, 14, 17)]);
    let editor = editor_at(&host, APP, 0, 15);

    assert!(extension.execute(COMMAND, Some(&editor)).await.is_ok());
    assert_eq!(reference_requests(&host), 0);
}
