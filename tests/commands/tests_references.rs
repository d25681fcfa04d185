//! Reference navigation that skips the reference under the caret.

use crate::helpers::host_fixtures::*;
use highlight_errors::base::{Position, Selection};
use highlight_errors::host::{Capability, HostEvent};

const COMMAND: &str = "highlight-errors.goToReferences";

#[tokio::test]
async fn test_single_other_reference_is_opened_directly() {
    let (host, extension, _context) = activated();
    host.add_reference_group(vec![loc(APP, 0, 14, 17), loc(LIB, 0, 16, 19)]);
    let editor = editor_at(&host, APP, 0, 15);

    extension.execute(COMMAND, Some(&editor)).await.unwrap();

    assert_eq!(
        effects(&host),
        vec![HostEvent::DocumentShown {
            document: doc(LIB),
            selection: Selection::caret(Position::new(0, 16)),
        }]
    );
    let active = host.active_editor().unwrap();
    assert_eq!(active.document_id(), &doc(LIB));
    assert!(active.selection.is_empty());
}

#[tokio::test]
async fn test_several_references_open_panel_without_self() {
    let (host, extension, _context) = activated();
    host.add_reference_group(vec![
        loc(LIB, 0, 16, 19),
        loc(APP, 0, 14, 17),
        loc(APP, 1, 12, 15),
    ]);
    let editor = editor_at(&host, APP, 0, 15);

    extension.execute(COMMAND, Some(&editor)).await.unwrap();

    assert_eq!(
        effects(&host),
        vec![HostEvent::ReferencesShown {
            origin: doc(APP),
            position: Position::new(0, 15),
            locations: vec![loc(LIB, 0, 16, 19), loc(APP, 1, 12, 15)],
        }]
    );
}

#[tokio::test]
async fn test_only_self_reference_does_nothing() {
    let (host, extension, _context) = activated();
    host.add_reference_group(vec![loc(APP, 0, 14, 17)]);
    let editor = editor_at(&host, APP, 0, 15);

    extension.execute(COMMAND, Some(&editor)).await.unwrap();

    assert!(effects(&host).is_empty());
    assert_eq!(host.active_editor().unwrap(), editor);
}

#[tokio::test]
async fn test_no_references_does_nothing() {
    let (host, extension, _context) = activated();
    let editor = editor_at(&host, APP, 0, 2);

    extension.execute(COMMAND, Some(&editor)).await.unwrap();

    assert!(effects(&host).is_empty());
    assert_eq!(reference_requests(&host), 1);
}

#[tokio::test]
async fn test_same_span_in_other_document_is_kept() {
    let (host, extension, _context) = activated();
    host.add_reference_group(vec![loc(APP, 0, 14, 17), loc(UTIL, 0, 14, 17)]);
    let editor = editor_at(&host, APP, 0, 15);

    extension.execute(COMMAND, Some(&editor)).await.unwrap();

    assert_eq!(
        effects(&host),
        vec![HostEvent::DocumentShown {
            document: doc(UTIL),
            selection: Selection::caret(Position::new(0, 14)),
        }]
    );
}

#[tokio::test]
async fn test_navigation_failure_is_swallowed() {
    let (host, extension, _context) = activated();
    host.add_reference_group(vec![loc(APP, 0, 14, 17), loc(LIB, 0, 16, 19)]);
    host.fail(Capability::ShowDocument);
    let editor = editor_at(&host, APP, 0, 15);

    assert!(extension.execute(COMMAND, Some(&editor)).await.is_ok());
    assert!(effects(&host).is_empty());
    assert_eq!(host.active_editor().unwrap(), editor);
}
