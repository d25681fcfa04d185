//! Headless in-process host.
//!
//! `MemoryHost` answers provider requests from tables filled in by its
//! owner, applies workspace edits to the text it stores, and journals every
//! request and UI effect as a [`HostEvent`].

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::trace;

use crate::base::{DocumentId, Position, Selection, Span, TextDocument};

use super::{
    Capability, CodeAction, Command, EditorHost, EditorState, HostError, Location, TextEdit,
    WorkspaceEdit,
};

/// Something the host was asked to do, in call order.
#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    CodeActionsRequested {
        document: DocumentId,
        range: Span,
    },
    ReferencesRequested {
        document: DocumentId,
        position: Position,
    },
    EditApplied(WorkspaceEdit),
    CommandExecuted(Command),
    DefinitionRevealed {
        document: DocumentId,
        position: Position,
    },
    QuickFixShown {
        document: DocumentId,
        position: Position,
        actions: Vec<CodeAction>,
    },
    ReferencesShown {
        origin: DocumentId,
        position: Position,
        locations: Vec<Location>,
    },
    DocumentShown {
        document: DocumentId,
        selection: Selection,
    },
    InformationMessage(String),
}

#[derive(Default)]
struct State {
    documents: HashMap<DocumentId, String>,
    active: Option<(DocumentId, Selection)>,
    code_actions: HashMap<DocumentId, Vec<(Span, CodeAction)>>,
    reference_groups: Vec<Vec<Location>>,
    definitions: Vec<(Location, Location)>,
    commands: HashMap<String, Option<serde_json::Value>>,
    failing: HashSet<Capability>,
    declining_edits: bool,
    events: Vec<HostEvent>,
}

impl State {
    fn check(&self, capability: Capability) -> Result<(), HostError> {
        if self.failing.contains(&capability) {
            return Err(HostError::provider(capability, "injected failure"));
        }
        Ok(())
    }

    fn snapshot(&self, id: &DocumentId) -> Result<TextDocument, HostError> {
        self.documents
            .get(id)
            .map(|text| TextDocument::new(id.clone(), text.as_str()))
            .ok_or_else(|| HostError::UnknownDocument(id.clone()))
    }

    fn active_editor(&self) -> Option<EditorState> {
        let (id, selection) = self.active.as_ref()?;
        let document = self.snapshot(id).ok()?;
        Some(EditorState::new(document, *selection))
    }
}

/// In-memory [`EditorHost`].
#[derive(Default)]
pub struct MemoryHost {
    state: Mutex<State>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a document. Does not change the active editor.
    pub fn open_document(&self, id: impl Into<DocumentId>, text: impl Into<String>) -> TextDocument {
        let id = id.into();
        let text = text.into();
        let document = TextDocument::new(id.clone(), text.as_str());
        self.state.lock().documents.insert(id, text);
        document
    }

    /// Current text snapshot of `id`.
    pub fn document(&self, id: &DocumentId) -> Option<TextDocument> {
        self.state.lock().snapshot(id).ok()
    }

    /// Make `id` the active editor with the caret at `caret`.
    pub fn focus(&self, id: &DocumentId, caret: Position) -> Result<EditorState, HostError> {
        let mut state = self.state.lock();
        let document = state.snapshot(id)?;
        let selection = Selection::caret(caret);
        state.active = Some((id.clone(), selection));
        Ok(EditorState::new(document, selection))
    }

    /// Close every editor; afterwards there is no active editor.
    pub fn close_editors(&self) {
        self.state.lock().active = None;
    }

    pub fn active_editor(&self) -> Option<EditorState> {
        self.state.lock().active_editor()
    }

    /// Offer `action` for requests whose range intersects `range`.
    pub fn add_code_action(&self, document: impl Into<DocumentId>, range: Span, action: CodeAction) {
        self.state
            .lock()
            .code_actions
            .entry(document.into())
            .or_default()
            .push((range, action));
    }

    /// Declare that every location in `group` refers to the same symbol.
    ///
    /// A reference request at a position inside any member returns the
    /// whole group.
    pub fn add_reference_group(&self, group: Vec<Location>) {
        self.state.lock().reference_groups.push(group);
    }

    /// Go-to-definition from anywhere inside `from` lands on `to`.
    pub fn add_definition(&self, from: Location, to: Location) {
        self.state.lock().definitions.push((from, to));
    }

    /// Make `name` executable, returning `result` when run.
    pub fn register_command(&self, name: impl Into<String>, result: Option<serde_json::Value>) {
        self.state.lock().commands.insert(name.into(), result);
    }

    /// Make every call to `capability` fail until [`MemoryHost::recover`].
    pub fn fail(&self, capability: Capability) {
        self.state.lock().failing.insert(capability);
    }

    pub fn recover(&self, capability: Capability) {
        self.state.lock().failing.remove(&capability);
    }

    /// While set, [`EditorHost::apply_edit`] answers `false` and leaves
    /// every document as it is.
    pub fn decline_edits(&self, decline: bool) {
        self.state.lock().declining_edits = decline;
    }

    /// All events recorded so far.
    pub fn events(&self) -> Vec<HostEvent> {
        self.state.lock().events.clone()
    }

    /// Information messages shown so far.
    pub fn messages(&self) -> Vec<String> {
        self.state
            .lock()
            .events
            .iter()
            .filter_map(|event| match event {
                HostEvent::InformationMessage(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: HostEvent) {
        trace!(?event, "host event");
        self.state.lock().events.push(event);
    }
}

#[async_trait]
impl EditorHost for MemoryHost {
    async fn code_actions(
        &self,
        document: &DocumentId,
        range: Span,
    ) -> Result<Vec<CodeAction>, HostError> {
        self.record(HostEvent::CodeActionsRequested {
            document: document.clone(),
            range,
        });

        let state = self.state.lock();
        state.check(Capability::CodeActions)?;
        if !state.documents.contains_key(document) {
            return Err(HostError::UnknownDocument(document.clone()));
        }

        Ok(state
            .code_actions
            .get(document)
            .into_iter()
            .flatten()
            .filter(|(span, _)| span.intersects(&range))
            .map(|(_, action)| action.clone())
            .collect())
    }

    async fn references(
        &self,
        document: &DocumentId,
        position: Position,
    ) -> Result<Vec<Location>, HostError> {
        self.record(HostEvent::ReferencesRequested {
            document: document.clone(),
            position,
        });

        let state = self.state.lock();
        state.check(Capability::References)?;

        Ok(state
            .reference_groups
            .iter()
            .find(|group| group.iter().any(|loc| loc.contains(document, position)))
            .cloned()
            .unwrap_or_default())
    }

    async fn apply_edit(&self, edit: &WorkspaceEdit) -> Result<bool, HostError> {
        let mut state = self.state.lock();
        state.check(Capability::ApplyEdit)?;
        if state.declining_edits {
            trace!("declining workspace edit");
            return Ok(false);
        }

        // Stage every document first so a bad edit leaves nothing half-applied.
        let mut per_document: HashMap<&DocumentId, Vec<(usize, &TextEdit)>> = HashMap::new();
        for (index, change) in edit.changes.iter().enumerate() {
            per_document
                .entry(&change.document)
                .or_default()
                .push((index, change));
        }

        let mut staged: HashMap<DocumentId, String> = HashMap::new();
        for (document, changes) in per_document {
            let mut text = state
                .documents
                .get(document)
                .cloned()
                .ok_or_else(|| HostError::UnknownDocument(document.clone()))?;

            // Offsets refer to the text before any change in this edit.
            let mut resolved = Vec::with_capacity(changes.len());
            for (index, change) in changes {
                let start = offset_at(&text, change.range.start).ok_or_else(|| {
                    HostError::edit(format!("{:?} is outside {}", change.range.start, document))
                })?;
                let end = offset_at(&text, change.range.end).ok_or_else(|| {
                    HostError::edit(format!("{:?} is outside {}", change.range.end, document))
                })?;
                if end < start {
                    return Err(HostError::edit(format!("inverted range in {}", document)));
                }
                resolved.push((start, end, index, change.new_text.as_str()));
            }

            resolved.sort_by_key(|&(start, end, index, _)| (start, end, index));
            if let Some(pair) = resolved.windows(2).find(|pair| pair[0].1 > pair[1].0) {
                return Err(HostError::edit(format!(
                    "overlapping edits in {} at byte {}",
                    document, pair[1].0
                )));
            }

            // Bottom-up. For equal starts the replacement goes in before the
            // inserts, and later inserts before earlier ones.
            for (start, end, _, new_text) in resolved.into_iter().rev() {
                text.replace_range(start..end, new_text);
            }
            staged.insert(document.clone(), text);
        }

        state.documents.extend(staged);
        state.events.push(HostEvent::EditApplied(edit.clone()));
        Ok(true)
    }

    async fn execute_command(
        &self,
        command: &Command,
    ) -> Result<Option<serde_json::Value>, HostError> {
        self.record(HostEvent::CommandExecuted(command.clone()));

        let state = self.state.lock();
        state.check(Capability::ExecuteCommand)?;
        state
            .commands
            .get(&command.name)
            .cloned()
            .ok_or_else(|| HostError::UnknownCommand(command.name.clone()))
    }

    async fn reveal_definition(
        &self,
        editor: &EditorState,
    ) -> Result<Option<EditorState>, HostError> {
        self.record(HostEvent::DefinitionRevealed {
            document: editor.document_id().clone(),
            position: editor.caret(),
        });

        let mut state = self.state.lock();
        state.check(Capability::RevealDefinition)?;

        let target = state
            .definitions
            .iter()
            .find(|(from, _)| from.contains(editor.document_id(), editor.caret()))
            .map(|(_, to)| to.clone());

        if let Some(target) = target {
            state.snapshot(&target.document)?;
            state.active = Some((target.document, Selection::caret(target.span.start)));
        }

        Ok(state.active_editor())
    }

    async fn show_quick_fix(
        &self,
        editor: &EditorState,
        actions: &[CodeAction],
    ) -> Result<(), HostError> {
        self.state.lock().check(Capability::ShowQuickFix)?;
        self.record(HostEvent::QuickFixShown {
            document: editor.document_id().clone(),
            position: editor.caret(),
            actions: actions.to_vec(),
        });
        Ok(())
    }

    async fn show_references(
        &self,
        origin: &DocumentId,
        position: Position,
        locations: &[Location],
    ) -> Result<(), HostError> {
        self.state.lock().check(Capability::ShowReferences)?;
        self.record(HostEvent::ReferencesShown {
            origin: origin.clone(),
            position,
            locations: locations.to_vec(),
        });
        Ok(())
    }

    async fn show_document(
        &self,
        document: &DocumentId,
        selection: Selection,
    ) -> Result<(), HostError> {
        {
            let mut state = self.state.lock();
            state.check(Capability::ShowDocument)?;
            state.snapshot(document)?;
            state.active = Some((document.clone(), selection));
        }
        self.record(HostEvent::DocumentShown {
            document: document.clone(),
            selection,
        });
        Ok(())
    }

    fn show_information_message(&self, message: &str) {
        self.record(HostEvent::InformationMessage(message.to_string()));
    }
}

/// Byte offset of `position` in `text`; the column may sit at end of line.
fn offset_at(text: &str, position: Position) -> Option<usize> {
    let mut line_start = 0;
    for _ in 0..position.line {
        line_start += text[line_start..].find('\n')? + 1;
    }

    let rest = &text[line_start..];
    let line = rest.split('\n').next().unwrap_or(rest);
    let line = line.strip_suffix('\r').unwrap_or(line);

    line.char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(line.len()))
        .nth(position.column)
        .map(|i| line_start + i)
}
