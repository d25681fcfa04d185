//! String-keyed command dispatch table.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use parking_lot::RwLock;
use thiserror::Error;
use tracing::trace;

use crate::commands::CommandId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Nothing is registered under this id.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// The id is already bound to a handler.
    #[error("Command already registered: {0}")]
    AlreadyRegistered(CommandId),
}

#[derive(Default)]
struct Table {
    bindings: HashMap<&'static str, (CommandId, u64)>,
    next_generation: u64,
}

/// Maps host-visible command ids to handlers.
///
/// Cloning shares the table.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    table: Arc<RwLock<Table>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `id`. The binding lives until the returned handle is disposed.
    pub fn register(&self, id: CommandId) -> Result<Disposable, CommandError> {
        let mut table = self.table.write();
        if table.bindings.contains_key(id.as_str()) {
            return Err(CommandError::AlreadyRegistered(id));
        }
        let generation = table.next_generation;
        table.next_generation += 1;
        table.bindings.insert(id.as_str(), (id, generation));
        trace!(command = %id, generation, "registered");

        Ok(Disposable {
            id,
            generation,
            table: Arc::downgrade(&self.table),
        })
    }

    /// The command bound to `raw`, if any.
    pub fn resolve(&self, raw: &str) -> Option<CommandId> {
        self.table.read().bindings.get(raw).map(|(id, _)| *id)
    }

    pub fn contains(&self, id: CommandId) -> bool {
        self.table.read().bindings.contains_key(id.as_str())
    }

    /// Registered ids, sorted.
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.table.read().bindings.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

/// Handle to one registration.
///
/// Dropping the handle does not unregister; call [`Disposable::dispose`]
/// or let the owning context dispose it on teardown.
pub struct Disposable {
    id: CommandId,
    generation: u64,
    table: Weak<RwLock<Table>>,
}

impl Disposable {
    pub fn id(&self) -> CommandId {
        self.id
    }

    /// Remove the registration. Calling this twice is harmless.
    pub fn dispose(&self) {
        let Some(table) = self.table.upgrade() else {
            return;
        };
        let mut table = table.write();
        // A later registration of the same id belongs to someone else.
        if table
            .bindings
            .get(self.id.as_str())
            .is_some_and(|(_, generation)| *generation == self.generation)
        {
            table.bindings.remove(self.id.as_str());
            trace!(command = %self.id, "disposed");
        }
    }
}

impl std::fmt::Debug for Disposable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Disposable")
            .field("id", &self.id)
            .field("generation", &self.generation)
            .finish()
    }
}
