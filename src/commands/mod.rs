//! The commands the extension contributes.
//!
//! Each handler takes the host, the settings and the editor that was active
//! when the command was invoked. Handlers never fail outward: host errors
//! are logged and swallowed at the handler boundary.

mod hello;
mod import_action;
mod references;
mod smart_goto;

use std::fmt;
use std::str::FromStr;

pub use hello::hello_world;
pub use import_action::{apply_code_action, execute_import_action};
pub use references::go_to_references;
pub use smart_goto::{Navigation, smart_goto};

/// Externally invocable commands, keyed by the ids hosts bind them to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommandId {
    HelloWorld,
    ExecuteImportAction,
    GoToReferences,
    SmartGoto,
}

impl CommandId {
    pub const ALL: [CommandId; 4] = [
        CommandId::HelloWorld,
        CommandId::ExecuteImportAction,
        CommandId::GoToReferences,
        CommandId::SmartGoto,
    ];

    /// The id as published in the extension manifest, including the
    /// `hightlight-errors` spelling of the hello-world id.
    pub fn as_str(self) -> &'static str {
        match self {
            CommandId::HelloWorld => "hightlight-errors.helloWorld",
            CommandId::ExecuteImportAction => "highlight-errors.executeCodeAction",
            CommandId::GoToReferences => "highlight-errors.goToReferences",
            CommandId::SmartGoto => "highlight-errors.smartGoto",
        }
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandId {
    type Err = UnknownCommandId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownCommandId(s.to_string()))
    }
}

/// A string that names none of the [`CommandId`]s.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown command id: {0}")]
pub struct UnknownCommandId(pub String);
