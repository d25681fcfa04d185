//! Activation lifecycle and command dispatch.
//!
//! ```ignore
//! let extension = Extension::new(host, ExtensionConfig::default());
//! let mut context = ExtensionContext::new();
//! extension.activate(&mut context)?;
//!
//! extension
//!     .execute("highlight-errors.goToReferences", host.active_editor().as_ref())
//!     .await?;
//!
//! context.dispose_all();
//! extension.deactivate();
//! ```

mod context;
mod registry;

use std::sync::Arc;

use tracing::{debug, info};

use crate::commands::{self, CommandId};
use crate::config::ExtensionConfig;
use crate::host::{EditorHost, EditorState};

pub use context::ExtensionContext;
pub use registry::{CommandError, CommandRegistry, Disposable};

/// The extension bound to one host.
pub struct Extension<H: ?Sized> {
    host: Arc<H>,
    config: ExtensionConfig,
    registry: CommandRegistry,
}

impl<H: EditorHost + ?Sized> Extension<H> {
    pub fn new(host: Arc<H>, config: ExtensionConfig) -> Self {
        Self {
            host,
            config,
            registry: CommandRegistry::new(),
        }
    }

    pub fn host(&self) -> &Arc<H> {
        &self.host
    }

    pub fn config(&self) -> &ExtensionConfig {
        &self.config
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Register every command, tying each registration to `context`.
    ///
    /// Fails if a command is still registered from an earlier activation;
    /// whatever was registered before the failure stays in `context`.
    pub fn activate(&self, context: &mut ExtensionContext) -> Result<(), CommandError> {
        for id in CommandId::ALL {
            context.push(self.registry.register(id)?);
        }
        info!(commands = CommandId::ALL.len(), "highlight-errors is now active");
        Ok(())
    }

    pub fn deactivate(&self) {}

    /// Run the command registered under `id` against `editor`.
    ///
    /// Only an unregistered id is an error; failures inside the command
    /// are logged by the handler and never reach the caller.
    pub async fn execute(
        &self,
        id: &str,
        editor: Option<&EditorState>,
    ) -> Result<(), CommandError> {
        let command = self
            .registry
            .resolve(id)
            .ok_or_else(|| CommandError::UnknownCommand(id.to_string()))?;
        debug!(%command, has_editor = editor.is_some(), "executing");

        let host = self.host.as_ref();
        match command {
            CommandId::HelloWorld => commands::hello_world(host, &self.config),
            CommandId::ExecuteImportAction => {
                commands::execute_import_action(host, &self.config, editor).await
            }
            CommandId::GoToReferences => {
                commands::go_to_references(host, &self.config, editor).await
            }
            CommandId::SmartGoto => commands::smart_goto(host, &self.config, editor).await,
        }

        Ok(())
    }
}
