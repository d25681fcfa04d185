use tracing::info;

use crate::config::ExtensionConfig;
use crate::host::EditorHost;

/// Greets the user. Needs no editor.
pub fn hello_world<H: EditorHost + ?Sized>(host: &H, config: &ExtensionConfig) {
    host.show_information_message(&config.hello_message);
    info!("{}", config.hello_message);
}
