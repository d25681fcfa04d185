use super::Disposable;

/// Owns everything an activation registered, until teardown.
#[derive(Debug, Default)]
pub struct ExtensionContext {
    subscriptions: Vec<Disposable>,
}

impl ExtensionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, disposable: Disposable) {
        self.subscriptions.push(disposable);
    }

    pub fn subscriptions(&self) -> &[Disposable] {
        &self.subscriptions
    }

    /// Dispose every subscription, most recent first.
    pub fn dispose_all(&mut self) {
        while let Some(disposable) = self.subscriptions.pop() {
            disposable.dispose();
        }
    }
}
