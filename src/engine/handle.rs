use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tracing::info;

use super::Engine;
use crate::error::EngineError;

/// Shared, swappable reference to the current [`Engine`]
///
/// Readers take an `Arc` to the engine and query it without holding the
/// lock. Reconfiguring builds the replacement first and swaps afterwards, so
/// queries already running finish against the engine they started on.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    current: Arc<RwLock<Arc<Engine>>>,
}

impl EngineHandle {
    pub fn new(engine: Engine) -> Self {
        Self { current: Arc::new(RwLock::new(Arc::new(engine))) }
    }

    pub fn current(&self) -> Arc<Engine> {
        Arc::clone(&self.current.read())
    }

    /// Install `engine`, returning the one it replaces
    pub fn replace(&self, engine: Engine) -> Arc<Engine> {
        std::mem::replace(&mut *self.current.write(), Arc::new(engine))
    }

    /// Swap in an engine for a new root and timeout
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RootNotFound`] if `root` is not a directory; the
    /// current engine stays in place.
    pub fn reconfigure(&self, root: impl Into<PathBuf>, timeout: Duration) -> Result<(), EngineError> {
        let next = self.current().rebuild(root, timeout)?;
        info!(root = %next.root().display(), "Engine reconfigured");
        self.replace(next);
        Ok(())
    }

    /// Swap in an engine rebuilt from disk with the current config
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RootNotFound`] if the root has disappeared.
    pub fn refresh(&self) -> Result<(), EngineError> {
        let next = self.current().refresh()?;
        self.replace(next);
        Ok(())
    }
}
