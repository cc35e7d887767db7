// File: src/shared.rs
// Purpose: Thread-safe session handle for hosts that dispatch from several threads

use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::Result;
use crate::evaluator::ValueMap;
use crate::report::ErrorReport;
use crate::session::{SubmitEvent, ValidationSession};
use crate::strength::PasswordStrength;

/// Cloneable handle to one [`ValidationSession`].
///
/// Each operation holds the session lock for its whole duration, so
/// operations from different threads never interleave. Reads return owned
/// snapshots.
#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<ValidationSession>>,
}

impl SharedSession {
    pub fn new(session: ValidationSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn set_value(&self, field: &str, value: impl Into<String>) -> Result<()> {
        self.lock().set_value(field, value)
    }

    pub fn touch(&self, field: &str) -> Result<()> {
        self.lock().touch(field)
    }

    pub fn submit_all(&self) -> ErrorReport {
        self.lock().submit_all()
    }

    pub fn submit<E: SubmitEvent + ?Sized>(&self, event: &mut E) -> ErrorReport {
        self.lock().submit(event)
    }

    pub fn reset(&self) {
        self.lock().reset()
    }

    pub fn values(&self) -> ValueMap {
        self.lock().values().clone()
    }

    pub fn errors(&self) -> ErrorReport {
        self.lock().errors().clone()
    }

    pub fn password_strength(&self) -> Option<PasswordStrength> {
        self.lock().password_strength().copied()
    }

    /// Runs `f` with exclusive access to the session
    pub fn with<R>(&self, f: impl FnOnce(&mut ValidationSession) -> R) -> R {
        f(&mut self.lock())
    }

    // Every operation commits fully before releasing the lock, so a poisoned
    // lock still guards a consistent session.
    fn lock(&self) -> MutexGuard<'_, ValidationSession> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl From<ValidationSession> for SharedSession {
    fn from(session: ValidationSession) -> Self {
        Self::new(session)
    }
}
