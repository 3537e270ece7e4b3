use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::{Diagnostics, Sink};

/// The severity of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    #[allow(missing_docs)]
    Warning,
    #[allow(missing_docs)]
    Error,
}

/// A single message kept by a [`Recorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    #[allow(missing_docs)]
    pub level: Level,
    #[allow(missing_docs)]
    pub message: String,
}

/// A [`Sink`] that keeps every message it receives in memory, in the order received.
///
/// Each level can be disabled at construction, in which case messages of that level are dropped.
///
/// # Examples
/// ```
/// # use std::sync::Arc;
/// # use dsa_core::diagnostics::Recorder;
/// let recorder = Arc::new(Recorder::new());
/// let diag = recorder.handle();
/// diag.warn("careful");
/// assert_eq!(recorder.warnings(), ["careful"]);
/// assert!(recorder.errors().is_empty());
/// ```
#[derive(Debug)]
pub struct Recorder {
    records: Mutex<Vec<Record>>,
    warnings_enabled: bool,
    errors_enabled: bool,
}

impl Recorder {
    /// Creates a Recorder that keeps both warnings and errors.
    pub const fn new() -> Recorder {
        Recorder::with_levels(true, true)
    }

    /// Creates a Recorder that only keeps the enabled levels.
    pub const fn with_levels(warnings_enabled: bool, errors_enabled: bool) -> Recorder {
        Recorder {
            records: Mutex::new(Vec::new()),
            warnings_enabled,
            errors_enabled,
        }
    }

    /// Creates a [`Diagnostics`] handle which sends messages to this Recorder.
    pub fn handle(self: &Arc<Self>) -> Diagnostics {
        Diagnostics::Custom(Arc::clone(self) as Arc<dyn Sink>)
    }

    /// Returns a copy of every record kept so far.
    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    /// Returns the messages of all kept warnings.
    pub fn warnings(&self) -> Vec<String> {
        self.messages(Level::Warning)
    }

    /// Returns the messages of all kept errors.
    pub fn errors(&self) -> Vec<String> {
        self.messages(Level::Error)
    }

    /// Discards all records.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn messages(&self, level: Level) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|r| r.level == level)
            .map(|r| r.message.clone())
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        self.lock().push(Record {
            level,
            message: message.to_owned(),
        });
    }

    // A panic while holding the lock can't leave a half-pushed record behind.
    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for Recorder {
    fn warn(&self, message: &str) {
        if self.warnings_enabled {
            self.push(Level::Warning, message);
        }
    }

    fn err(&self, message: &str) {
        if self.errors_enabled {
            self.push(Level::Error, message);
        }
    }
}
