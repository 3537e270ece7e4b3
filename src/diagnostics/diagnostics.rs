use std::convert::Infallible;
use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use crate::util::error::AccessError;
use crate::util::result::ResultExtension;

#[cfg(feature = "log")]
const LOG_TARGET: &str = "dsa_core";

/// A destination for diagnostic messages.
pub trait Sink: Send + Sync {
    /// Records a warning. Warnings never interrupt the operation that reports them.
    fn warn(&self, message: &str);

    /// Records an error. The reporting operation panics after this returns.
    fn err(&self, message: &str);
}

/// A cheaply cloneable handle to the place diagnostics are sent.
#[derive(Clone, Default)]
pub enum Diagnostics {
    /// Forward to the [`log`](https://docs.rs/log) facade. Without the `log` feature, this behaves
    /// like [`Diagnostics::Silent`].
    #[default]
    Log,
    /// Discard everything. Failures still panic, but aren't recorded anywhere first.
    Silent,
    /// Forward to a user provided [`Sink`].
    Custom(Arc<dyn Sink>),
}

impl Diagnostics {
    /// Creates a handle that forwards to `sink`.
    pub fn new(sink: impl Sink + 'static) -> Diagnostics {
        Diagnostics::Custom(Arc::new(sink))
    }

    /// Reports a warning.
    pub fn warn(&self, message: &str) {
        match self {
            #[cfg(feature = "log")]
            Diagnostics::Log => log::warn!(target: LOG_TARGET, "{message}"),
            #[cfg(not(feature = "log"))]
            Diagnostics::Log => {},
            Diagnostics::Silent => {},
            Diagnostics::Custom(sink) => sink.warn(message),
        }
    }

    /// Reports an error, without panicking.
    pub fn err(&self, message: &str) {
        match self {
            #[cfg(feature = "log")]
            Diagnostics::Log => log::error!(target: LOG_TARGET, "{message}"),
            #[cfg(not(feature = "log"))]
            Diagnostics::Log => {},
            Diagnostics::Silent => {},
            Diagnostics::Custom(sink) => sink.err(message),
        }
    }

    /// Reports `error` and then panics with the same message.
    ///
    /// # Panics
    /// Always.
    pub fn fail(&self, error: impl Into<AccessError>) -> ! {
        let error = error.into();
        self.err(&error.to_string());
        match Err::<Infallible, _>(error).throw() {}
    }
}

impl Debug for Diagnostics {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostics::Log => write!(f, "Log"),
            Diagnostics::Silent => write!(f, "Silent"),
            Diagnostics::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}
