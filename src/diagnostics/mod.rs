//! Failure reporting for the collections and algorithms in this crate.
//!
//! Every container holds a [`Diagnostics`] handle. When an operation fails in a way that the
//! caller can't recover from, such as indexing out of bounds, the failure is recorded as an error
//! through the handle before the operation panics. Recoverable conditions, like asking for the
//! minimum of an empty range, are recorded as warnings and the operation carries on.
//!
//! By default, diagnostics are forwarded to the [`log`](https://docs.rs/log) facade, so they end
//! up wherever the application's logger sends them (or nowhere, if no logger is installed). A
//! custom [`Sink`] can be injected per container instead, which is how [`Recorder`] is used in
//! tests.
#![warn(missing_docs)]

mod diagnostics;
mod recorder;
mod tests;

pub use diagnostics::*;
pub use recorder::*;
