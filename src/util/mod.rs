#![warn(missing_docs)]

pub mod error;
#[cfg(test)]
pub mod panic;
pub mod result;
#[cfg(test)]
pub mod tracked;
