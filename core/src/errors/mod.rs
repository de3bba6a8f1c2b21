//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

pub use types::{CodecError, CsrfError};

pub type CsrfResult<T> = Result<T, CsrfError>;
