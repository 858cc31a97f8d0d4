//! Error types and error handling for the front end.
//!
//! This module defines the error types produced while parsing. It
//! includes:
//!
//! - Specific error variants for each way parsing can fail
//! - Error formatting and display functionality

pub mod errors;

#[cfg(test)]
mod tests;
