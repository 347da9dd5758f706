#![allow(clippy::must_use_candidate)]

//! Core error taxonomy shared across rolodex crates
//!
//! Defines the fixed set of classified failure categories and the single
//! response body shape derived from them. The server layer converts these
//! into actual HTTP responses, keeping the classification logic decoupled
//! from axum.

mod error;

pub use error::{ApiError, ErrorBody, ErrorKind};
