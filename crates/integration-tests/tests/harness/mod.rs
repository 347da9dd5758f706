//! Shared test harness
//!
//! Each integration test binary compiles its own copy, so some items are
//! unused in some binaries.
#![allow(dead_code)]

pub mod config;
pub mod server;
