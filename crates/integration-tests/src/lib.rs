//! Black-box integration tests for the rolodex API
//!
//! All tests live under `tests/` and exercise a real server over HTTP
//! through the harness in `tests/harness/`.
