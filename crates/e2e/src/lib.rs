//! Test harness for the placebo suite
//!
//! Spawns the mock placeholder API in-process and hands back configured
//! clients. Scenario files live under `tests/`.

pub mod harness;

pub use harness::{init_tracing, start_mock_api, TestApi};
