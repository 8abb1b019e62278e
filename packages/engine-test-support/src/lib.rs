//! Scoring engine test support utilities
//!
//! Unified logging initialization for integration tests and helpers for
//! asserting the JSON shapes the engine exchanges with scorer front-ends.

pub mod logging;
pub mod wire;
