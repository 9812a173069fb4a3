//! Test support shared by the scorekeeper unit and integration tests.

pub mod logging;
