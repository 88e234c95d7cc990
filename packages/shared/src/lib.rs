//! Shared utilities for the Parlor chat server.
//!
//! Holds the pieces that are useful to any binary in the workspace:
//! logging setup and time handling.

pub mod logger;
pub mod time;
