//! Data transfer objects for the process boundary.

pub mod http;
pub mod websocket;
