//! Realtime fan-out and presence core for the Parlor chat server.
//!
//! The server accepts WebSocket connections, binds each one to a user
//! identity, tracks who is online, and delivers chat events to the right
//! subset of connections (public broadcast or private sender/recipient
//! delivery). Credential storage, message history endpoints, and UI are
//! thin collaborators around this core.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
