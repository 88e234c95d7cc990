pub mod http;
pub mod websocket;

pub use http::{get_messages, health_check, list_users};
pub use websocket::websocket_handler;
