//! Server execution logic.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::domain::{IdentityResolver, MessageStore, UserDirectory};
use crate::usecase::{
    BroadcastPresenceUseCase, ConnectUserUseCase, DisconnectUserUseCase, SendMessageUseCase,
};

use super::{
    handler::{get_messages, health_check, list_users, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// WebSocket chat server
///
/// This struct encapsulates the server configuration and provides methods to run the server.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     connect_user_usecase,
///     disconnect_user_usecase,
///     send_message_usecase,
///     broadcast_presence_usecase,
///     identity_resolver,
///     directory,
///     store,
/// );
/// server.run("127.0.0.1".to_string(), 8080).await?;
/// ```
pub struct Server {
    connect_user_usecase: Arc<ConnectUserUseCase>,
    disconnect_user_usecase: Arc<DisconnectUserUseCase>,
    send_message_usecase: Arc<SendMessageUseCase>,
    broadcast_presence_usecase: Arc<BroadcastPresenceUseCase>,
    identity_resolver: Arc<dyn IdentityResolver>,
    directory: Arc<dyn UserDirectory>,
    store: Arc<dyn MessageStore>,
}

impl Server {
    /// Create a new Server instance
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        connect_user_usecase: Arc<ConnectUserUseCase>,
        disconnect_user_usecase: Arc<DisconnectUserUseCase>,
        send_message_usecase: Arc<SendMessageUseCase>,
        broadcast_presence_usecase: Arc<BroadcastPresenceUseCase>,
        identity_resolver: Arc<dyn IdentityResolver>,
        directory: Arc<dyn UserDirectory>,
        store: Arc<dyn MessageStore>,
    ) -> Self {
        Self {
            connect_user_usecase,
            disconnect_user_usecase,
            send_message_usecase,
            broadcast_presence_usecase,
            identity_resolver,
            directory,
            store,
        }
    }

    /// Build the axum router over the shared application state.
    pub fn router(self) -> Router {
        let app_state = Arc::new(AppState {
            connect_user_usecase: self.connect_user_usecase,
            disconnect_user_usecase: self.disconnect_user_usecase,
            send_message_usecase: self.send_message_usecase,
            broadcast_presence_usecase: self.broadcast_presence_usecase,
            identity_resolver: self.identity_resolver,
            directory: self.directory,
            store: self.store,
        });

        Router::new()
            // WebSocket endpoint
            .route("/ws", get(websocket_handler))
            // HTTP endpoints
            .route("/api/health", get(health_check))
            .route("/api/users", get(list_users))
            .route("/api/messages", get(get_messages))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    /// Run the WebSocket chat server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 8080)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        // Start the server
        tracing::info!(
            "WebSocket chat server listening on {}",
            listener.local_addr()?
        );
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
