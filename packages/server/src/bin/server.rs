//! WebSocket chat server with presence tracking and private messaging.
//!
//! Receives messages from connected users, persists them, and fans them
//! out: public messages to everyone, `@username` messages to the sender
//! and recipient only.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin parlor-server
//! cargo run --bin parlor-server -- --host 0.0.0.0 --port 3000 --users roster.json
//! ```

use std::{path::PathBuf, sync::Arc};

use clap::Parser;

use parlor_server::{
    domain::{ConnectionRegistry, EventBroadcaster, IdentityResolver, MessageStore, UserDirectory},
    infrastructure::{
        broadcast::ChannelBroadcaster, directory::InMemoryUserDirectory,
        identity::QueryIdentityResolver, registry::InMemoryConnectionRegistry,
        store::InMemoryMessageStore,
    },
    ui::Server,
    usecase::{
        BroadcastPresenceUseCase, ConnectUserUseCase, DisconnectUserUseCase, SendMessageUseCase,
    },
};
use parlor_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "parlor-server")]
#[command(about = "WebSocket chat server with presence and private messaging", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "8080")]
    port: u16,

    /// Path to a JSON user roster (defaults to the built-in demo users)
    #[arg(long)]
    users: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. UserDirectory and MessageStore
    // 2. ConnectionRegistry and EventBroadcaster
    // 3. UseCases
    // 4. Server

    // 1. Create the roster and the message store
    let directory: Arc<dyn UserDirectory> = match &args.users {
        Some(path) => match InMemoryUserDirectory::from_json_file(path) {
            Ok(directory) => Arc::new(directory),
            Err(e) => {
                tracing::error!("Failed to load user roster: {}", e);
                std::process::exit(1);
            }
        },
        None => {
            tracing::info!("No roster file given, seeding demo users");
            Arc::new(InMemoryUserDirectory::with_demo_users())
        }
    };
    let store: Arc<dyn MessageStore> = Arc::new(InMemoryMessageStore::new(Arc::new(SystemClock)));

    // 2. Create the connection registry and the broadcaster over it
    let registry: Arc<dyn ConnectionRegistry> = Arc::new(InMemoryConnectionRegistry::new());
    let broadcaster: Arc<dyn EventBroadcaster> = Arc::new(ChannelBroadcaster::new(registry.clone()));

    // 3. Create UseCases
    let connect_user_usecase = Arc::new(ConnectUserUseCase::new(
        directory.clone(),
        registry.clone(),
    ));
    let disconnect_user_usecase = Arc::new(DisconnectUserUseCase::new(registry.clone()));
    let send_message_usecase = Arc::new(SendMessageUseCase::new(
        directory.clone(),
        store.clone(),
        broadcaster.clone(),
    ));
    let broadcast_presence_usecase = Arc::new(BroadcastPresenceUseCase::new(
        directory.clone(),
        registry.clone(),
        broadcaster.clone(),
    ));

    let identity_resolver: Arc<dyn IdentityResolver> = Arc::new(QueryIdentityResolver);

    // 4. Create and run the server
    let server = Server::new(
        connect_user_usecase,
        disconnect_user_usecase,
        send_message_usecase,
        broadcast_presence_usecase,
        identity_resolver,
        directory,
        store,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
