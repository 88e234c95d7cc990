//! WebSocket connection handlers.
//!
//! One socket runs through three phases: identity binding, a pump/receive
//! pair of tasks, and teardown. The upgrade is always accepted so that
//! binding failures can be reported with a proper close code instead of
//! an opaque HTTP rejection.

use std::sync::Arc;

use axum::{
    extract::{
        Query, State,
        ws::{CloseFrame, Message, WebSocket, WebSocketUpgrade, close_code},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::{
        BindError, ConnectParams, ConnectionHandle, ConnectionId, PeerSender, UserId, UserRecord,
    },
    infrastructure::dto::websocket::{ClientFrame, ConnectionSuccessFrame, ErrorFrame, MessageFrame},
    ui::state::AppState,
};

use serde::Deserialize;

/// Query parameters for WebSocket connection
#[derive(Debug, Deserialize)]
pub struct ConnectQuery {
    pub user_id: Option<String>,
}

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConnectQuery>,
) -> impl IntoResponse {
    let params = ConnectParams {
        user_id: query.user_id,
    };
    ws.on_upgrade(move |socket| handle_socket(socket, state, params))
}

/// Map an identity binding failure onto a WebSocket close code.
///
/// Missing or unrecognized identity is the client's fault (policy
/// violation); a directory outage is ours (internal error).
fn close_code_for(error: &BindError) -> u16 {
    match error {
        BindError::Directory(_) => close_code::ERROR,
        _ => close_code::POLICY,
    }
}

/// Resolve the caller's identity and register the connection.
///
/// On success the user is already present in the registry, holding the
/// sending half of a fresh pump channel.
async fn bind(
    state: &Arc<AppState>,
    params: &ConnectParams,
) -> Result<
    (
        UserRecord,
        ConnectionId,
        mpsc::UnboundedReceiver<String>,
        PeerSender,
    ),
    BindError,
> {
    let user_id = state.identity_resolver.resolve(params).await?;

    // Create a channel for this connection to receive outbound frames
    let (tx, rx) = mpsc::unbounded_channel();
    let handle = ConnectionHandle::new(tx.clone());
    let connection_id = handle.id;

    let user = state.connect_user_usecase.execute(user_id, handle).await?;

    Ok((user, connection_id, rx, tx))
}

/// Spawns a task that receives frames from the rx channel and pushes them to the WebSocket sender.
///
/// This function handles the outbound flow: frames addressed to this
/// connection (via the rx channel) are written to its WebSocket.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            // Send the frame to this connection
            if sender.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, params: ConnectParams) {
    let (mut sender, mut receiver) = socket.split();

    // Phase 1: identity binding. A failure closes the socket with a
    // code the client can act on; nothing was registered.
    let (user, connection_id, rx, reply) = match bind(&state, &params).await {
        Ok(bound) => bound,
        Err(e) => {
            tracing::warn!("Rejecting connection: {}", e);
            let close = CloseFrame {
                code: close_code_for(&e),
                reason: e.to_string().into(),
            };
            let _ = sender.send(Message::Close(Some(close))).await;
            return;
        }
    };
    tracing::info!("User '{}' connected and registered", user.username);

    // Send the connection confirmation directly, before the pump owns the sink
    let confirm = ConnectionSuccessFrame::new(&user);
    let confirm_json = serde_json::to_string(&confirm).unwrap();
    if let Err(e) = sender.send(Message::Text(confirm_json.into())).await {
        tracing::error!(
            "Failed to send connection confirmation to '{}': {}",
            user.username,
            e
        );
        teardown(&state, user.id, connection_id).await;
        return;
    }

    // Phase 2: pump task plus receive task
    let mut send_task = pusher_loop(rx, sender);

    // Everyone (including the new connection) sees the updated roster
    broadcast_presence(&state).await;

    let state_clone = state.clone();
    let user_clone = user.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error for '{}': {}", user_clone.username, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    handle_text(&state_clone, &user_clone, &reply, text.as_str()).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::info!("User '{}' requested close", user_clone.username);
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // Phase 3: teardown
    tracing::info!("User '{}' disconnected", user.username);
    teardown(&state, user.id, connection_id).await;
}

/// Process one inbound text frame from a bound connection.
///
/// Failures are reported back on this connection only; they never
/// terminate the socket.
async fn handle_text(state: &Arc<AppState>, user: &UserRecord, reply: &PeerSender, text: &str) {
    let frame = match serde_json::from_str::<ClientFrame>(text) {
        Ok(frame) => frame,
        Err(e) => {
            tracing::warn!("Malformed payload from '{}': {}", user.username, e);
            send_error(reply, "malformed_payload");
            return;
        }
    };

    match state.send_message_usecase.execute(user, &frame.content).await {
        Ok((routed, stored)) => {
            let message = MessageFrame::from_routed(&routed, user, stored.created_at);
            let json = serde_json::to_string(&message).unwrap();
            state
                .send_message_usecase
                .deliver(&routed.audience(), &json)
                .await;
        }
        Err(e) => {
            tracing::warn!("Failed to process message from '{}': {}", user.username, e);
            send_error(reply, e.reason());
        }
    }
}

fn send_error(reply: &PeerSender, reason: &str) {
    let json = serde_json::to_string(&ErrorFrame::new(reason)).unwrap();
    if reply.send(json).is_err() {
        tracing::debug!("Dropped error report for a closing connection");
    }
}

/// Remove the connection and, if it was still current, announce the change.
///
/// A connection that was replaced by a newer one for the same user must
/// not broadcast here: the user never went offline.
async fn teardown(state: &Arc<AppState>, user_id: UserId, connection_id: ConnectionId) {
    let removed = state
        .disconnect_user_usecase
        .execute(user_id, connection_id)
        .await;
    if removed {
        broadcast_presence(state).await;
    }
}

async fn broadcast_presence(state: &Arc<AppState>) {
    if let Err(e) = state.broadcast_presence_usecase.execute().await {
        tracing::warn!("Failed to broadcast presence snapshot: {}", e);
    }
}
