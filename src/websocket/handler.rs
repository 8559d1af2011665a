//! WebSocket Handler
//!
//! Handles WebSocket upgrade requests and runs the per-connection event loop.
//! Events are handled strictly in arrival order and each reply fully
//! replaces the previous render.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{stream::SplitSink, SinkExt, StreamExt};
use std::sync::Arc;

use super::messages::{ClientMessage, ServerMessage};
use crate::api::AppState;
use crate::dashboard::Dashboard;

/// What to do after a frame has been handled
#[derive(Debug)]
enum Action {
    Reply(ServerMessage),
    Continue,
    Close,
}

/// WebSocket upgrade handler
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> Response {
    let dashboard = Arc::clone(&state.dashboard);
    ws.on_upgrade(move |socket| handle_socket(socket, dashboard))
}

/// Handle an established WebSocket connection
async fn handle_socket(socket: WebSocket, dashboard: Arc<Dashboard>) {
    let (mut sender, mut receiver) = socket.split();
    let connection_id = uuid::Uuid::new_v4().to_string();

    tracing::debug!(connection_id = %connection_id, "WebSocket connected");

    let connected = ServerMessage::Connected {
        connection_id: connection_id.clone(),
    };
    if !send_message(&mut sender, &connected).await {
        tracing::error!(connection_id = %connection_id, "Failed to send connected message");
        return;
    }

    while let Some(result) = receiver.next().await {
        let message = match result {
            Ok(m) => m,
            Err(e) => {
                tracing::debug!(
                    connection_id = %connection_id,
                    error = %e,
                    "WebSocket receive error"
                );
                break;
            }
        };

        match handle_ws_message(&dashboard, message) {
            Action::Reply(reply) => {
                if !send_message(&mut sender, &reply).await {
                    tracing::debug!(
                        connection_id = %connection_id,
                        "WebSocket send failed, closing connection"
                    );
                    break;
                }
            }
            Action::Continue => {}
            Action::Close => {
                tracing::debug!(connection_id = %connection_id, "Client requested close");
                break;
            }
        }
    }

    tracing::debug!(connection_id = %connection_id, "WebSocket disconnected");
}

/// Serialize and send; returns false when the socket is gone
async fn send_message(sender: &mut SplitSink<WebSocket, Message>, message: &ServerMessage) -> bool {
    match serde_json::to_string(message) {
        Ok(text) => sender.send(Message::Text(text)).await.is_ok(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize message");
            true
        }
    }
}

/// Handle a received WebSocket frame
fn handle_ws_message(dashboard: &Dashboard, message: Message) -> Action {
    match message {
        Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
            Ok(client_msg) => Action::Reply(handle_client_message(dashboard, client_msg)),
            Err(e) => {
                tracing::debug!(error = %e, text = %text, "Invalid client message");
                // Keep the connection open
                Action::Reply(ServerMessage::Error {
                    message: format!("Invalid message format: {}", e),
                })
            }
        },
        Message::Binary(_) => Action::Reply(ServerMessage::Error {
            message: "Binary messages not supported".to_string(),
        }),
        // Axum answers pings itself
        Message::Ping(_) | Message::Pong(_) => Action::Continue,
        Message::Close(_) => Action::Close,
    }
}

/// Handle a parsed client message
fn handle_client_message(dashboard: &Dashboard, message: ClientMessage) -> ServerMessage {
    match message {
        ClientMessage::Select { countries } => ServerMessage::Update(dashboard.update(&countries)),
        ClientMessage::Ping => ServerMessage::Pong,
    }
}
