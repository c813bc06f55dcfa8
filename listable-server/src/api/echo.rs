//! WebSocket echo channel
//!
//! Independent of the task API: every text frame is answered with a fixed
//! prefix. No broadcast, no persistence.

use axum::Router;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use axum::routing::get;
use futures::{SinkExt, StreamExt};

use crate::core::ServerState;

/// First frame sent after the upgrade
pub const WELCOME: &str = "Welcome to the WebSocket server!";

pub fn router() -> Router<ServerState> {
    Router::new().route("/ws", get(handle_ws))
}

/// Reply for one received message
pub fn echo_reply(message: &str) -> String {
    format!("Server received: {message}")
}

/// GET /ws - upgrade to WebSocket
async fn handle_ws(ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(handle_socket)
}

async fn handle_socket(socket: WebSocket) {
    tracing::info!("WebSocket client connected");
    let (mut sink, mut stream) = socket.split();

    if let Err(e) = sink.send(Message::Text(WELCOME.into())).await {
        tracing::warn!(error = %e, "WebSocket send failed");
        return;
    }

    while let Some(frame) = stream.next().await {
        let text = match frame {
            Ok(Message::Text(text)) => text.as_str().to_owned(),
            Ok(Message::Binary(bytes)) => String::from_utf8_lossy(&bytes).into_owned(),
            Ok(Message::Close(_)) => break,
            // ping/pong 由 axum 处理
            Ok(_) => continue,
            Err(e) => {
                tracing::warn!(error = %e, "WebSocket error");
                break;
            }
        };

        tracing::debug!(message = %text, "WebSocket message received");
        if let Err(e) = sink.send(Message::Text(echo_reply(&text).into())).await {
            tracing::warn!(error = %e, "WebSocket send failed");
            break;
        }
    }

    tracing::info!("WebSocket client disconnected");
}
