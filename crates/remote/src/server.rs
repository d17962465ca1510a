// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! WebSocket server implementation.
//!
//! Accepts queue subscribers, sends each the current snapshot, then
//! forwards every broadcast snapshot until the client goes away.

use std::net::SocketAddr;

use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::tungstenite::handshake::server::{ErrorResponse, Request, Response};
use tokio_tungstenite::tungstenite::http::StatusCode;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, error, info, warn};

use crate::state::QueueBoard;

/// Paths that accept a queue subscription.
pub const QUEUE_PATHS: [&str; 2] = ["/ws/queue", "/queue"];

/// Run the WebSocket server on the given address.
pub async fn run(addr: SocketAddr, board: QueueBoard) -> Result<(), Box<dyn std::error::Error>> {
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on: {}", addr);
    accept_loop(listener, board).await?;
    Ok(())
}

/// Accepts connections on `listener` until it fails.
pub(crate) async fn accept_loop(listener: TcpListener, board: QueueBoard) -> std::io::Result<()> {
    loop {
        let (stream, peer_addr) = listener.accept().await?;
        let board = board.clone();

        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, peer_addr, board).await {
                error!("Connection error from {}: {}", peer_addr, e);
            }
        });
    }
}

/// Rejects upgrades on paths other than [`QUEUE_PATHS`] with 404.
#[allow(clippy::result_large_err)]
fn check_path(request: &Request, response: Response) -> Result<Response, ErrorResponse> {
    let path = request.uri().path();
    if QUEUE_PATHS.contains(&path) {
        return Ok(response);
    }
    debug!("Rejecting upgrade on {}", path);
    let mut rejection = ErrorResponse::new(Some(format!("no queue at {}", path)));
    *rejection.status_mut() = StatusCode::NOT_FOUND;
    Err(rejection)
}

/// Handle a single WebSocket connection.
pub(crate) async fn handle_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    board: QueueBoard,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let ws_stream = tokio_tungstenite::accept_hdr_async(stream, check_path).await?;
    info!("New queue subscriber: {}", peer_addr);

    let (mut ws_sink, mut ws_stream) = ws_stream.split();

    // Subscribe before reading the snapshot so no change falls in between
    let mut broadcast_rx = board.subscribe();
    let snapshot = board.snapshot().await?;
    ws_sink.send(Message::Text(snapshot.into())).await?;

    loop {
        tokio::select! {
            msg = ws_stream.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        debug!("Ignoring message from {}: {}", peer_addr, text.as_str());
                    }
                    Some(Ok(Message::Close(_))) => {
                        info!("Client {} disconnected", peer_addr);
                        break;
                    }
                    Some(Ok(Message::Ping(data))) => {
                        ws_sink.send(Message::Pong(data)).await?;
                    }
                    Some(Ok(_)) => {
                        // Ignore other message types (Binary, Pong, Frame)
                    }
                    Some(Err(e)) => {
                        error!("WebSocket error from {}: {}", peer_addr, e);
                        break;
                    }
                    None => {
                        info!("Client {} stream ended", peer_addr);
                        break;
                    }
                }
            }

            broadcast = broadcast_rx.recv() => {
                match broadcast {
                    Ok(frame) => {
                        if let Err(e) = ws_sink.send(Message::Text(frame.into())).await {
                            warn!("Failed to send snapshot to {}: {}", peer_addr, e);
                            break;
                        }
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Lagged(n)) => {
                        // Every frame is a full snapshot; the next one catches up
                        warn!("Client {} lagged by {} snapshots", peer_addr, n);
                    }
                    Err(tokio::sync::broadcast::error::RecvError::Closed) => {
                        break;
                    }
                }
            }
        }
    }

    info!("Connection closed: {}", peer_addr);
    Ok(())
}
