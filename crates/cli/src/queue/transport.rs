// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transport abstraction for the queue WebSocket.
//!
//! Provides a trait-based transport layer that enables:
//! - Real WebSocket connections for production
//! - Scripted transports for unit testing

use std::future::Future;
use std::pin::Pin;

use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

/// Error type for transport operations.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Connection failed.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Connection closed unexpectedly.
    #[error("connection closed")]
    ConnectionClosed,

    /// Receive failed.
    #[error("receive failed: {0}")]
    ReceiveFailed(String),
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Transport trait for a receive-only WebSocket feed.
pub trait Transport: Send {
    /// Connect to the server.
    fn connect(
        &mut self,
        url: &str,
    ) -> Pin<Box<dyn Future<Output = TransportResult<()>> + Send + '_>>;

    /// Close the connection, if any.
    fn disconnect(&mut self) -> Pin<Box<dyn Future<Output = TransportResult<()>> + Send + '_>>;

    /// Receive the next text frame.
    ///
    /// Returns `None` when the server closes the connection.
    fn recv(&mut self)
        -> Pin<Box<dyn Future<Output = TransportResult<Option<String>>> + Send + '_>>;

    /// Check if connected.
    fn is_connected(&self) -> bool;
}

type Socket = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

/// WebSocket transport implementation using tokio-tungstenite.
#[derive(Default)]
pub struct WebSocketTransport {
    /// The WebSocket connection, if connected.
    ws: Option<Socket>,
}

impl WebSocketTransport {
    /// Create a new WebSocket transport.
    pub fn new() -> Self {
        WebSocketTransport { ws: None }
    }
}

impl Transport for WebSocketTransport {
    fn connect(
        &mut self,
        url: &str,
    ) -> Pin<Box<dyn Future<Output = TransportResult<()>> + Send + '_>> {
        let url = url.to_string();
        Box::pin(async move {
            let (ws, _) = tokio_tungstenite::connect_async(&url)
                .await
                .map_err(|e| TransportError::ConnectionFailed(e.to_string()))?;
            self.ws = Some(ws);
            Ok(())
        })
    }

    fn disconnect(&mut self) -> Pin<Box<dyn Future<Output = TransportResult<()>> + Send + '_>> {
        Box::pin(async move {
            if let Some(mut ws) = self.ws.take() {
                // The peer may already be gone
                let _ = ws.close(None).await;
            }
            Ok(())
        })
    }

    fn recv(
        &mut self,
    ) -> Pin<Box<dyn Future<Output = TransportResult<Option<String>>> + Send + '_>> {
        Box::pin(async move {
            use futures_util::StreamExt;
            use tokio_tungstenite::tungstenite::Message;

            let ws = self.ws.as_mut().ok_or(TransportError::ConnectionClosed)?;

            loop {
                match ws.next().await {
                    Some(Ok(Message::Text(text))) => return Ok(Some(text.to_string())),
                    Some(Ok(Message::Close(_))) | None => {
                        self.ws = None;
                        return Ok(None);
                    }
                    // Pings are answered by tungstenite on the next read
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => {
                        self.ws = None;
                        return Err(TransportError::ReceiveFailed(e.to_string()));
                    }
                }
            }
        })
    }

    fn is_connected(&self) -> bool {
        self.ws.is_some()
    }
}
