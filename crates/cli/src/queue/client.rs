// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Live queue client.
//!
//! Keeps one WebSocket open to the queue feed and hands every snapshot to
//! the registered listeners. Unintended closures are retried after a fixed
//! delay, up to a bounded number of attempts; the counter resets whenever a
//! connection opens. [`QueueClient::disconnect`] (or a [`DisconnectHandle`])
//! ends the client for good.

use std::sync::Arc;
use std::time::Duration;

use ag_core::protocol::parse_queue_frame;
use ag_core::QueueItem;
use tokio::sync::watch;

use super::transport::{Transport, WebSocketTransport};

/// URL and reconnect policy of the queue client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueSettings {
    /// WebSocket URL of the queue feed.
    pub url: String,
    /// Fixed delay before each reconnect attempt.
    pub reconnect_delay: Duration,
    /// Reconnect attempts allowed after an unintended closure.
    pub max_reconnect_attempts: u32,
}

impl Default for QueueSettings {
    fn default() -> Self {
        QueueSettings {
            url: "ws://localhost:8000/ws/queue".to_string(),
            reconnect_delay: Duration::from_millis(3000),
            max_reconnect_attempts: 5,
        }
    }
}

/// Error type for queue client operations.
#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    /// The client was disconnected and cannot be reused.
    #[error("queue client was disconnected")]
    Disconnected,

    /// `run` was called before `connect`.
    #[error("queue client has no listener; call connect first")]
    NotConnected,
}

/// Result type for queue client operations.
pub type QueueResult<T> = Result<T, QueueError>;

/// State of the queue connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Idle: never connected, or gave up after the retry bound.
    Disconnected,
    /// Dialing the server.
    Connecting,
    /// Receiving snapshots.
    Open,
    /// Socket closed. Unintentional closes wait for a reconnect;
    /// intentional ones are terminal.
    Closed { intentional: bool },
}

type Listener = Box<dyn FnMut(&[QueueItem]) + Send>;

/// Cloneable trigger for [`QueueClient::disconnect`] from another task or
/// from inside a listener.
#[derive(Debug, Clone)]
pub struct DisconnectHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl DisconnectHandle {
    /// Requests an intentional close. Cancels a pending reconnect delay.
    pub fn disconnect(&self) {
        self.tx.send_replace(true);
    }
}

/// Why a read loop ended.
enum Closure {
    Intentional,
    Unintentional,
}

/// Queue client over a pluggable transport.
pub struct QueueClient<T: Transport = WebSocketTransport> {
    settings: QueueSettings,
    transport: T,
    state: ConnectionState,
    listeners: Vec<Listener>,
    reconnect_attempts: u32,
    shutdown_tx: Arc<watch::Sender<bool>>,
    shutdown_rx: watch::Receiver<bool>,
}

impl QueueClient<WebSocketTransport> {
    /// Create a client using the tokio-tungstenite transport.
    pub fn new(settings: QueueSettings) -> Self {
        Self::with_transport(settings, WebSocketTransport::new())
    }
}

impl<T: Transport> QueueClient<T> {
    /// Create a client with a custom transport (for testing).
    pub fn with_transport(settings: QueueSettings, transport: T) -> Self {
        let (tx, rx) = watch::channel(false);
        QueueClient {
            settings,
            transport,
            state: ConnectionState::Disconnected,
            listeners: Vec::new(),
            reconnect_attempts: 0,
            shutdown_tx: Arc::new(tx),
            shutdown_rx: rx,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Reconnect attempts since the last successful open.
    pub fn reconnect_attempts(&self) -> u32 {
        self.reconnect_attempts
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn disconnect_handle(&self) -> DisconnectHandle {
        DisconnectHandle {
            tx: Arc::clone(&self.shutdown_tx),
        }
    }

    fn stop_requested(&self) -> bool {
        *self.shutdown_rx.borrow()
    }

    /// Registers `listener` and moves an idle client to `Connecting`.
    ///
    /// The socket is dialed by [`run`](Self::run).
    pub fn connect(
        &mut self,
        listener: impl FnMut(&[QueueItem]) + Send + 'static,
    ) -> QueueResult<()> {
        if self.stop_requested() {
            return Err(QueueError::Disconnected);
        }
        self.listeners.push(Box::new(listener));
        if self.state == ConnectionState::Disconnected {
            self.reconnect_attempts = 0;
            self.state = ConnectionState::Connecting;
        }
        Ok(())
    }

    /// Closes the socket, drops all listeners and ends the client.
    pub async fn disconnect(&mut self) {
        self.shutdown_tx.send_replace(true);
        self.close_intentionally().await;
    }

    /// Drives the connection until it is disconnected or the retry bound is
    /// exhausted.
    ///
    /// Giving up is not an error: the client is left `Disconnected` and
    /// returns `Ok`.
    pub async fn run(&mut self) -> QueueResult<()> {
        match self.state {
            ConnectionState::Closed { intentional: true } => return Ok(()),
            ConnectionState::Disconnected => return Err(QueueError::NotConnected),
            _ => {}
        }

        loop {
            if self.stop_requested() {
                self.close_intentionally().await;
                return Ok(());
            }

            self.state = ConnectionState::Connecting;
            tracing::debug!(url = %self.settings.url, "dialing queue");
            let dialed = tokio::select! {
                biased;
                _ = stopped(&mut self.shutdown_rx) => None,
                result = self.transport.connect(&self.settings.url) => Some(result),
            };

            match dialed {
                None => {
                    self.close_intentionally().await;
                    return Ok(());
                }
                Some(Ok(())) => {
                    self.state = ConnectionState::Open;
                    self.reconnect_attempts = 0;
                    tracing::info!(url = %self.settings.url, "queue connected");
                    if let Closure::Intentional = self.read_until_closed().await {
                        self.close_intentionally().await;
                        return Ok(());
                    }
                }
                Some(Err(e)) => {
                    tracing::warn!(error = %e, url = %self.settings.url, "queue connection failed");
                }
            }

            self.state = ConnectionState::Closed { intentional: false };
            if self.reconnect_attempts >= self.settings.max_reconnect_attempts {
                tracing::warn!(
                    attempts = self.reconnect_attempts,
                    "giving up on queue connection"
                );
                self.state = ConnectionState::Disconnected;
                return Ok(());
            }

            let cancelled = tokio::select! {
                biased;
                _ = stopped(&mut self.shutdown_rx) => true,
                _ = tokio::time::sleep(self.settings.reconnect_delay) => false,
            };
            if cancelled {
                self.close_intentionally().await;
                return Ok(());
            }

            self.reconnect_attempts += 1;
            tracing::info!(
                attempt = self.reconnect_attempts,
                max = self.settings.max_reconnect_attempts,
                "reconnecting to queue"
            );
        }
    }

    async fn read_until_closed(&mut self) -> Closure {
        loop {
            let frame = tokio::select! {
                biased;
                _ = stopped(&mut self.shutdown_rx) => return Closure::Intentional,
                frame = self.transport.recv() => frame,
            };

            // A close racing a disconnect request is not a reason to reconnect
            if self.stop_requested() {
                return Closure::Intentional;
            }

            match frame {
                Ok(Some(text)) => self.dispatch(&text),
                Ok(None) => {
                    tracing::info!("queue connection closed by server");
                    return Closure::Unintentional;
                }
                Err(e) => {
                    tracing::warn!(error = %e, "queue connection lost");
                    return Closure::Unintentional;
                }
            }
        }
    }

    fn dispatch(&mut self, text: &str) {
        match parse_queue_frame(text) {
            Ok(items) => {
                tracing::debug!(items = items.len(), "queue snapshot");
                for listener in &mut self.listeners {
                    listener(&items);
                }
            }
            Err(e) => tracing::warn!(error = %e, "dropping queue frame"),
        }
    }

    async fn close_intentionally(&mut self) {
        if let Err(e) = self.transport.disconnect().await {
            tracing::debug!(error = %e, "error closing queue socket");
        }
        self.listeners.clear();
        self.reconnect_attempts = 0;
        self.state = ConnectionState::Closed { intentional: true };
        tracing::debug!("queue client disconnected");
    }
}

/// Resolves once a disconnect has been requested.
async fn stopped(rx: &mut watch::Receiver<bool>) {
    // Err means every sender is gone, which only happens with the client itself
    let _ = rx.wait_for(|stop| *stop).await;
}
