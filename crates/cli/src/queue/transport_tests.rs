// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the transport module.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use super::transport::{Transport, TransportError, TransportResult, WebSocketTransport};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

/// One scripted server event on an open connection.
#[derive(Debug, Clone)]
pub enum MockEvent {
    Frame(String),
    Close,
    Error,
}

#[derive(Default)]
struct Script {
    /// One entry per dial: `None` fails the dial.
    sessions: VecDeque<Option<VecDeque<MockEvent>>>,
    current: Option<VecDeque<MockEvent>>,
    dials: Vec<Instant>,
    disconnects: usize,
}

/// Mock transport replaying scripted connections.
///
/// Dials beyond the script fail. An open connection whose events are used
/// up stays idle until disconnected. Clones share the script.
#[derive(Clone, Default)]
pub struct MockTransport {
    script: Arc<Mutex<Script>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// The next dial fails.
    pub fn script_failure(&self) {
        self.script.lock().unwrap().sessions.push_back(None);
    }

    /// The next dial succeeds and then yields `events`.
    pub fn script_session(&self, events: Vec<MockEvent>) {
        self.script
            .lock()
            .unwrap()
            .sessions
            .push_back(Some(events.into()));
    }

    /// Instants at which `connect` was called.
    pub fn dials(&self) -> Vec<Instant> {
        self.script.lock().unwrap().dials.clone()
    }

    pub fn disconnects(&self) -> usize {
        self.script.lock().unwrap().disconnects
    }
}

enum Next {
    Ready(TransportResult<Option<String>>),
    Idle,
}

impl Transport for MockTransport {
    fn connect(
        &mut self,
        _url: &str,
    ) -> Pin<Box<dyn Future<Output = TransportResult<()>> + Send + '_>> {
        let result = {
            let mut script = self.script.lock().unwrap();
            script.dials.push(Instant::now());
            match script.sessions.pop_front().flatten() {
                Some(events) => {
                    script.current = Some(events);
                    Ok(())
                }
                None => Err(TransportError::ConnectionFailed("mock failure".into())),
            }
        };
        Box::pin(async move { result })
    }

    fn disconnect(&mut self) -> Pin<Box<dyn Future<Output = TransportResult<()>> + Send + '_>> {
        {
            let mut script = self.script.lock().unwrap();
            script.current = None;
            script.disconnects += 1;
        }
        Box::pin(async { Ok(()) })
    }

    fn recv(
        &mut self,
    ) -> Pin<Box<dyn Future<Output = TransportResult<Option<String>>> + Send + '_>> {
        let next = {
            let mut script = self.script.lock().unwrap();
            match script.current.as_mut().map(|events| events.pop_front()) {
                None => Next::Ready(Err(TransportError::ConnectionClosed)),
                Some(Some(MockEvent::Frame(text))) => Next::Ready(Ok(Some(text))),
                Some(Some(MockEvent::Close)) => {
                    script.current = None;
                    Next::Ready(Ok(None))
                }
                Some(Some(MockEvent::Error)) => {
                    script.current = None;
                    Next::Ready(Err(TransportError::ReceiveFailed("mock reset".into())))
                }
                Some(None) => Next::Idle,
            }
        };
        Box::pin(async move {
            match next {
                Next::Ready(result) => result,
                Next::Idle => std::future::pending().await,
            }
        })
    }

    fn is_connected(&self) -> bool {
        self.script.lock().unwrap().current.is_some()
    }
}

#[tokio::test]
async fn test_mock_transport_replays_session() {
    let mut transport = MockTransport::new();
    transport.script_session(vec![MockEvent::Frame("[]".into()), MockEvent::Close]);
    assert!(!transport.is_connected());

    transport.connect("ws://localhost:1234").await.unwrap();
    assert!(transport.is_connected());
    assert_eq!(transport.recv().await.unwrap().as_deref(), Some("[]"));
    assert_eq!(transport.recv().await.unwrap(), None);
    assert!(!transport.is_connected());
}

#[tokio::test]
async fn test_mock_transport_unscripted_dial_fails() {
    let mut transport = MockTransport::new();
    let err = transport.connect("ws://localhost:1234").await.unwrap_err();
    assert!(matches!(err, TransportError::ConnectionFailed(_)));
    assert_eq!(transport.dials().len(), 1);
}

#[tokio::test]
async fn test_mock_transport_error_drops_connection() {
    let mut transport = MockTransport::new();
    transport.script_session(vec![MockEvent::Error]);
    transport.connect("ws://localhost:1234").await.unwrap();

    assert!(matches!(
        transport.recv().await,
        Err(TransportError::ReceiveFailed(_))
    ));
    assert!(matches!(
        transport.recv().await,
        Err(TransportError::ConnectionClosed)
    ));
}

#[tokio::test]
async fn test_websocket_recv_without_connection() {
    let mut transport = WebSocketTransport::new();
    assert!(!transport.is_connected());
    assert!(matches!(
        transport.recv().await,
        Err(TransportError::ConnectionClosed)
    ));
    // Disconnecting an idle transport is a no-op
    transport.disconnect().await.unwrap();
}

#[tokio::test]
async fn test_websocket_connect_refused() {
    // Bind and drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut transport = WebSocketTransport::new();
    let err = transport
        .connect(&format!("ws://{}/ws/queue", addr))
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::ConnectionFailed(_)));
    assert!(!transport.is_connected());
}

#[tokio::test]
async fn test_websocket_secure_url_attempts_tls() {
    // A plain TCP peer that hangs up: the TLS handshake fails, but the
    // scheme itself must be supported
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        if let Ok((stream, _)) = listener.accept().await {
            drop(stream);
        }
    });

    let mut transport = WebSocketTransport::new();
    let err = transport
        .connect(&format!("wss://{}/ws/queue", addr))
        .await
        .unwrap_err();
    match err {
        TransportError::ConnectionFailed(message) => {
            assert!(!message.contains("TLS support not compiled in"), "{}", message);
        }
        other => panic!("Expected connection failure, got {:?}", other),
    }
    assert!(!transport.is_connected());
}
