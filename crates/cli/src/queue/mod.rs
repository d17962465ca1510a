// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Live processing queue over WebSocket.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ QueueClient │────►│  Transport  │────►│ /ws/queue   │
//! │             │◄────│   (trait)   │◄────│  (server)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │  Listeners  │  (one call per snapshot)
//! └─────────────┘
//! ```
//!
//! # Features
//!
//! - Full-snapshot frames, parsed into `QueueItem` lists
//! - Malformed frames are logged and dropped
//! - Fixed-delay reconnect with a bounded attempt count
//! - Terminal disconnect, triggerable from any task
//! - Injectable transport trait for testing

mod client;
mod transport;

pub use client::{
    ConnectionState, DisconnectHandle, QueueClient, QueueError, QueueResult, QueueSettings,
};
pub use transport::{Transport, TransportError, TransportResult, WebSocketTransport};



#[cfg(test)]
pub(crate) mod transport_tests;
