// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Integration tests for the ag-queue-sim binary.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::process::{Child, Command, Stdio};
use std::time::Duration;

use ag_core::protocol::parse_queue_frame;
use futures_util::StreamExt;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

/// Helper to spawn a server process and clean it up on drop.
struct ServerProcess {
    child: Child,
    port: u16,
}

impl ServerProcess {
    fn spawn() -> Self {
        // Use a port range that's less likely to conflict
        // Starting from a high ephemeral port
        let port = 49152 + (std::process::id() % 1000) as u16;

        let child = Command::new(env!("CARGO_BIN_EXE_ag-queue-sim"))
            .arg("--bind")
            .arg(format!("127.0.0.1:{}", port))
            .args(["--tick-ms", "50", "--job-every", "1"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("spawn server process");

        ServerProcess { child, port }
    }

    fn ws_url(&self) -> String {
        format!("ws://127.0.0.1:{}/ws/queue", self.port)
    }
}

impl Drop for ServerProcess {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

#[tokio::test]
async fn simulated_jobs_are_streamed() {
    let server = ServerProcess::spawn();

    // Wait for server to start and retry connection a few times
    // CI runners can be slow, so we use generous timeouts
    let mut ws_stream = None;
    for _ in 0..20 {
        if let Ok(Ok((stream, _))) =
            tokio::time::timeout(Duration::from_millis(500), connect_async(&server.ws_url())).await
        {
            ws_stream = Some(stream);
            break;
        }
        tokio::time::sleep(Duration::from_millis(200)).await;
    }

    let mut ws_stream = ws_stream.expect("should connect to server within retries");

    // The first frame is the snapshot; a job shows up within a few ticks
    for _ in 0..20 {
        let frame = tokio::time::timeout(Duration::from_secs(5), ws_stream.next()).await;
        match frame {
            Ok(Some(Ok(Message::Text(text)))) => {
                let items = parse_queue_frame(text.as_str()).expect("valid queue frame");
                if let Some(item) = items.first() {
                    assert!(item.id.starts_with("sim-"));
                    assert!(item.progress <= 100.0);
                    return;
                }
            }
            other => panic!("Expected a queue frame, got {:?}", other),
        }
    }
    panic!("no job appeared in the simulated queue");
}
