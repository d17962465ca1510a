// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `agv queue watch`: follow the live processing queue.

use std::io::{self, IsTerminal, Write};

use ag_core::QueueItem;
use crossterm::{cursor, terminal, QueueableCommand};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::format_queue;
use crate::error::{Error, Result};
use crate::queue::{ConnectionState, QueueClient, Transport, WebSocketTransport};

pub async fn watch(once: bool, output: OutputFormat) -> Result<()> {
    let config = Config::load()?;
    let redraw = output == OutputFormat::Text && !once && io::stdout().is_terminal();
    let client = QueueClient::<WebSocketTransport>::new(config.queue_settings());
    watch_with(client, once, output, redraw, io::stdout()).await
}

pub(crate) async fn watch_with<T, W>(
    mut client: QueueClient<T>,
    once: bool,
    output: OutputFormat,
    redraw: bool,
    out: W,
) -> Result<()>
where
    T: Transport + 'static,
    W: Write + Send + 'static,
{
    let handle = client.disconnect_handle();
    let mut renderer = Renderer::new(out, output, redraw);
    let listener_handle = handle.clone();
    client.connect(move |items: &[QueueItem]| {
        if let Err(e) = renderer.render(items) {
            tracing::warn!(error = %e, "failed to render queue snapshot");
        }
        if once {
            listener_handle.disconnect();
        }
    })?;

    let interrupt = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("interrupted, closing queue");
            handle.disconnect();
        }
    });
    let result = client.run().await;
    interrupt.abort();
    result?;

    if client.state() == ConnectionState::Disconnected {
        return Err(Error::QueueGaveUp {
            attempts: client.reconnect_attempts(),
        });
    }
    Ok(())
}

/// Writes snapshots to `out`. In redraw mode the previous snapshot is
/// erased first.
pub(crate) struct Renderer<W: Write> {
    out: W,
    output: OutputFormat,
    redraw: bool,
    drawn_lines: u16,
}

impl<W: Write> Renderer<W> {
    pub(crate) fn new(out: W, output: OutputFormat, redraw: bool) -> Self {
        Renderer {
            out,
            output,
            redraw,
            drawn_lines: 0,
        }
    }

    pub(crate) fn render(&mut self, items: &[QueueItem]) -> io::Result<()> {
        match self.output {
            OutputFormat::Json => {
                let line = serde_json::to_string(items).map_err(io::Error::other)?;
                writeln!(self.out, "{}", line)?;
            }
            OutputFormat::Text => {
                if self.redraw && self.drawn_lines > 0 {
                    self.out.queue(cursor::MoveUp(self.drawn_lines))?;
                    self.out
                        .queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;
                }
                let lines = format_queue(items);
                for line in &lines {
                    writeln!(self.out, "{}", line)?;
                }
                if !self.redraw {
                    writeln!(self.out)?;
                }
                self.drawn_lines = u16::try_from(lines.len()).unwrap_or(u16::MAX);
            }
        }
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
