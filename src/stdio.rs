//! Framed stream transport
//!
//! Serves one newline-delimited JSON-RPC session over a bidirectional byte
//! stream, normally the process's stdin/stdout. The session starts with an
//! `initialize` handshake and then handles exactly one request at a time
//! until the stream closes.

use std::io;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::warn;

use crate::rpc::dispatcher::Dispatcher;
use crate::rpc::envelope::{JsonRpcError, JsonRpcRequest, JsonRpcResponse};

/// Maximum bytes per framed message (1 MiB).
const MAX_FRAME_BYTES: usize = 1024 * 1024;

pub struct StdioServer {
    dispatcher: Arc<Dispatcher>,
}

impl StdioServer {
    pub fn new(dispatcher: Arc<Dispatcher>) -> Self {
        Self { dispatcher }
    }

    pub async fn run(&self) -> io::Result<()> {
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Drive a full session over the given byte stream. Returns when the
    /// reader reaches end of stream or an I/O error occurs.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> io::Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut reader = BufReader::new(reader);
        let mut raw = Vec::new();
        let mut initialized = false;

        loop {
            raw.clear();
            let read = reader.read_until(b'\n', &mut raw).await?;
            if read == 0 {
                break;
            }

            if read > MAX_FRAME_BYTES {
                warn!(bytes = read, "oversized frame rejected");
                write_line(
                    &mut writer,
                    &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                )
                .await?;
                continue;
            }

            let Ok(text) = std::str::from_utf8(&raw) else {
                write_line(
                    &mut writer,
                    &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                )
                .await?;
                continue;
            };
            let trimmed = text.trim();
            if trimmed.is_empty() {
                continue;
            }

            let request: JsonRpcRequest = match serde_json::from_str(trimmed) {
                Ok(request) => request,
                Err(_) => {
                    write_line(
                        &mut writer,
                        &JsonRpcResponse::error(None, JsonRpcError::parse_error()),
                    )
                    .await?;
                    continue;
                }
            };

            // Only `initialize` may cross the wire before the handshake.
            if !initialized && request.method != "initialize" {
                if request.is_notification() {
                    continue;
                }
                write_line(
                    &mut writer,
                    &JsonRpcResponse::error(request.id, JsonRpcError::not_initialized()),
                )
                .await?;
                continue;
            }

            let was_initialize = request.method == "initialize";
            if let Some(response) = self.dispatcher.handle(request) {
                write_line(&mut writer, &response).await?;
            }
            if was_initialize {
                initialized = true;
            }
        }

        Ok(())
    }
}

async fn write_line<W>(writer: &mut W, response: &JsonRpcResponse) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let encoded = serde_json::to_string(response)?;
    writer.write_all(encoded.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await
}
