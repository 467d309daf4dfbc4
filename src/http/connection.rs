use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::time::timeout;

use crate::handler::Handler;
use crate::http::parser::{self, ParseError};
use crate::http::request::Request;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Upper bound on unread input discarded after the response is sent.
const LINGER_MAX_BYTES: usize = 1024 * 1024;
/// How long to wait for the peer to close once our side is shut down.
const LINGER_TIMEOUT: Duration = Duration::from_secs(2);

/// Per-connection resource bounds.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionLimits {
    /// Deadline for reading the whole request, head and body.
    pub read_timeout: Duration,
    /// Deadline for writing the whole response.
    pub write_timeout: Duration,
    pub max_head_bytes: usize,
    pub max_body_bytes: usize,
}

impl Default for ConnectionLimits {
    fn default() -> Self {
        Self {
            read_timeout: Duration::from_secs(10),
            write_timeout: Duration::from_secs(10),
            max_head_bytes: 8 * 1024,
            max_body_bytes: 8 * 1024 * 1024,
        }
    }
}

pub struct Connection<S> {
    stream: BufReader<S>,
    handler: Arc<Handler>,
    limits: ConnectionLimits,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, handler: Arc<Handler>, limits: ConnectionLimits) -> Self {
        Self {
            stream: BufReader::new(stream),
            handler,
            limits,
            state: ConnectionState::Reading,
        }
    }

    /// Drives one request-response exchange to completion.
    ///
    /// Returns an error when the stream breaks or a deadline passes; in
    /// that case nothing is written back.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    let read = timeout(self.limits.read_timeout, self.read_request())
                        .await
                        .context("timed out reading request")?;

                    self.state = match read {
                        Ok(req) => ConnectionState::Processing(req),
                        Err(e) if e.is_client_error() => {
                            tracing::warn!(error = %e, "Rejecting malformed request");
                            ConnectionState::Writing(ResponseWriter::new(&Response::bad_request()))
                        }
                        Err(e) => return Err(e).context("failed to read request"),
                    };
                }

                ConnectionState::Processing(req) => {
                    let response = self.handler.handle(&req).await;

                    tracing::info!(
                        method = ?req.method,
                        path = %req.path,
                        status = response.status.as_u16(),
                        "Request handled"
                    );

                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(mut writer) => {
                    timeout(
                        self.limits.write_timeout,
                        writer.write_to_stream(self.stream.get_mut()),
                    )
                    .await
                    .context("timed out writing response")??;

                    self.linger().await;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Half-closes the stream, then discards whatever the peer still has
    /// in flight until it closes too.
    ///
    /// A socket closed with unread input is reset, and the reset can discard
    /// a response the client has not read yet. Rejected requests usually
    /// leave input behind.
    async fn linger(&mut self) {
        if let Err(e) = self.stream.get_mut().shutdown().await {
            tracing::debug!(error = %e, "Shutdown after response failed");
            return;
        }

        let stream = &mut self.stream;
        let drain = async move {
            let mut sink = [0u8; 4096];
            let mut drained = 0;
            while drained < LINGER_MAX_BYTES {
                match stream.read(&mut sink).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => drained += n,
                }
            }
            drained
        };

        match timeout(LINGER_TIMEOUT, drain).await {
            Ok(drained) if drained > 0 => {
                tracing::debug!(drained, "Discarded unread request bytes");
            }
            Ok(_) => {}
            Err(_) => tracing::debug!("Peer did not close after response"),
        }
    }

    /// Reads the request line, headers and body off the stream.
    pub async fn read_request(&mut self) -> Result<Request, ParseError> {
        let head = parser::read_request_head(&mut self.stream, self.limits.max_head_bytes).await?;
        let line = parser::parse_request_line(&head.line)?;
        let body = parser::read_body(&mut self.stream, &head.headers, self.limits.max_body_bytes).await?;

        Ok(Request::from_parts(&line, head.headers, body))
    }
}
