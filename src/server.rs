//! Line-based TCP listener.
//!
//! Each connection carries one request: text terminated by a literal `<EOF>`
//! marker. The text before the marker is corrected and the answer is written
//! back, after which the connection is closed.

use std::io::{Read, Write};
use std::net::{Shutdown, SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::{debug, info, warn};

use crate::corrector::Corrector;
use crate::error::{Result, SpellError};

pub const EOF_MARKER: &str = "<EOF>";

/// Upper bound on a request still waiting for its `<EOF>` marker.
pub const MAX_REQUEST_BYTES: usize = 64 * 1024;

/// How long a connection may stay silent before its `<EOF>` arrives.
pub const READ_TIMEOUT: Duration = Duration::from_secs(30);

const BUFFER_SIZE: usize = 1024;

pub struct Server {
    listener: TcpListener,
    corrector: Arc<Corrector>,
    read_timeout: Duration,
}

impl Server {
    pub fn bind(addr: impl ToSocketAddrs, corrector: Arc<Corrector>) -> Result<Self> {
        let listener = TcpListener::bind(addr)?;
        Ok(Self {
            listener,
            corrector,
            read_timeout: READ_TIMEOUT,
        })
    }

    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept connections forever, one thread per connection.
    pub fn run(self) -> Result<()> {
        info!("Listening on {}", self.local_addr()?);

        for stream in self.listener.incoming() {
            let stream = match stream {
                Ok(stream) => stream,
                Err(err) => {
                    warn!("Failed to accept connection: {err}");
                    continue;
                }
            };

            let corrector = Arc::clone(&self.corrector);
            let read_timeout = self.read_timeout;
            thread::spawn(move || {
                let peer = stream.peer_addr().ok();
                if let Err(err) = serve_connection(stream, &corrector, read_timeout) {
                    warn!("Connection {peer:?} failed: {err}");
                }
            });
        }
        Ok(())
    }
}

fn serve_connection(mut stream: TcpStream, corrector: &Corrector, read_timeout: Duration) -> Result<()> {
    debug!("Accepted connection from {:?}", stream.peer_addr().ok());
    stream.set_read_timeout(Some(read_timeout))?;
    handle(&mut stream, corrector)?;
    stream.shutdown(Shutdown::Both)?;
    Ok(())
}

/// Read one request from `stream` and write its answer.
///
/// A client that disconnects before sending the marker gets no answer.
pub fn handle<S: Read + Write>(stream: &mut S, corrector: &Corrector) -> Result<()> {
    let Some(request) = read_request(stream)? else {
        debug!("Client closed the connection before {EOF_MARKER}");
        return Ok(());
    };
    debug!("Read request: {request:?}");

    let response = corrector.answer(&request);
    stream.write_all(response.as_bytes())?;
    stream.flush()?;
    debug!("Sent {} bytes", response.len());
    Ok(())
}

/// Accumulate bytes until the `<EOF>` marker and return the text before it.
pub fn read_request<R: Read>(reader: &mut R) -> Result<Option<String>> {
    let mut data: Vec<u8> = Vec::new();
    let mut buffer = [0u8; BUFFER_SIZE];

    loop {
        let read = reader.read(&mut buffer)?;
        if read == 0 {
            return Ok(None);
        }
        data.extend_from_slice(&buffer[..read]);

        let content = String::from_utf8_lossy(&data);
        if let Some(end) = content.find(EOF_MARKER) {
            return Ok(Some(content[..end].to_string()));
        }
        if data.len() > MAX_REQUEST_BYTES {
            return Err(SpellError::RequestTooLarge(MAX_REQUEST_BYTES));
        }
    }
}
