//! Server side of the command channel.

use std::io;
use std::net::SocketAddr;
use std::sync::mpsc::Sender;
use std::time::Duration;

use lookup_common::ChannelError;
use tokio::io::AsyncReadExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, info, warn};

/// Events delivered to the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEvent {
    /// A trimmed, non-empty lookup word.
    Word(String),
}

/// Pause after a failed `accept` before trying again.
const ACCEPT_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Per-connection guards.
#[derive(Debug, Clone, Copy)]
pub struct ListenerLimits {
    pub max_payload_bytes: usize,
    pub read_timeout: Duration,
}

impl Default for ListenerLimits {
    fn default() -> Self {
        Self {
            max_payload_bytes: 4096,
            read_timeout: Duration::from_secs(5),
        }
    }
}

/// A bound, not yet running, command listener.
///
/// Binding happens synchronously in [`CommandListener::bind`] so the caller
/// learns about an occupied port before any UI is shown.
pub struct CommandListener {
    listener: std::net::TcpListener,
    addr: SocketAddr,
    limits: ListenerLimits,
}

impl CommandListener {
    /// Bind `addr`. `AddrInUse` maps to [`ChannelError::AlreadyRunning`].
    pub fn bind(addr: SocketAddr, limits: ListenerLimits) -> Result<Self, ChannelError> {
        let listener = std::net::TcpListener::bind(addr).map_err(|source| {
            if source.kind() == io::ErrorKind::AddrInUse {
                ChannelError::AlreadyRunning(addr)
            } else {
                ChannelError::Bind { addr, source }
            }
        })?;
        listener.set_nonblocking(true)?;
        let addr = listener.local_addr()?;

        info!(%addr, "command channel bound");
        Ok(Self {
            listener,
            addr,
            limits,
        })
    }

    /// The actual bound address (differs from the requested one for port 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Accept connections until the runtime is shut down.
    ///
    /// Must be awaited inside a tokio runtime.
    pub async fn run(self, events: Sender<CommandEvent>) -> Result<(), ChannelError> {
        let listener = TcpListener::from_std(self.listener)?;
        let limits = self.limits;

        loop {
            let (stream, peer) = match listener.accept().await {
                Ok(conn) => conn,
                Err(e) => {
                    warn!(error = %e, "command channel accept failed");
                    tokio::time::sleep(ACCEPT_RETRY_DELAY).await;
                    continue;
                }
            };

            let events = events.clone();
            tokio::spawn(async move {
                match read_word(stream, limits).await {
                    Ok(Some(word)) => {
                        debug!(%peer, word = %word, "lookup word received");
                        if events.send(CommandEvent::Word(word)).is_err() {
                            debug!("command receiver gone, dropping word");
                        }
                    }
                    Ok(None) => debug!(%peer, "empty command ignored"),
                    Err(e) => warn!(%peer, error = %e, "command connection dropped"),
                }
            });
        }
    }
}

/// Read one payload until EOF, enforcing the size and idle limits.
async fn read_word(
    mut stream: TcpStream,
    limits: ListenerLimits,
) -> Result<Option<String>, ChannelError> {
    let mut buf = Vec::new();
    let mut limited = (&mut stream).take(limits.max_payload_bytes as u64 + 1);

    tokio::time::timeout(limits.read_timeout, limited.read_to_end(&mut buf))
        .await
        .map_err(|_| io::Error::new(io::ErrorKind::TimedOut, "peer did not close in time"))??;

    if buf.len() > limits.max_payload_bytes {
        return Err(ChannelError::PayloadTooLarge(limits.max_payload_bytes));
    }
    decode_word(&buf)
}

/// Decode a raw payload: strict UTF-8, surrounding whitespace trimmed.
/// Blank payloads yield `None`.
pub fn decode_word(bytes: &[u8]) -> Result<Option<String>, ChannelError> {
    let text = std::str::from_utf8(bytes).map_err(|_| ChannelError::InvalidUtf8)?;
    let word = text.trim();
    if word.is_empty() {
        Ok(None)
    } else {
        Ok(Some(word.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use tokio::io::AsyncWriteExt;

    fn loopback() -> SocketAddr {
        "127.0.0.1:0".parse().unwrap()
    }

    async fn next_event(
        rx: mpsc::Receiver<CommandEvent>,
    ) -> (Option<CommandEvent>, mpsc::Receiver<CommandEvent>) {
        tokio::task::spawn_blocking(move || {
            let event = rx.recv_timeout(Duration::from_secs(2)).ok();
            (event, rx)
        })
        .await
        .unwrap()
    }

    // The server may reset oversized connections, so write errors are ignored.
    async fn send_raw(addr: SocketAddr, payload: &[u8]) {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let _ = stream.write_all(payload).await;
        let _ = stream.shutdown().await;
    }

    #[test]
    fn decode_trims_whitespace() {
        assert_eq!(
            decode_word(b"  serendipity\r\n").unwrap(),
            Some("serendipity".to_string())
        );
        assert_eq!(decode_word("  café ".as_bytes()).unwrap(), Some("café".to_string()));
    }

    #[test]
    fn decode_blank_is_none() {
        assert_eq!(decode_word(b"").unwrap(), None);
        assert_eq!(decode_word(b" \t\n").unwrap(), None);
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        assert!(matches!(
            decode_word(&[0x66, 0xff, 0x6f]),
            Err(ChannelError::InvalidUtf8)
        ));
    }

    #[test]
    fn second_bind_reports_already_running() {
        let first = CommandListener::bind(loopback(), ListenerLimits::default()).unwrap();
        let addr = first.local_addr();

        let second = CommandListener::bind(addr, ListenerLimits::default());
        match second {
            Err(ChannelError::AlreadyRunning(reported)) => assert_eq!(reported, addr),
            Err(other) => panic!("expected AlreadyRunning, got {other}"),
            Ok(_) => panic!("expected AlreadyRunning, got a second listener"),
        }
    }

    #[tokio::test]
    async fn one_connection_delivers_one_trimmed_word() {
        let listener = CommandListener::bind(loopback(), ListenerLimits::default()).unwrap();
        let addr = listener.local_addr();
        let (tx, rx) = mpsc::channel();
        tokio::spawn(listener.run(tx));

        send_raw(addr, b"  serendipity\n").await;

        let (event, _rx) = next_event(rx).await;
        assert_eq!(event, Some(CommandEvent::Word("serendipity".into())));
    }

    #[tokio::test]
    async fn words_arrive_in_connection_order() {
        let listener = CommandListener::bind(loopback(), ListenerLimits::default()).unwrap();
        let addr = listener.local_addr();
        let (tx, rx) = mpsc::channel();
        tokio::spawn(listener.run(tx));

        send_raw(addr, b"first").await;
        let (event, rx) = next_event(rx).await;
        assert_eq!(event, Some(CommandEvent::Word("first".into())));

        send_raw(addr, b"second").await;
        let (event, _rx) = next_event(rx).await;
        assert_eq!(event, Some(CommandEvent::Word("second".into())));
    }

    #[tokio::test]
    async fn oversized_and_blank_payloads_are_dropped() {
        let limits = ListenerLimits {
            max_payload_bytes: 16,
            read_timeout: Duration::from_secs(1),
        };
        let listener = CommandListener::bind(loopback(), limits).unwrap();
        let addr = listener.local_addr();
        let (tx, rx) = mpsc::channel();
        tokio::spawn(listener.run(tx));

        send_raw(addr, &[b'x'; 64]).await;
        send_raw(addr, b"   ").await;
        send_raw(addr, &[0xc3, 0x28]).await;
        // Sent last so we know the earlier ones have been processed or dropped.
        tokio::time::sleep(Duration::from_millis(100)).await;
        send_raw(addr, b"ok").await;

        let (event, _rx) = next_event(rx).await;
        assert_eq!(event, Some(CommandEvent::Word("ok".into())));
    }

    #[tokio::test]
    async fn idle_connection_times_out_without_event() {
        let limits = ListenerLimits {
            max_payload_bytes: 64,
            read_timeout: Duration::from_millis(100),
        };
        let listener = CommandListener::bind(loopback(), limits).unwrap();
        let addr = listener.local_addr();
        let (tx, rx) = mpsc::channel();
        tokio::spawn(listener.run(tx));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream.write_all(b"never-finished").await.unwrap();
        tokio::time::sleep(Duration::from_millis(300)).await;
        drop(stream);

        let outcome =
            tokio::task::spawn_blocking(move || rx.recv_timeout(Duration::from_millis(300)))
                .await
                .unwrap();
        assert!(outcome.is_err());
    }

    #[test]
    fn accept_retry_delay_is_bounded() {
        assert!(ACCEPT_RETRY_DELAY > Duration::ZERO);
        assert!(ACCEPT_RETRY_DELAY < ListenerLimits::default().read_timeout);
    }
}
