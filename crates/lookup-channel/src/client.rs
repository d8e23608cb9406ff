//! Client side of the command channel, used by `lookup-trigger`.

use std::io::Write;
use std::net::{Shutdown, SocketAddr, TcpStream};
use std::time::Duration;

use lookup_common::ChannelError;
use tracing::debug;

/// Deliver `word` to the instance listening on `addr`.
///
/// Connects with `timeout`, writes the trimmed word and closes the write half
/// so the server sees EOF. There is no acknowledgment: `Ok` only means the
/// bytes were handed to the kernel.
pub fn send_word(addr: SocketAddr, word: &str, timeout: Duration) -> Result<(), ChannelError> {
    let word = word.trim();
    if word.is_empty() {
        return Err(ChannelError::EmptyWord);
    }

    let mut stream = TcpStream::connect_timeout(&addr, timeout)
        .map_err(|source| ChannelError::Connect { addr, source })?;
    stream.set_write_timeout(Some(timeout))?;
    stream.write_all(word.as_bytes())?;
    stream.shutdown(Shutdown::Write)?;

    debug!(%addr, len = word.len(), "word sent");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use std::net::TcpListener;

    #[test]
    fn blank_word_is_rejected_without_connecting() {
        // Port 9 (discard) is almost never open on loopback; we must not even try.
        let addr: SocketAddr = "127.0.0.1:9".parse().unwrap();
        let result = send_word(addr, "   \n", Duration::from_millis(100));
        assert!(matches!(result, Err(ChannelError::EmptyWord)));
    }

    #[test]
    fn connection_refused_is_connect_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = send_word(addr, "hello", Duration::from_millis(200));
        assert!(matches!(result, Err(ChannelError::Connect { .. })));
    }

    #[test]
    fn sends_trimmed_word_and_closes() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let server = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut received = String::new();
            stream.read_to_string(&mut received).unwrap();
            received
        });

        send_word(addr, "  serendipity \n", Duration::from_secs(1)).unwrap();
        assert_eq!(server.join().unwrap(), "serendipity");
    }
}
