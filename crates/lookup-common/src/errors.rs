use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("sources file error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("sources serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("address {0} already in use, another instance is probably running")]
    AlreadyRunning(SocketAddr),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to connect to {addr}: {source}")]
    Connect {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("refusing to send an empty word")]
    EmptyWord,

    #[error("payload exceeds {0} bytes")]
    PayloadTooLarge(usize),

    #[error("payload is not valid UTF-8")]
    InvalidUtf8,

    #[error("channel io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("empty navigation target")]
    Empty,

    #[error("malformed url {url:?}: {reason}")]
    Malformed { url: String, reason: String },

    #[error("scheme {scheme:?} is not allowed (only http and https)")]
    SchemeNotAllowed { scheme: String },

    #[error("url {0:?} has no host")]
    MissingHost(String),
}

#[derive(Debug, thiserror::Error)]
pub enum WebViewError {
    #[error("no window available to host the webview")]
    NoWindow,

    #[error("webview not created")]
    NotCreated,

    #[error("webview backend error: {0}")]
    Backend(String),
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Channel(#[from] ChannelError),

    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error(transparent)]
    WebView(#[from] WebViewError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("port must not be 0".into());
        assert_eq!(err.to_string(), "config validation error: port must not be 0");
    }

    #[test]
    fn channel_error_display() {
        let addr: SocketAddr = "127.0.0.1:5050".parse().unwrap();
        let err = ChannelError::AlreadyRunning(addr);
        assert_eq!(
            err.to_string(),
            "address 127.0.0.1:5050 already in use, another instance is probably running"
        );
        assert_eq!(ChannelError::PayloadTooLarge(4096).to_string(), "payload exceeds 4096 bytes");
    }

    #[test]
    fn navigation_error_display() {
        let err = NavigationError::SchemeNotAllowed {
            scheme: "file".into(),
        };
        assert_eq!(
            err.to_string(),
            "scheme \"file\" is not allowed (only http and https)"
        );
        assert_eq!(NavigationError::Empty.to_string(), "empty navigation target");
    }

    #[test]
    fn lookup_error_from_channel() {
        let lookup_err: LookupError = ChannelError::EmptyWord.into();
        assert!(matches!(lookup_err, LookupError::Channel(_)));
        assert!(lookup_err.to_string().contains("empty word"));
    }

    #[test]
    fn lookup_error_from_source_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = SourceError::Io {
            path: PathBuf::from("/tmp/sources.json"),
            source: io_err,
        };
        let lookup_err: LookupError = err.into();
        assert!(matches!(lookup_err, LookupError::Source(_)));
        assert!(lookup_err.to_string().contains("/tmp/sources.json"));
    }

    #[test]
    fn lookup_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let lookup_err: LookupError = io_err.into();
        assert!(matches!(lookup_err, LookupError::Io(_)));
        assert!(lookup_err.to_string().contains("file missing"));
    }

    #[test]
    fn lookup_error_other() {
        let err = LookupError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
