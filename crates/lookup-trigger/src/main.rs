//! lookup-trigger: hand a word to the running word-lookup window.
//!
//! Sends the word over the loopback command channel. When nothing is
//! listening, starts the GUI, waits for it to bind and retries once.
//! Exits 0 when the word was delivered, 1 otherwise.

mod launch;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use lookup_channel::send_word;
use lookup_common::ChannelError;
use lookup_config::schema::log_directives;
use lookup_config::LookupConfig;
use tracing_subscriber::EnvFilter;

/// Time given to a freshly started GUI to open its command port.
const LAUNCH_DELAY: Duration = Duration::from_millis(1200);

/// Word sent when none is given.
const DEFAULT_WORD: &str = "hello";

#[derive(Parser, Debug)]
#[command(
    name = "lookup-trigger",
    version,
    about = "Look up a word in word-lookup, starting it if needed"
)]
struct Args {
    /// Config file path override (also passed to a started GUI).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,

    /// Word to look up; several arguments are joined with spaces.
    words: Vec<String>,
}

impl Args {
    fn word(&self) -> String {
        if self.words.is_empty() {
            DEFAULT_WORD.to_string()
        } else {
            self.words.join(" ")
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let loaded = lookup_config::load_config(args.config.as_deref());
    let level = args.log_level.clone().unwrap_or_else(|| match &loaded {
        Ok(config) => config.logging.level.as_str().to_string(),
        Err(_) => "info".to_string(),
    });
    let mut filter = EnvFilter::from_default_env();
    for directive in log_directives(&level).split(',') {
        if let Ok(d) = directive.parse() {
            filter = filter.add_directive(d);
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config load failed, using defaults");
        LookupConfig::default()
    });

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "word not delivered");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &LookupConfig) -> Result<(), ChannelError> {
    let word = args.word();
    let addr = config.channel.socket_addr();
    let timeout = config.channel.connect_timeout();

    match send_word(addr, &word, timeout) {
        Ok(()) => {
            tracing::info!(word = %word.trim(), %addr, "word sent");
            return Ok(());
        }
        Err(ChannelError::EmptyWord) => return Err(ChannelError::EmptyWord),
        Err(e) => tracing::info!(error = %e, "no running instance, starting word-lookup"),
    }

    start_app(args)?;
    std::thread::sleep(LAUNCH_DELAY);

    retry(addr, &word, timeout)
}

fn start_app(args: &Args) -> Result<(), ChannelError> {
    let current_exe = std::env::current_exe().ok();
    let path = launch::resolve_app_path(
        std::env::var_os(launch::APP_PATH_ENV),
        current_exe.as_deref(),
    );
    launch::spawn_app(&path, args.config.as_deref()).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "failed to start word-lookup");
        ChannelError::Io(e)
    })
}

fn retry(addr: SocketAddr, word: &str, timeout: Duration) -> Result<(), ChannelError> {
    send_word(addr, word, timeout)?;
    tracing::info!(word = %word.trim(), %addr, "word sent after starting word-lookup");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_word_is_hello() {
        let args = Args::try_parse_from(["lookup-trigger"]).unwrap();
        assert_eq!(args.word(), "hello");
    }

    #[test]
    fn words_are_joined_with_spaces() {
        let args = Args::try_parse_from(["lookup-trigger", "ad", "hoc"]).unwrap();
        assert_eq!(args.word(), "ad hoc");
    }

    #[test]
    fn flags_do_not_become_words() {
        let args = Args::try_parse_from([
            "lookup-trigger",
            "--log-level",
            "debug",
            "--config",
            "/tmp/lookup.toml",
            "serendipity",
        ])
        .unwrap();
        assert_eq!(args.word(), "serendipity");
        assert_eq!(args.config, Some(PathBuf::from("/tmp/lookup.toml")));
    }

    #[test]
    fn blank_word_fails_without_launching() {
        let args = Args::try_parse_from(["lookup-trigger", "  "]).unwrap();
        let result = run(&args, &LookupConfig::default());
        assert!(matches!(result, Err(ChannelError::EmptyWord)));
    }

    #[test]
    fn delivers_to_a_listening_instance() {
        use std::io::Read;

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let mut config = LookupConfig::default();
        config.channel.port = port;
        let args = Args::try_parse_from(["lookup-trigger", "quixotic"]).unwrap();

        run(&args, &config).unwrap();

        let (mut stream, _) = listener.accept().unwrap();
        let mut received = String::new();
        stream.read_to_string(&mut received).unwrap();
        assert_eq!(received, "quixotic");
    }
}
