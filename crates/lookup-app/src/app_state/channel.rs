//! Command channel startup and the single-instance policy.

use std::sync::mpsc;

use lookup_channel::{CommandEvent, CommandListener, ListenerLimits};
use lookup_common::ChannelError;
use winit::event_loop::ActiveEventLoop;

use super::core::LookupApp;
use super::types::FORCED_EXIT_DELAY;

impl LookupApp {
    /// Bind the command port and start accepting words.
    ///
    /// Returns `false` when this process must not continue: another instance
    /// owns the port, or the port could not be bound at all.
    pub(super) fn start_command_channel(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let channel = &self.config.channel;
        let limits = ListenerLimits {
            max_payload_bytes: channel.max_payload_bytes,
            read_timeout: channel.read_timeout(),
        };

        let listener = match CommandListener::bind(channel.socket_addr(), limits) {
            Ok(listener) => listener,
            Err(ChannelError::AlreadyRunning(addr)) => {
                tracing::warn!(%addr, "another instance is already running, exiting");
                self.exit_code = 1;
                event_loop.exit();
                spawn_forced_exit();
                return false;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to start command channel");
                self.exit_code = 1;
                event_loop.exit();
                return false;
            }
        };

        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("lookup-channel")
            .enable_all()
            .build();

        let rt = match rt {
            Ok(rt) => rt,
            Err(e) => {
                tracing::error!(error = %e, "failed to create tokio runtime");
                self.exit_code = 1;
                event_loop.exit();
                return false;
            }
        };

        let (tx, rx) = mpsc::channel();
        let addr = listener.local_addr();
        rt.spawn(async move {
            if let Err(e) = listener.run(tx).await {
                tracing::error!(error = %e, "command channel stopped");
            }
        });

        tracing::info!(%addr, "command channel listening");
        self.command_rx = Some(rx);
        self.tokio_runtime = Some(rt);
        true
    }

    /// Drain words delivered over the command channel.
    pub(super) fn poll_commands(&mut self) {
        let Some(rx) = self.command_rx.as_ref() else {
            return;
        };
        let events: Vec<CommandEvent> = rx.try_iter().collect();

        for event in events {
            match event {
                CommandEvent::Word(word) => {
                    tracing::info!(word = %word, "word received over command channel");
                    self.receive_word(word);
                }
            }
        }
    }

    /// Deliver an external word now, or hold it until the shell is ready.
    pub(super) fn receive_word(&mut self, word: String) {
        let Some(content) = self.content.as_mut() else {
            return;
        };
        if let Some(word) = content.queue_word(word) {
            self.deliver_word(&word);
        }
    }

    /// Put `word` into the search box and look it up with the selected source.
    pub(super) fn deliver_word(&mut self, word: &str) {
        self.send_to_shell("lookup_word", &serde_json::json!(word));
        self.lookup(word, None);
        if let Some(window) = &self.window {
            window.focus_window();
        }
    }
}

/// Force the process down if the graceful exit stalls.
fn spawn_forced_exit() {
    let spawned = std::thread::Builder::new()
        .name("forced-exit".into())
        .spawn(|| {
            std::thread::sleep(FORCED_EXIT_DELAY);
            tracing::warn!("graceful exit timed out, forcing exit");
            std::process::exit(1);
        });
    if let Err(e) = spawned {
        tracing::error!(error = %e, "failed to spawn exit watchdog, exiting now");
        std::process::exit(1);
    }
}
