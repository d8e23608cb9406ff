//! LookupApp struct definition and constructor.

use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::sync::Arc;

use lookup_channel::CommandEvent;
use lookup_config::{sources, LookupConfig};
use lookup_webview::{WebViewHandle, WebViewManager};
use winit::keyboard::ModifiersState;
use winit::window::Window;

use super::shell::ShellState;
use super::types::ContentController;

/// Top-level application state.
pub struct LookupApp {
    pub(super) config: LookupConfig,
    pub(super) sources_path: PathBuf,
    pub(super) shell: ShellState,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) modifiers: ModifiersState,

    // Views
    pub(super) webviews: WebViewManager,
    pub(super) shell_view: Option<WebViewHandle>,
    pub(super) content: Option<ContentController>,

    // Command channel
    pub(super) command_rx: Option<Receiver<CommandEvent>>,
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    pub(super) exit_code: i32,
}

impl LookupApp {
    pub fn new(config: LookupConfig, sources_path: PathBuf) -> Self {
        let shell = ShellState::new(sources::load(&sources_path));
        tracing::info!(count = shell.sources().len(), "sources loaded");
        Self {
            config,
            sources_path,
            shell,
            window: None,
            modifiers: ModifiersState::empty(),
            webviews: WebViewManager::default(),
            shell_view: None,
            content: None,
            command_rx: None,
            tokio_runtime: None,
            exit_code: 0,
        }
    }

    /// Process exit code once the event loop has returned.
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }
}
