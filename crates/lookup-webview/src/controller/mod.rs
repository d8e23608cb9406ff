//! Content view lifecycle.
//!
//! [`ViewLifecycleController`] is the single owner of the content view. It
//! decides when the view is created (only once the shell reports a usable
//! toolbar height), when it becomes visible (after its first load), when it
//! hides for the modal dialog and when it is rebuilt after a renderer loss.
//! Requests that arrive too early are held in single-slot pending buffers
//! with last-write-wins semantics.

mod bounds;
mod host;
mod state;


pub use bounds::{content_bounds, ControllerSettings};
pub use host::ViewHost;
pub use state::{HeightReport, LoadOutcome, ViewState};

use lookup_common::{NavigationError, Rect, WindowSize};
use tracing::{debug, info, warn};

use crate::manager::validate_lookup_url;

/// Automatic recoveries allowed between explicit user navigations.
const RECOVERY_BUDGET: u8 = 1;

pub struct ViewLifecycleController<H: ViewHost> {
    host: H,
    settings: ControllerSettings,
    state: ViewState,
    toolbar_height: Option<f64>,
    window: WindowSize,
    pending_word: Option<String>,
    pending_url: Option<String>,
    last_url: Option<String>,
    modal_open: bool,
    recoveries_left: u8,
}

impl<H: ViewHost> ViewLifecycleController<H> {
    pub fn new(host: H, settings: ControllerSettings, window: WindowSize) -> Self {
        Self {
            host,
            settings,
            state: ViewState::NoView,
            toolbar_height: None,
            window,
            pending_word: None,
            pending_url: None,
            last_url: None,
            modal_open: false,
            recoveries_left: RECOVERY_BUDGET,
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn toolbar_height(&self) -> Option<f64> {
        self.toolbar_height
    }

    pub fn pending_word(&self) -> Option<&str> {
        self.pending_word.as_deref()
    }

    pub fn pending_url(&self) -> Option<&str> {
        self.pending_url.as_deref()
    }

    pub fn last_url(&self) -> Option<&str> {
        self.last_url.as_deref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn window_size(&self) -> WindowSize {
        self.window
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Current content rect, if the toolbar height is known.
    pub fn current_bounds(&self) -> Option<Rect> {
        self.toolbar_height
            .map(|h| content_bounds(self.window, h, self.settings.padding))
    }

    // =========================================================================
    // SHELL READINESS
    // =========================================================================

    /// Record the toolbar height measured by the shell page.
    ///
    /// The first usable height creates the view (issuing any pending URL)
    /// and releases a word queued before the shell was ready.
    pub fn report_toolbar_height(&mut self, height: f64) -> HeightReport {
        if !height.is_finite() || height < self.settings.min_toolbar_height {
            debug!(height, "toolbar height below threshold, ignored");
            return HeightReport::Ignored;
        }
        if self.toolbar_height == Some(height) {
            return HeightReport::Ignored;
        }

        debug!(height, state = %self.state, "toolbar height applied");
        self.toolbar_height = Some(height);

        match self.state {
            ViewState::NoView => {
                self.create_view();
            }
            ViewState::Attached => self.apply_bounds(),
            ViewState::Loading | ViewState::Detached => {}
        }

        HeightReport::Applied {
            released_word: self.pending_word.take(),
        }
    }

    /// Hold `word` until the shell is ready, or hand it back for delivery.
    pub fn queue_word(&mut self, word: impl Into<String>) -> Option<String> {
        let word = word.into();
        if self.toolbar_height.is_some() {
            return Some(word);
        }
        debug!(word = %word, "shell not ready, word queued");
        self.pending_word = Some(word);
        None
    }

    // =========================================================================
    // NAVIGATION
    // =========================================================================

    /// Request a navigation of the content view.
    ///
    /// Only absolute `http`/`https` URLs are accepted; a rejected URL leaves
    /// every piece of state untouched.
    pub fn load(&mut self, url: &str) -> Result<LoadOutcome, NavigationError> {
        if let Err(e) = validate_lookup_url(url) {
            warn!(url = %url, error = %e, "navigation rejected");
            return Err(e);
        }
        let url = url.trim().to_string();

        // An explicit request restores the automatic recovery budget.
        self.recoveries_left = RECOVERY_BUDGET;

        if !self.state.has_view() {
            self.pending_url = Some(url);
            if self.toolbar_height.is_some() && self.create_view() {
                return Ok(LoadOutcome::Created);
            }
            return Ok(LoadOutcome::Queued);
        }

        match self.host.navigate(&url) {
            Ok(()) => {
                info!(url = %url, "navigating content view");
                self.last_url = Some(url);
                Ok(LoadOutcome::Navigated)
            }
            Err(e) => {
                warn!(url = %url, error = %e, "navigation failed, treating view as lost");
                self.pending_url = Some(url);
                self.on_renderer_crashed();
                if self.state.has_view() {
                    Ok(LoadOutcome::Created)
                } else {
                    Ok(LoadOutcome::Queued)
                }
            }
        }
    }

    /// Initial navigation of the view completed.
    pub fn on_load_finished(&mut self) {
        if self.state == ViewState::Loading {
            self.attach();
        } else {
            debug!(state = %self.state, "load finished, attachment unchanged");
        }
    }

    /// Initial navigation failed. The view is still attached so the engine's
    /// error page is visible.
    pub fn on_load_failed(&mut self, reason: &str) {
        warn!(reason = %reason, url = ?self.last_url, "page load failed");
        self.on_load_finished();
    }

    // =========================================================================
    // MODAL
    // =========================================================================

    /// Hide the content view so the source manager dialog is not covered.
    pub fn detach_for_modal(&mut self) {
        self.modal_open = true;
        if self.state == ViewState::Attached {
            if let Err(e) = self.host.set_visible(false) {
                warn!(error = %e, "failed to hide content view");
            }
            self.set_state(ViewState::Detached);
        }
    }

    /// Show the same view instance again once the dialog has closed.
    pub fn modal_closed(&mut self) {
        self.modal_open = false;
        if self.state == ViewState::Detached {
            if let Err(e) = self.host.set_visible(true) {
                warn!(error = %e, "failed to show content view");
            }
            self.set_state(ViewState::Attached);
            self.apply_bounds();
        }
    }

    // =========================================================================
    // RECOVERY / LAYOUT
    // =========================================================================

    /// Drop the lost view and, within the recovery budget, rebuild it at
    /// the last known URL. Returns whether a new view was created.
    pub fn on_renderer_crashed(&mut self) -> bool {
        self.host.destroy();
        self.set_state(ViewState::NoView);

        if self.recoveries_left == 0 {
            warn!("content view lost again, not recovering automatically");
            return false;
        }

        let target = self.pending_url.clone().or_else(|| self.last_url.clone());
        let (Some(_), Some(url)) = (self.toolbar_height, target) else {
            info!("content view lost, nothing to restore yet");
            return false;
        };

        self.recoveries_left -= 1;
        info!(url = %url, "recreating content view after renderer loss");
        self.pending_url = Some(url);
        self.create_view()
    }

    pub fn on_window_resized(&mut self, width: f64, height: f64) {
        self.window = WindowSize::new(width, height);
        if self.state == ViewState::Attached {
            self.apply_bounds();
        }
    }

    /// Destroy the view on shutdown.
    pub fn teardown(&mut self) {
        if self.state.has_view() {
            self.host.destroy();
            self.set_state(ViewState::NoView);
        }
    }

    // =========================================================================
    // INTERNALS
    // =========================================================================

    fn create_view(&mut self) -> bool {
        let Some(bounds) = self.current_bounds() else {
            return false;
        };
        let url = self.pending_url.take();

        match self.host.create(bounds, url.as_deref()) {
            Ok(()) => {
                info!(url = ?url, ?bounds, "content view created");
                if url.is_some() {
                    self.last_url = url;
                }
                self.set_state(ViewState::Loading);
                true
            }
            Err(e) => {
                warn!(error = %e, "failed to create content view");
                self.pending_url = url;
                false
            }
        }
    }

    fn attach(&mut self) {
        if self.modal_open {
            self.set_state(ViewState::Detached);
            return;
        }
        if let Err(e) = self.host.set_visible(true) {
            warn!(error = %e, "failed to show content view");
        }
        self.set_state(ViewState::Attached);
        self.apply_bounds();
    }

    fn apply_bounds(&mut self) {
        if let Some(bounds) = self.current_bounds() {
            if let Err(e) = self.host.set_bounds(bounds) {
                warn!(error = %e, "failed to set content view bounds");
            }
        }
    }

    fn set_state(&mut self, next: ViewState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "invalid view transition {} -> {}",
            self.state,
            next
        );
        if self.state != next {
            debug!(from = %self.state, to = %next, "view state");
            self.state = next;
        }
    }
}
