use std::fmt;

/// Lifecycle of the content view.
///
/// `NoView → Loading → Attached`, `Attached ⇄ Detached` around the source
/// manager dialog, and any state back to `NoView` when the renderer is lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// No content view exists.
    #[default]
    NoView,
    /// The view exists (hidden) and its first navigation is in flight.
    Loading,
    /// Visible below the toolbar.
    Attached,
    /// Exists but hidden while the modal dialog is open.
    Detached,
}

impl ViewState {
    /// Whether a content view instance currently exists.
    pub fn has_view(self) -> bool {
        !matches!(self, Self::NoView)
    }

    pub fn can_transition_to(self, next: ViewState) -> bool {
        use ViewState::*;
        matches!(
            (self, next),
            (_, NoView)
                | (NoView, Loading)
                | (Loading, Attached)
                | (Loading, Detached)
                | (Attached, Detached)
                | (Detached, Attached)
        )
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NoView => "no_view",
            Self::Loading => "loading",
            Self::Attached => "attached",
            Self::Detached => "detached",
        };
        f.write_str(s)
    }
}

/// Result of reporting a toolbar height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeightReport {
    /// Below the threshold or unchanged.
    Ignored,
    /// Stored. Carries the word queued before the toolbar was ready, if any.
    Applied { released_word: Option<String> },
}

impl HeightReport {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// What an accepted navigation request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Stored as the pending target until the view can be created.
    Queued,
    /// A view was created for it.
    Created,
    /// The existing view was navigated.
    Navigated,
}
