//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{Key, ModifiersState};
use winit::window::WindowId;

use super::core::LookupApp;
use super::init::logical_size;

/// Application keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Shortcut {
    /// Ctrl/Cmd+M
    ManageSources,
    /// Ctrl/Cmd+R
    ReloadSources,
}

/// Map a key press to a shortcut. Ctrl and Cmd are interchangeable.
pub(super) fn shortcut_for(key: &Key, mods: ModifiersState) -> Option<Shortcut> {
    if !(mods.control_key() || mods.super_key()) || mods.alt_key() || mods.shift_key() {
        return None;
    }
    let Key::Character(c) = key else {
        return None;
    };
    match c.to_ascii_lowercase().as_str() {
        "m" => Some(Shortcut::ManageSources),
        "r" => Some(Shortcut::ReloadSources),
        _ => None,
    }
}

impl ApplicationHandler for LookupApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.handle_resize();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => self.handle_resize(),

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_and_schedule(event_loop);
    }
}

impl LookupApp {
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        match shortcut_for(&event.logical_key, self.modifiers) {
            Some(Shortcut::ManageSources) => self.open_manager(),
            Some(Shortcut::ReloadSources) => self.reload_sources(),
            None => {}
        }
    }

    /// Re-layout both views after the window size changed.
    fn handle_resize(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        let size = logical_size(window);

        if let Some(shell) = &self.shell_view {
            if let Err(e) = shell.set_bounds(size.to_rect()) {
                tracing::warn!(error = %e, "failed to resize shell view");
            }
        }
        if let Some(content) = self.content.as_mut() {
            content.on_window_resized(size.width, size.height);
        }
    }

    /// Hide the content view, then ask the shell to show the dialog.
    pub(super) fn open_manager(&mut self) {
        if let Some(content) = self.content.as_mut() {
            content.detach_for_modal();
        }
        self.send_to_shell("open_manager", &serde_json::Value::Null);
    }
}
