// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! Application state and data structures

use crate::editing::{CanvasController, ContextAction, PointerInput, RfdFilePicker};
use crate::error::CanvasError;
use crate::model::{EquipmentKind, FileIconLoader};
use crate::settings;
use crate::surface::{DisplayList, ItemHandle};
use kurbo::Size;
use std::sync::Arc;
use xilem::WindowId;

/// The controller as wired into the application
pub type AppController = CanvasController<DisplayList, FileIconLoader>;

/// Main application state
pub struct AppState {
    /// Canvas, equipment registry and interaction state
    pub controller: AppController,

    /// Display list handed to the canvas widget, replaced after each change
    canvas: Arc<DisplayList>,

    /// Text currently typed into the rename prompt
    pub rename_text: String,

    /// Error message to display, if any
    pub error_message: Option<String>,

    /// Last informational message (export, link drafts)
    pub status_message: Option<String>,

    /// Whether the app should keep running
    pub running: bool,

    /// Main window ID (stable across rebuilds to prevent window
    /// recreation)
    pub main_window_id: WindowId,
}

impl AppState {
    /// Create an empty canvas loading default icons through `loader`
    pub fn new(loader: FileIconLoader) -> Self {
        let surface = DisplayList::new(Size::new(
            settings::canvas::WIDTH,
            settings::canvas::HEIGHT,
        ));
        Self {
            canvas: Arc::new(surface.clone()),
            controller: CanvasController::new(surface, loader),
            rename_text: String::new(),
            error_message: None,
            status_message: None,
            running: true,
            main_window_id: WindowId::next(),
        }
    }

    /// Snapshot of the display list for the canvas widget
    ///
    /// The same `Arc` is returned until the canvas changes, so the canvas
    /// view can skip unchanged rebuilds.
    pub fn canvas_snapshot(&self) -> Arc<DisplayList> {
        self.canvas.clone()
    }

    fn refresh_canvas(&mut self) {
        self.canvas = Arc::new(self.controller.surface().clone());
    }

    pub fn focused_item(&self) -> Option<ItemHandle> {
        self.controller.focus().focused()
    }

    pub fn is_rename_open(&self) -> bool {
        self.controller.pending_rename().is_some()
    }

    // ============================================================================
    // MENU BAR
    // ============================================================================

    pub fn insert_equipment(&mut self, kind: EquipmentKind) {
        let result = self.controller.insert(kind.as_str());
        self.report(result);
        self.refresh_canvas();
    }

    pub fn export_png(&mut self) {
        let request = self.controller.export();
        self.error_message = None;
        self.status_message = Some(format!(
            "Exported {} ({} equipment)",
            request.file_name, request.equipment_count
        ));
    }

    // ============================================================================
    // CANVAS
    // ============================================================================

    /// Forward canvas pointer input; ignored while the rename prompt is open
    pub fn handle_pointer(&mut self, input: PointerInput) {
        if self.is_rename_open() {
            return;
        }
        let result = self.controller.handle_pointer(input);
        self.report(result);
        // Hover motion only moves the tracked pointer
        if !matches!(
            input,
            PointerInput::Moved {
                primary_held: false,
                ..
            }
        ) {
            self.refresh_canvas();
        }
    }

    pub fn run_context_action(&mut self, action: ContextAction) {
        let result = self
            .controller
            .run_context_action(action, &mut RfdFilePicker);
        if self.report(result).is_none() {
            return;
        }
        match action {
            ContextAction::ChangeName => self.rename_text.clear(),
            ContextAction::ChangeIcon => self.refresh_canvas(),
            ContextAction::CreateLink => {
                self.status_message = Some("Link draft started".to_string());
            }
            ContextAction::LinkToThis => {}
        }
    }

    // ============================================================================
    // RENAME PROMPT
    // ============================================================================

    pub fn set_rename_text(&mut self, text: String) {
        self.rename_text = text;
    }

    /// Close the prompt, renaming its target to the typed text
    pub fn submit_rename(&mut self) {
        let text = std::mem::take(&mut self.rename_text);
        let result = self.controller.finish_rename(&text);
        self.report(result);
        self.refresh_canvas();
    }

    /// Log a failed operation and show it in the status line
    ///
    /// A successful operation clears the previous error.
    fn report<T>(&mut self, result: Result<T, CanvasError>) -> Option<T> {
        match result {
            Ok(value) => {
                self.error_message = None;
                Some(value)
            }
            Err(err) => {
                tracing::warn!("{}", err);
                self.error_message = Some(err.to_string());
                None
            }
        }
    }
}

/// Implement the Xilem AppState trait
impl xilem::AppState for AppState {
    fn keep_running(&self) -> bool {
        self.running
    }
}
