// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! Canvas interaction controller.
//!
//! `CanvasController` owns the surface, the icon loader, the equipment
//! registry, and the interaction state (focus, drag phase, context menu,
//! pending rename). Pointer input arrives through `handle_pointer`; menu
//! commands call the flow methods directly. Every operation runs to
//! completion before the next one starts, and any error leaves the previous
//! state in place.
//!
//! Menu commands act on the focus-fallback target: the focused equipment if
//! one has been pressed, otherwise the equipment icon nearest to the last
//! tracked pointer position.

use super::context_menu::{ContextAction, ContextMenu};
use super::focus::FocusState;
use super::prompt::{FilePrompt, PromptSlot, TextPrompt};
use super::registry::{EquipmentEntry, EquipmentRegistry};
use crate::error::CanvasError;
use crate::model::{EquipmentId, IconLoader, LinkSlot};
use crate::settings;
use crate::surface::{Binding, CanvasSurface, ItemHandle, ItemKind};
use kurbo::Point;

/// Pointer input in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    /// Pointer moved; `primary_held` is true during a primary-button drag
    Moved { position: Point, primary_held: bool },
    /// Primary button pressed (single click)
    Press(Point),
    /// Primary button released
    Release(Point),
    /// Second primary press of a double click
    DoubleClick(Point),
    /// Secondary button pressed
    SecondaryPress(Point),
}

/// A rename waiting for the text prompt to close
///
/// The target is kept by equipment id, since the surface may hand the same
/// handle to new equipment once the old one is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingRename {
    pub target: EquipmentId,
}

/// Request to dump the canvas to an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequest {
    /// Suggested file name, e.g. `netcanvas-20250102-030405.png`
    pub file_name: String,
    /// Number of equipment on the canvas
    pub equipment_count: usize,
}

/// Interprets pointer and menu events against the equipment registry
#[derive(Debug)]
pub struct CanvasController<S, L> {
    surface: S,
    loader: L,
    registry: EquipmentRegistry,
    focus: FocusState,
    menu: ContextMenu,
    rename: PromptSlot<PendingRename>,
}

impl<S: CanvasSurface, L: IconLoader> CanvasController<S, L> {
    pub fn new(surface: S, loader: L) -> Self {
        Self {
            surface,
            loader,
            registry: EquipmentRegistry::new(),
            focus: FocusState::new(),
            menu: ContextMenu::new(),
            rename: PromptSlot::new(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn registry(&self) -> &EquipmentRegistry {
        &self.registry
    }

    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    pub fn context_menu(&self) -> &ContextMenu {
        &self.menu
    }

    /// The rename waiting for text, if the prompt is open
    pub fn pending_rename(&self) -> Option<PendingRename> {
        self.rename.pending().copied()
    }

    // ============================================================================
    // INSERTION
    // ============================================================================

    /// Insert equipment of `kind` at the centre of the canvas.
    pub fn insert(&mut self, kind: &str) -> Result<(EquipmentId, ItemHandle), CanvasError> {
        let size = self.surface.size();
        let center = Point::new((size.width / 2.0).floor(), (size.height / 2.0).floor());
        self.insert_at(kind, center)
    }

    /// Insert equipment of `kind` centred on `center`.
    pub fn insert_at(
        &mut self,
        kind: &str,
        center: Point,
    ) -> Result<(EquipmentId, ItemHandle), CanvasError> {
        self.registry
            .insert(&mut self.surface, &self.loader, kind, center)
    }

    // ============================================================================
    // POINTER EVENTS
    // ============================================================================

    /// Route one pointer event.
    ///
    /// Presses only reach an equipment when an icon bound to that event is
    /// under the pointer; elsewhere they are ignored.
    pub fn handle_pointer(&mut self, input: PointerInput) -> Result<(), CanvasError> {
        match input {
            PointerInput::Moved {
                position,
                primary_held,
            } => {
                self.focus.track_pointer(position);
                if primary_held && let Some(handle) = self.focus.drag() {
                    self.continue_focus(handle, position)?;
                }
            }
            PointerInput::Press(point) => {
                self.menu.close();
                if let Some(handle) = self.surface.bound_item_at(point, Binding::PrimaryPress) {
                    self.start_focus(handle);
                }
            }
            PointerInput::Release(_) => {
                self.focus.release();
            }
            PointerInput::DoubleClick(point) => {
                self.menu.close();
                if self
                    .surface
                    .bound_item_at(point, Binding::PrimaryDoubleClick)
                    .is_some()
                {
                    self.delete_at(point)?;
                }
            }
            PointerInput::SecondaryPress(point) => {
                if self
                    .surface
                    .bound_item_at(point, Binding::SecondaryPress)
                    .is_some()
                {
                    self.open_context_menu(point);
                }
            }
        }
        Ok(())
    }

    /// Focus the pressed equipment.
    pub fn start_focus(&mut self, handle: ItemHandle) {
        tracing::debug!("Focus on item {}", handle);
        self.focus.press(handle);
    }

    /// Move a dragged equipment icon and its label to follow the pointer.
    ///
    /// The pointer is clamped to the canvas on the upper side only. The icon
    /// is placed by its top-left corner, offset by half the icon width on
    /// both axes; the label sits below and slightly left of the pointer.
    pub fn continue_focus(&mut self, handle: ItemHandle, pointer: Point) -> Result<(), CanvasError> {
        let label = self.registry.lookup(handle)?.label;
        let clamped = clamp_to_canvas(pointer, self.surface.size());
        let half = (settings::icon::SIZE / 2) as f64;

        self.surface
            .move_to(handle, Point::new(clamped.x - half, clamped.y - half));
        self.surface.move_to(
            label,
            Point::new(clamped.x - (half / 2.0).floor(), clamped.y + half),
        );
        Ok(())
    }

    /// Delete the equipment icon nearest to a double-click point.
    ///
    /// Labels are skipped, so an overlapping label of another equipment
    /// never shadows the icon under the pointer.
    pub fn delete_at(&mut self, point: Point) -> Result<EquipmentEntry, CanvasError> {
        let handle = self
            .surface
            .nearest_to(point, Some(ItemKind::Icon))
            .ok_or(CanvasError::NoTarget)?;
        let entry = self.registry.remove(&mut self.surface, handle)?;
        self.focus.forget(handle);
        Ok(entry)
    }

    pub fn open_context_menu(&mut self, anchor: Point) {
        tracing::debug!("Context menu at ({}, {})", anchor.x, anchor.y);
        self.menu.open(anchor);
    }

    // ============================================================================
    // MENU COMMANDS
    // ============================================================================

    /// The equipment a menu command should act on.
    pub fn resolve_target(&self) -> Result<ItemHandle, CanvasError> {
        if let Some(handle) = self.focus.focused() {
            return Ok(handle);
        }
        self.registry
            .nearest_to(&self.surface, self.focus.pointer())
            .ok_or(CanvasError::NoTarget)
    }

    /// Run a context menu entry. The menu closes whatever the outcome.
    pub fn run_context_action(
        &mut self,
        action: ContextAction,
        files: &mut impl FilePrompt,
    ) -> Result<(), CanvasError> {
        self.menu.close();
        match action {
            ContextAction::ChangeName => self.begin_rename().map(|_| ()),
            ContextAction::ChangeIcon => self.change_icon(files).map(|_| ()),
            ContextAction::CreateLink => self.request_link().map(|_| ()),
            ContextAction::LinkToThis => {
                tracing::debug!("Link completion is not available");
                Ok(())
            }
        }
    }

    /// Open the rename prompt for the current target.
    ///
    /// Fails with `PromptBusy` while another rename is waiting.
    pub fn begin_rename(&mut self) -> Result<ItemHandle, CanvasError> {
        if self.rename.is_open() {
            return Err(CanvasError::PromptBusy);
        }
        let target = self.resolve_target()?;
        let id = self
            .registry
            .id_of(target)
            .ok_or(CanvasError::UnknownHandle(target))?;
        self.rename.open(PendingRename { target: id })?;
        Ok(target)
    }

    /// Close the rename prompt, applying `text` as the new name.
    ///
    /// Empty text is a valid name. Returns the renamed icon handle, or `None`
    /// if no rename was waiting. Fails with `UnknownEquipment` if the target
    /// was deleted while the prompt was open.
    pub fn finish_rename(&mut self, text: &str) -> Result<Option<ItemHandle>, CanvasError> {
        let Some(PendingRename { target }) = self.rename.take() else {
            tracing::debug!("No rename waiting for text");
            return Ok(None);
        };
        let handle = self
            .registry
            .get(target)
            .ok_or(CanvasError::UnknownEquipment(target))?
            .icon;
        self.registry.rename(&mut self.surface, handle, text)?;
        Ok(Some(handle))
    }

    /// Rename the current target with a blocking prompt.
    pub fn rename_with(&mut self, prompt: &mut impl TextPrompt) -> Result<ItemHandle, CanvasError> {
        self.begin_rename()?;
        let text = prompt.prompt_text();
        self.finish_rename(&text)?.ok_or(CanvasError::NoTarget)
    }

    /// Ask for an image file and use it as the current target's icon.
    ///
    /// Returns `false` if the dialog was cancelled.
    pub fn change_icon(&mut self, files: &mut impl FilePrompt) -> Result<bool, CanvasError> {
        let target = self.resolve_target()?;
        self.registry.lookup(target)?;

        let Some(path) = files.prompt_file_path() else {
            tracing::debug!("Icon change cancelled");
            return Ok(false);
        };
        self.registry
            .change_icon(&mut self.surface, &self.loader, target, &path)?;
        Ok(true)
    }

    /// Start a link draft from the current target at the pointer position.
    pub fn request_link(&mut self) -> Result<(EquipmentId, LinkSlot), CanvasError> {
        let target = self.resolve_target()?;
        let id = self
            .registry
            .id_of(target)
            .ok_or(CanvasError::UnknownHandle(target))?;
        let slot = self.registry.begin_link_draft(id, self.focus.pointer())?;
        Ok((id, slot))
    }

    /// Ask for a rendering dump of the canvas.
    pub fn export(&self) -> ExportRequest {
        let request = ExportRequest {
            file_name: chrono::Local::now()
                .format("netcanvas-%Y%m%d-%H%M%S.png")
                .to_string(),
            equipment_count: self.registry.len(),
        };
        tracing::info!(
            "Export requested: {} ({} equipment)",
            request.file_name,
            request.equipment_count
        );
        request
    }
}

/// Clamp each axis to the canvas size from above.
fn clamp_to_canvas(point: Point, size: kurbo::Size) -> Point {
    Point::new(point.x.min(size.width), point.y.min(size.height))
}
