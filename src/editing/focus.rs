// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! Single-selection focus and pointer tracking.
//!
//! Focus is the handle of the equipment icon most recently pressed with the
//! primary button. Menu commands act on it, or, when nothing has been pressed
//! yet, on whatever is nearest to the last pointer position seen by the
//! canvas-wide motion listener.

use crate::surface::ItemHandle;
use kurbo::Point;

/// Where a primary-button gesture currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    /// No primary press in progress
    #[default]
    Idle,
    /// Pressed on an equipment, not moved yet
    Pressed,
    /// Pressed and moving
    Dragging,
}

/// Focus, drag phase and last known pointer position
#[derive(Debug, Clone, Default)]
pub struct FocusState {
    focused: Option<ItemHandle>,
    phase: DragPhase,
    pointer: Point,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The focused handle, or `None` before any equipment was pressed
    pub fn focused(&self) -> Option<ItemHandle> {
        self.focused
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Last pointer position reported by motion events
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    pub fn track_pointer(&mut self, position: Point) {
        self.pointer = position;
    }

    /// Primary press on an equipment
    pub fn press(&mut self, handle: ItemHandle) {
        self.focused = Some(handle);
        self.phase = DragPhase::Pressed;
    }

    /// Motion with the primary button held. Returns the handle to move, if a
    /// press on an equipment started this gesture.
    pub fn drag(&mut self) -> Option<ItemHandle> {
        match self.phase {
            DragPhase::Idle => None,
            DragPhase::Pressed | DragPhase::Dragging => {
                self.phase = DragPhase::Dragging;
                self.focused
            }
        }
    }

    /// Primary button released; focus stays where it was.
    pub fn release(&mut self) {
        self.phase = DragPhase::Idle;
    }

    /// Forget the focused handle if it is `handle` (the item is gone).
    pub fn forget(&mut self, handle: ItemHandle) {
        if self.focused == Some(handle) {
            self.focused = None;
            self.phase = DragPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unfocused_and_idle() {
        let focus = FocusState::new();
        assert_eq!(focus.focused(), None);
        assert_eq!(focus.phase(), DragPhase::Idle);
        assert_eq!(focus.pointer(), Point::ZERO);
    }

    #[test]
    fn press_drag_release_cycle() {
        let mut focus = FocusState::new();
        let handle = ItemHandle(4);

        assert_eq!(focus.drag(), None);
        focus.press(handle);
        assert_eq!(focus.phase(), DragPhase::Pressed);
        assert_eq!(focus.drag(), Some(handle));
        assert_eq!(focus.phase(), DragPhase::Dragging);

        focus.release();
        assert_eq!(focus.phase(), DragPhase::Idle);
        assert_eq!(focus.focused(), Some(handle));
        assert_eq!(focus.drag(), None);
    }

    #[test]
    fn forget_only_clears_matching_handle() {
        let mut focus = FocusState::new();
        focus.press(ItemHandle(1));
        focus.forget(ItemHandle(2));
        assert_eq!(focus.focused(), Some(ItemHandle(1)));
        focus.forget(ItemHandle(1));
        assert_eq!(focus.focused(), None);
    }
}
