// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! Canvas interaction model

pub mod context_menu;
pub mod controller;
pub mod focus;
pub mod links;
pub mod prompt;
pub mod registry;

#[cfg(test)]
pub(crate) mod test_support;

pub use context_menu::{ContextAction, ContextMenu};
pub use controller::{CanvasController, ExportRequest, PendingRename, PointerInput};
pub use focus::{DragPhase, FocusState};
pub use links::{LinkDraft, LinkDrafts};
pub use prompt::{FilePrompt, PromptSlot, RfdFilePicker, TextPrompt};
pub use registry::{EquipmentEntry, EquipmentRegistry};
