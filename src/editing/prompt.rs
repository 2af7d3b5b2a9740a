// Copyright 2025 the NetCanvas Authors
// SPDX-License-Identifier: Apache-2.0

//! Modal prompts used by the rename and icon-change flows.
//!
//! Text entry can run either as a blocking call (`TextPrompt`) or as a
//! continuation: the controller parks the pending request in a `PromptSlot`,
//! the UI shows a text field, and the submitted text resumes exactly that
//! request. A slot holds at most one request, so a second prompt cannot open
//! while the first is still waiting.

use crate::error::CanvasError;
use std::path::PathBuf;

/// Blocking text entry
pub trait TextPrompt {
    /// Ask for a line of text. There is no cancel: whatever the field holds
    /// when the prompt closes is the answer.
    fn prompt_text(&mut self) -> String;
}

/// Blocking file selection
pub trait FilePrompt {
    /// Ask for a file. `None` means the user cancelled.
    fn prompt_file_path(&mut self) -> Option<PathBuf>;
}

/// Holder for the single in-flight prompt request
#[derive(Debug, Clone)]
pub struct PromptSlot<T> {
    pending: Option<T>,
}

impl<T> PromptSlot<T> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    /// Park a request, failing if one is already waiting.
    pub fn open(&mut self, request: T) -> Result<(), CanvasError> {
        if self.pending.is_some() {
            return Err(CanvasError::PromptBusy);
        }
        self.pending = Some(request);
        Ok(())
    }

    /// Resume the waiting request, if any.
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }
}

impl<T> Default for PromptSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Native file dialog for picking a replacement icon
#[derive(Debug, Clone, Copy, Default)]
pub struct RfdFilePicker;

impl FilePrompt for RfdFilePicker {
    fn prompt_file_path(&mut self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Choose Icon")
            .add_filter("Images", &["png", "jpg", "jpeg", "gif", "bmp"])
            .pick_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_holds_one_request() {
        let mut slot = PromptSlot::new();
        assert!(!slot.is_open());

        slot.open(1).unwrap();
        assert!(slot.is_open());
        assert_eq!(slot.open(2), Err(CanvasError::PromptBusy));
        assert_eq!(slot.pending(), Some(&1));

        assert_eq!(slot.take(), Some(1));
        assert_eq!(slot.take(), None);
        slot.open(3).unwrap();
        assert_eq!(slot.pending(), Some(&3));
    }
}
